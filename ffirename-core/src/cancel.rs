use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative stop request shared between the controller and the worker.
///
/// The worker only looks at it between directory entries, so a copy that is
/// already running always finishes.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the worker to stop before its next entry.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = StopFlag::new();
        let worker_side = flag.clone();
        assert!(!worker_side.is_stopped());

        flag.request_stop();
        assert!(worker_side.is_stopped());

        // Repeated requests are harmless
        flag.request_stop();
        assert!(worker_side.is_stopped());
    }

    #[test]
    fn test_stop_from_another_thread() {
        let flag = StopFlag::new();
        let remote = flag.clone();
        std::thread::spawn(move || remote.request_stop())
            .join()
            .unwrap();
        assert!(flag.is_stopped());
    }
}
