//! One-way notifications from the rename worker to whoever drives it.

use std::sync::mpsc::Sender;

/// Receives progress from a running walk.
///
/// Implementations must not block the worker.
pub trait RenameObserver {
    fn on_wait_started(&self);
    /// Integer percentage, 0-100
    fn on_progress(&self, percent: u8);
    fn on_done(&self);
    fn on_error(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameEvent {
    WaitStarted,
    Progress(u8),
    Done,
    Error,
}

/// Forwards every notification into an mpsc channel.
///
/// A controller that has already gone away is not an error; events are simply
/// dropped.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: Sender<RenameEvent>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<RenameEvent>) -> Self {
        Self { sender }
    }

    fn emit(&self, event: RenameEvent) {
        let _ = self.sender.send(event);
    }
}

impl RenameObserver for ChannelObserver {
    fn on_wait_started(&self) {
        self.emit(RenameEvent::WaitStarted);
    }

    fn on_progress(&self, percent: u8) {
        self.emit(RenameEvent::Progress(percent));
    }

    fn on_done(&self) {
        self.emit(RenameEvent::Done);
    }

    fn on_error(&self) {
        self.emit(RenameEvent::Error);
    }
}
