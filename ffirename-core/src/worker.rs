use crate::cancel::StopFlag;
use crate::error::{RenameError, Result};
use crate::observer::RenameObserver;
use crate::walker::{Renamer, WalkSummary};
use std::thread::{self, JoinHandle};

const WORKER_NAME: &str = "ffirename-worker";

/// Run `renamer` on its own thread.
///
/// All communication back goes through `observer`. Callers may drop the
/// handle and exit without joining.
pub fn spawn<O>(
    renamer: Renamer,
    observer: O,
    stop: StopFlag,
) -> Result<JoinHandle<Result<WalkSummary>>>
where
    O: RenameObserver + Send + 'static,
{
    let source = renamer.source().to_path_buf();
    thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .spawn(move || renamer.run(&observer, &stop))
        .map_err(|e| RenameError::io(source, e))
}
