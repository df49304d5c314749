//! Progress reporting while a narration request runs.

use echoverse::Lifecycle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Print each busy lifecycle state to stderr as it is published.
///
/// The task ends when the orchestrator (and its sender) is dropped.
pub fn spawn_progress_reporter(mut receiver: watch::Receiver<Lifecycle>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let state = receiver.borrow_and_update().clone();
            if state.is_busy() {
                eprintln!("{}...", state);
            }
        }
    })
}
