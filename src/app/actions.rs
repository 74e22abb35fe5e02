//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event and
//! the plugin shim executes them in order. Keeping effects out of the handler
//! lets it run (and be tested) outside Zellij.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread (deck loading,
    /// preference storage).
    PostToWorker(WorkerMessage),

    /// Arms a timer for the next animation frame. The resulting `Timer`
    /// event comes back as `Event::Frame`.
    ScheduleFrame,
}
