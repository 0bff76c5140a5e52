//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or system events.
//! Actions bridge pure state transformations and effectful operations like
//! opening an external link, scheduling a timer, or communicating with the
//! background worker.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes them in sequence.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Used for the one-shot catalog load so file I/O never blocks the main
    /// event loop.
    PostToWorker(WorkerMessage),

    /// Opens an external link on the host.
    ///
    /// Emitted by the interest action when a WhatsApp phone number is
    /// configured; the URL is already percent-encoded.
    OpenLink {
        /// Fully formed deep link.
        url: String,
    },

    /// Schedules a timer after which the current notice may be dismissed.
    ///
    /// Each shown notice schedules exactly one of these; the handler keeps a
    /// pending-timer count so a replaced notice still gets its full dwell.
    ScheduleNoticeDismiss {
        /// Dwell time in seconds.
        seconds: f64,
    },
}
