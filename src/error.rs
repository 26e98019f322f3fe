use thiserror::Error;

/// Errors that can occur in the event system.
///
/// Registration, removal and clearing never fail; the only error source is a
/// listener panicking while dispatched through `try_trigger`.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Emitting Event:
    /// - A listener panicked; listeners after `position` were not invoked.
    #[error("listener #{position} for event {event:?} panicked: {message}")]
    ListenerPanicked {
        /// Name of the event being dispatched.
        event: String,
        /// Zero-based index of the panicking listener in the dispatch snapshot.
        position: usize,
        /// Panic payload rendered as text.
        message: String,
    },
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use tiny_eventer::EventError;
    ///
    /// let err = EventError::ListenerPanicked {
    ///     event: "tick".to_string(),
    ///     position: 0,
    ///     message: "boom".to_string(),
    /// };
    /// assert_eq!(err.as_label(), "listener_panicked");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::ListenerPanicked { .. } => "listener_panicked",
        }
    }
}

/// Renders a panic payload caught by `catch_unwind`.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
