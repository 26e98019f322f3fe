use crate::{Callback, Context, EventError, Listener};

/// Defines the contract for types that manage listeners and dispatch events.
///
/// Every method takes `&self`: implementors use interior mutability so a single
/// instance can be shared (and mutated from inside its own listeners).
///
/// # Type Parameters
/// * `A`: The type of each parameter passed to `trigger`.
///
/// # Thread Safety
/// All implementors must be `Send + Sync`.
pub trait EventHandler<A>: Send + Sync {
    /// Gets the names of events that currently have one or more listeners.
    fn event_names(&self) -> Vec<String>;

    /// Sets the number of listeners per event above which a leak warning is logged.
    /// `0` disables the warning.
    fn set_max_listeners(&self, max: usize);

    /// Gets the current listener warning threshold.
    fn max_listeners(&self) -> usize;

    /// Subscribes `callback` to `event_name`.
    ///
    /// # Parameters
    /// * `event_name` - Any string, the empty string included.
    /// * `callback` - Invoked with the parameters of every later `trigger` of the event.
    /// * `context` - Optional identification for grouped or anonymous removal.
    ///
    /// # Returns
    /// The created `Listener<A>`. Registration never fails.
    fn on(&self, event_name: &str, callback: Callback<A>, context: Option<Context>) -> Listener<A>;

    /// Unsubscribes every listener of `event_name` whose callback is `callback`
    /// **or** whose context equals `context`.
    ///
    /// `None` never matches on its dimension. The event is forgotten once its
    /// last listener is gone. Unknown events are ignored.
    ///
    /// # Returns
    /// The number of listeners removed.
    fn off(&self, event_name: &str, callback: Option<&Callback<A>>, context: Option<&Context>) -> usize;

    /// Unsubscribes all listeners of `event_name`.
    ///
    /// # Returns
    /// The removed listeners, empty if the event was unknown.
    fn clear(&self, event_name: &str) -> Vec<Listener<A>>;

    /// Unsubscribes all listeners of all events.
    fn clear_all(&self);

    /// Synchronously invokes, in subscription order, every listener registered
    /// on `event_name` at call time with `params`.
    ///
    /// A panicking listener propagates to the caller and the remaining
    /// listeners of this pass are skipped.
    fn trigger(&self, event_name: &str, params: &[A]);

    /// Same dispatch as [`trigger`](Self::trigger), but a panicking listener is
    /// reported as an error instead of unwinding through the caller.
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of listeners invoked.
    /// * `Err(EventError::ListenerPanicked)` - A listener panicked; the ones after it were skipped.
    fn try_trigger(&self, event_name: &str, params: &[A]) -> Result<usize, EventError>;

    /// Gets the number of listeners registered to `event_name` (0 when unknown).
    fn listener_count(&self, event_name: &str) -> usize;

    /// Gets whether `event_name` has any registered listeners.
    fn has_listener(&self, event_name: &str) -> bool {
        self.listener_count(event_name) > 0
    }
}
