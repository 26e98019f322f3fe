use std::sync::Arc;

/// Default number of listeners per event before the emitter warns about a possible leak.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Type alias for a listener callback pointer.
///
/// - Receives the parameter list passed to `trigger` (the event name is not included).
/// - Requires `Send + Sync` so emitters can be shared across threads.
/// - Identity is the `Arc` allocation: clones of one `Callback<A>` are the same listener.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tiny_eventer::Callback;
///
/// let callback: Callback<u32> = Arc::new(|params: &[u32]| {
///     println!("Received: {:?}", params);
/// });
/// ```
pub type Callback<A> = Arc<dyn Fn(&[A]) + Send + Sync>;

/// Opaque identification attached to a listener.
///
/// Only ever compared with `==` when removing listeners; it is never handed to the callback.
///
/// # Example
/// ```
/// use serde_json::json;
/// use tiny_eventer::Context;
///
/// let group: Context = json!("sensors");
/// let owner: Context = json!({ "id": 7 });
/// assert_ne!(group, owner);
/// ```
pub type Context = serde_json::Value;
