use std::sync::Arc;

use crate::{Callback, Context};

/// A subscription record: a callback plus an optional context.
///
/// `Listener<A>` is what `on` stores and returns. Clones share the callback
/// allocation, so a clone identifies the same subscription.
///
/// # Context
///
/// The `context` field lets callers group listeners or remove anonymous
/// closures later on. It is a matching token only and is never passed to the callback.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use tiny_eventer::Listener;
///
/// let listener = Listener::<u32>::new(Arc::new(|_params| {
///     // handle params
/// }), Some(json!("my_group")));
/// assert_eq!(listener.context(), Some(&json!("my_group")));
/// ```
pub struct Listener<A> {
    callback: Callback<A>,
    context: Option<Context>,
}

impl<A> Listener<A> {
    /// Create a new listener from a callback and an optional context.
    pub fn new(callback: Callback<A>, context: Option<Context>) -> Self {
        Self { callback, context }
    }

    /// Returns a reference to the callback of this listener.
    ///
    /// Passing it to `off` removes this listener (and every clone of it).
    pub fn callback(&self) -> &Callback<A> {
        &self.callback
    }

    /// Returns the context associated with this listener, if any.
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// Synchronously invoke the callback with the given parameters.
    #[inline]
    pub fn call(&self, params: &[A]) {
        (self.callback)(params);
    }

    /// Whether this listener should be removed by `off(_, callback, context)`.
    ///
    /// Matches when the callback is the same allocation **or** the contexts are equal.
    /// An absent filter never matches, and neither does a listener without a context.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use serde_json::json;
    /// use tiny_eventer::{Callback, Listener};
    ///
    /// let cb: Callback<u8> = Arc::new(|_| {});
    /// let listener = Listener::new(cb.clone(), Some(json!("g1")));
    ///
    /// assert!(listener.matches(Some(&cb), None));
    /// assert!(listener.matches(None, Some(&json!("g1"))));
    /// assert!(!listener.matches(None, Some(&json!("g2"))));
    /// assert!(!listener.matches(None, None));
    /// ```
    pub fn matches(&self, callback: Option<&Callback<A>>, context: Option<&Context>) -> bool {
        let same_callback = callback.is_some_and(|cb| Arc::ptr_eq(&self.callback, cb));
        let same_context = match (context, self.context.as_ref()) {
            (Some(wanted), Some(own)) => wanted == own,
            _ => false,
        };
        same_callback || same_context
    }
}

impl<A: 'static> Listener<A> {
    /// A listener whose callback does nothing.
    ///
    /// # Example
    /// ```
    /// use tiny_eventer::Listener;
    ///
    /// let listener = Listener::<u8>::noop();
    /// listener.call(&[1, 2, 3]);
    /// assert_eq!(listener.context(), None);
    /// ```
    pub fn noop() -> Self {
        Self::new(Arc::new(|_: &[A]| {}), None)
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            context: self.context.clone(),
        }
    }
}

impl<A> std::fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("context", &self.context)
            .finish()
    }
}

impl<A> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback) && self.context == other.context
    }
}
impl<A> Eq for Listener<A> {}
