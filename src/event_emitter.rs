use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::error::panic_message;
use crate::{Callback, Context, EmitterConfig, EventError, EventHandler, Listener};

/// An event emitter that manages listeners and synchronous dispatch.
///
/// This struct implements the `EventHandler` trait on top of a `BTreeMap` guarded by a
/// single `parking_lot::Mutex`.
///
/// # Type Parameters
/// * `A` - The type of each parameter passed to listeners. Defaults to
///   `serde_json::Value`, which lets one emitter carry loosely typed arguments.
///
/// # Implementation Notes
/// - Each event name maps to a non-empty `Vec` of listeners in subscription order;
///   the entry is dropped as soon as its last listener is removed.
/// - Dispatch clones the listener list under the lock and runs the callbacks with the
///   lock released, so listeners may subscribe or unsubscribe on the same emitter.
///   Such changes apply to the next `trigger`, never to the one in flight.
/// - Instances are fully isolated from each other and from [`global`](crate::global).
pub struct EventEmitter<A = Value> {
    /// Name attached to every log record.
    label: String,
    /// Listener count per event above which a warning is logged.
    max_listeners: AtomicUsize,
    /// Event names to their listeners.
    events: Mutex<BTreeMap<String, Vec<Listener<A>>>>,
}

impl<A> EventEmitter<A> {
    /// Creates a new, empty `EventEmitter<A>` with the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use tiny_eventer::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// assert_eq!(emitter.max_listeners(), 10);
    /// assert!(emitter.event_names().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates a new, empty `EventEmitter<A>` from an `EmitterConfig`.
    ///
    /// # Example
    ///
    /// ```
    /// use tiny_eventer::{EmitterConfig, EventEmitter, EventHandler};
    ///
    /// let config = EmitterConfig::default().with_label("ui").with_max_listeners(2);
    /// let emitter = EventEmitter::<String>::with_config(config);
    /// assert_eq!(emitter.label(), "ui");
    /// assert_eq!(emitter.max_listeners(), 2);
    /// ```
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            label: config.label,
            max_listeners: AtomicUsize::new(config.max_listeners),
            events: Mutex::new(BTreeMap::new()),
        }
    }

    /// The label used in this emitter's log records.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Clones the listener list of `event_name` so callbacks run without the lock held.
    fn snapshot(&self, event_name: &str) -> Option<Vec<Listener<A>>> {
        self.events.lock().get(event_name).cloned()
    }
}

impl<A> EventHandler<A> for EventEmitter<A> {
    /// Returns the names of all events with one or more listeners, in sorted order.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use tiny_eventer::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<String>::new();
    /// emitter.on("event_two", Arc::new(|_| {}), None);
    /// emitter.on("event_one", Arc::new(|_| {}), None);
    ///
    /// assert_eq!(emitter.event_names(), vec!["event_one", "event_two"]);
    /// ```
    fn event_names(&self) -> Vec<String> {
        self.events.lock().keys().cloned().collect()
    }

    fn set_max_listeners(&self, max: usize) {
        self.max_listeners.store(max, Ordering::Relaxed);
    }

    fn max_listeners(&self) -> usize {
        self.max_listeners.load(Ordering::Relaxed)
    }

    /// Appends a listener to `event_name`, creating the event if needed.
    ///
    /// Exceeding `max_listeners` only logs a warning; the listener is still added.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use serde_json::json;
    /// use tiny_eventer::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// let listener = emitter.on("tick", Arc::new(|_| {}), Some(json!("g1")));
    ///
    /// assert_eq!(listener.context(), Some(&json!("g1")));
    /// assert_eq!(emitter.listener_count("tick"), 1);
    /// ```
    fn on(&self, event_name: &str, callback: Callback<A>, context: Option<Context>) -> Listener<A> {
        let listener = Listener::new(callback, context);
        let count = {
            let mut events = self.events.lock();
            let listeners = events.entry(event_name.to_string()).or_default();
            listeners.push(listener.clone());
            listeners.len()
        };

        let max = self.max_listeners();
        if max > 0 && count > max {
            warn!(
                emitter = %self.label,
                event = event_name,
                listeners = count,
                max_listeners = max,
                "possible listener leak: more listeners than max_listeners"
            );
        }
        debug!(emitter = %self.label, event = event_name, listeners = count, "listener added");
        listener
    }

    /// Removes the listeners matching `callback` or `context`.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use serde_json::json;
    /// use tiny_eventer::{Callback, EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// let cb: Callback<u32> = Arc::new(|_| {});
    /// emitter.on("tick", cb.clone(), None);
    /// emitter.on("tick", Arc::new(|_| {}), Some(json!("g1")));
    /// emitter.on("tick", Arc::new(|_| {}), Some(json!("g2")));
    ///
    /// assert_eq!(emitter.off("tick", Some(&cb), Some(&json!("g1"))), 2);
    /// assert_eq!(emitter.listener_count("tick"), 1);
    /// ```
    fn off(&self, event_name: &str, callback: Option<&Callback<A>>, context: Option<&Context>) -> usize {
        // Removed listeners are dropped after the lock is released: their
        // captured state may call back into this emitter from `Drop`.
        let (removed, remaining): (Vec<Listener<A>>, usize) = {
            let mut events = self.events.lock();
            let Some(listeners) = events.get_mut(event_name) else {
                return 0;
            };
            let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(listeners)
                .into_iter()
                .partition(|listener| listener.matches(callback, context));
            let remaining = kept.len();
            if remaining == 0 {
                events.remove(event_name);
            } else {
                *listeners = kept;
            }
            (removed, remaining)
        };

        let count = removed.len();
        debug!(emitter = %self.label, event = event_name, removed = count, remaining, "listeners removed");
        drop(removed);
        count
    }

    fn clear(&self, event_name: &str) -> Vec<Listener<A>> {
        let removed = self.events.lock().remove(event_name).unwrap_or_default();
        if !removed.is_empty() {
            debug!(emitter = %self.label, event = event_name, removed = removed.len(), "event cleared");
        }
        removed
    }

    fn clear_all(&self) {
        let events = std::mem::take(&mut *self.events.lock());
        debug!(emitter = %self.label, events = events.len(), "all events cleared");
    }

    /// Dispatches `params` to every listener of `event_name`.
    ///
    /// # Example
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use tiny_eventer::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = seen.clone();
    /// emitter.on("tick", Arc::new(move |params| sink.lock().unwrap().extend_from_slice(params)), None);
    ///
    /// emitter.trigger("tick", &[4, 2]);
    /// emitter.trigger("unknown", &[0]);
    /// assert_eq!(*seen.lock().unwrap(), vec![4, 2]);
    /// ```
    fn trigger(&self, event_name: &str, params: &[A]) {
        let Some(listeners) = self.snapshot(event_name) else {
            return;
        };

        trace!(emitter = %self.label, event = event_name, listeners = listeners.len(), "trigger");
        for listener in &listeners {
            listener.call(params);
        }
    }

    fn try_trigger(&self, event_name: &str, params: &[A]) -> Result<usize, EventError> {
        let Some(listeners) = self.snapshot(event_name) else {
            return Ok(0);
        };

        trace!(emitter = %self.label, event = event_name, listeners = listeners.len(), "try_trigger");
        for (position, listener) in listeners.iter().enumerate() {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| listener.call(params))) {
                let err = EventError::ListenerPanicked {
                    event: event_name.to_string(),
                    position,
                    message: panic_message(&*payload),
                };
                warn!(
                    emitter = %self.label,
                    event = event_name,
                    position,
                    kind = err.as_label(),
                    "{err}"
                );
                return Err(err);
            }
        }
        Ok(listeners.len())
    }

    fn listener_count(&self, event_name: &str) -> usize {
        self.events
            .lock()
            .get(event_name)
            .map(|listeners| listeners.len())
            .unwrap_or(0)
    }
}

impl<A> Default for EventEmitter<A> {
    /// Creates a new `EventEmitter<A>` with a default max listeners of 10.
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for EventEmitter<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let events = self.events.lock();
        let counts: BTreeMap<&str, usize> = events
            .iter()
            .map(|(name, listeners)| (name.as_str(), listeners.len()))
            .collect();
        f.debug_struct("EventEmitter")
            .field("label", &self.label)
            .field("max_listeners", &self.max_listeners())
            .field("events", &counts)
            .finish()
    }
}
