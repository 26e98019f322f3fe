//! # Tiny Eventer
//!
//! A tiny synchronous publish/subscribe utility over named events.
//!
//! - **Listener**: A callback plus an optional context, registered to an event.
//! - **EventEmitter**: Manages registration, removal and synchronous dispatch.
//! - **EventHandler**: Trait defining the emitter API.
//! - **global()**: A lazily built, process-wide default emitter.
//!
//! Listeners are removed by callback identity **or** by context, so a context
//! can remove a whole group of (possibly anonymous) listeners at once:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use serde_json::json;
//! use tiny_eventer::{EventEmitter, EventHandler};
//!
//! let emitter = EventEmitter::<u32>::new();
//! let calls = Arc::new(Mutex::new(Vec::new()));
//!
//! let f = calls.clone();
//! emitter.on("tick", Arc::new(move |p| f.lock().unwrap().push(("f", p[0]))), Some(json!("g1")));
//! let g = calls.clone();
//! emitter.on("tick", Arc::new(move |p| g.lock().unwrap().push(("g", p[0]))), Some(json!("g2")));
//!
//! emitter.trigger("tick", &[42]);
//! emitter.off("tick", None, Some(&json!("g1")));
//! emitter.trigger("tick", &[7]);
//!
//! assert_eq!(*calls.lock().unwrap(), vec![("f", 42), ("g", 42), ("g", 7)]);
//! ```

mod config;
mod constants;
mod error;
mod event_emitter;
mod event_handler;
mod global;
mod listener;

pub use config::EmitterConfig;
pub use constants::{Callback, Context, DEFAULT_MAX_LISTENERS};
pub use error::EventError;
pub use event_emitter::EventEmitter;
pub use event_handler::EventHandler;
pub use global::global;
pub use listener::Listener;

#[cfg(test)]
mod tests;
