use std::sync::LazyLock;

use crate::{EmitterConfig, EventEmitter};

static GLOBAL: LazyLock<EventEmitter> =
    LazyLock::new(|| EventEmitter::with_config(EmitterConfig::default().with_label("global")));

/// The process-wide default emitter.
///
/// Built on first use and never torn down. It shares nothing with emitters
/// created through [`EventEmitter::new`], so prefer those wherever an owner exists.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use tiny_eventer::{global, EventHandler};
///
/// global().on("greet", Arc::new(|params| println!("hello {}", params[0])), None);
/// global().trigger("greet", &[json!("world")]);
/// global().clear("greet");
/// ```
pub fn global() -> &'static EventEmitter {
    &GLOBAL
}
