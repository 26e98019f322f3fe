use serde::Deserialize;

use crate::DEFAULT_MAX_LISTENERS;

/// Construction-time settings for an [`EventEmitter`](crate::EventEmitter).
///
/// Deserializable with every field optional, so a partial object is enough:
///
/// ```
/// use tiny_eventer::EmitterConfig;
///
/// let config: EmitterConfig = serde_json::from_str(r#"{ "max_listeners": 32 }"#).unwrap();
/// assert_eq!(config.max_listeners, 32);
/// assert_eq!(config.label, "emitter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Name attached to every log record of the emitter.
    pub label: String,
    /// Listeners per event before a leak warning is logged. `0` disables the warning.
    pub max_listeners: usize,
}

impl EmitterConfig {
    /// Sets the name attached to the emitter's log records.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the leak warning threshold; `0` disables it.
    pub fn with_max_listeners(mut self, max: usize) -> Self {
        self.max_listeners = max;
        self
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            label: "emitter".to_string(),
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}
