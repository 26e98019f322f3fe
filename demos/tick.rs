//! Example: periodic tick on the global emitter.
//!
//! A listener counts ticks and unsubscribes itself on the tenth one.
//! Run with `RUST_LOG=tiny_eventer=debug` to see the emitter's own records.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread::sleep;
use std::time::{Duration, SystemTime};

use tiny_eventer::{global, Callback, EventHandler};
use tracing_subscriber::EnvFilter;

static LISTENER: OnceLock<Callback<serde_json::Value>> = OnceLock::new();

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let counter = Arc::new(AtomicU64::new(0));
    let listener = LISTENER.get_or_init(|| {
        let callback: Callback<serde_json::Value> = Arc::new(move |_| {
            let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
            println!("{count} {:?}", SystemTime::now());

            if count == 10 {
                if let Some(me) = LISTENER.get() {
                    global().off("tick", Some(me), None);
                }
            }
        });
        callback
    });
    global().on("tick", listener.clone(), None);

    while global().has_listener("tick") {
        global().trigger("tick", &[]);
        sleep(Duration::from_millis(200));
    }
}
