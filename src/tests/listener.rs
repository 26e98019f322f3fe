use serde_json::json;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{Callback, Listener};

#[test]
fn listener_new_and_context() {
    let cb: Callback<String> = Arc::new(|_| {});
    let l1 = Listener::new(cb.clone(), Some(json!("tag1")));
    assert_eq!(l1.context(), Some(&json!("tag1")));

    let l2 = Listener::new(cb.clone(), None);
    assert_eq!(l2.context(), None);
    assert!(Arc::ptr_eq(l1.callback(), l2.callback()));
}

#[test]
fn listener_call_passes_params() {
    let called = Arc::new(AtomicU64::new(0));
    let called2 = called.clone();
    let cb: Callback<u32> = Arc::new(move |params| {
        assert_eq!(params, &[42, 7]);
        called2.fetch_add(1, Ordering::SeqCst);
    });

    let l = Listener::new(cb, None);
    l.call(&[42, 7]);
    l.call(&[42, 7]);
    assert_eq!(called.load(Ordering::SeqCst), 2);
}

#[test]
fn listener_matches_callback_or_context() {
    let cb: Callback<u8> = Arc::new(|_| {});
    let other: Callback<u8> = Arc::new(|_| {});
    let l = Listener::new(cb.clone(), Some(json!({ "owner": 1 })));

    assert!(l.matches(Some(&cb), None));
    assert!(l.matches(Some(&other), Some(&json!({ "owner": 1 }))));
    assert!(!l.matches(Some(&other), Some(&json!({ "owner": 2 }))));
    assert!(!l.matches(None, None));

    // Without a context only the callback can match
    let bare = Listener::new(other.clone(), None);
    assert!(!bare.matches(None, Some(&json!(null))));
    assert!(bare.matches(Some(&other), Some(&json!(null))));
}

#[test]
fn listener_clone_and_eq() {
    let cb: Callback<&'static str> = Arc::new(|_| {});

    let l1 = Listener::new(cb.clone(), Some(json!("tag")));
    let l2 = l1.clone();
    assert_eq!(l1, l2);

    // Different context, not equal
    let l3 = Listener::new(cb.clone(), Some(json!("other")));
    assert_ne!(l1, l3);

    // Different callback, not equal
    let cb2: Callback<&'static str> = Arc::new(|_| {});
    let l4 = Listener::new(cb2, Some(json!("tag")));
    assert_ne!(l1, l4);
}

#[test]
fn listener_noop_and_debug() {
    let l: Listener<u32> = Listener::noop();
    l.call(&[1, 2, 3]);
    assert_eq!(l.context(), None);

    let dbg = format!("{:?}", Listener::new(l.callback().clone(), Some(json!("g1"))));
    assert_eq!(dbg, "Listener { context: Some(String(\"g1\")) }");
}
