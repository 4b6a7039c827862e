//! WASM-target tests for mindplus-platform (Node.js runtime).
//!
//! Exercises the interval ticker, the request deadline, the clock and the
//! identity provider under wasm32-unknown-unknown via `wasm-pack test --node`.
//! The HTTP clients themselves need a live service and are not covered here.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use futures::future;
use gloo_timers::future::TimeoutFuture;
use mindplus_core::ports::{IdentityPort, TickerPort};
use mindplus_platform::clock::now_ms;
use mindplus_platform::http::with_timeout;
use mindplus_platform::{IntervalTicker, SessionIdentity};
use mindplus_types::MindError;
use std::cell::Cell;
use std::rc::Rc;

// ─── Ticker Tests ────────────────────────────────────────

#[wasm_bindgen_test]
async fn interval_ticker_fires_until_stopped() {
    let count = Rc::new(Cell::new(0u32));
    let mut ticker = IntervalTicker::new();
    let counter = count.clone();
    ticker.start(
        10,
        Box::new(move || {
            counter.set(counter.get() + 1);
            true
        }),
    );
    assert!(ticker.is_active());

    TimeoutFuture::new(60).await;
    ticker.stop();
    let seen = count.get();
    assert!(seen >= 1);

    TimeoutFuture::new(40).await;
    assert_eq!(count.get(), seen);
    assert!(!ticker.is_active());
}

#[wasm_bindgen_test]
async fn interval_ticker_restart_replaces_callback() {
    let first = Rc::new(Cell::new(0u32));
    let second = Rc::new(Cell::new(0u32));
    let mut ticker = IntervalTicker::new();

    let f = first.clone();
    ticker.start(
        10,
        Box::new(move || {
            f.set(f.get() + 1);
            true
        }),
    );
    let s = second.clone();
    ticker.start(
        10,
        Box::new(move || {
            s.set(s.get() + 1);
            true
        }),
    );

    TimeoutFuture::new(50).await;
    drop(ticker);
    assert_eq!(first.get(), 0);
    assert!(second.get() >= 1);
}

#[wasm_bindgen_test]
async fn interval_ticker_stops_when_callback_declines() {
    let count = Rc::new(Cell::new(0u32));
    let mut ticker = IntervalTicker::new();
    let counter = count.clone();
    ticker.start(
        10,
        Box::new(move || {
            counter.set(counter.get() + 1);
            counter.get() < 3
        }),
    );

    TimeoutFuture::new(120).await;
    assert_eq!(count.get(), 3);
    assert!(!ticker.is_active());

    // the ticker is reusable afterwards
    let again = Rc::new(Cell::new(0u32));
    let a = again.clone();
    ticker.start(
        10,
        Box::new(move || {
            a.set(a.get() + 1);
            false
        }),
    );
    TimeoutFuture::new(60).await;
    assert_eq!(again.get(), 1);
    assert!(!ticker.is_active());
}

// ─── Deadline Tests ──────────────────────────────────────

#[wasm_bindgen_test]
async fn with_timeout_fails_a_stalled_future() {
    let stalled = future::pending::<mindplus_types::Result<u32>>();
    let result = with_timeout(stalled, 20).await;
    assert_eq!(result, Err(MindError::Timeout(20)));
}

#[wasm_bindgen_test]
async fn with_timeout_passes_through_an_early_result() {
    let quick = async {
        TimeoutFuture::new(5).await;
        Ok::<_, MindError>(7u32)
    };
    assert_eq!(with_timeout(quick, 200).await, Ok(7));

    let failing = async { Err::<u32, _>(MindError::Network("offline".into())) };
    assert_eq!(
        with_timeout(failing, 200).await,
        Err(MindError::Network("offline".into()))
    );
}

// ─── Clock Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn clock_is_positive() {
    assert!(now_ms() > 0.0);
}

// ─── Identity Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn identity_without_storage_is_anonymous() {
    // Node has no window, so nothing can be restored
    let identity = SessionIdentity::from_local_storage();
    assert_eq!(identity.display_label(), "You");
}
