//! Per-page one-second ticker
//!
//! The session types never read the clock; a page calls [`use_ticker`] once
//! and forwards each tick to its session. The interval is dropped, and so
//! cancelled, when the page is unmounted.

use gloo_timers::callback::Interval;
use leptos::*;

/// Milliseconds between ticks
pub const TICK_MS: u32 = 1_000;

/// Call `on_tick` every second while the calling component is mounted
pub fn use_ticker(on_tick: impl FnMut() + 'static) {
    let interval = Interval::new(TICK_MS, on_tick);
    on_cleanup(move || drop(interval));
}
