// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Repeat Timer: frame-driven delayed auto-repeat scheduling.
//!
//! This crate implements the "fire on hold" half of press-and-hold
//! interactions: invoke an action once after an initial delay, then
//! repeatedly at a fixed cadence, until stopped. It knows nothing about
//! keys, buttons, or UI elements; higher layers (such as a keyboard value
//! spinner) decide *when* to arm and disarm it.
//!
//! ## Timing model
//!
//! There is no wall clock and there are no threads. Time advances only when
//! the embedder calls [`RepeatTimer::step`] with the elapsed milliseconds
//! since the previous step, typically once per rendered frame. Firing
//! granularity is therefore bounded by frame rate: the configured delay and
//! interval are *minimums*, not exact deadlines. A single large step (a
//! frame hiccup) reports every firing that became due during it.
//!
//! ## Minimal example
//!
//! ```
//! use glade_repeat_timer::RepeatTimer;
//!
//! // First fire after 400 ms, then every 100 ms.
//! let mut timer = RepeatTimer::new(400.0, 100.0);
//! assert!(timer.start());
//!
//! // 25 frames at 16 ms: 400 ms elapsed, the initial fire is due.
//! let mut fires = 0;
//! for _ in 0..25 {
//!     fires += timer.step(16.0);
//! }
//! assert_eq!(fires, 1);
//!
//! // Another 200 ms: two repeats.
//! assert_eq!(timer.step(200.0), 2);
//!
//! // Releasing without a forced final fire.
//! assert_eq!(timer.stop(false), 0);
//! assert!(!timer.is_running());
//! ```
//!
//! Two layers are provided:
//!
//! - [`RepeatTimer`]: the pure scheduling state machine. [`RepeatTimer::step`]
//!   returns how many firings became due; the caller delivers them.
//! - [`CallbackTimer`]: a thin wrapper that owns registered callbacks and
//!   invokes them for every due firing.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod callback;
mod timer;

pub use callback::{CallbackId, CallbackTimer};
pub use timer::RepeatTimer;
