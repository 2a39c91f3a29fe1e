// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callback-owning wrapper over [`RepeatTimer`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::RepeatTimer;

/// Handle for a callback registered on a [`CallbackTimer`].
///
/// A small, copyable identifier in the spirit of a scene-tree node handle.
/// Ids are never reused within one timer, so a stale id simply fails to
/// remove anything.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CallbackId(u64);

type Callback = Box<dyn FnMut()>;

/// A [`RepeatTimer`] that owns and invokes registered callbacks.
///
/// Every firing reported by the underlying scheduler invokes all registered
/// callbacks in registration order. The intended usage is single-consumer
/// (one armed callback per managed element); the type nominally supports
/// multiple, and guards against duplicate repeat loops belong to the layer
/// that arms the timer.
///
/// ```
/// # extern crate alloc;
/// use alloc::rc::Rc;
/// use core::cell::Cell;
/// use glade_repeat_timer::CallbackTimer;
///
/// let count = Rc::new(Cell::new(0_u32));
/// let mut timer = CallbackTimer::new(200.0, 50.0);
/// let sink = Rc::clone(&count);
/// timer.add_callback(move || sink.set(sink.get() + 1));
///
/// timer.start();
/// timer.step(300.0); // initial fire at 200, repeats at 250 and 300
/// assert_eq!(count.get(), 3);
/// ```
pub struct CallbackTimer {
    timer: RepeatTimer,
    callbacks: Vec<(CallbackId, Callback)>,
    next_id: u64,
}

impl CallbackTimer {
    /// Creates a stopped callback timer; see [`RepeatTimer::new`] for the
    /// timing parameters.
    #[must_use]
    pub fn new(delay_ms: f64, interval_ms: f64) -> Self {
        Self {
            timer: RepeatTimer::new(delay_ms, interval_ms),
            callbacks: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a callback to invoke on every firing, returning its handle.
    pub fn add_callback(&mut self, callback: impl FnMut() + 'static) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Removes a previously registered callback.
    ///
    /// Returns `false` if the handle does not correspond to a registered
    /// callback (already removed, or from another timer).
    pub fn remove_callback(&mut self, id: CallbackId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns `true` while the timer is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Arms the timer; see [`RepeatTimer::start`].
    pub fn start(&mut self) -> bool {
        self.timer.start()
    }

    /// Disarms the timer, invoking callbacks once more if `fire_if_pending`
    /// and the timer was running; see [`RepeatTimer::stop`].
    pub fn stop(&mut self, fire_if_pending: bool) {
        let fires = self.timer.stop(fire_if_pending);
        self.fire(fires);
    }

    /// Advances the timer by one frame step, invoking callbacks for every
    /// due firing. Returns the number of firings delivered.
    pub fn step(&mut self, dt_ms: f64) -> u32 {
        let fires = self.timer.step(dt_ms);
        self.fire(fires);
        fires
    }

    fn fire(&mut self, times: u32) {
        for _ in 0..times {
            for (_, callback) in &mut self.callbacks {
                callback();
            }
        }
    }
}

impl fmt::Debug for CallbackTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackTimer")
            .field("timer", &self.timer)
            .field("callbacks", &self.callbacks.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
