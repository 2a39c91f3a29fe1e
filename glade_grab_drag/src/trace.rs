// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hook for state transitions.
//!
//! The controller intentionally does not log. Embedders that want to answer
//! "why did this element change representation?" install a
//! [`TransitionTrace`] and record whatever provenance they need;
//! [`RecordingTrace`] is a minimal recorder suitable for tests and debug
//! overlays.

use alloc::vec::Vec;

use crate::state::InteractionState;

/// A callback sink for grab-drag transitions.
pub trait TransitionTrace {
    /// Called after every completed transition, including forced ones from
    /// `interrupt` and `reset`.
    fn transition(&mut self, from: InteractionState, to: InteractionState, via_keyboard: bool);
}

/// Records every transition in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrace {
    /// `(from, to, via_keyboard)` tuples, oldest first.
    pub transitions: Vec<(InteractionState, InteractionState, bool)>,
}

impl RecordingTrace {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransitionTrace for RecordingTrace {
    fn transition(&mut self, from: InteractionState, to: InteractionState, via_keyboard: bool) {
        self.transitions.push((from, to, via_keyboard));
    }
}

// Lets a caller keep a handle to a recorder it has handed to a controller.
impl<T: TransitionTrace> TransitionTrace for alloc::rc::Rc<core::cell::RefCell<T>> {
    fn transition(&mut self, from: InteractionState, to: InteractionState, via_keyboard: bool) {
        self.borrow_mut().transition(from, to, via_keyboard);
    }
}
