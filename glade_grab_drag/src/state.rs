// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state, grab counters, and the context handed to cue
//! predicates.

/// The two representations of a grab-drag element.
///
/// `Grabbable` is the "closed", button-like representation before the user
/// has initiated a drag; `Draggable` is the "open", active representation
/// while the user is repositioning the element. The state is owned
/// exclusively by one controller per element and toggles for the life of
/// that controller.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum InteractionState {
    /// Button-like grab affordance; activating it starts a drag.
    #[default]
    Grabbable,
    /// Application-like active representation; keyboard input moves the
    /// element.
    Draggable,
}

/// Monotonically increasing grab counters.
///
/// Incremented only when a grab actually transitions the element to
/// [`InteractionState::Draggable`]; releases do not count. Used to decide
/// one-shot behaviors: whether the "how to grab this" cue still shows, and
/// whether descriptive help text is still associated (dropped after the
/// second grab to spare screen-reader users the repetition).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct GrabCounts {
    /// All grabs, any input modality.
    pub total: u32,
    /// Keyboard-initiated grabs only.
    pub keyboard: u32,
}

impl GrabCounts {
    /// Returns both counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot handed to cue/help-text predicates on every transition.
///
/// Predicates are expected to be pure; they are re-evaluated freshly each
/// transition and their evaluation order and frequency are unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CueContext {
    /// The state being entered.
    pub state: InteractionState,
    /// Whether the element holds keyboard focus after the transition.
    pub focused: bool,
    /// Whether the transition was keyboard-initiated.
    pub via_keyboard: bool,
}
