// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for [`GrabDragController`].
//!
//! [`GrabDragController`]: crate::GrabDragController

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use glade_pdom::PdomConfig;

use crate::state::{CueContext, GrabCounts, InteractionState};
use crate::trace::TransitionTrace;

/// A pure predicate deciding cue visibility or help-text association.
///
/// Evaluated freshly on every transition; must be side-effect-free.
pub type CuePredicate = Box<dyn Fn(&GrabCounts, &CueContext) -> bool>;

/// A lifecycle callback, defaulting to a no-op.
pub type LifecycleCallback = Box<dyn FnMut()>;

/// Configuration for a grab-drag interaction.
///
/// Everything here is explicit: there are no ambient lookups inside the
/// controller, so behavior that varies per simulation (simplified
/// descriptions, cue policies) is threaded through this struct by the
/// composition root.
///
/// The spoken name has a single source of truth: `object_label`. The
/// grab/drag representation overrides must not also carry an accessible
/// name; that is an integration bug caught by a debug assertion at
/// construction.
pub struct GrabDragConfig {
    /// The spoken name of the thing being grabbed ("Magnet", "Balloon").
    pub object_label: String,
    /// Help text associated with the grabbable representation before the
    /// second grab. `None` selects a default derived from `object_label`
    /// and `supports_simplified_description`.
    pub help_text: Option<String>,
    /// Hint announced politely on the first keyboard grab, teaching how to
    /// drag. `None` selects a default.
    pub drag_hint_text: Option<String>,
    /// Accessible representation while grabbable.
    pub grab_pdom: PdomConfig,
    /// Accessible representation while draggable.
    pub drag_pdom: PdomConfig,
    /// Selects touch-gesture phrasing instead of keyboard phrasing for the
    /// default help text.
    pub supports_simplified_description: bool,
    /// Dash pattern (on/off lengths) for the drag-state highlight.
    pub dash_pattern: Vec<f64>,
    /// Fired on every grab, after the transition completes.
    pub on_grab: Option<LifecycleCallback>,
    /// Fired on every user-initiated release, after the transition.
    pub on_release: Option<LifecycleCallback>,
    /// Fired on every entry to the grabbable state.
    pub on_grabbable: Option<LifecycleCallback>,
    /// Fired on every entry to the draggable state.
    pub on_draggable: Option<LifecycleCallback>,
    /// Whether the "how to grab" cue shows. Default: until the first
    /// keyboard grab.
    pub show_grab_cue: CuePredicate,
    /// Whether the "how to drag" cue shows. Default: while draggable and
    /// keyboard-focused after a keyboard grab.
    pub show_drag_cue: CuePredicate,
    /// Whether the help text is associated with the grabbable
    /// representation. Default: while fewer than two grabs have happened.
    pub associate_help_text: CuePredicate,
    /// Optional transition provenance hook.
    pub trace: Option<Box<dyn TransitionTrace>>,
}

impl GrabDragConfig {
    /// Creates a configuration with default policies for the given object
    /// label.
    #[must_use]
    pub fn new(object_label: impl Into<String>) -> Self {
        Self {
            object_label: object_label.into(),
            help_text: None,
            drag_hint_text: None,
            grab_pdom: PdomConfig::button(),
            drag_pdom: PdomConfig::application().with_role_description("movable"),
            supports_simplified_description: false,
            dash_pattern: vec![7.0, 7.0],
            on_grab: None,
            on_release: None,
            on_grabbable: None,
            on_draggable: None,
            show_grab_cue: Box::new(|counts, _| counts.keyboard == 0),
            show_drag_cue: Box::new(|_, context| {
                context.state == InteractionState::Draggable
                    && context.focused
                    && context.via_keyboard
            }),
            associate_help_text: Box::new(|counts, _| counts.total < 2),
            trace: None,
        }
    }

    /// Sets the on-grab callback.
    #[must_use]
    pub fn with_on_grab(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_grab = Some(Box::new(callback));
        self
    }

    /// Sets the on-release callback.
    #[must_use]
    pub fn with_on_release(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_release = Some(Box::new(callback));
        self
    }

    /// Sets the grabbable-state-entered callback.
    #[must_use]
    pub fn with_on_grabbable(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_grabbable = Some(Box::new(callback));
        self
    }

    /// Sets the draggable-state-entered callback.
    #[must_use]
    pub fn with_on_draggable(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_draggable = Some(Box::new(callback));
        self
    }

    /// Sets the grab-cue predicate.
    #[must_use]
    pub fn with_show_grab_cue(
        mut self,
        predicate: impl Fn(&GrabCounts, &CueContext) -> bool + 'static,
    ) -> Self {
        self.show_grab_cue = Box::new(predicate);
        self
    }

    /// Sets the drag-cue predicate.
    #[must_use]
    pub fn with_show_drag_cue(
        mut self,
        predicate: impl Fn(&GrabCounts, &CueContext) -> bool + 'static,
    ) -> Self {
        self.show_drag_cue = Box::new(predicate);
        self
    }

    /// Sets the help-text association predicate.
    #[must_use]
    pub fn with_associate_help_text(
        mut self,
        predicate: impl Fn(&GrabCounts, &CueContext) -> bool + 'static,
    ) -> Self {
        self.associate_help_text = Box::new(predicate);
        self
    }

    /// Installs a transition provenance hook.
    #[must_use]
    pub fn with_trace(mut self, trace: impl TransitionTrace + 'static) -> Self {
        self.trace = Some(Box::new(trace));
        self
    }

    /// Resolves the help text: the explicit override, or a default phrased
    /// for keyboard or simplified-gesture use.
    #[must_use]
    pub fn resolved_help_text(&self) -> String {
        if let Some(text) = &self.help_text {
            return text.clone();
        }
        if self.supports_simplified_description {
            alloc::format!("Double tap and hold to drag the {}.", self.object_label)
        } else {
            alloc::format!(
                "Press Enter or Space to grab the {}.",
                self.object_label
            )
        }
    }

    /// Resolves the drag hint announced on the first keyboard grab.
    #[must_use]
    pub fn resolved_drag_hint(&self) -> String {
        self.drag_hint_text
            .clone()
            .unwrap_or_else(|| String::from("Move with the arrow keys. Press Space to release."))
    }
}

impl fmt::Debug for GrabDragConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrabDragConfig")
            .field("object_label", &self.object_label)
            .field("help_text", &self.help_text)
            .field("drag_hint_text", &self.drag_hint_text)
            .field("grab_pdom", &self.grab_pdom)
            .field("drag_pdom", &self.drag_pdom)
            .field(
                "supports_simplified_description",
                &self.supports_simplified_description,
            )
            .field("dash_pattern", &self.dash_pattern)
            .finish_non_exhaustive()
    }
}
