// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grab-drag interaction controller.

use alloc::vec::Vec;
use smallvec::SmallVec;

use glade_pdom::{
    AccessibleElement, Handled, InputEvent, InputListener, Key, ListenerId, PdomConfig, Priority,
    UtteranceQueue,
};

use crate::config::GrabDragConfig;
use crate::highlight::{HighlightKind, HighlightPair};
use crate::state::{CueContext, GrabCounts, InteractionState};

/// Drives one element's grabbable/draggable interaction.
///
/// The controller owns the interaction state machine, the listener sets for
/// both states, the focus-highlight pair, and the announcement queue. It
/// never holds the element it manages: every operation takes the element by
/// `&mut dyn AccessibleElement`, so the embedder stays free to store its
/// nodes however it likes. Exactly one controller may manage a given
/// element.
///
/// `L` is the embedder's listener type. The keyboard drag handler (the
/// listener that actually moves the element from arrow keys) is required;
/// extra listeners for either state are optional. Release keys, activation,
/// and the synthetic-click guard are built in and always run before the
/// embedder's listeners.
pub struct GrabDragController<L: InputListener> {
    config: GrabDragConfig,
    state: InteractionState,
    counts: GrabCounts,
    enabled: bool,
    disposed: bool,
    /// Whether the current/most recent draggable state was keyboard-entered.
    via_keyboard: bool,
    /// Set when an Enter keydown released the drag. The keyup half of that
    /// press can synthesize an activation click on the restored button
    /// representation, which must not immediately re-grab.
    awaiting_synthetic_click: bool,
    keyboard_drag_handler: (ListenerId, L),
    grab_listeners: Vec<(ListenerId, L)>,
    drag_listeners: Vec<(ListenerId, L)>,
    builtin_grab_id: ListenerId,
    builtin_drag_id: ListenerId,
    highlights: HighlightPair,
    active_highlight: HighlightKind,
    utterances: UtteranceQueue,
    grab_cue_visible: bool,
    drag_cue_visible: bool,
    revision: u64,
}

impl<L: InputListener> GrabDragController<L> {
    /// Creates a controller.
    ///
    /// The accessible name has a single source of truth,
    /// `config.object_label`; the per-state representation overrides must
    /// leave `accessible_name` unset. Violations are caught by a debug
    /// assertion.
    #[must_use]
    pub fn new(
        keyboard_drag_handler: L,
        grab_listeners: Vec<L>,
        drag_listeners: Vec<L>,
        config: GrabDragConfig,
    ) -> Self {
        debug_assert!(
            config.grab_pdom.accessible_name.is_none()
                && config.drag_pdom.accessible_name.is_none(),
            "per-state representations must not set accessible_name; use object_label"
        );

        let mut next_id = 1_u64;
        let mut mint = || {
            let id = ListenerId::from_raw(next_id);
            next_id += 1;
            id
        };
        let builtin_grab_id = mint();
        let builtin_drag_id = mint();
        let handler_id = mint();
        let grab_listeners = grab_listeners
            .into_iter()
            .map(|listener| (mint(), listener))
            .collect();
        let drag_listeners = drag_listeners
            .into_iter()
            .map(|listener| (mint(), listener))
            .collect();

        let dash_pattern = config.dash_pattern.clone();
        Self {
            config,
            state: InteractionState::Grabbable,
            counts: GrabCounts::default(),
            enabled: true,
            disposed: false,
            via_keyboard: false,
            awaiting_synthetic_click: false,
            keyboard_drag_handler: (handler_id, keyboard_drag_handler),
            grab_listeners,
            drag_listeners,
            builtin_grab_id,
            builtin_drag_id,
            highlights: HighlightPair::new(dash_pattern),
            active_highlight: HighlightKind::Solid,
            utterances: UtteranceQueue::new(),
            grab_cue_visible: true,
            drag_cue_visible: false,
            revision: 0,
        }
    }

    /// Applies the initial grabbable representation and listener set to the
    /// element. Call once before dispatching input.
    pub fn attach(&mut self, element: &mut dyn AccessibleElement) {
        debug_assert!(!self.disposed);
        self.apply_state(element, InteractionState::Grabbable, false);
    }

    /// The current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The grab counters.
    #[must_use]
    pub fn counts(&self) -> GrabCounts {
        self.counts
    }

    /// Whether the interaction responds to input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether [`Self::dispose`] has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether the "how to grab" cue should currently show.
    #[must_use]
    pub fn grab_cue_visible(&self) -> bool {
        self.grab_cue_visible
    }

    /// Whether the "how to drag" cue should currently show.
    #[must_use]
    pub fn drag_cue_visible(&self) -> bool {
        self.drag_cue_visible
    }

    /// The ids of the grab-state listener set, built-in first.
    #[must_use]
    pub fn grab_listener_ids(&self) -> SmallVec<[ListenerId; 4]> {
        let mut ids = SmallVec::new();
        ids.push(self.builtin_grab_id);
        ids.extend(self.grab_listeners.iter().map(|(id, _)| *id));
        ids
    }

    /// The ids of the drag-state listener set, built-in first.
    #[must_use]
    pub fn drag_listener_ids(&self) -> SmallVec<[ListenerId; 4]> {
        let mut ids = SmallVec::new();
        ids.push(self.builtin_drag_id);
        ids.push(self.keyboard_drag_handler.0);
        ids.extend(self.drag_listeners.iter().map(|(id, _)| *id));
        ids
    }

    /// Returns `true` if any drag-state listener is tracking an in-progress
    /// gesture.
    #[must_use]
    pub fn any_drag_listener_engaged(&self) -> bool {
        self.keyboard_drag_handler.1.is_engaged()
            || self.drag_listeners.iter().any(|(_, l)| l.is_engaged())
    }

    /// The focus-highlight pair.
    #[must_use]
    pub fn highlights(&self) -> &HighlightPair {
        &self.highlights
    }

    /// Mutable access to the highlight pair.
    pub fn highlights_mut(&mut self) -> &mut HighlightPair {
        &mut self.highlights
    }

    /// Forwards a change of the element's highlight shape, recomputing the
    /// dashed derivative. The embedder calls this from its shape-changed
    /// listener; the pair never goes stale on its own.
    pub fn set_highlight_shape(&mut self, shape: &kurbo::BezPath) {
        self.highlights.set_shape(shape);
    }

    /// Which of the pair is active for the current state.
    #[must_use]
    pub fn active_highlight(&self) -> HighlightKind {
        self.active_highlight
    }

    /// The pending announcement queue, for the embedder to drain.
    pub fn utterances_mut(&mut self) -> &mut UtteranceQueue {
        &mut self.utterances
    }

    /// A change counter bumped on every completed transition.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Transitions to the draggable state. No-op (returning `false`) if
    /// already draggable, disabled, or disposed.
    pub fn grab(&mut self, element: &mut dyn AccessibleElement, via_keyboard: bool) -> bool {
        if self.disposed || !self.enabled || self.state == InteractionState::Draggable {
            return false;
        }
        self.counts.total += 1;
        if via_keyboard {
            self.counts.keyboard += 1;
        }
        self.apply_state(element, InteractionState::Draggable, via_keyboard);
        if via_keyboard && self.counts.keyboard == 1 {
            self.utterances
                .announce(self.config.resolved_drag_hint(), Priority::Polite);
        }
        if let Some(callback) = &mut self.config.on_grab {
            callback();
        }
        if let Some(callback) = &mut self.config.on_draggable {
            callback();
        }
        if via_keyboard {
            element.focus();
        }
        true
    }

    /// A user-initiated release back to the grabbable state.
    ///
    /// Releasing what is not held is an integration bug: fatal in debug
    /// builds, a no-op returning `false` in release builds.
    ///
    /// Announces "Released." assertively so it is not dropped behind queued
    /// movement descriptions.
    pub fn release_draggable(&mut self, element: &mut dyn AccessibleElement) -> bool {
        debug_assert!(!self.disposed);
        debug_assert_eq!(
            self.state,
            InteractionState::Draggable,
            "cannot release what is not held"
        );
        if self.state != InteractionState::Draggable {
            return false;
        }
        self.apply_state(element, InteractionState::Grabbable, self.via_keyboard);
        self.utterances.announce("Released.", Priority::Assertive);
        if let Some(callback) = &mut self.config.on_release {
            callback();
        }
        if let Some(callback) = &mut self.config.on_grabbable {
            callback();
        }
        true
    }

    /// Forcibly cancels an in-progress drag without user-release semantics:
    /// no announcement, no release callback. Idempotent.
    pub fn interrupt(&mut self, element: &mut dyn AccessibleElement) {
        self.awaiting_synthetic_click = false;
        if self.state == InteractionState::Draggable {
            self.apply_state(element, InteractionState::Grabbable, false);
            if let Some(callback) = &mut self.config.on_grabbable {
                callback();
            }
        }
    }

    /// Returns the interaction to its initial configuration: cancels any
    /// drag, zeroes the grab counters, and re-applies the grabbable
    /// representation so cues and help text come back.
    pub fn reset(&mut self, element: &mut dyn AccessibleElement) {
        debug_assert!(!self.disposed);
        self.interrupt(element);
        self.counts.reset();
        self.apply_state(element, InteractionState::Grabbable, false);
    }

    /// Enables or disables the interaction. Disabling cancels any
    /// in-progress drag.
    pub fn set_enabled(&mut self, element: &mut dyn AccessibleElement, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        if !enabled {
            self.interrupt(element);
        }
        self.enabled = enabled;
    }

    /// Tears the interaction down: cancels any drag, detaches every
    /// listener id, and removes the help-text association. The controller
    /// is inert afterwards.
    pub fn dispose(&mut self, element: &mut dyn AccessibleElement) {
        self.interrupt(element);
        for id in self.grab_listener_ids() {
            element.remove_input_listener(id);
        }
        for id in self.drag_listener_ids() {
            element.remove_input_listener(id);
        }
        let help = glade_pdom::DescriptionAssociation::new(self.config.resolved_help_text());
        element.remove_description_association(&help);
        self.disposed = true;
    }

    /// Delivers one input event addressed to the managed element.
    ///
    /// The built-in behavior for the current state runs first; if it does
    /// not consume the event, the embedder's listeners for that state run
    /// in attachment order until one returns [`Handled::Stop`].
    pub fn dispatch_input(
        &mut self,
        element: &mut dyn AccessibleElement,
        event: &InputEvent,
    ) -> Handled {
        if self.disposed || !self.enabled {
            return Handled::Continue;
        }
        match self.state {
            InteractionState::Grabbable => self.dispatch_grabbable(element, event),
            InteractionState::Draggable => self.dispatch_draggable(element, event),
        }
    }

    fn dispatch_grabbable(
        &mut self,
        element: &mut dyn AccessibleElement,
        event: &InputEvent,
    ) -> Handled {
        match *event {
            InputEvent::Click { from_pdom } => {
                if self.awaiting_synthetic_click {
                    // The echo of the Enter press that released the drag;
                    // consume it without re-grabbing.
                    self.awaiting_synthetic_click = false;
                    return Handled::Stop;
                }
                self.grab(element, from_pdom);
                return Handled::Stop;
            }
            InputEvent::PointerDown { from_pdom } => {
                if !from_pdom {
                    self.grab(element, false);
                    return Handled::Stop;
                }
            }
            InputEvent::KeyUp {
                key: Key::Enter, ..
            } => {
                // On hosts that never synthesize the click, the keyup of
                // the releasing press retires the guard instead.
                self.awaiting_synthetic_click = false;
            }
            InputEvent::Focus | InputEvent::Blur => {
                self.refresh_cues(element);
            }
            _ => {}
        }
        let mut outcome = Handled::Continue;
        for (_, listener) in &mut self.grab_listeners {
            if listener.on_event(event) == Handled::Stop {
                outcome = Handled::Stop;
                break;
            }
        }
        outcome
    }

    fn dispatch_draggable(
        &mut self,
        element: &mut dyn AccessibleElement,
        event: &InputEvent,
    ) -> Handled {
        match *event {
            InputEvent::KeyDown {
                key: Key::Enter, ..
            } => {
                // Enter releases on keydown; arm the guard for the click
                // its keyup will synthesize on the restored button.
                self.release_draggable(element);
                self.awaiting_synthetic_click = true;
                return Handled::Stop;
            }
            InputEvent::KeyUp {
                key: Key::Space, ..
            }
            | InputEvent::KeyDown {
                key: Key::Escape, ..
            } => {
                self.release_draggable(element);
                return Handled::Stop;
            }
            InputEvent::Blur => {
                // Focus left mid-drag (tab, focus steal); the drag cannot
                // continue without a keyboard target.
                self.release_draggable(element);
                return Handled::Continue;
            }
            InputEvent::Focus => {
                self.refresh_cues(element);
            }
            _ => {}
        }
        if self.keyboard_drag_handler.1.on_event(event) == Handled::Stop {
            return Handled::Stop;
        }
        let mut outcome = Handled::Continue;
        for (_, listener) in &mut self.drag_listeners {
            if listener.on_event(event) == Handled::Stop {
                outcome = Handled::Stop;
                break;
            }
        }
        outcome
    }

    /// Swaps the element between representations.
    ///
    /// Order matters: outgoing listeners are interrupted and detached
    /// before the representation batch is applied, and the incoming set is
    /// attached only after it, so no listener ever observes the element
    /// mid-swap. Focusability is asserted after the batch because the batch
    /// includes it.
    fn apply_state(
        &mut self,
        element: &mut dyn AccessibleElement,
        next: InteractionState,
        via_keyboard: bool,
    ) {
        let previous = self.state;

        match previous {
            InteractionState::Grabbable => {
                for (id, listener) in &mut self.grab_listeners {
                    listener.interrupt();
                    element.remove_input_listener(*id);
                }
                element.remove_input_listener(self.builtin_grab_id);
            }
            InteractionState::Draggable => {
                self.keyboard_drag_handler.1.interrupt();
                element.remove_input_listener(self.keyboard_drag_handler.0);
                for (id, listener) in &mut self.drag_listeners {
                    listener.interrupt();
                    element.remove_input_listener(*id);
                }
                element.remove_input_listener(self.builtin_drag_id);
            }
        }

        let representation = self.representation_for(next);
        element.apply_pdom(&representation);
        debug_assert!(
            element.is_focusable(),
            "a grab-drag element must stay keyboard-reachable across transitions"
        );

        match next {
            InteractionState::Grabbable => {
                element.add_input_listener(self.builtin_grab_id);
                for (id, _) in &self.grab_listeners {
                    element.add_input_listener(*id);
                }
            }
            InteractionState::Draggable => {
                element.add_input_listener(self.builtin_drag_id);
                element.add_input_listener(self.keyboard_drag_handler.0);
                for (id, _) in &self.drag_listeners {
                    element.add_input_listener(*id);
                }
            }
        }

        self.state = next;
        self.via_keyboard = via_keyboard;
        self.active_highlight = match next {
            InteractionState::Grabbable => HighlightKind::Solid,
            InteractionState::Draggable => HighlightKind::Dashed,
        };

        let help = glade_pdom::DescriptionAssociation::new(self.config.resolved_help_text());
        match next {
            InteractionState::Grabbable => {
                let context = self.cue_context(element);
                if (self.config.associate_help_text)(&self.counts, &context) {
                    element.add_description_association(&help);
                } else {
                    element.remove_description_association(&help);
                }
            }
            InteractionState::Draggable => {
                element.remove_description_association(&help);
            }
        }

        self.refresh_cues(element);
        self.revision = self.revision.wrapping_add(1);
        if let Some(trace) = &mut self.config.trace {
            if previous != next {
                trace.transition(previous, next, via_keyboard);
            }
        }
    }

    fn representation_for(&self, state: InteractionState) -> PdomConfig {
        let base = match state {
            InteractionState::Grabbable => &self.config.grab_pdom,
            InteractionState::Draggable => &self.config.drag_pdom,
        };
        base.clone().with_accessible_name(self.config.object_label.clone())
    }

    fn cue_context(&self, element: &dyn AccessibleElement) -> CueContext {
        CueContext {
            state: self.state,
            focused: element.is_focused(),
            via_keyboard: self.via_keyboard,
        }
    }

    fn refresh_cues(&mut self, element: &dyn AccessibleElement) {
        let context = self.cue_context(element);
        self.grab_cue_visible = (self.config.show_grab_cue)(&self.counts, &context);
        self.drag_cue_visible = (self.config.show_drag_cue)(&self.counts, &context);
    }
}

impl<L: InputListener> core::fmt::Debug for GrabDragController<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrabDragController")
            .field("state", &self.state)
            .field("counts", &self.counts)
            .field("enabled", &self.enabled)
            .field("disposed", &self.disposed)
            .field("awaiting_synthetic_click", &self.awaiting_synthetic_click)
            .field("active_highlight", &self.active_highlight)
            .finish_non_exhaustive()
    }
}
