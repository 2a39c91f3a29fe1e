// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests driving a grab-drag interaction the way a user would.

use std::cell::RefCell;
use std::rc::Rc;

use glade_grab_drag::{
    GrabDragConfig, GrabDragController, HighlightKind, InteractionState, RecordingTrace,
};
use glade_pdom::{
    AccessibleElement, Handled, InputEvent, InputListener, Key, Modifiers, Priority, SceneElement,
};

/// A listener that logs what it sees and remembers being interrupted.
#[derive(Clone, Default)]
struct Recorder {
    inner: Rc<RefCell<RecorderState>>,
}

#[derive(Default)]
struct RecorderState {
    events: Vec<InputEvent>,
    interrupts: usize,
    engaged: bool,
    consume_arrows: bool,
}

impl Recorder {
    fn consuming_arrows() -> Self {
        let recorder = Self::default();
        recorder.inner.borrow_mut().consume_arrows = true;
        recorder
    }

    fn engage(&self) {
        self.inner.borrow_mut().engaged = true;
    }

    fn events(&self) -> Vec<InputEvent> {
        self.inner.borrow().events.clone()
    }

    fn interrupts(&self) -> usize {
        self.inner.borrow().interrupts
    }
}

impl InputListener for Recorder {
    fn on_event(&mut self, event: &InputEvent) -> Handled {
        let mut state = self.inner.borrow_mut();
        state.events.push(*event);
        let consume = state.consume_arrows
            && matches!(
                event,
                InputEvent::KeyDown {
                    key: Key::ArrowUp
                        | Key::ArrowDown
                        | Key::ArrowLeft
                        | Key::ArrowRight,
                    ..
                }
            );
        if consume { Handled::Stop } else { Handled::Continue }
    }

    fn interrupt(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.interrupts += 1;
        state.engaged = false;
    }

    fn is_engaged(&self) -> bool {
        self.inner.borrow().engaged
    }
}

fn key_down(key: Key) -> InputEvent {
    InputEvent::KeyDown {
        key,
        modifiers: Modifiers::empty(),
    }
}

fn key_up(key: Key) -> InputEvent {
    InputEvent::KeyUp {
        key,
        modifiers: Modifiers::empty(),
    }
}

const PDOM_CLICK: InputEvent = InputEvent::Click { from_pdom: true };

#[test]
fn listener_sets_are_mutually_exclusive_across_transitions() {
    let mut controller = GrabDragController::new(
        Recorder::default(),
        vec![Recorder::default()],
        vec![Recorder::default()],
        GrabDragConfig::new("Balloon"),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);

    for _ in 0..5 {
        for id in controller.grab_listener_ids() {
            assert!(element.has_input_listener(id));
        }
        for id in controller.drag_listener_ids() {
            assert!(!element.has_input_listener(id));
        }

        controller.dispatch_input(&mut element, &PDOM_CLICK);
        assert_eq!(controller.state(), InteractionState::Draggable);
        for id in controller.grab_listener_ids() {
            assert!(!element.has_input_listener(id));
        }
        for id in controller.drag_listener_ids() {
            assert!(element.has_input_listener(id));
        }

        controller.dispatch_input(&mut element, &key_up(Key::Space));
        assert_eq!(controller.state(), InteractionState::Grabbable);
    }
}

#[test]
fn element_stays_focusable_and_keyboard_grab_focuses() {
    let mut controller = GrabDragController::new(
        Recorder::default(),
        vec![],
        vec![],
        GrabDragConfig::new("Balloon"),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);
    assert!(element.is_focusable());

    element.focus();
    controller.dispatch_input(&mut element, &PDOM_CLICK);
    assert!(element.is_focusable());
    assert!(element.is_focused());

    controller.dispatch_input(&mut element, &key_up(Key::Space));
    assert!(element.is_focusable());
    // Focus survives the representation swap back to the button.
    assert!(element.is_focused());
}

#[test]
fn enter_release_swallows_the_synthetic_click() {
    let mut controller = GrabDragController::new(
        Recorder::default(),
        vec![],
        vec![],
        GrabDragConfig::new("Balloon"),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);

    controller.dispatch_input(&mut element, &PDOM_CLICK);
    assert_eq!(controller.state(), InteractionState::Draggable);

    // Enter releases on keydown...
    controller.dispatch_input(&mut element, &key_down(Key::Enter));
    assert_eq!(controller.state(), InteractionState::Grabbable);

    // ...and the click synthesized by its keyup must not re-grab.
    assert_eq!(
        controller.dispatch_input(&mut element, &PDOM_CLICK),
        Handled::Stop
    );
    assert_eq!(controller.state(), InteractionState::Grabbable);
    assert_eq!(controller.counts().total, 1);

    // The next genuine activation grabs again.
    controller.dispatch_input(&mut element, &PDOM_CLICK);
    assert_eq!(controller.state(), InteractionState::Draggable);
    assert_eq!(controller.counts().total, 2);
}

#[test]
fn enter_keyup_retires_the_guard_without_a_synthetic_click() {
    let mut controller = GrabDragController::new(
        Recorder::default(),
        vec![],
        vec![],
        GrabDragConfig::new("Balloon"),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);

    controller.dispatch_input(&mut element, &PDOM_CLICK);
    controller.dispatch_input(&mut element, &key_down(Key::Enter));
    assert_eq!(controller.state(), InteractionState::Grabbable);

    // Host never synthesizes the click; the keyup clears the guard so the
    // next real click is not eaten.
    controller.dispatch_input(&mut element, &key_up(Key::Enter));
    controller.dispatch_input(&mut element, &PDOM_CLICK);
    assert_eq!(controller.state(), InteractionState::Draggable);
}

#[test]
fn counts_and_cues_track_grab_history() {
    let mut controller = GrabDragController::new(
        Recorder::default(),
        vec![],
        vec![],
        GrabDragConfig::new("Balloon"),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);

    assert!(controller.grab_cue_visible());
    assert_eq!(element.description_association_count(), 1);

    // A pointer grab counts as a grab but not a keyboard grab; the grab cue
    // (keyed to keyboard discovery) stays up.
    controller.dispatch_input(&mut element, &InputEvent::PointerDown { from_pdom: false });
    assert_eq!(controller.counts().total, 1);
    assert_eq!(controller.counts().keyboard, 0);
    controller.dispatch_input(&mut element, &key_up(Key::Space));
    assert!(controller.grab_cue_visible());
    assert_eq!(element.description_association_count(), 1);

    // The second grab retires the help text; a keyboard grab retires the
    // grab cue.
    element.focus();
    controller.dispatch_input(&mut element, &PDOM_CLICK);
    assert_eq!(controller.counts().total, 2);
    assert_eq!(controller.counts().keyboard, 1);
    assert!(!controller.grab_cue_visible());
    assert!(controller.drag_cue_visible());
    assert_eq!(element.description_association_count(), 0);

    controller.dispatch_input(&mut element, &key_up(Key::Space));
    assert!(!controller.grab_cue_visible());
    assert_eq!(element.description_association_count(), 0);

    // Reset restores the teaching state.
    controller.reset(&mut element);
    assert_eq!(controller.counts().total, 0);
    assert!(controller.grab_cue_visible());
    assert_eq!(element.description_association_count(), 1);
}

#[test]
fn round_trip_announcements_and_trace() {
    let trace = Rc::new(RefCell::new(RecordingTrace::new()));
    let mut controller = GrabDragController::new(
        Recorder::default(),
        vec![],
        vec![],
        GrabDragConfig::new("Balloon").with_trace(Rc::clone(&trace)),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);

    element.focus();
    controller.dispatch_input(&mut element, &PDOM_CLICK);
    controller.dispatch_input(&mut element, &key_up(Key::Space));

    let spoken = controller.utterances_mut().drain();
    // "Released." is assertive and jumps ahead of the queued polite drag
    // hint from the first keyboard grab.
    assert_eq!(spoken[0].text, "Released.");
    assert_eq!(spoken[0].priority, Priority::Assertive);
    assert_eq!(
        spoken[1].text,
        "Move with the arrow keys. Press Space to release."
    );
    assert_eq!(spoken[1].priority, Priority::Polite);

    assert_eq!(
        trace.borrow().transitions,
        vec![
            (InteractionState::Grabbable, InteractionState::Draggable, true),
            (InteractionState::Draggable, InteractionState::Grabbable, true),
        ]
    );
}

#[test]
fn interrupt_cancels_engaged_listeners_silently() {
    let handler = Recorder::default();
    let handler_handle = handler.clone();
    let mut controller = GrabDragController::new(
        handler,
        vec![],
        vec![],
        GrabDragConfig::new("Balloon"),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);

    controller.dispatch_input(&mut element, &PDOM_CLICK);
    let _ = controller.utterances_mut().drain();
    handler_handle.engage();
    assert!(controller.any_drag_listener_engaged());

    controller.interrupt(&mut element);
    assert_eq!(controller.state(), InteractionState::Grabbable);
    assert!(!controller.any_drag_listener_engaged());
    assert_eq!(handler_handle.interrupts(), 1);
    // Forced cancellation is not a user release; nothing is announced.
    assert!(controller.utterances_mut().is_empty());
}

#[test]
fn blur_mid_drag_releases() {
    let mut controller = GrabDragController::new(
        Recorder::default(),
        vec![],
        vec![],
        GrabDragConfig::new("Balloon"),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);

    controller.dispatch_input(&mut element, &PDOM_CLICK);
    let _ = controller.utterances_mut().drain();

    element.blur();
    controller.dispatch_input(&mut element, &InputEvent::Blur);
    assert_eq!(controller.state(), InteractionState::Grabbable);
    assert_eq!(controller.utterances_mut().next().unwrap().text, "Released.");
}

#[test]
fn active_highlight_follows_the_state() {
    let mut controller = GrabDragController::new(
        Recorder::default(),
        vec![],
        vec![],
        GrabDragConfig::new("Balloon"),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);

    use kurbo::Shape;
    let shape = kurbo::Rect::new(0.0, 0.0, 60.0, 30.0).to_path(0.1);
    controller.set_highlight_shape(&shape);
    assert_eq!(controller.active_highlight(), HighlightKind::Solid);

    controller.dispatch_input(&mut element, &PDOM_CLICK);
    assert_eq!(controller.active_highlight(), HighlightKind::Dashed);
    assert!(!controller.highlights().dashed().elements().is_empty());

    controller.dispatch_input(&mut element, &key_up(Key::Space));
    assert_eq!(controller.active_highlight(), HighlightKind::Solid);
}

#[test]
fn drag_handler_sees_movement_keys_only_while_draggable() {
    let handler = Recorder::consuming_arrows();
    let handler_handle = handler.clone();
    let extra = Recorder::default();
    let extra_handle = extra.clone();
    let mut controller = GrabDragController::new(
        handler,
        vec![],
        vec![extra],
        GrabDragConfig::new("Balloon"),
    );
    let mut element = SceneElement::new();
    controller.attach(&mut element);

    // While grabbable, movement keys never reach the drag handler.
    controller.dispatch_input(&mut element, &key_down(Key::ArrowRight));
    assert!(handler_handle.events().is_empty());

    controller.dispatch_input(&mut element, &PDOM_CLICK);
    assert_eq!(
        controller.dispatch_input(&mut element, &key_down(Key::ArrowRight)),
        Handled::Stop
    );
    assert_eq!(handler_handle.events(), vec![key_down(Key::ArrowRight)]);
    // The handler consumed the event, so the extra drag listener never saw
    // it.
    assert!(extra_handle.events().is_empty());

    // Non-movement keys flow through to the extras.
    controller.dispatch_input(&mut element, &key_down(Key::Tab));
    assert_eq!(extra_handle.events(), vec![key_down(Key::Tab)]);
}
