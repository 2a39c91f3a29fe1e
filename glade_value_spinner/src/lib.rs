// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Value Spinner: keyboard edge detection with press-and-hold
//! auto-repeat for accessible value widgets.
//!
//! [`ValueSpinner`] translates raw key-down/key-up events targeting a
//! focusable, value-bearing element into step requests, supporting both a
//! single step per press and continued stepping while a key is held. It
//! owns the repeat scheduling (via [`glade_repeat_timer`]) but not the
//! value: the caller applies the emitted [`SpinnerEvent`]s to its own
//! value, typically with [`ValueSpinner::apply`].
//!
//! ## Keys
//!
//! - `ArrowUp` / `ArrowRight`: increment one step (`Shift` held: one fine step)
//! - `ArrowDown` / `ArrowLeft`: decrement one step (`Shift` held: one fine step)
//! - `PageUp` / `PageDown`: increment / decrement one page step
//! - `Home` / `End`: jump to the range minimum / maximum
//!
//! Arrow and page keys auto-repeat while held; `Home` and `End` apply once.
//! All other keys are ignored.
//!
//! ## State machine
//!
//! The spinner is `Idle` (no recognized key held) or `Held` (one key owns
//! the hold and, for repeating keys, the timer is armed). Key-down of a
//! recognized key while `Idle` prevents the platform default action (the
//! host's native value events would double-apply the step otherwise),
//! applies one immediate step, and arms the repeat timer. The matching
//! key-up stops the timer *without* a final fire — the discrete key-down
//! already stepped. Blur and [`ValueSpinner::interrupt`] perform the same
//! cleanup, so no repeat loop survives focus loss.
//!
//! Two guards deal with platform noise rather than errors:
//!
//! - While `Held`, further key-downs are ignored: at most one armed repeat
//!   loop per element, and platform key auto-repeat cannot double-step.
//! - When the meta key is down, the timer is never armed and no hold is
//!   recorded, because some platforms suppress the matching key-up and a
//!   recorded hold could never be released. The step itself still applies,
//!   and since nothing owns the hold, OS auto-repeat of a meta-held key
//!   applies one step per delivered key-down.
//!
//! ## Minimal example
//!
//! ```
//! use glade_pdom::{AccessibleElement, Key, Modifiers, PdomConfig, SceneElement};
//! use glade_value_spinner::{SpinnerConfig, SpinnerEvent, ValueSpinner};
//!
//! // The element advertises itself as a spinner to assistive technology.
//! let mut element = SceneElement::new();
//! element.apply_pdom(&PdomConfig::spinner().with_accessible_name("Mass"));
//!
//! let mut spinner = ValueSpinner::new(SpinnerConfig::default());
//! let mut value = 50.0;
//!
//! // Key-down steps once immediately.
//! for event in spinner.key_down(Key::ArrowUp, Modifiers::empty()) {
//!     if let SpinnerEvent::Step(request) = event {
//!         value = spinner.apply(value, request);
//!     }
//! }
//! assert_eq!(value, 51.0);
//!
//! // Holding past the delay keeps stepping.
//! for event in spinner.step_frame(500.0) {
//!     if let SpinnerEvent::Step(request) = event {
//!         value = spinner.apply(value, request);
//!     }
//! }
//! assert_eq!(value, 53.0);
//!
//! spinner.key_up(Key::ArrowUp);
//! assert!(!spinner.is_held());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use glade_pdom::{InputEvent, Key, Modifiers};
use glade_repeat_timer::RepeatTimer;
use smallvec::SmallVec;

/// Range, step sizes, and repeat timing for a [`ValueSpinner`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpinnerConfig {
    /// Minimum of the value range.
    pub min: f64,
    /// Maximum of the value range.
    pub max: f64,
    /// Step applied per arrow-key press or repeat.
    pub step: f64,
    /// Finer step applied while `Shift` is held.
    pub fine_step: f64,
    /// Larger step applied per page-key press or repeat.
    pub page_step: f64,
    /// Milliseconds a key must be held before the first repeat.
    pub repeat_delay_ms: f64,
    /// Milliseconds between repeats.
    pub repeat_interval_ms: f64,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            fine_step: 0.1,
            page_step: 10.0,
            repeat_delay_ms: 400.0,
            repeat_interval_ms: 100.0,
        }
    }
}

/// Magnitude of a directional step.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StepSize {
    /// The configured `step`.
    Normal,
    /// The configured `fine_step` (`Shift` held).
    Fine,
    /// The configured `page_step`.
    Page,
}

/// A requested change to the caller-owned value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StepRequest {
    /// Move toward the maximum by the given step size.
    Increment(StepSize),
    /// Move toward the minimum by the given step size.
    Decrement(StepSize),
    /// Jump to the range minimum.
    ToMinimum,
    /// Jump to the range maximum.
    ToMaximum,
}

impl StepRequest {
    /// Returns `true` for requests that move toward the maximum.
    #[must_use]
    pub fn is_increment(self) -> bool {
        matches!(self, Self::Increment(_) | Self::ToMaximum)
    }
}

/// An event emitted by the spinner state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpinnerEvent {
    /// The host must prevent the platform default action for the key event
    /// that produced this, or native value events will double-apply the
    /// step.
    DefaultPrevented,
    /// Apply one step to the value (see [`ValueSpinner::apply`]).
    Step(StepRequest),
    /// Edge-triggered hold signal for the increment direction
    /// (`true` = now held, `false` = now released). For visual styling
    /// only; value changes arrive as [`SpinnerEvent::Step`].
    IncrementHeld(bool),
    /// Edge-triggered hold signal for the decrement direction.
    DecrementHeld(bool),
}

/// Inline event list returned by the spinner per call.
pub type SpinnerEvents = SmallVec<[SpinnerEvent; 3]>;

#[derive(Copy, Clone, Debug)]
struct Hold {
    key: Key,
    request: StepRequest,
    repeating: bool,
}

/// The keyboard spinner state machine. See the [crate docs](crate) for the
/// full protocol.
#[derive(Debug)]
pub struct ValueSpinner {
    config: SpinnerConfig,
    timer: RepeatTimer,
    hold: Option<Hold>,
}

impl ValueSpinner {
    /// Creates an idle spinner.
    ///
    /// Range and step configuration are trusted; inverted ranges and
    /// non-positive steps are integration bugs caught by debug assertions.
    #[must_use]
    pub fn new(config: SpinnerConfig) -> Self {
        debug_assert!(config.min <= config.max, "inverted spinner range");
        debug_assert!(config.step > 0.0, "non-positive spinner step");
        debug_assert!(config.fine_step > 0.0, "non-positive fine step");
        debug_assert!(config.page_step > 0.0, "non-positive page step");
        Self {
            timer: RepeatTimer::new(config.repeat_delay_ms, config.repeat_interval_ms),
            config,
            hold: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SpinnerConfig {
        &self.config
    }

    /// Returns `true` while a recognized key owns the hold.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.hold.is_some()
    }

    /// Returns `true` while the repeat timer is armed.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.timer.is_running()
    }

    /// Handles a key-down event targeting the spinner element.
    ///
    /// Unrecognized keys, and any key-down arriving while a hold is already
    /// in progress, are no-ops returning no events.
    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) -> SpinnerEvents {
        let mut events = SpinnerEvents::new();
        if self.hold.is_some() {
            return events;
        }
        let Some(request) = classify(key, modifiers) else {
            return events;
        };

        events.push(SpinnerEvent::DefaultPrevented);
        events.push(SpinnerEvent::Step(request));

        let repeatable = !matches!(request, StepRequest::ToMinimum | StepRequest::ToMaximum);
        if modifiers.contains(Modifiers::META) {
            // The matching key-up may never arrive while meta is down; arming
            // the timer here would leak a permanently running repeat loop.
            return events;
        }

        if repeatable {
            push_hold_edge(&mut events, request, true);
            let started = self.timer.start();
            debug_assert!(started, "repeat timer armed while idle");
        }
        self.hold = Some(Hold {
            key,
            request,
            repeating: repeatable,
        });
        events
    }

    /// Handles a key-up event. Only the key that owns the hold releases it;
    /// other key-ups are no-ops.
    pub fn key_up(&mut self, key: Key) -> SpinnerEvents {
        match self.hold {
            Some(hold) if hold.key == key => self.release(),
            _ => SpinnerEvents::new(),
        }
    }

    /// Handles focus loss: the held key is treated as released, so no
    /// repeat loop survives blur.
    pub fn blur(&mut self) -> SpinnerEvents {
        self.release()
    }

    /// External cancellation; identical cleanup to [`ValueSpinner::blur`].
    /// Idempotent and safe to call from any state.
    pub fn interrupt(&mut self) -> SpinnerEvents {
        self.release()
    }

    /// Advances the repeat timer by one frame step, emitting one
    /// [`SpinnerEvent::Step`] per due firing.
    pub fn step_frame(&mut self, dt_ms: f64) -> SpinnerEvents {
        let mut events = SpinnerEvents::new();
        let fires = self.timer.step(dt_ms);
        if fires == 0 {
            return events;
        }
        let Some(hold) = self.hold else {
            debug_assert!(false, "repeat fired with no key held");
            return events;
        };
        for _ in 0..fires {
            events.push(SpinnerEvent::Step(hold.request));
        }
        events
    }

    /// Routes an [`InputEvent`] to the matching handler. Events the spinner
    /// does not consume return no events.
    pub fn handle_event(&mut self, event: &InputEvent) -> SpinnerEvents {
        match *event {
            InputEvent::KeyDown { key, modifiers } => self.key_down(key, modifiers),
            InputEvent::KeyUp { key, .. } => self.key_up(key),
            InputEvent::Blur => self.blur(),
            _ => SpinnerEvents::new(),
        }
    }

    /// Applies a step request to a value, clamped to the configured range.
    ///
    /// Pure with respect to the spinner state; the caller owns the value.
    #[must_use]
    pub fn apply(&self, value: f64, request: StepRequest) -> f64 {
        let config = &self.config;
        let stepped = match request {
            StepRequest::Increment(size) => value + self.step_amount(size),
            StepRequest::Decrement(size) => value - self.step_amount(size),
            StepRequest::ToMinimum => config.min,
            StepRequest::ToMaximum => config.max,
        };
        stepped.clamp(config.min, config.max)
    }

    fn step_amount(&self, size: StepSize) -> f64 {
        match size {
            StepSize::Normal => self.config.step,
            StepSize::Fine => self.config.fine_step,
            StepSize::Page => self.config.page_step,
        }
    }

    fn release(&mut self) -> SpinnerEvents {
        let mut events = SpinnerEvents::new();
        if let Some(hold) = self.hold.take() {
            if hold.repeating {
                // The discrete key-down already applied a step; no final fire.
                self.timer.stop(false);
                push_hold_edge(&mut events, hold.request, false);
            }
        }
        events
    }
}

fn classify(key: Key, modifiers: Modifiers) -> Option<StepRequest> {
    let size = if modifiers.contains(Modifiers::SHIFT) {
        StepSize::Fine
    } else {
        StepSize::Normal
    };
    match key {
        Key::ArrowUp | Key::ArrowRight => Some(StepRequest::Increment(size)),
        Key::ArrowDown | Key::ArrowLeft => Some(StepRequest::Decrement(size)),
        Key::PageUp => Some(StepRequest::Increment(StepSize::Page)),
        Key::PageDown => Some(StepRequest::Decrement(StepSize::Page)),
        Key::Home => Some(StepRequest::ToMinimum),
        Key::End => Some(StepRequest::ToMaximum),
        _ => None,
    }
}

fn push_hold_edge(events: &mut SpinnerEvents, request: StepRequest, held: bool) {
    if request.is_increment() {
        events.push(SpinnerEvent::IncrementHeld(held));
    } else {
        events.push(SpinnerEvent::DecrementHeld(held));
    }
}
