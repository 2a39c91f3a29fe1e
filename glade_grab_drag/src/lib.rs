// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grabbable/draggable interaction with accessible-representation swapping.
//!
//! A grab-drag element presents two faces to assistive technology. While
//! *grabbable* it is a button: reachable in a screen reader's form-controls
//! list, activated to pick the object up. While *draggable* it is an
//! application-like container that consumes keyboard input directly to move
//! the object. [`GrabDragController`] owns that two-state machine for one
//! element: it swaps the accessible representation atomically, keeps the
//! two listener sets mutually exclusive, maintains a solid/dashed focus
//! highlight pair, gates the instructional cues and help text on grab
//! history, and queues "Released." announcements.
//!
//! The controller is deliberately free of scene-graph and platform ties.
//! The element appears only as the [`AccessibleElement`] capability
//! interface, input arrives as normalized [`InputEvent`]s, and announcements
//! leave through an [`UtteranceQueue`] the embedder drains. See
//! [`glade_pdom`] for those seams.
//!
//! ## Minimal example
//!
//! ```
//! use glade_grab_drag::{GrabDragConfig, GrabDragController, InteractionState};
//! use glade_pdom::{Handled, InputEvent, InputListener, Key, Modifiers, SceneElement};
//!
//! struct ArrowKeyMover;
//! impl InputListener for ArrowKeyMover {
//!     fn on_event(&mut self, event: &InputEvent) -> Handled {
//!         match event {
//!             InputEvent::KeyDown { key: Key::ArrowLeft | Key::ArrowRight, .. } => {
//!                 // Move the object here.
//!                 Handled::Stop
//!             }
//!             _ => Handled::Continue,
//!         }
//!     }
//! }
//!
//! let mut element = SceneElement::new();
//! let mut controller = GrabDragController::new(
//!     ArrowKeyMover,
//!     vec![],
//!     vec![],
//!     GrabDragConfig::new("Magnet"),
//! );
//! controller.attach(&mut element);
//!
//! // Activating the button grabs the magnet.
//! controller.dispatch_input(&mut element, &InputEvent::Click { from_pdom: true });
//! assert_eq!(controller.state(), InteractionState::Draggable);
//!
//! // Space releases it.
//! let space_up = InputEvent::KeyUp { key: Key::Space, modifiers: Modifiers::empty() };
//! controller.dispatch_input(&mut element, &space_up);
//! assert_eq!(controller.state(), InteractionState::Grabbable);
//! assert_eq!(controller.utterances_mut().next().unwrap().text, "Released.");
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): use the Rust standard library in the
//!   [`kurbo`] dependency.
//! - `libm`: use [`libm`](https://crates.io/crates/libm) for math in
//!   `no_std` builds of [`kurbo`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod highlight;
mod state;
mod trace;

pub use config::{CuePredicate, GrabDragConfig, LifecycleCallback};
pub use controller::GrabDragController;
pub use highlight::{HighlightKind, HighlightPair};
pub use state::{CueContext, GrabCounts, InteractionState};
pub use trace::{RecordingTrace, TransitionTrace};

#[doc(no_inline)]
pub use glade_pdom::{AccessibleElement, InputEvent, InputListener, UtteranceQueue};
