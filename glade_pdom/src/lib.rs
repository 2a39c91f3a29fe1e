// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade PDOM: the parallel-DOM capability surface shared by the Glade
//! interaction crates.
//!
//! A *parallel DOM* (PDOM) is an accessibility-tree representation of a
//! visual scene graph: roles, names, descriptions, and focus state exposed
//! to assistive technology independently of pixel rendering. This crate does
//! not build or own such a tree. It defines the small vocabulary the
//! interaction state machines need to talk about one:
//!
//! - [`Key`], [`Modifiers`], and [`InputEvent`]: normalized keyboard,
//!   pointer, and focus events. Events synthesized through the accessible
//!   tree (a screen-reader virtual cursor activating a button) carry a
//!   `from_pdom` marker so state machines can keep the accessible and
//!   pointer paths from double-triggering each other.
//! - [`InputListener`] and [`ListenerId`]: the listener seam. Interruption
//!   is part of the trait (default no-op) rather than a runtime capability
//!   probe, so "cancel any in-progress gesture" is a static call.
//! - [`Role`], [`PdomConfig`], and [`DescriptionAssociation`]: the
//!   accessible representation of an element, applied as one atomic batch.
//! - [`AccessibleElement`]: the capability interface of a managed element —
//!   everything an interaction controller may do to the node that owns it.
//! - [`SceneElement`]: a plain-data reference implementation of
//!   [`AccessibleElement`], used by tests and by embedders without a richer
//!   node type.
//! - [`Utterance`] and [`UtteranceQueue`]: priority-tagged screen-reader
//!   announcements, queued for the embedder to hand to its announcer.
//!
//! ## Minimal example
//!
//! ```
//! use glade_pdom::{AccessibleElement, PdomConfig, Role, SceneElement};
//!
//! let mut element = SceneElement::new();
//! element.apply_pdom(&PdomConfig::button().with_accessible_name("Magnet"));
//! assert!(element.is_focusable());
//! assert_eq!(element.role(), Role::Button);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
mod input;
mod representation;
mod utterance;

pub use element::{AccessibleElement, SceneElement};
pub use input::{Handled, InputEvent, InputListener, Key, ListenerId, Modifiers};
pub use representation::{DescriptionAssociation, PdomConfig, Role};
pub use utterance::{Priority, Utterance, UtteranceQueue};
