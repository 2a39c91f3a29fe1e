// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessible representation: roles, batched configuration, and
//! description associations.

use alloc::string::String;

/// High-level accessible role of an element, in the spirit of ARIA roles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    /// An activatable button (the grab affordance of a grab-drag element).
    Button,
    /// A focusable container that handles its own keyboard input (the
    /// active representation of a grab-drag element while dragging).
    Application,
    /// A generic grouping container.
    Container,
    /// A value spinner with increment/decrement semantics.
    Spinner,
}

/// A batch of accessible-representation state, applied atomically.
///
/// Every field takes effect in one [`AccessibleElement::apply_pdom`]
/// call; a transition never leaves an element with a half-applied
/// representation. Note that the batch includes `focusable`, so
/// focusability checks belong *after* applying a batch, not before.
///
/// [`AccessibleElement::apply_pdom`]: crate::AccessibleElement::apply_pdom
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdomConfig {
    /// The accessible role.
    pub role: Role,
    /// The spoken name announced when the element is reached.
    ///
    /// There is a single source of truth for the name: layers that add
    /// their own name field must not also set this one.
    pub accessible_name: Option<String>,
    /// A spoken description of the role itself (an
    /// `aria-roledescription`-style override, e.g. "movable").
    pub role_description: Option<String>,
    /// Whether the element is reachable by keyboard focus.
    pub focusable: bool,
}

impl PdomConfig {
    /// A focusable button representation.
    #[must_use]
    pub fn button() -> Self {
        Self {
            role: Role::Button,
            accessible_name: None,
            role_description: None,
            focusable: true,
        }
    }

    /// A focusable application-like container representation.
    #[must_use]
    pub fn application() -> Self {
        Self {
            role: Role::Application,
            accessible_name: None,
            role_description: None,
            focusable: true,
        }
    }

    /// A focusable spinner representation.
    #[must_use]
    pub fn spinner() -> Self {
        Self {
            role: Role::Spinner,
            accessible_name: None,
            role_description: None,
            focusable: true,
        }
    }

    /// Sets the spoken name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name = Some(name.into());
        self
    }

    /// Sets the role description.
    #[must_use]
    pub fn with_role_description(mut self, description: impl Into<String>) -> Self {
        self.role_description = Some(description.into());
        self
    }

    /// Sets focusability.
    #[must_use]
    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }
}

/// Key for a help-text description association.
///
/// Associating a description with an element causes assistive technology to
/// read that descriptive text along with the element's primary
/// representation. Associations are identified by value, so the layer that
/// added one can later remove exactly that one.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DescriptionAssociation(String);

impl DescriptionAssociation {
    /// Creates an association key for the given description text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the associated description text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}
