// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The managed-element capability interface and a plain-data reference
//! implementation.

use alloc::string::String;
use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::input::ListenerId;
use crate::representation::{DescriptionAssociation, PdomConfig, Role};

/// The capability interface of a managed element.
///
/// This is everything an interaction controller may do to the scene-graph
/// node that owns it: listener attachment bookkeeping, focus, and the
/// accessible representation. Controllers receive an element by `&mut`
/// reference per call and never hold one, so a single element can be managed
/// alongside whatever else the embedder does with it — provided only one
/// controller manages it (attachment bookkeeping is single-writer).
///
/// Scene-graph concerns with no accessibility contract — geometry, painting,
/// hit testing — are deliberately absent.
pub trait AccessibleElement {
    /// Attaches a listener id to this element's input dispatch.
    ///
    /// Attaching an already-attached id is a no-op; controllers rely on this
    /// to make re-entrant transitions idempotent.
    fn add_input_listener(&mut self, id: ListenerId);

    /// Detaches a listener id. Detaching an id that is not attached is a
    /// no-op.
    fn remove_input_listener(&mut self, id: ListenerId);

    /// Returns `true` if the listener id is currently attached.
    fn has_input_listener(&self, id: ListenerId) -> bool;

    /// Returns `true` if the element is reachable by keyboard focus.
    fn is_focusable(&self) -> bool;

    /// Sets keyboard focusability.
    fn set_focusable(&mut self, focusable: bool);

    /// Moves keyboard focus to this element. No-op if not focusable.
    fn focus(&mut self);

    /// Removes keyboard focus from this element.
    fn blur(&mut self);

    /// Returns `true` while the element holds keyboard focus.
    fn is_focused(&self) -> bool;

    /// Applies a batch of accessible-representation state atomically.
    ///
    /// The batch includes focusability, so invariants about focus must be
    /// checked after the batch, never before.
    fn apply_pdom(&mut self, config: &PdomConfig);

    /// Sets a PDOM attribute (an `aria-*`-style key/value pair).
    fn set_pdom_attribute(&mut self, key: &str, value: &str);

    /// Removes a PDOM attribute. No-op if absent.
    fn remove_pdom_attribute(&mut self, key: &str);

    /// Returns the value of a PDOM attribute, if set.
    fn pdom_attribute(&self, key: &str) -> Option<&str>;

    /// Associates descriptive help text with this element's primary
    /// representation. Adding the same association twice is a no-op.
    fn add_description_association(&mut self, association: &DescriptionAssociation);

    /// Removes a description association. No-op if absent.
    fn remove_description_association(&mut self, association: &DescriptionAssociation);

    /// Returns `true` if the association is currently present.
    fn has_description_association(&self, association: &DescriptionAssociation) -> bool;
}

/// A plain-data [`AccessibleElement`].
///
/// This is the reference implementation used throughout the Glade test
/// suites, and a reasonable starting point for embedders whose node type
/// has no accessibility state of its own. It stores exactly what the trait
/// describes and nothing else.
///
/// ```
/// use glade_pdom::{AccessibleElement, ListenerId, SceneElement};
///
/// let mut element = SceneElement::new();
/// let id = ListenerId::from_raw(1);
/// element.add_input_listener(id);
/// assert!(element.has_input_listener(id));
/// element.remove_input_listener(id);
/// assert!(!element.has_input_listener(id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SceneElement {
    listeners: SmallVec<[ListenerId; 4]>,
    pdom: Option<PdomConfig>,
    focusable: bool,
    focused: bool,
    attributes: HashMap<String, String>,
    associations: HashSet<DescriptionAssociation>,
}

impl SceneElement {
    /// Creates an element with no listeners, no accessible representation,
    /// and focus disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accessible role most recently applied, if any.
    #[must_use]
    pub fn role(&self) -> Role {
        self.pdom.as_ref().map_or(Role::Container, |p| p.role)
    }

    /// Returns the full accessible representation most recently applied.
    #[must_use]
    pub fn pdom(&self) -> Option<&PdomConfig> {
        self.pdom.as_ref()
    }

    /// Returns the currently attached listener ids in attachment order.
    #[must_use]
    pub fn attached_listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Returns the number of description associations present.
    #[must_use]
    pub fn description_association_count(&self) -> usize {
        self.associations.len()
    }
}

impl AccessibleElement for SceneElement {
    fn add_input_listener(&mut self, id: ListenerId) {
        if !self.listeners.contains(&id) {
            self.listeners.push(id);
        }
    }

    fn remove_input_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|existing| *existing != id);
    }

    fn has_input_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(&id)
    }

    fn is_focusable(&self) -> bool {
        self.focusable
    }

    fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
        if !focusable {
            self.focused = false;
        }
    }

    fn focus(&mut self) {
        if self.focusable {
            self.focused = true;
        }
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn apply_pdom(&mut self, config: &PdomConfig) {
        self.set_focusable(config.focusable);
        self.pdom = Some(config.clone());
    }

    fn set_pdom_attribute(&mut self, key: &str, value: &str) {
        self.attributes.insert(String::from(key), String::from(value));
    }

    fn remove_pdom_attribute(&mut self, key: &str) {
        self.attributes.remove(key);
    }

    fn pdom_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn add_description_association(&mut self, association: &DescriptionAssociation) {
        self.associations.insert(association.clone());
    }

    fn remove_description_association(&mut self, association: &DescriptionAssociation) {
        self.associations.remove(association);
    }

    fn has_description_association(&self, association: &DescriptionAssociation) -> bool {
        self.associations.contains(association)
    }
}
