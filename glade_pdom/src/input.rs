// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized input events and the listener seam.

/// A keyboard key, normalized from the host platform.
///
/// Only keys the interaction state machines act on are distinguished;
/// everything else (including malformed platform events with no recoverable
/// key code) maps to [`Key::Other`] and degrades to a no-op downstream.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Any key the state machines do not act on.
    Other,
}

bitflags::bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

/// An input event targeting a managed element.
///
/// Routing (hit testing, focus resolution, capture/bubble) happens upstream;
/// by the time an event reaches an interaction controller it is already
/// addressed to the one element that controller manages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown {
        /// The normalized key.
        key: Key,
        /// Modifiers held at the time of the event.
        modifiers: Modifiers,
    },
    /// A key went up.
    KeyUp {
        /// The normalized key.
        key: Key,
        /// Modifiers held at the time of the event.
        modifiers: Modifiers,
    },
    /// An activation click.
    ///
    /// `from_pdom` is `true` when the click was synthesized through the
    /// accessible tree (keyboard activation of a button role, or a
    /// screen-reader virtual cursor) rather than produced by a pointer.
    Click {
        /// Whether the click came through the accessible tree.
        from_pdom: bool,
    },
    /// A pointer press began.
    PointerDown {
        /// Whether the press came through the accessible tree.
        from_pdom: bool,
    },
    /// A pointer press ended.
    PointerUp,
    /// The element gained keyboard focus.
    Focus,
    /// The element lost keyboard focus.
    Blur,
}

/// Outcome of delivering an event to one listener.
///
/// Listeners in a set run in order; [`Handled::Stop`] prevents delivery to
/// the listeners after this one for the same event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Handled {
    /// Keep delivering the event to subsequent listeners.
    Continue,
    /// The event is consumed; skip subsequent listeners.
    Stop,
}

/// An input listener with an explicit interruption capability.
///
/// `interrupt` forcibly cancels any in-progress gesture the listener is
/// tracking; implementations with no gesture state keep the default no-op.
/// Making interruption part of the trait (instead of probing for it at
/// runtime) means "interrupt everything in the outgoing listener set" is a
/// plain loop of static calls.
pub trait InputListener {
    /// Delivers one event to this listener.
    fn on_event(&mut self, event: &InputEvent) -> Handled;

    /// Forcibly cancels any in-progress gesture.
    fn interrupt(&mut self) {}

    /// Returns `true` while the listener is tracking an in-progress gesture.
    fn is_engaged(&self) -> bool {
        false
    }
}

/// Handle for a listener attached to an element's input dispatch.
///
/// A small, copyable identifier. Controllers mint ids from their own
/// counters and ids are never reused, so a stale id never aliases a live
/// listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Creates a handle from a raw id value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_compose() {
        let mods = Modifiers::SHIFT | Modifiers::META;
        assert!(mods.contains(Modifiers::META));
        assert!(!mods.contains(Modifiers::CTRL));
        assert_eq!(Modifiers::default(), Modifiers::empty());
    }

    #[test]
    fn listener_defaults_are_inert() {
        struct Inert;
        impl InputListener for Inert {
            fn on_event(&mut self, _event: &InputEvent) -> Handled {
                Handled::Continue
            }
        }

        let mut listener = Inert;
        assert!(!listener.is_engaged());
        listener.interrupt();
        assert_eq!(listener.on_event(&InputEvent::PointerUp), Handled::Continue);
    }

    #[test]
    fn listener_ids_round_trip() {
        let id = ListenerId::from_raw(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id, ListenerId::from_raw(7));
        assert_ne!(id, ListenerId::from_raw(8));
    }
}
