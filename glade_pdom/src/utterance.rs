// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority-tagged screen-reader announcements.

use alloc::string::String;
use alloc::vec::Vec;

/// Announcement priority.
///
/// Assertive utterances are for state changes that must not be silently
/// dropped under rapid-fire interaction (a "released" announcement during
/// fast movement); polite utterances wait their turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Priority {
    /// Spoken in queue order.
    Polite,
    /// Jumps ahead of queued polite utterances.
    Assertive,
}

/// One queued unit of text intended for screen-reader announcement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utterance {
    /// The text to speak.
    pub text: String,
    /// The announcement priority.
    pub priority: Priority,
}

/// A priority-ordered announcement queue.
///
/// The queue is decoupled from any actual announcer: interaction
/// controllers push into it during transitions, and the embedder drains it
/// into whatever speech collaborator it has. An assertive utterance is
/// inserted ahead of all queued polite utterances but behind earlier
/// assertive ones, so assertive announcements keep their relative order and
/// nothing is ever dropped.
///
/// ```
/// use glade_pdom::{Priority, UtteranceQueue};
///
/// let mut queue = UtteranceQueue::new();
/// queue.announce("grabbed", Priority::Polite);
/// queue.announce("released", Priority::Assertive);
///
/// let spoken: Vec<_> = queue.drain().into_iter().map(|u| u.text).collect();
/// assert_eq!(spoken, ["released", "grabbed"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UtteranceQueue {
    queue: Vec<Utterance>,
    revision: u64,
}

impl UtteranceQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: Vec::new(),
            revision: 0,
        }
    }

    /// Queues an utterance according to its priority.
    pub fn announce(&mut self, text: impl Into<String>, priority: Priority) {
        let utterance = Utterance {
            text: text.into(),
            priority,
        };
        match priority {
            Priority::Polite => self.queue.push(utterance),
            Priority::Assertive => {
                let insert_at = self
                    .queue
                    .iter()
                    .position(|queued| queued.priority == Priority::Polite)
                    .unwrap_or(self.queue.len());
                self.queue.insert(insert_at, utterance);
            }
        }
        self.revision = self.revision.wrapping_add(1);
    }

    /// Removes and returns the next utterance to speak, if any.
    pub fn next(&mut self) -> Option<Utterance> {
        if self.queue.is_empty() {
            return None;
        }
        self.revision = self.revision.wrapping_add(1);
        Some(self.queue.remove(0))
    }

    /// Removes and returns all queued utterances in speaking order.
    pub fn drain(&mut self) -> Vec<Utterance> {
        if !self.queue.is_empty() {
            self.revision = self.revision.wrapping_add(1);
        }
        core::mem::take(&mut self.queue)
    }

    /// Returns the number of queued utterances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns a monotonically increasing change counter.
    ///
    /// Bumped on every mutation that changes the queue contents; a cheap
    /// "did anything happen?" marker for embedders polling once per frame.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
