//! Schedule output model.
//!
//! A [`ScheduleResult`] is the externally consumable artifact of a run:
//! one [`PlacedLesson`] per request that ended with a real slot and
//! classroom, sorted by slot. Requests the search could not place are
//! simply absent; callers that care compare the result length to the
//! request count, or run the validator.

use serde::{Deserialize, Serialize};

use super::classroom::Classroom;
use super::slot::Slot;

/// One placed lesson on the wire: `{address, subject_request_id, classroom}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlacedLesson {
    /// The assigned slot.
    pub address: Slot,
    /// Stable external request id.
    pub subject_request_id: u32,
    /// The assigned classroom; [`Classroom::Any`] when the request had no
    /// room preference.
    pub classroom: Classroom,
}

/// A materialized schedule, sorted by slot. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleResult {
    lessons: Vec<PlacedLesson>,
}

impl ScheduleResult {
    /// Builds a result from placed lessons, sorting by slot.
    pub fn new(mut lessons: Vec<PlacedLesson>) -> Self {
        lessons.sort_unstable();
        Self { lessons }
    }

    /// The placed lessons in slot order.
    pub fn lessons(&self) -> &[PlacedLesson] {
        &self.lessons
    }

    /// Number of placed lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// All lessons placed at a given slot.
    pub fn at_slot(&self, slot: Slot) -> impl Iterator<Item = &PlacedLesson> {
        self.lessons.iter().filter(move |l| l.address == slot)
    }
}
