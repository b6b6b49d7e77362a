//! Slot arithmetic for the two-week lesson cycle.
//!
//! The timetable is a flat grid of 84 slots: 7 lesson positions per day,
//! 6 weekdays per week, and a 12-day cycle covering two parity weeks
//! (the same weekday recurs at day offsets `d` and `d + 6`, modeling
//! alternating-week curricula).
//!
//! Two placement predicates are derived from the grid position:
//! - *late Saturday* (lesson 4..=6 on a Saturday day) is off-limits for
//!   ordinary morning classes;
//! - *evening-suitable* slots are lesson 5..=6 on any non-Saturday day,
//!   or any lesson on a Saturday day.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lesson positions per day.
pub const LESSONS_PER_DAY: u16 = 7;
/// Weekdays per week (Monday..Saturday).
pub const WEEKDAYS_PER_WEEK: u16 = 6;
/// Days in the scheduling cycle (two parity weeks).
pub const DAYS_PER_CYCLE: u16 = 12;
/// Total slots in the cycle.
pub const SLOT_COUNT: u16 = LESSONS_PER_DAY * DAYS_PER_CYCLE;

/// Weekday index of Saturday.
const SATURDAY: u16 = 5;

/// A flat address of one lesson period within the two-week cycle.
///
/// Always in `0..SLOT_COUNT`; construction is checked, arithmetic never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Slot(u16);

impl Slot {
    /// Creates a slot from a flat index, or `None` if out of range.
    pub fn new(index: u16) -> Option<Self> {
        (index < SLOT_COUNT).then_some(Self(index))
    }

    /// Creates a slot from a day (`0..12`) and lesson position (`0..7`).
    pub fn from_parts(day: u16, lesson: u16) -> Option<Self> {
        if day < DAYS_PER_CYCLE && lesson < LESSONS_PER_DAY {
            Some(Self(day * LESSONS_PER_DAY + lesson))
        } else {
            None
        }
    }

    /// Flat index in `0..84`.
    #[inline]
    pub fn index(self) -> u16 {
        self.0
    }

    /// Day within the cycle (`0..12`).
    #[inline]
    pub fn day(self) -> u16 {
        self.0 / LESSONS_PER_DAY
    }

    /// Weekday (`0..6`, `day % 6`). Both parity weeks map to the same weekday.
    #[inline]
    pub fn weekday(self) -> u16 {
        self.day() % WEEKDAYS_PER_WEEK
    }

    /// Lesson position within the day (`0..7`).
    #[inline]
    pub fn lesson_in_day(self) -> u16 {
        self.0 % LESSONS_PER_DAY
    }

    /// Whether this slot falls on a Saturday day (either parity week).
    #[inline]
    pub fn is_saturday(self) -> bool {
        self.weekday() == SATURDAY
    }

    /// Late-Saturday slots (lesson 4..=6 on a Saturday) are disallowed
    /// for ordinary morning classes.
    #[inline]
    pub fn is_late_saturday(self) -> bool {
        self.is_saturday() && self.lesson_in_day() >= 4
    }

    /// Whether an evening class may occupy this slot: the last two lesson
    /// positions on a non-Saturday day, or any position on a Saturday.
    #[inline]
    pub fn is_evening_suitable(self) -> bool {
        self.is_saturday() || self.lesson_in_day() >= 5
    }

    /// The slot one lesson later on the same day, if any.
    pub fn next_in_day(self) -> Option<Self> {
        if self.lesson_in_day() + 1 < LESSONS_PER_DAY {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }

    /// All slots in cycle order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT).map(Slot)
    }
}

impl TryFrom<u16> for Slot {
    type Error = String;

    fn try_from(index: u16) -> Result<Self, Self::Error> {
        Slot::new(index).ok_or_else(|| format!("slot index {index} out of range 0..{SLOT_COUNT}"))
    }
}

impl From<Slot> for u16 {
    fn from(slot: Slot) -> u16 {
        slot.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}l{}", self.day(), self.lesson_in_day())
    }
}
