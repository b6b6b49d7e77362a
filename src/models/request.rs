//! Teaching request model.
//!
//! A [`SubjectRequest`] is one unit of demand: a professor teaching a
//! subject to a set of student groups, placeable in a restricted set of
//! slots and classrooms. Requests are constructed once from external
//! input and never mutated afterward.

use serde::{Deserialize, Serialize};

use super::classroom::Classroom;
use super::slot::Slot;

/// Whether a class runs in the ordinary morning grid or the evening grid.
///
/// Morning classes may not occupy late-Saturday slots; evening classes
/// are restricted to evening-suitable slots (see [`Slot`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassKind {
    #[default]
    Morning,
    Evening,
}

/// An immutable teaching request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRequest {
    /// Stable external identifier (distinct from array position).
    pub id: u32,
    /// Professor identifier.
    pub professor: u32,
    /// Subject difficulty weight; heavier subjects are rewarded for
    /// earlier placement in the day.
    pub complexity: u32,
    /// Student groups attending, sorted and deduplicated.
    groups: Vec<u32>,
    /// Slots this request may occupy, sorted and deduplicated.
    /// Materialized to the full grid when no restriction is given.
    eligible_slots: Vec<Slot>,
    /// Acceptable classrooms, sorted and deduplicated. Empty means any
    /// room is acceptable.
    classrooms: Vec<Classroom>,
    /// Morning or evening placement rules.
    pub kind: ClassKind,
}

impl SubjectRequest {
    /// Creates a request eligible for every slot, acceptable in any room.
    pub fn new(id: u32, professor: u32, complexity: u32, groups: Vec<u32>) -> Self {
        let mut groups = groups;
        groups.sort_unstable();
        groups.dedup();
        Self {
            id,
            professor,
            complexity,
            groups,
            eligible_slots: Slot::all().collect(),
            classrooms: Vec::new(),
            kind: ClassKind::Morning,
        }
    }

    /// Restricts the eligible slot set. An empty set keeps "all slots".
    pub fn with_eligible_slots(mut self, slots: Vec<Slot>) -> Self {
        if !slots.is_empty() {
            let mut slots = slots;
            slots.sort_unstable();
            slots.dedup();
            self.eligible_slots = slots;
        }
        self
    }

    /// Restricts the acceptable classrooms. An empty set keeps "any room".
    pub fn with_classrooms(mut self, classrooms: Vec<Classroom>) -> Self {
        let mut classrooms: Vec<Classroom> = classrooms
            .into_iter()
            .filter(|c| !c.is_any() && !c.is_unassigned())
            .collect();
        classrooms.sort_unstable();
        classrooms.dedup();
        self.classrooms = classrooms;
        self
    }

    /// Sets the class kind.
    pub fn with_kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks this request as an evening class.
    pub fn evening(self) -> Self {
        self.with_kind(ClassKind::Evening)
    }

    /// Student groups, sorted ascending.
    pub fn groups(&self) -> &[u32] {
        &self.groups
    }

    /// Acceptable classrooms, sorted ascending. Empty means any room.
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    /// Eligible slots, sorted ascending.
    pub fn eligible_slots(&self) -> &[Slot] {
        &self.eligible_slots
    }

    /// Whether the request declared no classroom preference.
    pub fn accepts_any_classroom(&self) -> bool {
        self.classrooms.is_empty()
    }

    /// Whether `slot` is in the eligible set.
    pub fn is_slot_eligible(&self, slot: Slot) -> bool {
        self.eligible_slots.binary_search(&slot).is_ok()
    }

    /// Whether two requests share at least one student group.
    ///
    /// Both group lists are sorted, so a linear merge suffices.
    pub fn groups_intersect(&self, other: &SubjectRequest) -> bool {
        let (mut i, mut j) = (0, 0);
        while i < self.groups.len() && j < other.groups.len() {
            match self.groups[i].cmp(&other.groups[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => return true,
            }
        }
        false
    }

    /// The sorted common groups of two requests.
    pub fn common_groups(&self, other: &SubjectRequest) -> Vec<u32> {
        let mut common = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.groups.len() && j < other.groups.len() {
            match self.groups[i].cmp(&other.groups[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    common.push(self.groups[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        common
    }
}
