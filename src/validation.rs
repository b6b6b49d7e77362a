//! Post-hoc schedule conflict validation.
//!
//! [`check_schedule`] is independent of the GA: it scans a materialized
//! [`ScheduleResult`] against the original [`ScheduleData`] and reports
//! every double booking it finds. Used both to audit GA output and to
//! diagnose manually edited schedules submitted through the external
//! interface.
//!
//! Detects, per slot:
//! - a real classroom held by two or more requests (the `Any` sentinel
//!   never conflicts);
//! - a professor holding two or more lessons;
//! - pairs of co-occupying requests with intersecting group sets;
//! - lessons placed outside their request's eligible slot set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Classroom, ScheduleData, ScheduleResult, Slot};

/// A classroom held by several requests in the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlappedClassroom {
    /// The contested slot.
    pub address: Slot,
    /// The doubly-held classroom.
    pub classroom: Classroom,
    /// Subject-request ids occupying it, ascending.
    pub subject_ids: Vec<u32>,
}

/// A professor teaching several lessons in the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlappedProfessor {
    pub address: Slot,
    pub professor: u32,
    /// Subject-request ids taught simultaneously, ascending.
    pub subject_ids: Vec<u32>,
}

/// Two co-occupying requests whose group sets intersect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlappedGroups {
    pub address: Slot,
    /// The common groups, ascending.
    pub groups: Vec<u32>,
    /// The two conflicting subject-request ids, ascending.
    pub subject_ids: Vec<u32>,
}

/// A lesson placed on a slot its request never declared eligible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolatedWeekday {
    pub address: Slot,
    pub subject_id: u32,
}

/// The full diagnostic report of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckScheduleResult {
    pub overlapped_classrooms: Vec<OverlappedClassroom>,
    pub overlapped_professors: Vec<OverlappedProfessor>,
    pub overlapped_groups: Vec<OverlappedGroups>,
    pub violated_weekdays: Vec<ViolatedWeekday>,
}

impl CheckScheduleResult {
    /// Whether the schedule passed every check.
    pub fn is_clean(&self) -> bool {
        self.overlapped_classrooms.is_empty()
            && self.overlapped_professors.is_empty()
            && self.overlapped_groups.is_empty()
            && self.violated_weekdays.is_empty()
    }

    /// Total number of reported conflicts.
    pub fn conflict_count(&self) -> usize {
        self.overlapped_classrooms.len()
            + self.overlapped_professors.len()
            + self.overlapped_groups.len()
            + self.violated_weekdays.len()
    }
}

/// Scans a schedule for conflicts. Lessons whose subject id is unknown
/// to `data` are skipped by the professor/group/weekday checks; only the
/// classroom check works on the result alone.
pub fn check_schedule(data: &ScheduleData, result: &ScheduleResult) -> CheckScheduleResult {
    let mut report = CheckScheduleResult::default();

    // Slot-major walk; BTreeMaps keep the report order deterministic.
    let mut by_slot: BTreeMap<Slot, Vec<(u32, Classroom)>> = BTreeMap::new();
    for lesson in result.lessons() {
        by_slot
            .entry(lesson.address)
            .or_default()
            .push((lesson.subject_request_id, lesson.classroom));
    }

    for (&address, occupants) in &by_slot {
        let mut by_classroom: BTreeMap<Classroom, Vec<u32>> = BTreeMap::new();
        let mut by_professor: BTreeMap<u32, Vec<u32>> = BTreeMap::new();

        for &(subject_id, classroom) in occupants {
            if !classroom.is_any() && !classroom.is_unassigned() {
                by_classroom.entry(classroom).or_default().push(subject_id);
            }
            if let Some(index) = data.index_of(subject_id) {
                by_professor
                    .entry(data.request(index).professor)
                    .or_default()
                    .push(subject_id);
            }
        }

        for (classroom, mut subject_ids) in by_classroom {
            if subject_ids.len() >= 2 {
                subject_ids.sort_unstable();
                report.overlapped_classrooms.push(OverlappedClassroom {
                    address,
                    classroom,
                    subject_ids,
                });
            }
        }

        for (professor, mut subject_ids) in by_professor {
            if subject_ids.len() >= 2 {
                subject_ids.sort_unstable();
                report.overlapped_professors.push(OverlappedProfessor {
                    address,
                    professor,
                    subject_ids,
                });
            }
        }

        for (i, &(id_a, _)) in occupants.iter().enumerate() {
            let Some(index_a) = data.index_of(id_a) else {
                continue;
            };
            for &(id_b, _) in &occupants[i + 1..] {
                let Some(index_b) = data.index_of(id_b) else {
                    continue;
                };
                let groups = data.request(index_a).common_groups(data.request(index_b));
                if !groups.is_empty() {
                    let mut subject_ids = vec![id_a, id_b];
                    subject_ids.sort_unstable();
                    report.overlapped_groups.push(OverlappedGroups {
                        address,
                        groups,
                        subject_ids,
                    });
                }
            }
        }

        for &(subject_id, _) in occupants {
            if let Some(index) = data.index_of(subject_id) {
                if !data.request(index).is_slot_eligible(address) {
                    report
                        .violated_weekdays
                        .push(ViolatedWeekday {
                            address,
                            subject_id,
                        });
                }
            }
        }
    }

    report
}
