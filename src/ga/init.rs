//! Constructive initializer.
//!
//! Builds one feasible-as-possible chromosome from a [`ScheduleData`].
//! Locked lessons are pinned first, blocks are laid out as adjacent
//! same-day runs, and every remaining request is scanned lesson-major:
//! all twelve days at lesson position 0, then at position 1, and so on.
//! Low lesson positions come first so early-in-the-day placement (which
//! the fitness function rewards for complexity-weighted subjects) emerges
//! from scan order alone.
//!
//! A request the scan cannot place keeps its sentinel genes. That is a
//! legitimate, silent outcome — the evaluator penalizes it, the
//! initializer does not report it.

use crate::models::{
    ClassKind, Classroom, ScheduleData, Slot, DAYS_PER_CYCLE, LESSONS_PER_DAY,
};

use super::chromosome::ScheduleChromosomes;
use super::conflicts::{classrooms_conflict, groups_or_professors_conflict};

/// Builds the seed chromosome for a GA run.
pub fn build(data: &ScheduleData) -> ScheduleChromosomes {
    let mut chromosomes = ScheduleChromosomes::unassigned(data.len());

    // Locked lessons are pinned before anything else can claim their slots.
    for index in 0..data.len() {
        if let Some(slot) = data.locked_slot(index) {
            chromosomes.set_lesson(index, Some(slot));
            assign_classroom(data, &mut chromosomes, index, slot);
        }
    }

    for block in data.blocks() {
        place_block(data, &mut chromosomes, block);
    }

    // Remaining requests in array order. Members of a block that found no
    // adjacent run fall back to individual placement here.
    for index in 0..data.len() {
        if chromosomes.lesson(index).is_none() {
            place_request(data, &mut chromosomes, index);
        }
    }

    chromosomes
}

fn place_request(data: &ScheduleData, chromosomes: &mut ScheduleChromosomes, index: usize) {
    let slot = match data.request(index).kind {
        ClassKind::Morning => find_morning_slot(data, chromosomes, index),
        ClassKind::Evening => find_evening_slot(data, chromosomes, index),
    };
    if let Some(slot) = slot {
        chromosomes.set_lesson(index, Some(slot));
        assign_classroom(data, chromosomes, index, slot);
    }
}

/// Lesson-major scan over the full grid, skipping ineligible and
/// late-Saturday slots.
fn find_morning_slot(
    data: &ScheduleData,
    chromosomes: &ScheduleChromosomes,
    index: usize,
) -> Option<Slot> {
    let request = data.request(index);
    for lesson in 0..LESSONS_PER_DAY {
        for day in 0..DAYS_PER_CYCLE {
            let slot = Slot::from_parts(day, lesson).expect("grid bounds");
            if !request.is_slot_eligible(slot) || slot.is_late_saturday() {
                continue;
            }
            if !groups_or_professors_conflict(data, chromosomes, index, slot) {
                return Some(slot);
            }
        }
    }
    None
}

/// Weekday evenings first (lessons 5 and 6), then any Saturday lesson.
fn find_evening_slot(
    data: &ScheduleData,
    chromosomes: &ScheduleChromosomes,
    index: usize,
) -> Option<Slot> {
    let request = data.request(index);
    for lesson in (LESSONS_PER_DAY - 2)..LESSONS_PER_DAY {
        for day in 0..DAYS_PER_CYCLE {
            let slot = Slot::from_parts(day, lesson).expect("grid bounds");
            if slot.is_saturday() || !request.is_slot_eligible(slot) {
                continue;
            }
            if !groups_or_professors_conflict(data, chromosomes, index, slot) {
                return Some(slot);
            }
        }
    }
    for lesson in 0..LESSONS_PER_DAY {
        for day in 0..DAYS_PER_CYCLE {
            let slot = Slot::from_parts(day, lesson).expect("grid bounds");
            if !slot.is_saturday() || !request.is_slot_eligible(slot) {
                continue;
            }
            if !groups_or_professors_conflict(data, chromosomes, index, slot) {
                return Some(slot);
            }
        }
    }
    None
}

/// First non-conflicting classroom from the request's eligible list, or
/// `Any` when the request declared no preference. On exhaustion the gene
/// stays `Unassigned` and is penalized by the evaluator.
fn assign_classroom(
    data: &ScheduleData,
    chromosomes: &mut ScheduleChromosomes,
    index: usize,
    slot: Slot,
) {
    let request = data.request(index);
    if request.accepts_any_classroom() {
        chromosomes.set_classroom(index, Classroom::Any);
        return;
    }
    for &classroom in request.classrooms() {
        if !classrooms_conflict(chromosomes, index, slot, classroom) {
            chromosomes.set_classroom(index, classroom);
            return;
        }
    }
}

/// Lays a block out as a run of adjacent lessons within one day. Every
/// member must find its own slot in the run eligible, rule-conforming,
/// and conflict-free; otherwise the block is left for individual
/// placement.
fn place_block(data: &ScheduleData, chromosomes: &mut ScheduleChromosomes, block: &[usize]) {
    let len = block.len() as u16;
    if len > LESSONS_PER_DAY || block.iter().any(|&i| chromosomes.lesson(i).is_some()) {
        return;
    }

    for day in 0..DAYS_PER_CYCLE {
        for start in 0..=(LESSONS_PER_DAY - len) {
            let run: Vec<Slot> = (0..len)
                .map(|offset| Slot::from_parts(day, start + offset).expect("grid bounds"))
                .collect();
            let fits = block.iter().zip(&run).all(|(&member, &slot)| {
                let request = data.request(member);
                let rule_ok = match request.kind {
                    ClassKind::Morning => !slot.is_late_saturday(),
                    ClassKind::Evening => slot.is_evening_suitable(),
                };
                rule_ok
                    && request.is_slot_eligible(slot)
                    && !groups_or_professors_conflict(data, chromosomes, member, slot)
            });
            if fits {
                for (&member, &slot) in block.iter().zip(&run) {
                    chromosomes.set_lesson(member, Some(slot));
                    assign_classroom(data, chromosomes, member, slot);
                }
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectRequest;

    fn slot(i: u16) -> Slot {
        Slot::new(i).unwrap()
    }

    #[test]
    fn test_shared_professor_gets_distinct_slots() {
        // 14 requests share professor 1 with disjoint groups and disjoint
        // single-room classrooms; all must receive pairwise-distinct slots.
        let mut requests: Vec<SubjectRequest> = (0..14)
            .map(|i| {
                SubjectRequest::new(i, 1, 2, vec![i + 100])
                    .with_classrooms(vec![Classroom::room(1, i)])
            })
            .collect();
        // Two unrelated professors may share slots with the first 14.
        requests.push(SubjectRequest::new(20, 2, 2, vec![200]));
        requests.push(SubjectRequest::new(21, 3, 2, vec![201]));

        let data = ScheduleData::new(requests).unwrap();
        let ch = build(&data);

        let mut slots: Vec<Slot> = (0..14).map(|i| ch.lesson(i).unwrap()).collect();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), 14, "professor 1's lessons must not collide");
        assert!(ch.lesson(14).is_some());
        assert!(ch.lesson(15).is_some());
    }

    #[test]
    fn test_lesson_major_scan_order() {
        // Independent requests all land on lesson position 0 of successive
        // days before any day's position 1 is used.
        let requests: Vec<SubjectRequest> =
            (0..3).map(|i| SubjectRequest::new(i, i, 2, vec![i])).collect();
        let data = ScheduleData::new(requests).unwrap();
        let ch = build(&data);
        for index in 0..3 {
            assert_eq!(ch.lesson(index), Some(slot(0)));
            assert_eq!(ch.classroom(index), Classroom::Any);
        }
    }

    #[test]
    fn test_morning_avoids_late_saturday() {
        // Eligible only for late-Saturday slots: a morning class stays
        // unplaced, silently.
        let late: Vec<Slot> = vec![
            Slot::from_parts(5, 4).unwrap(),
            Slot::from_parts(5, 5).unwrap(),
            Slot::from_parts(11, 6).unwrap(),
        ];
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1]).with_eligible_slots(late),
        ])
        .unwrap();
        let ch = build(&data);
        assert_eq!(ch.lesson(0), None);
        assert_eq!(ch.classroom(0), Classroom::Unassigned);
    }

    #[test]
    fn test_evening_prefers_weekday_evenings() {
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1]).evening(),
        ])
        .unwrap();
        let ch = build(&data);
        let placed = ch.lesson(0).unwrap();
        assert!(!placed.is_saturday());
        assert_eq!(placed.lesson_in_day(), 5);
    }

    #[test]
    fn test_evening_falls_back_to_saturday() {
        // Eligible only for Saturday mornings: the weekday-evening pass
        // finds nothing and the Saturday pass takes over.
        let saturday: Vec<Slot> = (0..4).map(|l| Slot::from_parts(5, l).unwrap()).collect();
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1])
                .evening()
                .with_eligible_slots(saturday),
        ])
        .unwrap();
        let ch = build(&data);
        let placed = ch.lesson(0).unwrap();
        assert!(placed.is_saturday());
    }

    #[test]
    fn test_locked_lesson_pinned() {
        let pinned = slot(40);
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1]),
            SubjectRequest::new(1, 1, 2, vec![2]),
        ])
        .unwrap()
        .with_locked_lesson(1, pinned)
        .unwrap();

        let ch = build(&data);
        assert_eq!(ch.lesson(1), Some(pinned));
        // The free request avoids the pinned slot (same professor).
        assert_ne!(ch.lesson(0), Some(pinned));
    }

    #[test]
    fn test_classroom_falls_back_through_list() {
        let room_a = Classroom::room(1, 1);
        let room_b = Classroom::room(1, 2);
        // Both requests want the same slot-0 grid position and room list;
        // the second must fall through to the second room.
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1]).with_classrooms(vec![room_a, room_b]),
            SubjectRequest::new(1, 2, 2, vec![2]).with_classrooms(vec![room_a, room_b]),
        ])
        .unwrap();
        let ch = build(&data);
        // Different professors and groups: both land on slot 0.
        assert_eq!(ch.lesson(0), Some(slot(0)));
        assert_eq!(ch.lesson(1), Some(slot(0)));
        assert_eq!(ch.classroom(0), room_a);
        assert_eq!(ch.classroom(1), room_b);
    }

    #[test]
    fn test_block_placed_adjacently() {
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 3, vec![1]),
            SubjectRequest::new(1, 1, 1, vec![1]),
        ])
        .unwrap()
        .with_block(&[0, 1])
        .unwrap();

        let ch = build(&data);
        let a = ch.lesson(0).unwrap();
        let b = ch.lesson(1).unwrap();
        assert_eq!(a.day(), b.day());
        assert_eq!(a.next_in_day(), Some(b));
    }

    #[test]
    fn test_unplaceable_block_falls_back() {
        // Eligible sets on different days make adjacency impossible; both
        // members still get individual slots.
        let day0: Vec<Slot> = (0..7).map(|l| Slot::from_parts(0, l).unwrap()).collect();
        let day1: Vec<Slot> = (0..7).map(|l| Slot::from_parts(1, l).unwrap()).collect();
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1]).with_eligible_slots(day0),
            SubjectRequest::new(1, 1, 2, vec![1]).with_eligible_slots(day1),
        ])
        .unwrap()
        .with_block(&[0, 1])
        .unwrap();

        let ch = build(&data);
        assert!(ch.lesson(0).is_some());
        assert!(ch.lesson(1).is_some());
        assert_ne!(ch.lesson(0).unwrap().day(), ch.lesson(1).unwrap().day());
    }
}
