//! Multi-objective fitness evaluator.
//!
//! Converts a chromosome into a scalar cost (lower is better, 0 is
//! perfect). For every professor and every group, the placed lessons are
//! sorted by slot and split into contiguous same-day segments; each
//! segment yields a gap sum, a building-transition count and (for groups)
//! a day-complexity sum. The score keeps the **maximum** of each quantity
//! across all days and entities, not the total: one professor's
//! well-packed week must not mask another's badly-gapped one.
//!
//! Unassigned genes dominate the score so the search is driven toward
//! full placement before it optimizes quality.

use crate::models::{ScheduleData, Slot};

use super::chromosome::ScheduleChromosomes;

/// Weight of the worst per-day gap sum over any group's schedule.
pub const GROUP_GAPS_WEIGHT: u64 = 3;
/// Weight of the worst per-day gap sum over any professor's schedule.
pub const PROFESSOR_GAPS_WEIGHT: u64 = 2;
/// Weight of the worst complexity-weighted day over any group.
pub const GROUP_DAY_COMPLEXITY_WEIGHT: u64 = 4;
/// Weight of the worst per-day building-transition count (applied to the
/// professor maximum and the group maximum separately).
pub const BUILDING_TRANSITIONS_WEIGHT: u64 = 64;
/// Weight of each request left without a slot or classroom.
pub const UNASSIGNED_WEIGHT: u64 = 128;

/// Worst single-day quantities observed across one entity class.
#[derive(Debug, Default, Clone, Copy)]
struct WorstDay {
    gaps: u64,
    transitions: u64,
    complexity: u64,
}

/// Scores a chromosome against the problem input. Deterministic and pure.
pub fn evaluate(data: &ScheduleData, chromosomes: &ScheduleChromosomes) -> u64 {
    let mut professors = WorstDay::default();
    for indices in data.by_professor().values() {
        scan_entity(data, chromosomes, indices, false, &mut professors);
    }

    let mut groups = WorstDay::default();
    for indices in data.by_group().values() {
        scan_entity(data, chromosomes, indices, true, &mut groups);
    }

    let unassigned = (chromosomes.unassigned_lessons() + chromosomes.unassigned_classrooms()) as u64;

    GROUP_GAPS_WEIGHT * groups.gaps
        + PROFESSOR_GAPS_WEIGHT * professors.gaps
        + GROUP_DAY_COMPLEXITY_WEIGHT * groups.complexity
        + BUILDING_TRANSITIONS_WEIGHT * (professors.transitions + groups.transitions)
        + UNASSIGNED_WEIGHT * unassigned
}

/// Walks one entity's placed lessons in slot order, folding each same-day
/// segment into the running worst-day maxima.
fn scan_entity(
    data: &ScheduleData,
    chromosomes: &ScheduleChromosomes,
    indices: &[usize],
    with_complexity: bool,
    worst: &mut WorstDay,
) {
    let mut placed: Vec<(Slot, usize)> = indices
        .iter()
        .filter_map(|&index| chromosomes.lesson(index).map(|slot| (slot, index)))
        .collect();
    placed.sort_unstable();

    let mut start = 0;
    while start < placed.len() {
        let day = placed[start].0.day();
        let mut end = start + 1;
        while end < placed.len() && placed[end].0.day() == day {
            end += 1;
        }
        let segment = &placed[start..end];

        let mut gaps = 0u64;
        let mut transitions = 0u64;
        for pair in segment.windows(2) {
            let (prev_slot, prev_index) = pair[0];
            let (slot, index) = pair[1];
            gaps += u64::from(slot.index()).saturating_sub(u64::from(prev_slot.index()) + 1);

            // A transition counts only between truly adjacent lessons in
            // two different real buildings; Any/Unassigned have none.
            if slot.index() == prev_slot.index() + 1 {
                let prev_building = chromosomes.classroom(prev_index).building();
                let building = chromosomes.classroom(index).building();
                if let (Some(a), Some(b)) = (prev_building, building) {
                    if a != b {
                        transitions += 1;
                    }
                }
            }
        }

        worst.gaps = worst.gaps.max(gaps);
        worst.transitions = worst.transitions.max(transitions);

        if with_complexity {
            let complexity: u64 = segment
                .iter()
                .map(|&(slot, index)| {
                    u64::from(slot.lesson_in_day()) * u64::from(data.request(index).complexity)
                })
                .sum();
            worst.complexity = worst.complexity.max(complexity);
        }

        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, SubjectRequest};

    fn slot(i: u16) -> Slot {
        Slot::new(i).unwrap()
    }

    fn place(ch: &mut ScheduleChromosomes, index: usize, s: u16, classroom: Classroom) {
        ch.set_lesson(index, Some(slot(s)));
        ch.set_classroom(index, classroom);
    }

    #[test]
    fn test_unassigned_dominates() {
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1]),
            SubjectRequest::new(1, 2, 2, vec![2]),
        ])
        .unwrap();
        let ch = ScheduleChromosomes::unassigned(2);
        // Two missing lessons and two missing classrooms.
        assert_eq!(evaluate(&data, &ch), UNASSIGNED_WEIGHT * 4);
    }

    #[test]
    fn test_group_gap_and_complexity() {
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1]),
            SubjectRequest::new(1, 2, 3, vec![1]),
        ])
        .unwrap();
        let mut ch = ScheduleChromosomes::unassigned(2);
        // Same group, same day, one-slot gap between lessons 0 and 2.
        place(&mut ch, 0, 0, Classroom::Any);
        place(&mut ch, 1, 2, Classroom::Any);

        // group gaps 1, professor gaps 0 (each professor has one lesson),
        // group day complexity 0*2 + 2*3 = 6.
        let expected = GROUP_GAPS_WEIGHT * 1 + GROUP_DAY_COMPLEXITY_WEIGHT * 6;
        assert_eq!(evaluate(&data, &ch), expected);
    }

    #[test]
    fn test_professor_gap() {
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 0, vec![1]),
            SubjectRequest::new(1, 1, 0, vec![2]),
        ])
        .unwrap();
        let mut ch = ScheduleChromosomes::unassigned(2);
        // Same professor, lessons 1 and 4 of day 0: gap 2.
        place(&mut ch, 0, 1, Classroom::Any);
        place(&mut ch, 1, 4, Classroom::Any);

        // complexity 0, groups disjoint so no group gap.
        let expected = PROFESSOR_GAPS_WEIGHT * 2;
        assert_eq!(evaluate(&data, &ch), expected);
    }

    #[test]
    fn test_gap_resets_across_days() {
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 0, vec![1]),
            SubjectRequest::new(1, 1, 0, vec![2]),
        ])
        .unwrap();
        let mut ch = ScheduleChromosomes::unassigned(2);
        // Last lesson of day 0 and first lesson of day 1: no gap, no
        // transition — different days never form a segment pair.
        place(&mut ch, 0, 6, Classroom::room(1, 1));
        place(&mut ch, 1, 7, Classroom::room(2, 1));
        assert_eq!(evaluate(&data, &ch), 0);
    }

    #[test]
    fn test_building_transition_requires_adjacency() {
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 0, vec![1]),
            SubjectRequest::new(1, 2, 0, vec![1]),
        ])
        .unwrap();
        let mut ch = ScheduleChromosomes::unassigned(2);

        // Adjacent lessons in different buildings: one group transition.
        place(&mut ch, 0, 0, Classroom::room(1, 1));
        place(&mut ch, 1, 1, Classroom::room(2, 1));
        assert_eq!(evaluate(&data, &ch), BUILDING_TRANSITIONS_WEIGHT);

        // With a gap in between, the walk is no longer a transition.
        ch.set_lesson(1, Some(slot(2)));
        assert_eq!(evaluate(&data, &ch), GROUP_GAPS_WEIGHT * 1);
    }

    #[test]
    fn test_any_classroom_never_transitions() {
        // Any carries no building, so a walk starting or ending at an
        // Any lesson counts zero transitions, same as Unassigned.
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 0, vec![1]),
            SubjectRequest::new(1, 2, 0, vec![1]),
        ])
        .unwrap();
        let mut ch = ScheduleChromosomes::unassigned(2);
        place(&mut ch, 0, 0, Classroom::Any);
        place(&mut ch, 1, 1, Classroom::room(2, 1));
        assert_eq!(evaluate(&data, &ch), 0);
    }

    #[test]
    fn test_max_not_sum_across_entities() {
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 0, vec![1]),
            SubjectRequest::new(1, 2, 0, vec![1]),
            SubjectRequest::new(2, 3, 0, vec![2]),
            SubjectRequest::new(3, 4, 0, vec![2]),
        ])
        .unwrap();
        let mut ch = ScheduleChromosomes::unassigned(4);
        // Group 1: gap 3 on day 0. Group 2: gap 1 on day 1.
        place(&mut ch, 0, 0, Classroom::Any);
        place(&mut ch, 1, 4, Classroom::Any);
        place(&mut ch, 2, 7, Classroom::Any);
        place(&mut ch, 3, 9, Classroom::Any);

        // The single worst day counts, not the aggregate of 4.
        assert_eq!(evaluate(&data, &ch), GROUP_GAPS_WEIGHT * 3);
    }

    #[test]
    fn test_evaluate_is_deterministic_and_revert_safe() {
        let data = ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1]),
            SubjectRequest::new(1, 1, 3, vec![1, 2]),
        ])
        .unwrap();
        let mut ch = ScheduleChromosomes::unassigned(2);
        place(&mut ch, 0, 0, Classroom::room(1, 1));
        place(&mut ch, 1, 3, Classroom::room(2, 2));

        let original = evaluate(&data, &ch);
        assert_eq!(evaluate(&data, &ch), original);

        // Mutate, then revert: the original score comes back.
        ch.set_lesson(1, Some(slot(9)));
        ch.set_classroom(1, Classroom::Any);
        assert_ne!(evaluate(&data, &ch), original);
        ch.set_lesson(1, Some(slot(3)));
        ch.set_classroom(1, Classroom::room(2, 2));
        assert_eq!(evaluate(&data, &ch), original);
    }
}
