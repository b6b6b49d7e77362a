//! Conflict predicates.
//!
//! Pure, order-independent answers to "would placing this request at this
//! slot / classroom double-book anything?". These are the single source of
//! truth for placement legality; the initializer, the mutation operator,
//! and the crossover guard all go through them.
//!
//! All predicates scan the chromosome's lesson vector for equal slot
//! values, which is linear in the request count. At timetable scale this
//! beats maintaining a slot → occupants index, and it keeps the
//! predicates free of hidden state.

use crate::models::{Classroom, ScheduleData, Slot};

use super::chromosome::ScheduleChromosomes;

/// Whether any *other* request occupying `slot` shares a professor with,
/// or has a group intersection with, the request at `index`.
pub fn groups_or_professors_conflict(
    data: &ScheduleData,
    chromosomes: &ScheduleChromosomes,
    index: usize,
    slot: Slot,
) -> bool {
    let request = data.request(index);
    chromosomes
        .occupants(slot)
        .filter(|&other| other != index)
        .any(|other| {
            let occupant = data.request(other);
            occupant.professor == request.professor || occupant.groups_intersect(request)
        })
}

/// Whether some request other than `index` occupies both `slot` and
/// `classroom`. Always false for the [`Classroom::Any`] and
/// [`Classroom::Unassigned`] sentinels; only real rooms can be held twice.
pub fn classrooms_conflict(
    chromosomes: &ScheduleChromosomes,
    index: usize,
    slot: Slot,
    classroom: Classroom,
) -> bool {
    if classroom.is_any() || classroom.is_unassigned() {
        return false;
    }
    chromosomes
        .occupants(slot)
        .filter(|&other| other != index)
        .any(|other| chromosomes.classroom(other) == classroom)
}

/// The union of the professor/group and classroom checks for the request's
/// *current* classroom gene. The classroom check is skipped when the gene
/// is `Any` or `Unassigned` — there is no room to conflict over.
pub fn placement_conflict(
    data: &ScheduleData,
    chromosomes: &ScheduleChromosomes,
    index: usize,
    slot: Slot,
) -> bool {
    if groups_or_professors_conflict(data, chromosomes, index, slot) {
        return true;
    }
    classrooms_conflict(chromosomes, index, slot, chromosomes.classroom(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectRequest;

    fn slot(i: u16) -> Slot {
        Slot::new(i).unwrap()
    }

    fn sample_data() -> ScheduleData {
        ScheduleData::new(vec![
            SubjectRequest::new(0, 1, 2, vec![1, 3]),
            SubjectRequest::new(1, 1, 2, vec![7]),
            SubjectRequest::new(2, 2, 2, vec![3, 5]),
            SubjectRequest::new(3, 3, 2, vec![9]),
        ])
        .unwrap()
    }

    #[test]
    fn test_professor_conflict() {
        let data = sample_data();
        let mut ch = ScheduleChromosomes::unassigned(4);
        // Requests 0 and 1 share professor 1.
        ch.set_lesson(1, Some(slot(10)));
        assert!(groups_or_professors_conflict(&data, &ch, 0, slot(10)));
        assert!(!groups_or_professors_conflict(&data, &ch, 0, slot(11)));
    }

    #[test]
    fn test_group_conflict() {
        let data = sample_data();
        let mut ch = ScheduleChromosomes::unassigned(4);
        // Requests 0 and 2 share group 3.
        ch.set_lesson(2, Some(slot(4)));
        assert!(groups_or_professors_conflict(&data, &ch, 0, slot(4)));
        // Request 3 shares nothing with request 0.
        ch.set_lesson(2, None);
        ch.set_lesson(3, Some(slot(4)));
        assert!(!groups_or_professors_conflict(&data, &ch, 0, slot(4)));
    }

    #[test]
    fn test_self_occupancy_ignored() {
        let data = sample_data();
        let mut ch = ScheduleChromosomes::unassigned(4);
        ch.set_lesson(0, Some(slot(2)));
        assert!(!groups_or_professors_conflict(&data, &ch, 0, slot(2)));
    }

    #[test]
    fn test_classroom_conflict() {
        let mut ch = ScheduleChromosomes::unassigned(4);
        let room = Classroom::room(1, 4);
        ch.set_lesson(1, Some(slot(6)));
        ch.set_classroom(1, room);

        assert!(classrooms_conflict(&ch, 0, slot(6), room));
        assert!(!classrooms_conflict(&ch, 0, slot(7), room));
        assert!(!classrooms_conflict(&ch, 0, slot(6), Classroom::room(1, 5)));
        // Sentinels never conflict.
        assert!(!classrooms_conflict(&ch, 0, slot(6), Classroom::Any));
        assert!(!classrooms_conflict(&ch, 0, slot(6), Classroom::Unassigned));
    }

    #[test]
    fn test_placement_conflict_skips_any_classroom() {
        let data = sample_data();
        let mut ch = ScheduleChromosomes::unassigned(4);
        let room = Classroom::room(2, 1);
        // Request 3 (unrelated professor/groups) holds the room at slot 0.
        ch.set_lesson(3, Some(slot(0)));
        ch.set_classroom(3, room);

        // Request 0 with the same room gene: classroom clash.
        ch.set_classroom(0, room);
        assert!(placement_conflict(&data, &ch, 0, slot(0)));

        // Same slot with an Any gene: no room to fight over.
        ch.set_classroom(0, Classroom::Any);
        assert!(!placement_conflict(&data, &ch, 0, slot(0)));
    }

    #[test]
    fn test_predicates_are_pure() {
        let data = sample_data();
        let mut ch = ScheduleChromosomes::unassigned(4);
        ch.set_lesson(1, Some(slot(10)));
        let before = ch.clone();
        let a = groups_or_professors_conflict(&data, &ch, 0, slot(10));
        let b = groups_or_professors_conflict(&data, &ch, 0, slot(10));
        assert_eq!(a, b);
        assert_eq!(ch, before);
    }
}
