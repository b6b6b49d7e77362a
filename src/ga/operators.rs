//! Genetic operators: bounded-retry mutation and guarded crossover.
//!
//! Both operators are **bounded-retry randomized local search**, not
//! guaranteed repair: a mutation that exhausts its retry budget, or a
//! crossover whose guard rejects the swap, silently leaves the genes
//! unchanged. A no-op in a given generation is a legitimate outcome.
//!
//! Locked lessons and block members are pinned: neither operator moves
//! their slot gene.

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::models::{ClassKind, Classroom, ScheduleData, Slot, SLOT_COUNT};

use super::chromosome::{ScheduleChromosomes, ScheduleIndividual};
use super::conflicts::{classrooms_conflict, groups_or_professors_conflict, placement_conflict};

/// Mutates one individual with the given percent chance; drawing the
/// gene, the coin flip and all retries from the individual's own
/// generator.
pub fn maybe_mutate(data: &ScheduleData, individual: &mut ScheduleIndividual, chance: u32) {
    if individual.rng().random_range(0..100) < chance {
        mutate(data, individual);
    }
}

/// Picks one random request and re-rolls either its classroom or its
/// slot, keeping the first non-conflicting candidate within the retry
/// budget. The cached score is invalidated only when a gene changed.
pub fn mutate(data: &ScheduleData, individual: &mut ScheduleIndividual) {
    let changed = {
        let (chromosomes, rng) = individual.parts_mut();
        let index = rng.random_range(0..data.len());
        if rng.random_bool(0.5) {
            change_classroom(data, chromosomes, rng, index)
        } else {
            change_lesson(data, chromosomes, rng, index)
        }
    };
    if changed {
        individual.invalidate();
    }
}

/// Draws up to `|classrooms|` candidates (with repetition) until one
/// passes the classroom-conflict check. No-op for requests without a
/// declared preference.
fn change_classroom(
    data: &ScheduleData,
    chromosomes: &mut ScheduleChromosomes,
    rng: &mut SmallRng,
    index: usize,
) -> bool {
    let request = data.request(index);
    if request.accepts_any_classroom() {
        return false;
    }
    for _ in 0..request.classrooms().len() {
        let candidate = *request.classrooms().choose(rng).expect("non-empty list");
        let conflict = match chromosomes.lesson(index) {
            Some(slot) => classrooms_conflict(chromosomes, index, slot, candidate),
            // Without a slot there is nothing to collide with yet.
            None => false,
        };
        if !conflict {
            chromosomes.set_classroom(index, candidate);
            return true;
        }
    }
    false
}

/// Draws up to [`SLOT_COUNT`] slot candidates until one is eligible,
/// conforms to the request's morning/evening rule and passes the full
/// placement check. Pinned requests are never moved.
fn change_lesson(
    data: &ScheduleData,
    chromosomes: &mut ScheduleChromosomes,
    rng: &mut SmallRng,
    index: usize,
) -> bool {
    if data.is_pinned(index) {
        return false;
    }
    let request = data.request(index);
    for _ in 0..SLOT_COUNT {
        let candidate = Slot::new(rng.random_range(0..SLOT_COUNT)).expect("in range");
        if !request.is_slot_eligible(candidate) {
            continue;
        }
        let rule_ok = match request.kind {
            ClassKind::Morning => !candidate.is_late_saturday(),
            ClassKind::Evening => candidate.is_evening_suitable(),
        };
        if !rule_ok || placement_conflict(data, chromosomes, index, candidate) {
            continue;
        }
        chromosomes.set_lesson(index, Some(candidate));
        return true;
    }
    false
}

/// Whether swapping gene `index` between `a` and `b` is conflict-free in
/// *both* directions: the incoming `(slot, classroom)` pair must not
/// collide with either chromosome's other genes.
pub fn ready_to_crossover(
    data: &ScheduleData,
    a: &ScheduleChromosomes,
    b: &ScheduleChromosomes,
    index: usize,
) -> bool {
    if data.is_pinned(index) {
        return false;
    }
    gene_fits(data, a, index, b.lesson(index), b.classroom(index))
        && gene_fits(data, b, index, a.lesson(index), a.classroom(index))
}

fn gene_fits(
    data: &ScheduleData,
    host: &ScheduleChromosomes,
    index: usize,
    lesson: Option<Slot>,
    classroom: Classroom,
) -> bool {
    let Some(slot) = lesson else {
        // An unassigned incoming gene cannot introduce a conflict.
        return true;
    };
    !groups_or_professors_conflict(data, host, index, slot)
        && !classrooms_conflict(host, index, slot, classroom)
}

/// Swaps the `(slot, classroom)` pair at `index` between two individuals
/// if and only if the guard accepts both directions. Returns whether the
/// swap happened; both score caches are invalidated on success.
pub fn crossover(
    data: &ScheduleData,
    a: &mut ScheduleIndividual,
    b: &mut ScheduleIndividual,
    index: usize,
) -> bool {
    if !ready_to_crossover(data, a.chromosomes(), b.chromosomes(), index) {
        return false;
    }
    let (lesson_a, classroom_a) = (a.chromosomes().lesson(index), a.chromosomes().classroom(index));
    let (lesson_b, classroom_b) = (b.chromosomes().lesson(index), b.chromosomes().classroom(index));

    a.chromosomes_mut().set_lesson(index, lesson_b);
    a.chromosomes_mut().set_classroom(index, classroom_b);
    b.chromosomes_mut().set_lesson(index, lesson_a);
    b.chromosomes_mut().set_classroom(index, classroom_a);
    true
}
