//! Dual-vector chromosome for timetabling.
//!
//! # Encoding
//!
//! The chromosome consists of two equal-length vectors, indexed by request
//! array position (not request id):
//! - **lessons**: the assigned [`Slot`], or `None` while unplaced;
//! - **classrooms**: the assigned [`Classroom`], `Unassigned` while unplaced.
//!
//! Both vectors always have exactly one entry per request in the
//! [`ScheduleData`]; operators mutate genes in place, never resize.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::models::{Classroom, PlacedLesson, ScheduleData, ScheduleResult, Slot};

use super::fitness;

/// A candidate full assignment of slots and classrooms to all requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleChromosomes {
    lessons: Vec<Option<Slot>>,
    classrooms: Vec<Classroom>,
}

impl ScheduleChromosomes {
    /// Creates an all-unassigned chromosome for `len` requests.
    pub fn unassigned(len: usize) -> Self {
        Self {
            lessons: vec![None; len],
            classrooms: vec![Classroom::Unassigned; len],
        }
    }

    /// Number of genes (always the request count).
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// The slot gene at a request position.
    #[inline]
    pub fn lesson(&self, index: usize) -> Option<Slot> {
        self.lessons[index]
    }

    /// The classroom gene at a request position.
    #[inline]
    pub fn classroom(&self, index: usize) -> Classroom {
        self.classrooms[index]
    }

    /// Overwrites the slot gene.
    #[inline]
    pub fn set_lesson(&mut self, index: usize, slot: Option<Slot>) {
        self.lessons[index] = slot;
    }

    /// Overwrites the classroom gene.
    #[inline]
    pub fn set_classroom(&mut self, index: usize, classroom: Classroom) {
        self.classrooms[index] = classroom;
    }

    /// Request positions currently occupying `slot`.
    pub fn occupants(&self, slot: Slot) -> impl Iterator<Item = usize> + '_ {
        self.lessons
            .iter()
            .enumerate()
            .filter(move |(_, l)| **l == Some(slot))
            .map(|(i, _)| i)
    }

    /// Number of requests still without a slot.
    pub fn unassigned_lessons(&self) -> usize {
        self.lessons.iter().filter(|l| l.is_none()).count()
    }

    /// Number of requests still without a classroom.
    pub fn unassigned_classrooms(&self) -> usize {
        self.classrooms.iter().filter(|c| c.is_unassigned()).count()
    }

    /// Materializes the chromosome into a [`ScheduleResult`].
    ///
    /// Requests still holding a sentinel slot or classroom are omitted,
    /// not reported as an error.
    pub fn to_result(&self, data: &ScheduleData) -> ScheduleResult {
        let mut lessons = Vec::with_capacity(self.len());
        for (index, request) in data.requests().iter().enumerate() {
            let Some(slot) = self.lessons[index] else {
                continue;
            };
            let classroom = self.classrooms[index];
            if classroom.is_unassigned() {
                continue;
            }
            lessons.push(PlacedLesson {
                address: slot,
                subject_request_id: request.id,
                classroom,
            });
        }
        ScheduleResult::new(lessons)
    }
}

/// One population member: a chromosome, its cached score, and private
/// randomness state.
///
/// The score cache is invalidated by any gene write and refilled lazily
/// by [`score`](Self::score). Each individual owns a seedable generator
/// so the parallel mutate/evaluate phases share no state.
#[derive(Debug, Clone)]
pub struct ScheduleIndividual {
    chromosomes: ScheduleChromosomes,
    score: Option<u64>,
    rng: SmallRng,
}

impl ScheduleIndividual {
    /// Wraps a chromosome with a fresh generator.
    pub fn new(chromosomes: ScheduleChromosomes, seed: u64) -> Self {
        Self {
            chromosomes,
            score: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Copies the chromosome into a new individual with its own seed.
    /// Used for population seeding and elitist replacement.
    pub fn clone_with_seed(&self, seed: u64) -> Self {
        Self {
            chromosomes: self.chromosomes.clone(),
            score: self.score,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Read access to the chromosome.
    pub fn chromosomes(&self) -> &ScheduleChromosomes {
        &self.chromosomes
    }

    /// Write access to the chromosome. Invalidates the cached score.
    pub fn chromosomes_mut(&mut self) -> &mut ScheduleChromosomes {
        self.score = None;
        &mut self.chromosomes
    }

    /// Splits the individual into chromosome and generator for operators
    /// that need both at once. Operators call [`invalidate`](Self::invalidate)
    /// themselves when a gene actually changed.
    pub(crate) fn parts_mut(&mut self) -> (&mut ScheduleChromosomes, &mut SmallRng) {
        (&mut self.chromosomes, &mut self.rng)
    }

    /// The individual's own generator, for rolls that do not touch genes.
    pub(crate) fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Drops the cached score after a gene change.
    pub fn invalidate(&mut self) {
        self.score = None;
    }

    /// The fitness score, evaluating and caching if stale. Lower is better.
    pub fn score(&mut self, data: &ScheduleData) -> u64 {
        match self.score {
            Some(score) => score,
            None => {
                let score = fitness::evaluate(data, &self.chromosomes);
                self.score = Some(score);
                score
            }
        }
    }

    /// The cached score. Only valid right after [`score`](Self::score);
    /// stale caches rank as worst.
    pub fn cached_score(&self) -> u64 {
        self.score.unwrap_or(u64::MAX)
    }
}
