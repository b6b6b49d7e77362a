//! Generational GA driver.
//!
//! The population starts as clones of one initializer-built individual;
//! diversity is entirely emergent from mutation. Each generation runs
//! two embarrassingly parallel phases (mutate-all, evaluate-all) with
//! one rayon task per individual, and three deliberately sequential
//! phases (elite ordering, guarded crossover, elitist replacement) that
//! need a globally consistent view of the population.
//!
//! The loop stops when the generation budget is spent, the wall-clock
//! deadline passes (checked once per completed generation, never
//! mid-phase) or the best score reaches zero.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::models::{ScheduleData, ScheduleResult};
use crate::scheduler::Scheduler;

use super::chromosome::{ScheduleChromosomes, ScheduleIndividual};
use super::init;
use super::operators;
use super::params::{GaParams, ParamsError};

/// Wall-clock budget applied when the caller does not set one.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(4);

/// The GA scheduling engine.
///
/// # Example
///
/// ```no_run
/// use u_timetable::ga::{GaParams, GaScheduler};
/// use u_timetable::models::{ScheduleData, SubjectRequest};
///
/// let data = ScheduleData::new(vec![SubjectRequest::new(0, 1, 2, vec![1])]).unwrap();
/// let scheduler = GaScheduler::new(GaParams::default()).unwrap().with_seed(42);
/// let result = scheduler.generate(&data);
/// ```
#[derive(Debug, Clone)]
pub struct GaScheduler {
    params: GaParams,
    seed: Option<u64>,
    time_limit: Option<Duration>,
}

impl GaScheduler {
    /// Creates a scheduler, rejecting out-of-range parameters upfront.
    pub fn new(params: GaParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params,
            seed: None,
            time_limit: Some(DEFAULT_TIME_LIMIT),
        })
    }

    /// Seeds the run for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the wall-clock budget; `None` disables the deadline so
    /// only the generation budget and a zero score terminate the loop.
    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    /// Runs the GA and materializes the best chromosome. Requests the
    /// search could not place are omitted from the result.
    pub fn generate(&self, data: &ScheduleData) -> ScheduleResult {
        self.evolve(data).to_result(data)
    }

    fn evolve(&self, data: &ScheduleData) -> ScheduleChromosomes {
        let GaParams {
            individuals_count,
            iterations_count,
            selection_count,
            crossover_count,
            mutation_chance,
        } = self.params;

        let mut master = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let seed_individual = ScheduleIndividual::new(init::build(data), master.random());
        let mut population: Vec<ScheduleIndividual> = (0..individuals_count)
            .map(|_| seed_individual.clone_with_seed(master.random()))
            .collect();

        let started = Instant::now();
        let deadline = self.time_limit.map(|limit| started + limit);

        for generation in 0..iterations_count {
            // Parallel phase: every individual mutates and re-scores on
            // its own task, touching no shared state.
            population.par_iter_mut().for_each(|individual| {
                operators::maybe_mutate(data, individual, mutation_chance);
                individual.score(data);
            });

            if selection_count > 0 {
                // Sequential: bring the elite to the front, then breed
                // elite × whole-population pairs at random gene positions.
                population
                    .select_nth_unstable_by_key(selection_count - 1, ScheduleIndividual::cached_score);
                for _ in 0..crossover_count {
                    let elite = master.random_range(0..selection_count);
                    let mate = master.random_range(0..individuals_count);
                    if elite == mate {
                        continue;
                    }
                    let index = master.random_range(0..data.len());
                    let (a, b) = pick_pair(&mut population, elite, mate);
                    operators::crossover(data, a, b, index);
                }
            }

            // Parallel phase: refill the caches crossover invalidated.
            population
                .par_iter_mut()
                .for_each(|individual| {
                    individual.score(data);
                });

            let best = population
                .iter()
                .map(ScheduleIndividual::cached_score)
                .min()
                .unwrap_or(u64::MAX);
            debug!(generation, best, "generation complete");

            if best == 0 {
                info!(generation, "conflict-free optimum reached");
                break;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                info!(generation, elapsed = ?started.elapsed(), "time limit reached");
                break;
            }

            if selection_count > 0 {
                // Elitist replacement: the worst tail is overwritten with
                // copies of the current front.
                population.sort_unstable_by_key(ScheduleIndividual::cached_score);
                let elite: Vec<ScheduleIndividual> = population[..selection_count]
                    .iter()
                    .map(|individual| individual.clone_with_seed(master.random()))
                    .collect();
                let tail_start = individuals_count - selection_count;
                for (offset, individual) in elite.into_iter().enumerate() {
                    population[tail_start + offset] = individual;
                }
            }
        }

        population
            .par_iter_mut()
            .for_each(|individual| {
                individual.score(data);
            });
        let best = population
            .iter()
            .min_by_key(|individual| individual.cached_score())
            .expect("population is never empty");
        debug!(score = best.cached_score(), "run finished");
        best.chromosomes().clone()
    }
}

impl Scheduler for GaScheduler {
    fn generate(&self, data: &ScheduleData) -> ScheduleResult {
        GaScheduler::generate(self, data)
    }
}

/// Two distinct mutable population entries.
fn pick_pair(
    population: &mut [ScheduleIndividual],
    i: usize,
    j: usize,
) -> (&mut ScheduleIndividual, &mut ScheduleIndividual) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = population.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = population.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
