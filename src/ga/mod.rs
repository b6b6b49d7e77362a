//! The GA scheduling engine.
//!
//! A constraint-aware genetic algorithm over the dual-vector timetable
//! chromosome:
//!
//! - [`chromosome`]: the candidate-solution representation and the
//!   population individual wrapping it
//! - [`conflicts`]: the pure placement-legality predicates
//! - [`init`]: the constructive seed-chromosome builder
//! - [`operators`]: bounded-retry mutation and guarded gene-swap crossover
//! - [`fitness`]: the worst-day multi-objective evaluator
//! - [`params`] / [`driver`]: validated tuning parameters and the
//!   generational loop

pub mod chromosome;
pub mod conflicts;
pub mod driver;
pub mod fitness;
pub mod init;
pub mod operators;
pub mod params;

pub use chromosome::{ScheduleChromosomes, ScheduleIndividual};
pub use driver::{GaScheduler, DEFAULT_TIME_LIMIT};
pub use params::{GaParams, ParamsError};
