//! GA tuning parameters.
//!
//! [`GaParams`] is the flat record persisted between runs: population
//! size, generation budget, elite size, crossover attempts and mutation
//! chance. Validation happens at load time; a violated range is a
//! configuration error and rejects the record before any run starts.
//!
//! Persistence is a single JSON file. A missing file is not an error:
//! defaults are used and then written back.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

/// GA tuning parameters, persisted as a flat JSON record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaParams {
    /// Population size. Must be positive.
    pub individuals_count: usize,
    /// Generation budget.
    pub iterations_count: usize,
    /// Size of the elite front; strictly less than the population size.
    pub selection_count: usize,
    /// Crossover attempts per generation.
    pub crossover_count: usize,
    /// Per-individual mutation probability, percent (0..=100).
    pub mutation_chance: u32,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            individuals_count: 128,
            iterations_count: 1000,
            selection_count: 32,
            crossover_count: 64,
            mutation_chance: 60,
        }
    }
}

/// A rejected parameter record or a failed persistence operation.
#[derive(Debug)]
pub enum ParamsError {
    /// `individuals_count` must be positive.
    NoIndividuals,
    /// `selection_count` must be strictly below `individuals_count`.
    SelectionTooLarge {
        selection_count: usize,
        individuals_count: usize,
    },
    /// `mutation_chance` must be within 0..=100.
    MutationChanceOutOfRange(u32),
    /// The parameter file could not be read or written.
    Io(io::Error),
    /// The parameter file is not valid JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoIndividuals => write!(f, "individuals_count must be positive"),
            Self::SelectionTooLarge {
                selection_count,
                individuals_count,
            } => write!(
                f,
                "selection_count {selection_count} must be below individuals_count {individuals_count}"
            ),
            Self::MutationChanceOutOfRange(chance) => {
                write!(f, "mutation_chance {chance} must be within 0..=100")
            }
            Self::Io(e) => write!(f, "parameter file i/o failed: {e}"),
            Self::Parse(e) => write!(f, "parameter file is not valid JSON: {e}"),
        }
    }
}

impl Error for ParamsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParamsError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl GaParams {
    /// Validates the parameter ranges.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.individuals_count == 0 {
            return Err(ParamsError::NoIndividuals);
        }
        if self.selection_count >= self.individuals_count {
            return Err(ParamsError::SelectionTooLarge {
                selection_count: self.selection_count,
                individuals_count: self.individuals_count,
            });
        }
        if self.mutation_chance > 100 {
            return Err(ParamsError::MutationChanceOutOfRange(self.mutation_chance));
        }
        Ok(())
    }

    /// Loads validated parameters from `path`. When the file does not
    /// exist, the defaults are used and persisted to `path`.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        if !path.exists() {
            let params = Self::default();
            params.save(path)?;
            info!(path = %path.display(), "no parameter file, defaults written");
            return Ok(params);
        }
        let text = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    /// Persists the record to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        fs::write(path.as_ref(), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
