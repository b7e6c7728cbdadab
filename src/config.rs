//! planner.toml configuration parser.
//!
//! ```toml
//! [planner]
//! max_slots = 8
//! ceiling = "strict"
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PlannerResult;
use crate::models::Round;
use crate::scheduler::ScheduleRequest;

/// What to do when no rotation fits within the slot ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CeilingPolicy {
    /// Return the last packing with `met_ceiling = false`.
    #[default]
    BestEffort,
    /// Fail with `ConstraintUnsatisfiable`.
    Strict,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub planner: PlannerSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Slot ceiling. `None` = one slot per round.
    pub max_slots: Option<usize>,
    #[serde(default)]
    pub ceiling: CeilingPolicy,
}

impl PlannerConfig {
    pub fn from_file(path: &Path) -> PlannerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> PlannerResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Builds a request using the configured ceiling.
    pub fn request(&self, rounds: Vec<Round>, start: NaiveDateTime) -> ScheduleRequest {
        let request = ScheduleRequest::new(rounds, start);
        match self.planner.max_slots {
            Some(max_slots) => request.with_max_slots(max_slots),
            None => request,
        }
    }
}
