//! Named preset problem instances.
//!
//! Three instances of increasing size are bundled with the crate and
//! selected by name ("small" / "medium" / "large"). An unrecognized name
//! fails with a configuration error before any modeling work, and a
//! selected instance is validated before it is returned.

use std::str::FromStr;

use tracing::debug;

use crate::error::StaffingError;
use crate::models::ProblemData;
use crate::validation::validate_problem;

const TOY_INSTANCE: &str = include_str!("../data/toy_instance.json");
const MEDIUM_INSTANCE: &str = include_str!("../data/medium_instance.json");
const LARGE_INSTANCE: &str = include_str!("../data/large_instance.json");

/// Selector for a bundled problem instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSize {
    Small,
    Medium,
    Large,
}

impl FromStr for DatasetSize {
    type Err = StaffingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(DatasetSize::Small),
            "medium" => Ok(DatasetSize::Medium),
            "large" => Ok(DatasetSize::Large),
            other => Err(StaffingError::UnknownDataset(other.to_string())),
        }
    }
}

/// Loads and validates a bundled instance.
pub fn load(size: DatasetSize) -> Result<ProblemData, StaffingError> {
    let raw = match size {
        DatasetSize::Small => TOY_INSTANCE,
        DatasetSize::Medium => MEDIUM_INSTANCE,
        DatasetSize::Large => LARGE_INSTANCE,
    };

    let data: ProblemData = serde_json::from_str(raw)?;
    validate_problem(&data).map_err(StaffingError::Validation)?;
    debug!(
        ?size,
        horizon = data.horizon,
        staff = data.employee_count(),
        jobs = data.job_count(),
        "loaded dataset"
    );
    Ok(data)
}

/// Loads an instance by selector name, failing fast on unknown names.
pub fn load_named(name: &str) -> Result<ProblemData, StaffingError> {
    load(name.parse()?)
}
