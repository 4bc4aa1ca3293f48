//! Job model.
//!
//! A job is a time-bounded piece of work that yields a fixed gain when
//! finished by its due date and loses `daily_penalty` per day of delay,
//! floored so total profit never goes negative. Work is measured in
//! employee-days per qualification. Immutable once constructed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A job to be staffed and completed within the planning horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job name.
    pub name: String,
    /// Profit realized if the job completes on or before the due date.
    pub gain: i64,
    /// Latest day (inclusive) on which the full gain is earned.
    pub due_date: usize,
    /// Profit lost per day of completion past the due date.
    pub daily_penalty: i64,
    /// Employee-days of work required, per qualification label.
    /// Qualifications absent from the map require zero days.
    pub working_days_per_qualification: HashMap<String, u32>,
}

impl Job {
    /// Creates a new job with zero gain, due date 0, and no requirements.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gain: 0,
            due_date: 0,
            daily_penalty: 0,
            working_days_per_qualification: HashMap::new(),
        }
    }

    /// Sets the gain.
    pub fn with_gain(mut self, gain: i64) -> Self {
        self.gain = gain;
        self
    }

    /// Sets the due date (day index).
    pub fn with_due_date(mut self, due_date: usize) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the daily delay penalty.
    pub fn with_daily_penalty(mut self, daily_penalty: i64) -> Self {
        self.daily_penalty = daily_penalty;
        self
    }

    /// Adds a work requirement in employee-days for a qualification.
    pub fn with_requirement(mut self, qualification: impl Into<String>, days: u32) -> Self {
        self.working_days_per_qualification
            .insert(qualification.into(), days);
        self
    }

    /// Required employee-days for a qualification (0 if not recorded).
    pub fn required_days(&self, qualification: &str) -> u32 {
        self.working_days_per_qualification
            .get(qualification)
            .copied()
            .unwrap_or(0)
    }

    /// Total required employee-days across all qualifications.
    pub fn total_required_days(&self) -> u32 {
        self.working_days_per_qualification.values().sum()
    }

    /// Whether this job requires any work at all.
    pub fn requires_work(&self) -> bool {
        self.total_required_days() > 0
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job: {} (gain: {}, due date: {}, daily penalty: {}, working days per qualification: {:?})",
            self.name, self.gain, self.due_date, self.daily_penalty,
            self.working_days_per_qualification
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let j = Job::new("Website")
            .with_gain(100)
            .with_due_date(5)
            .with_daily_penalty(10)
            .with_requirement("A", 2);

        assert_eq!(j.name, "Website");
        assert_eq!(j.gain, 100);
        assert_eq!(j.due_date, 5);
        assert_eq!(j.daily_penalty, 10);
        assert_eq!(j.required_days("A"), 2);
    }

    #[test]
    fn test_missing_requirement_defaults_to_zero() {
        let j = Job::new("Website").with_requirement("A", 2);
        assert_eq!(j.required_days("B"), 0);
    }

    #[test]
    fn test_total_required_days() {
        let j = Job::new("Migration")
            .with_requirement("A", 2)
            .with_requirement("C", 3);
        assert_eq!(j.total_required_days(), 5);
        assert!(j.requires_work());
    }

    #[test]
    fn test_empty_job() {
        let j = Job::new("noop");
        assert_eq!(j.total_required_days(), 0);
        assert!(!j.requires_work());
    }
}
