//! Completion-day profit.
//!
//! A job earns its full gain when finished on or before its due date and
//! loses `daily_penalty` per day of delay afterwards, floored at zero.
//! Because these values become objective coefficients, the full
//! per-(job, day) table is precomputed before model construction.

use crate::models::{Job, ProblemData};

/// Profit for completing `job` on `completion_day`.
///
/// Pure and deterministic:
/// - `completion_day <= due_date` → `gain`
/// - otherwise → `max(gain - daily_penalty * days_late, 0)`
pub fn profit(job: &Job, completion_day: usize) -> i64 {
    if completion_day <= job.due_date {
        return job.gain;
    }
    let days_late = (completion_day - job.due_date) as i64;
    (job.gain - job.daily_penalty * days_late).max(0)
}

/// Precomputes the profit of every (job, day) pair over the horizon.
///
/// Indexed as `table[job_index][day]`.
pub fn profit_table(data: &ProblemData) -> Vec<Vec<i64>> {
    data.jobs
        .iter()
        .map(|job| (0..data.horizon).map(|day| profit(job, day)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    fn sample_job() -> Job {
        Job::new("Website")
            .with_gain(100)
            .with_due_date(5)
            .with_daily_penalty(10)
    }

    #[test]
    fn test_full_gain_through_due_date() {
        let job = sample_job();
        assert_eq!(profit(&job, 0), 100);
        assert_eq!(profit(&job, 5), 100);
    }

    #[test]
    fn test_penalty_per_day_late() {
        let job = sample_job();
        assert_eq!(profit(&job, 6), 90);
        assert_eq!(profit(&job, 8), 70);
    }

    #[test]
    fn test_floors_at_zero() {
        let job = sample_job();
        assert_eq!(profit(&job, 15), 0);
        assert_eq!(profit(&job, 100), 0);
    }

    #[test]
    fn test_two_days_late_example() {
        let job = Job::new("Audit")
            .with_gain(50)
            .with_due_date(3)
            .with_daily_penalty(20);
        assert_eq!(profit(&job, 5), 10);
    }

    #[test]
    fn test_non_increasing_past_due_date() {
        let job = sample_job();
        for k in 0..30 {
            assert!(profit(&job, job.due_date + k) >= profit(&job, job.due_date + k + 1));
        }
    }

    #[test]
    fn test_profit_table_shape() {
        let data = ProblemData::new(4)
            .with_qualification("A")
            .with_employee(Employee::new("Olivia"))
            .with_job(sample_job())
            .with_job(
                Job::new("Audit")
                    .with_gain(50)
                    .with_due_date(1)
                    .with_daily_penalty(20),
            );

        let table = profit_table(&data);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].len(), 4);
        assert_eq!(table[0], vec![100, 100, 100, 100]);
        assert_eq!(table[1], vec![50, 50, 30, 10]);
    }
}
