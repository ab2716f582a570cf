//! Weekly rotation generator.
//!
//! Builds a simple roster for the peak headcount of a distribution: the first
//! `floor(n × min_sunday_work)` employees cover Sunday, and the other days
//! rotate so that employee `e` works day `d` when `(e + d) % 7` is below the
//! weekly-day limit. The roster is not guaranteed to be compliant; it is
//! returned with its DSR report.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DAYS_IN_WEEK, DsrConstraints, SUNDAY, ScheduleResult, WeekPattern, WeeklySchedule,
};

use super::dsr::calculate_dsr_compliance;

/// Default ceiling on the roster a rotation is generated for.
pub const DEFAULT_MAX_ROSTER_SIZE: u32 = 10_000;

/// Returns the peak of `hc_distribution`, the roster size a rotation would
/// allocate, if it does not exceed `max_roster_size`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] when the peak is above the limit.
pub fn ensure_roster_size(hc_distribution: &[u32], max_roster_size: u32) -> EngineResult<u32> {
    let peak = hc_distribution.iter().copied().max().unwrap_or(0);
    if peak > max_roster_size {
        return Err(EngineError::invalid_configuration(
            "hc_distribution",
            format!(
                "peak headcount {} exceeds the roster limit of {}",
                peak, max_roster_size
            ),
        ));
    }
    Ok(peak)
}

fn week_for(employee: usize, sunday_quota: usize, max_weekly_days: usize) -> WeekPattern {
    let mut week = [false; DAYS_IN_WEEK];
    for (day, works) in week.iter_mut().enumerate() {
        *works = if day == SUNDAY {
            employee < sunday_quota
        } else {
            (employee + day) % DAYS_IN_WEEK < max_weekly_days
        };
    }
    week
}

/// Generates a weekly rotation for the peak of `hc_distribution`.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::generate_weekly_schedule;
/// use staffing_engine::models::DsrConstraints;
///
/// let result = generate_weekly_schedule(&[2, 4, 3], &DsrConstraints::default());
/// assert_eq!(result.total_employees, 4);
/// assert_eq!(result.sunday_workers, 3);
/// assert_eq!(result.schedule.employee_count(), 4);
/// ```
pub fn generate_weekly_schedule(
    hc_distribution: &[u32],
    constraints: &DsrConstraints,
) -> ScheduleResult {
    let employees = hc_distribution.iter().copied().max().unwrap_or(0);
    let sunday_quota = (f64::from(employees) * constraints.min_sunday_work).floor() as usize;
    let max_weekly_days = constraints.max_weekly_days as usize;

    let schedule = WeeklySchedule::new(
        (0..employees as usize)
            .map(|employee| week_for(employee, sunday_quota, max_weekly_days))
            .collect(),
    );

    let sunday_workers = schedule
        .employees()
        .iter()
        .filter(|week| week[SUNDAY])
        .count() as u32;
    let compliance = calculate_dsr_compliance(&schedule, constraints);

    ScheduleResult {
        schedule,
        total_employees: employees,
        sunday_workers,
        compliance,
    }
}
