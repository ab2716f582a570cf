//! Weekly paid rest (DSR) compliance.
//!
//! A schedule is compliant when no employee works more than the allowed
//! number of days in the week and enough of the workforce covers Sunday.

use crate::models::{DsrComplianceReport, DsrConstraints, WeeklySchedule};

/// Checks a weekly schedule against the DSR constraints.
///
/// Each employee over `max_weekly_days` produces one violation. A Sunday
/// work rate below `min_sunday_work` produces one more. An empty schedule
/// reports zero rates; its Sunday rate is still compared with the minimum.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_dsr_compliance;
/// use staffing_engine::models::{DsrConstraints, WeeklySchedule};
///
/// let schedule = WeeklySchedule::new(vec![[true, true, true, true, true, true, false]; 4]);
/// let constraints = DsrConstraints { min_sunday_work: 0.75, max_weekly_days: 6 };
///
/// let report = calculate_dsr_compliance(&schedule, &constraints);
/// assert!(report.compliant);
/// assert_eq!(report.sunday_work_rate, 1.0);
/// assert_eq!(report.avg_weekly_days, 6.0);
/// ```
pub fn calculate_dsr_compliance(
    schedule: &WeeklySchedule,
    constraints: &DsrConstraints,
) -> DsrComplianceReport {
    let mut violations = Vec::new();
    let total_employees = schedule.employee_count();
    let mut sunday_workers = 0usize;
    let mut total_weekly_days = 0usize;

    for employee in 0..total_employees {
        if schedule.works_sunday(employee) {
            sunday_workers += 1;
        }

        let working_days = schedule.working_days(employee).unwrap_or(0);
        total_weekly_days += working_days;

        if working_days > constraints.max_weekly_days as usize {
            violations.push(format!(
                "Employee {} works {} days (max: {})",
                employee, working_days, constraints.max_weekly_days
            ));
        }
    }

    let (sunday_work_rate, avg_weekly_days) = if total_employees > 0 {
        (
            sunday_workers as f64 / total_employees as f64,
            total_weekly_days as f64 / total_employees as f64,
        )
    } else {
        (0.0, 0.0)
    };

    if sunday_work_rate < constraints.min_sunday_work {
        violations.push(format!(
            "Sunday work rate {:.1}% below minimum {}%",
            sunday_work_rate * 100.0,
            constraints.min_sunday_work * 100.0
        ));
    }

    DsrComplianceReport {
        compliant: violations.is_empty(),
        sunday_work_rate,
        avg_weekly_days,
        violations,
    }
}
