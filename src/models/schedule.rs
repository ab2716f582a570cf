//! Weekly schedule and weekly-rest (DSR) models.
//!
//! This module defines the [`WeeklySchedule`] grid consumed by the DSR
//! compliance checker and the rotation generator, plus the constraint and
//! report types around it.

use serde::{Deserialize, Serialize};

/// Number of days in the scheduling week.
pub const DAYS_IN_WEEK: usize = 7;

/// Index of Sunday in a [`WeekPattern`].
pub const SUNDAY: usize = 0;

/// One employee's week: `true` means scheduled to work. Index 0 is Sunday.
pub type WeekPattern = [bool; DAYS_IN_WEEK];

/// A work-schedule grid indexed by employee, then by day of week.
///
/// # Example
///
/// ```
/// use staffing_engine::models::WeeklySchedule;
///
/// let schedule = WeeklySchedule::new(vec![
///     [true, true, true, true, true, false, false],
///     [false, true, true, true, true, true, false],
/// ]);
/// assert_eq!(schedule.employee_count(), 2);
/// assert_eq!(schedule.working_days(1), Some(5));
/// assert!(schedule.works_sunday(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    employees: Vec<WeekPattern>,
}

impl WeeklySchedule {
    /// Creates a schedule from per-employee week patterns.
    pub fn new(employees: Vec<WeekPattern>) -> Self {
        Self { employees }
    }

    /// Returns the per-employee week patterns.
    pub fn employees(&self) -> &[WeekPattern] {
        &self.employees
    }

    /// Returns the number of employees on the schedule.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Returns the number of days the given employee works, if they exist.
    pub fn working_days(&self, employee: usize) -> Option<usize> {
        self.employees
            .get(employee)
            .map(|week| week.iter().filter(|works| **works).count())
    }

    /// Returns true if the given employee is scheduled on Sunday.
    pub fn works_sunday(&self, employee: usize) -> bool {
        self.employees
            .get(employee)
            .is_some_and(|week| week[SUNDAY])
    }

    /// Returns true if the schedule has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Weekly-rest constraints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DsrConstraints {
    /// Minimum fraction (0-1) of employees that must work on Sunday.
    pub min_sunday_work: f64,
    /// Maximum number of working days per employee per week.
    pub max_weekly_days: u32,
}

impl Default for DsrConstraints {
    fn default() -> Self {
        Self {
            min_sunday_work: 0.75,
            max_weekly_days: 6,
        }
    }
}

/// Outcome of a DSR compliance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DsrComplianceReport {
    /// True iff `violations` is empty.
    pub compliant: bool,
    /// Fraction of employees working on Sunday (0 when there are no employees).
    pub sunday_work_rate: f64,
    /// Mean working days per employee (0 when there are no employees).
    pub avg_weekly_days: f64,
    /// One message per detected violation.
    pub violations: Vec<String>,
}

/// A generated weekly rotation together with its compliance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// The generated schedule.
    pub schedule: WeeklySchedule,
    /// Number of employees rostered (the peak of the HC distribution).
    pub total_employees: u32,
    /// Number of employees scheduled on Sunday.
    pub sunday_workers: u32,
    /// Compliance of the generated schedule.
    pub compliance: DsrComplianceReport,
}
