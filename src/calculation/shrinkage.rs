//! Shrinkage decomposition.
//!
//! [`calculate_shrinkage`] splits an existing headcount into productive and
//! unproductive parts and reports what would be needed to keep the whole base
//! productive. It is a reporting helper: the per-interval requirement scales
//! a requirement *up* for shrinkage instead (see
//! [`calculate_hc_need`](super::calculate_hc_need)).

use crate::error::{EngineError, EngineResult};
use crate::models::ShrinkageBreakdown;

/// Splits `base_hc` according to `shrinkage_percentage`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] if the percentage is
/// negative, non-finite or 100 or more.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_shrinkage;
///
/// let split = calculate_shrinkage(100, 20.0).unwrap();
/// assert_eq!((split.productive_hc, split.unproductive_hc, split.total_required), (80, 20, 125));
/// ```
pub fn calculate_shrinkage(base_hc: u32, shrinkage_percentage: f64) -> EngineResult<ShrinkageBreakdown> {
    if !shrinkage_percentage.is_finite() || !(0.0..100.0).contains(&shrinkage_percentage) {
        return Err(EngineError::invalid_configuration(
            "shrinkage_percentage",
            format!("must be in [0, 100), got {}", shrinkage_percentage),
        ));
    }

    let rate = shrinkage_percentage / 100.0;
    let base = f64::from(base_hc);
    let productive_hc = (base * (1.0 - rate)).floor() as u32;
    let total_required = (base / (1.0 - rate)).ceil() as u32;

    Ok(ShrinkageBreakdown {
        productive_hc,
        unproductive_hc: base_hc - productive_hc,
        total_required,
    })
}

/// Returns the productive part of `total_hours` for an unproductivity rate in `[0, 1]`.
pub fn productive_hours(total_hours: f64, unproductivity_rate: f64) -> f64 {
    total_hours * (1.0 - unproductivity_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SH-001: 100 heads at 20%
    #[test]
    fn test_reference_split() {
        let split = calculate_shrinkage(100, 20.0).unwrap();
        assert_eq!(split.productive_hc, 80);
        assert_eq!(split.unproductive_hc, 20);
        assert_eq!(split.total_required, 125);
    }

    #[test]
    fn test_zero_shrinkage() {
        let split = calculate_shrinkage(42, 0.0).unwrap();
        assert_eq!(split.productive_hc, 42);
        assert_eq!(split.unproductive_hc, 0);
        assert_eq!(split.total_required, 42);
    }

    #[test]
    fn test_rounding_directions() {
        // 7 × 0.85 = 5.95 -> 5, 7 / 0.85 = 8.24 -> 9
        let split = calculate_shrinkage(7, 15.0).unwrap();
        assert_eq!(split.productive_hc, 5);
        assert_eq!(split.unproductive_hc, 2);
        assert_eq!(split.total_required, 9);
    }

    #[test]
    fn test_zero_headcount() {
        let split = calculate_shrinkage(0, 30.0).unwrap();
        assert_eq!(split.productive_hc + split.unproductive_hc, 0);
        assert_eq!(split.total_required, 0);
    }

    #[test]
    fn test_full_shrinkage_is_rejected() {
        assert!(calculate_shrinkage(10, 100.0).is_err());
        assert!(calculate_shrinkage(10, -5.0).is_err());
    }

    #[test]
    fn test_productive_hours() {
        assert!((productive_hours(8.2, 0.18) - 6.724).abs() < 1e-9);
        assert_eq!(productive_hours(4.0, 0.0), 4.0);
    }
}
