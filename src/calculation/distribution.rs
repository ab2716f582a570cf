//! Curve-level headcount distribution.
//!
//! Applies the per-interval calculation to every slot of a forecast curve
//! independently. There is no smoothing between intervals.

use crate::error::EngineResult;
use crate::models::{
    CalculationParameters, IntervalInput, IntervalRequirement, ensure_same_length,
    validate_unproductivity,
};

use super::hc_need::calculate_interval_requirement;

/// Computes the full per-interval requirement for a pair of curves.
///
/// # Errors
///
/// Returns [`EngineError::LengthMismatch`](crate::error::EngineError::LengthMismatch)
/// if the curves differ in length, or
/// [`EngineError::InvalidConfiguration`](crate::error::EngineError::InvalidConfiguration)
/// if the unproductivity percentage is out of range.
pub fn calculate_interval_requirements(
    volume_curve: &[f64],
    tmi_curve: &[f64],
    params: &CalculationParameters,
) -> EngineResult<Vec<IntervalRequirement>> {
    ensure_same_length(volume_curve, tmi_curve)?;
    validate_unproductivity(params.unproductivity_percent)?;

    volume_curve
        .iter()
        .zip(tmi_curve)
        .map(|(&volume, &tmi)| {
            let input = IntervalInput {
                volume,
                tmi,
                target_sla: params.target_service_level,
                unproductivity: params.unproductivity_percent,
            };
            calculate_interval_requirement(&input, params.target_answer_time)
        })
        .collect()
}

/// Returns the required headcount for every interval of the curves.
///
/// Uses the default 20 second target answer time.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_hc_distribution;
///
/// let hc = calculate_hc_distribution(&[0.0, 40.0, 100.0], &[180.0, 180.0, 180.0], 80.0, 10.0)
///     .unwrap();
/// assert_eq!(hc, vec![0, 5, 9]);
///
/// assert!(calculate_hc_distribution(&[1.0, 2.0], &[180.0], 80.0, 10.0).is_err());
/// ```
pub fn calculate_hc_distribution(
    volume_curve: &[f64],
    tmi_curve: &[f64],
    target_sla: f64,
    unproductivity: f64,
) -> EngineResult<Vec<u32>> {
    let params = CalculationParameters::new(target_sla, unproductivity);
    let requirements = calculate_interval_requirements(volume_curve, tmi_curve, &params)?;
    Ok(requirements.into_iter().map(|r| r.headcount).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_distribution_applies_each_interval_independently() {
        let volume = [0.0, 40.0, 100.0, 200.0, 120.0];
        let tmi = [180.0, 180.0, 180.0, 180.0, 240.0];

        let hc = calculate_hc_distribution(&volume, &tmi, 80.0, 10.0).unwrap();

        assert_eq!(hc, vec![0, 5, 9, 16, 13]);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let result = calculate_hc_distribution(&[1.0, 2.0, 3.0], &[180.0, 180.0], 80.0, 0.0);
        assert!(matches!(
            result,
            Err(EngineError::LengthMismatch {
                volume_len: 3,
                handle_time_len: 2
            })
        ));
    }

    #[test]
    fn test_output_length_matches_input() {
        let volume = vec![50.0; 96];
        let tmi = vec![200.0; 96];
        let hc = calculate_hc_distribution(&volume, &tmi, 80.0, 15.0).unwrap();
        assert_eq!(hc.len(), 96);
        assert!(hc.iter().all(|&v| v == hc[0]));
    }

    #[test]
    fn test_empty_curves_give_empty_distribution() {
        assert!(calculate_hc_distribution(&[], &[], 80.0, 0.0).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_unproductivity_fails_before_any_interval() {
        let result = calculate_hc_distribution(&[100.0], &[180.0], 80.0, 100.0);
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_requirements_keep_base_agents() {
        let params = CalculationParameters::new(80.0, 20.0);
        let reqs = calculate_interval_requirements(&[100.0], &[180.0], &params).unwrap();
        assert_eq!(reqs[0].base_agents, 8);
        assert_eq!(reqs[0].headcount, 10);
    }

    #[test]
    fn test_overwhelming_interval_saturates_and_is_flagged() {
        let params = CalculationParameters::new(80.0, 0.0);
        let reqs = calculate_interval_requirements(&[1e12, 100.0], &[180.0, 180.0], &params)
            .unwrap();
        assert_eq!(reqs[0].headcount, u32::MAX);
        assert!(reqs[0].search_bound_hit);
        assert_eq!(reqs[1].headcount, 8);
        assert!(!reqs[1].search_bound_hit);
    }
}
