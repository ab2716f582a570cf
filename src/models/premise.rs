//! Planning premise: the forecast curves for one operation.
//!
//! A premise carries the volume curve, the handle-time curve (TMI) and the
//! TMA curve, one value per fixed-width interval. TMA is kept as an opaque
//! handle-time-like sequence; no staffing formula reads it.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Forecast curves for one planning period.
///
/// # Example
///
/// ```
/// use staffing_engine::models::PlanningPremise;
///
/// let premise = PlanningPremise {
///     volume_curve: vec![0.0, 40.0, 100.0],
///     tmi_curve: vec![180.0, 180.0, 180.0],
///     tma_curve: vec![],
///     unproductivity_percent: 10.0,
/// };
/// assert_eq!(premise.interval_count().unwrap(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningPremise {
    /// Contacts offered per interval, expressed per hour.
    pub volume_curve: Vec<f64>,
    /// Average handle time per interval, in seconds.
    pub tmi_curve: Vec<f64>,
    /// TMA per interval, in seconds. May be empty.
    #[serde(default)]
    pub tma_curve: Vec<f64>,
    /// Shrinkage percentage applied to every interval.
    #[serde(default)]
    pub unproductivity_percent: f64,
}

impl PlanningPremise {
    /// Returns the number of intervals after checking that the curves line up.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::LengthMismatch`] if the volume and TMI curves
    /// differ in length, or [`EngineError::InvalidConfiguration`] if a
    /// non-empty TMA curve has a third length or any curve holds a negative
    /// or non-finite value.
    pub fn interval_count(&self) -> EngineResult<usize> {
        ensure_same_length(&self.volume_curve, &self.tmi_curve)?;

        if !self.tma_curve.is_empty() && self.tma_curve.len() != self.volume_curve.len() {
            return Err(EngineError::invalid_configuration(
                "tma_curve",
                format!(
                    "has {} intervals but the volume curve has {}",
                    self.tma_curve.len(),
                    self.volume_curve.len()
                ),
            ));
        }

        for (name, curve) in [
            ("volume_curve", &self.volume_curve),
            ("tmi_curve", &self.tmi_curve),
            ("tma_curve", &self.tma_curve),
        ] {
            if let Some(index) = curve.iter().position(|v| !v.is_finite() || *v < 0.0) {
                return Err(EngineError::invalid_configuration(
                    name,
                    format!("interval {} holds {}", index, curve[index]),
                ));
            }
        }

        Ok(self.volume_curve.len())
    }
}

/// Fails with [`EngineError::LengthMismatch`] unless both curves have the same length.
pub fn ensure_same_length(volume_curve: &[f64], handle_time_curve: &[f64]) -> EngineResult<()> {
    if volume_curve.len() != handle_time_curve.len() {
        return Err(EngineError::LengthMismatch {
            volume_len: volume_curve.len(),
            handle_time_len: handle_time_curve.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premise(volume: Vec<f64>, tmi: Vec<f64>, tma: Vec<f64>) -> PlanningPremise {
        PlanningPremise {
            volume_curve: volume,
            tmi_curve: tmi,
            tma_curve: tma,
            unproductivity_percent: 0.0,
        }
    }

    #[test]
    fn test_matching_curves_report_interval_count() {
        let p = premise(vec![1.0; 96], vec![180.0; 96], vec![30.0; 96]);
        assert_eq!(p.interval_count().unwrap(), 96);
    }

    #[test]
    fn test_volume_tmi_mismatch_is_length_mismatch() {
        let p = premise(vec![1.0; 4], vec![180.0; 3], vec![]);
        assert!(matches!(
            p.interval_count(),
            Err(EngineError::LengthMismatch {
                volume_len: 4,
                handle_time_len: 3
            })
        ));
    }

    #[test]
    fn test_tma_with_third_length_is_rejected() {
        let p = premise(vec![1.0; 4], vec![180.0; 4], vec![30.0; 2]);
        assert!(matches!(
            p.interval_count(),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_negative_volume_is_rejected() {
        let p = premise(vec![1.0, -2.0], vec![180.0, 180.0], vec![]);
        let err = p.interval_count().unwrap_err();
        assert!(err.to_string().contains("volume_curve"));
        assert!(err.to_string().contains("interval 1"));
    }

    #[test]
    fn test_empty_curves_are_valid() {
        let p = premise(vec![], vec![], vec![]);
        assert_eq!(p.interval_count().unwrap(), 0);
    }
}
