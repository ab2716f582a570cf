//! Agent occupancy.

/// Operational ceiling for reported occupancy, in percent.
pub const MAX_OCCUPANCY: f64 = 100.0;

/// Returns the share of agent time spent handling contacts, in percent.
///
/// The value is clamped to [`MAX_OCCUPANCY`] even when the offered traffic
/// exceeds the staffed agents; reports show the ceiling rather than the raw
/// ratio. Zero or negative `agents` yields 0.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_occupancy;
///
/// assert_eq!(calculate_occupancy(5.0, 8.0), 62.5);
/// assert_eq!(calculate_occupancy(12.0, 8.0), 100.0);
/// assert_eq!(calculate_occupancy(5.0, 0.0), 0.0);
/// ```
pub fn calculate_occupancy(traffic: f64, agents: f64) -> f64 {
    if agents <= 0.0 {
        return 0.0;
    }
    (traffic / agents * 100.0).min(MAX_OCCUPANCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_ratio() {
        assert_eq!(calculate_occupancy(5.0, 10.0), 50.0);
        assert_eq!(calculate_occupancy(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_occupancy_is_clamped_to_100() {
        assert_eq!(calculate_occupancy(10.0, 10.0), 100.0);
        assert_eq!(calculate_occupancy(30.0, 10.0), 100.0);
    }

    #[test]
    fn test_no_agents_means_zero_occupancy() {
        assert_eq!(calculate_occupancy(3.0, 0.0), 0.0);
        assert_eq!(calculate_occupancy(3.0, -2.0), 0.0);
    }
}
