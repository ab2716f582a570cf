//! Erlang-B / Erlang-C queueing formulas.
//!
//! Offered traffic is measured in Erlangs: contacts per hour times average
//! handle time in hours. The wait probability is derived from the Erlang-B
//! blocking probability, which is evaluated with the recurrence
//! `B(0) = 1`, `B(k) = a·B(k-1) / (k + a·B(k-1))`. The recurrence is
//! algebraically identical to `(a^N / N!) / Σ a^i / i!` but never forms the
//! power or the factorial, so it stays finite for thousands of agents.

/// Seconds per hour, used to convert handle times into Erlangs.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Returns the offered traffic in Erlangs for a volume (contacts per hour)
/// and an average handle time in seconds.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::traffic_intensity;
///
/// assert_eq!(traffic_intensity(100.0, 180.0), 5.0);
/// ```
pub fn traffic_intensity(volume: f64, handle_time: f64) -> f64 {
    volume * handle_time / SECONDS_PER_HOUR
}

/// Erlang-B blocking probability for `agents` servers and `traffic` Erlangs.
///
/// Returns 1 for zero agents and 0 for zero traffic.
pub fn erlang_b(agents: u32, traffic: f64) -> f64 {
    if traffic <= 0.0 {
        return 0.0;
    }

    let mut blocking = 1.0;
    for k in 1..=agents {
        let scaled = traffic * blocking;
        blocking = scaled / (f64::from(k) + scaled);
    }
    blocking
}

/// Probability that an arriving contact has to wait (Erlang-C).
///
/// Returns 0 when there are no agents or no traffic, and 1 when the traffic
/// meets or exceeds the number of agents (the queue is unstable). The result
/// is clamped to at most 1.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::erlang_c;
///
/// assert_eq!(erlang_c(0, 5.0), 0.0);
/// assert_eq!(erlang_c(5, 5.0), 1.0);
/// assert!((erlang_c(8, 5.0) - 0.1672665066617566).abs() < 1e-9);
/// ```
pub fn erlang_c(agents: u32, traffic: f64) -> f64 {
    if agents == 0 || traffic <= 0.0 {
        return 0.0;
    }
    let n = f64::from(agents);
    if traffic >= n {
        return 1.0;
    }

    let blocking = erlang_b(agents, traffic);
    let wait = blocking / (1.0 - (traffic / n) * (1.0 - blocking));
    wait.min(1.0)
}

/// Percentage of contacts answered within `target_answer_time` seconds.
///
/// `SL = (1 - P_wait · e^(-(N - a) · T / AHT)) · 100`
pub fn service_level(agents: u32, traffic: f64, handle_time: f64, target_answer_time: f64) -> f64 {
    let prob_delay = erlang_c(agents, traffic);
    let headroom = f64::from(agents) - traffic;
    (1.0 - prob_delay * (-headroom * target_answer_time / handle_time).exp()) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    /// Reference values computed with exact rational arithmetic.
    const REFERENCE: &[(u32, f64, f64)] = &[
        (1, 0.5, 0.5),
        (2, 1.0, 0.333_333_333_333_333_3),
        (3, 2.0, 0.444_444_444_444_444_4),
        (6, 5.0, 0.587_516_450_460_612_8),
        (7, 5.0, 0.324_149_949_173_288),
        (8, 5.0, 0.167_266_506_661_756_6),
        (10, 8.0, 0.409_180_150_796_443_54),
        (55, 50.0, 0.384_547_317_932_928_57),
        (500, 480.0, 0.266_512_519_962_364_14),
        (520, 500.0, 0.274_756_344_696_524_1),
    ];

    #[test]
    fn test_traffic_intensity_converts_to_erlangs() {
        assert_eq!(traffic_intensity(100.0, 180.0), 5.0);
        assert_eq!(traffic_intensity(0.0, 180.0), 0.0);
    }

    #[test]
    fn test_erlang_c_matches_reference_table() {
        for &(agents, traffic, expected) in REFERENCE {
            let actual = erlang_c(agents, traffic);
            assert!(
                (actual - expected).abs() < TOLERANCE,
                "erlang_c({}, {}) = {}, expected {}",
                agents,
                traffic,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_erlang_c_no_agents_or_no_traffic_is_zero() {
        assert_eq!(erlang_c(0, 3.0), 0.0);
        assert_eq!(erlang_c(4, 0.0), 0.0);
        assert_eq!(erlang_c(4, -1.0), 0.0);
    }

    #[test]
    fn test_erlang_c_overloaded_queue_is_one() {
        assert_eq!(erlang_c(5, 5.0), 1.0);
        assert_eq!(erlang_c(5, 12.5), 1.0);
    }

    #[test]
    fn test_erlang_c_stays_finite_for_large_agent_counts() {
        let wait = erlang_c(2000, 1950.0);
        assert!(wait.is_finite());
        assert!((0.0..=1.0).contains(&wait));
    }

    #[test]
    fn test_erlang_b_single_server() {
        // B(1, a) = a / (1 + a)
        assert!((erlang_b(1, 1.0) - 0.5).abs() < TOLERANCE);
        assert_eq!(erlang_b(0, 2.0), 1.0);
    }

    #[test]
    fn test_service_level_for_reference_scenario() {
        let sl = service_level(8, 5.0, 180.0, 20.0);
        assert!((sl - 88.014_831_076_655_21).abs() < TOLERANCE);
    }

    #[test]
    fn test_service_level_is_zero_at_saturation() {
        assert_eq!(service_level(5, 5.0, 180.0, 20.0), 0.0);
    }
}
