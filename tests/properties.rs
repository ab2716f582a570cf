//! Property tests for the calculation core.

use proptest::prelude::*;

use staffing_engine::calculation::{
    calculate_dsr_compliance, calculate_hc_distribution, calculate_occupancy,
    calculate_required_agents, calculate_shrinkage, erlang_c, generate_weekly_schedule,
    service_level, traffic_intensity,
};
use staffing_engine::error::EngineError;
use staffing_engine::models::{DsrConstraints, WeeklySchedule};

const TOLERANCE: f64 = 1e-12;

proptest! {
    #[test]
    fn erlang_c_is_a_probability(agents in 0u32..80, traffic in -5.0f64..60.0) {
        let wait = erlang_c(agents, traffic);
        prop_assert!(wait.is_finite());
        prop_assert!((0.0..=1.0).contains(&wait));
    }

    #[test]
    fn erlang_c_saturates_when_understaffed(agents in 1u32..60, excess in 0.0f64..20.0) {
        let traffic = f64::from(agents) + excess;
        prop_assert_eq!(erlang_c(agents, traffic), 1.0);
    }

    #[test]
    fn erlang_c_is_zero_without_agents_or_traffic(agents in 0u32..60, traffic in 0.0f64..40.0) {
        prop_assert_eq!(erlang_c(0, traffic), 0.0);
        prop_assert_eq!(erlang_c(agents, 0.0), 0.0);
    }

    #[test]
    fn erlang_c_does_not_grow_with_agents(agents in 1u32..60, traffic in 0.1f64..40.0) {
        prop_assert!(erlang_c(agents + 1, traffic) <= erlang_c(agents, traffic) + TOLERANCE);
    }

    #[test]
    fn idle_intervals_need_nobody(
        volume in 0.0f64..500.0,
        handle_time in 0.0f64..600.0,
        target in 0.0f64..100.0,
    ) {
        prop_assert_eq!(calculate_required_agents(0.0, handle_time, target, 20.0).agents, 0);
        prop_assert_eq!(calculate_required_agents(volume, 0.0, target, 20.0).agents, 0);
    }

    #[test]
    fn required_agents_cover_traffic_or_flag(
        volume in 1.0f64..800.0,
        handle_time in 10.0f64..600.0,
        target in 50.0f64..99.0,
    ) {
        let traffic = traffic_intensity(volume, handle_time);
        let requirement = calculate_required_agents(volume, handle_time, target, 20.0);

        prop_assert!(f64::from(requirement.agents) >= traffic.ceil());
        if !requirement.search_bound_hit {
            prop_assert!(service_level(requirement.agents, traffic, handle_time, 20.0) >= target);
        }
    }

    #[test]
    fn stricter_targets_never_need_fewer_agents(
        volume in 1.0f64..800.0,
        handle_time in 10.0f64..600.0,
        low in 0.0f64..99.0,
        raise in 0.0f64..1.0,
    ) {
        let high = low + raise * (100.0 - low);
        let relaxed = calculate_required_agents(volume, handle_time, low, 20.0);
        let strict = calculate_required_agents(volume, handle_time, high, 20.0);
        prop_assert!(relaxed.agents <= strict.agents);
    }

    #[test]
    fn distribution_preserves_length(
        curve in prop::collection::vec((0.0f64..300.0, 0.0f64..400.0), 0..48),
        unproductivity in 0.0f64..60.0,
    ) {
        let (volume, tmi): (Vec<f64>, Vec<f64>) = curve.into_iter().unzip();
        let hc = calculate_hc_distribution(&volume, &tmi, 80.0, unproductivity).unwrap();
        prop_assert_eq!(hc.len(), volume.len());
    }

    #[test]
    fn distribution_rejects_unequal_curves(
        volume in prop::collection::vec(0.0f64..300.0, 0..24),
        extra in 1usize..5,
    ) {
        let tmi = vec![180.0; volume.len() + extra];
        let result = calculate_hc_distribution(&volume, &tmi, 80.0, 0.0);
        let is_length_mismatch = matches!(result, Err(EngineError::LengthMismatch { .. }));
        prop_assert!(is_length_mismatch);
    }

    #[test]
    fn occupancy_stays_within_bounds(traffic in 0.0f64..200.0, agents in -5.0f64..200.0) {
        let occupancy = calculate_occupancy(traffic, agents);
        prop_assert!((0.0..=100.0).contains(&occupancy));
    }

    #[test]
    fn shrinkage_split_adds_up(base in 0u32..10_000, percent in 0.0f64..99.9) {
        let split = calculate_shrinkage(base, percent).unwrap();
        prop_assert_eq!(split.productive_hc + split.unproductive_hc, base);
        prop_assert!(split.total_required >= base);
    }

    #[test]
    fn uniform_compliant_schedules_pass(employees in 1usize..40, max_weekly_days in 1u32..=7) {
        let mut week = [false; 7];
        for day in week.iter_mut().take(max_weekly_days as usize) {
            *day = true;
        }
        let schedule = WeeklySchedule::new(vec![week; employees]);
        let constraints = DsrConstraints { min_sunday_work: 1.0, max_weekly_days };

        let report = calculate_dsr_compliance(&schedule, &constraints);

        prop_assert!(report.compliant);
        prop_assert!(report.violations.is_empty());
        prop_assert_eq!(report.avg_weekly_days, f64::from(max_weekly_days));
    }

    #[test]
    fn rotation_staffs_the_peak(hc in prop::collection::vec(0u32..60, 0..24)) {
        let result = generate_weekly_schedule(&hc, &DsrConstraints::default());
        let peak = hc.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(result.total_employees, peak);
        prop_assert_eq!(result.schedule.employee_count(), peak as usize);
        prop_assert!(result.sunday_workers <= peak);
    }
}
