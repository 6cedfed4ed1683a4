use chrono::{Duration, Utc};
use proptest::prelude::*;
use pulse_core::config::CadenceConfig;
use pulse_core::models::{Cadence, EconomicValue};
use pulse_scheduler::policy::{self, PolicyInputs, Proposal};
use pulse_scheduler::AdaptiveScheduler;

fn arb_cadence() -> impl Strategy<Value = Cadence> {
    prop_oneof![
        Just(Cadence::Immediate),
        Just(Cadence::Continuous),
        Just(Cadence::Analysis),
        Just(Cadence::Optimization),
        Just(Cadence::Evolution),
    ]
}

fn arb_tunable_cadence() -> impl Strategy<Value = Cadence> {
    prop_oneof![
        Just(Cadence::Continuous),
        Just(Cadence::Analysis),
        Just(Cadence::Optimization),
        Just(Cadence::Evolution),
    ]
}

// ── Interval bounds invariant ────────────────────────────────────────────

proptest! {
    #[test]
    fn intervals_stay_within_bounds_under_manual_sets(
        sets in prop::collection::vec((arb_cadence(), 0i64..1_000_000), 1..50),
    ) {
        let scheduler = AdaptiveScheduler::new();
        for (cadence, secs) in sets {
            scheduler.set_interval(cadence, Duration::seconds(secs)).unwrap();
            let config = CadenceConfig::for_cadence(cadence);
            let current = scheduler.interval(cadence);
            prop_assert!(current >= config.min_interval());
            prop_assert!(current <= config.max_interval());
        }
    }

    #[test]
    fn intervals_stay_within_bounds_under_recommendation_cycles(
        cadence in arb_tunable_cadence(),
        outcomes in prop::collection::vec((any::<bool>(), 0u8..=100), 5..60),
        cycles in 1usize..5,
    ) {
        let scheduler = AdaptiveScheduler::new();
        let now = Utc::now();
        for (i, (success, value)) in outcomes.iter().enumerate() {
            scheduler.record_execution_at(
                cadence,
                *success,
                Duration::seconds(1),
                "goal",
                EconomicValue::new(*value),
                now + Duration::seconds(i as i64),
            );
        }
        for _ in 0..cycles {
            scheduler.apply_changes(&scheduler.recommend_changes().changes);
            let config = CadenceConfig::for_cadence(cadence);
            let current = scheduler.interval(cadence);
            prop_assert!(current >= config.min_interval());
            prop_assert!(current <= config.max_interval());
        }
    }
}

// ── History bound and counters ───────────────────────────────────────────

proptest! {
    #[test]
    fn counters_match_record_count(
        cadence in arb_cadence(),
        n in 0usize..250,
    ) {
        let scheduler = AdaptiveScheduler::new();
        let now = Utc::now();
        for i in 0..n {
            scheduler.record_execution_at(
                cadence,
                true,
                Duration::seconds(1),
                "goal",
                EconomicValue::new(50),
                now + Duration::seconds(i as i64),
            );
        }
        let metrics = scheduler.metrics();
        prop_assert_eq!(metrics[&cadence].execution_count, n as u64);
        prop_assert_eq!(metrics[&cadence].success_count, n as u64);
    }

    #[test]
    fn success_rate_is_always_a_valid_fraction(
        cadence in arb_cadence(),
        outcomes in prop::collection::vec(any::<bool>(), 0..200),
    ) {
        let scheduler = AdaptiveScheduler::new();
        for success in &outcomes {
            scheduler.record_execution(
                cadence,
                *success,
                Duration::seconds(1),
                "goal",
                EconomicValue::new(50),
            );
        }
        let rate = scheduler.success_rate(cadence);
        prop_assert!((0.0..=1.0).contains(&rate));
        if outcomes.is_empty() {
            prop_assert_eq!(rate, 1.0);
        }
    }
}

// ── Policy proposals ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn proposals_are_always_within_tuning_bounds(
        cadence in arb_tunable_cadence(),
        current_fraction in 0.5f64..=2.0,
        success_rate in 0.0f64..=1.0,
        value_time_ratio in 0.0f64..10.0,
        samples in 0usize..150,
    ) {
        let mut config = CadenceConfig::for_cadence(cadence);
        config.set_current(policy::scale(config.default_interval, current_fraction));
        let inputs = PolicyInputs { success_rate, value_time_ratio, samples };

        if let Proposal::Adjust { target, .. } = policy::evaluate(&config, &inputs, 5) {
            prop_assert!(target >= config.min_interval());
            prop_assert!(target <= config.max_interval());
            // Anything emitted must clear the 10% no-op band.
            prop_assert!(
                policy::relative_change(config.current_interval, target) > 0.1
            );
        }
    }

    #[test]
    fn no_proposal_below_minimum_samples(
        success_rate in 0.0f64..=1.0,
        value_time_ratio in 0.0f64..10.0,
        samples in 0usize..5,
    ) {
        let config = CadenceConfig::for_cadence(Cadence::Continuous);
        let inputs = PolicyInputs { success_rate, value_time_ratio, samples };
        prop_assert!(matches!(
            policy::evaluate(&config, &inputs, 5),
            Proposal::InsufficientData
        ));
    }
}
