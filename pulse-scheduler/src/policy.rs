//! Recommendation policy: the pure interval-tuning arithmetic.
//!
//! Three-way policy, evaluated in priority order:
//!
//! ```text
//! success rate < 0.70                      → interval × 1.5  (slow down)
//! success rate > 0.90 and value/time > 0.5 → interval × 0.8  (speed up)
//! value/time < 0.2                         → interval × 1.2  (slow down)
//! otherwise                                → no change
//! ```
//!
//! Proposals are clamped to `[default × 0.5, default × 2.0]` and dropped
//! when the relative change versus the current interval is 10% or less.

use chrono::Duration;

use pulse_core::config::CadenceConfig;

/// Below this success rate the cadence gets more processing time.
pub const LOW_SUCCESS_RATE: f64 = 0.70;
/// Above this success rate the cadence is a speedup candidate.
pub const HIGH_SUCCESS_RATE: f64 = 0.90;
/// Value/time ratio above which a high-success cadence speeds up.
pub const HIGH_VALUE_TIME_RATIO: f64 = 0.5;
/// Value/time ratio below which a cadence is not worth its cost.
pub const LOW_VALUE_TIME_RATIO: f64 = 0.2;

/// Interval multiplier when the success rate is low.
const SLOWDOWN_FACTOR: f64 = 1.5;
/// Interval multiplier for cheap, valuable cadences.
const SPEEDUP_FACTOR: f64 = 0.8;
/// Interval multiplier when the value/time ratio is low.
const VALUE_SLOWDOWN_FACTOR: f64 = 1.2;
/// Relative change below which a proposal is treated as a no-op.
const MIN_RELATIVE_CHANGE: f64 = 0.1;

/// Confidence assigned to the low-success slowdown.
const LOW_SUCCESS_CONFIDENCE: f64 = 0.8;
/// Confidence assigned to the speedup.
const SPEEDUP_CONFIDENCE: f64 = 0.75;
/// Confidence assigned to the value-ratio slowdown. Deliberately below
/// the gated-apply threshold: this branch is the weakest heuristic.
const LOW_VALUE_CONFIDENCE: f64 = 0.6;

/// Observed inputs to one policy evaluation.
#[derive(Debug, Clone, Copy)]
pub struct PolicyInputs {
    /// Success rate from the running counters, in [0, 1].
    pub success_rate: f64,
    /// Average economic value over the retained history divided by the
    /// current interval in seconds.
    pub value_time_ratio: f64,
    /// Number of records in the retained history.
    pub samples: usize,
}

/// Outcome of evaluating the policy for one cadence.
#[derive(Debug, Clone)]
pub enum Proposal {
    /// Fewer samples than the policy needs.
    InsufficientData,
    /// Interval left alone.
    NoChange { reason: String },
    /// Bounded adjustment, already clamped.
    Adjust {
        target: Duration,
        justification: String,
        confidence: f64,
    },
}

/// Scale an interval by a factor, rounding to whole milliseconds.
pub fn scale(interval: Duration, factor: f64) -> Duration {
    Duration::milliseconds((interval.num_milliseconds() as f64 * factor).round() as i64)
}

/// Average economic value per second of interval.
/// Zero when the interval is zero (nothing meaningful to normalize by).
pub fn value_time_ratio(average_value: f64, interval: Duration) -> f64 {
    let secs = interval.num_milliseconds() as f64 / 1000.0;
    if secs <= 0.0 {
        0.0
    } else {
        average_value / secs
    }
}

/// Relative magnitude of a proposed change versus the current interval.
pub fn relative_change(current: Duration, proposed: Duration) -> f64 {
    let cur = current.num_milliseconds() as f64;
    if cur == 0.0 {
        if proposed == current {
            return 0.0;
        }
        return f64::INFINITY;
    }
    ((proposed.num_milliseconds() as f64 - cur) / cur).abs()
}

/// Evaluate the tuning policy for one cadence.
pub fn evaluate(config: &CadenceConfig, inputs: &PolicyInputs, min_samples: usize) -> Proposal {
    if inputs.samples < min_samples {
        return Proposal::InsufficientData;
    }

    let current = config.current_interval;
    let (target, mut justification, confidence) = if inputs.success_rate < LOW_SUCCESS_RATE {
        (
            scale(current, SLOWDOWN_FACTOR),
            format!(
                "Low success rate ({:.0}%): slowing down to give more processing time",
                inputs.success_rate * 100.0
            ),
            LOW_SUCCESS_CONFIDENCE,
        )
    } else if inputs.success_rate > HIGH_SUCCESS_RATE
        && inputs.value_time_ratio > HIGH_VALUE_TIME_RATIO
    {
        (
            scale(current, SPEEDUP_FACTOR),
            format!(
                "High success rate ({:.0}%) and value/time ratio {:.2}: speeding up",
                inputs.success_rate * 100.0,
                inputs.value_time_ratio
            ),
            SPEEDUP_CONFIDENCE,
        )
    } else if inputs.value_time_ratio < LOW_VALUE_TIME_RATIO {
        (
            scale(current, VALUE_SLOWDOWN_FACTOR),
            format!(
                "Low value/time ratio ({:.2}): slowing down, not worth the cost",
                inputs.value_time_ratio
            ),
            LOW_VALUE_CONFIDENCE,
        )
    } else {
        return Proposal::NoChange {
            reason: "interval performing well".to_string(),
        };
    };

    let clamped = config.clamp(target);
    if clamped != target {
        justification.push_str(&format!(
            " (clamped to tuning bounds at {}ms)",
            clamped.num_milliseconds()
        ));
    }

    if relative_change(current, clamped) <= MIN_RELATIVE_CHANGE {
        return Proposal::NoChange {
            reason: "proposed change within 10% of current interval".to_string(),
        };
    }

    Proposal::Adjust {
        target: clamped,
        justification,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::models::Cadence;

    fn continuous_config() -> CadenceConfig {
        CadenceConfig::for_cadence(Cadence::Continuous)
    }

    #[test]
    fn low_success_rate_slows_down() {
        let inputs = PolicyInputs {
            success_rate: 0.0,
            value_time_ratio: 50.0 / 30.0,
            samples: 5,
        };
        match evaluate(&continuous_config(), &inputs, 5) {
            Proposal::Adjust {
                target,
                justification,
                confidence,
            } => {
                assert_eq!(target, Duration::seconds(45));
                assert!(justification.contains("Low success rate"));
                assert!(confidence >= 0.7);
            }
            other => panic!("expected adjustment, got {other:?}"),
        }
    }

    #[test]
    fn cheap_and_valuable_speeds_up() {
        let inputs = PolicyInputs {
            success_rate: 1.0,
            value_time_ratio: 2.0,
            samples: 20,
        };
        match evaluate(&continuous_config(), &inputs, 5) {
            Proposal::Adjust { target, .. } => assert_eq!(target, Duration::seconds(24)),
            other => panic!("expected adjustment, got {other:?}"),
        }
    }

    #[test]
    fn low_value_ratio_beats_high_success_rate() {
        // High success rate but ratio 0.1: the speedup branch needs the
        // ratio above 0.5, so the value-ratio slowdown wins.
        let config = CadenceConfig::for_cadence(Cadence::Analysis);
        let inputs = PolicyInputs {
            success_rate: 1.0,
            value_time_ratio: 0.1,
            samples: 5,
        };
        match evaluate(&config, &inputs, 5) {
            Proposal::Adjust {
                target,
                justification,
                ..
            } => {
                assert_eq!(target, Duration::minutes(18));
                assert!(justification.contains("Low value/time ratio"));
            }
            other => panic!("expected adjustment, got {other:?}"),
        }
    }

    #[test]
    fn healthy_cadence_is_left_alone() {
        let inputs = PolicyInputs {
            success_rate: 0.85,
            value_time_ratio: 0.3,
            samples: 50,
        };
        assert!(matches!(
            evaluate(&continuous_config(), &inputs, 5),
            Proposal::NoChange { .. }
        ));
    }

    #[test]
    fn insufficient_samples_short_circuits() {
        let inputs = PolicyInputs {
            success_rate: 0.0,
            value_time_ratio: 0.0,
            samples: 4,
        };
        assert!(matches!(
            evaluate(&continuous_config(), &inputs, 5),
            Proposal::InsufficientData
        ));
    }

    #[test]
    fn repeated_slowdowns_clamp_at_double_default() {
        let mut config = continuous_config();
        config.set_current(Duration::seconds(55));
        let inputs = PolicyInputs {
            success_rate: 0.0,
            value_time_ratio: 1.0,
            samples: 10,
        };
        // 55s × 1.5 = 82.5s, clamped to the 60s bound exactly.
        match evaluate(&config, &inputs, 5) {
            Proposal::Adjust {
                target,
                justification,
                ..
            } => {
                assert_eq!(target, Duration::seconds(60));
                assert!(justification.contains("clamped"));
            }
            other => panic!("expected adjustment, got {other:?}"),
        }
    }

    #[test]
    fn change_within_ten_percent_is_a_noop() {
        let mut config = continuous_config();
        // Already at the upper bound: 58s × 1.5 clamps to 60s, a ~3% change.
        config.set_current(Duration::seconds(58));
        let inputs = PolicyInputs {
            success_rate: 0.0,
            value_time_ratio: 1.0,
            samples: 10,
        };
        assert!(matches!(
            evaluate(&config, &inputs, 5),
            Proposal::NoChange { .. }
        ));
    }

    #[test]
    fn value_time_ratio_handles_zero_interval() {
        assert_eq!(value_time_ratio(50.0, Duration::zero()), 0.0);
        assert_eq!(value_time_ratio(90.0, Duration::minutes(15)), 0.1);
    }
}
