//! Integration tests for threshold gating.
//!
//! Every threshold is checked against every message severity, and a gated
//! call must leave both the output and the color state untouched.

use logging::{CallSite, ColorAttribute, Emission, LogConfig, Logger, Severity};
use proptest::prelude::*;

fn site() -> CallSite {
    CallSite::from_parts("src/net/socket.rs", "connect", 12)
}

// ============================================================================
// Exhaustive Threshold Grid
// ============================================================================

/// Verifies the emit decision for all threshold/severity pairs.
#[test]
fn threshold_grid_matches_rank_order() {
    for threshold in Severity::ALL {
        for severity in Severity::MESSAGES {
            let mut logger = Logger::plain(Vec::new(), LogConfig::plain(threshold));
            let emission = logger.log(severity, &site(), "probe", &[]).expect("no error");
            let expected = severity.rank() <= threshold.rank();

            assert_eq!(
                emission.is_written(),
                expected,
                "threshold {threshold} severity {severity}"
            );
            assert_eq!(logger.into_inner().is_empty(), !expected);
        }
    }
}

/// Verifies that messages logged at the Off and All thresholds are dropped
/// under every threshold.
#[test]
fn threshold_severities_are_never_written() {
    for threshold in Severity::ALL {
        for severity in [Severity::Off, Severity::All] {
            let mut logger = Logger::colored(Vec::new(), LogConfig::plain(threshold));
            let emission = logger.log(severity, &site(), "leak", &[]).expect("gated");

            assert_eq!(emission, Emission::Gated, "threshold {threshold} severity {severity}");
            assert_eq!(logger.terminal().current(), ColorAttribute::DEFAULT);
            assert!(logger.into_inner().is_empty());
        }
    }
}

/// Verifies that the Off threshold suppresses even fatal messages.
#[test]
fn off_suppresses_fatal() {
    let mut logger = Logger::colored(Vec::new(), LogConfig::plain(Severity::Off));
    let emission = logger.fatal(&site(), "unreachable", &[]).expect("gated");
    assert_eq!(emission, Emission::Gated);
    assert!(logger.into_inner().is_empty());
}

/// Verifies that the All threshold admits trace messages.
#[test]
fn all_admits_trace() {
    let mut logger = Logger::plain(Vec::new(), LogConfig::plain(Severity::All));
    logger.trace(&site(), "polling", &[]).expect("written");
    assert_eq!(logger.into_inner(), b"[TRACE] polling\n");
}

// ============================================================================
// Property Tests
// ============================================================================

fn any_threshold() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn any_message() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::MESSAGES.to_vec())
}

proptest! {
    /// A gated call never writes bytes nor changes the tracked color.
    #[test]
    fn gated_calls_have_no_side_effects(threshold in any_threshold(), severity in any_message()) {
        prop_assume!(!threshold.admits(severity));
        let mut logger = Logger::colored(Vec::new(), LogConfig::new().with_level(threshold));
        let emission = logger.log(severity, &site(), "%s", &[&"x"]).expect("gated");
        prop_assert_eq!(emission, Emission::Gated);
        prop_assert_eq!(logger.terminal().current(), ColorAttribute::DEFAULT);
        prop_assert!(logger.into_inner().is_empty());
    }

    /// Raising the threshold never hides a message that a lower one showed.
    #[test]
    fn gate_is_monotonic(low in any_threshold(), high in any_threshold(), severity in any_message()) {
        prop_assume!(low.rank() <= high.rank());
        if low.admits(severity) {
            prop_assert!(high.admits(severity));
        }
    }

    /// Severity names parse back to the same level regardless of case.
    #[test]
    fn names_parse_case_insensitively(severity in any_threshold(), upper in any::<bool>()) {
        let name = if upper {
            severity.as_str().to_owned()
        } else {
            severity.as_str().to_ascii_lowercase()
        };
        prop_assert_eq!(name.parse::<Severity>().expect("known name"), severity);
    }
}
