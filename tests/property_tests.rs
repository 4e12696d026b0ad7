//! Property-based tests for the status classifier.
//!
//! These verify the ordering guarantees that the alerting layer relies on,
//! over arbitrary (including out-of-range) readings.

use microscan_health::status::{Band, Resource, ResourceKind, SeverityTier, classify};
use microscan_health::thresholds::ThresholdTable;
use microscan_health::{AcknowledgedAlerts, AlertKind, Classifier};
use proptest::prelude::*;

fn depletion_resource() -> impl Strategy<Value = Resource> { prop_oneof![Just(Resource::Dye), Just(Resource::FilterPaper)] }

fn any_resource() -> impl Strategy<Value = Resource> {
    prop_oneof![Just(Resource::WasteBin), Just(Resource::Dye), Just(Resource::FilterPaper)]
}

proptest! {
    /// Higher fill never yields a less severe tier.
    #[test]
    fn fill_tier_is_monotonic(a in -50.0f32..200.0, b in -50.0f32..200.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_tier = classify(Resource::WasteBin, low).tier;
        let high_tier = classify(Resource::WasteBin, high).tier;
        prop_assert!(low_tier <= high_tier, "{} -> {:?}, {} -> {:?}", low, low_tier, high, high_tier);
    }

    /// Lower remaining level never yields a less severe tier.
    #[test]
    fn depletion_tier_is_monotonic(
        resource in depletion_resource(),
        a in -50.0f32..200.0,
        b in -50.0f32..200.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_tier = classify(resource, low).tier;
        let high_tier = classify(resource, high).tier;
        prop_assert!(low_tier >= high_tier, "{:?}: {} -> {:?}, {} -> {:?}", resource, low, low_tier, high, high_tier);
    }

    /// Classification is a pure function of its inputs.
    #[test]
    fn classify_is_deterministic(resource in any_resource(), value in proptest::num::f32::ANY) {
        let first = classify(resource, value);
        let second = classify(resource, value);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.band.tier(), first.tier);
    }

    /// Any finite input lands in a tier without panicking, and extreme values saturate.
    #[test]
    fn out_of_range_saturates(resource in any_resource(), excess in 0.0f32..1.0e6) {
        let above = classify(resource, 100.0 + excess).tier;
        let below = classify(resource, -excess).tier;
        match resource.kind() {
            ResourceKind::Fill => {
                prop_assert_eq!(above, SeverityTier::Critical);
                prop_assert_eq!(below, SeverityTier::Nominal);
            }
            ResourceKind::Depletion => {
                prop_assert_eq!(above, SeverityTier::Nominal);
                prop_assert_eq!(below, SeverityTier::Critical);
            }
        }
    }

    /// Every valid custom fill table keeps the monotonic guarantee.
    #[test]
    fn valid_custom_fill_tables_are_monotonic(
        warning in 1.0f32..40.0,
        step_a in 1.0f32..20.0,
        step_b in 1.0f32..20.0,
        a in -10.0f32..110.0,
        b in -10.0f32..110.0,
    ) {
        let table = ThresholdTable::fill(warning, warning + step_a, warning + step_a + step_b, Some(warning / 2.0));
        let classifier = Classifier::DEFAULT
            .with_table(Resource::WasteBin, table)
            .map_err(|e| TestCaseError::fail(format!("{e}")))?;

        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            classifier.classify(Resource::WasteBin, low).tier
                <= classifier.classify(Resource::WasteBin, high).tier
        );
    }

    /// Acknowledging then releasing leaves the set as it was.
    #[test]
    fn acknowledge_release_restores_set(indices in proptest::collection::vec(0usize..6, 0..12), target in 0usize..6) {
        let mut acked = AcknowledgedAlerts::new();
        for i in &indices {
            acked.acknowledge(AlertKind::ALL[*i]);
        }
        let before = acked;
        let kind = AlertKind::ALL[target];
        let was_acked = acked.is_acknowledged(kind);

        acked.acknowledge(kind);
        if !was_acked {
            acked.release(kind);
        }
        prop_assert_eq!(acked, before);
    }
}

#[test]
fn spot_checks_match_documented_boundaries() {
    assert_eq!(classify(Resource::WasteBin, 98.0).tier, SeverityTier::Critical);
    assert_eq!(classify(Resource::WasteBin, 97.999).tier, SeverityTier::Warning);
    assert_eq!(classify(Resource::WasteBin, 60.0).tier, SeverityTier::Nominal);
    assert_eq!(classify(Resource::WasteBin, 60.0001).tier, SeverityTier::Warning);
    assert_eq!(classify(Resource::Dye, 15.0).tier, SeverityTier::Nominal);
    assert_eq!(classify(Resource::Dye, 14.999).tier, SeverityTier::Warning);
    assert_eq!(classify(Resource::Dye, 0.0).tier, SeverityTier::Critical);
    assert_eq!(classify(Resource::FilterPaper, 0.0).tier, SeverityTier::Critical);
    assert_eq!(classify(Resource::WasteBin, 1.0).band, Band::Clear);
}
