use crate::error::ConfigError;
use crate::traffic::{Area, AreaId, ClassId, DistributionKind, TrafficProfile};

#[test]
fn configure_traffic_builds_one_sampler_pair_per_class() {
    let area = Area::configure_traffic(
        AreaId(3),
        &TrafficProfile::exponential(&[1.0, 2.0], &[0.5, 0.25], &[1.0, 4.0]),
        Some(9),
    )
    .expect("area");
    assert_eq!(area.id(), AreaId(3));
    assert_eq!(area.num_classes(), 2);
    assert_eq!(area.bitrate(ClassId(1)), 4.0);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = Area::configure_traffic(
        AreaId(0),
        &TrafficProfile::exponential(&[1.0, 2.0], &[0.5], &[1.0, 1.0]),
        None,
    )
    .expect_err("must fail");
    match err {
        ConfigError::LengthMismatch {
            field,
            expected,
            actual,
        } => {
            assert_eq!(field, "service_rates");
            assert_eq!((expected, actual), (2, 1));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_positive_rate_names_the_offending_class() {
    let err = Area::configure_traffic(
        AreaId(0),
        &TrafficProfile::exponential(&[1.0, 0.0], &[1.0, 1.0], &[1.0, 1.0]),
        None,
    )
    .expect_err("must fail");
    assert!(
        matches!(err, ConfigError::NonPositive { ref field, .. } if field == "arrival_rates[1]"),
        "{err}"
    );
}

#[test]
fn seeded_areas_are_reproducible() {
    let profile = TrafficProfile::exponential(&[1.0], &[0.5], &[1.0]);
    let mut a = Area::configure_traffic(AreaId(0), &profile, Some(11)).expect("area");
    let mut b = Area::configure_traffic(AreaId(0), &profile, Some(11)).expect("area");
    for _ in 0..10 {
        assert_eq!(
            a.generate_inter_arrival(ClassId(0)),
            b.generate_inter_arrival(ClassId(0))
        );
        assert_eq!(a.generate_duration(ClassId(0)), b.generate_duration(ClassId(0)));
    }
}

#[test]
fn constant_profile_yields_mean_values() {
    let profile = TrafficProfile {
        arrival_kind: DistributionKind::Constant,
        service_kind: DistributionKind::Constant,
        ..TrafficProfile::exponential(&[2.0], &[0.25], &[1.0])
    };
    let mut area = Area::configure_traffic(AreaId(0), &profile, None).expect("area");
    assert_eq!(area.generate_inter_arrival(ClassId(0)), 0.5);
    assert_eq!(area.generate_duration(ClassId(0)), 4.0);
}

#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_class_panics() {
    let mut area = Area::configure_traffic(
        AreaId(0),
        &TrafficProfile::exponential(&[1.0], &[1.0], &[1.0]),
        None,
    )
    .expect("area");
    area.generate_inter_arrival(ClassId(1));
}
