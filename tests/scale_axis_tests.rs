use approx::assert_relative_eq;
use linlog_scale::ScaleError;
use linlog_scale::core::{Axis, AxisScale, CoordinateTransform, LinLogScale, LinLogScaleConfig};

#[test]
fn default_config_matches_the_registration_contract() {
    let scale = LinLogScale::new(LinLogScaleConfig::default()).expect("valid scale");

    assert_eq!(scale.name(), "linlog");
    assert_eq!(scale.base(), 10.0);
    assert_eq!(scale.linthresh(), 2.0);
    assert_eq!(scale.linscale(), 1.0);
    assert!(scale.subs().is_none());
}

#[test]
fn accessors_pass_through_the_owned_transform() {
    let scale = LinLogScale::new(LinLogScaleConfig {
        base: 8.0,
        linthresh: 3.0,
        subs: Some(vec![2.0, 4.0]),
        linscale: 2.0,
    })
    .expect("valid scale");

    assert_eq!(scale.base(), 8.0);
    assert_eq!(scale.linthresh(), 3.0);
    assert_eq!(scale.linscale(), 2.0);
    assert_eq!(scale.subs(), Some([2.0, 4.0].as_slice()));
}

#[test]
fn invalid_subdivisions_are_rejected() {
    let result = LinLogScale::new(LinLogScaleConfig {
        subs: Some(vec![2.0, 0.0]),
        ..LinLogScaleConfig::default()
    });
    assert!(matches!(result, Err(ScaleError::InvalidParameter(_))));
}

#[test]
fn installed_major_decorations_drive_axis_ticks_and_labels() {
    let scale = LinLogScale::new(LinLogScaleConfig::default()).expect("valid scale");
    let mut axis = Axis::new(0.1, 100.0).expect("valid axis");
    scale.install_decorations(&mut axis).expect("install");

    let ticks = axis.major_tick_values();
    let labels = axis.major_tick_labels();
    assert_eq!(ticks.len(), labels.len());
    assert_eq!(ticks.len(), 12);

    assert_relative_eq!(ticks[0], 0.1, max_relative = 1e-9);
    assert_relative_eq!(ticks[1], 1.0, max_relative = 1e-9);
    assert_relative_eq!(*ticks.last().expect("non-empty"), 100.0);

    assert_eq!(labels[0], "0.1");
    assert_eq!(labels[1], "1");
    assert_eq!(labels.last().expect("non-empty"), "100");
}

#[test]
fn installed_minor_decorations_are_log_subdivisions_with_blank_labels() {
    let scale = LinLogScale::new(LinLogScaleConfig::default()).expect("valid scale");
    let mut axis = Axis::new(1.0, 100.0).expect("valid axis");
    scale.install_decorations(&mut axis).expect("install");

    let minors = axis.minor_tick_values();
    assert!(minors.iter().any(|tick| (*tick - 2.0).abs() <= 1e-12));
    assert!(minors.iter().any(|tick| (*tick - 30.0).abs() <= 1e-12));
    // Decade positions themselves belong to the major locator.
    assert!(minors.iter().all(|tick| (*tick - 10.0).abs() > 1e-12));

    let labels = axis.minor_tick_labels();
    assert_eq!(labels.len(), minors.len());
    assert!(labels.iter().all(String::is_empty));
}

#[test]
fn shared_transform_round_trips_through_a_fresh_inverse() {
    let scale = LinLogScale::new(LinLogScaleConfig::default()).expect("valid scale");

    let forward = scale.transform();
    let mapped = forward.map_value(12.0);
    assert_relative_eq!(mapped, 2.0 + (10.0 / 9.0) * 10.0, max_relative = 1e-12);

    let inverse = forward.inverse();
    assert_relative_eq!(inverse.map_value(mapped), 12.0, max_relative = 1e-9);
}

#[test]
fn axis_view_updates_change_located_ticks() {
    let scale = LinLogScale::new(LinLogScaleConfig::default()).expect("valid scale");
    let mut axis = Axis::new(0.1, 100.0).expect("valid axis");
    scale.install_decorations(&mut axis).expect("install");

    let wide = axis.major_tick_values();
    axis.set_view_interval(0.1, 10.0).expect("valid interval");
    let narrow = axis.major_tick_values();
    assert_ne!(wide, narrow);
}

#[test]
fn undecorated_axis_has_no_ticks() {
    let axis = Axis::new(0.0, 10.0).expect("valid axis");
    assert!(axis.major_tick_values().is_empty());
    assert!(axis.minor_tick_values().is_empty());
}

#[test]
fn axis_rejects_invalid_view_intervals_and_minpos() {
    assert!(matches!(
        Axis::new(f64::NAN, 1.0),
        Err(ScaleError::InvalidParameter(_))
    ));
    assert!(matches!(
        Axis::new(5.0, 1.0),
        Err(ScaleError::InvalidParameter(_))
    ));

    let mut axis = Axis::new(0.0, 10.0).expect("valid axis");
    assert!(matches!(
        axis.set_minpos(0.0),
        Err(ScaleError::InvalidParameter(_))
    ));
    assert!(matches!(
        axis.set_minpos(-1.0),
        Err(ScaleError::InvalidParameter(_))
    ));
}
