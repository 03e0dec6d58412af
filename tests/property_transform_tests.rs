use linlog_scale::core::{CoordinateTransform, LinLogTransform};
use proptest::prelude::*;

proptest! {
    #[test]
    fn forward_is_strictly_increasing_on_positive_values(
        base in 1.5f64..20.0,
        linthresh in 0.01f64..100.0,
        linscale in 0.1f64..10.0,
        lo_factor in 0.0001f64..1.0,
        step_factor in 0.01f64..10.0,
    ) {
        let transform = LinLogTransform::new(base, linthresh, linscale).expect("valid transform");
        let lo = linthresh * lo_factor;
        let hi = lo * (1.0 + step_factor);

        prop_assert!(transform.map_value(lo) < transform.map_value(hi));
    }

    #[test]
    fn forward_is_strictly_increasing_across_the_threshold(
        base in 1.5f64..20.0,
        linthresh in 0.01f64..100.0,
        linscale in 0.1f64..10.0,
        lo_factor in 0.0001f64..1.0,
        step_factor in 0.01f64..10.0,
    ) {
        let transform = LinLogTransform::new(base, linthresh, linscale).expect("valid transform");
        let below = linthresh * lo_factor;
        let above = linthresh * (1.0 + step_factor);

        prop_assert!(transform.map_value(below) < transform.map_value(above));
    }

    #[test]
    fn forward_fixes_the_threshold_point(
        base in 1.5f64..20.0,
        linthresh in 0.01f64..100.0,
        linscale in 0.1f64..10.0,
    ) {
        let transform = LinLogTransform::new(base, linthresh, linscale).expect("valid transform");
        let mapped = transform.map_value(linthresh);

        prop_assert!((mapped - linthresh).abs() <= linthresh * 1e-12);
    }

    #[test]
    fn forward_is_continuous_at_the_threshold(
        base in 1.5f64..20.0,
        linthresh in 0.01f64..100.0,
        linscale in 0.1f64..10.0,
        eps in 1e-9f64..1e-6,
    ) {
        let transform = LinLogTransform::new(base, linthresh, linscale).expect("valid transform");
        let linscale_adj = linscale / (1.0 - base.recip());
        let mapped = transform.map_value(linthresh * (1.0 + eps));

        prop_assert!((mapped - linthresh).abs() <= linthresh * eps * linscale_adj * 1.01);
    }

    #[test]
    fn round_trip_recovers_log_region_values_under_the_natural_base(
        linthresh in 0.01f64..100.0,
        linscale in 0.1f64..10.0,
        window in 0.01f64..1.0,
        negate in proptest::bool::ANY,
    ) {
        let base = std::f64::consts::E;
        let transform = LinLogTransform::new(base, linthresh, linscale).expect("valid transform");
        let inverse = transform.inverted();

        // Sample the window where the forward image keeps the operand's sign.
        let magnitude = linthresh * (base.recip() + window * (1.0 - base.recip()));
        let value = if negate { -magnitude } else { magnitude };
        let recovered = inverse.map_value(transform.map_value(value));

        prop_assert!((recovered - value).abs() <= value.abs() * 1e-9);
    }

    #[test]
    fn round_trip_recovers_linear_region_values(
        base in 1.5f64..20.0,
        linthresh in 0.01f64..100.0,
        linscale in 0.1f64..10.0,
        linear_factor in 0.001f64..1.0e6,
    ) {
        let transform = LinLogTransform::new(base, linthresh, linscale).expect("valid transform");
        let inverse = transform.inverted();

        let value = linthresh * (1.0 + linear_factor);
        let recovered = inverse.map_value(transform.map_value(value));

        prop_assert!((recovered - value).abs() <= value * 1e-9);
    }

    #[test]
    fn double_inversion_preserves_parameters(
        base in 1.5f64..20.0,
        linthresh in 0.01f64..100.0,
        linscale in 0.1f64..10.0,
    ) {
        let transform = LinLogTransform::new(base, linthresh, linscale).expect("valid transform");
        let round_tripped = transform.inverted().inverted();

        prop_assert_eq!(round_tripped.base(), base);
        prop_assert_eq!(round_tripped.linthresh(), linthresh);
        prop_assert_eq!(round_tripped.linscale(), linscale);
    }
}
