mod tests {
    use myrtio_light_patterns::curve::{Curve, Lut, bell, cubic_bezier16};

    const EASE_CURVES: [(Curve, [f32; 4]); 4] = [
        (Curve::Ease, [0.25, 0.1, 0.25, 1.0]),
        (Curve::EaseIn, [0.42, 0.0, 1.0, 1.0]),
        (Curve::EaseInOut, [0.42, 0.0, 0.58, 1.0]),
        (Curve::EaseOut, [0.0, 0.0, 0.58, 1.0]),
    ];

    fn max_error(lut: &Lut, [x0, y0, x1, y1]: [f32; 4]) -> u16 {
        (0..=u16::MAX)
            .map(|x| lut.eval(x).abs_diff(cubic_bezier16(x0, y0, x1, y1, x)))
            .max()
            .unwrap()
    }

    #[test]
    fn test_curve_float_midpoint() {
        let data = [
            (Curve::Ease, 0.802_403_4),
            (Curve::EaseIn, 0.315_356_8),
            (Curve::EaseInOut, 0.5),
            (Curve::EaseOut, 0.684_643_3),
            (Curve::default(), 0.684_643_3),
            (Curve::Direct, 0.5),
        ];
        for (curve, expected) in data {
            let got = curve.scale_f32(0.5);
            assert!((got - expected).abs() < 1e-6, "{curve:?}: {got}");
        }
    }

    #[test]
    fn test_curve_float_bounds() {
        for curve in Curve::ALL {
            assert_eq!(curve.scale_f32(0.0), 0.0, "{curve:?}");
            assert_eq!(curve.scale_f32(1.0), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn test_curve_bounds() {
        for curve in Curve::ALL {
            assert_eq!(curve.scale(0), 0, "{curve:?}");
            assert_eq!(curve.scale(u16::MAX), u16::MAX, "{curve:?}");
            assert_eq!(curve.scale8(u16::MAX), 255, "{curve:?}");
        }
    }

    #[test]
    fn test_curve_steps() {
        assert_eq!(Curve::StepStart.scale(255), 0);
        assert_eq!(Curve::StepStart.scale(256), u16::MAX);
        assert_eq!(Curve::StepMiddle.scale(32767), 0);
        assert_eq!(Curve::StepMiddle.scale(32768), u16::MAX);
        assert_eq!(Curve::StepEnd.scale(60000), 0);
        assert_eq!(Curve::Direct.scale(1234), 1234);
    }

    #[test]
    fn test_curve_tables_follow_reference() {
        for (curve, points) in EASE_CURVES {
            let lut = Lut::make(points[0], points[1], points[2], points[3], 18);
            for x in (0..=u16::MAX).step_by(257) {
                assert_eq!(curve.scale(x), lut.eval(x), "{curve:?} at {x}");
            }
        }
    }

    #[test]
    fn test_curve_names() {
        for curve in Curve::ALL {
            assert_eq!(Curve::parse_from_str(curve.as_str()), Some(curve));
        }
        assert_eq!(Curve::parse_from_str(""), Some(Curve::EaseOut));
        assert_eq!(Curve::parse_from_str("bounce"), None);
        assert_eq!(Curve::StepMiddle.as_str(), "steps(1,middle)");
    }

    #[test]
    fn test_lut_make_example() {
        let lut = Lut::make(0.0, 0.0, 0.58, 1.0, 6);
        assert_eq!(
            lut.to_string(),
            "LUT{(0, 0), (13107, 20209), (26214, 37413), (39321, 51454), (52428, 61453), (65535, 65535)}"
        );
        assert_eq!(lut.samples().len(), 7);
        assert_eq!(lut.eval(1000), 1541);
    }

    #[test]
    fn test_lut_make_fast_example() {
        let lut = Lut::make_fast(0.0, 0.0, 0.58, 1.0, 6);
        assert_eq!(
            lut.to_string(),
            "LUT{(0, 0), (13107, 20191), (26214, 37402), (39321, 51305), (52428, 61207), (65535, 65535)}"
        );
        assert_eq!(lut.eval(1000), 1540);
    }

    #[test]
    fn test_lut_default_steps() {
        assert_eq!(Lut::make(0.42, 0.0, 0.58, 1.0, 0).steps(), 32);
        assert_eq!(Lut::make_fast(0.42, 0.0, 0.58, 1.0, 2).steps(), 32);
    }

    #[test]
    fn test_lut_error_bound() {
        for (curve, points) in EASE_CURVES {
            let [x0, y0, x1, y1] = points;
            for lut in [Lut::make(x0, y0, x1, y1, 0), Lut::make_fast(x0, y0, x1, y1, 0)] {
                assert_eq!(lut.eval(0), 0, "{curve:?}");
                assert_eq!(lut.eval(u16::MAX), u16::MAX, "{curve:?}");
                let err = max_error(&lut, points);
                assert!(err <= 110, "{curve:?}: {err}");
            }
        }
    }

    #[test]
    fn test_lut_samples_are_exact() {
        let lut = Lut::make(0.42, 0.0, 0.58, 1.0, 0);
        let steps = lut.samples().len() - 2;
        for (i, y) in lut.samples().iter().take(steps + 1).enumerate() {
            let x = (i * 65535 / steps) as u16;
            assert_eq!(lut.eval(x), *y, "sample {i}");
        }
    }

    #[test]
    fn test_bell() {
        assert_eq!(bell(0), 0);
        assert_eq!(bell(u16::MAX), 0);
        assert_eq!(bell(32767), u16::MAX);
        assert!(bell(16384) < bell(30000));
        assert!(bell(50000) < bell(35000));
        assert!(bell(1000).abs_diff(bell(u16::MAX - 1000)) <= 1);
    }
}
