mod tests {
    use myrtio_light_patterns::color::{BLACK, Color, Frame, WHITE, mix, rgb_from_u32};
    use myrtio_light_patterns::mixer::{
        Add, Chronometer, Crop, Dim, Gradient, Loop, Mixer, PingPong, Rotate, Scale, Split,
        Subset, Transition,
    };
    use myrtio_light_patterns::{Animation, Curve, Interpolation, Pattern, Value};

    const A: Color = Color { r: 0x10, g: 0x10, b: 0x10 };
    const B: Color = Color { r: 0x20, g: 0x20, b: 0x20 };
    const C: Color = Color { r: 0x30, g: 0x30, b: 0x30 };
    const D: Color = Color { r: 0x40, g: 0x40, b: 0x40 };
    const E: Color = Color { r: 0x50, g: 0x50, b: 0x50 };
    const F: Color = Color { r: 0x60, g: 0x60, b: 0x60 };

    fn frame(colors: &[Color]) -> Frame {
        colors.iter().copied().collect()
    }

    /// Render every `(time, expected)` pair in order, sharing one scratch
    fn assert_frames(pattern: impl Into<Pattern>, expectations: &[(u32, &[Color])]) {
        let animation = Animation::new(pattern.into());
        let mut scratch = animation.scratch();
        for (time_ms, expected) in expectations {
            let mut pixels = vec![BLACK; expected.len()];
            animation.render(&mut scratch, &mut pixels, *time_ms);
            assert_eq!(&pixels[..], *expected, "at {time_ms}ms");
        }
    }

    fn render_at(pattern: impl Into<Pattern>, len: usize, time_ms: u32) -> Vec<Color> {
        let animation = Animation::new(pattern.into());
        let mut scratch = animation.scratch();
        let mut pixels = vec![BLACK; len];
        animation.render(&mut scratch, &mut pixels, time_ms);
        pixels
    }

    #[test]
    fn test_gradient() {
        let mid = rgb_from_u32(0x18_18_18);
        let gradient = || Gradient::new(A, B, Curve::Direct);
        assert_frames(gradient(), &[(0, &[mid])]);
        assert_frames(gradient(), &[(0, &[A, B])]);
        assert_frames(gradient(), &[(0, &[A, mid, B])]);
        assert_frames(gradient(), &[(0, &[])]);
    }

    #[test]
    fn test_split() {
        assert_frames(Split::new(A, B, Value::Const(2)), &[(0, &[A, A, B, B])]);
        assert_frames(Split::new(A, B, Value::Percent(16384)), &[(0, &[A, B, B, B])]);
        assert_frames(Split::new(A, B, Value::Const(10)), &[(0, &[A, A])]);
        assert_frames(Split::new(A, B, Value::Const(-1)), &[(0, &[B, B])]);
    }

    #[test]
    fn test_transition() {
        let blend = mix(B, A, 255 - 127);
        assert_frames(
            Transition::new(A, B, 100, 100, Curve::Direct),
            &[
                (0, &[A, A]),
                (100, &[A, A]),
                (150, &[blend, blend]),
                (200, &[B, B]),
                (5000, &[B, B]),
            ],
        );
    }

    #[test]
    fn test_transition_releases_scratch() {
        let animation = Animation::new(Transition::new(A, B, 0, 100, Curve::Direct).into());
        let mut scratch = animation.scratch();
        let mut pixels = [BLACK; 4];
        animation.render(&mut scratch, &mut pixels, 50);
        assert_eq!(scratch.footprint(), 4 * size_of::<Color>());
        animation.render(&mut scratch, &mut pixels, 150);
        assert_eq!(scratch.footprint(), 0);
        assert_eq!(pixels, [B; 4]);
    }

    #[test]
    fn test_transition_after_sees_relative_time() {
        let after = Rotate::new(frame(&[A, B, C]), 360_000);
        assert_frames(
            Transition::new(WHITE, after, 1000, 0, Curve::Direct),
            &[(1000, &[WHITE; 3]), (1010, &[C, A, B])],
        );
    }

    #[test]
    fn test_loop() {
        let patterns = vec![A.into(), B.into(), C.into()];
        let ab = mix(A, B, 127);
        let ca = mix(C, A, 127);
        assert_frames(
            Loop::new(patterns, 100, 100, Curve::Direct),
            &[
                (50, &[A]),
                (100, &[A]),
                (150, &[ab]),
                (250, &[B]),
                (550, &[ca]),
                (650, &[A]),
            ],
        );
    }

    #[test]
    fn test_loop_degenerate() {
        assert_frames(Loop::new(Vec::new(), 100, 100, Curve::Direct), &[(0, &[BLACK])]);
        assert_frames(
            Loop::new(vec![A.into(), B.into()], 0, 0, Curve::Direct),
            &[(0, &[A]), (1000, &[A])],
        );
    }

    #[test]
    fn test_rotate() {
        let child = frame(&[A, B, C]);
        assert_frames(
            Rotate::new(child.clone(), 360_000),
            &[
                (0, &[A, B, C]),
                (5, &[A, B, C]),
                (10, &[C, A, B]),
                (20, &[B, C, A]),
                (30, &[A, B, C]),
                (40, &[C, A, B]),
                (50, &[B, C, A]),
                (60, &[A, B, C]),
            ],
        );
        assert_frames(
            Rotate::new(child, -360_000),
            &[
                (0, &[A, B, C]),
                (5, &[A, B, C]),
                (10, &[B, C, A]),
                (20, &[C, A, B]),
                (30, &[A, B, C]),
                (40, &[B, C, A]),
                (50, &[C, A, B]),
                (60, &[A, B, C]),
            ],
        );
    }

    #[test]
    fn test_chronometer() {
        let r = rgb_from_u32(0xff_00_00);
        let g = rgb_from_u32(0x00_ff_00);
        let b = rgb_from_u32(0x00_00_ff);
        let o = BLACK;
        assert_frames(
            Chronometer::new(frame(&[o, r, g, b])),
            &[
                (0, &[r, o, o, o, o, o]),
                (1000 * 10, &[g, r, o, o, o, o]),
                (1000 * 20, &[g, o, r, o, o, o]),
                (1000 * 60, &[r, o, o, o, o, o]),
                (1000 * 600, &[r, g, o, o, o, o]),
                (1000 * 3600, &[r, b, o, o, o, o]),
                (1000 * (3600 + 20 * 60 + 30), &[o, b, g, r, o, o]),
            ],
        );
    }

    #[test]
    fn test_ping_pong() {
        let o = BLACK;
        assert_frames(
            PingPong::new(frame(&[A, B]), 360_000),
            &[
                (0, &[A, B, o]),
                (5, &[A, B, o]),
                (10, &[B, A, o]),
                (20, &[o, B, A]),
                (30, &[o, A, B]),
                (40, &[A, B, o]),
                (50, &[B, A, o]),
                (60, &[o, B, A]),
            ],
        );
        assert_frames(
            PingPong::new(frame(&[A, B, C, D, E, F]), 3600),
            &[
                (0, &[A, B, C, D]),
                (500, &[A, B, C, D]),
                (1000, &[B, A, D, E]),
                (2000, &[C, B, A, F]),
                (3000, &[D, C, B, A]),
                (4000, &[E, D, A, B]),
                (5000, &[F, A, B, C]),
                (6000, &[A, B, C, D]),
            ],
        );
    }

    #[test]
    fn test_ping_pong_is_cyclic() {
        // 5 pixels bounce over 8 moves, 10ms each.
        let ping_pong = PingPong::new(frame(&[A, B, C]), 360_000);
        for t in (0..200).step_by(7) {
            assert_eq!(
                render_at(ping_pong.clone(), 5, t),
                render_at(ping_pong.clone(), 5, t + 80),
                "at {t}ms"
            );
        }
    }

    #[test]
    fn test_ping_pong_short_strip() {
        let animation = Animation::new(PingPong::new(frame(&[A, B]), 360_000).into());
        let mut scratch = animation.scratch();
        let mut pixels = [C];
        animation.render(&mut scratch, &mut pixels, 10);
        assert_eq!(pixels, [C]);
        let mut empty: [Color; 0] = [];
        animation.render(&mut scratch, &mut empty, 10);
        assert_eq!(scratch.footprint(), 0);
    }

    #[test]
    fn test_crop() {
        assert_frames(
            Crop::new(frame(&[A, B, C]), Value::Const(1), Value::Const(2)),
            &[(0, &[B, C])],
        );
    }

    #[test]
    fn test_subset() {
        assert_frames(
            Subset::new(frame(&[A, B, C]), Value::Const(1), Value::Const(2)),
            &[(0, &[BLACK, A, B, BLACK])],
        );
        assert_frames(
            Subset::new(A, Value::Const(2), Value::Const(10)),
            &[(0, &[BLACK, BLACK, A])],
        );
    }

    #[test]
    fn test_dim() {
        assert_frames(
            Dim::new(F, Value::Const(127)),
            &[(0, &[rgb_from_u32(0x2f_2f_2f)])],
        );
        assert_frames(Dim::new(WHITE, Value::Const(-4)), &[(0, &[BLACK])]);
    }

    #[test]
    fn test_add() {
        let patterns = vec![F.into(), rgb_from_u32(0x10_20_30).into()];
        assert_frames(Add::new(patterns), &[(0, &[rgb_from_u32(0x70_80_90)])]);
    }

    #[test]
    fn test_mixer() {
        let patterns = vec![
            Color { r: 200, g: 100, b: 0 }.into(),
            Color { r: 100, g: 100, b: 100 }.into(),
        ];
        assert_frames(
            Mixer::new(patterns, vec![255, 128]),
            &[(0, &[Color { r: 250, g: 150, b: 50 }])],
        );
    }

    #[test]
    fn test_mixer_mismatch_renders_nothing() {
        let mixer = Mixer::new(vec![A.into(), B.into()], vec![255]);
        assert!(!mixer.is_consistent());
        let animation = Animation::new(mixer.into());
        let mut scratch = animation.scratch();
        let mut pixels = [WHITE; 3];
        animation.render(&mut scratch, &mut pixels, 0);
        assert_eq!(pixels, [WHITE; 3]);
    }

    #[test]
    fn test_scale() {
        let child = frame(&[F, rgb_from_u32(0x10_20_30)]);
        assert_frames(
            Scale::new(child, Interpolation::NearestSkip, Value::Const(0), Value::Const(667)),
            &[(0, &[F, BLACK, rgb_from_u32(0x10_20_30)])],
        );
        assert_frames(
            Scale::new(frame(&[A, B]), Interpolation::Nearest, Value::Const(2), Value::Const(0)),
            &[(0, &[A, A, B, B])],
        );
        assert_frames(
            Scale::new(frame(&[A, B]), Interpolation::Linear, Value::Const(2), Value::Const(0)),
            &[(0, &[rgb_from_u32(0x18_18_18), B, B]), (0, &[rgb_from_u32(0x18_18_18), B])],
        );
        assert_frames(
            Scale::new(A, Interpolation::Nearest, Value::Const(0), Value::Const(0)),
            &[(0, &[BLACK, BLACK])],
        );
    }

    fn gray(levels: &[u8]) -> Vec<Color> {
        levels.iter().map(|&l| Color { r: l, g: l, b: l }).collect()
    }

    #[test]
    fn test_linear_interpolation() {
        let mut out = vec![BLACK; 5];
        Interpolation::Linear.scale(&gray(&[0x10, 0x80, 0xf0]), &mut out);
        assert_eq!(out, gray(&[72, 72, 184, 240, 240]));

        let mut out = vec![BLACK; 2];
        Interpolation::Linear.scale(&gray(&[0x10, 0x20, 0x30, 0x40]), &mut out);
        assert_eq!(out, gray(&[0x28, 0x40]));

        let mut out = vec![BLACK; 3];
        Interpolation::Linear.scale(&gray(&[0x60]), &mut out);
        assert_eq!(out, gray(&[0x60; 3]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let tree: Pattern = Loop::new(
            vec![
                Rotate::new(frame(&[A, B, C, D]), 720_000).into(),
                Gradient::new(E, PingPong::new(frame(&[F, A]), 500_000), Curve::Ease).into(),
                Scale::new(
                    frame(&[A, B, C]),
                    Interpolation::Linear,
                    Value::Const(0),
                    Value::Const(500),
                )
                .into(),
            ],
            70,
            30,
            Curve::EaseInOut,
        )
        .into();
        let animation = Animation::new(tree);
        let mut first = animation.scratch();
        let mut second = animation.scratch();
        for t in (0..1000).step_by(13) {
            let mut a = [BLACK; 9];
            let mut b = [BLACK; 9];
            animation.render(&mut first, &mut a, t);
            animation.render(&mut first, &mut b, t);
            assert_eq!(a, b, "same scratch at {t}ms");
            animation.render(&mut second, &mut b, t);
            assert_eq!(a, b, "fresh scratch at {t}ms");
        }
    }

    #[test]
    fn test_render_from_threads() {
        let animation = Animation::new(
            Add::new(vec![
                Rotate::new(frame(&[A, B, C]), 360_000).into(),
                Dim::new(frame(&[D, E]), Value::OpMod(256)).into(),
            ])
            .into(),
        );
        let reference: Vec<Vec<Color>> = (0..50)
            .map(|t| {
                let mut scratch = animation.scratch();
                let mut pixels = vec![BLACK; 6];
                animation.render(&mut scratch, &mut pixels, t * 10);
                pixels
            })
            .collect();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let mut scratch = animation.scratch();
                    for (t, expected) in reference.iter().enumerate() {
                        let mut pixels = vec![BLACK; 6];
                        animation.render(&mut scratch, &mut pixels, t as u32 * 10);
                        assert_eq!(&pixels, expected);
                    }
                });
            }
        });
    }
}
