mod tests {
    use myrtio_light_patterns::color::{BLACK, Color, Frame, mix};
    use myrtio_light_patterns::mixer::Rotate;
    use myrtio_light_patterns::painter::DEFAULT_FPS;
    use myrtio_light_patterns::{
        Animation, CommandQueue, Curve, DecodeError, Duration, Instant, OutputDriver, Painter,
        PainterCommand, PainterConfig, SubmitError,
    };

    const RED: Color = Color { r: 255, g: 0, b: 0 };
    const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<Color>>,
    }

    impl OutputDriver for Recorder {
        fn write(&mut self, colors: &[Color]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn config(fade_ms: u32) -> PainterConfig {
        PainterConfig {
            led_count: 3,
            fade_ms,
            fade_curve: Curve::Direct,
            ..PainterConfig::default()
        }
    }

    fn solid(color: Color) -> Animation {
        Animation::new(color.into())
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_config() {
        let config = PainterConfig::default();
        assert_eq!(config.fps, DEFAULT_FPS);
        assert_eq!(config.fade_ms, 500);
        assert_eq!(config.fade_curve, Curve::EaseOut);

        let parsed: PainterConfig =
            serde_json::from_str(r#"{"led_count":30,"fade_curve":"direct"}"#).unwrap();
        assert_eq!(parsed.led_count, 30);
        assert_eq!(parsed.fps, 90);
        assert_eq!(parsed.fade_curve, Curve::Direct);
        assert!(serde_json::from_str::<PainterConfig>(r#"{"fade_curve":"wobbly"}"#).is_err());
    }

    #[test]
    fn test_starts_dark() {
        let queue = CommandQueue::<4>::new();
        let mut painter = Painter::new(Recorder::default(), queue.receiver(), config(0));
        painter.tick(at(0));
        assert_eq!(painter.output().frames, [vec![BLACK; 3]]);
    }

    #[test]
    fn test_set_pattern() {
        let queue = CommandQueue::<4>::new();
        let mut painter = Painter::new(Recorder::default(), queue.receiver(), config(0));
        queue.sender().set_pattern(solid(RED)).unwrap();
        painter.tick(at(0));
        assert_eq!(painter.frame(), [RED; 3]);
        assert!(!painter.is_fading());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_only_latest_command_applies() {
        let queue = CommandQueue::<4>::new();
        let mut painter = Painter::new(Recorder::default(), queue.receiver(), config(0));
        let sender = queue.sender();
        sender.set_pattern(solid(BLUE)).unwrap();
        sender.off().unwrap();
        sender.set_pattern(solid(RED)).unwrap();
        assert_eq!(queue.len(), 3);
        painter.tick(at(0));
        assert_eq!(painter.frame(), [RED; 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fade_between_patterns() {
        let queue = CommandQueue::<4>::new();
        let mut painter = Painter::new(Recorder::default(), queue.receiver(), config(100));
        queue.sender().set_pattern(solid(RED)).unwrap();

        painter.tick(at(0));
        assert_eq!(painter.frame(), [BLACK; 3]);
        assert!(painter.is_fading());

        painter.tick(at(50));
        let half = mix(RED, BLACK, 255 - 127);
        assert_eq!(painter.frame(), [half; 3]);

        painter.tick(at(100));
        assert_eq!(painter.frame(), [RED; 3]);
        assert!(!painter.is_fading());
    }

    #[test]
    fn test_off_fades_to_black() {
        let queue = CommandQueue::<4>::new();
        let mut painter = Painter::new(Recorder::default(), queue.receiver(), config(100));
        queue.sender().set_pattern(solid(BLUE)).unwrap();
        painter.tick(at(0));
        painter.tick(at(200));
        assert_eq!(painter.frame(), [BLUE; 3]);

        queue.sender().off().unwrap();
        painter.tick(at(300));
        assert_eq!(painter.frame(), [BLUE; 3]);
        painter.tick(at(400));
        assert_eq!(painter.frame(), [BLACK; 3]);
        assert!(painter.animation().pattern().is_empty());
    }

    #[test]
    fn test_time_starts_at_activation() {
        let queue = CommandQueue::<4>::new();
        let mut painter = Painter::new(Recorder::default(), queue.receiver(), config(0));
        let (a, b, c) = (RED, BLUE, Color { r: 0, g: 255, b: 0 });
        let rotate = Rotate::new(Frame::from([a, b, c]), 360_000);
        queue.sender().set_pattern(Animation::new(rotate.into())).unwrap();
        painter.tick(at(1000));
        assert_eq!(painter.frame(), [a, b, c]);
        painter.tick(at(1010));
        assert_eq!(painter.frame(), [c, a, b]);
    }

    #[test]
    fn test_submit_json() {
        let queue = CommandQueue::<4>::new();
        let mut painter = Painter::new(Recorder::default(), queue.receiver(), config(0));
        assert!(matches!(
            queue.submit_json(br#"{"_type":"Nope"}"#),
            Err(SubmitError::Decode(DecodeError::UnknownType { .. }))
        ));
        assert!(queue.is_empty());

        queue.sender().submit_json(br##""#0000ff""##).unwrap();
        painter.tick(at(0));
        assert_eq!(painter.frame(), [BLUE; 3]);
    }

    #[test]
    fn test_queue_full() {
        let queue = CommandQueue::<2>::new();
        queue.submit(PainterCommand::Off).unwrap();
        queue.submit(PainterCommand::Off).unwrap();
        assert!(matches!(
            queue.submit(PainterCommand::SetPattern(solid(RED))),
            Err(SubmitError::Full(PainterCommand::SetPattern(_)))
        ));
        assert!(matches!(queue.take_latest(), Some(PainterCommand::Off)));
        assert!(queue.take_latest().is_none());
    }

    #[test]
    fn test_frame_pacing() {
        let queue = CommandQueue::<4>::new();
        let mut painter = Painter::new(Recorder::default(), queue.receiver(), config(0));
        let frame = config(0).frame_duration();

        let result = painter.tick(at(0));
        assert_eq!(result.next_deadline, at(0) + frame);
        assert_eq!(result.sleep_duration, frame);

        // Running late within the drift window keeps the schedule.
        let late = result.next_deadline + Duration::from_millis(5);
        let result = painter.tick(late);
        assert_eq!(result.next_deadline, at(0) + frame * 2);
        assert_eq!(result.sleep_duration, at(0) + frame * 2 - late);

        // Far behind, the schedule restarts from now.
        let result = painter.tick(at(1000));
        assert_eq!(result.next_deadline, at(1000) + frame);
        assert_eq!(result.sleep_duration, frame);
        assert_eq!(painter.output().frames.len(), 3);
    }
}
