mod common;

mod tests {
    use myrtio_neopixel::color::{ELECTRIC_BLUE, RAINBOW, Rgb};
    use myrtio_neopixel::{FrameBuffer, PatternId, PatternSlot, StripConfig};

    use crate::common::{ScriptedRandom, decode_pixel, mock_strip};

    const ALL: [PatternId; 5] = [
        PatternId::Solid,
        PatternId::Strobe,
        PatternId::Fade,
        PatternId::Twinkle,
        PatternId::Lightning,
    ];

    #[test]
    fn test_pattern_id_from_raw() {
        assert_eq!(PatternId::from_raw(0), Some(PatternId::Solid));
        assert_eq!(PatternId::from_raw(4), Some(PatternId::Lightning));
        assert_eq!(PatternId::from_raw(5), None);
        for id in ALL {
            assert_eq!(PatternId::from_raw(id as u8), Some(id));
        }
    }

    #[test]
    fn test_pattern_id_names() {
        assert_eq!(PatternId::Twinkle.as_str(), "twinkle");
        assert_eq!(PatternId::parse_from_str("lightning"), Some(PatternId::Lightning));
        assert_eq!(PatternId::parse_from_str("rainbow"), None);
        for id in ALL {
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_slot_reports_its_id() {
        for id in ALL {
            assert_eq!(id.to_slot(ELECTRIC_BLUE).id(), id);
        }
    }

    #[test]
    fn test_twinkle_slot_uses_rainbow() {
        let PatternSlot::Twinkle(twinkle) = PatternId::Twinkle.to_slot(ELECTRIC_BLUE) else {
            panic!("expected twinkle slot");
        };
        assert_eq!(twinkle.colors(), &RAINBOW);
        assert_eq!(twinkle.percent_on(), 100);
    }

    #[test]
    fn test_solid_slot_run() {
        let (mut strip, log) = mock_strip(StripConfig::default());
        let mut frame = FrameBuffer::<12>::new();
        let mut rng = ScriptedRandom::default();

        PatternId::Solid
            .to_slot(ELECTRIC_BLUE)
            .run(&mut strip, &mut frame, &mut rng);

        let frames = log.frames();
        assert_eq!(frames.len(), 1);
        // luminance 2.0: channel + 28
        assert!((0..12).all(|index| decode_pixel(&frames[0], index) == Rgb::new(0, 58, 53)));
    }

    #[test]
    fn test_strobe_slot_run() {
        let (mut strip, log) = mock_strip(StripConfig::default());
        let mut frame = FrameBuffer::<2>::new();
        let mut rng = ScriptedRandom::default();

        PatternId::Strobe
            .to_slot(ELECTRIC_BLUE)
            .run(&mut strip, &mut frame, &mut rng);

        assert_eq!(log.frames().len(), 2);
        assert_eq!(log.pauses(), vec![50, 50]);
    }
}
