mod tests {
    use myrtio_light_patterns::math8::{clamp_len, dim8, hash, mix8, progress16, qadd8};

    #[test]
    fn test_dim8() {
        assert_eq!(dim8(0x60, 127), 0x2f);
        assert_eq!(dim8(255, 0), 0);
        assert_eq!(dim8(0, 255), 0);
    }

    #[test]
    fn test_mix8() {
        assert_eq!(mix8(0x10, 0x20, 0), 0x10);
        assert_eq!(mix8(0x10, 0x20, 255), 0x20);
        assert_eq!(mix8(0x10, 0x20, 127), 0x18);
        // Never overflows.
        assert_eq!(mix8(255, 255, 128), 255);
    }

    #[test]
    fn test_qadd8() {
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(1, 2), 3);
    }

    #[test]
    fn test_progress16() {
        assert_eq!(progress16(0, 10), 0);
        assert_eq!(progress16(5, 10), 32767);
        assert_eq!(progress16(10, 10), u16::MAX);
        assert_eq!(progress16(11, 10), u16::MAX);
        assert_eq!(progress16(0, 0), u16::MAX);
        assert_eq!(progress16(u32::MAX - 1, u32::MAX), 65534);
    }

    #[test]
    fn test_clamp_len() {
        assert_eq!(clamp_len(-5, 10), 0);
        assert_eq!(clamp_len(5, 10), 5);
        assert_eq!(clamp_len(50, 10), 10);
    }

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(hash(1), hash(1));
        assert_ne!(hash(1), hash(2));
    }
}
