// src/utils/endian.rs

/// Reverse every `size`-byte lane of `bytes` in place.
///
/// Callers guarantee `bytes.len()` is a multiple of `size`; a trailing
/// partial lane would be left as is.
pub fn reverse_lanes(bytes: &mut [u8], size: usize) {
    if size <= 1 {
        return;
    }

    for lane in bytes.chunks_exact_mut(size) {
        lane.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_two_byte_lanes() {
        let mut bytes = [0x12, 0x34, 0x56, 0x78];
        reverse_lanes(&mut bytes, 2);
        assert_eq!(bytes, [0x34, 0x12, 0x78, 0x56]);
    }

    #[test]
    fn test_reverse_four_byte_lanes() {
        let mut bytes = [0x12, 0x34, 0x56, 0x78, 0x01, 0x02, 0x03, 0x04];
        reverse_lanes(&mut bytes, 4);
        assert_eq!(bytes, [0x78, 0x56, 0x34, 0x12, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_single_byte_lanes_untouched() {
        let mut bytes = [1, 2, 3];
        reverse_lanes(&mut bytes, 1);
        assert_eq!(bytes, [1, 2, 3]);
    }
}
