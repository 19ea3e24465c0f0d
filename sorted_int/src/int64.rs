use byte_stream::UnderflowError;

use crate::indicator::{inline_byte, Indicator, NEGATIVE_BASE, POSITIVE_BASE};

/// The maximum number of bytes needed to store an `i64`: one indicator byte and eight magnitude bytes.
pub const MAX_LONG_LENGTH: usize = 9;

/// Writes the encoding of `value` to the front of `out` and returns its length.
pub(crate) fn encode(value: i64, out: &mut [u8; MAX_LONG_LENGTH]) -> usize {
    let mut len = 1;

    if value < -119 {
        let adjusted = (value + 119) as u64;

        if adjusted | 0x00FF_FFFF_FFFF_FFFF != u64::MAX {
            out[len] = (adjusted >> 56) as u8;
            len += 1;
        }
        if adjusted | 0x0000_FFFF_FFFF_FFFF != u64::MAX {
            out[len] = (adjusted >> 48) as u8;
            len += 1;
        }
        if adjusted | 0x0000_00FF_FFFF_FFFF != u64::MAX {
            out[len] = (adjusted >> 40) as u8;
            len += 1;
        }
        if adjusted | 0x0000_0000_FFFF_FFFF != u64::MAX {
            out[len] = (adjusted >> 32) as u8;
            len += 1;
        }
        if adjusted | 0x0000_0000_00FF_FFFF != u64::MAX {
            out[len] = (adjusted >> 24) as u8;
            len += 1;
        }
        if adjusted | 0x0000_0000_0000_FFFF != u64::MAX {
            out[len] = (adjusted >> 16) as u8;
            len += 1;
        }
        if adjusted | 0x0000_0000_0000_00FF != u64::MAX {
            out[len] = (adjusted >> 8) as u8;
            len += 1;
        }
        out[len] = adjusted as u8;
        len += 1;

        out[0] = NEGATIVE_BASE - (len - 1) as u8;
    } else if value > 120 {
        let adjusted = (value - 121) as u64;

        if adjusted & 0xFF00_0000_0000_0000 != 0 {
            out[len] = (adjusted >> 56) as u8;
            len += 1;
        }
        if adjusted & 0xFFFF_0000_0000_0000 != 0 {
            out[len] = (adjusted >> 48) as u8;
            len += 1;
        }
        if adjusted & 0xFFFF_FF00_0000_0000 != 0 {
            out[len] = (adjusted >> 40) as u8;
            len += 1;
        }
        if adjusted & 0xFFFF_FFFF_0000_0000 != 0 {
            out[len] = (adjusted >> 32) as u8;
            len += 1;
        }
        if adjusted & 0xFFFF_FFFF_FF00_0000 != 0 {
            out[len] = (adjusted >> 24) as u8;
            len += 1;
        }
        if adjusted & 0xFFFF_FFFF_FFFF_0000 != 0 {
            out[len] = (adjusted >> 16) as u8;
            len += 1;
        }
        if adjusted & 0xFFFF_FFFF_FFFF_FF00 != 0 {
            out[len] = (adjusted >> 8) as u8;
            len += 1;
        }
        out[len] = adjusted as u8;
        len += 1;

        out[0] = POSITIVE_BASE + (len - 1) as u8;
    } else {
        out[0] = inline_byte(value as i8);
    }

    len
}

/// Reassembles a value from its indicator and the magnitude bytes that followed it. Foreign encodings wrap instead of overflowing.
pub(crate) fn decode(indicator: Indicator, magnitude: &[u8]) -> i64 {
    debug_assert_eq!(indicator.magnitude_len(), magnitude.len());

    let (seed, negative) = match indicator {
        Indicator::Inline(value) => return i64::from(value),
        Indicator::Negative(_) => (u64::MAX, true),
        Indicator::Positive(_) => (0, false),
    };

    let adjusted = magnitude
        .iter()
        .fold(seed, |acc, byte| (acc << 8) | u64::from(*byte)) as i64;

    if negative {
        adjusted.wrapping_sub(119)
    } else {
        adjusted.wrapping_add(121)
    }
}

/// Returns the number of bytes [`write_sorted_i64`] uses for `value`.
///
/// ```
/// use sorted_int::*;
///
/// assert_eq!(1, sorted_i64_len(-119));
/// assert_eq!(2, sorted_i64_len(-120));
/// assert_eq!(9, sorted_i64_len(i64::MAX));
/// ```
pub fn sorted_i64_len(value: i64) -> usize {
    encode(value, &mut [0; MAX_LONG_LENGTH])
}

/// Writes the sorted encoding of `value` to `buf`, starting at `offset`, and returns the offset past the written bytes.
///
/// Same scheme as [`write_sorted_i32`](crate::write_sorted_i32), with up to eight magnitude bytes. Values that fit an `i32` encode to the same bytes with either width.
///
/// Panics if fewer than [`sorted_i64_len`]`(value)` bytes fit behind `offset`.
pub fn write_sorted_i64(buf: &mut [u8], offset: usize, value: i64) -> usize {
    let mut scratch = [0; MAX_LONG_LENGTH];
    let len = encode(value, &mut scratch);

    buf[offset..offset + len].copy_from_slice(&scratch[..len]);
    offset + len
}

/// Reads the sorted `i64` encoded at `offset` of `buf`.
///
/// Returns an [`UnderflowError`] if `buf` ends before the encoding does.
///
/// ```
/// use sorted_int::*;
///
/// let mut buf = [0; MAX_LONG_LENGTH];
/// let end = write_sorted_i64(&mut buf, 0, -1 << 40);
///
/// assert_eq!(end, get_read_length64(&buf, 0));
/// assert_eq!(Ok(-1 << 40), read_sorted_i64(&buf[..end], 0));
/// assert!(read_sorted_i64(&buf[..end - 1], 0).is_err());
/// ```
pub fn read_sorted_i64(buf: &[u8], offset: usize) -> Result<i64, UnderflowError> {
    let rest = buf.get(offset..).unwrap_or(&[]);

    let indicator = match rest.first() {
        Some(byte) => Indicator::from_byte(*byte),
        None => {
            return Err(UnderflowError {
                requested: 1,
                available: 0,
            })
        }
    };

    let len = indicator.encoded_len();
    if rest.len() < len {
        return Err(UnderflowError {
            requested: len,
            available: rest.len(),
        });
    }

    Ok(decode(indicator, &rest[1..len]))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::vec;
    use std::vec::Vec;

    use crate::{get_read_length64, write_sorted_i32};

    fn encoded(value: i64) -> Vec<u8> {
        let mut buf = [0; MAX_LONG_LENGTH];
        let len = write_sorted_i64(&mut buf, 0, value);
        buf[..len].to_vec()
    }

    fn boundaries() -> Vec<i64> {
        let mut values = vec![
            i64::MIN,
            i64::MIN + 1,
            i64::MIN + 119,
            i64::MAX - 121,
            i64::MAX - 1,
            i64::MAX,
            i32::MIN as i64 - 1,
            i32::MIN as i64,
            i32::MAX as i64,
            i32::MAX as i64 + 1,
        ];

        for shift in 0..63 {
            let power = 1i64 << shift;
            for delta in [-1, 0, 1] {
                values.push(power + 121 + delta);
                values.push(power - 1 + 121 + delta);
                values.push(-power - 119 + delta);
                values.push(-power + 1 - 119 + delta);
            }
        }

        values.extend((i64::MIN..=i64::MAX).step_by(0x0003_0000_0000_0007));
        values.extend(-1_000..=1_000);

        values.sort_unstable();
        values.dedup();
        values
    }

    #[test]
    fn known_encodings() {
        assert_eq!(vec![0x7F], encoded(0));
        assert_eq!(vec![0xF7], encoded(120));
        assert_eq!(vec![0xF8, 0x00], encoded(121));
        assert_eq!(vec![0x07, 0xFF], encoded(-120));

        assert_eq!(
            vec![0xFC, 0x01, 0x00, 0x00, 0x00, 0x00],
            encoded((1 << 32) + 121)
        );
        assert_eq!(
            vec![0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x86],
            encoded(i64::MAX)
        );
        assert_eq!(
            vec![0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x77],
            encoded(i64::MIN)
        );
    }

    #[test]
    fn roundtrip_and_read_length() {
        for value in boundaries() {
            let enc = encoded(value);

            assert_eq!(enc.len(), sorted_i64_len(value), "value {}", value);
            assert_eq!(enc.len(), get_read_length64(&enc, 0), "value {}", value);
            assert_eq!(Ok(value), read_sorted_i64(&enc, 0), "value {}", value);
        }
    }

    #[test]
    fn encodings_sort_like_values() {
        let values = boundaries();

        for pair in values.windows(2) {
            let (lesser, greater) = (encoded(pair[0]), encoded(pair[1]));
            assert!(
                lesser < greater,
                "{} encodes to {:?}, but {} encodes to {:?}",
                pair[0],
                lesser,
                pair[1],
                greater
            );
        }
    }

    #[test]
    fn extremes_use_max_length() {
        assert_eq!(MAX_LONG_LENGTH, sorted_i64_len(i64::MIN));
        assert_eq!(MAX_LONG_LENGTH, sorted_i64_len(i64::MAX));
        assert_eq!(5, sorted_i64_len(i32::MIN as i64));
        assert_eq!(6, sorted_i64_len(i32::MIN as i64 - (1 << 32)));
    }

    #[test]
    fn agrees_with_32_bit_encoding() {
        for value in [i32::MIN, -70_000, -376, -120, 0, 120, 121, 65_656, i32::MAX] {
            let mut narrow = [0; 5];
            let len = write_sorted_i32(&mut narrow, 0, value);

            assert_eq!(&narrow[..len], &encoded(value as i64)[..]);
        }
    }

    #[test]
    fn sequence_without_separators() {
        let values = [i64::MIN, 0, -120, 121, i64::MAX, -3, 1 << 50, -(1 << 20)];

        let mut buf = vec![0u8; MAX_LONG_LENGTH * values.len()];
        let mut offset = 0;
        for value in values {
            offset = write_sorted_i64(&mut buf, offset, value);
        }
        buf.truncate(offset);

        let mut offset = 0;
        let mut decoded = Vec::new();
        while offset < buf.len() {
            decoded.push(read_sorted_i64(&buf, offset).unwrap());
            offset += get_read_length64(&buf, offset);
        }

        assert_eq!(&values[..], &decoded[..]);
    }

    #[test]
    fn wrapping_decode_of_foreign_bytes() {
        // Not produced by the encoder, but must not overflow.
        assert_eq!(Ok(120), read_sorted_i64(&[0xFF; 9], 0));
        assert_eq!(Ok(-119), read_sorted_i64(&[0x00; 9], 0));
    }

    #[test]
    fn underflow() {
        assert_eq!(
            Err(UnderflowError {
                requested: 9,
                available: 8
            }),
            read_sorted_i64(&[0x00; 8], 0)
        );
        assert_eq!(
            Err(UnderflowError {
                requested: 1,
                available: 0
            }),
            read_sorted_i64(&[0x7F], 1)
        );
    }
}
