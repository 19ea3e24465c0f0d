use byte_stream::UnderflowError;

use crate::indicator::{inline_byte, Indicator, NEGATIVE_BASE, POSITIVE_BASE};

/// The maximum number of bytes needed to store an `i32`: one indicator byte and four magnitude bytes.
pub const MAX_LENGTH: usize = 5;

/// Writes the encoding of `value` to the front of `out` and returns its length.
pub(crate) fn encode(value: i32, out: &mut [u8; MAX_LENGTH]) -> usize {
    let mut len = 1;

    if value < -119 {
        // Leading 0xFF bytes are redundant given the all-ones decode seed, the last byte is always kept.
        let adjusted = (value + 119) as u32;

        if adjusted | 0x00FF_FFFF != 0xFFFF_FFFF {
            out[len] = (adjusted >> 24) as u8;
            len += 1;
        }
        if adjusted | 0x0000_FFFF != 0xFFFF_FFFF {
            out[len] = (adjusted >> 16) as u8;
            len += 1;
        }
        if adjusted | 0x0000_00FF != 0xFFFF_FFFF {
            out[len] = (adjusted >> 8) as u8;
            len += 1;
        }
        out[len] = adjusted as u8;
        len += 1;

        // Longer encodings of negative values get smaller indicators.
        out[0] = NEGATIVE_BASE - (len - 1) as u8;
    } else if value > 120 {
        let adjusted = (value - 121) as u32;

        if adjusted & 0xFF00_0000 != 0 {
            out[len] = (adjusted >> 24) as u8;
            len += 1;
        }
        if adjusted & 0xFFFF_0000 != 0 {
            out[len] = (adjusted >> 16) as u8;
            len += 1;
        }
        if adjusted & 0xFFFF_FF00 != 0 {
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

/// Reassembles a value from its indicator and the magnitude bytes that followed it.
pub(crate) fn decode(indicator: Indicator, magnitude: &[u8]) -> i32 {
    debug_assert_eq!(indicator.magnitude_len(), magnitude.len());

    let (seed, negative) = match indicator {
        Indicator::Inline(value) => return i32::from(value),
        Indicator::Negative(_) => (u32::MAX, true),
        Indicator::Positive(_) => (0, false),
    };

    let adjusted = magnitude
        .iter()
        .fold(seed, |acc, byte| (acc << 8) | u32::from(*byte)) as i32;

    if negative {
        adjusted.wrapping_sub(119)
    } else {
        adjusted.wrapping_add(121)
    }
}

/// Panics unless `indicator` announces at most four magnitude bytes.
pub(crate) fn expect_fits(indicator: Indicator) {
    if indicator.encoded_len() > MAX_LENGTH {
        panic!(
            "Can't decode an i32 from an encoding announcing {} magnitude bytes!",
            indicator.magnitude_len()
        )
    }
}

/// Returns the number of bytes [`write_sorted_i32`] uses for `value`.
///
/// ```
/// use sorted_int::*;
///
/// assert_eq!(1, sorted_i32_len(120));
/// assert_eq!(2, sorted_i32_len(121));
/// assert_eq!(5, sorted_i32_len(i32::MIN));
/// ```
pub fn sorted_i32_len(value: i32) -> usize {
    encode(value, &mut [0; MAX_LENGTH])
}

/// Writes the sorted encoding of `value` to `buf`, starting at `offset`, and returns the offset past the written bytes.
///
/// Values in `-119..=120` take a single byte. Every other value takes an indicator byte followed by up to four bytes of `value + 119` (negative values) or `value - 121` (positive values) as a big-endian integer without its redundant leading bytes.
///
/// Panics if fewer than [`sorted_i32_len`]`(value)` bytes fit behind `offset`.
///
/// ```
/// use sorted_int::*;
///
/// let mut buf = [0; 4];
/// let offset = write_sorted_i32(&mut buf, 0, 0);
/// let offset = write_sorted_i32(&mut buf, offset, -120);
/// assert_eq!(3, offset);
/// assert_eq!([0x7F, 0x07, 0xFF, 0x00], buf);
/// ```
pub fn write_sorted_i32(buf: &mut [u8], offset: usize, value: i32) -> usize {
    let mut scratch = [0; MAX_LENGTH];
    let len = encode(value, &mut scratch);

    buf[offset..offset + len].copy_from_slice(&scratch[..len]);
    offset + len
}

/// Reads the sorted `i32` encoded at `offset` of `buf`.
///
/// Use [`get_read_length32`](crate::get_read_length32) to find the offset of whatever follows. Returns an [`UnderflowError`] if `buf` ends before the encoding does. Panics if the indicator byte at `offset` announces more than four magnitude bytes, which only encodings of 64-bit values do.
///
/// ```
/// use sorted_int::*;
///
/// assert_eq!(Ok(0), read_sorted_i32(&[0x7F], 0));
/// assert_eq!(Ok(-120), read_sorted_i32(&[0x00, 0x07, 0xFF], 1));
/// assert!(read_sorted_i32(&[0xF9, 0x01], 0).is_err());
/// ```
pub fn read_sorted_i32(buf: &[u8], offset: usize) -> Result<i32, UnderflowError> {
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
    expect_fits(indicator);

    let len = indicator.encoded_len();
    if rest.len() < len {
        return Err(UnderflowError {
            requested: len,
            available: rest.len(),
        });
    }

    Ok(decode(indicator, &rest[1..len]))
}
