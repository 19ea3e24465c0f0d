/// Least value that is encoded in a single byte.
pub const SINGLE_BYTE_MIN: i8 = -119;

/// Greatest value that is encoded in a single byte.
pub const SINGLE_BYTE_MAX: i8 = 120;

/// Added to a single-byte value to obtain its encoding, so the single-byte band is `8..=247`.
pub(crate) const SINGLE_BYTE_BIAS: i16 = 127;

/// Indicators below this announce `NEGATIVE_BASE - indicator` magnitude bytes of a negative value.
pub(crate) const NEGATIVE_BASE: u8 = 0x08;

/// Indicators above this announce `indicator - POSITIVE_BASE` magnitude bytes of a positive value.
pub(crate) const POSITIVE_BASE: u8 = 0xF7;

/// What the first byte of an encoding says about the rest of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Indicator {
    /// The whole value, no magnitude bytes follow.
    Inline(i8),
    /// A value below [`SINGLE_BYTE_MIN`] follows in this many magnitude bytes.
    Negative(usize),
    /// A value above [`SINGLE_BYTE_MAX`] follows in this many magnitude bytes.
    Positive(usize),
}

impl Indicator {
    pub(crate) const fn from_byte(byte: u8) -> Self {
        if byte < NEGATIVE_BASE {
            Indicator::Negative((NEGATIVE_BASE - byte) as usize)
        } else if byte > POSITIVE_BASE {
            Indicator::Positive((byte - POSITIVE_BASE) as usize)
        } else {
            Indicator::Inline((byte as i16 - SINGLE_BYTE_BIAS) as i8)
        }
    }

    pub(crate) const fn magnitude_len(&self) -> usize {
        match self {
            Indicator::Inline(_) => 0,
            Indicator::Negative(len) | Indicator::Positive(len) => *len,
        }
    }

    /// Length of the whole encoding, indicator included.
    pub(crate) const fn encoded_len(&self) -> usize {
        1 + self.magnitude_len()
    }
}

/// Encodes a value of the single-byte band.
pub(crate) const fn inline_byte(value: i8) -> u8 {
    (value as i16 + SINGLE_BYTE_BIAS) as u8
}

/// Returns the number of bytes [`read_sorted_i32`](crate::read_sorted_i32) would consume at `offset`, looking only at `buf[offset]`.
///
/// Because of this, the buffer only has to contain the first byte of the encoding. Panics if `offset` is out of bounds.
///
/// ```
/// use sorted_int::*;
///
/// assert_eq!(1, get_read_length32(&[0x7F], 0));
/// assert_eq!(2, get_read_length32(&[0x00, 0xF8], 1));
/// assert_eq!(5, get_read_length32(&[0x04], 0));
/// ```
pub fn get_read_length32(buf: &[u8], offset: usize) -> usize {
    Indicator::from_byte(buf[offset]).encoded_len()
}

/// Returns the number of bytes [`read_sorted_i64`](crate::read_sorted_i64) would consume at `offset`, looking only at `buf[offset]`.
///
/// The first byte of an encoding is interpreted identically for both widths. Panics if `offset` is out of bounds.
///
/// ```
/// use sorted_int::*;
///
/// assert_eq!(9, get_read_length64(&[0x00], 0));
/// assert_eq!(9, get_read_length64(&[0xFF], 0));
/// ```
pub fn get_read_length64(buf: &[u8], offset: usize) -> usize {
    Indicator::from_byte(buf[offset]).encoded_len()
}
