#![no_std]

//! # Sorted Int
//!
//! Variable-length encodings of `i32` and `i64` values whose byte strings sort lexicographically exactly like the integers they encode. Keys built from such encodings can be compared with `memcmp`, without decoding them first.
//!
//! The first byte of each encoding, the *indicator*, says everything about the length of the encoding:
//!
//! - Values from [`SINGLE_BYTE_MIN`] to [`SINGLE_BYTE_MAX`] (that is, `-119` to `120`) are stored as a single byte of `value + 127`.
//! - Greater values are stored as `value - 121`, a big-endian integer without leading zero bytes, preceded by an indicator of `0xF7 + n` for `n` such bytes.
//! - Lesser values are stored as `value + 119`, a big-endian two's complement integer without leading `0xFF` bytes, preceded by an indicator of `0x08 - n` for `n` such bytes.
//!
//! An `i32` takes at most [`MAX_LENGTH`] bytes, an `i64` at most [`MAX_LONG_LENGTH`] bytes. Both widths share the same scheme, so a value that fits into an `i32` encodes identically as an `i64`.
//!
//! The crate offers three ways of working with encodings:
//!
//! - Offset-based functions on byte slices: [`write_sorted_i32`], [`read_sorted_i32`], [`get_read_length32`], and their 64-bit counterparts. Encodings can be concatenated without any separators, [`get_read_length32`] and [`get_read_length64`] find where the next one starts.
//! - The [`WriteSortedInt`] and [`ReadSortedInt`] extension traits for the [`ByteWriter`](byte_stream::ByteWriter) and [`ByteReader`](byte_stream::ByteReader) of the `byte_stream` crate.
//! - The [`SortedI32`] and [`SortedI64`] wrappers, which implement the [ufotofu_codec](https://docs.rs/ufotofu_codec) traits for encoding into consumers and decoding from producers. Their canonic decoding rejects every encoding that is longer than necessary.
//!
//! ```
//! use sorted_int::*;
//!
//! let values = [-70_000, -120, 0, 120, 121, 1 << 20];
//!
//! let mut buf = [0; 6 * MAX_LENGTH];
//! let mut offset = 0;
//! let mut encodings = Vec::new();
//!
//! for value in values {
//!     let end = write_sorted_i32(&mut buf, offset, value);
//!     encodings.push(buf[offset..end].to_vec());
//!     offset = end;
//! }
//!
//! assert!(encodings.windows(2).all(|pair| pair[0] < pair[1]));
//!
//! let mut offset = 0;
//! for value in values {
//!     assert_eq!(Ok(value), read_sorted_i32(&buf, offset));
//!     offset += get_read_length32(&buf, offset);
//! }
//! ```

#[cfg(any(feature = "std", test))]
extern crate std;

mod codec;
mod error;
mod indicator;
mod int32;
mod int64;
mod stream;

pub use byte_stream::UnderflowError;

pub use codec::{SortedI32, SortedI64};
pub use error::SortedIntError;
pub use indicator::{get_read_length32, get_read_length64, SINGLE_BYTE_MAX, SINGLE_BYTE_MIN};
pub use int32::{read_sorted_i32, sorted_i32_len, write_sorted_i32, MAX_LENGTH};
pub use int64::{read_sorted_i64, sorted_i64_len, write_sorted_i64, MAX_LONG_LENGTH};
pub use stream::{ReadSortedInt, WriteSortedInt};
