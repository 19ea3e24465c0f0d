#![no_std]

//! # Byte Stream
//!
//! Sequential, big-endian binary I/O over caller-owned byte buffers.
//!
//! A [`ByteReader`] borrows any [`bytes::Buf`] and consumes it front to back: every successful read removes the bytes it read. A read that asks for more bytes than remain fails with an [`UnderflowError`] and leaves the buffer untouched; nothing is ever padded or truncated.
//!
//! A [`ByteWriter`] borrows a growable buffer (a `Vec<u8>` or a [`bytes::BytesMut`]) and appends to its end. Since the total size of a message is often only known after its payload was written, the writer can remember an offset with [`ByteWriter::get_offset`] and later overwrite a 32-bit field there with [`ByteWriter::write_int_at_offset`].
//!
//! ```
//! use byte_stream::{ByteReader, ByteWriter};
//!
//! let mut buf = Vec::<u8>::new();
//! let mut writer = ByteWriter::new(&mut buf);
//!
//! let size_at = writer.get_offset();
//! writer.write_int(0);
//! writer.write_short_int(-2);
//! writer.write_boolean(true);
//! let size = (writer.get_offset() - size_at) as i32;
//! writer.write_int_at_offset(size_at, size);
//!
//! let mut bytes = &buf[..];
//! let mut reader = ByteReader::new(&mut bytes);
//! assert_eq!(7, reader.read_int().unwrap());
//! assert_eq!(-2, reader.read_short_int().unwrap());
//! assert!(reader.read_boolean().unwrap());
//! assert!(reader.read_byte().is_err());
//! ```

#[cfg(any(feature = "std", test))]
extern crate std;

mod error;
mod reader;
mod writer;

pub use error::UnderflowError;
pub use reader::ByteReader;
pub use writer::ByteWriter;
