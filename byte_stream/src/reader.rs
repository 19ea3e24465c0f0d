use core::ops::{Bound, RangeBounds};

use bytes::Buf;

use crate::error::UnderflowError;

/// Reads big-endian primitives from the front of a [`Buf`], consuming what it reads.
///
/// Every read either consumes exactly the bytes of the value it returns, or fails with an [`UnderflowError`] and consumes nothing.
#[derive(Debug)]
pub struct ByteReader<'a, B: Buf> {
    content: &'a mut B,
}

impl<'a, B: Buf> ByteReader<'a, B> {
    /// Returns a reader that consumes `content`.
    pub fn new(content: &'a mut B) -> Self {
        ByteReader { content }
    }

    /// Returns the number of bytes that have not been read yet.
    pub fn remaining(&self) -> usize {
        self.content.remaining()
    }

    fn ensure(&self, requested: usize) -> Result<(), UnderflowError> {
        let available = self.content.remaining();

        if available < requested {
            Err(UnderflowError {
                requested,
                available,
            })
        } else {
            Ok(())
        }
    }

    /// Returns the next byte without consuming it.
    pub fn peek_byte(&self) -> Result<u8, UnderflowError> {
        self.ensure(1)?;
        // A buffer with remaining bytes never exposes an empty chunk.
        Ok(self.content.chunk()[0])
    }

    /// Reads one byte, any nonzero value is `true`.
    pub fn read_boolean(&mut self) -> Result<bool, UnderflowError> {
        self.ensure(1)?;
        Ok(self.content.get_u8() != 0)
    }

    /// Reads one byte as a two's complement integer, so bytes of 128 and above become negative.
    pub fn read_byte(&mut self) -> Result<i8, UnderflowError> {
        self.ensure(1)?;
        Ok(self.content.get_i8())
    }

    /// Reads a big-endian 16-bit integer.
    pub fn read_short_int(&mut self) -> Result<i16, UnderflowError> {
        self.ensure(2)?;
        Ok(self.content.get_i16())
    }

    /// Reads a big-endian 32-bit integer.
    pub fn read_int(&mut self) -> Result<i32, UnderflowError> {
        self.ensure(4)?;
        Ok(self.content.get_i32())
    }

    /// Reads a big-endian 64-bit integer.
    pub fn read_long(&mut self) -> Result<i64, UnderflowError> {
        self.ensure(8)?;
        Ok(self.content.get_i64())
    }

    /// Reads a big-endian IEEE-754 double.
    pub fn read_float(&mut self) -> Result<f64, UnderflowError> {
        self.ensure(8)?;
        Ok(self.content.get_f64())
    }

    /// Fills `dst[range]` with the next `range.len()` bytes. Pass `..` to fill all of `dst`.
    ///
    /// Panics if `range` is out of bounds for `dst`.
    ///
    /// ```
    /// use byte_stream::ByteReader;
    ///
    /// let mut bytes: &[u8] = &[1u8, 2, 3];
    /// let mut reader = ByteReader::new(&mut bytes);
    ///
    /// let mut dst = [0u8; 4];
    /// reader.read_fully(&mut dst, 1..3).unwrap();
    /// assert_eq!([0, 1, 2, 0], dst);
    ///
    /// assert!(reader.read_fully(&mut dst, ..).is_err());
    /// assert_eq!(1, reader.remaining());
    /// ```
    pub fn read_fully<R>(&mut self, dst: &mut [u8], range: R) -> Result<(), UnderflowError>
    where
        R: RangeBounds<usize>,
    {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        let dst = &mut dst[bounds];

        self.ensure(dst.len())?;
        self.content.copy_to_slice(dst);

        Ok(())
    }
}
