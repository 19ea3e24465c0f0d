use bytes::{Buf, BufMut};

use byte_stream::{ByteReader, ByteWriter, UnderflowError};

use crate::indicator::Indicator;
use crate::int32::{self, MAX_LENGTH};
use crate::int64::{self, MAX_LONG_LENGTH};

/// Appending sorted integers to a [`ByteWriter`].
pub trait WriteSortedInt {
    /// Appends the sorted encoding of an `i32`.
    fn write_sorted_i32(&mut self, value: i32);

    /// Appends the sorted encoding of an `i64`.
    fn write_sorted_i64(&mut self, value: i64);
}

impl<B> WriteSortedInt for ByteWriter<'_, B>
where
    B: BufMut + AsRef<[u8]> + AsMut<[u8]>,
{
    fn write_sorted_i32(&mut self, value: i32) {
        let mut scratch = [0; MAX_LENGTH];
        let len = int32::encode(value, &mut scratch);
        self.write_bytearray(&scratch, ..len);
    }

    fn write_sorted_i64(&mut self, value: i64) {
        let mut scratch = [0; MAX_LONG_LENGTH];
        let len = int64::encode(value, &mut scratch);
        self.write_bytearray(&scratch, ..len);
    }
}

/// Consuming sorted integers from a [`ByteReader`].
///
/// A read either consumes a whole encoding or, on [`UnderflowError`], nothing at all.
pub trait ReadSortedInt {
    /// Consumes the sorted encoding of an `i32`.
    ///
    /// Panics if the next byte announces more than four magnitude bytes.
    fn read_sorted_i32(&mut self) -> Result<i32, UnderflowError>;

    /// Consumes the sorted encoding of an `i64`.
    fn read_sorted_i64(&mut self) -> Result<i64, UnderflowError>;
}

impl<B: Buf> ReadSortedInt for ByteReader<'_, B> {
    fn read_sorted_i32(&mut self) -> Result<i32, UnderflowError> {
        let indicator = Indicator::from_byte(self.peek_byte()?);
        int32::expect_fits(indicator);

        let len = indicator.encoded_len();
        let mut scratch = [0; MAX_LENGTH];
        self.read_fully(&mut scratch, ..len)?;

        Ok(int32::decode(indicator, &scratch[1..len]))
    }

    fn read_sorted_i64(&mut self) -> Result<i64, UnderflowError> {
        let indicator = Indicator::from_byte(self.peek_byte()?);

        let len = indicator.encoded_len();
        let mut scratch = [0; MAX_LONG_LENGTH];
        self.read_fully(&mut scratch, ..len)?;

        Ok(int64::decode(indicator, &scratch[1..len]))
    }
}
