use core::ops::{Bound, RangeBounds};

use bytes::BufMut;

/// Appends big-endian primitives to a growable buffer, and patches 32-bit fields that were written earlier.
///
/// Works with any buffer that can both grow at its end and be viewed as a byte slice, such as `Vec<u8>` or [`bytes::BytesMut`].
#[derive(Debug)]
pub struct ByteWriter<'a, B>
where
    B: BufMut + AsRef<[u8]> + AsMut<[u8]>,
{
    content: &'a mut B,
}

impl<'a, B> ByteWriter<'a, B>
where
    B: BufMut + AsRef<[u8]> + AsMut<[u8]>,
{
    /// Returns a writer that appends to `content`.
    pub fn new(content: &'a mut B) -> Self {
        ByteWriter { content }
    }

    /// Returns the current length of the buffer, i.e., the offset at which the next write lands.
    pub fn get_offset(&self) -> usize {
        self.content.as_ref().len()
    }

    /// Appends `1` for `true` and `0` for `false`.
    pub fn write_boolean(&mut self, value: bool) {
        self.content.put_u8(u8::from(value));
    }

    /// Appends one unsigned byte. [`ByteReader::read_byte`](crate::ByteReader::read_byte) reads it back as an `i8`.
    pub fn write_byte(&mut self, value: u8) {
        self.content.put_u8(value);
    }

    /// Appends a big-endian 16-bit integer.
    pub fn write_short_int(&mut self, value: i16) {
        self.content.put_i16(value);
    }

    /// Appends a big-endian 32-bit integer.
    pub fn write_int(&mut self, value: i32) {
        self.content.put_i32(value);
    }

    /// Appends a big-endian 64-bit integer.
    pub fn write_long(&mut self, value: i64) {
        self.content.put_i64(value);
    }

    /// Appends a big-endian IEEE-754 double.
    pub fn write_float(&mut self, value: f64) {
        self.content.put_f64(value);
    }

    /// Appends `src[range]`. Pass `..` to append all of `src`.
    ///
    /// Panics if `range` is out of bounds for `src`.
    pub fn write_bytearray<R>(&mut self, src: &[u8], range: R)
    where
        R: RangeBounds<usize>,
    {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        self.content.put_slice(&src[bounds]);
    }

    /// Overwrites the four bytes starting at `offset` with the big-endian encoding of `value`. The length of the buffer does not change.
    ///
    /// Panics if those four bytes have not all been written yet.
    ///
    /// ```
    /// use byte_stream::ByteWriter;
    ///
    /// let mut buf = vec![0xAAu8; 6];
    /// let mut writer = ByteWriter::new(&mut buf);
    /// writer.write_int_at_offset(1, 0x0102_0304);
    ///
    /// assert_eq!(6, writer.get_offset());
    /// assert_eq!(vec![0xAA, 1, 2, 3, 4, 0xAA], buf);
    /// ```
    pub fn write_int_at_offset(&mut self, offset: usize, value: i32) {
        let written = self.get_offset();

        match offset.checked_add(4) {
            Some(end) if end <= written => {
                self.content.as_mut()[offset..end].copy_from_slice(&value.to_be_bytes());
            }
            _ => panic!(
                "Can't patch four bytes at offset {} of a buffer with only {} written bytes!",
                offset, written
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bytes::BytesMut;
    use std::vec;
    use std::vec::Vec;

    #[test]
    fn writes_primitives_big_endian() {
        let mut buf = Vec::<u8>::new();
        let mut writer = ByteWriter::new(&mut buf);

        writer.write_boolean(true);
        writer.write_boolean(false);
        writer.write_byte(0xFE);
        writer.write_short_int(-32767);
        writer.write_int(0x1234_5678);
        writer.write_long(-2);
        writer.write_float(1.5);

        assert_eq!(25, writer.get_offset());
        assert_eq!(
            vec![
                0x01, 0x00, // booleans
                0xFE, // byte
                0x80, 0x01, // short
                0x12, 0x34, 0x56, 0x78, // int
                0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, // long
                0x3F, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // float
            ],
            buf
        );
    }

    #[test]
    fn unsigned_byte_reads_back_signed() {
        let mut buf = Vec::<u8>::new();
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_byte(0xFE);
        writer.write_byte(0x7F);
        assert_eq!(vec![0xFE, 0x7F], buf);

        let mut bytes = &buf[..];
        let mut reader = crate::ByteReader::new(&mut bytes);
        assert_eq!(Ok(-2), reader.read_byte());
        assert_eq!(Ok(127), reader.read_byte());
    }

    #[test]
    fn write_bytearray_appends_range() {
        let mut buf = vec![0xFFu8];
        let mut writer = ByteWriter::new(&mut buf);

        writer.write_bytearray(&[1, 2, 3, 4], ..);
        writer.write_bytearray(&[5, 6, 7, 8], 1..3);
        writer.write_bytearray(&[9, 10], 2..);

        assert_eq!(vec![0xFF, 1, 2, 3, 4, 6, 7], buf);
    }

    #[test]
    fn backpatches_length_prefix() {
        let mut buf = BytesMut::new();
        let mut writer = ByteWriter::new(&mut buf);

        writer.write_byte(0x42);
        let size_at = writer.get_offset();
        writer.write_int(0);
        writer.write_long(7);
        writer.write_boolean(true);

        let payload_len = writer.get_offset() - size_at - 4;
        writer.write_int_at_offset(size_at, payload_len as i32);

        assert_eq!(14, writer.get_offset());
        assert_eq!(&[0x42, 0x00, 0x00, 0x00, 0x09], &buf[..5]);
    }

    #[test]
    fn patch_at_end_of_written_region() {
        let mut buf = vec![0u8; 4];
        let mut writer = ByteWriter::new(&mut buf);

        writer.write_int_at_offset(0, -1);

        assert_eq!(vec![0xFF; 4], buf);
    }

    #[test]
    #[should_panic]
    fn patch_past_written_region_panics() {
        let mut buf = vec![0u8; 5];
        let mut writer = ByteWriter::new(&mut buf);

        writer.write_int_at_offset(2, 1);
    }

    #[test]
    #[should_panic]
    fn patch_with_overflowing_offset_panics() {
        let mut buf = vec![0u8; 5];
        let mut writer = ByteWriter::new(&mut buf);

        writer.write_int_at_offset(usize::MAX - 1, 1);
    }
}
