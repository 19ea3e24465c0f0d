#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use byte_stream::{ByteReader, ByteWriter};
use sorted_int::{ReadSortedInt, WriteSortedInt};

#[derive(Debug, Arbitrary)]
enum Op {
    Boolean(bool),
    Byte(u8),
    ShortInt(i16),
    Int(i32),
    Long(i64),
    Float(f64),
    Bytearray(Vec<u8>),
    SortedI32(i32),
    SortedI64(i64),
}

fuzz_target!(|data: (Vec<Op>, usize)| {
    let (ops, truncate_by) = data;

    let mut buf = Vec::<u8>::new();
    let mut writer = ByteWriter::new(&mut buf);

    let size_at = writer.get_offset();
    writer.write_int(0);

    for op in ops.iter() {
        match op {
            Op::Boolean(value) => writer.write_boolean(*value),
            Op::Byte(value) => writer.write_byte(*value),
            Op::ShortInt(value) => writer.write_short_int(*value),
            Op::Int(value) => writer.write_int(*value),
            Op::Long(value) => writer.write_long(*value),
            Op::Float(value) => writer.write_float(*value),
            Op::Bytearray(value) => writer.write_bytearray(value, ..),
            Op::SortedI32(value) => writer.write_sorted_i32(*value),
            Op::SortedI64(value) => writer.write_sorted_i64(*value),
        }
    }

    let size = writer.get_offset() - size_at - 4;
    writer.write_int_at_offset(size_at, size as i32);

    let mut bytes = &buf[..];
    let mut reader = ByteReader::new(&mut bytes);

    assert_eq!(Ok(size as i32), reader.read_int());

    for op in ops.iter() {
        match op {
            Op::Boolean(value) => assert_eq!(Ok(*value), reader.read_boolean()),
            Op::Byte(value) => assert_eq!(Ok(*value as i8), reader.read_byte()),
            Op::ShortInt(value) => assert_eq!(Ok(*value), reader.read_short_int()),
            Op::Int(value) => assert_eq!(Ok(*value), reader.read_int()),
            Op::Long(value) => assert_eq!(Ok(*value), reader.read_long()),
            Op::Float(value) => {
                assert_eq!(value.to_bits(), reader.read_float().unwrap().to_bits())
            }
            Op::Bytearray(value) => {
                let mut dst = vec![0u8; value.len()];
                reader.read_fully(&mut dst, ..).unwrap();
                assert_eq!(value, &dst);
            }
            Op::SortedI32(value) => assert_eq!(Ok(*value), reader.read_sorted_i32()),
            Op::SortedI64(value) => assert_eq!(Ok(*value), reader.read_sorted_i64()),
        }
    }

    assert_eq!(0, reader.remaining());
    assert!(reader.read_byte().is_err());

    // A read that runs out of bytes must not consume anything.
    let cut = buf.len() - (truncate_by % (buf.len() + 1));
    let mut truncated = &buf[..cut];
    let mut reader = ByteReader::new(&mut truncated);
    let before = reader.remaining();
    if reader.read_long().is_err() {
        assert_eq!(before, reader.remaining());
    }
});
