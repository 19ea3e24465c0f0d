#![no_main]

use libfuzzer_sys::fuzz_target;

use byte_stream::{ByteReader, ByteWriter};
use sorted_int::{get_read_length64, read_sorted_i64, ReadSortedInt, WriteSortedInt};

fuzz_target!(|values: Vec<i64>| {
    let mut buf = Vec::<u8>::new();
    let mut writer = ByteWriter::new(&mut buf);
    for value in values.iter() {
        writer.write_sorted_i64(*value);
    }

    let mut offset = 0;
    for value in values.iter() {
        assert_eq!(Ok(*value), read_sorted_i64(&buf, offset));
        offset += get_read_length64(&buf, offset);
    }
    assert_eq!(buf.len(), offset);

    let mut bytes = &buf[..];
    let mut reader = ByteReader::new(&mut bytes);
    for value in values.iter() {
        assert_eq!(Ok(*value), reader.read_sorted_i64());
    }
    assert!(reader.read_sorted_i64().is_err());
});
