use core::fmt::Debug;

use sorted_int::{write_sorted_i32, write_sorted_i64, MAX_LENGTH, MAX_LONG_LENGTH};

/// Returns the sorted encoding of an `i32` as a fresh vector.
pub fn encode_i32(value: i32) -> Vec<u8> {
    let mut buf = [0; MAX_LENGTH];
    let len = write_sorted_i32(&mut buf, 0, value);
    buf[..len].to_vec()
}

/// Returns the sorted encoding of an `i64` as a fresh vector.
pub fn encode_i64(value: i64) -> Vec<u8> {
    let mut buf = [0; MAX_LONG_LENGTH];
    let len = write_sorted_i64(&mut buf, 0, value);
    buf[..len].to_vec()
}

/// Crashes unless the encodings of two values compare exactly like the values do.
pub fn assert_same_order<T: Ord + Debug>(a: T, b: T, enc_a: &[u8], enc_b: &[u8]) {
    if a.cmp(&b) != enc_a.cmp(enc_b) {
        panic!(
            "{:?} and {:?} compare as {:?}, but their encodings {:?} and {:?} compare as {:?}",
            a,
            b,
            a.cmp(&b),
            enc_a,
            enc_b,
            enc_a.cmp(enc_b)
        );
    }
}
