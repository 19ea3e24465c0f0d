#![no_main]

use libfuzzer_sys::fuzz_target;
use sorted_int_fuzz::{assert_same_order, encode_i32, encode_i64};

fuzz_target!(|data: (i32, i32, i64, i64)| {
    let (a, b, c, d) = data;

    assert_same_order(a, b, &encode_i32(a), &encode_i32(b));
    assert_same_order(c, d, &encode_i64(c), &encode_i64(d));

    // Both widths share one scheme.
    assert_eq!(encode_i32(a), encode_i64(a as i64));
});
