#![no_main]

use ufotofu_codec::fuzz_absolute_all;

fuzz_absolute_all!(sorted_int::SortedI64);
