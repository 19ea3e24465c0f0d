#[cfg(feature = "dev")]
use arbitrary::Arbitrary;

use ufotofu::{BulkConsumer, BulkProducer};
use ufotofu_codec::Decodable;
use ufotofu_codec::DecodableCanonic;
use ufotofu_codec::DecodableSync;
use ufotofu_codec::DecodeError;
use ufotofu_codec::Encodable;
use ufotofu_codec::EncodableKnownSize;
use ufotofu_codec::EncodableSync;

use crate::error::SortedIntError;
use crate::indicator::Indicator;
use crate::int32::{self, MAX_LENGTH};
use crate::int64::{self, MAX_LONG_LENGTH};

/// Reads one whole encoding into the front of `bytes` and returns its indicator.
///
/// Never reads past the end of the encoding. Fails with [`SortedIntError::TooWide`] before reading any magnitude bytes if the encoding does not fit into `bytes`.
async fn produce_encoding<P, const N: usize>(
    producer: &mut P,
    bytes: &mut [u8; N],
) -> Result<Indicator, DecodeError<P::Final, P::Error, SortedIntError>>
where
    P: BulkProducer<Item = u8>,
{
    producer.bulk_overwrite_full_slice(&mut bytes[..1]).await?;

    let indicator = Indicator::from_byte(bytes[0]);
    let len = indicator.encoded_len();

    if len > N {
        return Err(DecodeError::Other(SortedIntError::TooWide));
    }

    if len > 1 {
        producer.bulk_overwrite_full_slice(&mut bytes[1..len]).await?;
    }

    Ok(indicator)
}

macro_rules! sorted_wrapper {
    (name $wrapper_name:ident; integer $int:ident; module $module:ident; max_len $max_len:ident; len_fn $len_fn:ident; doc_value $value:expr; doc_array $arr:expr) => {
        #[doc = concat!("A thin wrapper around [`", stringify!($int), "`] for its order-preserving sorted encoding.

The byte strings of two wrapped values compare lexicographically like the values themselves, and all the ufotofu_codec traits are available.

```
use sorted_int::*;
use ufotofu_codec::*;

assert_eq!(
    &", stringify!($arr), "[..],
    &", stringify!($wrapper_name), "(", stringify!($value), ").sync_encode_into_boxed_slice()[..]
);
assert_eq!(
    ", stringify!($value), ",
    ", stringify!($wrapper_name), "::sync_decode_from_slice(&", stringify!($arr), ").unwrap().0
);
```")]
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
        #[cfg_attr(feature = "dev", derive(Arbitrary))]
        pub struct $wrapper_name(pub $int);

        impl From<$int> for $wrapper_name {
            fn from(value: $int) -> Self {
                $wrapper_name(value)
            }
        }

        impl From<$wrapper_name> for $int {
            fn from(value: $wrapper_name) -> Self {
                value.0
            }
        }

        impl Encodable for $wrapper_name {
            async fn encode<C>(&self, consumer: &mut C) -> Result<(), C::Error>
            where
                C: BulkConsumer<Item = u8>,
            {
                let mut bytes = [0u8; $max_len];
                let len = $module::encode(self.0, &mut bytes);

                consumer
                    .bulk_consume_full_slice(&bytes[..len])
                    .await
                    .map_err(|err| err.into_reason())
            }
        }

        impl EncodableKnownSize for $wrapper_name {
            fn len_of_encoding(&self) -> usize {
                $module::$len_fn(self.0)
            }
        }

        impl EncodableSync for $wrapper_name {}

        impl Decodable for $wrapper_name {
            type ErrorReason = SortedIntError;

            async fn decode<P>(
                producer: &mut P,
            ) -> Result<Self, DecodeError<P::Final, P::Error, Self::ErrorReason>>
            where
                P: BulkProducer<Item = u8>,
            {
                let mut bytes = [0u8; $max_len];
                let indicator = produce_encoding(producer, &mut bytes).await?;
                let len = indicator.encoded_len();

                Ok($wrapper_name($module::decode(indicator, &bytes[1..len])))
            }
        }

        impl DecodableCanonic for $wrapper_name {
            type ErrorCanonic = SortedIntError;

            async fn decode_canonic<P>(
                producer: &mut P,
            ) -> Result<Self, DecodeError<P::Final, P::Error, Self::ErrorCanonic>>
            where
                P: BulkProducer<Item = u8>,
            {
                let mut bytes = [0u8; $max_len];
                let indicator = produce_encoding(producer, &mut bytes).await?;
                let len = indicator.encoded_len();
                let value = $module::decode(indicator, &bytes[1..len]);

                // Decoding wraps, so only a byte-wise comparison catches every foreign encoding.
                let mut canonic = [0u8; $max_len];
                let canonic_len = $module::encode(value, &mut canonic);

                if canonic[..canonic_len] == bytes[..len] {
                    Ok($wrapper_name(value))
                } else {
                    Err(DecodeError::Other(SortedIntError::NotMinimal))
                }
            }
        }

        impl DecodableSync for $wrapper_name {}
    };
}

sorted_wrapper!(name SortedI32; integer i32; module int32; max_len MAX_LENGTH; len_fn sorted_i32_len; doc_value -120; doc_array [0x07, 0xFF]);
sorted_wrapper!(name SortedI64; integer i64; module int64; max_len MAX_LONG_LENGTH; len_fn sorted_i64_len; doc_value 1_000; doc_array [0xF9, 0x03, 0x6F]);
