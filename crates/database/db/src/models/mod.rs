/// This module contains the mirrored block database model.
pub mod block;

/// This module contains the mirrored transaction database model.
pub mod transaction;

/// Converts a `u64` column value into the `i64` the store expects.
pub(crate) fn to_i64(value: u64) -> i64 {
    value.try_into().expect("value should fit in i64")
}
