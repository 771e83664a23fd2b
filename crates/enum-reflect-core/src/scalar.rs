//! Underlying integer representations.
//!
//! Every enumeration is backed by one of Rust's primitive integer types.
//! [`Scalar`] abstracts over them and provides a lossless widening to
//! `i128`, which is how type-erased tables carry values.

use std::fmt;
use std::hash::Hash;

/// An integer type usable as an enumeration's underlying representation.
///
/// Implemented for every primitive integer except `u128`, whose upper half
/// does not fit the `i128` carrier.
pub trait Scalar:
    Copy + PartialEq + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Widen to the type-erased carrier.
    fn to_i128(self) -> i128;

    /// Narrow from the carrier, `None` when out of range.
    fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_scalar!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);
