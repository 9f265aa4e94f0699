// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

/// Implements the sealed register trait for a list of primitive signed integers.
///
/// Usage example:
///
/// impl_base_int!(i8, i16, i32, i64);
macro_rules! impl_base_int {
    ( $( $int:ty ),* $(,)? ) => {
        $(
            impl $crate::integers::sealed::Sealed for $int {}

            impl $crate::integers::BaseInt for $int {
                const BITS: u32 = <$int>::BITS;
                const DIGITS: u32 = <$int>::BITS - 1;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$int>::MIN;
                const MAX: Self = <$int>::MAX;

                type Bytes = [u8; core::mem::size_of::<$int>()];

                #[inline] fn is_negative(self) -> bool { <$int>::is_negative(self) }
                #[inline] fn wrapping_add(self, rhs: Self) -> Self { <$int>::wrapping_add(self, rhs) }
                #[inline] fn wrapping_sub(self, rhs: Self) -> Self { <$int>::wrapping_sub(self, rhs) }
                #[inline] fn wrapping_neg(self) -> Self { <$int>::wrapping_neg(self) }
                #[inline] fn saturating_add(self, rhs: Self) -> Self { <$int>::saturating_add(self, rhs) }
                #[inline] fn saturating_sub(self, rhs: Self) -> Self { <$int>::saturating_sub(self, rhs) }
                #[inline] fn checked_add(self, rhs: Self) -> Option<Self> { <$int>::checked_add(self, rhs) }
                #[inline] fn checked_sub(self, rhs: Self) -> Option<Self> { <$int>::checked_sub(self, rhs) }

                #[inline] fn to_i128(self) -> i128 { self as i128 }
                #[inline] fn wrapping_from_i128(value: i128) -> Self { value as $int }

                #[inline]
                fn try_from_i128(value: i128) -> Option<Self> {
                    <$int as core::convert::TryFrom<i128>>::try_from(value).ok()
                }

                #[inline] fn to_le_bytes(self) -> Self::Bytes { <$int>::to_le_bytes(self) }
                #[inline] fn from_le_bytes(bytes: Self::Bytes) -> Self { <$int>::from_le_bytes(bytes) }
            }
        )*
    };
}

/// One row of the widening table: `narrow => wide`.
macro_rules! impl_widen {
    ( $( $narrow:ty => $wide:ty ),* $(,)? ) => {
        $(
            impl $crate::integers::Widen for $narrow {
                type Wide = $wide;

                #[inline]
                fn widen(self) -> $wide {
                    <$wide as core::convert::From<$narrow>>::from(self)
                }
            }
        )*
    };
}

/// One row of the narrowing table: `wide => narrow`.
///
/// Comparisons happen in the wide type, so `saturate` can not overflow.
macro_rules! impl_narrow {
    ( $( $wide:ty => $narrow:ty ),* $(,)? ) => {
        $(
            impl $crate::integers::Narrow for $wide {
                type Narrow = $narrow;

                #[inline]
                fn saturate(self) -> $narrow {
                    if self > (<$narrow>::MAX as $wide) {
                        <$narrow>::MAX
                    } else if self < (<$narrow>::MIN as $wide) {
                        <$narrow>::MIN
                    } else {
                        self as $narrow
                    }
                }

                #[inline]
                fn truncate(self) -> $narrow {
                    self as $narrow
                }

                #[inline]
                fn checked_narrow(self) -> Option<$narrow> {
                    <$narrow as core::convert::TryFrom<$wide>>::try_from(self).ok()
                }
            }
        )*
    };
}

pub(crate) use impl_base_int;
pub(crate) use impl_narrow;
pub(crate) use impl_widen;
