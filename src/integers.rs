// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Register integers and the closed widening/narrowing table used for
//! intermediate products.
//!
//! | base  | wide   | narrow |
//! |-------|--------|--------|
//! | `i8`  | `i16`  |   -    |
//! | `i16` | `i32`  | `i8`   |
//! | `i32` | `i64`  | `i16`  |
//! | `i64` | `i128` | `i32`  |
//!
//! `i64` is the widest register. Its products go through `i128`, which the
//! compiler lowers to a software double-width multiply on targets that lack a
//! native one. `i128` only appears as an intermediate and can not back a `Q`.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, Mul, Shl, Shr};

use crate::macros::{impl_base_int, impl_narrow, impl_widen};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A signed two's-complement integer that can back a fixed-point register.
///
/// Sealed: implemented for `i8`, `i16`, `i32` and `i64` only, so unsigned or
/// non-integer registers are rejected when the program is built.
pub trait BaseInt:
    sealed::Sealed
    + Widen
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + Debug
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Register width in bits.
    const BITS: u32;
    /// Non-sign bits, `BITS - 1`.
    const DIGITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    /// Little-endian byte image of the register.
    type Bytes: Copy + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    fn is_negative(self) -> bool;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
    fn saturating_add(self, rhs: Self) -> Self;
    fn saturating_sub(self, rhs: Self) -> Self;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Lossless sign extension to `i128`.
    fn to_i128(self) -> i128;
    /// Keeps the low `BITS` bits of `value`.
    fn wrapping_from_i128(value: i128) -> Self;
    fn try_from_i128(value: i128) -> Option<Self>;

    fn to_le_bytes(self) -> Self::Bytes;
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

/// Maps an integer to the next wider signed width.
///
/// The wide type narrows back to `Self`, which ties both directions of the
/// table together.
pub trait Widen: sealed::Sealed + Sized {
    type Wide: Narrow<Narrow = Self>
        + Copy
        + Ord
        + Debug
        + Mul<Output = Self::Wide>
        + Shr<u32, Output = Self::Wide>;

    fn widen(self) -> Self::Wide;
}

/// Maps an integer to the next narrower signed width.
pub trait Narrow: sealed::Sealed + Sized {
    type Narrow;

    /// Clamps to the narrow range.
    fn saturate(self) -> Self::Narrow;
    /// Keeps the low bits, two's-complement wraparound.
    fn truncate(self) -> Self::Narrow;
    fn checked_narrow(self) -> Option<Self::Narrow>;
}

pub type WideOf<T> = <T as Widen>::Wide;
pub type NarrowOf<T> = <T as Narrow>::Narrow;

impl sealed::Sealed for i128 {}

impl_base_int!(i8, i16, i32, i64);

impl_widen! {
    i8 => i16,
    i16 => i32,
    i32 => i64,
    i64 => i128,
}

impl_narrow! {
    i16 => i8,
    i32 => i16,
    i64 => i32,
    i128 => i64,
}

/// Clamps a wide intermediate into `T`.
///
/// Returns `T::MAX` above the range, `T::MIN` below it and the value itself
/// otherwise.
#[inline]
pub fn saturate<T: Widen>(wide: WideOf<T>) -> T {
    wide.saturate()
}

/// Narrows a wide intermediate into `T` by dropping the high bits.
#[inline]
pub fn truncate<T: Widen>(wide: WideOf<T>) -> T {
    wide.truncate()
}
