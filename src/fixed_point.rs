// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::FixedPointError;
use crate::integers::{saturate, truncate, BaseInt, Narrow, WideOf, Widen};
use crate::utils::extract_from_raw_bytes;

/// Fractional digits printed by `Display`.
const DISPLAY_DIGITS: usize = 9;
const DISPLAY_SCALE: u128 = 1_000_000_000;

/// A signed fixed-point number stored in a single `B` register.
///
/// The low `DECIMALS` bits hold the fraction and the remaining
/// `B::BITS - 1 - DECIMALS` non-sign bits hold the integer part. The layout is
/// part of the type, so only values of the same shape can be combined.
///
/// ## Overflow
///
/// * `+`, `-` and unary `-` wrap around exactly like two's-complement hardware.
///   Use [`saturating_add`](Self::saturating_add) or
///   [`checked_add`](Self::checked_add) when that is not wanted.
/// * `*` saturates: the product is formed in the next wider integer, shifted
///   back by `DECIMALS` (truncating) and clamped to [`MAX_VAL`](Self::MAX_VAL) /
///   [`MIN_VAL`](Self::MIN_VAL). [`wrapping_mul`](Self::wrapping_mul) drops the
///   high bits instead and is cheaper, but an overflowing product can change
///   sign.
///
/// There is no notion of infinity and no division.
///
/// ## Layout checks
///
/// `DECIMALS` must be at most `B::BITS - 1`. Larger values fail the build as
/// soon as a value is constructed, formatted or measured through the methods
/// here. The pub tuple constructor `Q(raw)` skips that check; prefer
/// [`from_raw`](Self::from_raw).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Debug)]
pub struct Q<const DECIMALS: u32, B: BaseInt = i32>(pub B);

impl<const DECIMALS: u32, B: BaseInt> Q<DECIMALS, B> {
    const LAYOUT_OK: () = assert!(
        DECIMALS <= B::DIGITS,
        "Can't have more decimal bits than fit in the base type."
    );

    pub const SIGN_BITS: u32 = 1;
    pub const DECIMAL_BITS: u32 = DECIMALS;
    pub const INTEGER_BITS: u32 = B::DIGITS - DECIMALS;

    pub const ZERO: Self = Self::from_raw(B::ZERO);
    /// The register's own maximum, one ULP below `2^INTEGER_BITS`.
    pub const MAX_VAL: Self = Self::from_raw(B::MAX);
    /// The register's own minimum, `-2^INTEGER_BITS`.
    pub const MIN_VAL: Self = Self::from_raw(B::MIN);

    /// Wraps a raw register. Every bit pattern is a valid value.
    #[inline]
    pub const fn from_raw(value: B) -> Self {
        let () = Self::LAYOUT_OK;
        Self(value)
    }

    #[inline]
    pub const fn into_raw(self) -> B {
        self.0
    }

    /// Integer field mask, unshifted: `2^INTEGER_BITS - 1`.
    #[inline]
    pub fn integer_mask_unshifted() -> B {
        let () = Self::LAYOUT_OK;
        B::MAX >> DECIMALS
    }

    /// Integer field mask in register position.
    #[inline]
    pub fn integer_mask() -> B {
        let () = Self::LAYOUT_OK;
        Self::integer_mask_unshifted() << DECIMALS
    }

    /// Builds a value from an integer, truncating it to `INTEGER_BITS` bits.
    ///
    /// The low bits of the two's-complement input are kept and shifted into
    /// place, then the result is negated for negative inputs. With one integer
    /// bit `2` becomes zero; with four integer bits `17` becomes `1` and `-3`
    /// becomes `-13`. Use [`try_from_int`](Self::try_from_int) for an exact
    /// conversion.
    #[inline]
    pub fn from_int(integer: B) -> Self {
        let () = Self::LAYOUT_OK;
        let value = (integer & Self::integer_mask_unshifted()) << DECIMALS;

        if integer.is_negative() {
            Self::from_raw(value.wrapping_neg())
        } else {
            Self::from_raw(value)
        }
    }

    /// Builds a value from an integer, rejecting anything outside
    /// `[-2^INTEGER_BITS, 2^INTEGER_BITS - 1]`. The lower bound is
    /// [`MIN_VAL`](Self::MIN_VAL).
    pub fn try_from_int(integer: B) -> Result<Self, FixedPointError> {
        let limit = Self::integer_mask_unshifted();
        let fits = if integer.is_negative() {
            // -limit - 1 is at least B::MIN, so neither step overflows
            integer >= limit.wrapping_neg().wrapping_sub(B::ONE)
        } else {
            integer <= limit
        };

        if !fits {
            return Err(FixedPointError::IntegerOutOfRange {
                value: integer.to_i128(),
                integer_bits: Self::INTEGER_BITS,
            });
        }

        Ok(Self::from_raw(integer << DECIMALS))
    }

    /// Integer portion, truncated towards zero.
    #[inline]
    pub fn int_part(self) -> B {
        let () = Self::LAYOUT_OK;
        let raw = self.0.to_i128();
        let magnitude = (raw.unsigned_abs() >> DECIMALS) as i128;

        B::wrapping_from_i128(if raw < 0 { -magnitude } else { magnitude })
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    // --- additive ops, storage domain ---
    #[inline] pub fn wrapping_add(self, rhs: Self) -> Self { Self::from_raw(self.0.wrapping_add(rhs.0)) }
    #[inline] pub fn wrapping_sub(self, rhs: Self) -> Self { Self::from_raw(self.0.wrapping_sub(rhs.0)) }
    #[inline] pub fn saturating_add(self, rhs: Self) -> Self { Self::from_raw(self.0.saturating_add(rhs.0)) }
    #[inline] pub fn saturating_sub(self, rhs: Self) -> Self { Self::from_raw(self.0.saturating_sub(rhs.0)) }
    #[inline] pub fn checked_add(self, rhs: Self) -> Option<Self> { self.0.checked_add(rhs.0).map(Self::from_raw) }
    #[inline] pub fn checked_sub(self, rhs: Self) -> Option<Self> { self.0.checked_sub(rhs.0).map(Self::from_raw) }

    // --- widening multiplication ---

    /// `(a * b) >> DECIMALS` in the wide type. Can not overflow: the product of
    /// two `B` values always fits in `WideOf<B>`.
    #[inline]
    fn widened_product(self, rhs: Self) -> WideOf<B> {
        let () = Self::LAYOUT_OK;
        (self.0.widen() * rhs.0.widen()) >> DECIMALS
    }

    /// Multiplies, clamping out-of-range products to `MAX_VAL` / `MIN_VAL`.
    #[inline]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        Self::from_raw(saturate::<B>(self.widened_product(rhs)))
    }

    /// Multiplies, dropping the high bits of out-of-range products.
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_raw(truncate::<B>(self.widened_product(rhs)))
    }

    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.widened_product(rhs).checked_narrow().map(Self::from_raw)
    }

    // --- raw register interop ---
    #[inline] pub fn to_le_bytes(self) -> B::Bytes { self.0.to_le_bytes() }
    #[inline] pub fn from_le_bytes(bytes: B::Bytes) -> Self { Self::from_raw(B::from_le_bytes(bytes)) }

    /// Reads a little-endian register image at `offset`.
    pub fn read_le(bytes: &[u8], offset: usize) -> Result<Self, FixedPointError> {
        let width = (B::BITS / 8) as usize;
        let end = offset.checked_add(width).ok_or(FixedPointError::RangeError)?;
        let image: B::Bytes = extract_from_raw_bytes(bytes, offset..end)?;

        Ok(Self::from_le_bytes(image))
    }

    /// Moves the raw register into another base width, keeping `DECIMALS`.
    pub fn try_into_base<C: BaseInt>(self) -> Result<Q<DECIMALS, C>, FixedPointError> {
        C::try_from_i128(self.0.to_i128())
            .map(Q::<DECIMALS, C>::from_raw)
            .ok_or(FixedPointError::IntegerConversionError)
    }
}

impl<const DECIMALS: u32, B: BaseInt> Default for Q<DECIMALS, B> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ---- operator impls (WRAP on overflow for add/sub/neg, SATURATE for mul) ----

impl<const DECIMALS: u32, B: BaseInt> Add for Q<DECIMALS, B> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl<const DECIMALS: u32, B: BaseInt> Sub for Q<DECIMALS, B> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl<const DECIMALS: u32, B: BaseInt> Mul for Q<DECIMALS, B> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }
}

impl<const DECIMALS: u32, B: BaseInt> Neg for Q<DECIMALS, B> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_raw(self.0.wrapping_neg())
    }
}

impl<const DECIMALS: u32, B: BaseInt> AddAssign for Q<DECIMALS, B> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const DECIMALS: u32, B: BaseInt> SubAssign for Q<DECIMALS, B> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const DECIMALS: u32, B: BaseInt> MulAssign for Q<DECIMALS, B> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const DECIMALS: u32, B: BaseInt> fmt::Display for Q<DECIMALS, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let () = Self::LAYOUT_OK;
        let raw = self.0.to_i128();
        let magnitude = raw.unsigned_abs();
        let int_part = magnitude >> DECIMALS;
        let frac_part = magnitude & ((1u128 << DECIMALS) - 1);

        // truncated, never rounded up into the integer part
        let mut digits = (frac_part * DISPLAY_SCALE) >> DECIMALS;

        // no "-0" for tiny negatives
        if raw < 0 && (int_part != 0 || digits != 0) {
            f.write_str("-")?;
        }
        write!(f, "{}", int_part)?;

        if digits == 0 {
            return Ok(());
        }

        let mut width = DISPLAY_DIGITS;
        while digits % 10 == 0 {
            digits /= 10;
            width -= 1;
        }

        write!(f, ".{:0width$}", digits, width = width)
    }
}

// Optional: serde, as the raw register
#[cfg(feature = "serde")]
impl<const DECIMALS: u32, B> serde::Serialize for Q<DECIMALS, B>
where
    B: BaseInt + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const DECIMALS: u32, B> serde::Deserialize<'de> for Q<DECIMALS, B>
where
    B: BaseInt + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        B::deserialize(deserializer).map(Self::from_raw)
    }
}

// Optional: bytemuck. `Q` is a transparent wrapper, so any register bit pattern is valid.
#[cfg(feature = "bytemuck")]
unsafe impl<const DECIMALS: u32, B: BaseInt + bytemuck::Zeroable> bytemuck::Zeroable for Q<DECIMALS, B> {}
#[cfg(feature = "bytemuck")]
unsafe impl<const DECIMALS: u32, B: BaseInt + bytemuck::Pod> bytemuck::Pod for Q<DECIMALS, B> {}

/// Signed Q1.30 fixed-point numerical type
///
/// ## Notes
///
/// * Uses an i64 intermediate type for multiplication
/// * (sign bit) +1 integer bit, 30 fractional bits
/// * Range: [-2, 2), fractional resolution = 2^-30 ≈ 9.31 * 10^-10
///
/// Meant for Mandelbrot & Julia set renders, where the interesting domain is about [-1.5, +1.5].
pub type Q1d30 = Q<30, i32>;

/// Signed Q5.26 fixed-point numerical type
///
/// ## Notes
///
/// * Uses an i64 intermediate type for multiplication
/// * (sign bit) +5 integer bits, 26 fractional bits
/// * Range: (-32, +32), fractional resolution = 2^-26 ≈ 1.49 * 10^-8
///
/// General purpose graphics type.
pub type Q5d26 = Q<26, i32>;
