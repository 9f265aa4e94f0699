// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Signed fixed-point numbers for targets without an FPU, or wherever
//! fractional results have to be bit-for-bit reproducible.
//!
//! A [`Q<DECIMALS, B>`](Q) keeps its value in one signed register `B`
//! (`i8`, `i16`, `i32` or `i64`). The low `DECIMALS` bits are the fraction,
//! the rest minus the sign bit are the integer part.
//!
//! ```
//! use q_fixed::{Q5d26, Q};
//!
//! let a = Q5d26::from_int(3);
//! let b = Q5d26::from_raw(1 << 25); // 0.5
//! assert_eq!(a * b, Q5d26::from_raw(3 << 25));
//!
//! // + and - wrap, * saturates unless asked otherwise
//! assert_eq!(Q5d26::MAX_VAL + Q5d26::from_raw(1), Q5d26::MIN_VAL);
//! assert_eq!(Q5d26::MAX_VAL * Q5d26::from_int(2), Q5d26::MAX_VAL);
//! assert_eq!(Q5d26::MAX_VAL.wrapping_mul(Q5d26::from_int(2)).into_raw(), -2);
//!
//! let small: Q<4, i8> = Q::from_int(3);
//! assert_eq!(small.into_raw(), 3 << 4);
//! ```
//!
//! Layouts that leave no room for the sign bit do not build:
//!
//! ```compile_fail
//! use q_fixed::Q;
//!
//! let _ = Q::<32, i32>::from_int(1);
//! ```
//!
//! The same goes for the integer masks, even with no value in sight:
//!
//! ```compile_fail
//! use q_fixed::Q;
//!
//! let _ = Q::<40, i32>::integer_mask();
//! ```
//!
//! and neither do unsigned registers:
//!
//! ```compile_fail
//! use q_fixed::Q;
//!
//! let _ = Q::<4, u32>::from_raw(1);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod error;
mod macros;
pub mod fixed_point;
pub mod integers;
mod utils;

pub use error::FixedPointError;
pub use fixed_point::{Q, Q1d30, Q5d26};
pub use integers::{saturate, truncate, BaseInt, Narrow, NarrowOf, Widen, WideOf};
