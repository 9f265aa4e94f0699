// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedPointError {
    /// A byte range fell outside the input slice.
    #[error("byte range out of bounds")]
    RangeError,

    /// A raw register did not fit the target base width.
    #[error("raw value does not fit the target integer type")]
    IntegerConversionError,

    #[error("integer {value} does not fit in {integer_bits} integer bits")]
    IntegerOutOfRange { value: i128, integer_bits: u32 },
}
