// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The numeric bound every axis value type must satisfy. See [`SignedIntegral`].

use std::{fmt::{Debug, Display},
          hash::Hash,
          ops::{Add, AddAssign, Neg, Sub, SubAssign}};

mod sealed {
    pub trait Sealed {}
}

/// A signed, integral primitive that can back a [`Coordinate`].
///
/// The trait is sealed and only implemented for `i8`, `i16`, `i32`, `i64`, `i128` and
/// `isize`. Declaring an [`Axis`] whose `Value` is unsigned or floating point fails the
/// trait bound, so an invalid axis never gets past the compiler.
///
/// Scaling by a real factor goes through [`to_f64()`] and [`from_f64_truncated()`]. The
/// latter uses an `as` cast, which truncates toward zero and saturates at the bounds of
/// the type (`NaN` becomes zero).
///
/// [`Coordinate`]: crate::Coordinate
/// [`Axis`]: crate::Axis
/// [`to_f64()`]: Self::to_f64
/// [`from_f64_truncated()`]: Self::from_f64_truncated
pub trait SignedIntegral:
    sealed::Sealed
    + Copy
    + Default
    + Debug
    + Display
    + Eq
    + Ord
    + Hash
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;

    fn to_f64(self) -> f64;

    /// Converts back from real arithmetic, truncating toward zero.
    fn from_f64_truncated(value: f64) -> Self;

    /// Widens the value, used for overflow free comparisons and error reporting.
    fn to_i128(self) -> i128;

    fn is_negative(self) -> bool { self < Self::ZERO }

    /// Two's complement addition, wraps at the bounds of the type.
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;

    #[must_use]
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Negation that maps `MIN` to itself.
    #[must_use]
    fn wrapping_neg(self) -> Self;
}

macro_rules! generate_signed_integral_impl {
    ($($ty:ty),+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl SignedIntegral for $ty {
                const ZERO: Self = 0;

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 { self as f64 }

                #[allow(clippy::cast_possible_truncation)]
                fn from_f64_truncated(value: f64) -> Self { value as $ty }

                #[allow(clippy::cast_lossless, trivial_numeric_casts)]
                fn to_i128(self) -> i128 { self as i128 }

                fn wrapping_add(self, rhs: Self) -> Self { <$ty>::wrapping_add(self, rhs) }

                fn wrapping_sub(self, rhs: Self) -> Self { <$ty>::wrapping_sub(self, rhs) }

                fn wrapping_neg(self) -> Self { <$ty>::wrapping_neg(self) }
            }
        )+
    };
}

generate_signed_integral_impl!(i8, i16, i32, i64, i128, isize);
