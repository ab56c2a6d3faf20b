// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Axis, AxisSchema, DefinitionError, Sense, SignedIntegral, Tag, TagId};
use std::{any::type_name,
          cmp::Ordering,
          fmt::{Debug, Formatter, Result},
          hash::{Hash, Hasher},
          marker::PhantomData,
          ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign}};

/// A scalar value on a single [`Axis`].
///
/// The axis is part of the type, so a `Coordinate<Horizontal>` can never be mixed up
/// with a `Coordinate<Vertical>`, even when both wrap an `i32`. The axis' attributes
/// are resolved once into [`Self::SCHEMA`], and an invalid axis declaration fails the
/// build as soon as any coordinate of it is constructed.
///
/// # Direction dependent operations
///
/// When the axis has a direction (for example `direction(Left => Right)`), the endpoint
/// tags say which way to move:
///
/// | Operation                  | Toward `to` (increasing) | Toward `from` (decreasing) |
/// | :------------------------- | :----------------------- | :------------------------- |
/// | [`toward(e, v)`]           | `v`                      | `-v`                       |
/// | [`is_farther_than(e, o)`]  | `self > o`               | `self < o`                 |
/// | [`advance(e, d)`]          | `self + d`               | `self - d`                 |
///
/// The endpoint's sense is computed in an inline `const` block. Passing a tag that is
/// not one of the axis' endpoints, or calling these on an axis without a direction, is
/// a build error rather than a run time failure.
///
/// ```
/// use axial::Coordinate;
///
/// axial::tags! {
///     pub struct Left;
///     pub struct Right;
/// }
/// axial::axis!(pub Horizontal: i32, direction(Left => Right));
///
/// let c = Coordinate::<Horizontal>::toward(Left, 3);
/// assert_eq!(c.value(), -3);
/// assert!(c.is_farther_than(Left, Coordinate::new(0)));
/// assert_eq!(c.advance(Right, 5).value(), 2);
/// ```
///
/// # Scaling
///
/// [`scale()`] and [`divide()`] compute in `f64` and convert back truncating toward
/// zero, see [`SignedIntegral::from_f64_truncated()`].
///
/// [`toward(e, v)`]: Self::toward
/// [`is_farther_than(e, o)`]: Self::is_farther_than
/// [`advance(e, d)`]: Self::advance
/// [`scale()`]: Self::scale
/// [`divide()`]: Self::divide
pub struct Coordinate<A: Axis> {
    value: A::Value,
    axis: PhantomData<A>,
}

mod constructor {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<A: Axis> Coordinate<A> {
        pub const SCHEMA: AxisSchema = AxisSchema::declare(A::ATTRS);

        #[must_use]
        pub fn new(value: A::Value) -> Self {
            let _schema = Self::SCHEMA;
            Self {
                value,
                axis: PhantomData,
            }
        }

        #[must_use]
        pub fn schema() -> AxisSchema { Self::SCHEMA }
    }

    impl<A: Axis> Default for Coordinate<A> {
        fn default() -> Self { Self::new(A::Value::ZERO) }
    }
}

mod access {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<A: Axis> Coordinate<A> {
        #[must_use]
        pub fn value(&self) -> A::Value { self.value }
    }
}

mod arithmetic {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<A: Axis> Coordinate<A> {
        /// Adds a raw delta, use a negative delta to subtract. Wraps at the bounds of
        /// the value type, so `c.offset(d).offset(d.wrapping_neg()) == c` for every `d`.
        #[must_use]
        pub fn offset(self, delta: A::Value) -> Self {
            Self::new(self.value.wrapping_add(delta))
        }

        #[must_use]
        pub fn negate(self) -> Self { Self::new(self.value.wrapping_neg()) }

        #[must_use]
        pub fn scale(self, factor: f64) -> Self {
            Self::new(A::Value::from_f64_truncated(self.value.to_f64() * factor))
        }

        #[must_use]
        pub fn divide(self, factor: f64) -> Self {
            Self::new(A::Value::from_f64_truncated(self.value.to_f64() / factor))
        }
    }
}

mod direction {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<A: Axis> Coordinate<A> {
        const fn resolve_sense(endpoint: TagId) -> Sense {
            match Self::SCHEMA.sense_of(endpoint) {
                Ok(sense) => sense,
                Err(error) => error.raise(),
            }
        }

        /// Which way `endpoint` points along this axis, checked at run time.
        ///
        /// # Errors
        ///
        /// [`DefinitionError::MissingDirection`] or
        /// [`DefinitionError::ForeignEndpoint`], the same conditions that reject the
        /// direction dependent operations at build time.
        pub fn sense_of(endpoint: TagId) -> std::result::Result<Sense, DefinitionError> {
            Self::SCHEMA.sense_of(endpoint)
        }

        /// A coordinate of magnitude `value` pointing toward `endpoint`.
        #[must_use]
        pub fn toward<E: Tag>(_endpoint: E, value: A::Value) -> Self {
            let sense = const { Self::resolve_sense(E::ID) };
            match sense {
                Sense::Increasing => Self::new(value),
                Sense::Decreasing => Self::new(value.wrapping_neg()),
            }
        }

        /// True when `self` is further toward `endpoint` than `other`.
        #[must_use]
        pub fn is_farther_than<E: Tag>(self, _endpoint: E, other: Self) -> bool {
            let sense = const { Self::resolve_sense(E::ID) };
            match sense {
                Sense::Increasing => self.value > other.value,
                Sense::Decreasing => self.value < other.value,
            }
        }

        /// Moves `delta` units toward `endpoint`.
        ///
        /// The axis must have a direction:
        ///
        /// ```compile_fail,E0080
        /// axial::tags! {
        ///     pub struct Up;
        /// }
        /// axial::axis!(pub Depth: i32);
        ///
        /// let _ = axial::Coordinate::<Depth>::new(0).advance(Up, 1);
        /// ```
        ///
        /// And `endpoint` must be one of its two ends:
        ///
        /// ```compile_fail,E0080
        /// axial::tags! {
        ///     pub struct Left;
        ///     pub struct Right;
        ///     pub struct Up;
        /// }
        /// axial::axis!(pub Horizontal: i32, direction(Left => Right));
        ///
        /// let _ = axial::Coordinate::<Horizontal>::new(0).advance(Up, 1);
        /// ```
        #[must_use]
        pub fn advance<E: Tag>(self, _endpoint: E, delta: A::Value) -> Self {
            let sense = const { Self::resolve_sense(E::ID) };
            match sense {
                Sense::Increasing => Self::new(self.value.wrapping_add(delta)),
                Sense::Decreasing => Self::new(self.value.wrapping_sub(delta)),
            }
        }
    }
}

mod ops {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<A: Axis> Neg for Coordinate<A> {
        type Output = Self;

        fn neg(self) -> Self::Output { self.negate() }
    }

    impl<A: Axis> Add<A::Value> for Coordinate<A> {
        type Output = Self;

        fn add(self, rhs: A::Value) -> Self::Output { self.offset(rhs) }
    }

    impl<A: Axis> Sub<A::Value> for Coordinate<A> {
        type Output = Self;

        fn sub(self, rhs: A::Value) -> Self::Output {
            Self::new(self.value.wrapping_sub(rhs))
        }
    }

    impl<A: Axis> AddAssign<A::Value> for Coordinate<A> {
        fn add_assign(&mut self, rhs: A::Value) { self.value = self.value.wrapping_add(rhs); }
    }

    impl<A: Axis> SubAssign<A::Value> for Coordinate<A> {
        fn sub_assign(&mut self, rhs: A::Value) { self.value = self.value.wrapping_sub(rhs); }
    }

    impl<A: Axis> Mul<f64> for Coordinate<A> {
        type Output = Self;

        fn mul(self, rhs: f64) -> Self::Output { self.scale(rhs) }
    }

    impl<A: Axis> Mul<Coordinate<A>> for f64 {
        type Output = Coordinate<A>;

        fn mul(self, rhs: Coordinate<A>) -> Self::Output { rhs.scale(self) }
    }

    impl<A: Axis> Div<f64> for Coordinate<A> {
        type Output = Self;

        fn div(self, rhs: f64) -> Self::Output { self.divide(rhs) }
    }

    impl<A: Axis> MulAssign<f64> for Coordinate<A> {
        fn mul_assign(&mut self, rhs: f64) { *self = self.scale(rhs); }
    }

    impl<A: Axis> DivAssign<f64> for Coordinate<A> {
        fn div_assign(&mut self, rhs: f64) { *self = self.divide(rhs); }
    }
}

// The axis marker is phantom, so these are implemented by hand to avoid requiring
// `A: Clone`, `A: PartialEq`, etc.
mod traits {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<A: Axis> Clone for Coordinate<A> {
        fn clone(&self) -> Self { *self }
    }

    impl<A: Axis> Copy for Coordinate<A> {}

    impl<A: Axis> PartialEq for Coordinate<A> {
        fn eq(&self, other: &Self) -> bool { self.value == other.value }
    }

    impl<A: Axis> Eq for Coordinate<A> {}

    impl<A: Axis> PartialOrd for Coordinate<A> {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
    }

    impl<A: Axis> Ord for Coordinate<A> {
        fn cmp(&self, other: &Self) -> Ordering { self.value.cmp(&other.value) }
    }

    impl<A: Axis> Hash for Coordinate<A> {
        fn hash<H: Hasher>(&self, state: &mut H) { self.value.hash(state); }
    }

    impl<A: Axis> Debug for Coordinate<A> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let axis = type_name::<A>();
            let axis = axis.rsplit("::").next().unwrap_or(axis);
            write!(f, "{axis}({:?})", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{Bottom, Depth, Horizontal, Left, Narrow, Plain, Right, Top,
                               Vertical};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    type H = Coordinate<Horizontal>;
    type V = Coordinate<Vertical>;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(H::default().value(), 0);
        assert_eq!(Coordinate::<Plain>::default(), Coordinate::new(0));
    }

    #[test_case(0, 0)]
    #[test_case(7, -3)]
    #[test_case(-12, 5)]
    #[test_case(i32::MAX - 1, 1)]
    #[test_case(i32::MAX, 1)]
    #[test_case(5, i32::MIN)]
    #[test_case(i32::MIN, i32::MAX)]
    fn test_offset_round_trip(value: i32, delta: i32) {
        let c = H::new(value);
        assert_eq!(c.offset(delta).offset(delta.wrapping_neg()), c);
        assert_eq!(c + delta - delta, c);

        let mut d = c;
        d += delta;
        d -= delta;
        assert_eq!(d, c);
    }

    #[test]
    fn test_offset_wraps_at_the_bounds() {
        assert_eq!(H::new(i32::MAX).offset(1), H::new(i32::MIN));
        assert_eq!(H::new(i32::MIN) - 1, H::new(i32::MAX));
        assert_eq!(V::new(i32::MIN).advance(Top, 1), V::new(i32::MAX));
        assert_eq!(V::new(i32::MAX).advance(Bottom, 1), V::new(i32::MIN));
    }

    #[test]
    fn test_negate() {
        assert_eq!(H::new(4).negate(), H::new(-4));
        assert_eq!(-H::new(-4), H::new(4));
        assert_eq!(-H::new(0), H::new(0));
        assert_eq!(-H::new(i32::MIN), H::new(i32::MIN));
    }

    #[test_case(-3, 1.5, -4)]
    #[test_case(3, 1.5, 4)]
    #[test_case(5, 0.5, 2)]
    #[test_case(-5, 0.5, -2)]
    #[test_case(7, -0.3, -2)]
    fn test_scale_truncates_toward_zero(value: i32, factor: f64, expected: i32) {
        assert_eq!(H::new(value).scale(factor), H::new(expected));
        assert_eq!(H::new(value) * factor, H::new(expected));
        assert_eq!(factor * H::new(value), H::new(expected));
    }

    #[test_case(7, 2.0, 3)]
    #[test_case(-7, 2.0, -3)]
    #[test_case(1, 3.0, 0)]
    fn test_divide_truncates_toward_zero(value: i32, factor: f64, expected: i32) {
        assert_eq!(H::new(value).divide(factor), H::new(expected));
        assert_eq!(H::new(value) / factor, H::new(expected));
    }

    #[test]
    fn test_scale_saturates() {
        let c = Coordinate::<Narrow>::new(100);
        assert_eq!(c.scale(2.0).value(), i8::MAX);
        assert_eq!(c.scale(-2.0).value(), i8::MIN);
    }

    #[test]
    fn test_in_place_ops() {
        let mut c = Coordinate::<Depth>::new(10);
        c += 5;
        assert_eq!(c.value(), 15);
        c -= 20;
        assert_eq!(c.value(), -5);
        c *= 3.0;
        assert_eq!(c.value(), -15);
        c /= 4.0;
        assert_eq!(c.value(), -3);
    }

    #[test]
    fn test_toward() {
        for v in [-9, 0, 1, 42] {
            assert_eq!(H::toward(Right, v), H::new(v));
            assert_eq!(H::toward(Left, v), H::new(-v));
        }
        assert_eq!(V::toward(Top, 2), V::new(-2));
        assert_eq!(H::toward(Left, i32::MIN), H::new(i32::MIN));
        assert_eq!(H::toward(Right, i32::MIN), H::new(i32::MIN));
    }

    #[test_case(1, 2)]
    #[test_case(2, 1)]
    #[test_case(3, 3)]
    #[test_case(-4, 6)]
    fn test_is_farther_than(x: i32, y: i32) {
        assert_eq!(H::new(x).is_farther_than(Right, H::new(y)), x > y);
        assert_eq!(H::new(x).is_farther_than(Left, H::new(y)), x < y);
    }

    #[test]
    fn test_advance() {
        assert_eq!(V::new(0).advance(Top, 1), V::new(-1));
        assert_eq!(V::new(0).advance(Bottom, 1), V::new(1));
        assert_eq!(H::new(10).advance(Left, -2), H::new(12));
    }

    #[test]
    fn test_sense_of_reports_misuse() {
        assert_eq!(H::sense_of(Right::ID), Ok(Sense::Increasing));
        assert_eq!(
            H::sense_of(Top::ID),
            Err(DefinitionError::ForeignEndpoint { endpoint: Top::ID })
        );
        assert_eq!(
            Coordinate::<Plain>::sense_of(Left::ID),
            Err(DefinitionError::MissingDirection)
        );
    }

    #[test]
    fn test_ordering_and_debug() {
        assert!(H::new(1) < H::new(2));
        assert_eq!(H::new(3).max(H::new(-3)), H::new(3));
        assert_eq!(format!("{:?}", H::new(3)), "Horizontal(3)");
    }
}
