// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AxisAt, AxisSet, Coordinate, Lookup, ShapeSchema, SignedIntegral, Tag, TagId};
use std::{fmt::{Debug, Formatter, Result},
          hash::{Hash, Hasher},
          ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign}};

/// An ordered collection of one value per axis of the shape `S`.
///
/// `S` is a tuple of [`Axis`](crate::Axis) types (see [`AxisSet`]). Its naming is
/// validated once into [`Self::SCHEMA`]: either every axis is named with distinct names,
/// or none is. A shape that breaks this rule fails the build as soon as a vector of it is
/// constructed.
///
/// Components can be read:
/// - By name with [`by_name()`], for named shapes. The index is resolved at build time
///   and an unknown name is a build error.
/// - By position with [`by_index()`], which returns a typed [`Coordinate`]. A position
///   past the last axis is a type error.
/// - By a run time position with [`component()`], which returns [`Lookup::NotFound`]
///   when out of range.
///
/// ```
/// use axial::{Vector, Coordinate};
///
/// axial::tags! {
///     pub struct X;
///     pub struct Y;
/// }
/// axial::axis!(pub Horizontal: i32, name(X));
/// axial::axis!(pub Vertical: i32, name(Y));
///
/// let v1 = Vector::<(Horizontal, Vertical)>::new([1, 2]);
/// let v2 = v1 + Vector::new([2, 1]);
/// assert_eq!(v2, Vector::new([3, 3]));
/// assert_eq!(v1.by_name(X), 1);
/// assert_eq!(v1.by_index::<1>(), Coordinate::<Vertical>::new(2));
/// ```
///
/// [`by_name()`]: Self::by_name
/// [`by_index()`]: Self::by_index
/// [`component()`]: Self::component
pub struct Vector<S: AxisSet> {
    values: S::Values,
}

mod constructor {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<S: AxisSet> Vector<S> {
        pub const SCHEMA: ShapeSchema = ShapeSchema::declare(S::AXES);

        /// One raw value per axis, in declaration order.
        #[must_use]
        pub fn new(values: S::Values) -> Self {
            let _schema = Self::SCHEMA;
            Self { values }
        }

        /// One [`Coordinate`] per axis, in declaration order.
        #[must_use]
        pub fn from_coordinates(coordinates: S::Coordinates) -> Self {
            Self::new(S::from_coordinates(coordinates))
        }

        #[must_use]
        pub fn zero() -> Self { Self::new(S::Values::default()) }

        #[must_use]
        pub fn schema() -> ShapeSchema { Self::SCHEMA }

        /// Number of axes in the shape.
        #[must_use]
        pub fn dimensions() -> usize { Self::SCHEMA.len }
    }

    impl<S: AxisSet> Default for Vector<S> {
        fn default() -> Self { Self::zero() }
    }
}

mod access {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<S: AxisSet> Vector<S> {
        const fn resolve_index(name: TagId) -> usize {
            match Self::SCHEMA.index_of(name) {
                Ok(index) => index,
                Err(error) => error.raise(),
            }
        }

        #[must_use]
        pub fn values(&self) -> S::Values { self.values }

        /// The component of the axis named `N`.
        ///
        /// ```compile_fail,E0080
        /// axial::tags! {
        ///     pub struct X;
        ///     pub struct Y;
        ///     pub struct Z;
        /// }
        /// axial::axis!(pub Horizontal: i32, name(X));
        /// axial::axis!(pub Vertical: i32, name(Y));
        ///
        /// let v = axial::Vector::<(Horizontal, Vertical)>::new([1, 2]);
        /// let _ = v.by_name(Z);
        /// ```
        #[must_use]
        pub fn by_name<N: Tag>(&self, _name: N) -> S::Value {
            let index = const { Self::resolve_index(N::ID) };
            self.values.as_ref()[index]
        }

        /// The component at position `I` as a [`Coordinate`] of that axis.
        ///
        /// ```compile_fail
        /// axial::axis!(pub Horizontal: i32);
        /// axial::axis!(pub Vertical: i32);
        ///
        /// let v = axial::Vector::<(Horizontal, Vertical)>::new([1, 2]);
        /// let _ = v.by_index::<2>();
        /// ```
        #[must_use]
        pub fn by_index<const I: usize>(&self) -> Coordinate<<S as AxisAt<I>>::Component>
        where
            S: AxisAt<I>,
        {
            Coordinate::new(self.values.as_ref()[I])
        }

        /// The component at a run time position.
        #[must_use]
        pub fn component(&self, index: usize) -> Lookup<S::Value> {
            self.values.as_ref().get(index).copied().into()
        }
    }
}

mod arithmetic {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<S: AxisSet> Vector<S> {
        fn map(self, f: impl Fn(S::Value) -> S::Value) -> Self {
            let mut values = self.values;
            for it in values.as_mut() {
                *it = f(*it);
            }
            Self::new(values)
        }

        fn zip_with(self, other: Self, f: impl Fn(S::Value, S::Value) -> S::Value) -> Self {
            let mut values = self.values;
            for (lhs, rhs) in values.as_mut().iter_mut().zip(other.values.as_ref()) {
                *lhs = f(*lhs, *rhs);
            }
            Self::new(values)
        }

        #[must_use]
        pub fn negate(self) -> Self { self.map(SignedIntegral::wrapping_neg) }

        /// Scales every component, truncating toward zero like [`Coordinate::scale()`].
        #[must_use]
        pub fn scale(self, factor: f64) -> Self {
            self.map(|it| S::Value::from_f64_truncated(it.to_f64() * factor))
        }

        /// Divides every component, truncating toward zero like
        /// [`Coordinate::divide()`].
        #[must_use]
        pub fn divide(self, factor: f64) -> Self {
            self.map(|it| S::Value::from_f64_truncated(it.to_f64() / factor))
        }
    }

    impl<S: AxisSet> Neg for Vector<S> {
        type Output = Self;

        fn neg(self) -> Self::Output { self.negate() }
    }

    impl<S: AxisSet> Add for Vector<S> {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output { self.zip_with(rhs, SignedIntegral::wrapping_add) }
    }

    impl<S: AxisSet> Sub for Vector<S> {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output { self.zip_with(rhs, SignedIntegral::wrapping_sub) }
    }

    impl<S: AxisSet> AddAssign for Vector<S> {
        fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
    }

    impl<S: AxisSet> SubAssign for Vector<S> {
        fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
    }

    impl<S: AxisSet> Mul<f64> for Vector<S> {
        type Output = Self;

        fn mul(self, rhs: f64) -> Self::Output { self.scale(rhs) }
    }

    impl<S: AxisSet> Mul<Vector<S>> for f64 {
        type Output = Vector<S>;

        fn mul(self, rhs: Vector<S>) -> Self::Output { rhs.scale(self) }
    }

    impl<S: AxisSet> Div<f64> for Vector<S> {
        type Output = Self;

        fn div(self, rhs: f64) -> Self::Output { self.divide(rhs) }
    }

    impl<S: AxisSet> MulAssign<f64> for Vector<S> {
        fn mul_assign(&mut self, rhs: f64) { *self = self.scale(rhs); }
    }

    impl<S: AxisSet> DivAssign<f64> for Vector<S> {
        fn div_assign(&mut self, rhs: f64) { *self = self.divide(rhs); }
    }
}

mod traits {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<S: AxisSet> Clone for Vector<S> {
        fn clone(&self) -> Self { *self }
    }

    impl<S: AxisSet> Copy for Vector<S> {}

    impl<S: AxisSet> PartialEq for Vector<S> {
        fn eq(&self, other: &Self) -> bool { self.values == other.values }
    }

    impl<S: AxisSet> Eq for Vector<S> {}

    impl<S: AxisSet> Hash for Vector<S> {
        fn hash<H: Hasher>(&self, state: &mut H) { self.values.hash(state); }
    }

    /// Named shapes print as `Vector { X: 1, Y: 2 }`, unnamed ones as `Vector([1, 2])`.
    impl<S: AxisSet> Debug for Vector<S> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let schema = Self::SCHEMA;
            if !schema.named {
                return f.debug_tuple("Vector").field(&self.values).finish();
            }
            let mut it = f.debug_struct("Vector");
            for (name, value) in schema.names.iter().zip(self.values.as_ref()) {
                it.field(name.short_label(), value);
            }
            it.finish()
        }
    }
}
