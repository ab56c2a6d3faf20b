// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Frame anchored positions. See [`Point`].

use crate::{AxisAt, AxisSet, Coordinate, Lookup, Tag, Vector};
use std::{any::type_name,
          fmt::{Debug, Formatter, Result},
          hash::{Hash, Hasher},
          marker::PhantomData,
          ops::{Add, AddAssign, Sub, SubAssign}};

/// A position in the frame `F`, with one component per axis of the shape `S`.
///
/// The frame is a [`Tag`] carried in the type, so points of different frames never
/// combine: `Point<OriginA, S> - Point<OriginB, S>` does not compile. Points and
/// [`Vector`]s relate the usual way:
///
/// | Expression          | Result   |
/// | :------------------ | :------- |
/// | `point + vector`    | `Point`  |
/// | `vector + point`    | `Point`  |
/// | `point - vector`    | `Point`  |
/// | `point_a - point_b` | `Vector` |
///
/// `p.displacement_to(q)` is `p - q`, the vector that takes `q` to `p`.
///
/// ```
/// use axial::{Point, Vector};
///
/// axial::tags! {
///     pub struct Screen;
///     pub struct X;
///     pub struct Y;
/// }
/// axial::axis!(pub Horizontal: i32, name(X));
/// axial::axis!(pub Vertical: i32, name(Y));
/// type Pos = Point<Screen, (Horizontal, Vertical)>;
///
/// let pa = Pos::new([1, 2]);
/// let moved = pa.translate(Vector::new([1, 0]));
/// assert_eq!(moved.by_name(X), 2);
/// assert_eq!(pa.displacement_to(Pos::new([1, 1])), Vector::new([0, 1]));
/// assert_eq!(moved - pa, moved.displacement_to(pa));
/// assert_eq!(moved - pa + pa, moved);
/// ```
///
/// Points anchored in different frames do not subtract:
///
/// ```compile_fail
/// use axial::Point;
///
/// axial::tags! {
///     pub struct Screen;
///     pub struct Window;
/// }
/// axial::axis!(pub Horizontal: i32);
/// axial::axis!(pub Vertical: i32);
///
/// let on_screen = Point::<Screen, (Horizontal, Vertical)>::new([1, 2]);
/// let in_window = Point::<Window, (Horizontal, Vertical)>::new([1, 2]);
/// let _ = on_screen - in_window;
/// ```
pub struct Point<F: Tag, S: AxisSet> {
    vector: Vector<S>,
    frame: PhantomData<F>,
}

mod constructor {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<F: Tag, S: AxisSet> Point<F, S> {
        #[must_use]
        pub fn new(values: S::Values) -> Self { Self::from_vector(Vector::new(values)) }

        /// The point at `vector` from the frame's origin.
        #[must_use]
        pub fn from_vector(vector: Vector<S>) -> Self {
            Self {
                vector,
                frame: PhantomData,
            }
        }

        #[must_use]
        pub fn from_coordinates(coordinates: S::Coordinates) -> Self {
            Self::from_vector(Vector::from_coordinates(coordinates))
        }

        #[must_use]
        pub fn origin() -> Self { Self::from_vector(Vector::zero()) }
    }

    impl<F: Tag, S: AxisSet> Default for Point<F, S> {
        fn default() -> Self { Self::origin() }
    }
}

mod access {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<F: Tag, S: AxisSet> Point<F, S> {
        /// The offset of this point from the frame's origin.
        #[must_use]
        pub fn vector(&self) -> Vector<S> { self.vector }

        #[must_use]
        pub fn values(&self) -> S::Values { self.vector.values() }

        /// See [`Vector::by_name()`].
        #[must_use]
        pub fn by_name<N: Tag>(&self, name: N) -> S::Value { self.vector.by_name(name) }

        /// See [`Vector::by_index()`].
        #[must_use]
        pub fn by_index<const I: usize>(&self) -> Coordinate<<S as AxisAt<I>>::Component>
        where
            S: AxisAt<I>,
        {
            self.vector.by_index::<I>()
        }

        #[must_use]
        pub fn component(&self, index: usize) -> Lookup<S::Value> {
            self.vector.component(index)
        }
    }
}

mod arithmetic {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<F: Tag, S: AxisSet> Point<F, S> {
        #[must_use]
        pub fn translate(self, vector: Vector<S>) -> Self {
            Self::from_vector(self.vector + vector)
        }

        /// `self - other`, the vector that, added to `other`, gives `self`.
        #[must_use]
        pub fn displacement_to(self, other: Self) -> Vector<S> { self.vector - other.vector }
    }

    impl<F: Tag, S: AxisSet> Add<Vector<S>> for Point<F, S> {
        type Output = Self;

        fn add(self, rhs: Vector<S>) -> Self::Output { self.translate(rhs) }
    }

    impl<F: Tag, S: AxisSet> Add<Point<F, S>> for Vector<S> {
        type Output = Point<F, S>;

        fn add(self, rhs: Point<F, S>) -> Self::Output { rhs.translate(self) }
    }

    impl<F: Tag, S: AxisSet> Sub<Vector<S>> for Point<F, S> {
        type Output = Self;

        fn sub(self, rhs: Vector<S>) -> Self::Output { self.translate(-rhs) }
    }

    impl<F: Tag, S: AxisSet> Sub for Point<F, S> {
        type Output = Vector<S>;

        fn sub(self, rhs: Self) -> Self::Output { self.displacement_to(rhs) }
    }

    impl<F: Tag, S: AxisSet> AddAssign<Vector<S>> for Point<F, S> {
        fn add_assign(&mut self, rhs: Vector<S>) { self.vector += rhs; }
    }

    impl<F: Tag, S: AxisSet> SubAssign<Vector<S>> for Point<F, S> {
        fn sub_assign(&mut self, rhs: Vector<S>) { self.vector -= rhs; }
    }
}

mod traits {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<F: Tag, S: AxisSet> Clone for Point<F, S> {
        fn clone(&self) -> Self { *self }
    }

    impl<F: Tag, S: AxisSet> Copy for Point<F, S> {}

    impl<F: Tag, S: AxisSet> PartialEq for Point<F, S> {
        fn eq(&self, other: &Self) -> bool { self.vector == other.vector }
    }

    impl<F: Tag, S: AxisSet> Eq for Point<F, S> {}

    impl<F: Tag, S: AxisSet> Hash for Point<F, S> {
        fn hash<H: Hasher>(&self, state: &mut H) { self.vector.hash(state); }
    }

    impl<F: Tag, S: AxisSet> Debug for Point<F, S> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let frame = type_name::<F>();
            let frame = frame.rsplit("::").next().unwrap_or(frame);
            write!(f, "Point<{frame}>({:?})", self.vector)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{Horizontal, PointA, PointB, VecXY, X, Y};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_construction() {
        let pa = PointA::new([1, 2]);
        assert_eq!(pa, PointA::from_vector(VecXY::new([1, 2])));
        assert_eq!(
            pa,
            PointA::from_coordinates((Coordinate::new(1), Coordinate::new(2)))
        );
        assert_eq!(pa.values(), [1, 2]);
        assert_eq!(pa.vector(), VecXY::new([1, 2]));
        assert_eq!(PointA::origin(), PointA::default());
        assert_eq!(PointB::origin().values(), [0, 0]);
    }

    #[test]
    fn test_translate() {
        let pa = PointA::new([1, 2]);
        assert_eq!(pa.translate(VecXY::new([1, 0])).by_name(X), 2);
        assert_eq!(pa + VecXY::new([1, 0]), PointA::new([2, 2]));
        assert_eq!(VecXY::new([1, 0]) + pa, PointA::new([2, 2]));
        assert_eq!(pa - VecXY::new([1, 1]), PointA::new([0, 1]));
    }

    #[test_case([1, 2], [3, -4])]
    #[test_case([0, 0], [0, 0])]
    #[test_case([-7, 9], [-1, -1])]
    #[test_case([i32::MAX, 0], [1, 0])]
    #[test_case([i32::MIN, i32::MAX], [i32::MIN, i32::MIN])]
    fn test_translate_round_trip(point: [i32; 2], vector: [i32; 2]) {
        let p = PointA::new(point);
        let v = VecXY::new(vector);
        assert_eq!(p.translate(v).translate(v.negate()), p);

        let mut q = p;
        q += v;
        q -= v;
        assert_eq!(q, p);
    }

    #[test_case([1, 2], [4, 6])]
    #[test_case([-3, 0], [5, -5])]
    fn test_displacement(from: [i32; 2], to: [i32; 2]) {
        let p1 = PointA::new(from);
        let p2 = PointA::new(to);
        assert_eq!(p1.displacement_to(p2), p2.displacement_to(p1).negate());
        assert_eq!(p2 + p1.displacement_to(p2), p1);
        assert_eq!(p2 - p1, p2.displacement_to(p1));
        assert_eq!(p2 - p1 + p1, p2);
    }

    #[test]
    fn test_displacement_is_self_minus_other() {
        let pa = PointA::new([1, 2]);
        assert_eq!(pa.displacement_to(PointA::new([1, 1])), VecXY::new([0, 1]));
        assert_eq!(pa - PointA::new([1, 1]), VecXY::new([0, 1]));
        assert_eq!(PointA::new([1, 1]).displacement_to(pa), VecXY::new([0, -1]));
    }

    #[test]
    fn test_access_delegates_to_vector() {
        let pa = PointA::new([5, 6]);
        assert_eq!(pa.by_name(Y), 6);
        let x: Coordinate<Horizontal> = pa.by_index::<0>();
        assert_eq!(x.value(), 5);
        assert_eq!(pa.component(1), Lookup::Found(6));
        assert_eq!(pa.component(2), Lookup::NotFound);
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", PointA::new([1, 2])),
            "Point<OriginA>(Vector { X: 1, Y: 2 })"
        );
    }
}
