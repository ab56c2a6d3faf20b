// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Axis aligned regions. See [`Orthotope`].

use crate::{AxisSet, GeometryError, Point, SignedIntegral, Tag, Vector};
use std::{fmt::{Debug, Formatter, Result},
          hash::{Hash, Hasher},
          ops::{Add, Sub}};

/// An axis aligned box in the frame `F`: an anchor [`Point`] plus one extent per axis.
///
/// The region covers `[anchor, anchor + extent)` on every axis. Two rules hold for every
/// stored value:
/// 1. No extent is negative. [`Orthotope::new()`] rejects that with
///    [`GeometryError::NegativeExtent`], it never clamps.
/// 2. If any extent is zero, the value is the canonical [`empty()`] one, with the anchor
///    at the origin and every extent zero. So "first extent is zero", "some extent is
///    zero" and "all extents are zero" all mean the same thing.
///
/// ```
/// use axial::{Orthotope, Point, Vector};
///
/// axial::tags! {
///     pub struct Screen;
/// }
/// axial::axis!(pub Col: i32);
/// axial::axis!(pub Row: i32);
/// type Rect = Orthotope<Screen, (Col, Row)>;
///
/// let Ok(rect) = Rect::new(Point::new([1, 1]), [2, 3]) else { unreachable!() };
/// assert!(rect.contains(&Point::new([2, 3])));
/// assert!(!rect.contains(&Point::new([3, 3])));
/// assert_eq!((rect + Vector::new([1, 2])).anchor(), Point::new([2, 3]));
///
/// // A zero extent collapses the whole region.
/// assert_eq!(Rect::new(Point::new([4, 2]), [0, 1]), Ok(Rect::empty()));
/// assert!(Rect::new(Point::new([4, 2]), [-1, 1]).is_err());
/// ```
///
/// [`empty()`]: Self::empty
pub struct Orthotope<F: Tag, S: AxisSet> {
    anchor: Point<F, S>,
    extents: S::Values,
}

/// A region of the continuous space spanned by the axes of `S`.
pub type ContinuousSet<F, S> = Orthotope<F, S>;

mod constructor {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<F: Tag, S: AxisSet> Orthotope<F, S> {
        /// # Errors
        ///
        /// [`GeometryError::NegativeExtent`] for the first negative extent.
        pub fn new(
            anchor: Point<F, S>,
            extents: S::Values,
        ) -> std::result::Result<Self, GeometryError> {
            if let Some((axis, extent)) = extents
                .as_ref()
                .iter()
                .enumerate()
                .find(|(_, it)| it.is_negative())
            {
                tracing::debug!(
                    message = "📐 Rejected orthotope with a negative extent",
                    axis,
                    extent = %extent
                );
                return Err(GeometryError::NegativeExtent {
                    axis,
                    extent: extent.to_i128(),
                });
            }

            if extents.as_ref().contains(&S::Value::ZERO) {
                tracing::trace!(
                    message = "📐 Zero extent, normalized to the empty orthotope",
                    extents = ?extents
                );
                return Ok(Self::empty());
            }

            Ok(Self { anchor, extents })
        }

        /// Same as [`Self::new()`] with the anchor given as raw values.
        ///
        /// # Errors
        ///
        /// [`GeometryError::NegativeExtent`] for the first negative extent.
        pub fn from_base(
            base: S::Values,
            extents: S::Values,
        ) -> std::result::Result<Self, GeometryError> {
            Self::new(Point::new(base), extents)
        }

        /// The canonical empty region.
        #[must_use]
        pub fn empty() -> Self {
            Self {
                anchor: Point::origin(),
                extents: S::Values::default(),
            }
        }
    }

    impl<F: Tag, S: AxisSet> Default for Orthotope<F, S> {
        fn default() -> Self { Self::empty() }
    }
}

mod access {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<F: Tag, S: AxisSet> Orthotope<F, S> {
        /// Checks the first extent only, the others agree with it.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.extents
                .as_ref()
                .first()
                .is_none_or(|it| *it == S::Value::ZERO)
        }

        #[must_use]
        pub fn anchor(&self) -> Point<F, S> { self.anchor }

        #[must_use]
        pub fn extents(&self) -> S::Values { self.extents }

        /// The extent of the axis named `N`. See [`Vector::by_name()`].
        #[must_use]
        pub fn extent_by_name<N: Tag>(&self, name: N) -> S::Value {
            Vector::<S>::new(self.extents).by_name(name)
        }

        /// True when every component of `point` is in `[anchor, anchor + extent)`.
        /// The empty region contains nothing.
        #[must_use]
        pub fn contains(&self, point: &Point<F, S>) -> bool {
            if self.is_empty() {
                return false;
            }
            let anchor = self.anchor.values();
            let point = point.values();
            anchor
                .as_ref()
                .iter()
                .zip(self.extents.as_ref())
                .zip(point.as_ref())
                .all(|((start, extent), it)| {
                    let start = start.to_i128();
                    let it = it.to_i128();
                    start <= it && it < start + extent.to_i128()
                })
        }
    }
}

mod arithmetic {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<F: Tag, S: AxisSet> Orthotope<F, S> {
        /// Moves the anchor, the extents stay. The empty region stays where it is.
        #[must_use]
        pub fn translate(self, vector: Vector<S>) -> Self {
            if self.is_empty() {
                return self;
            }
            Self {
                anchor: self.anchor + vector,
                extents: self.extents,
            }
        }

        /// Scales the extents, the anchor stays. Truncates toward zero, and a result
        /// with a zero extent is the empty region.
        ///
        /// # Errors
        ///
        /// [`GeometryError::NegativeExtent`] when `factor` is negative and the region is
        /// not empty.
        pub fn scale(self, factor: f64) -> std::result::Result<Self, GeometryError> {
            Self::new(self.anchor, Vector::<S>::new(self.extents).scale(factor).values())
        }

        /// Divides the extents, the anchor stays. See [`Self::scale()`].
        ///
        /// # Errors
        ///
        /// [`GeometryError::NegativeExtent`] when `factor` is negative and the region is
        /// not empty.
        pub fn divide(self, factor: f64) -> std::result::Result<Self, GeometryError> {
            Self::new(self.anchor, Vector::<S>::new(self.extents).divide(factor).values())
        }
    }

    impl<F: Tag, S: AxisSet> Add<Vector<S>> for Orthotope<F, S> {
        type Output = Self;

        fn add(self, rhs: Vector<S>) -> Self::Output { self.translate(rhs) }
    }

    impl<F: Tag, S: AxisSet> Sub<Vector<S>> for Orthotope<F, S> {
        type Output = Self;

        fn sub(self, rhs: Vector<S>) -> Self::Output { self.translate(-rhs) }
    }
}

mod traits {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<F: Tag, S: AxisSet> Clone for Orthotope<F, S> {
        fn clone(&self) -> Self { *self }
    }

    impl<F: Tag, S: AxisSet> Copy for Orthotope<F, S> {}

    /// Anchor and extents both match. `!=` is the plain negation of this.
    impl<F: Tag, S: AxisSet> PartialEq for Orthotope<F, S> {
        fn eq(&self, other: &Self) -> bool {
            self.anchor == other.anchor && self.extents == other.extents
        }
    }

    impl<F: Tag, S: AxisSet> Eq for Orthotope<F, S> {}

    impl<F: Tag, S: AxisSet> Hash for Orthotope<F, S> {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.anchor.hash(state);
            self.extents.hash(state);
        }
    }

    impl<F: Tag, S: AxisSet> Debug for Orthotope<F, S> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if self.is_empty() {
                return write!(f, "Orthotope(empty)");
            }
            f.debug_struct("Orthotope")
                .field("anchor", &self.anchor)
                .field("extents", &self.extents)
                .finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{PointA, RectA, VecXY, X, Y};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn rect(anchor: [i32; 2], extents: [i32; 2]) -> RectA {
        match RectA::new(PointA::new(anchor), extents) {
            Ok(it) => it,
            Err(error) => panic!("{error}"),
        }
    }

    #[test]
    fn test_empty() {
        let empty = RectA::empty();
        assert!(empty.is_empty());
        assert_eq!(empty, RectA::default());
        assert_eq!(empty.anchor(), PointA::origin());
        assert_eq!(empty.extents(), [0, 0]);
        assert!(!rect([0, 0], [1, 1]).is_empty());
    }

    #[test_case([1, 5], [5, 0])]
    #[test_case([4, 2], [0, 1])]
    #[test_case([0, 1], [0, 1])]
    #[test_case([-3, -3], [0, 0])]
    #[test_case([0, 0], [0, 13])]
    fn test_zero_extent_normalizes(anchor: [i32; 2], extents: [i32; 2]) {
        let it = rect(anchor, extents);
        assert_eq!(it, RectA::empty());
        assert!(it.is_empty());
        assert_eq!(it.anchor().values(), [0, 0]);
        assert_eq!(it.extents(), [0, 0]);
    }

    #[test_case([-1, 1], 0, -1)]
    #[test_case([1, -2], 1, -2)]
    #[test_case([-5, -6], 0, -5)]
    #[test_case([0, -1], 1, -1)]
    fn test_negative_extent_is_an_error(extents: [i32; 2], axis: usize, extent: i128) {
        assert_eq!(
            RectA::new(PointA::new([3, 3]), extents),
            Err(GeometryError::NegativeExtent { axis, extent })
        );
    }

    #[test]
    fn test_from_base() {
        assert_eq!(RectA::from_base([1, 2], [3, 4]), Ok(rect([1, 2], [3, 4])));
        assert_eq!(RectA::from_base([4, 2], [0, 1]), Ok(RectA::empty()));
    }

    #[test]
    fn test_accessors() {
        let it = rect([1, 2], [3, 4]);
        assert_eq!(it.anchor(), PointA::new([1, 2]));
        assert_eq!(it.extents(), [3, 4]);
        assert_eq!(it.extent_by_name(X), 3);
        assert_eq!(it.extent_by_name(Y), 4);
    }

    #[test]
    fn test_translate() {
        let it = rect([1, 1], [1, 1]);
        assert_eq!(it + VecXY::new([1, 2]), rect([2, 3], [1, 1]));
        assert_eq!(it.translate(VecXY::new([1, 2])), rect([2, 3], [1, 1]));
        assert_eq!(it - VecXY::new([1, 1]), rect([0, 0], [1, 1]));
    }

    #[test_case([1, 2])]
    #[test_case([-100, 7])]
    #[test_case([0, 0])]
    fn test_translate_empty_is_a_no_op(vector: [i32; 2]) {
        let v = VecXY::new(vector);
        assert_eq!(RectA::empty() + v, RectA::empty());
        assert_eq!(RectA::empty() - v, RectA::empty());
    }

    #[test]
    fn test_scale_extents() {
        assert_eq!(rect([1, 1], [1, 2]).scale(2.0), Ok(rect([1, 1], [2, 4])));
        assert_eq!(rect([1, 1], [3, 2]).scale(0.5), Ok(rect([1, 1], [1, 1])));
        assert_eq!(rect([1, 1], [3, 2]).divide(2.0), Ok(rect([1, 1], [1, 1])));
        assert_eq!(rect([1, 1], [3, 1]).scale(0.5), Ok(RectA::empty()));
        assert_eq!(RectA::empty().scale(-2.0), Ok(RectA::empty()));
        assert_eq!(
            rect([1, 1], [3, 2]).scale(-1.0),
            Err(GeometryError::NegativeExtent {
                axis: 0,
                extent: -3,
            })
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let it = rect([1, 1], [2, 3]);
        assert!(it.contains(&PointA::new([1, 1])));
        assert!(it.contains(&PointA::new([2, 3])));
        assert!(!it.contains(&PointA::new([3, 1])));
        assert!(!it.contains(&PointA::new([1, 4])));
        assert!(!it.contains(&PointA::new([0, 2])));
        assert!(!RectA::empty().contains(&PointA::origin()));
    }

    #[test]
    fn test_contains_does_not_overflow() {
        let it = rect([i32::MAX - 1, 0], [i32::MAX, 1]);
        assert!(it.contains(&PointA::new([i32::MAX, 0])));
    }

    #[test]
    fn test_equality() {
        let it = rect([1, 1], [2, 2]);
        assert!(it == rect([1, 1], [2, 2]));
        assert!(it != rect([1, 1], [2, 3]));
        assert!(it != rect([0, 1], [2, 2]));
        assert!(!(it != rect([1, 1], [2, 2])));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", RectA::empty()), "Orthotope(empty)");
        assert_eq!(
            format!("{:?}", rect([1, 2], [3, 4])),
            "Orthotope { anchor: Point<OriginA>(Vector { X: 1, Y: 2 }), extents: [3, 4] }"
        );
    }
}
