// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # axial
//!
//! Dimensionally safe integer geometry. Axis identity, orientation and naming are part
//! of every value's type, so a horizontal coordinate can't be passed where a vertical
//! one is expected, a point from one frame can't be subtracted from a point in another,
//! and "move left" can't be applied to an axis that has no notion of left.
//!
//! ## The building blocks
//!
//! | Type           | What it is                                                   |
//! | :------------- | :----------------------------------------------------------- |
//! | [`Tag`]        | A data-less marker: an axis name, an endpoint, or a frame    |
//! | [`Axis`]       | A dimension with a signed integral value type and attributes |
//! | [`Coordinate`] | A scalar on one axis                                         |
//! | [`Vector`]     | One value per axis of a shape (a tuple of axes)              |
//! | [`Point`]      | A vector anchored in a frame                                 |
//! | [`Orthotope`]  | An axis aligned box: an anchor point plus extents            |
//!
//! ## Build time validation
//!
//! Declarations are checked once per axis or shape by `const fn` resolvers, not once per
//! value. When a declaration is invalid the build fails with a [`DefinitionError`]
//! message:
//! - an axis with two directions or two names;
//! - a direction whose two endpoints are the same tag;
//! - a shape mixing named and unnamed axes, or naming two axes the same;
//! - a direction dependent call ([`Coordinate::toward()`] and friends) with an endpoint
//!   that is foreign to the axis, or on an axis with no direction;
//! - [`Vector::by_name()`] with a name that isn't in the shape.
//!
//! Value types that are not signed integers, [`Vector::by_index()`] past the last axis,
//! and mixing frames or shapes are plain type errors.
//!
//! The only error that can happen at run time is [`GeometryError::NegativeExtent`], when
//! an [`Orthotope`] is built from a negative extent.
//!
//! ## Example
//!
//! ```
//! use axial::{Coordinate, Orthotope, Point, Vector};
//!
//! axial::tags! {
//!     pub struct Left;
//!     pub struct Right;
//!     pub struct Top;
//!     pub struct Bottom;
//!     pub struct X;
//!     pub struct Y;
//!     pub struct Screen;
//! }
//!
//! axial::axis!(pub Horizontal: i32, direction(Left => Right), name(X));
//! axial::axis!(pub Vertical: i32, direction(Top => Bottom), name(Y));
//!
//! type XY = (Horizontal, Vertical);
//!
//! // Scalars.
//! let up = Coordinate::<Vertical>::new(0).advance(Top, 1);
//! assert_eq!(up.value(), -1);
//! assert!(Coordinate::<Horizontal>::new(2).is_farther_than(Right, Coordinate::new(1)));
//!
//! // Vectors and points.
//! let v1 = Vector::<XY>::new([1, 2]);
//! assert_eq!(v1 + Vector::new([2, 1]), Vector::new([3, 3]));
//! assert_eq!(v1.by_name(Y), 2);
//! let pa = Point::<Screen, XY>::new([1, 2]);
//! assert_eq!(pa.translate(Vector::new([1, 0])).by_name(X), 2);
//!
//! // Regions collapse to the empty value when any extent is zero.
//! let empty = Orthotope::<Screen, XY>::new(Point::new([1, 5]), [5, 0]);
//! assert_eq!(empty, Ok(Orthotope::empty()));
//! ```
//!
//! Using an axis wrongly does not compile. For example, with the axes above:
//!
//! ```compile_fail,E0080
//! # axial::tags! { pub struct Left; pub struct Right; pub struct Top; pub struct Bottom; }
//! # axial::axis!(pub Horizontal: i32, direction(Left => Right));
//! // `Top` is not an endpoint of `Horizontal`.
//! let _ = axial::Coordinate::<Horizontal>::toward(Top, 1);
//! ```
//!
//! ```compile_fail
//! # axial::tags! { pub struct X; }
//! // Unsigned value types are rejected.
//! axial::axis!(pub Count: u32, name(X));
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide a flat public API).
pub mod attribute;
pub mod coordinate;
pub mod error;
pub mod numeric;
pub mod orthotope;
pub mod point;
pub mod type_list;
pub mod vector;

#[cfg(test)]
mod test_fixtures;

// Re-export.
pub use attribute::*;
pub use coordinate::*;
pub use error::*;
pub use numeric::*;
pub use orthotope::*;
pub use point::*;
pub use type_list::*;
pub use vector::*;
