// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tags, axes and shapes shared by the unit tests.
//!
//! Some axes here are deliberately malformed. They are only ever passed to the const
//! resolvers at run time, never used to build a [`Coordinate`](crate::Coordinate),
//! since that would fail the build.

use crate::{Orthotope, Point, Vector, axis, tags};

tags! {
    pub struct Left;
    pub struct Right;
    pub struct Top;
    pub struct Bottom;
    pub struct X;
    pub struct Y;
    pub struct Z;
    pub struct OriginA;
    pub struct OriginB;
}

axis!(pub Horizontal: i32, direction(Left => Right), name(X));
axis!(pub Vertical: i32, direction(Top => Bottom), name(Y));
axis!(pub Depth: i32, name(Z));
axis!(pub Plain: i32);
axis!(pub Lateral: i32);
axis!(pub Narrow: i8, direction(Left => Right));

// Malformed.
axis!(pub AlsoX: i32, name(X));
axis!(pub DoublyNamed: i32, name(X), name(Y));
axis!(pub Stuck: i32, direction(Left => Left));

pub type XY = (Horizontal, Vertical);
pub type XYZ = (Horizontal, Vertical, Depth);
pub type PlainPair = (Plain, Lateral);

pub type VecXY = Vector<XY>;
pub type PointA = Point<OriginA, XY>;
pub type PointB = Point<OriginB, XY>;
pub type RectA = Orthotope<OriginA, XY>;
