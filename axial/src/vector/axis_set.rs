// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Axis, AxisSchema, Coordinate, DefinitionError, Lookup, MAX_LIST_LEN,
            SignedIntegral, TagId, TagList};
use std::{fmt::Debug, hash::Hash};

/// An ordered set of axes that share one value type: a tuple of 1 to 6 [`Axis`] types.
///
/// This is the shape of a [`Vector`](crate::Vector), [`Point`](crate::Point) or
/// [`Orthotope`](crate::Orthotope). Mixing value types, for example an `i32` axis with
/// an `i64` axis, does not satisfy the trait bounds.
pub trait AxisSet: 'static {
    type Value: SignedIntegral;

    /// One raw value per axis, in declaration order.
    type Values: Copy
        + Debug
        + Default
        + Eq
        + Hash
        + AsRef<[Self::Value]>
        + AsMut<[Self::Value]>;

    /// A tuple with one [`Coordinate`] per axis.
    type Coordinates;

    /// The resolved schema of each axis, in declaration order.
    const AXES: &'static [AxisSchema];

    fn from_coordinates(coordinates: Self::Coordinates) -> Self::Values;
}

/// The axis at position `I` of an [`AxisSet`]. Only implemented for `I` less than the
/// number of axes, so an out of range position is a type error.
pub trait AxisAt<const I: usize>: AxisSet {
    type Component: Axis<Value = Self::Value>;
}

macro_rules! generate_axis_set_impl {
    (@at $list:tt; $($component:ident @ $index:tt),+) => {
        $(generate_axis_set_impl!(@at_one $list; $component @ $index);)+
    };

    (@at_one [$head:ident $(, $axis:ident)*]; $component:ident @ $index:tt) => {
        impl<$head: Axis $(, $axis: Axis<Value = $head::Value>)*> AxisAt<$index>
            for ($head, $($axis,)*)
        {
            type Component = $component;
        }
    };

    (
        /* Number of axes */ $len:literal;
        /* Axis type params and their positions */
        $head:ident @ $head_index:tt $(, $axis:ident @ $index:tt)*
    ) => {
        impl<$head: Axis $(, $axis: Axis<Value = $head::Value>)*> AxisSet
            for ($head, $($axis,)*)
        {
            type Value = $head::Value;
            type Values = [$head::Value; $len];
            type Coordinates = (Coordinate<$head>, $(Coordinate<$axis>,)*);

            const AXES: &'static [AxisSchema] =
                &[Coordinate::<$head>::SCHEMA $(, Coordinate::<$axis>::SCHEMA)*];

            fn from_coordinates(coordinates: Self::Coordinates) -> Self::Values {
                [coordinates.$head_index.value() $(, coordinates.$index.value())*]
            }
        }

        generate_axis_set_impl!(
            @at [$head $(, $axis)*];
            $head @ $head_index $(, $axis @ $index)*
        );
    };
}

generate_axis_set_impl!(1; A0 @ 0);
generate_axis_set_impl!(2; A0 @ 0, A1 @ 1);
generate_axis_set_impl!(3; A0 @ 0, A1 @ 1, A2 @ 2);
generate_axis_set_impl!(4; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3);
generate_axis_set_impl!(5; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4);
generate_axis_set_impl!(6; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5);

/// The validated naming of an [`AxisSet`].
///
/// Either every axis is named and the names are pairwise distinct, or no axis is named.
/// The names are kept in declaration order, so the position of a name is the index of
/// its axis.
///
/// A shape that names only some of its axes fails the build:
///
/// ```compile_fail,E0080
/// axial::tags! {
///     pub struct X;
/// }
/// axial::axis!(pub Horizontal: i32, name(X));
/// axial::axis!(pub Vertical: i32);
///
/// let _ = axial::Vector::<(Horizontal, Vertical)>::new([1, 2]);
/// ```
///
/// So does one that uses a name twice:
///
/// ```compile_fail,E0080
/// axial::tags! {
///     pub struct X;
/// }
/// axial::axis!(pub Horizontal: i32, name(X));
/// axial::axis!(pub Vertical: i32, name(X));
///
/// let _ = axial::Vector::<(Horizontal, Vertical)>::new([1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSchema {
    pub len: usize,
    pub names: TagList,
    pub named: bool,
}

impl ShapeSchema {
    /// Validates the axes of a shape.
    ///
    /// # Errors
    ///
    /// - [`DefinitionError::PartialNaming`] when some but not all axes are named.
    /// - [`DefinitionError::DuplicateName`] when two axes share a name.
    /// - [`DefinitionError::ListCapacityExceeded`] for more than [`MAX_LIST_LEN`] axes.
    pub const fn resolve(axes: &[AxisSchema]) -> Result<Self, DefinitionError> {
        if axes.len() > MAX_LIST_LEN {
            return Err(DefinitionError::ListCapacityExceeded {
                len: axes.len(),
                capacity: MAX_LIST_LEN,
            });
        }

        let mut names = TagList::EMPTY;
        let mut index = 0;
        while index < axes.len() {
            if let Lookup::Found(name) = axes[index].name {
                names = match names.push(name) {
                    Ok(it) => it,
                    Err(error) => return Err(error),
                };
            }
            index += 1;
        }

        let named = names.size();
        if named != 0 && named != axes.len() {
            return Err(DefinitionError::PartialNaming {
                named,
                len: axes.len(),
            });
        }
        if let Lookup::Found(name) = names.first_duplicate() {
            return Err(DefinitionError::DuplicateName { name });
        }

        Ok(Self {
            len: axes.len(),
            names,
            named: named != 0,
        })
    }

    /// Same as [`Self::resolve()`], but an invalid shape aborts const evaluation.
    ///
    /// # Panics
    ///
    /// On any [`DefinitionError`]. In a `const` context that is a build error.
    #[must_use]
    pub const fn declare(axes: &[AxisSchema]) -> Self {
        match Self::resolve(axes) {
            Ok(it) => it,
            Err(error) => error.raise(),
        }
    }

    /// Position of the axis called `name`.
    ///
    /// # Errors
    ///
    /// [`DefinitionError::UnknownName`] when no axis has that name, which is always the
    /// case for an unnamed shape.
    pub const fn index_of(self, name: TagId) -> Result<usize, DefinitionError> {
        match self.names.position(name) {
            Lookup::Found(index) => Ok(index),
            Lookup::NotFound => Err(DefinitionError::UnknownName { name }),
        }
    }
}
