// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Attr, AttrSlot, DefinitionError, DirectionAttr, Lookup, Sense, SignedIntegral,
            TagId, optional_attr};

/// One independent dimension of a coordinate system.
///
/// An axis is a marker type. Its [`Value`](Self::Value) is the signed integral type of
/// every [`Coordinate`](crate::Coordinate) on it, and [`ATTRS`](Self::ATTRS) lists its
/// descriptors: at most one [`Attr::Direction`] and at most one [`Attr::Name`]. Use the
/// [`crate::axis!`] macro rather than implementing this by hand.
///
/// The attributes are checked by [`AxisSchema::declare()`] the first time a
/// [`Coordinate`](crate::Coordinate) of the axis is used in code that gets built.
pub trait Axis: 'static {
    type Value: SignedIntegral;
    const ATTRS: &'static [Attr] = &[];
}

/// The resolved descriptors of an [`Axis`].
///
/// Constructing a coordinate of a malformed axis fails the build. An axis takes at most
/// one name:
///
/// ```compile_fail,E0080
/// axial::tags! {
///     pub struct X;
///     pub struct Y;
/// }
/// axial::axis!(pub Horizontal: i32, name(X), name(Y));
///
/// let _ = axial::Coordinate::<Horizontal>::new(0);
/// ```
///
/// At most one direction:
///
/// ```compile_fail,E0080
/// axial::tags! {
///     pub struct Left;
///     pub struct Right;
///     pub struct Up;
///     pub struct Down;
/// }
/// axial::axis!(pub Horizontal: i32, direction(Left => Right), direction(Up => Down));
///
/// let _ = axial::Coordinate::<Horizontal>::new(0);
/// ```
///
/// And a direction needs two different endpoints:
///
/// ```compile_fail,E0080
/// axial::tags! {
///     pub struct Left;
/// }
/// axial::axis!(pub Horizontal: i32, direction(Left => Left));
///
/// let _ = axial::Coordinate::<Horizontal>::new(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSchema {
    pub direction: Lookup<DirectionAttr>,
    pub name: Lookup<TagId>,
}

impl AxisSchema {
    /// Resolves an axis' attribute list.
    ///
    /// # Errors
    ///
    /// - [`DefinitionError::TooManyAttributes`] for a second direction or name.
    /// - [`DefinitionError::DegenerateDirection`] when `from` and `to` are the same tag.
    /// - [`DefinitionError::ListCapacityExceeded`] for an absurdly long attribute list.
    pub const fn resolve(attrs: &[Attr]) -> Result<Self, DefinitionError> {
        let direction = match optional_attr(AttrSlot::Direction, attrs) {
            Ok(it) => it.direction(),
            Err(error) => return Err(error),
        };
        if let Lookup::Found(it) = direction {
            if it.is_degenerate() {
                return Err(DefinitionError::DegenerateDirection { endpoint: it.from });
            }
        }
        let name = match optional_attr(AttrSlot::Name, attrs) {
            Ok(it) => it.name(),
            Err(error) => return Err(error),
        };
        Ok(Self { direction, name })
    }

    /// Same as [`Self::resolve()`], but an invalid declaration aborts const evaluation.
    ///
    /// # Panics
    ///
    /// On any [`DefinitionError`]. In a `const` context that is a build error.
    #[must_use]
    pub const fn declare(attrs: &[Attr]) -> Self {
        match Self::resolve(attrs) {
            Ok(it) => it,
            Err(error) => error.raise(),
        }
    }

    #[must_use]
    pub const fn has_direction(self) -> bool { self.direction.is_found() }

    #[must_use]
    pub const fn is_named(self) -> bool { self.name.is_found() }

    /// Which way `endpoint` points along this axis.
    ///
    /// # Errors
    ///
    /// - [`DefinitionError::MissingDirection`] when the axis has no direction.
    /// - [`DefinitionError::ForeignEndpoint`] when `endpoint` is neither `from` nor `to`.
    pub const fn sense_of(self, endpoint: TagId) -> Result<Sense, DefinitionError> {
        let Lookup::Found(direction) = self.direction else {
            return Err(DefinitionError::MissingDirection);
        };
        match direction.sense_of(endpoint) {
            Lookup::Found(sense) => Ok(sense),
            Lookup::NotFound => Err(DefinitionError::ForeignEndpoint { endpoint }),
        }
    }
}

/// Declares an [`Axis`] marker type.
///
/// The value type comes after the colon. Attributes follow as a comma separated list of
/// `direction(From => To)` and `name(Tag)`, where `From`, `To` and `Tag` are
/// [`Tag`](crate::Tag) types.
///
/// ```
/// use axial::{Axis, AxisSchema, Coordinate, Sense, Tag};
///
/// axial::tags! {
///     pub struct Up;
///     pub struct Down;
///     pub struct Y;
/// }
///
/// axial::axis!(
///     /// Screen rows grow downward.
///     pub Row: i32, direction(Up => Down), name(Y)
/// );
///
/// assert_eq!(Coordinate::<Row>::sense_of(Down::ID), Ok(Sense::Increasing));
/// assert!(AxisSchema::declare(Row::ATTRS).is_named());
/// assert_eq!(Coordinate::<Row>::new(0).advance(Up, 2).value(), -2);
/// ```
#[macro_export]
macro_rules! axis {
    (@attr direction($from:ty => $to:ty)) => {
        $crate::Attr::direction::<$from, $to>()
    };
    (@attr name($name:ty)) => {
        $crate::Attr::name::<$name>()
    };
    (
        $(#[$meta:meta])*
        $vis:vis $axis:ident : $value:ty $(, $kind:ident $args:tt)* $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $axis;

        impl $crate::Axis for $axis {
            type Value = $value;
            const ATTRS: &'static [$crate::Attr] = &[$($crate::axis!(@attr $kind $args)),*];
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tag,
                test_fixtures::{Bottom, Depth, DoublyNamed, Horizontal, Left, Plain, Right,
                                Stuck, Top, Vertical, X, Y, Z}};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_attributes() {
        assert_eq!(
            AxisSchema::resolve(Horizontal::ATTRS),
            Ok(AxisSchema {
                direction: Lookup::Found(DirectionAttr::new(Left::ID, Right::ID)),
                name: Lookup::Found(X::ID),
            })
        );
        assert_eq!(
            AxisSchema::resolve(Depth::ATTRS),
            Ok(AxisSchema {
                direction: Lookup::NotFound,
                name: Lookup::Found(Z::ID),
            })
        );
        let plain = AxisSchema::declare(Plain::ATTRS);
        assert!(!plain.has_direction());
        assert!(!plain.is_named());
    }

    #[test]
    fn test_attribute_order_does_not_matter() {
        let reversed = [Attr::name::<Y>(), Attr::direction::<Top, Bottom>()];
        assert_eq!(
            AxisSchema::resolve(&reversed),
            AxisSchema::resolve(Vertical::ATTRS)
        );
    }

    #[test]
    fn test_resolve_rejects_duplicate_slots() {
        assert_eq!(
            AxisSchema::resolve(DoublyNamed::ATTRS),
            Err(DefinitionError::TooManyAttributes {
                slot: AttrSlot::Name,
                count: 2,
            })
        );
        let two_directions = [
            Attr::direction::<Left, Right>(),
            Attr::name::<X>(),
            Attr::direction::<Top, Bottom>(),
        ];
        assert_eq!(
            AxisSchema::resolve(&two_directions),
            Err(DefinitionError::TooManyAttributes {
                slot: AttrSlot::Direction,
                count: 2,
            })
        );
    }

    #[test]
    fn test_resolve_rejects_degenerate_direction() {
        assert_eq!(
            AxisSchema::resolve(Stuck::ATTRS),
            Err(DefinitionError::DegenerateDirection { endpoint: Left::ID })
        );
    }

    #[test]
    fn test_sense_of() {
        let schema = AxisSchema::declare(Vertical::ATTRS);
        assert_eq!(schema.sense_of(Bottom::ID), Ok(Sense::Increasing));
        assert_eq!(schema.sense_of(Top::ID), Ok(Sense::Decreasing));
        assert_eq!(
            schema.sense_of(Right::ID),
            Err(DefinitionError::ForeignEndpoint { endpoint: Right::ID })
        );
        assert_eq!(
            AxisSchema::declare(Depth::ATTRS).sense_of(Top::ID),
            Err(DefinitionError::MissingDirection)
        );
    }

    #[test]
    #[should_panic(expected = "an axis carries more than one attribute for the same slot")]
    fn test_declare_raises() { let _unused = AxisSchema::declare(DoublyNamed::ATTRS); }
}
