// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Lookup, Tag, TagId};
use strum_macros::{Display, EnumCount, EnumIter};

/// The kind of descriptor an [`Attr`] fills. Each axis carries at most one attribute
/// per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AttrSlot {
    Direction,
    Name,
}

impl AttrSlot {
    #[must_use]
    pub const fn const_eq(self, other: AttrSlot) -> bool { self as u8 == other as u8 }
}

/// Which way a direction endpoint points along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Sense {
    /// The `to` endpoint, values grow toward it.
    Increasing,
    /// The `from` endpoint, values shrink toward it.
    Decreasing,
}

/// A pair of opposite endpoint tags. Moving toward [`to`](Self::to) increases the
/// value, moving toward [`from`](Self::from) decreases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionAttr {
    pub from: TagId,
    pub to: TagId,
}

impl DirectionAttr {
    #[must_use]
    pub const fn new(from: TagId, to: TagId) -> Self { Self { from, to } }

    /// True when both endpoints are the same tag, which no axis may declare.
    #[must_use]
    pub const fn is_degenerate(self) -> bool { self.from.const_eq(self.to) }

    #[must_use]
    pub const fn sense_of(self, endpoint: TagId) -> Lookup<Sense> {
        if endpoint.const_eq(self.to) {
            Lookup::Found(Sense::Increasing)
        } else if endpoint.const_eq(self.from) {
            Lookup::Found(Sense::Decreasing)
        } else {
            Lookup::NotFound
        }
    }

    #[must_use]
    pub const fn const_eq(self, other: DirectionAttr) -> bool {
        self.from.const_eq(other.from) && self.to.const_eq(other.to)
    }
}

/// The axis identifier used for name based lookup in a [`Vector`](crate::Vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameAttr {
    pub tag: TagId,
}

/// A single descriptor attached to an axis declaration.
///
/// ```
/// use axial::{Attr, AttrSlot};
///
/// axial::tags! {
///     pub struct Left;
///     pub struct Right;
///     pub struct X;
/// }
///
/// let attrs = [Attr::direction::<Left, Right>(), Attr::name::<X>()];
/// assert_eq!(attrs[0].slot(), AttrSlot::Direction);
/// assert_eq!(attrs[1].slot(), AttrSlot::Name);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Direction(DirectionAttr),
    Name(NameAttr),
}

impl Attr {
    /// Direction from `F` (decreasing) to `T` (increasing).
    #[must_use]
    pub const fn direction<F: Tag, T: Tag>() -> Self {
        Attr::Direction(DirectionAttr::new(F::ID, T::ID))
    }

    #[must_use]
    pub const fn name<N: Tag>() -> Self { Attr::Name(NameAttr { tag: N::ID }) }

    #[must_use]
    pub const fn slot(self) -> AttrSlot {
        match self {
            Attr::Direction(_) => AttrSlot::Direction,
            Attr::Name(_) => AttrSlot::Name,
        }
    }

    #[must_use]
    pub const fn const_eq(self, other: Attr) -> bool {
        match (self, other) {
            (Attr::Direction(lhs), Attr::Direction(rhs)) => lhs.const_eq(rhs),
            (Attr::Name(lhs), Attr::Name(rhs)) => lhs.tag.const_eq(rhs.tag),
            _ => false,
        }
    }
}
