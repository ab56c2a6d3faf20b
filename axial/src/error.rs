// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two error domains of the crate.
//!
//! | Domain           | Type                | When                                        |
//! | :--------------- | :------------------ | :------------------------------------------ |
//! | Definition       | [`DefinitionError`] | Once per axis or shape, during const eval   |
//! | Value            | [`GeometryError`]   | Constructing a value from runtime data      |
//!
//! A [`DefinitionError`] is produced by the const resolvers ([`AxisSchema::resolve()`],
//! [`ShapeSchema::resolve()`], [`optional_attr()`], ...). When a shape is used in code
//! that gets built, the resolvers run in const evaluation and any error is raised via
//! [`DefinitionError::raise()`], which fails the build with [`DefinitionError::message()`].
//! The same resolvers can be called at run time to inspect a declaration.
//!
//! [`AxisSchema::resolve()`]: crate::AxisSchema::resolve
//! [`ShapeSchema::resolve()`]: crate::ShapeSchema::resolve
//! [`optional_attr()`]: crate::optional_attr

use crate::{AttrSlot, TagId};

/// A structurally invalid axis or shape declaration.
///
/// Every variant is `Copy` and const constructible, since these errors are created and
/// matched inside `const fn` resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum DefinitionError {
    #[error("an axis carries {count} {slot} attributes, at most one is allowed")]
    #[diagnostic(
        code(axial::definition::too_many_attributes),
        help("Remove the extra attributes so that each slot appears at most once")
    )]
    TooManyAttributes { slot: AttrSlot, count: usize },

    #[error("both direction endpoints are `{endpoint}`")]
    #[diagnostic(
        code(axial::definition::degenerate_direction),
        help("A direction needs two distinct endpoint tags, one per orientation")
    )]
    DegenerateDirection { endpoint: TagId },

    #[error("{named} of {len} axes are named, either all or none must be")]
    #[diagnostic(code(axial::definition::partial_naming))]
    PartialNaming { named: usize, len: usize },

    #[error("axis name `{name}` is used more than once in a shape")]
    #[diagnostic(code(axial::definition::duplicate_name))]
    DuplicateName { name: TagId },

    #[error("`{endpoint}` is not an endpoint of this axis")]
    #[diagnostic(
        code(axial::definition::foreign_endpoint),
        help("Use one of the two tags from the axis' direction attribute")
    )]
    ForeignEndpoint { endpoint: TagId },

    #[error("this axis has no direction attribute")]
    #[diagnostic(code(axial::definition::missing_direction))]
    MissingDirection,

    #[error("no axis in this shape is named `{name}`")]
    #[diagnostic(code(axial::definition::unknown_name))]
    UnknownName { name: TagId },

    #[error("a type list holds at most {capacity} entries, {len} were given")]
    #[diagnostic(code(axial::definition::list_capacity_exceeded))]
    ListCapacityExceeded { len: usize, capacity: usize },
}

impl DefinitionError {
    /// Static description of the error, usable from const evaluation where formatting
    /// is not available.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            DefinitionError::TooManyAttributes { .. } => {
                "an axis carries more than one attribute for the same slot"
            }
            DefinitionError::DegenerateDirection { .. } => {
                "the two direction endpoints must be different tags"
            }
            DefinitionError::PartialNaming { .. } => {
                "either every axis of a shape is named or none is"
            }
            DefinitionError::DuplicateName { .. } => {
                "an axis name is used more than once in a shape"
            }
            DefinitionError::ForeignEndpoint { .. } => {
                "the endpoint tag does not belong to this axis' direction"
            }
            DefinitionError::MissingDirection => {
                "direction dependent operation on an axis without a direction"
            }
            DefinitionError::UnknownName { .. } => "no axis in this shape has that name",
            DefinitionError::ListCapacityExceeded { .. } => {
                "too many entries for a fixed capacity type list"
            }
        }
    }

    /// Aborts const evaluation (and therefore the build) with [`Self::message()`].
    ///
    /// # Panics
    ///
    /// Always. At run time this only happens if a resolver result is forced outside of
    /// const evaluation.
    #[track_caller]
    pub const fn raise(self) -> ! { panic!("{}", self.message()) }
}

/// A value that cannot be constructed from the given runtime data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum GeometryError {
    #[error("extent {extent} on axis {axis} is negative")]
    #[diagnostic(
        code(axial::orthotope::negative_extent),
        help("Extents are sizes and are never negative, use zero for an empty region")
    )]
    NegativeExtent { axis: usize, extent: i128 },
}
