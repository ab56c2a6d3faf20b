// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ordered sequences of tag identities that can be queried during const evaluation.
//!
//! Everything above this module (attributes, axes, shapes) is validated by `const fn`s
//! that walk these lists, which is what turns a malformed declaration into a build
//! error instead of a run time failure.
//!
//! - [`Tag`] and [`TagId`]: identity only markers, declared with [`crate::tags!`].
//! - [`Lookup`]: explicit found / not found result of every query.
//! - [`TagList`]: fixed capacity list of [`TagId`]s. Lists of other elements are
//!   generated with [`crate::generate_type_list_impl!`].

// Attach.
mod lookup;
mod tag;
mod tag_list;
mod type_list_impl_macros;

// Re-export.
pub use lookup::*;
pub use tag::*;
pub use tag_list::*;
pub use type_list_impl_macros::*;
