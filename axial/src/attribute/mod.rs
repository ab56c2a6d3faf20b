// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Descriptors attached to an axis declaration, and the rules that resolve them.
//!
//! An axis lists any number of [`Attr`] values. [`get_attr()`] filters them by
//! [`AttrSlot`] and [`optional_attr()`] insists on at most one per slot. Both are
//! `const fn`, so an axis declaring two directions or two names is rejected when the
//! axis is first used in code that gets built.

// Attach.
mod attr;
mod attr_list;
mod resolve;

// Re-export.
pub use attr::*;
pub use attr_list::*;
pub use resolve::*;
