// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single axis scalars. An [`Axis`] is declared with [`crate::axis!`], and a
//! [`Coordinate`] is a value on it.

// Attach.
mod axis;
mod coordinate_struct;

// Re-export.
pub use axis::*;
pub use coordinate_struct::*;
