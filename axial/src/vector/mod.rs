// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Multi axis values. An [`AxisSet`] is the shape, a [`Vector`] is a value of it.

// Attach.
mod axis_set;
mod vector_struct;

// Re-export.
pub use axis_set::*;
pub use vector_struct::*;
