// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Attr, generate_type_list_impl};

generate_type_list_impl!(
    /// An ordered list of [`Attr`]s, the result of filtering an axis' attributes by
    /// slot with [`get_attr()`](crate::get_attr).
    AttrList,
    Attr
);
