// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          hash::{Hash, Hasher}};

/// Identity of a [`Tag`] type, comparable during const evaluation.
///
/// The label is the module qualified name of the tag type (see [`crate::tags!`]), so two
/// tags only compare equal when they are the same declaration.
#[derive(Debug, Clone, Copy)]
pub struct TagId {
    label: &'static str,
}

impl TagId {
    #[must_use]
    pub const fn new(label: &'static str) -> Self { Self { label } }

    #[must_use]
    pub const fn label(self) -> &'static str { self.label }

    /// The label without its module path.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        self.label.rsplit("::").next().unwrap_or(self.label)
    }

    /// Equality that can run inside `const fn`.
    #[must_use]
    pub const fn const_eq(self, other: TagId) -> bool { labels_match(self.label, other.label) }
}

const fn labels_match(lhs: &str, rhs: &str) -> bool {
    let lhs = lhs.as_bytes();
    let rhs = rhs.as_bytes();
    if lhs.len() != rhs.len() {
        return false;
    }
    let mut index = 0;
    while index < lhs.len() {
        if lhs[index] != rhs[index] {
            return false;
        }
        index += 1;
    }
    true
}

impl PartialEq for TagId {
    fn eq(&self, other: &Self) -> bool { self.const_eq(*other) }
}

impl Eq for TagId {}

impl Hash for TagId {
    fn hash<H: Hasher>(&self, state: &mut H) { self.label.hash(state); }
}

impl Display for TagId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.label) }
}

/// An opaque, data-less marker: an axis name, a direction endpoint, or a frame.
///
/// Tags carry identity only. Declare them with [`crate::tags!`], which fills in
/// [`Tag::ID`] from the declaration's module path.
pub trait Tag: 'static {
    const ID: TagId;
}

/// Declares zero sized [`Tag`] types.
///
/// ```
/// axial::tags! {
///     /// Increasing x.
///     pub struct Right;
///     pub struct Left;
/// }
///
/// use axial::Tag;
/// assert_ne!(Left::ID, Right::ID);
/// assert!(Left::ID.label().ends_with("::Left"));
/// ```
#[macro_export]
macro_rules! tags {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::Tag for $name {
                const ID: $crate::TagId =
                    $crate::TagId::new(concat!(module_path!(), "::", stringify!($name)));
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{Left, Right, X};

    #[test]
    fn test_tag_identity() {
        assert_eq!(Left::ID, Left::ID);
        assert_ne!(Left::ID, Right::ID);
        assert!(Left::ID.const_eq(Left::ID));
        assert!(!Left::ID.const_eq(X::ID));
    }

    #[test]
    fn test_labels() {
        assert_eq!(X::ID.label(), "axial::test_fixtures::X");
        assert_eq!(X::ID.short_label(), "X");
        assert_eq!(X::ID.to_string(), "axial::test_fixtures::X");
        assert_eq!(TagId::new("Bare").short_label(), "Bare");
    }

    #[test]
    fn test_labels_match_checks_length_first() {
        assert!(!labels_match("ab", "abc"));
        assert!(!labels_match("abd", "abc"));
        assert!(labels_match("", ""));
    }
}
