// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Result of a total lookup into a type list.
///
/// Queries never fail to evaluate, an out of range index or a missing element produces
/// [`Lookup::NotFound`] and the caller decides what that means.
///
/// ```
/// use axial::Lookup;
///
/// let hit: Lookup<u8> = Lookup::Found(3);
/// assert!(hit.is_found());
/// assert_eq!(hit.found(), Some(3));
/// assert_eq!(Lookup::<u8>::NotFound.found(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    #[must_use]
    pub const fn is_found(&self) -> bool { matches!(self, Lookup::Found(_)) }

    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(it) => Some(it),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(it) => Lookup::Found(it),
            None => Lookup::NotFound,
        }
    }
}

impl<T> From<Lookup<T>> for Option<T> {
    fn from(value: Lookup<T>) -> Self { value.found() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Lookup::from(Some(1)), Lookup::Found(1));
        assert_eq!(Lookup::<i32>::from(None), Lookup::NotFound);
        assert_eq!(Option::from(Lookup::Found('a')), Some('a'));
    }
}
