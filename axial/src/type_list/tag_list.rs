// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TagId, generate_type_list_impl};

generate_type_list_impl!(
    /// An ordered list of [`TagId`]s, for example the axis names of a shape.
    TagList,
    TagId
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DefinitionError, Lookup, MAX_LIST_LEN, Tag,
                test_fixtures::{Bottom, Left, Right, Top, X, Y}};
    use pretty_assertions::assert_eq;

    fn list(ids: &[TagId]) -> TagList {
        match TagList::from_slice(ids) {
            Ok(it) => it,
            Err(error) => panic!("{error}"),
        }
    }

    #[test]
    fn test_size() {
        assert_eq!(TagList::EMPTY.size(), 0);
        assert!(TagList::new().is_empty());
        assert_eq!(list(&[X::ID]).size(), 1);
        assert_eq!(list(&[X::ID, X::ID]).size(), 2);
    }

    #[test]
    fn test_get_is_total() {
        let tags = list(&[X::ID, Y::ID]);
        assert_eq!(tags.get(0), Lookup::Found(X::ID));
        assert_eq!(tags.get(1), Lookup::Found(Y::ID));
        assert_eq!(tags.get(2), Lookup::NotFound);
        assert_eq!(tags.get(usize::MAX), Lookup::NotFound);
        assert_eq!(TagList::EMPTY.get(0), Lookup::NotFound);
    }

    #[test]
    fn test_append_prepends() {
        let rest = list(&[Y::ID, Top::ID]);
        let Ok(tags) = TagList::append(X::ID, rest) else {
            panic!("append within capacity");
        };
        assert_eq!(tags, list(&[X::ID, Y::ID, Top::ID]));
        // `rest` is passed by value and left as is.
        assert_eq!(rest.size(), 2);
    }

    #[test]
    fn test_append_and_push_respect_capacity() {
        let mut tags = TagList::EMPTY;
        for _ in 0..MAX_LIST_LEN {
            tags = match tags.push(X::ID) {
                Ok(it) => it,
                Err(error) => panic!("{error}"),
            };
        }
        let overflow = DefinitionError::ListCapacityExceeded {
            len: MAX_LIST_LEN + 1,
            capacity: MAX_LIST_LEN,
        };
        assert_eq!(tags.push(Y::ID), Err(overflow));
        assert_eq!(TagList::append(Y::ID, tags), Err(overflow));
        assert_eq!(
            TagList::from_slice(&[X::ID; MAX_LIST_LEN + 2]),
            Err(DefinitionError::ListCapacityExceeded {
                len: MAX_LIST_LEN + 2,
                capacity: MAX_LIST_LEN,
            })
        );
    }

    #[test]
    fn test_position_and_contains() {
        let tags = list(&[Left::ID, Right::ID, Left::ID]);
        assert_eq!(tags.position(Left::ID), Lookup::Found(0));
        assert_eq!(tags.position(Right::ID), Lookup::Found(1));
        assert_eq!(tags.position(Top::ID), Lookup::NotFound);
        assert!(tags.contains(Right::ID));
        assert!(!tags.contains(Bottom::ID));
    }

    #[test]
    fn test_first_matching() {
        let tags = list(&[Left::ID, Top::ID, Bottom::ID]);
        assert_eq!(
            tags.first_matching(|it| it.short_label().starts_with('B')),
            Lookup::Found(Bottom::ID)
        );
        assert_eq!(
            tags.first_matching(|it| it.short_label().len() > 6),
            Lookup::NotFound
        );
    }

    #[test]
    fn test_same_and_different() {
        assert!(TagList::EMPTY.same());
        assert!(TagList::EMPTY.different());
        assert!(list(&[X::ID]).same());
        assert!(list(&[X::ID]).different());
        assert!(list(&[X::ID, X::ID, X::ID]).same());
        assert!(!list(&[X::ID, X::ID, Y::ID]).same());
        assert!(list(&[X::ID, Y::ID, Top::ID]).different());
        assert!(!list(&[X::ID, Y::ID, X::ID]).different());
        assert_eq!(
            list(&[Y::ID, X::ID, Top::ID, X::ID]).first_duplicate(),
            Lookup::Found(X::ID)
        );
    }

    #[test]
    fn test_usable_in_const() {
        const TAGS: TagList = match TagList::from_slice(&[X::ID, Y::ID]) {
            Ok(it) => it,
            Err(error) => error.raise(),
        };
        const Y_AT: Lookup<usize> = TAGS.position(Y::ID);
        assert_eq!(Y_AT, Lookup::Found(1));
        assert_eq!(format!("{TAGS:?}").matches("TagId").count(), 2);
    }
}
