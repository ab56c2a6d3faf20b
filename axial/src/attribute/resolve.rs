// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Attr, AttrList, AttrSlot, DefinitionError, DirectionAttr, Lookup, TagId};

/// The attributes in `candidates` that fill `slot`, in declaration order.
///
/// # Errors
///
/// [`DefinitionError::ListCapacityExceeded`] when more attributes match than an
/// [`AttrList`] holds.
pub const fn get_attr(
    slot: AttrSlot,
    candidates: &[Attr],
) -> Result<AttrList, DefinitionError> {
    get_attr_from(slot, candidates, 0)
}

const fn get_attr_from(
    slot: AttrSlot,
    candidates: &[Attr],
    start: usize,
) -> Result<AttrList, DefinitionError> {
    if start >= candidates.len() {
        return Ok(AttrList::EMPTY);
    }
    let rest = match get_attr_from(slot, candidates, start + 1) {
        Ok(it) => it,
        Err(error) => return Err(error),
    };
    let head = candidates[start];
    if head.slot().const_eq(slot) {
        AttrList::append(head, rest)
    } else {
        Ok(rest)
    }
}

/// Zero or one attribute for a slot, as produced by [`optional_attr()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalAttr {
    pub slot: AttrSlot,
    pub attr: Lookup<Attr>,
}

impl OptionalAttr {
    #[must_use]
    pub const fn absent(slot: AttrSlot) -> Self {
        Self {
            slot,
            attr: Lookup::NotFound,
        }
    }

    #[must_use]
    pub const fn is_present(self) -> bool { self.attr.is_found() }

    #[must_use]
    pub const fn direction(self) -> Lookup<DirectionAttr> {
        match self.attr {
            Lookup::Found(Attr::Direction(it)) => Lookup::Found(it),
            _ => Lookup::NotFound,
        }
    }

    #[must_use]
    pub const fn name(self) -> Lookup<TagId> {
        match self.attr {
            Lookup::Found(Attr::Name(it)) => Lookup::Found(it.tag),
            _ => Lookup::NotFound,
        }
    }
}

/// The single attribute in `candidates` that fills `slot`, if there is one.
///
/// # Errors
///
/// [`DefinitionError::TooManyAttributes`] when two or more candidates fill `slot`.
pub const fn optional_attr(
    slot: AttrSlot,
    candidates: &[Attr],
) -> Result<OptionalAttr, DefinitionError> {
    let mut count = 0;
    let mut index = 0;
    while index < candidates.len() {
        if candidates[index].slot().const_eq(slot) {
            count += 1;
        }
        index += 1;
    }
    if count > 1 {
        return Err(DefinitionError::TooManyAttributes { slot, count });
    }

    let matching = match get_attr(slot, candidates) {
        Ok(it) => it,
        Err(error) => return Err(error),
    };
    Ok(OptionalAttr {
        slot,
        attr: matching.get(0),
    })
}
