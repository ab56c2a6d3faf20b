// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Code generation for fixed capacity type lists. See
//! [`crate::generate_type_list_impl!`].

/// Capacity of every type list, and so the maximum number of attributes per axis and
/// axes per shape.
pub const MAX_LIST_LEN: usize = 8;

/// Generates an ordered, fixed capacity, `Copy` list of `$elem_ty` that can be built and
/// queried inside `const fn`.
///
/// `$elem_ty` must be `Copy` and provide `const fn const_eq(self, other: Self) -> bool`.
///
/// # Generated API
/// - `EMPTY`, `new()`, `from_slice()`.
/// - `size()`, `is_empty()`, `get()` (returns [`Lookup`], total for any index).
/// - `append()` prepends an element, `push()` adds one at the end.
/// - `position()`, `contains()`, `first_duplicate()`, `same()`, `different()`.
/// - `first_matching()` and `iter()`, which take closures and so only run at run time.
/// - [`Default`], [`PartialEq`], [`Eq`], [`Debug`].
///
/// [`Lookup`]: crate::Lookup
/// [`Default`]: ::std::default::Default
/// [`PartialEq`]: ::std::cmp::PartialEq
/// [`Eq`]: ::std::cmp::Eq
/// [`Debug`]: ::std::fmt::Debug
#[macro_export]
macro_rules! generate_type_list_impl {
    (
        $(#[$meta:meta])*
        /* Make this */ $list_ty:ident,
        /* Holding these */ $elem_ty:ty
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $list_ty {
            items: [Option<$elem_ty>; $crate::MAX_LIST_LEN],
            len: usize,
        }

        impl $list_ty {
            pub const EMPTY: Self = Self {
                items: [None; $crate::MAX_LIST_LEN],
                len: 0,
            };

            #[must_use]
            pub const fn new() -> Self { Self::EMPTY }

            /// Copies `slice` into a new list, preserving order.
            ///
            /// # Errors
            ///
            /// [`ListCapacityExceeded`] when the slice does not fit.
            ///
            /// [`ListCapacityExceeded`]: crate::DefinitionError::ListCapacityExceeded
            pub const fn from_slice(
                slice: &[$elem_ty],
            ) -> Result<Self, $crate::DefinitionError> {
                if slice.len() > $crate::MAX_LIST_LEN {
                    return Err($crate::DefinitionError::ListCapacityExceeded {
                        len: slice.len(),
                        capacity: $crate::MAX_LIST_LEN,
                    });
                }
                let mut list = Self::EMPTY;
                let mut index = 0;
                while index < slice.len() {
                    list.items[index] = Some(slice[index]);
                    index += 1;
                }
                list.len = slice.len();
                Ok(list)
            }

            #[must_use]
            pub const fn size(&self) -> usize { self.len }

            #[must_use]
            pub const fn is_empty(&self) -> bool { self.len == 0 }

            /// The element at `index`, or [`NotFound`] past the end.
            ///
            /// [`NotFound`]: crate::Lookup::NotFound
            #[must_use]
            pub const fn get(&self, index: usize) -> $crate::Lookup<$elem_ty> {
                if index >= self.len {
                    return $crate::Lookup::NotFound;
                }
                match self.items[index] {
                    Some(it) => $crate::Lookup::Found(it),
                    None => $crate::Lookup::NotFound,
                }
            }

            /// Puts `head` in front of `rest`, keeping the order of `rest`.
            ///
            /// # Errors
            ///
            /// [`ListCapacityExceeded`] when `rest` is already full.
            ///
            /// [`ListCapacityExceeded`]: crate::DefinitionError::ListCapacityExceeded
            pub const fn append(
                head: $elem_ty,
                rest: Self,
            ) -> Result<Self, $crate::DefinitionError> {
                if rest.len >= $crate::MAX_LIST_LEN {
                    return Err($crate::DefinitionError::ListCapacityExceeded {
                        len: rest.len + 1,
                        capacity: $crate::MAX_LIST_LEN,
                    });
                }
                let mut list = Self::EMPTY;
                list.items[0] = Some(head);
                let mut index = 0;
                while index < rest.len {
                    list.items[index + 1] = rest.items[index];
                    index += 1;
                }
                list.len = rest.len + 1;
                Ok(list)
            }

            /// Adds `item` after the last element.
            ///
            /// # Errors
            ///
            /// [`ListCapacityExceeded`] when the list is already full.
            ///
            /// [`ListCapacityExceeded`]: crate::DefinitionError::ListCapacityExceeded
            pub const fn push(self, item: $elem_ty) -> Result<Self, $crate::DefinitionError> {
                if self.len >= $crate::MAX_LIST_LEN {
                    return Err($crate::DefinitionError::ListCapacityExceeded {
                        len: self.len + 1,
                        capacity: $crate::MAX_LIST_LEN,
                    });
                }
                let mut list = self;
                list.items[list.len] = Some(item);
                list.len += 1;
                Ok(list)
            }

            /// Index of the first element equal to `item`.
            #[must_use]
            pub const fn position(&self, item: $elem_ty) -> $crate::Lookup<usize> {
                let mut index = 0;
                while index < self.len {
                    if let Some(it) = self.items[index] {
                        if <$elem_ty>::const_eq(it, item) {
                            return $crate::Lookup::Found(index);
                        }
                    }
                    index += 1;
                }
                $crate::Lookup::NotFound
            }

            #[must_use]
            pub const fn contains(&self, item: $elem_ty) -> bool {
                self.position(item).is_found()
            }

            /// The first element that occurs again later in the list.
            #[must_use]
            pub const fn first_duplicate(&self) -> $crate::Lookup<$elem_ty> {
                let mut index = 0;
                while index < self.len {
                    let mut other = index + 1;
                    while other < self.len {
                        if let (Some(lhs), Some(rhs)) = (self.items[index], self.items[other]) {
                            if <$elem_ty>::const_eq(lhs, rhs) {
                                return $crate::Lookup::Found(lhs);
                            }
                        }
                        other += 1;
                    }
                    index += 1;
                }
                $crate::Lookup::NotFound
            }

            /// True when all elements are equal to each other. Vacuously true for lists
            /// with fewer than two elements.
            #[must_use]
            pub const fn same(&self) -> bool {
                let Some(first) = self.items[0] else {
                    return true;
                };
                let mut index = 1;
                while index < self.len {
                    if let Some(it) = self.items[index] {
                        if !<$elem_ty>::const_eq(first, it) {
                            return false;
                        }
                    }
                    index += 1;
                }
                true
            }

            /// True when the elements are pairwise distinct.
            #[must_use]
            pub const fn different(&self) -> bool { !self.first_duplicate().is_found() }

            /// The first element satisfying `predicate`.
            #[must_use]
            pub fn first_matching(
                &self,
                predicate: impl Fn(&$elem_ty) -> bool,
            ) -> $crate::Lookup<$elem_ty> {
                self.iter().find(|it| predicate(it)).into()
            }

            pub fn iter(&self) -> impl Iterator<Item = $elem_ty> {
                self.items.iter().take(self.len).flatten().copied()
            }
        }

        impl Default for $list_ty {
            fn default() -> Self { Self::EMPTY }
        }

        impl PartialEq for $list_ty {
            fn eq(&self, other: &Self) -> bool {
                self.len == other.len && self.iter().eq(other.iter())
            }
        }

        impl Eq for $list_ty {}

        impl ::std::fmt::Debug for $list_ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_list().entries(self.iter()).finish()
            }
        }
    };
}
