// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! A singly linked list with positional access.
//!
//! [`LinkedList`] keeps a link to its first and last node and a running element count.
//! Appending and prepending therefore compute in *O*(*1*) time, while everything addressed by
//! position walks the chain from the front:
//!
//! ```
//! use slot_list::{LinkedList, ListError};
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//!
//! list.swap(0, 2)?;
//! assert_eq!(list.remove(1)?, 2);
//! list.insert(1, 9)?;
//!
//! assert_eq!(list, [3, 9, 1].into_iter().collect());
//! assert_eq!(list.at(5), Err(ListError::IndexOutOfRange { index: 5, len: 3 }));
//! # Ok::<(), ListError>(())
//! ```
//!
//! Nodes are not individually boxed.
//! They live in slot storage owned by the list, and the links between them are slot indices.
//! A removed node frees its slot, which the next insertion reuses.
//! Dropping or clearing the list releases the nodes one by one, so the length of the chain
//! never turns into recursion depth.
//!
//! [`LinkedList::swap`] exchanges two nodes by relinking them.
//! The values stay where they were stored and only their positions in the chain change.
//!
//! A list can be copied with [`Clone`] or copy-constructed in place through [`moveit::new::copy`].
//! [`LinkedList::take`] and [`moveit::new::mov`] move all elements out and leave an empty list
//! behind.

mod arena;
mod base;
mod construct;

pub use base::LinkedList;
