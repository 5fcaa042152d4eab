// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::iter::FusedIterator;

use log::trace;

use super::arena::{Arena, NodeIndex};
use crate::error::{ListError, Result};

/// A singly linked list that owns its elements and addresses them by position.
///
/// All nodes are kept in slot storage owned by the list, and the `head`, `tail` and `next`
/// links are slot indices.
/// The `tail` link makes appending an *O*(*1*) operation, while everything that needs the
/// predecessor of a node walks the chain from the head.
///
/// See the [module-level documentation](crate::single_list) for more details.
pub struct LinkedList<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) head: Option<NodeIndex>,
    pub(crate) tail: Option<NodeIndex>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates a new empty list with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// This operation computes in *O*(*1*) time for the first and last element and in
    /// *O*(*index*) time otherwise.
    pub fn at(&self, index: usize) -> Result<&T> {
        let node = self
            .node_at(index)
            .ok_or_else(|| self.out_of_range(index))?;

        Ok(&self.arena[node].value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// This operation computes in *O*(*1*) time for the first and last element and in
    /// *O*(*index*) time otherwise.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self
            .node_at(index)
            .ok_or_else(|| self.out_of_range(index))?;

        Ok(&mut self.arena[node].value)
    }

    /// Provides a reference to the last element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|tail| &self.arena[tail].value)
    }

    /// Provides a mutable reference to the last element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail?;
        Some(&mut self.arena[tail].value)
    }

    /// Returns the number of elements the list can hold without reallocating its slot storage.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Removes all elements from the list, dropping them.
    ///
    /// The elements are dropped one after another, so even very long lists are released
    /// without a deep call stack.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }

        trace!("clearing {} elements", self.len);

        // Make the list appear empty before dropping any element.
        self.head = None;
        self.tail = None;
        self.len = 0;

        self.arena.clear();
    }

    /// Provides a reference to the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.arena[head].value)
    }

    /// Provides a mutable reference to the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        Some(&mut self.arena[head].value)
    }

    /// Inserts `value` at position `index`, shifting all elements after it towards the back.
    ///
    /// `index` may be equal to [`len`](Self::len), which appends the element.
    /// Returns [`ListError::IndexOutOfRange`] if `index` is greater than that.
    ///
    /// This operation computes in *O*(*index*) time.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        } else if index == 0 {
            self.push_front(value);
            return Ok(());
        } else if index == self.len {
            self.push_back(value);
            return Ok(());
        }

        trace!("inserting at {} into a list of {} elements", index, self.len);

        let previous = self
            .node_at(index - 1)
            .ok_or_else(|| self.out_of_range(index))?;
        let next = self.arena[previous].next;

        let node = self.arena.allocate(value, next);
        self.arena[previous].next = Some(node);
        self.len += 1;

        Ok(())
    }

    /// Returns `true` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the list.
    ///
    /// This operation computes in *O*(*1*) time.
    #[doc(alias = "get_size")]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the node at `index`, or `None` if `index` is out of range.
    fn node_at(&self, index: usize) -> Option<NodeIndex> {
        if index >= self.len {
            return None;
        } else if index == self.len - 1 {
            return self.tail;
        }

        let mut current = self.head;

        for _ in 0..index {
            current = current.and_then(|node| self.arena[node].next);
        }

        current
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// Removes the last element from the list and returns it, or `None` if the list is empty.
    ///
    /// Nodes have no backward links, so this has to find the predecessor of the last element
    /// by walking from the front.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;

        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let previous = self.node_at(self.len - 2);

            if let Some(previous) = previous {
                self.arena[previous].next = None;
            }

            self.tail = previous;
        }

        self.len -= 1;
        Some(self.arena.release(tail).value)
    }

    /// Removes the first element from the list and returns it, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.arena.release(head);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }

        self.len -= 1;
        Some(node.value)
    }

    /// Appends an element to the back of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_back(&mut self, value: T) {
        let node = self.arena.allocate(value, None);

        match self.tail {
            Some(tail) => self.arena[tail].next = Some(node),
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Prepends an element to the front of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_front(&mut self, value: T) {
        let node = self.arena.allocate(value, self.head);

        if self.head.is_none() {
            self.tail = Some(node);
        }

        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the element at `index` and returns it.
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index` is not smaller than [`len`](Self::len).
    ///
    /// This operation computes in *O*(*index*) time.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let out_of_range = self.out_of_range(index);

        if index >= self.len {
            return Err(out_of_range);
        } else if index == 0 {
            return self.pop_front().ok_or(out_of_range);
        } else if index == self.len - 1 {
            return self.pop_back().ok_or(out_of_range);
        }

        trace!("removing {} from a list of {} elements", index, self.len);

        let previous = self.node_at(index - 1).ok_or(out_of_range)?;
        let target = self.arena[previous].next.ok_or(out_of_range)?;

        let node = self.arena.release(target);
        self.arena[previous].next = node.next;
        self.len -= 1;

        Ok(node.value)
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.arena.reserve(additional);
    }

    /// Retains only the elements specified by the predicate, passing a mutable reference to it.
    ///
    /// In other words, remove all elements `e` for which `f(&mut e)` returns `false`.
    /// This method operates in place, visiting each element exactly once in the original order,
    /// and preserves the order of the retained elements.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let len_before = self.len;
        let mut previous = None;
        let mut current = self.head;

        while let Some(node) = current {
            current = self.arena[node].next;

            if f(&mut self.arena[node].value) {
                previous = Some(node);
                continue;
            }

            match previous {
                Some(previous) => self.arena[previous].next = current,
                None => self.head = current,
            }

            if self.tail == Some(node) {
                self.tail = previous;
            }

            self.len -= 1;
            drop(self.arena.release(node));
        }

        trace!("retain dropped {} of {} elements", len_before - self.len, len_before);
    }

    /// Overwrites the element at `index` with `value`, dropping the old one.
    ///
    /// This operation computes in *O*(*1*) time for the first and last element and in
    /// *O*(*index*) time otherwise.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Exchanges the positions of the elements at `first` and `second`.
    ///
    /// The nodes are relinked rather than their values being moved, so every element stays in
    /// the slot it was stored in.
    /// Returns [`ListError::IndexOutOfRange`] if either index is not smaller than
    /// [`len`](Self::len).
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        if first >= self.len {
            return Err(self.out_of_range(first));
        } else if second >= self.len {
            return Err(self.out_of_range(second));
        } else if first == second {
            return Ok(());
        }

        let (first, second) = if first < second {
            (first, second)
        } else {
            (second, first)
        };

        trace!("swapping {} and {} in a list of {} elements", first, second, self.len);

        // Find both nodes and their predecessors in a single pass.
        let mut first_previous = None;
        let mut first_node = None;
        let mut second_previous = None;
        let mut second_node = None;

        let mut previous = None;
        let mut current = self.head;
        let mut position = 0;

        while let Some(node) = current {
            if position == first {
                first_previous = previous;
                first_node = Some(node);
            } else if position == second {
                second_previous = previous;
                second_node = Some(node);
                break;
            }

            previous = current;
            current = self.arena[node].next;
            position += 1;
        }

        let (Some(first_node), Some(second_node), Some(second_previous)) =
            (first_node, second_node, second_previous)
        else {
            return Err(self.out_of_range(second));
        };

        if self.tail == Some(second_node) {
            self.tail = Some(first_node);
        }

        if self.head == Some(first_node) {
            self.head = Some(second_node);
        } else if let Some(first_previous) = first_previous {
            self.arena[first_previous].next = Some(second_node);
        }

        self.arena[second_previous].next = Some(first_node);

        // For adjacent nodes, `first_node` now links to itself, and exchanging the links
        // below resolves that.
        let first_next = self.arena[first_node].next;
        self.arena[first_node].next = self.arena[second_node].next;
        self.arena[second_node].next = first_next;

        Ok(())
    }

    /// Returns an iterator over the values in chain order, for use inside the crate.
    pub(crate) fn values(&self) -> Values<T> {
        Values {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }
}

pub(crate) struct Values<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let list = self.list;
        let node = &list.arena[self.current?];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Values<'a, T> {}

impl<'a, T> FusedIterator for Values<'a, T> {}
