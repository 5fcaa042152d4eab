// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::mem;
use core::ops::{Index, IndexMut};

use alloc::vec::Vec;

/// Stable address of a node inside an [`Arena`].
///
/// An index stays valid from [`Arena::allocate`] until the matching [`Arena::release`],
/// no matter how many other nodes come and go in between.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct NodeIndex(usize);

/// A list node: the stored value and the link to its successor.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeIndex>,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeIndex> },
}

/// Growable slot storage owning every node of a list.
///
/// Released slots are chained into a free list and handed out again by the next allocation,
/// so the slot vector only grows when all slots are in use.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeIndex>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            occupied: 0,
        }
    }

    /// Stores a new node and returns its index.
    ///
    /// This operation computes in *O*(*1*) time (amortized when the slot vector grows).
    pub(crate) fn allocate(&mut self, value: T, next: Option<NodeIndex>) -> NodeIndex {
        let node = Node { value, next };

        let index = match self.free {
            Some(index) => {
                match mem::replace(&mut self.slots[index.0], Slot::Occupied(node)) {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list points to an occupied slot"),
                }

                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeIndex(self.slots.len() - 1)
            }
        };

        self.occupied += 1;
        index
    }

    /// Returns the number of slots that can be held without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every node and forgets the free list.
    ///
    /// The slot vector drops its elements one after another, so this never recurses along
    /// the chain of nodes.
    pub(crate) fn clear(&mut self) {
        // Reset the bookkeeping first, so a panicking `Drop` of a value cannot leave us
        // with a free list pointing into the truncated slot vector.
        self.free = None;
        self.occupied = 0;
        self.slots.clear();
    }

    /// Returns the number of occupied slots.
    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    pub(crate) fn release(&mut self, index: NodeIndex) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };

        match mem::replace(&mut self.slots[index.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(index);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    /// Reserves capacity for at least `additional` more nodes, counting free slots first.
    pub(crate) fn reserve(&mut self, additional: usize) {
        let free_slots = self.slots.len() - self.occupied;

        if additional > free_slots {
            self.slots.reserve(additional - free_slots);
        }
    }

    /// Returns the total number of slots, occupied or vacant.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Index<NodeIndex> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, index: NodeIndex) -> &Node<T> {
        match &self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node index {:?}", index),
        }
    }
}

impl<T> IndexMut<NodeIndex> for Arena<T> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node index {:?}", index),
        }
    }
}
