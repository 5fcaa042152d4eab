// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::mem::{self, MaybeUninit};
use core::pin::Pin;

use moveit::move_ref::MoveRef;
use moveit::new::{CopyNew, MoveNew};

use super::base::LinkedList;

impl<T> LinkedList<T> {
    /// Moves all elements into a new list and leaves `self` empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

/// Deep copy: every value is cloned into a freshly allocated node, preserving the order.
///
/// The copy gets compact slot storage of its own, regardless of how fragmented the
/// slot storage of the source is.
impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len());

        for value in self.values() {
            list.push_back(value.clone());
        }

        list
    }
}

/// Copy construction into a destination chosen by the caller, e.g. via [`moveit::new::copy`].
unsafe impl<T: Clone> CopyNew for LinkedList<T> {
    unsafe fn copy_new(src: &Self, this: Pin<&mut MaybeUninit<Self>>) {
        this.get_unchecked_mut().write(src.clone());
    }
}

/// Move construction via [`moveit::new::mov`].
///
/// The source is left behind as an empty list, which is then dropped by its owner.
unsafe impl<T> MoveNew for LinkedList<T> {
    unsafe fn move_new(src: Pin<MoveRef<'_, Self>>, this: Pin<&mut MaybeUninit<Self>>) {
        // Pinning is not structural for `LinkedList`: moving the list only moves the handle
        // of its slot storage, never the values inside it.
        let mut src = Pin::into_inner_unchecked(src);
        this.get_unchecked_mut().write(src.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Lists are equal if they hold equal values in the same order.
impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}
