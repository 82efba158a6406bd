use core::fmt;
use core::ptr;

use crate::alloc::{Allocator, Global};
use crate::capacity::{Grow, GrowDoubling};
use crate::cursor::{Cursor, CursorMut};
use crate::error::{UpdateError, VectorError};

use super::Vector;

/// A detached forward cursor position.
///
/// Unlike the cursors it is taken from, a `Position` holds no borrow of its
/// vector, so it may be handed back to [`Vector::insert`], [`Vector::erase`]
/// or [`Vector::erase_range`]. It records the identity of the vector it was
/// taken from, and those operations reject a position from another vector.
/// After a structural change the position may refer to a shifted element or
/// fall out of range, which is reported as `VectorError::OutOfRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    owner: usize,
    index: usize,
}

impl Position {
    #[inline]
    pub(super) const fn new(owner: usize, index: usize) -> Self {
        Self { owner, index }
    }

    #[inline]
    pub(super) const fn owner(&self) -> usize {
        self.owner
    }

    /// The element index of the position.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// A forward cursor over a shared borrow of a `Vector`.
pub struct Iter<'a, T, A: Allocator = Global, G: Grow = GrowDoubling> {
    vec: &'a Vector<T, A, G>,
    index: usize,
}

impl<'a, T, A: Allocator, G: Grow> Iter<'a, T, A, G> {
    #[inline]
    pub(super) fn new(vec: &'a Vector<T, A, G>, index: usize) -> Self {
        Self { vec, index }
    }

    /// The element index of the cursor, equal to the length of the vector
    /// at the end sentinel.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Detach the position of this cursor from the borrow of the vector.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.vec.owner_id(), self.index)
    }

    /// Access the element under the cursor for the lifetime of the borrow.
    #[inline]
    pub fn value(&self) -> Option<&'a T> {
        self.vec.at(self.index)
    }
}

impl<T, A: Allocator, G: Grow> Clone for Iter<'_, T, A, G> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Allocator, G: Grow> Copy for Iter<'_, T, A, G> {}

impl<T, A: Allocator, G: Grow> Cursor for Iter<'_, T, A, G> {
    type Item = T;

    #[inline]
    fn next(self) -> Self {
        Self {
            vec: self.vec,
            index: (self.index + 1).min(self.vec.len()),
        }
    }

    #[inline]
    fn value(&self) -> Option<&T> {
        Iter::value(self)
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        ptr::eq(self.vec, other.vec) && self.index == other.index
    }

    #[inline]
    fn is_end(&self) -> bool {
        self.index >= self.vec.len()
    }
}

impl<T, A: Allocator, G: Grow> PartialEq for Iter<'_, T, A, G> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T, A: Allocator, G: Grow> Eq for Iter<'_, T, A, G> {}

impl<T, A: Allocator, G: Grow> fmt::Debug for Iter<'_, T, A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// A reverse cursor over a shared borrow of a `Vector`.
pub struct RevIter<'a, T, A: Allocator = Global, G: Grow = GrowDoubling> {
    vec: &'a Vector<T, A, G>,
    // addresses element `offset - 1`, zero is the sentinel
    offset: usize,
}

impl<'a, T, A: Allocator, G: Grow> RevIter<'a, T, A, G> {
    #[inline]
    pub(super) fn new(vec: &'a Vector<T, A, G>, offset: usize) -> Self {
        Self { vec, offset }
    }

    /// The element index of the cursor, or `None` at the end sentinel.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.offset.checked_sub(1)
    }

    /// Access the element under the cursor for the lifetime of the borrow.
    #[inline]
    pub fn value(&self) -> Option<&'a T> {
        self.index().and_then(|index| self.vec.at(index))
    }
}

impl<T, A: Allocator, G: Grow> Clone for RevIter<'_, T, A, G> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Allocator, G: Grow> Copy for RevIter<'_, T, A, G> {}

impl<T, A: Allocator, G: Grow> Cursor for RevIter<'_, T, A, G> {
    type Item = T;

    #[inline]
    fn next(self) -> Self {
        Self {
            vec: self.vec,
            offset: self.offset.saturating_sub(1),
        }
    }

    #[inline]
    fn value(&self) -> Option<&T> {
        RevIter::value(self)
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        ptr::eq(self.vec, other.vec) && self.offset == other.offset
    }

    #[inline]
    fn is_end(&self) -> bool {
        self.offset == 0
    }
}

impl<T, A: Allocator, G: Grow> PartialEq for RevIter<'_, T, A, G> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T, A: Allocator, G: Grow> Eq for RevIter<'_, T, A, G> {}

impl<T, A: Allocator, G: Grow> fmt::Debug for RevIter<'_, T, A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevIter")
            .field("index", &self.index())
            .finish_non_exhaustive()
    }
}

/// A forward cursor over an exclusive borrow of a `Vector`.
pub struct IterMut<'a, T, A: Allocator = Global, G: Grow = GrowDoubling> {
    vec: &'a mut Vector<T, A, G>,
    index: usize,
}

impl<'a, T, A: Allocator, G: Grow> IterMut<'a, T, A, G> {
    #[inline]
    pub(super) fn new(vec: &'a mut Vector<T, A, G>, index: usize) -> Self {
        Self { vec, index }
    }

    /// The element index of the cursor, equal to the length of the vector
    /// at the end sentinel.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Detach the position of this cursor from the borrow of the vector.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.vec.owner_id(), self.index)
    }

    /// Access the element under the cursor.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.vec.at(self.index)
    }

    /// Mutably access the element under the cursor.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.vec.at_mut(self.index)
    }

    /// Replace the element under the cursor, returning the previous value.
    /// Fails with `VectorError::OutOfRange` at the end sentinel.
    #[inline]
    pub fn set(&mut self, value: T) -> Result<T, UpdateError<T>> {
        self.vec.set_at(self.index, value)
    }

    /// Move the cursor one step toward the end sentinel.
    #[inline]
    pub fn advance(&mut self) {
        self.index = (self.index + 1).min(self.vec.len());
    }

    /// Insert an element before the cursor, returning a cursor at the
    /// inserted element. At the end sentinel this appends.
    pub fn insert(self, value: T) -> Result<Self, UpdateError<T>> {
        let Self { vec, index } = self;
        vec.insert_at(index, value)?;
        Ok(Self { vec, index })
    }

    /// Remove the element under the cursor, returning a cursor at the
    /// element which followed it.
    pub fn erase(self) -> Result<Self, VectorError> {
        let Self { vec, index } = self;
        vec.erase_at(index)?;
        Ok(Self { vec, index })
    }

    /// Release the cursor, returning the borrow of the vector.
    #[inline]
    pub fn into_vector(self) -> &'a mut Vector<T, A, G> {
        self.vec
    }
}

impl<T, A: Allocator, G: Grow> Cursor for IterMut<'_, T, A, G> {
    type Item = T;

    #[inline]
    fn next(mut self) -> Self {
        self.advance();
        self
    }

    #[inline]
    fn value(&self) -> Option<&T> {
        IterMut::value(self)
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        // distinct exclusive borrows cannot share a vector
        ptr::eq(&*self.vec, &*other.vec) && self.index == other.index
    }

    #[inline]
    fn is_end(&self) -> bool {
        self.index >= self.vec.len()
    }
}

impl<T, A: Allocator, G: Grow> CursorMut for IterMut<'_, T, A, G> {
    #[inline]
    fn value_mut(&mut self) -> Option<&mut T> {
        IterMut::value_mut(self)
    }

    #[inline]
    fn set(&mut self, value: T) -> Result<T, UpdateError<T>> {
        IterMut::set(self, value)
    }
}

impl<T, A: Allocator, G: Grow> fmt::Debug for IterMut<'_, T, A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// A reverse cursor over an exclusive borrow of a `Vector`.
pub struct RevIterMut<'a, T, A: Allocator = Global, G: Grow = GrowDoubling> {
    vec: &'a mut Vector<T, A, G>,
    offset: usize,
}

impl<'a, T, A: Allocator, G: Grow> RevIterMut<'a, T, A, G> {
    #[inline]
    pub(super) fn new(vec: &'a mut Vector<T, A, G>, offset: usize) -> Self {
        Self { vec, offset }
    }

    /// The element index of the cursor, or `None` at the end sentinel.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.offset.checked_sub(1)
    }

    /// Access the element under the cursor.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.index().and_then(|index| self.vec.at(index))
    }

    /// Mutably access the element under the cursor.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self.index() {
            Some(index) => self.vec.at_mut(index),
            None => None,
        }
    }

    /// Replace the element under the cursor, returning the previous value.
    /// Fails with `VectorError::OutOfRange` at the end sentinel.
    pub fn set(&mut self, value: T) -> Result<T, UpdateError<T>> {
        match self.index() {
            Some(index) => self.vec.set_at(index, value),
            None => Err(UpdateError::new(
                VectorError::OutOfRange {
                    index: usize::MAX,
                    length: self.vec.len(),
                },
                value,
            )),
        }
    }

    /// Move the cursor one step toward the end sentinel.
    #[inline]
    pub fn advance(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Release the cursor, returning the borrow of the vector.
    #[inline]
    pub fn into_vector(self) -> &'a mut Vector<T, A, G> {
        self.vec
    }
}

impl<T, A: Allocator, G: Grow> Cursor for RevIterMut<'_, T, A, G> {
    type Item = T;

    #[inline]
    fn next(mut self) -> Self {
        self.advance();
        self
    }

    #[inline]
    fn value(&self) -> Option<&T> {
        RevIterMut::value(self)
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        ptr::eq(&*self.vec, &*other.vec) && self.offset == other.offset
    }

    #[inline]
    fn is_end(&self) -> bool {
        self.offset == 0
    }
}

impl<T, A: Allocator, G: Grow> CursorMut for RevIterMut<'_, T, A, G> {
    #[inline]
    fn value_mut(&mut self) -> Option<&mut T> {
        RevIterMut::value_mut(self)
    }

    #[inline]
    fn set(&mut self, value: T) -> Result<T, UpdateError<T>> {
        RevIterMut::set(self, value)
    }
}

impl<T, A: Allocator, G: Grow> fmt::Debug for RevIterMut<'_, T, A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevIterMut")
            .field("index", &self.index())
            .finish_non_exhaustive()
    }
}
