//! A growable, contiguous vector with index-based cursors.

use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;
use core::sync::atomic::{AtomicUsize, Ordering};

use const_default::ConstDefault;

use crate::alloc::{Allocator, AllocatorDefault, Global};
use crate::capacity::{Grow, GrowDoubling};
use crate::error::{StorageError, UpdateError, VectorError};
use crate::storage::VectorBuffer;

pub use self::{
    into_iter::IntoIter,
    iter::{Iter, IterMut, Position, RevIter, RevIterMut},
};

#[macro_use]
mod macros;

mod into_iter;
mod iter;

#[cfg(all(feature = "alloc", feature = "zeroize"))]
/// A `Vector` which automatically zeroizes its buffer when dropped.
pub type ZeroizingVector<T> = Vector<T, crate::alloc::ZeroizingAlloc<Global>>;

#[cfg(feature = "alloc")]
#[inline]
/// Create a `Vector<T>` from a cloneable element T and a count of the number of elements.
pub fn from_elem<T: Clone>(elem: T, count: usize) -> Vector<T> {
    let mut v = Vector::with_capacity(count);
    v.extend(core::iter::repeat(elem).take(count));
    v
}

// Source of vector identities handed out to positions. Zero means unassigned.
static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

#[inline]
fn out_of_range(index: usize, length: usize) -> VectorError {
    VectorError::OutOfRange { index, length }
}

/// A contiguous growable sequence of `T` values, stored in an allocation
/// from `A` and expanded according to the growth policy `G`.
///
/// Appending is amortized O(1) with the default doubling policy. Element
/// access is bounds-checked against `0..len()` and reports a missing
/// element as `None`; index-based mutation reports `VectorError::OutOfRange`
/// rather than panicking.
///
/// Traversal is provided both by the usual slice iterators (the vector
/// dereferences to `[T]`) and by cursors: [`Iter`] and [`RevIter`] walk
/// forward and backward over a shared borrow, while [`IterMut`] and
/// [`RevIterMut`] allow updates through an exclusive borrow.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "alloc")] {
/// use flex_vector::{Cursor, Vector};
///
/// let mut v = Vector::<u32>::with_capacity(4);
/// v.push_back(1);
/// v.push_back(3);
/// v.insert_at(1, 2).unwrap();
/// assert_eq!(v, [1, 2, 3]);
///
/// let cursor = v.begin().next();
/// assert_eq!(cursor.value(), Some(&2));
/// # }
/// ```
pub struct Vector<T, A: Allocator = Global, G: Grow = GrowDoubling> {
    buffer: VectorBuffer<T, A>,
    id: AtomicUsize,
    _grow: PhantomData<G>,
}

impl<T, A: AllocatorDefault, G: Grow> Vector<T, A, G> {
    /// Constructs a new, empty `Vector`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Constructs an empty `Vector` able to hold exactly `capacity` elements
    /// without reallocating.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct an empty `Vector` able to hold exactly `capacity`
    /// elements without reallocating.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Self::try_with_capacity_in(capacity, A::DEFAULT)
    }
}

impl<T, A: Allocator, G: Grow> Vector<T, A, G> {
    /// Constructs a new, empty `Vector` in the provided allocator.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buffer: VectorBuffer::dangling(alloc),
            id: AtomicUsize::new(0),
            _grow: PhantomData,
        }
    }

    /// Constructs an empty `Vector` in the provided allocator, able to hold
    /// exactly `capacity` elements without reallocating.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        match Self::try_with_capacity_in(capacity, alloc) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct an empty `Vector` in the provided allocator, able to
    /// hold exactly `capacity` elements without reallocating.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, StorageError> {
        Ok(Self {
            buffer: VectorBuffer::allocate_in(capacity, alloc)?,
            id: AtomicUsize::new(0),
            _grow: PhantomData,
        })
    }

    /// Constructs a copy of `other` with the same length and capacity.
    ///
    /// Elements are cloned in order. For reference types such as `Rc<U>`
    /// this shares the referenced values rather than copying them.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn from_vector(other: &Self) -> Self
    where
        T: Clone,
        A: Clone,
    {
        match Self::try_from_vector(other) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct a copy of `other` with the same length and capacity.
    pub fn try_from_vector(other: &Self) -> Result<Self, StorageError>
    where
        T: Clone,
        A: Clone,
    {
        let mut inst =
            Self::try_with_capacity_in(other.capacity(), other.buffer.allocator().clone())?;
        for item in other.as_slice() {
            // SAFETY: capacity was established to match the source vector
            unsafe { inst.push_unchecked(item.clone()) };
        }
        Ok(inst)
    }

    /// Access the allocator instance.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buffer.allocator()
    }

    /// The number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.length()
    }

    /// The number of elements the vector can hold without reallocating.
    /// Vectors of zero-sized types report `usize::MAX`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Check whether the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Access the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    /// A view of the live elements in order. Equivalent to `as_slice`.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.as_slice()
    }

    /// A mutable view of the live elements in order. Writes through the view
    /// update the vector directly.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    /// Ensure the total capacity is at least `capacity`, reallocating if
    /// necessary. The length and elements are unchanged.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[inline]
    pub fn reserve(&mut self, capacity: usize) {
        match self.try_reserve(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Try to ensure the total capacity is at least `capacity`.
    #[inline]
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), StorageError> {
        self.buffer.grow(capacity)
    }

    // Make room for `additional` more elements, applying the growth policy.
    fn try_reserve_additional(&mut self, additional: usize) -> Result<(), StorageError> {
        let buf_cap = self.buffer.capacity();
        let Some(buf_needed) = self.buffer.length().checked_add(additional) else {
            return Err(StorageError::CapacityLimit);
        };
        if buf_cap >= buf_needed {
            return Ok(());
        }
        let capacity = G::next_capacity::<T>(buf_cap, buf_needed);
        self.buffer.grow(capacity)
    }

    /// Reduce the capacity to match the length, releasing the allocation
    /// entirely for an empty vector.
    ///
    /// # Panics
    /// Panics if the reallocation fails.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        match self.try_shrink_to_fit() {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    /// Try to reduce the capacity to match the length.
    #[inline]
    pub fn try_shrink_to_fit(&mut self) -> Result<(), StorageError> {
        self.buffer.shrink(self.buffer.length())
    }

    /// Truncate the vector to at most `size` elements.
    ///
    /// **This never grows the vector.** When `size` is not smaller than the
    /// current length nothing happens: there is no padding with default
    /// values. The capacity is unaffected. This is the same operation as
    /// [`truncate`](Self::truncate).
    #[inline]
    pub fn resize(&mut self, size: usize) {
        self.truncate(size);
    }

    /// Drop any elements beyond the first `length`, leaving the capacity
    /// unchanged.
    pub fn truncate(&mut self, length: usize) {
        let old_len = self.buffer.length();
        if length >= old_len {
            return;
        }
        unsafe {
            // the length is reduced first so a panicking destructor leaks
            // the tail instead of exposing dropped values
            self.buffer.set_length(length);
            let to_drop: &mut [T] =
                slice::from_raw_parts_mut(self.buffer.data_ptr_mut().add(length), old_len - length);
            ptr::drop_in_place(to_drop);
        }
    }

    /// Remove all elements, leaving the capacity unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchange the contents, capacity, and allocator of two vectors.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buffer, &mut other.buffer);
    }

    /// Access the element at `index`, or `None` if `index >= len()`.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutably access the element at `index`, or `None` if `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Access the first element, or `None` if the vector is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Mutably access the first element, or `None` if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Access the last element, or `None` if the vector is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutably access the last element, or `None` if the vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Append an element to the end of the vector.
    ///
    /// # Panics
    /// Panics if the vector needs to grow and the allocation fails.
    pub fn push_back(&mut self, value: T) {
        match self.try_reserve_additional(1) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
        unsafe {
            self.push_unchecked(value);
        }
    }

    /// Try to append an element to the end of the vector, returning it
    /// within the error if storage could not be obtained.
    pub fn try_push_back(&mut self, value: T) -> Result<(), UpdateError<T>> {
        if let Err(error) = self.try_reserve_additional(1) {
            return Err(UpdateError::new(error, value));
        }
        unsafe {
            self.push_unchecked(value);
        }
        Ok(())
    }

    /// Append an element without checking the capacity.
    ///
    /// # Safety
    /// The length of the vector must be less than its capacity.
    #[inline]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        let length = self.buffer.length();
        self.buffer.uninit_index(length).write(value);
        self.buffer.set_length(length + 1);
    }

    /// Remove and return the last element, or `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let mut tail = self.buffer.length();
        if tail > 0 {
            tail -= 1;
            unsafe {
                self.buffer.set_length(tail);
                Some(self.buffer.uninit_index(tail).assume_init_read())
            }
        } else {
            None
        }
    }

    /// Replace the element at `index`, returning the previous value.
    ///
    /// Fails with `VectorError::OutOfRange` if `index >= len()`, handing
    /// the new value back within the error.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<T, UpdateError<T>> {
        let length = self.buffer.length();
        match self.at_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(UpdateError::new(out_of_range(index, length), value)),
        }
    }

    /// Insert an element at `index`, shifting all following elements one
    /// position later. Any index in `0..=len()` is accepted; inserting at
    /// `len()` appends.
    ///
    /// Fails with `VectorError::OutOfRange` for a larger index, or with a
    /// storage error if the vector could not grow. In either case the value
    /// is returned within the error.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), UpdateError<T>> {
        let prev_len = self.buffer.length();
        if index > prev_len {
            return Err(UpdateError::new(out_of_range(index, prev_len), value));
        }
        if let Err(error) = self.try_reserve_additional(1) {
            return Err(UpdateError::new(error, value));
        }
        let tail_count = prev_len - index;
        unsafe {
            let head = self.buffer.data_ptr_mut().add(index);
            if tail_count > 0 {
                ptr::copy(head, head.add(1), tail_count);
            }
            head.write(value);
            self.buffer.set_length(prev_len + 1);
        }
        Ok(())
    }

    /// Remove and return the element at `index`, shifting all following
    /// elements one position earlier.
    ///
    /// Fails with `VectorError::OutOfRange` if `index >= len()`.
    pub fn erase_at(&mut self, index: usize) -> Result<T, VectorError> {
        let len = self.buffer.length();
        if index >= len {
            return Err(out_of_range(index, len));
        }
        let copy_count = len - index - 1;
        unsafe {
            let head = self.buffer.data_ptr_mut().add(index);
            let result = ptr::read(head);
            if copy_count > 0 {
                ptr::copy(head.add(1), head, copy_count);
            }
            self.buffer.set_length(len - 1);
            Ok(result)
        }
    }

    /// Remove the elements at positions `first..last`, shifting the
    /// remaining tail to begin at `first`.
    ///
    /// A reversed range (`first > last`) removes nothing and is not an
    /// error. Otherwise `last > len()` fails with `VectorError::OutOfRange`.
    pub fn erase_index_range(&mut self, first: usize, last: usize) -> Result<(), VectorError> {
        if first > last {
            return Ok(());
        }
        let len = self.buffer.length();
        if last > len {
            return Err(out_of_range(last, len));
        }
        let remove = last - first;
        if remove == 0 {
            return Ok(());
        }
        let tail_count = len - last;
        unsafe {
            self.buffer.set_length(first);
            let head = self.buffer.data_ptr_mut().add(first);
            ptr::drop_in_place(slice::from_raw_parts_mut(head, remove));
            if tail_count > 0 {
                ptr::copy(head.add(remove), head, tail_count);
            }
            self.buffer.set_length(first + tail_count);
        }
        Ok(())
    }

    /// A forward cursor at the first element.
    #[inline]
    pub fn begin(&self) -> Iter<'_, T, A, G> {
        Iter::new(self, 0)
    }

    /// A forward cursor at the end sentinel, one past the last element.
    #[inline]
    pub fn end(&self) -> Iter<'_, T, A, G> {
        Iter::new(self, self.len())
    }

    /// A reverse cursor at the last element.
    #[inline]
    pub fn rbegin(&self) -> RevIter<'_, T, A, G> {
        RevIter::new(self, self.len())
    }

    /// A reverse cursor at the end sentinel, one before the first element.
    #[inline]
    pub fn rend(&self) -> RevIter<'_, T, A, G> {
        RevIter::new(self, 0)
    }

    /// A mutable forward cursor at the first element.
    #[inline]
    pub fn begin_mut(&mut self) -> IterMut<'_, T, A, G> {
        IterMut::new(self, 0)
    }

    /// A mutable forward cursor at the end sentinel.
    #[inline]
    pub fn end_mut(&mut self) -> IterMut<'_, T, A, G> {
        let len = self.len();
        IterMut::new(self, len)
    }

    /// A mutable reverse cursor at the last element.
    #[inline]
    pub fn rbegin_mut(&mut self) -> RevIterMut<'_, T, A, G> {
        let len = self.len();
        RevIterMut::new(self, len)
    }

    /// A mutable reverse cursor at the end sentinel.
    #[inline]
    pub fn rend_mut(&mut self) -> RevIterMut<'_, T, A, G> {
        RevIterMut::new(self, 0)
    }

    // Assigned on first request and kept when the vector moves. Zero is
    // never a valid identity.
    pub(crate) fn owner_id(&self) -> usize {
        let id = self.id.load(Ordering::Relaxed);
        if id != 0 {
            return id;
        }
        let fresh = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        match self
            .id
            .compare_exchange(0, fresh, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => fresh,
            Err(current) => current,
        }
    }

    fn check_position(&self, pos: Position) -> Result<usize, VectorError> {
        if pos.owner() == self.owner_id() {
            Ok(pos.index())
        } else {
            Err(VectorError::InvalidPosition)
        }
    }

    /// Insert an element at a position taken from a forward cursor,
    /// returning a cursor at the inserted element.
    ///
    /// Fails with `VectorError::InvalidPosition` for a position taken from
    /// another vector, and otherwise as [`insert_at`](Self::insert_at).
    pub fn insert(
        &mut self,
        pos: Position,
        value: T,
    ) -> Result<IterMut<'_, T, A, G>, UpdateError<T>> {
        let index = match self.check_position(pos) {
            Ok(index) => index,
            Err(error) => return Err(UpdateError::new(error, value)),
        };
        self.insert_at(index, value)?;
        Ok(IterMut::new(self, index))
    }

    /// Remove the element at a position taken from a forward cursor,
    /// returning a cursor at the element which followed it.
    ///
    /// Fails with `VectorError::InvalidPosition` for a position taken from
    /// another vector, and otherwise as [`erase_at`](Self::erase_at).
    pub fn erase(&mut self, pos: Position) -> Result<IterMut<'_, T, A, G>, VectorError> {
        let index = self.check_position(pos)?;
        self.erase_at(index)?;
        Ok(IterMut::new(self, index))
    }

    /// Remove the elements between two positions taken from forward cursors,
    /// returning a cursor at the position where the removed range began.
    ///
    /// Fails with `VectorError::InvalidPosition` if either position was taken
    /// from another vector, and otherwise as
    /// [`erase_index_range`](Self::erase_index_range).
    pub fn erase_range(
        &mut self,
        first: Position,
        last: Position,
    ) -> Result<IterMut<'_, T, A, G>, VectorError> {
        let first = self.check_position(first)?;
        let last = self.check_position(last)?;
        self.erase_index_range(first, last)?;
        let index = first.min(self.len());
        Ok(IterMut::new(self, index))
    }

    #[inline]
    fn into_inner(self) -> VectorBuffer<T, A> {
        let me = ManuallyDrop::new(self);
        unsafe { ptr::read(&me.buffer) }
    }
}

impl<T, A: AllocatorDefault, G: Grow> ConstDefault for Vector<T, A, G> {
    #[allow(clippy::declare_interior_mutable_const)]
    const DEFAULT: Self = Self::new_in(A::DEFAULT);
}

impl<T, A: AllocatorDefault, G: Grow> Default for Vector<T, A, G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: Allocator + Clone, G: Grow> Clone for Vector<T, A, G> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_vector(self)
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_from_slice(source);
    }
}

impl<T, A: Allocator, G: Grow> Vector<T, A, G> {
    /// Append clones of all the elements of a slice.
    ///
    /// # Panics
    /// Panics if the vector needs to grow and the allocation fails.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_reserve_additional(items.len()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
        for item in items {
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T, A: Allocator, G: Grow> Drop for Vector<T, A, G> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

impl<T, A: Allocator, G: Grow> Deref for Vector<T, A, G> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: Allocator, G: Grow> DerefMut for Vector<T, A, G> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator, G: Grow> AsRef<[T]> for Vector<T, A, G> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator, G: Grow> AsMut<[T]> for Vector<T, A, G> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator, G: Grow> Borrow<[T]> for Vector<T, A, G> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator, G: Grow> BorrowMut<[T]> for Vector<T, A, G> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, A: Allocator, G: Grow> fmt::Debug for Vector<T, A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

/// Renders the elements in order as `[a b c]`. Intended for logging and
/// debugging; the format is not stable.
impl<T: fmt::Display, A: Allocator, G: Grow> fmt::Display for Vector<T, A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.as_slice().iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T: Hash, A: Allocator, G: Grow> Hash for Vector<T, A, G> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: Allocator, G: Grow> Extend<T> for Vector<T, A, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (min_cap, _) = iter.size_hint();
        if let Err(error) = self.try_reserve_additional(min_cap) {
            error.panic();
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Clone + 'a, A: Allocator, G: Grow> Extend<&'a T> for Vector<T, A, G> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T, A: AllocatorDefault, G: Grow> FromIterator<T> for Vector<T, A, G> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Clone, A: AllocatorDefault, G: Grow> From<&[T]> for Vector<T, A, G> {
    fn from(data: &[T]) -> Self {
        let mut vec = Self::with_capacity(data.len());
        vec.extend_from_slice(data);
        vec
    }
}

impl<T, A: AllocatorDefault, G: Grow, const N: usize> From<[T; N]> for Vector<T, A, G> {
    fn from(data: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        vec.extend(data);
        vec
    }
}

impl<T, A: Allocator, G: Grow> IntoIterator for Vector<T, A, G> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_inner())
    }
}

impl<'a, T, A: Allocator, G: Grow> IntoIterator for &'a Vector<T, A, G> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator, G: Grow> IntoIterator for &'a mut Vector<T, A, G> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, A1, G1, T2, A2, G2> PartialEq<Vector<T2, A2, G2>> for Vector<T1, A1, G1>
where
    A1: Allocator,
    A2: Allocator,
    G1: Grow,
    G2: Grow,
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Vector<T2, A2, G2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, A: Allocator, G: Grow> Eq for Vector<T, A, G> {}

impl<T1, A1, G1, T2> PartialEq<[T2]> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, A1, G1, T2> PartialEq<&[T2]> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, A1, G1, T2, const N: usize> PartialEq<[T2; N]> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, A1, G1, T2, const N: usize> PartialEq<&[T2; N]> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

#[cfg(feature = "alloc")]
impl<T1, A1, G1, T2> PartialEq<alloc_crate::vec::Vec<T2>> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &alloc_crate::vec::Vec<T2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

#[cfg(feature = "zeroize")]
impl<T, A: Allocator, G: Grow> zeroize::Zeroize for Vector<T, crate::alloc::ZeroizingAlloc<A>, G> {
    #[inline]
    fn zeroize(&mut self) {
        self.clear();
        self.shrink_to_fit();
    }
}

#[cfg(feature = "zeroize")]
impl<T, A: crate::alloc::AllocatorZeroizes, G: Grow> zeroize::ZeroizeOnDrop for Vector<T, A, G> {}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::capacity::GrowExact;

    #[test]
    fn erase_range_drops_removed() {
        use std::rc::Rc;

        let item = Rc::new(());
        let mut v = Vector::<Rc<()>>::new();
        for _ in 0..5 {
            v.push_back(item.clone());
        }
        assert_eq!(Rc::strong_count(&item), 6);
        v.erase_index_range(1, 4).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(Rc::strong_count(&item), 3);
        drop(v);
        assert_eq!(Rc::strong_count(&item), 1);
    }

    #[test]
    fn exact_growth_policy() {
        let mut v = Vector::<u8, Global, GrowExact>::new();
        for i in 0..5 {
            v.push_back(i);
            assert_eq!(v.capacity(), v.len());
        }
    }

    #[test]
    fn const_new() {
        static EMPTY: Vector<u32> = Vector::new();
        assert!(EMPTY.is_empty());
        assert_eq!(EMPTY.capacity(), 0);
    }

    #[test]
    fn position_from_other_vector() {
        let a = Vector::<u32>::from([1, 2]);
        let mut b = Vector::<u32>::from([1, 2]);
        let pos = a.begin().position();
        let err = b.erase(pos).unwrap_err();
        assert_eq!(err, VectorError::InvalidPosition);
        assert_eq!(b, [1, 2]);
    }
}
