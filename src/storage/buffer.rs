use core::alloc::Layout;
use core::fmt;
use core::mem::MaybeUninit;
use core::ptr::NonNull;
use core::slice;

use const_default::ConstDefault;

use super::utils::{array_layout, is_zst};
use crate::alloc::{Allocator, AllocatorDefault};
use crate::error::{alloc_error, StorageError};

/// The capacity and length of a vector buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VectorHeader {
    /// The number of elements which may be stored without reallocating.
    pub capacity: usize,
    /// The number of initialized elements.
    pub length: usize,
}

impl VectorHeader {
    /// The header for a buffer of type `T` with no allocation.
    #[inline]
    pub const fn empty<T>() -> Self {
        Self {
            // zero-sized types never allocate and can always hold more values
            capacity: if is_zst::<T>() { usize::MAX } else { 0 },
            length: 0,
        }
    }
}

/// A contiguous allocation of `T` values with an associated length.
///
/// The buffer tracks which prefix of the allocation is initialized, but does
/// not drop those values itself: that is the responsibility of the owning
/// collection. Dropping the buffer only releases the allocation.
pub struct VectorBuffer<T, A: Allocator> {
    header: VectorHeader,
    data: NonNull<T>,
    alloc: A,
}

impl<T, A: Allocator> VectorBuffer<T, A> {
    /// Create an empty buffer without allocating.
    #[inline]
    pub const fn dangling(alloc: A) -> Self {
        Self {
            header: VectorHeader::empty::<T>(),
            data: NonNull::dangling(),
            alloc,
        }
    }

    /// Allocate a buffer with room for exactly `capacity` values.
    pub fn allocate_in(capacity: usize, alloc: A) -> Result<Self, StorageError> {
        let mut buf = Self::dangling(alloc);
        if capacity > buf.header.capacity {
            buf.grow(capacity)?;
        }
        Ok(buf)
    }

    /// Access the allocator instance.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// The number of values which may be stored without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.header.capacity
    }

    /// The number of initialized values.
    #[inline]
    pub fn length(&self) -> usize {
        self.header.length
    }

    /// Update the number of initialized values.
    ///
    /// # Safety
    /// The length must not exceed the capacity, and every value below the new
    /// length must be initialized.
    #[inline]
    pub unsafe fn set_length(&mut self, length: usize) {
        debug_assert!(length <= self.header.capacity);
        self.header.length = length;
    }

    /// Access the data as a readonly pointer.
    #[inline]
    pub fn data_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Access the data as a mutable pointer.
    #[inline]
    pub fn data_ptr_mut(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Access the initialized values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data_ptr(), self.header.length) }
    }

    /// Mutably access the initialized values.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data_ptr_mut(), self.header.length) }
    }

    /// Access a slot of the allocation which may not be initialized.
    ///
    /// # Safety
    /// The index must be within the capacity of the buffer.
    #[inline]
    pub unsafe fn uninit_index(&mut self, index: usize) -> &mut MaybeUninit<T> {
        &mut *self.data_ptr_mut().add(index).cast()
    }

    #[inline]
    fn layout(capacity: usize) -> Result<Layout, StorageError> {
        Ok(array_layout::<T>(capacity)?)
    }

    /// Extend the allocation to exactly `capacity` values, preserving the
    /// initialized prefix.
    pub fn grow(&mut self, capacity: usize) -> Result<(), StorageError> {
        if is_zst::<T>() || capacity <= self.header.capacity {
            return Ok(());
        }
        let new_layout = Self::layout(capacity)?;
        let ptr = if self.header.capacity == 0 {
            self.alloc.allocate(new_layout)
        } else {
            let old_layout = Self::layout(self.header.capacity)?;
            unsafe { self.alloc.grow(self.data.cast(), old_layout, new_layout) }
        }
        .map_err(alloc_error(new_layout))?;
        self.data = ptr.cast();
        self.header.capacity = capacity;
        Ok(())
    }

    /// Reduce the allocation to exactly `capacity` values, releasing it
    /// entirely when `capacity` is zero. The capacity must not be smaller
    /// than the current length.
    pub fn shrink(&mut self, capacity: usize) -> Result<(), StorageError> {
        if is_zst::<T>() || capacity >= self.header.capacity {
            return Ok(());
        }
        debug_assert!(capacity >= self.header.length);
        let old_layout = Self::layout(self.header.capacity)?;
        if capacity == 0 {
            unsafe { self.alloc.deallocate(self.data.cast(), old_layout) };
            self.data = NonNull::dangling();
        } else {
            let new_layout = Self::layout(capacity)?;
            let ptr = unsafe { self.alloc.shrink(self.data.cast(), old_layout, new_layout) }
                .map_err(alloc_error(new_layout))?;
            self.data = ptr.cast();
        }
        self.header.capacity = capacity;
        Ok(())
    }
}

impl<T, A: AllocatorDefault> ConstDefault for VectorBuffer<T, A> {
    const DEFAULT: Self = Self::dangling(A::DEFAULT);
}

impl<T, A: Allocator + fmt::Debug> fmt::Debug for VectorBuffer<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorBuffer")
            .field("header", &self.header)
            .field("alloc", &self.alloc)
            .finish_non_exhaustive()
    }
}

impl<T, A: Allocator> Drop for VectorBuffer<T, A> {
    fn drop(&mut self) {
        if is_zst::<T>() || self.header.capacity == 0 {
            return;
        }
        if let Ok(layout) = Self::layout(self.header.capacity) {
            unsafe { self.alloc.deallocate(self.data.cast(), layout) };
        }
    }
}

// The buffer uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send, A: Allocator + Send> Send for VectorBuffer<T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for VectorBuffer<T, A> {}
