use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use core::ptr;
use core::slice;

use crate::alloc::{Allocator, Global};
use crate::storage::VectorBuffer;

/// An iterator which moves the elements out of a `Vector`.
pub struct IntoIter<T, A: Allocator = Global> {
    remain: Range<usize>,
    buf: VectorBuffer<T, A>,
}

impl<T, A: Allocator> IntoIter<T, A> {
    pub(super) fn new(mut buf: VectorBuffer<T, A>) -> Self {
        let end = buf.length();
        if end > 0 {
            // SAFETY: ownership of the elements moves to the iterator
            unsafe { buf.set_length(0) };
        }
        Self {
            remain: Range { start: 0, end },
            buf,
        }
    }

    /// Access the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(
                self.buf.data_ptr().add(self.remain.start),
                self.remain.len(),
            )
        }
    }

    /// Access the remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            slice::from_raw_parts_mut(
                self.buf.data_ptr_mut().add(self.remain.start),
                self.remain.len(),
            )
        }
    }

    /// The number of remaining elements.
    pub const fn len(&self) -> usize {
        self.remain.end - self.remain.start
    }

    /// Check whether the iterator is exhausted.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self) {
        if self.len() > 0 {
            let remain: *mut [T] = self.as_mut_slice();
            self.remain.start = self.remain.end;
            unsafe {
                ptr::drop_in_place(remain);
            }
        }
    }
}

impl<T, A: Allocator> AsRef<[T]> for IntoIter<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for IntoIter<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remain.start;
        if index != self.remain.end {
            self.remain.start = index + 1;
            unsafe {
                let read = self.buf.data_ptr().add(index);
                Some(ptr::read(read))
            }
        } else {
            None
        }
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let mut index = self.remain.end;
        if index != self.remain.start {
            index -= 1;
            self.remain.end = index;
            unsafe {
                let read = self.buf.data_ptr().add(index);
                Some(ptr::read(read))
            }
        } else {
            None
        }
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use std::rc::Rc;

    use crate::vector::Vector;

    #[test]
    fn into_iter_both_ends() {
        let v = Vector::<u32>::from([1, 2, 3, 4]);
        let mut iter = v.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.as_slice(), &[2, 3]);
        assert_eq!(iter.collect::<std::vec::Vec<_>>(), [2, 3]);
    }

    #[test]
    fn into_iter_drops_remaining() {
        let item = Rc::new(());
        let v = Vector::<Rc<()>>::from([item.clone(), item.clone(), item.clone()]);
        let mut iter = v.into_iter();
        drop(iter.next());
        assert_eq!(Rc::strong_count(&item), 3);
        drop(iter);
        assert_eq!(Rc::strong_count(&item), 1);
    }
}
