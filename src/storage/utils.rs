use core::alloc::{Layout, LayoutError};
use core::mem::size_of;

#[inline]
pub fn array_layout<T>(count: usize) -> Result<Layout, LayoutError> {
    Layout::array::<T>(count)
}

#[inline]
pub const fn is_zst<T>() -> bool {
    size_of::<T>() == 0
}

pub const fn min_non_zero_cap<T>() -> usize {
    if size_of::<T>() == 1 {
        8
    } else if size_of::<T>() <= 1024 {
        4
    } else {
        1
    }
}
