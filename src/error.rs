//! Error handling.

use core::alloc::{Layout, LayoutError};
use core::fmt;

use crate::alloc::AllocError;

/// An enumeration of error types raised by storage implementations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// A memory allocation failed.
    AllocError(Layout),
    /// The limit of the current allocation was reached.
    CapacityLimit,
    /// The provided layout was not allocatable.
    LayoutError(LayoutError),
}

impl StorageError {
    /// Generic description of this error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError(_) => "Allocation error",
            Self::CapacityLimit => "Exceeded storage capacity limit",
            Self::LayoutError(_) => "Layout error",
        }
    }

    /// Generate a panic with this error as the reason.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        if let Self::AllocError(layout) = self {
            crate::alloc::handle_alloc_error(layout);
        } else {
            panic!("{}", self.as_str())
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LayoutError> for StorageError {
    fn from(err: LayoutError) -> Self {
        Self::LayoutError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// Attach the failed layout to an allocator error.
#[inline]
pub(crate) fn alloc_error(layout: Layout) -> impl FnOnce(AllocError) -> StorageError {
    move |_| StorageError::AllocError(layout)
}

/// An enumeration of errors raised by vector operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// An index or position was outside the domain of the operation.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The length of the vector at the time of the call.
        length: usize,
    },
    /// A position was produced by a cursor over a different vector.
    InvalidPosition,
    /// The backing storage could not be updated.
    Storage(StorageError),
}

impl VectorError {
    /// Generic description of this error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "Index out of range",
            Self::InvalidPosition => "Position does not belong to this vector",
            Self::Storage(err) => err.as_str(),
        }
    }

    /// Check whether this error is an out-of-range index.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Generate a panic with this error as the reason.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        match self {
            Self::Storage(err) => err.panic(),
            Self::OutOfRange { index, length } => {
                panic!("{}: index {} with length {}", self.as_str(), index, length)
            }
            Self::InvalidPosition => panic!("{}", self.as_str()),
        }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, length } => f.write_fmt(format_args!(
                "{}: index {} with length {}",
                self.as_str(),
                index,
                length
            )),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl From<StorageError> for VectorError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

/// An error raised by collection update operations when the value
/// could not be stored. Includes the value so that it is not lost.
#[derive(Clone)]
pub struct UpdateError<T> {
    pub(crate) error: VectorError,
    pub(crate) value: T,
}

impl<T> UpdateError<T> {
    pub(crate) fn new(error: impl Into<VectorError>, value: T) -> Self {
        Self {
            error: error.into(),
            value,
        }
    }

    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        "Update error"
    }

    /// Get a reference to the contained `VectorError`
    pub fn error(&self) -> &VectorError {
        &self.error
    }

    /// Unwrap the inner value of this error
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split this error into the contained `VectorError` and value
    pub fn into_parts(self) -> (VectorError, T) {
        (self.error, self.value)
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        let msg = self.as_str();
        match self.error {
            VectorError::Storage(err) => err.panic(),
            err => panic!("{}: {}", msg, err),
        }
    }
}

impl<T> fmt::Debug for UpdateError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for UpdateError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.as_str(), self.error))
    }
}

impl<T> From<UpdateError<T>> for VectorError {
    #[inline]
    fn from(err: UpdateError<T>) -> Self {
        err.error
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for UpdateError<T> {}
