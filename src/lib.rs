//! A growable vector with index-based cursors and flexible allocation.
//!
//! [`Vector`] stores its elements contiguously in an allocation obtained
//! from an [`Allocator`](crate::alloc::Allocator), expanding it according to
//! a [`Grow`](crate::capacity::Grow) policy. Alongside the usual slice
//! access it offers C++-style cursors: forward and reverse, shared and
//! mutable, each clamped at an end sentinel.
//!
//! Index-based operations never panic on a bad index. Instead they return
//! [`VectorError::OutOfRange`], and operations which take ownership of a
//! value hand it back inside an [`UpdateError`].
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use flex_vector::{vector, Cursor, Vector};
//!
//! let mut v: Vector<i32> = vector![1, 2, 4];
//! v.insert_at(2, 3).unwrap();
//! assert!(v.erase_at(10).unwrap_err().is_out_of_range());
//!
//! let mut cursor = v.rbegin();
//! let mut seen = Vec::new();
//! while let Some(value) = cursor.value() {
//!     seen.push(*value);
//!     cursor = cursor.next();
//! }
//! assert_eq!(seen, [4, 3, 2, 1]);
//! assert_eq!(v.to_string(), "[1 2 3 4]");
//! # }
//! ```
//!
//! ## Features
//!
//! - `alloc` (default): enables the `Global` allocator.
//! - `std`: implements `std::error::Error` for the error types.
//! - `allocator-api2`: uses the `Allocator` trait from `allocator-api2`.
//! - `zeroize`: provides `ZeroizingAlloc` and `ZeroizingVector`, which clear
//!   released buffers.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc as alloc_crate;

pub mod alloc;

pub mod capacity;

pub mod cursor;

pub(crate) mod error;

pub mod storage;

pub mod vector;

#[cfg(all(feature = "alloc", feature = "zeroize"))]
pub use self::vector::ZeroizingVector;
pub use self::{
    cursor::{Cursor, CursorMut},
    error::{StorageError, UpdateError, VectorError},
    vector::{IntoIter, Iter, IterMut, Position, RevIter, RevIterMut, Vector},
};
