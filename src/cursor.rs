//! Cursor traits shared by the forward and reverse vector cursors.

use crate::error::UpdateError;

/// A position within a sequence which can be advanced toward an end
/// sentinel and dereferenced.
pub trait Cursor: Sized {
    /// The type of the element under the cursor.
    type Item;

    /// Return a cursor one step toward the end. Advancing a cursor at the
    /// end sentinel leaves it at the sentinel.
    fn next(self) -> Self;

    /// Access the element under the cursor, or `None` at the end sentinel.
    fn value(&self) -> Option<&Self::Item>;

    /// Check whether two cursors refer to the same position of the same
    /// sequence instance.
    fn equal(&self, other: &Self) -> bool;

    /// Check whether the cursor is at the end sentinel.
    fn is_end(&self) -> bool;
}

/// A cursor which can update the element under it.
pub trait CursorMut: Cursor {
    /// Mutably access the element under the cursor, or `None` at the end
    /// sentinel.
    fn value_mut(&mut self) -> Option<&mut Self::Item>;

    /// Replace the element under the cursor, returning the previous value.
    fn set(&mut self, value: Self::Item) -> Result<Self::Item, UpdateError<Self::Item>>;
}
