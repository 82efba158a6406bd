//! Backing storage types for collections.

mod buffer;
pub(crate) mod utils;

pub use self::buffer::{VectorBuffer, VectorHeader};
