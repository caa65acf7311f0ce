//! The Failure and Result types of this library.
//!
//! The `Vector` supports faillible allocations. Any method which attempts to allocate, reallocate or release memory
//! may fail. The cause of the error is then represented as a `Failure`.
//!
//! All faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! A `Failure` never leaves a `Vector` half-modified: its length, capacity and elements are exactly what they were
//! before the call.
//!
//! Expected negative outcomes, such as an index out of bounds, popping from an empty `Vector`, or a search without
//! match, are not failures and are represented by `None` instead.

use super::root::{error, fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The number of bytes to allocate cannot be calculated due to overflowing.
    BytesOverflow,
    /// The number of elements cannot be calculated due to overflowing.
    ElementsOverflow,
    /// The allocator could not allocate memory.
    OutOfMemory,
}

impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;
