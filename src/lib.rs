#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Ductile Library
//!
//! A contiguous, growable array of byte-copyable elements.
//!
//! -   The `Vector`: a `Vec`-like container with explicit capacity control, faillible allocation, and
//!     comparator-driven search and sort primitives.
//!
//! Elements are required to be `Copy`: they are stored and retrieved by plain bitwise copies, and never dropped.

pub mod allocator;
pub mod compare;
pub mod failure;
pub mod vector;

mod utils;

use self::utils::root;
