//! #   The Vector.
//!
//! The `Vector` is a contiguous, growable array of byte-copyable elements, close in spirit to `Vec`, with a twist:
//! capacity is a first-class concern, and every operation which may allocate is faillible.
//!
//! ##  Under the covers.
//!
//! Under the covers the `Vector` is a single contiguous buffer of `capacity` slots, the first `len` of which hold
//! live elements.
//!
//! The main consequences are:
//!
//! -   Elements are only ever copied bitwise in and out, hence the `Copy` requirement.
//! -   Any operation changing the capacity may relocate the buffer, which the borrow checker accounts for: no
//!     reference to an element can be held across such an operation.
//! -   Zero-sized elements are not supported, and constructing a `Vector` of such panics.
//!
//! #   Example: basic
//!
//! General usage of `Vector` involve pushing elements with `push`, and popping them with `pop`.
//!
//! The faillible equivalent exist too: `try_push` will return a `Result` indicating whether the operation succeeded,
//! and the cause of its failure if it did not.
//!
//! ```
//! use ductile::vector::Vector;
//!
//! let mut vec: Vector<u32> = Vector::new();
//! vec.push(10);
//! vec.push(20);
//! vec.push(30);
//!
//! assert_eq!(3, vec.len());
//! assert_eq!(4, vec.capacity());
//! assert_eq!(&[10, 20, 30], vec.as_slice());
//!
//! assert_eq!(Some(10), vec.swap_remove(0));
//! assert_eq!(&[30, 20], vec.as_slice());
//!
//! assert_eq!(Some(20), vec.pop());
//! assert_eq!(1, vec.len());
//! ```
//!
//! #   Example: accessing elements
//!
//! `Vector` provides multiple ways to access elements:
//!
//! -   The `get` and `get_mut` methods allow faillible scalar access.
//! -   The `unsafe` `get_unchecked` and `get_unchecked_mut` methods allow infaillible and unchecked scalar access.
//! -   The `Index` and `IndexMut` traits are implemented to provide infaillible checked scalar access.
//! -   The `as_slice` and `as_mut_slice` methods give access to all elements at once.
//!
//! ```
//! use ductile::vector::Vector;
//!
//! let mut vec: Vector<_> = [1, 2, 3, 4, 5].iter().copied().collect();
//!
//! assert_eq!(Some(1), vec.get(0).copied());
//! assert_eq!(Some(2), vec.get_mut(1).copied());
//!
//! assert_eq!(None, vec.get(5));
//! assert_eq!(None, vec.get_mut(5));
//!
//! assert_eq!(1, unsafe { *vec.get_unchecked(0) });
//! assert_eq!(2, unsafe { *vec.get_unchecked_mut(1) });
//!
//! assert_eq!(3, vec[2]);
//! vec[2] = 9;
//! assert_eq!(9, vec[2]);
//!
//! assert_eq!(&[1, 2, 9, 4, 5], vec.as_slice());
//! ```
//!
//! #   Example: managing capacity
//!
//! `Vector` grows automatically, doubling its capacity to the next power of 2 whenever an element is appended to a
//! full `Vector`.
//!
//! It is also possible to manage the capacity explicitly, in which case the capacity requested is taken verbatim:
//!
//! -   The `with_capacity` constructor pre-allocates zero-filled slots, rounded up to the next power of 2.
//! -   The `reserve` method ensures that at least the requested capacity is available.
//! -   The `truncate` method releases the capacity beyond the requested one.
//! -   The `shrink` method releases all capacity beyond the current length.
//! -   The `realloc` method sets the capacity, be it up or down.
//! -   The `release` method frees all the memory, leaving an empty, yet usable, `Vector`.
//!
//! ```
//! use ductile::vector::Vector;
//!
//! let mut vec: Vector<u64> = Vector::with_capacity(3);
//! assert_eq!(4, vec.capacity());
//!
//! //  Explicit requests are not rounded.
//! assert_eq!(6, vec.reserve(6));
//!
//! vec.extend([1, 2, 3, 4, 5, 6].iter().copied());
//! assert_eq!(6, vec.capacity());
//!
//! //  Automatic growth lands on a power of 2.
//! vec.push(7);
//! assert_eq!(8, vec.capacity());
//!
//! assert_eq!(7, vec.shrink());
//!
//! vec.release();
//! assert_eq!(0, vec.len());
//! assert_eq!(0, vec.capacity());
//! ```
//!
//! #   Example: searching and sorting
//!
//! `Vector` has no notion of natural ordering, instead sorting and searching defer to a comparator.
//!
//! ```
//! use ductile::compare::Natural;
//! use ductile::vector::Vector;
//!
//! let by_tens = |a: &u32, b: &u32| (a / 10).cmp(&(b / 10));
//!
//! let mut vec: Vector<u32> = [42, 7, 19, 33].iter().copied().collect();
//!
//! assert_eq!(Some(&19), vec.linear_find(&19, &Natural));
//! assert_eq!(None, vec.linear_find(&20, &Natural));
//!
//! //  Appends 20, as it is not found.
//! assert_eq!(20, *vec.linear_search_or_insert(20, &Natural));
//! assert_eq!(5, vec.len());
//!
//! vec.sort(&by_tens);
//! assert_eq!(&[7, 19, 20, 33, 42], vec.as_slice());
//!
//! assert_eq!(Some(&33), vec.binary_search(&30, &by_tens));
//! assert_eq!(None, vec.binary_search(&50, &by_tens));
//! ```

mod buffer;
mod hooks;
mod order;
mod vector;

pub use self::hooks::VectorHooks;
pub use self::vector::Vector;

#[cfg(feature = "with-std")]
pub use self::hooks::DefaultVectorHooks;

use super::allocator;
use super::failure;
use super::root;
use super::utils::capacity;
