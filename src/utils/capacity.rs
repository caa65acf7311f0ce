//! Capacity policy of the Vector.
//!
//! Two policies co-exist:
//!
//! -   Automatic growth, triggered by appending to a full Vector, which always lands on a power of 2.
//! -   Explicit sizing, requested by the user, which is taken verbatim.
//!
//! Only the former is computed here; the latter needs no computation.

use super::root::mem;

//  Returns the smallest power of 2 greater than or equal to `n`.
//
//  For practical purposes, the power of 2 of 0 is defined as 1.
//
//  Returns None if the result would overflow.
pub fn round_up(n: usize) -> Option<usize> {
    let log2 = ceil_log2(n);

    if log2 < USIZE_BITS { Some(1usize << log2) } else { None }
}

//  Returns the capacity to grow to, when appending to a full Vector of capacity `current`.
//
//  The result is always a power of 2, and always strictly greater than `current`.
//
//  Returns None if the result would overflow.
pub fn grow(current: usize) -> Option<usize> {
    let current = if current == 0 { 1 } else { current };
    let next = round_up(current)?;

    if next == current { next.checked_mul(2) } else { Some(next) }
}

//
//  Implementation Details
//

//  Number of bits in usize.
const USIZE_BITS: u8 = mem::size_of::<usize>() as u8 * 8;

//  Returns the log2 of n, rounded up to the next integer.
//
//  For practical purposes, the log2 of 0 is defined as 0.
fn ceil_log2(n: usize) -> u8 {
    match n {
        0 | 1 => 0,
        _ if n.count_ones() == 1 => USIZE_BITS - 1 - n.leading_zeros() as u8,
        _ => USIZE_BITS - n.leading_zeros() as u8,
    }
}

//  mod tests
