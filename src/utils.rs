//! Internal utilities.

pub mod capacity;
pub mod root;

#[cfg(test)]
pub mod tester;
