//! Core Module - Matching, Classification & the Generation Loop
//!
//! The only part of the tool with real logic: which addresses count as
//! vanity hits, what they are called on disk, and the loop that finds them.

pub mod ascending;
pub mod classifier;
pub mod hunter;
pub mod patterns;

pub use ascending::*;
pub use classifier::*;
pub use hunter::*;
pub use patterns::*;
