//! Providers Module - External Collaborators
//!
//! Key generation, match storage on disk and push delivery.

pub mod keygen;
pub mod notifier;
pub mod storage;

pub use keygen::*;
pub use notifier::*;
pub use storage::*;
