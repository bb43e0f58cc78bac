//! Core functionality for tinystl-foundation
//!
//! This module contains the building blocks shared by the allocator and the
//! pair type:
//! - Configuration structures
//! - Construction and forwarding traits

pub mod config;
pub mod traits;

// Re-export commonly used items
pub use crate::error::{MemoryError, MemoryResult};
pub use config::AllocatorConfig;
pub use traits::{ConstructFrom, Forward};

/// Core prelude for convenient imports
pub mod prelude {
    pub use super::config::AllocatorConfig;
    pub use super::traits::{ConstructFrom, Forward};
    pub use crate::error::{MemoryError, MemoryResult};
}
