//! # tinystl-foundation
//!
//! Foundation layer for the tinystl containers.
//!
//! This crate provides the pieces every container is built from:
//! - A stateless typed allocator that keeps storage acquisition and object
//!   construction as separate steps
//! - A two-element product type, [`Pair`], with a constructor set that
//!   separates implicit conversion from explicit construction
//! - A compile-time predicate, [`IsPair`](type_traits::IsPair), telling
//!   pair element types apart
//! - Move, forward and swap utilities
//!
//! ## Quick Start
//!
//! ```rust
//! use tinystl_foundation::prelude::*;
//!
//! # fn main() -> MemoryResult<()> {
//! tinystl_foundation::init()?;
//!
//! // Raw storage first, objects second
//! let storage = Allocator::<Pair<u32, String>>::allocate_n(4)?;
//! let slot = storage.slot(0).unwrap();
//! unsafe {
//!     Allocator::<Pair<u32, String>>::construct_move(slot, make_pair(1, "one".into()));
//!     assert_eq!(slot.as_ref().second, "one");
//!     Allocator::<Pair<u32, String>>::destroy(slot);
//!     Allocator::<Pair<u32, String>>::deallocate(storage);
//! }
//!
//! // Pair element types are recognised at compile time
//! const { assert!(is_pair::<Pair<u32, String>>()) };
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): Required; the system backend and the global
//!   configuration live on std
//! - `logging` (default): Structured `tracing` events for allocation
//!   traffic, failures and range rollback
//!
//! ## Architecture
//!
//! - Standalone error handling via [`error`] module
//! - Optional structured logging via `tracing` (feature: `logging`)
//! - Process-wide settings via [`core::config`](crate::core::config)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]
#![warn(clippy::perf)]
#![warn(clippy::pedantic)]
#![warn(rust_2018_idioms)]
#![allow(unsafe_code)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
// inline(always) on the identity forward is intentional
#![allow(clippy::inline_always)]
// #[must_use] on fns returning Self/Result documents intent even if type is already must_use
#![allow(clippy::double_must_use)]
#![allow(clippy::return_self_not_must_use)]

#[cfg(not(feature = "std"))]
compile_error!("tinystl-foundation requires the `std` feature");

// Error types
pub mod error;

// Core modules
pub mod allocator;
pub mod core;
pub mod macros;
pub mod pair;
pub mod type_traits;
pub mod utility;

// Re-export core types for convenience
pub use crate::core::{AllocatorConfig, ConstructFrom, Forward};
pub use crate::error::{MemoryError, MemoryResult, Result};
pub use crate::pair::{Pair, make_pair};

// Public API exports
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    // Core types
    pub use crate::core::AllocatorConfig;
    pub use crate::core::traits::{ConstructFrom, Forward};

    // Error types (standalone!)
    pub use crate::error::{MemoryError, MemoryResult, Result};

    // Allocator types
    pub use crate::allocator::{
        AllocError, AllocResult, Allocator, RawAllocator, RawStorage, SystemAllocator,
    };

    // Pair and its predicate
    pub use crate::pair::{Pair, make_pair};
    pub use crate::type_traits::{FalseType, IsPair, NotAPair, PairLike, TrueType, is_pair};

    // Value-category and exchange utilities
    pub use crate::utility::{forward, move_out, swap, swap_arrays, swap_range};
}

// Re-export allocator types at crate root for convenience
pub use crate::allocator::{AllocError, AllocResult};

#[cfg(feature = "logging")]
use tracing::{debug, info};

/// Initialize tinystl-foundation with default configuration.
///
/// Installs [`AllocatorConfig::default`] unless a configuration is already
/// in place, so calling it more than once is harmless.
///
/// # Examples
///
/// ```rust
/// fn main() -> tinystl_foundation::MemoryResult<()> {
///     tinystl_foundation::init()?;
///
///     // Your application code here
///
///     Ok(())
/// }
/// ```
pub fn init() -> MemoryResult<()> {
    #[cfg(feature = "logging")]
    {
        debug!("Initializing tinystl-foundation");
    }

    let config = crate::core::config::get();

    #[cfg(feature = "logging")]
    {
        info!(config = ?config, "tinystl-foundation initialized");
    }
    #[cfg(not(feature = "logging"))]
    let _ = config;

    Ok(())
}

/// Initialize tinystl-foundation with an explicit configuration.
///
/// Fails if `config` is invalid or if a configuration was already installed
/// (by an earlier `init*` call or by the first allocation).
pub fn init_with_config(config: AllocatorConfig) -> MemoryResult<()> {
    #[cfg(feature = "logging")]
    {
        debug!(config = ?config, "Initializing tinystl-foundation");
    }

    crate::core::config::initialize(config)?;

    #[cfg(feature = "logging")]
    {
        info!("tinystl-foundation initialized successfully");
    }

    Ok(())
}

/// Shutdown tinystl-foundation.
///
/// Nothing is held globally beyond the configuration, so this only marks
/// the end of the allocator's lifetime in the logs.
pub fn shutdown() -> MemoryResult<()> {
    #[cfg(feature = "logging")]
    {
        debug!("Shutting down tinystl-foundation");
        info!("tinystl-foundation shutdown complete");
    }

    Ok(())
}
