//! Configuration for tinystl-foundation
//!
//! The allocator itself is stateless, so the only tunables are process-wide:
//! a ceiling on a single request and whether allocation traffic is traced.
//! The configuration is set at most once and read lock-free afterwards.

use std::sync::OnceLock;

use crate::error::{MemoryError, MemoryResult};

#[cfg(feature = "logging")]
use tracing::debug;

/// Allocator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatorConfig {
    /// Largest single request, in bytes, that `allocate` will forward to the
    /// backend. Requests above it fail with `ExceedsMaxSize`.
    pub max_allocation_size: usize,

    /// Emit a `trace` event for every allocate / deallocate call
    /// (requires the `logging` feature).
    pub trace_allocations: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_allocation_size: isize::MAX as usize,
            trace_allocations: false,
        }
    }
}

impl AllocatorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Production configuration: no per-call tracing, platform size limit
    pub fn production() -> Self {
        Self::default()
    }

    /// Debug configuration: every allocate / deallocate is traced
    pub fn debug() -> Self {
        Self {
            trace_allocations: true,
            ..Self::default()
        }
    }

    /// Set the per-request ceiling in bytes
    #[must_use]
    pub fn with_max_allocation_size(mut self, bytes: usize) -> Self {
        self.max_allocation_size = bytes;
        self
    }

    /// Enable or disable allocation tracing
    #[must_use]
    pub fn with_trace_allocations(mut self, enabled: bool) -> Self {
        self.trace_allocations = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MemoryResult<()> {
        #[cfg(feature = "logging")]
        debug!(config = ?self, "validating allocator configuration");

        if self.max_allocation_size == 0 {
            return Err(MemoryError::invalid_config(
                "max_allocation_size must be greater than zero",
            ));
        }

        if self.max_allocation_size > isize::MAX as usize {
            return Err(MemoryError::invalid_config(
                "max_allocation_size must not exceed isize::MAX",
            ));
        }

        Ok(())
    }
}

// Global configuration instance
static GLOBAL_CONFIG: OnceLock<AllocatorConfig> = OnceLock::new();

/// Install the process-wide configuration
///
/// Fails if the configuration is invalid or if one has already been
/// installed (including the lazily installed default, see [`get`]).
pub fn initialize(config: AllocatorConfig) -> MemoryResult<()> {
    config.validate()?;

    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| MemoryError::initialization_failed("allocator config (already set)"))
}

/// Get the global configuration
///
/// Installs [`AllocatorConfig::default`] on first use if nothing was
/// initialized explicitly.
pub fn get() -> &'static AllocatorConfig {
    GLOBAL_CONFIG.get_or_init(AllocatorConfig::default)
}

/// Check if a configuration has been installed
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
