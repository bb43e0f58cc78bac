//! Standalone error types for tinystl-foundation
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.
//!
//! Only resource and configuration failures live here. A constructor that
//! fails while building an element in place reports the caller's own error
//! type, unchanged, through [`Allocator::try_construct_with`].
//!
//! [`Allocator::try_construct_with`]: crate::allocator::Allocator::try_construct_with

use core::alloc::Layout;
use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::{error, warn};

// ============================================================================
// Main Error Types
// ============================================================================

/// Memory management errors
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    // --- Allocation Errors ---
    #[error("Memory allocation failed: {size} bytes with {align} byte alignment")]
    AllocationFailed { size: usize, align: usize },

    #[error("Size overflow during operation: {operation}")]
    SizeOverflow { operation: String },

    #[error("Allocation exceeds maximum size: {size} bytes (max: {max_size})")]
    ExceedsMaxSize { size: usize, max_size: usize },

    // --- Configuration Errors ---
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Initialization failed: {reason}")]
    InitializationFailed { reason: String },
}

impl MemoryError {
    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AllocationFailed { .. } => "MEM:ALLOC:FAILED",
            Self::SizeOverflow { .. } => "MEM:ALLOC:OVERFLOW",
            Self::ExceedsMaxSize { .. } => "MEM:ALLOC:MAX",
            Self::InvalidConfig { .. } => "MEM:CONFIG:INVALID",
            Self::InitializationFailed { .. } => "MEM:SYSTEM:INIT",
        }
    }

    /// Whether the error reports resource exhaustion rather than a caller
    /// mistake or a bad configuration
    #[must_use]
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }

    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create allocation failed error
    pub fn allocation_failed(size: usize, align: usize) -> Self {
        #[cfg(feature = "logging")]
        error!(size, align, "memory allocation failed");

        Self::AllocationFailed { size, align }
    }

    /// Create allocation failed error from layout
    pub fn allocation_failed_with_layout(layout: Layout) -> Self {
        Self::allocation_failed(layout.size(), layout.align())
    }

    /// Create size overflow error
    pub fn size_overflow(operation: &str) -> Self {
        Self::SizeOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create allocation too large error
    pub fn allocation_too_large(size: usize, max_size: usize) -> Self {
        #[cfg(feature = "logging")]
        warn!(size, max_size, "allocation rejected by size ceiling");

        Self::ExceedsMaxSize { size, max_size }
    }

    /// Create invalid config error
    pub fn invalid_config(reason: &str) -> Self {
        #[cfg(feature = "logging")]
        warn!(reason, "configuration rejected");

        Self::InvalidConfig {
            reason: reason.to_string(),
        }
    }

    /// Create initialization failed error
    pub fn initialization_failed(component: &str) -> Self {
        Self::InitializationFailed {
            reason: format!("failed to initialize {component}"),
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result type for memory operations
pub type MemoryResult<T> = core::result::Result<T, MemoryError>;

/// Generic result type alias
pub type Result<T> = MemoryResult<T>;

/// Type aliases for the allocator module
pub type AllocError = MemoryError;
pub type AllocResult<T> = MemoryResult<T>;

// ============================================================================
// Tests
// ============================================================================
