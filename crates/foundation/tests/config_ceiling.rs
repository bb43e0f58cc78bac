//! Process-wide allocation ceiling.
//!
//! Lives in its own test binary: the configuration can be installed once
//! per process.

#![allow(unsafe_code)]

use tinystl_foundation::allocator::Allocator;
use tinystl_foundation::{AllocatorConfig, MemoryError};

#[test]
fn configured_ceiling_applies_to_every_allocator() {
    let config = AllocatorConfig::production().with_max_allocation_size(1024);
    tinystl_foundation::init_with_config(config).unwrap();
    assert!(tinystl_foundation::core::config::is_initialized());

    // A second install is refused; the first one stays in force.
    let again = tinystl_foundation::init_with_config(AllocatorConfig::debug());
    assert_eq!(again.unwrap_err().code(), "MEM:SYSTEM:INIT");
    tinystl_foundation::init().unwrap();
    assert_eq!(
        tinystl_foundation::core::config::get().max_allocation_size,
        1024
    );

    let err = Allocator::<u32>::allocate_n(257).unwrap_err();
    assert_eq!(
        err,
        MemoryError::ExceedsMaxSize {
            size: 1028,
            max_size: 1024
        }
    );

    let storage = Allocator::<u32>::allocate_n(256).unwrap();
    assert_eq!(storage.byte_len(), 1024);
    unsafe { Allocator::<u32>::deallocate(storage) };

    tinystl_foundation::shutdown().unwrap();
}
