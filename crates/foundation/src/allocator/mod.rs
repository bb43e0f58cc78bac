//! Typed allocation over a raw byte backend
//!
//! [`Allocator`] hands out uninitialized storage for values of one element
//! type and constructs or destroys objects in it as separate steps.
//! [`RawAllocator`] is the byte-level seam underneath, with
//! [`SystemAllocator`] as the default backend.

mod guard;
mod storage;
mod system;
mod traits;
mod typed;

pub use crate::error::{AllocError, AllocResult};
pub use storage::RawStorage;
pub use system::SystemAllocator;
pub use traits::RawAllocator;
pub use typed::Allocator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_accessible() {
        let storage = Allocator::<u8, SystemAllocator>::allocate_n(0).unwrap();
        assert!(storage.is_null());
    }
}
