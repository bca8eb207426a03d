//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
#[cfg(test)]
mod memory;

pub use local::{atomic_write, LocalFs};
#[cfg(test)]
pub use memory::MemoryFs;
