//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod generate_events;
pub mod image_codec;

pub use file_system::{FileSystem, FsError, FsResult};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink, WriteAction};
pub use image_codec::{IcoEncoder, ImageResizer};
