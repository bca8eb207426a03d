//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Derives every web icon asset and the manifest from the source icon

mod capabilities;
pub mod generate;

pub use capabilities::{Capabilities, ICO_ENCODER, IMAGE_RESIZER};
pub use generate::{GenerateOptions, GenerateUseCase};
