//! Domain Entities
//!
//! - `IconTarget` - One sized raster output
//! - `WebManifest` - The installable-web-app manifest document
//! - `GenerationReport` - Per-step outcomes of a generator run

mod icon_target;
mod manifest;
mod report;

pub use icon_target::IconTarget;
pub use manifest::{ManifestIcon, WebManifest};
pub use report::{GenerationReport, StepOutcome, StepReport};
