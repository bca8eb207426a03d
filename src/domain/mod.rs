//! Domain Layer
//!
//! Pure icon-generation concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Icon targets, the web manifest, step outcomes and the run report
//! - `services/` - Fit-within-bounds geometry
//! - `ports/` - Interface definitions for infrastructure (file system, codecs, events)

pub mod entities;
pub mod ports;
pub mod services;
