//! Capability injection
//!
//! The image codecs are handed to the generator at startup. A missing
//! capability is a plain `None`, checked before any work starts.

use std::sync::Arc;

use crate::domain::ports::{IcoEncoder, ImageResizer};
use crate::error::{GenerateError, GenerateResult};

/// Name reported when no resizer was supplied
pub const IMAGE_RESIZER: &str = "image resizer";
/// Name reported when no ICO encoder was supplied
pub const ICO_ENCODER: &str = "ICO encoder";

/// External image capabilities the generator needs
#[derive(Clone, Default)]
pub struct Capabilities {
    pub resizer: Option<Arc<dyn ImageResizer>>,
    pub ico_encoder: Option<Arc<dyn IcoEncoder>>,
}

impl Capabilities {
    pub fn new(resizer: Arc<dyn ImageResizer>, ico_encoder: Arc<dyn IcoEncoder>) -> Self {
        Self {
            resizer: Some(resizer),
            ico_encoder: Some(ico_encoder),
        }
    }

    /// Both capabilities, or the name of the first one missing.
    pub fn require(&self) -> GenerateResult<(Arc<dyn ImageResizer>, Arc<dyn IcoEncoder>)> {
        let resizer = self
            .resizer
            .clone()
            .ok_or(GenerateError::MissingCapability {
                name: IMAGE_RESIZER,
            })?;
        let ico_encoder = self
            .ico_encoder
            .clone()
            .ok_or(GenerateError::MissingCapability { name: ICO_ENCODER })?;
        Ok((resizer, ico_encoder))
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("resizer", &self.resizer.is_some())
            .field("ico_encoder", &self.ico_encoder.is_some())
            .finish()
    }
}
