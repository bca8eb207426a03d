//! Multi-resolution ICO encoding with the `ico` crate

use std::io::Cursor;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};

use crate::domain::ports::IcoEncoder;
use crate::error::{GenerateError, GenerateResult};

/// ICO encoder backed by the `ico` crate
///
/// Entries are stored in input order. The crate stores 256 px entries as PNG
/// and smaller ones as BMP.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcoCrateEncoder;

impl IcoEncoder for IcoCrateEncoder {
    fn encode(&self, pngs: &[Vec<u8>]) -> GenerateResult<Vec<u8>> {
        if pngs.is_empty() {
            return Err(GenerateError::Ico {
                message: "no images to encode".to_string(),
            });
        }

        let mut icon_dir = IconDir::new(ResourceType::Icon);
        for png in pngs {
            let image = IconImage::read_png(Cursor::new(png)).map_err(ico_error)?;
            let entry = IconDirEntry::encode(&image).map_err(ico_error)?;
            icon_dir.add_entry(entry);
        }

        let mut out = Vec::new();
        icon_dir.write(&mut out).map_err(ico_error)?;
        Ok(out)
    }
}

fn ico_error(err: std::io::Error) -> GenerateError {
    GenerateError::Ico {
        message: err.to_string(),
    }
}
