//! Generate Options

/// Options for the generate use case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Overwrite assets that already exist
    pub force: bool,
}

impl GenerateOptions {
    pub fn forced() -> Self {
        Self { force: true }
    }
}
