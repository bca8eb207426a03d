//! Web app manifest document

use serde::Serialize;

/// One entry of the manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    /// A square PNG icon served from `src`.
    pub fn png(src: impl Into<String>, size: u32) -> Self {
        Self {
            src: src.into(),
            sizes: format!("{0}x{0}", size),
            mime_type: "image/png".to_string(),
        }
    }
}

/// The `site.webmanifest` document.
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub icons: Vec<ManifestIcon>,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
}

impl WebManifest {
    /// Serialize as JSON indented by two spaces, without a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
