//! Generator configuration
//!
//! The asset tables and paths are fixed; nothing is read from files or the
//! environment. `GeneratorConfig` resolves the relative paths against a
//! project root (the working directory when run from the CLI).

use std::path::{Path, PathBuf};

use crate::domain::entities::{IconTarget, ManifestIcon, WebManifest};

/// Source icon, relative to the project root
pub const SOURCE_ICON: &str = "src/main/resources/assets/icon.png";

/// Image output directory, relative to the project root
pub const OUTPUT_DIR: &str = "docs/static/img";

/// Verbatim copy of the source icon
pub const CANONICAL_ICON: &str = "icon.png";

/// Multi-resolution icon container
pub const FAVICON_ICO: &str = "favicon.ico";

/// Manifest file name, written one level above the image directory
pub const MANIFEST_FILE: &str = "site.webmanifest";

/// Sized raster outputs, in generation order
pub const ICON_TARGETS: &[IconTarget] = &[
    IconTarget::new(16, "favicon-16x16.png", "Browser tab icon (small)"),
    IconTarget::new(32, "favicon-32x32.png", "Browser tab icon (standard)"),
    IconTarget::new(48, "favicon-48x48.png", "Browser tab icon (high DPI)"),
    IconTarget::new(64, "favicon-64x64.png", "Browser tab icon (very high DPI)"),
    IconTarget::new(180, "apple-touch-icon.png", "iOS home screen icon"),
    IconTarget::new(192, "android-chrome-192x192.png", "Android home screen icon"),
    IconTarget::new(512, "android-chrome-512x512.png", "Android splash screen"),
    IconTarget::new(1200, "og-image.png", "Open Graph social media preview"),
];

/// Sizes packed into `favicon.ico`, in container order
pub const ICO_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

/// Static metadata for `site.webmanifest`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestMetadata {
    pub name: &'static str,
    pub short_name: &'static str,
    /// URL path the image directory is served under
    pub icon_url_prefix: &'static str,
    /// `(file name, size)` of the icons the manifest lists
    pub icons: &'static [(&'static str, u32)],
    pub theme_color: &'static str,
    pub background_color: &'static str,
    pub display: &'static str,
}

pub const MANIFEST: ManifestMetadata = ManifestMetadata {
    name: "Compostables Mod Documentation",
    short_name: "Compostables",
    icon_url_prefix: "/img",
    icons: &[
        ("android-chrome-192x192.png", 192),
        ("android-chrome-512x512.png", 512),
    ],
    theme_color: "#4a7c59",
    background_color: "#ffffff",
    display: "standalone",
};

impl ManifestMetadata {
    pub fn to_manifest(&self) -> WebManifest {
        WebManifest {
            name: self.name.to_string(),
            short_name: self.short_name.to_string(),
            icons: self
                .icons
                .iter()
                .map(|(file, size)| {
                    ManifestIcon::png(format!("{}/{}", self.icon_url_prefix, file), *size)
                })
                .collect(),
            theme_color: self.theme_color.to_string(),
            background_color: self.background_color.to_string(),
            display: self.display.to_string(),
        }
    }
}

/// Resolved generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Source icon path
    pub source: PathBuf,
    /// Image output directory
    pub output_dir: PathBuf,
    pub targets: &'static [IconTarget],
    pub ico_sizes: &'static [u32],
    pub manifest: ManifestMetadata,
}

impl GeneratorConfig {
    /// Resolve the fixed relative paths against `root`.
    pub fn for_root(root: &Path) -> Self {
        Self {
            source: root.join(SOURCE_ICON),
            output_dir: root.join(OUTPUT_DIR),
            targets: ICON_TARGETS,
            ico_sizes: ICO_SIZES,
            manifest: MANIFEST,
        }
    }

    pub fn target_path(&self, target: &IconTarget) -> PathBuf {
        self.output_dir.join(target.file_name)
    }

    pub fn canonical_icon_path(&self) -> PathBuf {
        self.output_dir.join(CANONICAL_ICON)
    }

    pub fn ico_path(&self) -> PathBuf {
        self.output_dir.join(FAVICON_ICO)
    }

    /// Parent of the image directory.
    pub fn manifest_dir(&self) -> PathBuf {
        self.output_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output_dir.clone())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.manifest_dir().join(MANIFEST_FILE)
    }
}
