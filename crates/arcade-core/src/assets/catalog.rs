//! Fixed list of files copied into every project

/// GitHub repository hosting the ARCADE library
pub const LIBRARY_REPO: &str = "GeorgeET15/arcade-lib";

/// How an asset body is transferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Decoded as UTF-8 text (headers)
    Text,
    /// Copied byte for byte (audio)
    Binary,
}

/// A remote file and where it lands inside the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub url: String,
    /// Destination relative to the project root, `/`-separated
    pub path: String,
    pub transfer: Transfer,
}

impl AssetDescriptor {
    pub fn text(url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
            transfer: Transfer::Text,
        }
    }

    pub fn binary(url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
            transfer: Transfer::Binary,
        }
    }
}

fn raw_url(file: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{}/main/{}",
        LIBRARY_REPO, file
    )
}

/// Library headers; `arcade.h` comes from the release `tag`, the stb headers from `main`
pub fn header_assets(tag: &str) -> Vec<AssetDescriptor> {
    vec![
        AssetDescriptor::text(
            format!(
                "https://github.com/{}/releases/download/{}/arcade.h",
                LIBRARY_REPO, tag
            ),
            "arcade/arcade.h",
        ),
        AssetDescriptor::text(raw_url("include/stb_image.h"), "arcade/stb_image.h"),
        AssetDescriptor::text(
            raw_url("include/stb_image_write.h"),
            "arcade/stb_image_write.h",
        ),
        AssetDescriptor::text(
            raw_url("include/stb_image_resize2.h"),
            "arcade/stb_image_resize2.h",
        ),
    ]
}

/// Audio used by the demo project
pub fn audio_assets() -> Vec<AssetDescriptor> {
    vec![AssetDescriptor::binary(
        raw_url("assets/background_music.wav"),
        "assets/background_music.wav",
    )]
}
