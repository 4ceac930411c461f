//! Shared types used across imgmirror.
//! Includes `FlipAxis` and the closed set of supported `ImageType`s.
use std::path::Path;

use image::ImageFormat;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum FlipAxis {
    /// Left-right
    #[default]
    Horizontal,
    /// Top-bottom
    Vertical,
}

impl FlipAxis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            FlipAxis::Vertical
        } else {
            FlipAxis::Horizontal
        }
    }

    /// Suffix appended to the output file stem
    pub fn suffix(self) -> &'static str {
        match self {
            FlipAxis::Horizontal => "_h",
            FlipAxis::Vertical => "_v",
        }
    }
}

impl std::fmt::Display for FlipAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlipAxis::Horizontal => write!(f, "Horizontal"),
            FlipAxis::Vertical => write!(f, "Vertical"),
        }
    }
}

/// Image types accepted as input extensions and as output types.
///
/// `Jpg` and `Jpeg` are kept apart so the output extension follows what the
/// user asked for, while both encode through the same JPEG encoder.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ImageType {
    Jpg,
    Jpeg,
    Png,
    Webp,
    Gif,
    Bmp,
}

impl ImageType {
    pub const ALL: [ImageType; 6] = [
        ImageType::Jpg,
        ImageType::Jpeg,
        ImageType::Png,
        ImageType::Webp,
        ImageType::Gif,
        ImageType::Bmp,
    ];

    /// Parse a type token or extension, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.token().eq_ignore_ascii_case(token))
    }

    /// Type of a path judged by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_token)
    }

    pub fn token(self) -> &'static str {
        match self {
            ImageType::Jpg => "jpg",
            ImageType::Jpeg => "jpeg",
            ImageType::Png => "png",
            ImageType::Webp => "webp",
            ImageType::Gif => "gif",
            ImageType::Bmp => "bmp",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            ImageType::Jpg | ImageType::Jpeg => ImageFormat::Jpeg,
            ImageType::Png => ImageFormat::Png,
            ImageType::Webp => ImageFormat::WebP,
            ImageType::Gif => ImageFormat::Gif,
            ImageType::Bmp => ImageFormat::Bmp,
        }
    }

    /// Upper-case encoder name, `jpg` folded into `JPEG`.
    pub fn encoder_name(self) -> &'static str {
        match self {
            ImageType::Jpg | ImageType::Jpeg => "JPEG",
            ImageType::Png => "PNG",
            ImageType::Webp => "WEBP",
            ImageType::Gif => "GIF",
            ImageType::Bmp => "BMP",
        }
    }

    /// "jpg, jpeg, png, webp, gif, bmp"
    pub fn supported_tokens() -> String {
        Self::ALL.map(|t| t.token()).join(", ")
    }

    /// ".jpg, .jpeg, .png, .webp, .gif, .bmp"
    pub fn supported_extensions() -> String {
        Self::ALL.map(|t| format!(".{}", t.token())).join(", ")
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
