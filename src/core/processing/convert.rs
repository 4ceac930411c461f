use image::{ColorType, DynamicImage, ImageFormat};
use tracing::debug;

/// A color layout change applied so the target encoder can write the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConversion {
    pub from: ColorType,
    pub to: ColorType,
}

impl ColorConversion {
    pub fn drops_alpha(&self) -> bool {
        self.from.has_alpha() && !self.to.has_alpha()
    }
}

fn encoder_accepts(format: ImageFormat, color: ColorType) -> bool {
    use ColorType::*;
    match format {
        ImageFormat::Jpeg => matches!(color, L8 | Rgb8),
        ImageFormat::Png => matches!(
            color,
            L8 | La8 | Rgb8 | Rgba8 | L16 | La16 | Rgb16 | Rgba16
        ),
        ImageFormat::Gif => matches!(color, Rgb8 | Rgba8),
        _ => matches!(color, L8 | La8 | Rgb8 | Rgba8),
    }
}

fn target_color(format: ImageFormat, color: ColorType) -> ColorType {
    match format {
        // JPEG has no alpha
        ImageFormat::Jpeg if !color.has_color() => ColorType::L8,
        ImageFormat::Jpeg => ColorType::Rgb8,
        ImageFormat::Png if color.has_alpha() => ColorType::Rgba16,
        ImageFormat::Png => ColorType::Rgb16,
        _ if color.has_alpha() => ColorType::Rgba8,
        _ => ColorType::Rgb8,
    }
}

fn convert_to(image: DynamicImage, to: ColorType) -> DynamicImage {
    match to {
        ColorType::L8 => DynamicImage::ImageLuma8(image.into_luma8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(image.into_rgb8()),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(image.into_rgba8()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(image.into_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(image.into_rgba16()),
        _ => image,
    }
}

/// Convert `image` into a layout `format`'s encoder can write.
///
/// Returns the image untouched and `None` when no conversion is needed.
pub fn prepare_for_encoder(
    image: DynamicImage,
    format: ImageFormat,
) -> (DynamicImage, Option<ColorConversion>) {
    let from = image.color();
    if encoder_accepts(format, from) {
        return (image, None);
    }

    let to = target_color(format, from);
    debug!("Converting {:?} -> {:?} for {:?} encoder", from, to, format);
    (convert_to(image, to), Some(ColorConversion { from, to }))
}
