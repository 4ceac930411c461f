use image::DynamicImage;

use crate::types::FlipAxis;

/// Mirror `image` across `axis`.
pub fn flip_image(image: &DynamicImage, axis: FlipAxis) -> DynamicImage {
    match axis {
        FlipAxis::Horizontal => image.fliph(),
        FlipAxis::Vertical => image.flipv(),
    }
}
