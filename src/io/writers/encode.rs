use std::fs;
use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::core::processing::output::OutputPlan;
use crate::error::{Error, Result};

/// Create `directory` and any missing parents; existing directories are fine.
pub fn ensure_directory(directory: &Path, output_name: &str) -> Result<()> {
    fs::create_dir_all(directory).map_err(|source| Error::CreateDir {
        name: output_name.to_string(),
        source,
    })
}

/// Encode `image` to `plan.path` with the encoder selected by `plan.image_type`.
pub fn write_image(image: &DynamicImage, plan: &OutputPlan) -> Result<()> {
    debug!(
        "Writing {:?} as {}",
        plan.path,
        plan.image_type.encoder_name()
    );
    image
        .save_with_format(&plan.path, plan.image_type.image_format())
        .map_err(|source| Error::Save {
            name: plan.file_name(),
            source,
        })
}
