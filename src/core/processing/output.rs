use std::path::{Path, PathBuf};

use crate::core::params::MirrorParams;
use crate::error::{Error, Result};
use crate::types::ImageType;

/// Where and how a mirrored image is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    /// Directory the output lands in; created before saving when it is a
    /// requested subdirectory
    pub directory: PathBuf,
    pub path: PathBuf,
    /// Type selecting the encoder
    pub image_type: ImageType,
}

impl OutputPlan {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Compute the output location for `input`, which should already be absolute.
///
/// The output directory is always relative to the input file's own parent.
/// Without an explicit output type the source extension is kept verbatim,
/// case included.
pub fn plan_output(input: &Path, params: &MirrorParams) -> Result<OutputPlan> {
    let stem = input.file_stem().ok_or_else(|| Error::NoFileName {
        path: input.to_path_buf(),
    })?;
    let parent = input.parent().ok_or_else(|| Error::NoFileName {
        path: input.to_path_buf(),
    })?;

    let (image_type, extension) = match params.output_type {
        Some(t) => (t, t.token().to_string()),
        None => {
            let t = ImageType::from_path(input).ok_or_else(|| {
                Error::unsupported_input(
                    input
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                )
            })?;
            let ext = input
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_else(|| t.token().to_string());
            (t, ext)
        }
    };

    let directory = match params.output_dir_name() {
        Some(name) => parent.join(name),
        None => parent.to_path_buf(),
    };

    let file_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        params.axis.suffix(),
        extension
    );

    Ok(OutputPlan {
        path: directory.join(file_name),
        directory,
        image_type,
    })
}
