//! High-level library API: mirror a single file or every supported image in a
//! directory. Per-file failures never escape as `Err`; they are reported in a
//! `FileReport` so one bad file cannot abort a batch.
use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info, warn};

use crate::core::params::MirrorParams;
use crate::core::processing::convert::{ColorConversion, prepare_for_encoder};
use crate::core::processing::flip::flip_image;
use crate::core::processing::output::plan_output;
use crate::error::{Error, Result};
use crate::io::reader::{file_name, open_image};
use crate::io::writers::{ensure_directory, write_image};
use crate::types::ImageType;

/// Final state of one file
#[derive(Debug)]
pub enum FileStatus {
    Processed { output: PathBuf },
    /// Content was not a recognizable image
    Skipped,
    Failed(Error),
}

/// Outcome of mirroring one file
#[derive(Debug)]
pub struct FileReport {
    /// Absolute input path (or the path as given when it could not be resolved)
    pub input: PathBuf,
    /// Color conversion applied before encoding, if any
    pub conversion: Option<ColorConversion>,
    /// Source stored palette indices
    pub indexed_source: bool,
    /// Type the output was encoded as, once it was decided
    pub target: Option<ImageType>,
    pub status: FileStatus,
}

impl FileReport {
    pub fn is_processed(&self) -> bool {
        matches!(self.status, FileStatus::Processed { .. })
    }

    /// True when a JPEG target forced an alpha or palette source down to
    /// plain color.
    pub fn converted_for_jpeg(&self) -> bool {
        let jpeg = self
            .target
            .is_some_and(|t| t.image_format() == ImageFormat::Jpeg);
        jpeg && (self.indexed_source || self.conversion.is_some_and(|c| c.drops_alpha()))
    }

    pub fn input_name(&self) -> String {
        file_name(&self.input)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Files with a supported extension, whatever their outcome
    pub attempted: usize,
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl BatchReport {
    fn record(&mut self, report: &FileReport) {
        self.attempted += 1;
        match report.status {
            FileStatus::Processed { .. } => self.processed += 1,
            FileStatus::Skipped => self.skipped += 1,
            FileStatus::Failed(_) => self.errors += 1,
        }
    }
}

/// Whether `path` carries one of the supported image extensions
pub fn has_supported_extension(path: &Path) -> bool {
    ImageType::from_path(path).is_some()
}

/// What is known about a file before its final status
#[derive(Default)]
struct Progress {
    conversion: Option<ColorConversion>,
    indexed_source: bool,
    target: Option<ImageType>,
}

fn mirror_into(input: &Path, params: &MirrorParams, progress: &mut Progress) -> Result<PathBuf> {
    let decoded = open_image(input)?;
    progress.indexed_source = decoded.indexed;
    let mirrored = flip_image(&decoded.image, params.axis);
    drop(decoded);

    let plan = plan_output(input, params)?;
    progress.target = Some(plan.image_type);
    if params.output_dir_name().is_some() {
        ensure_directory(&plan.directory, &plan.file_name())?;
    }

    let (ready, applied) = prepare_for_encoder(mirrored, plan.image_type.image_format());
    progress.conversion = applied;
    write_image(&ready, &plan)?;

    Ok(fs::canonicalize(&plan.path).unwrap_or(plan.path))
}

/// Mirror one image file according to `params`.
///
/// The input path is resolved to an absolute path first so the output
/// location does not depend on the current directory.
pub fn process_image(input: &Path, params: &MirrorParams) -> FileReport {
    let resolved = match fs::canonicalize(input) {
        Ok(path) => path,
        Err(source) => {
            return FileReport {
                input: input.to_path_buf(),
                conversion: None,
                indexed_source: false,
                target: None,
                status: FileStatus::Failed(Error::Read {
                    name: file_name(input),
                    source,
                }),
            };
        }
    };

    let mut progress = Progress::default();
    let status = match mirror_into(&resolved, params, &mut progress) {
        Ok(output) => {
            debug!("Mirrored {:?} ({}) -> {:?}", resolved, params.axis, output);
            FileStatus::Processed { output }
        }
        Err(e) if e.is_skip() => {
            debug!("Not an image: {:?}", resolved);
            FileStatus::Skipped
        }
        Err(e) => {
            warn!("Failed on {:?}: {}", resolved, e);
            FileStatus::Failed(e)
        }
    };

    FileReport {
        input: resolved,
        conversion: progress.conversion,
        indexed_source: progress.indexed_source,
        target: progress.target,
        status,
    }
}

/// Direct children of `input_dir` that are files with a supported extension,
/// in directory-listing order.
pub fn iterate_image_files(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Unreadable entry in {:?}: {}", input_dir, e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && has_supported_extension(&path) {
            files.push(path);
        } else {
            debug!("Ignoring {:?}", path);
        }
    }
    Ok(files.into_iter())
}

/// Mirror every supported image directly inside `input_dir`.
///
/// `on_file` sees each report as soon as the file is done, before the next
/// one starts.
pub fn process_directory<F>(
    input_dir: &Path,
    params: &MirrorParams,
    mut on_file: F,
) -> Result<BatchReport>
where
    F: FnMut(&FileReport),
{
    let mut report = BatchReport::default();

    for path in iterate_image_files(input_dir)? {
        info!("Processing: {:?}", path);
        let file_report = process_image(&path, params);
        report.record(&file_report);
        on_file(&file_report);
    }

    info!(
        "Batch complete: attempted={} processed={} skipped={} errors={}",
        report.attempted, report.processed, report.skipped, report.errors
    );
    Ok(report)
}
