use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use imgmirror::{
    FileReport, FileStatus, FlipAxis, ImageType, MirrorParams, has_supported_extension,
    process_directory, process_image,
};

use super::args::CliArgs;
use super::errors::AppError;

/// One user-facing line and the stream it belongs on
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Out(String),
    Err(String),
}

impl Line {
    fn emit(self) {
        match self {
            Line::Out(text) => println!("{text}"),
            Line::Err(text) => eprintln!("{text}"),
        }
    }
}

fn report_lines(report: &FileReport) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2);
    if report.converted_for_jpeg() {
        lines.push(Line::Err(format!(
            "Info: Converting image {} to RGB for JPEG output.",
            report.input_name()
        )));
    }
    lines.push(match &report.status {
        FileStatus::Processed { output } => Line::Out(format!(
            "Processed '{}' -> '{}'",
            report.input.display(),
            output.display()
        )),
        FileStatus::Skipped => Line::Err(format!(
            "Skipping non-image file: {}",
            report.input_name()
        )),
        FileStatus::Failed(e) => Line::Err(e.to_string()),
    });
    lines
}

fn directory_header(input_dir: &Path) -> Line {
    Line::Out(format!(
        "Processing images in directory: {}",
        input_dir.display()
    ))
}

fn directory_summary(attempted: usize) -> Line {
    if attempted == 0 {
        Line::Out("No supported image files found in the directory.".to_string())
    } else {
        Line::Out(format!("Finished processing {attempted} image(s)."))
    }
}

fn print_report(report: &FileReport) {
    for line in report_lines(report) {
        line.emit();
    }
}

fn parse_output_type(value: Option<&str>) -> Result<Option<ImageType>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => ImageType::from_token(v)
            .map(Some)
            .ok_or_else(|| AppError::UnsupportedOutputType {
                value: v.to_string(),
                supported: ImageType::supported_tokens(),
            }),
    }
}

/// Check existence and readability, then make the path absolute.
fn resolve_input(path: &Path) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::PathNotFound {
            path: path.to_path_buf(),
        });
    }
    let unreadable = |source| AppError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let resolved = fs::canonicalize(path).map_err(unreadable)?;
    if resolved.is_dir() {
        fs::read_dir(&resolved).map_err(unreadable)?;
    } else {
        fs::File::open(&resolved).map_err(unreadable)?;
    }
    Ok(resolved)
}

fn run_single(input: &Path, params: &MirrorParams) -> Result<(), AppError> {
    if !has_supported_extension(input) {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Err(imgmirror::Error::unsupported_input(name).into());
    }

    let report = process_image(input, params);
    print_report(&report);
    Ok(())
}

fn run_directory(input_dir: &Path, params: &MirrorParams) -> Result<(), AppError> {
    directory_header(input_dir).emit();

    let report = process_directory(input_dir, params, print_report)?;

    directory_summary(report.attempted).emit();
    info!(
        "Processed: {}, skipped: {}, errors: {}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    // Validated before the input path so a bad type fails regardless of input
    let output_type = parse_output_type(args.output_type.as_deref())?;
    let params = MirrorParams {
        axis: FlipAxis::from_vertical(args.vertical),
        output_dir: args.output_dir,
        output_type,
    };

    let input = resolve_input(&args.input_path)?;
    info!("Input: {:?}, params: {:?}", input, params);

    if input.is_file() {
        run_single(&input, &params)
    } else if input.is_dir() {
        run_directory(&input, &params)
    } else {
        warn!("Neither a file nor a directory: {:?}", input);
        Ok(())
    }
}
