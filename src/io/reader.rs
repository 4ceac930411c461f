use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// A decoded image together with the format its content was recognized as
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
    /// Source pixels were palette indices; the decoder has already expanded them
    pub indexed: bool,
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn png_is_indexed(path: &Path) -> std::io::Result<bool> {
    let decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    let reader = decoder.read_info().map_err(std::io::Error::other)?;
    Ok(reader.info().color_type == png::ColorType::Indexed)
}

// BITMAPCOREHEADER keeps the bit count at offset 24, every later header at 28.
fn bmp_is_indexed(path: &Path) -> std::io::Result<bool> {
    let mut header = [0u8; 30];
    File::open(path)?.read_exact(&mut header)?;
    let dib_size = u32::from_le_bytes([header[14], header[15], header[16], header[17]]);
    let at = if dib_size == 12 { 24 } else { 28 };
    let bits = u16::from_le_bytes([header[at], header[at + 1]]);
    Ok(bits <= 8)
}

/// Whether `path` stores palette indices rather than full colors.
///
/// Header read failures count as not indexed; the full decode reports them.
pub fn source_is_indexed(path: &Path, format: ImageFormat) -> bool {
    let indexed = match format {
        ImageFormat::Gif => Ok(true),
        ImageFormat::Png => png_is_indexed(path),
        ImageFormat::Bmp => bmp_is_indexed(path),
        _ => Ok(false),
    };
    indexed.unwrap_or_else(|e| {
        debug!("Could not inspect {:?} header: {}", path, e);
        false
    })
}

/// Open and decode `path`, recognizing the format from the file content.
///
/// A file whose content matches no known format yields
/// `Error::UnrecognizedImage`. The file handle is dropped before returning.
pub fn open_image(path: &Path) -> Result<DecodedImage> {
    let name = file_name(path);
    let file = File::open(path).map_err(|source| Error::Read {
        name: name.clone(),
        source,
    })?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| Error::Read {
            name: name.clone(),
            source,
        })?;

    let Some(format) = reader.format() else {
        return Err(Error::UnrecognizedImage { name });
    };
    debug!("Detected {:?} content in {:?}", format, path);

    let image = reader
        .decode()
        .map_err(|source| Error::Open { name, source })?;
    debug!(
        "Decoded {}x{} {:?}",
        image.width(),
        image.height(),
        image.color()
    );

    let indexed = source_is_indexed(path, format);
    Ok(DecodedImage {
        image,
        format,
        indexed,
    })
}
