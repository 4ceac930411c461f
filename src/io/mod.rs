//! I/O layer: content-sniffing image reader and the encoder-backed writer.
pub mod reader;
pub use reader::{DecodedImage, open_image};

pub mod writers;
