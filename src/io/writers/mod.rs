pub mod encode;
pub use encode::{ensure_directory, write_image};
