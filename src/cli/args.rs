use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "imgmirror",
    version,
    about = "Mirror images horizontally (default) or vertically."
)]
pub struct CliArgs {
    /// Path to the image file or directory containing images
    pub input_path: PathBuf,

    /// Mirror vertically instead of horizontally
    #[arg(short = 'v', long, default_value_t = false)]
    pub vertical: bool,

    /// Directory name to create within the original image's parent directory
    /// to save mirrored images. If not provided, saves alongside original.
    #[arg(short = 'd', long, value_name = "NAME")]
    pub output_dir: Option<String>,

    /// Output image type (jpg, jpeg, png, webp, gif, bmp). If not provided,
    /// uses original type.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub output_type: Option<String>,

    /// Enable diagnostic logging on stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
