#![doc = r#"
imgmirror — mirror images horizontally or vertically.

The crate powers the `imgmirror` CLI and can be embedded directly. Decoding,
the pixel flip and encoding are done by the `image` crate; this crate adds the
file handling around it: output naming, output directories, format selection
and the small color conversions some encoders need.

Mirror one file
---------------
```rust,no_run
use std::path::Path;
use imgmirror::{process_image, FileStatus, FlipAxis, ImageType, MirrorParams};

let params = MirrorParams {
    axis: FlipAxis::Vertical,
    output_dir: Some("mirrored".to_string()),
    output_type: Some(ImageType::Webp),
};

let report = process_image(Path::new("/photos/cat.png"), &params);
match report.status {
    // /photos/mirrored/cat_v.webp
    FileStatus::Processed { output } => println!("wrote {}", output.display()),
    FileStatus::Skipped => println!("not an image"),
    FileStatus::Failed(e) => eprintln!("{e}"),
}
```

Mirror a directory
------------------
```rust,no_run
use std::path::Path;
use imgmirror::{process_directory, MirrorParams};

fn main() -> imgmirror::Result<()> {
    let report = process_directory(Path::new("/photos"), &MirrorParams::default(), |file| {
        println!("{:?}", file.status);
    })?;
    println!("attempted={} processed={}", report.attempted, report.processed);
    Ok(())
}
```

Only direct children are visited, and only files whose extension is one of
`jpg`, `jpeg`, `png`, `webp`, `gif` or `bmp` (any case).
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use self::core::params::MirrorParams;
pub use error::{Error, Result};
pub use types::{FlipAxis, ImageType};

pub use self::core::processing::convert::ColorConversion;
pub use self::core::processing::output::{OutputPlan, plan_output};

pub use api::{
    BatchReport, FileReport, FileStatus, has_supported_extension, iterate_image_files,
    process_directory, process_image,
};
