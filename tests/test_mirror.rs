use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use imgmirror::{
    BatchReport, Error, FileStatus, FlipAxis, ImageType, MirrorParams, iterate_image_files,
    process_directory, process_image,
};

fn sample(path: &Path) -> RgbImage {
    let img = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 60, y as u8 * 80, 200]));
    img.save(path).unwrap();
    img
}

fn output_of(status: &FileStatus) -> &Path {
    match status {
        FileStatus::Processed { output } => output,
        other => panic!("expected a processed file, got {other:?}"),
    }
}

fn format_of(path: &Path) -> ImageFormat {
    image::guess_format(&fs::read(path).unwrap()).unwrap()
}

#[test]
fn default_run_flips_left_right_into_h_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("img.png");
    let original = sample(&input);

    let report = process_image(&input, &MirrorParams::default());
    let output = output_of(&report.status);

    assert_eq!(output, fs::canonicalize(dir.path().join("img_h.png")).unwrap());
    assert_eq!(format_of(output), ImageFormat::Png);
    assert!(report.conversion.is_none());

    let flipped = image::open(output).unwrap().to_rgb8();
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(flipped.get_pixel(x, y), original.get_pixel(3 - x, y));
        }
    }
}

#[test]
fn vertical_run_flips_top_bottom_into_v_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("img.bmp");
    let original = sample(&input);

    let params = MirrorParams {
        axis: FlipAxis::Vertical,
        ..Default::default()
    };
    let report = process_image(&input, &params);
    let output = output_of(&report.status);

    assert!(output.ends_with("img_v.bmp"));
    assert_eq!(format_of(output), ImageFormat::Bmp);

    let flipped = image::open(output).unwrap().to_rgb8();
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(flipped.get_pixel(x, y), original.get_pixel(x, 2 - y));
        }
    }
}

#[test]
fn mirroring_the_mirror_restores_the_original() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("img.png");
    let original = sample(&input);

    let first = process_image(&input, &MirrorParams::default());
    let second = process_image(output_of(&first.status), &MirrorParams::default());
    let restored = image::open(output_of(&second.status)).unwrap().to_rgb8();

    assert!(output_of(&second.status).ends_with("img_h_h.png"));
    assert_eq!(restored.as_raw(), original.as_raw());
}

#[test]
fn output_dir_is_created_under_the_file_parent() {
    let dir = tempfile::tempdir().unwrap();
    let parent = dir.path().join("a").join("b");
    fs::create_dir_all(&parent).unwrap();
    let input = parent.join("img.png");
    sample(&input);

    let params = MirrorParams {
        output_dir: Some("foo".to_string()),
        ..Default::default()
    };
    let report = process_image(&input, &params);
    let output = output_of(&report.status);

    let expected = fs::canonicalize(&parent).unwrap().join("foo").join("img_h.png");
    assert_eq!(output, expected);
    assert!(parent.join("foo").is_dir());

    // a second run reuses the existing directory
    let again = process_image(&input, &params);
    assert!(again.is_processed());
}

#[test]
fn explicit_type_reencodes_as_webp() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("img.png");
    sample(&input);

    let params = MirrorParams {
        output_type: Some(ImageType::Webp),
        ..Default::default()
    };
    let report = process_image(&input, &params);
    let output = output_of(&report.status);

    assert!(output.ends_with("img_h.webp"));
    assert_eq!(format_of(output), ImageFormat::WebP);
}

#[test]
fn jpg_type_keeps_jpg_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("img.gif");
    sample(&input);

    let params = MirrorParams {
        output_type: Some(ImageType::Jpg),
        ..Default::default()
    };
    let report = process_image(&input, &params);
    let output = output_of(&report.status);

    assert!(output.ends_with("img_h.jpg"));
    assert_eq!(format_of(output), ImageFormat::Jpeg);
}

#[test]
fn alpha_is_stripped_for_jpeg_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([200, 10, 10, 90])))
        .save(&input)
        .unwrap();

    let params = MirrorParams {
        output_type: Some(ImageType::Jpg),
        ..Default::default()
    };
    let report = process_image(&input, &params);

    assert!(report.converted_for_jpeg());
    let output = output_of(&report.status);
    assert_eq!(format_of(output), ImageFormat::Jpeg);
    assert!(!image::open(output).unwrap().color().has_alpha());
}

#[test]
fn directory_run_counts_extension_matches() {
    let dir = tempfile::tempdir().unwrap();
    sample(&dir.path().join("good.png"));
    fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
    fs::write(dir.path().join("corrupt.jpg"), b"\xff\xd8\xff\xe0\x00\x10broken").unwrap();
    fs::create_dir(dir.path().join("nested.png")).unwrap();

    let mut seen = Vec::new();
    let report = process_directory(dir.path(), &MirrorParams::default(), |file| {
        seen.push((file.input_name(), file.is_processed()));
    })
    .unwrap();

    assert_eq!(
        report,
        BatchReport {
            attempted: 2,
            processed: 1,
            skipped: 0,
            errors: 1,
        }
    );
    seen.sort();
    assert_eq!(
        seen,
        vec![("corrupt.jpg".to_string(), false), ("good.png".to_string(), true)]
    );
    assert!(dir.path().join("good_h.png").is_file());
    assert!(!dir.path().join("notes_h.txt").exists());
}

#[test]
fn corrupt_file_reports_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("corrupt.jpg");
    fs::write(&input, b"\xff\xd8\xff\xe0\x00\x10broken").unwrap();

    let report = process_image(&input, &MirrorParams::default());
    match report.status {
        FileStatus::Failed(Error::Open { ref name, .. }) => assert_eq!(name, "corrupt.jpg"),
        other => panic!("unexpected status {other:?}"),
    }
}

#[test]
fn non_image_content_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("renamed.webp");
    fs::write(&input, "this was a text file once").unwrap();

    let report = process_image(&input, &MirrorParams::default());
    assert!(matches!(report.status, FileStatus::Skipped));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn empty_directory_has_nothing_to_do() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "# hi").unwrap();

    assert_eq!(iterate_image_files(dir.path()).unwrap().count(), 0);
    let report = process_directory(dir.path(), &MirrorParams::default(), |_| {}).unwrap();
    assert_eq!(report.attempted, 0);
}

#[test]
fn uppercase_extensions_are_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("SHOT.PNG");
    sample(&input);

    let files: Vec<_> = iterate_image_files(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);

    let report = process_image(&input, &MirrorParams::default());
    assert!(output_of(&report.status).ends_with("SHOT_h.PNG"));
}
