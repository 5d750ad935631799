// End-to-end tests for the icon resizer over temporary directories
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgb, Rgba};
use proptest::prelude::*;
use resize_icon::icon_resizer::{IconConfig, IconError, IconResizer, TARGET_FILENAME};
use tempfile::TempDir;

fn write_source_png(path: &Path, width: u32, height: u32) {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x % 251) as u8, (y % 241) as u8, ((x ^ y) % 255) as u8, 255])
    });
    DynamicImage::ImageRgba8(img)
        .save_with_format(path, ImageFormat::Png)
        .expect("failed to write source image");
}

fn resizer_for(source: PathBuf, target_dir: PathBuf) -> IconResizer {
    IconResizer::new(IconConfig {
        source_path: source,
        target_dir,
        ..IconConfig::default()
    })
}

fn setup(width: u32, height: u32) -> (TempDir, IconResizer) {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let source = dir.path().join("logo.png");
    write_source_png(&source, width, height);
    let resizer = resizer_for(source, dir.path().to_path_buf());
    (dir, resizer)
}

#[test]
fn upscales_512_square_to_1024() {
    let (dir, resizer) = setup(512, 512);

    let saved = resizer.process().expect("process should succeed");

    assert_eq!(saved, dir.path().join(TARGET_FILENAME));
    let output = image::open(&saved).expect("output should decode");
    assert_eq!(output.dimensions(), (1024, 1024));
}

#[test]
fn downscales_2000x3000_to_1024_square() {
    let (_dir, resizer) = setup(2000, 3000);

    let saved = resizer.process().expect("process should succeed");

    let output = image::open(&saved).expect("output should decode");
    assert_eq!(output.dimensions(), (1024, 1024));
}

#[test]
fn grayscale_source_above_40m_pixels_is_resized() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let source = dir.path().join("logo.png");
    let img = image::GrayImage::from_pixel(7000, 6000, image::Luma([200u8]));
    DynamicImage::ImageLuma8(img)
        .save_with_format(&source, ImageFormat::Png)
        .expect("failed to write source image");

    let saved = resizer_for(source, dir.path().to_path_buf())
        .process()
        .expect("process should succeed");

    assert_eq!(image::open(&saved).expect("decode").dimensions(), (1024, 1024));
}

#[test]
fn output_is_png_data() {
    let (_dir, resizer) = setup(64, 48);

    let saved = resizer.process().expect("process should succeed");

    let bytes = std::fs::read(&saved).expect("read output failed");
    assert_eq!(image::guess_format(&bytes).ok(), Some(ImageFormat::Png));
    assert!(image::load_from_memory_with_format(&bytes, ImageFormat::Png).is_ok());
}

#[test]
fn accepts_rgb_source_without_alpha() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let source = dir.path().join("logo.png");
    let img = ImageBuffer::from_pixel(40, 90, Rgb([10u8, 200, 30]));
    DynamicImage::ImageRgb8(img)
        .save_with_format(&source, ImageFormat::Png)
        .expect("failed to write source image");

    let saved = resizer_for(source, dir.path().to_path_buf())
        .process()
        .expect("process should succeed");

    assert_eq!(image::open(&saved).expect("decode").dimensions(), (1024, 1024));
}

#[test]
fn rerun_overwrites_previous_output() {
    let (dir, resizer) = setup(128, 128);
    let target = dir.path().join(TARGET_FILENAME);
    std::fs::write(&target, b"old icon").expect("write stale output failed");

    resizer.process().expect("first run should succeed");
    resizer.process().expect("second run should succeed");

    let output = image::open(&target).expect("output should decode");
    assert_eq!(output.dimensions(), (1024, 1024));
}

#[test]
fn missing_source_fails_without_touching_output() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let resizer = resizer_for(dir.path().join("absent.png"), dir.path().to_path_buf());

    let result = resizer.process();

    assert!(matches!(result, Err(IconError::FileSystem(_))));
    assert!(!dir.path().join(TARGET_FILENAME).exists());
}

#[test]
fn missing_source_leaves_existing_output_unmodified() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let target = dir.path().join(TARGET_FILENAME);
    std::fs::write(&target, b"previous icon").expect("write previous output failed");
    let resizer = resizer_for(dir.path().join("absent.png"), dir.path().to_path_buf());

    assert!(resizer.process().is_err());

    assert_eq!(std::fs::read(&target).expect("read output"), b"previous icon");
}

#[test]
fn missing_target_dir_fails_and_keeps_source() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let source = dir.path().join("logo.png");
    write_source_png(&source, 100, 100);
    let before = std::fs::read(&source).expect("read source");
    let missing_dir = dir.path().join("AppIcon.appiconset");

    let result = resizer_for(source.clone(), missing_dir.clone()).process();

    assert!(matches!(result, Err(IconError::Write(_))));
    assert!(!missing_dir.exists());
    assert_eq!(std::fs::read(&source).expect("read source"), before);
}

#[test]
fn undecodable_source_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let source = dir.path().join("logo.png");
    std::fs::write(&source, b"\x89PNG\r\n\x1a\nbroken").expect("write source failed");

    let result = resizer_for(source, dir.path().to_path_buf()).process();

    assert!(result.is_err());
    assert!(!dir.path().join(TARGET_FILENAME).exists());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn any_source_size_yields_1024_square(width in 1u32..96, height in 1u32..96) {
        let (_dir, resizer) = setup(width, height);

        let saved = resizer.process().expect("process should succeed");

        let output = image::open(&saved).expect("output should decode");
        prop_assert_eq!(output.dimensions(), (1024, 1024));
    }
}
