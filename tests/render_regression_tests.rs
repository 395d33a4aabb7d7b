//! End-to-end tests: image file in, text file out.
//!
//! Inputs are synthesized with the `image` crate into a scratch directory,
//! so the tests need no fixtures on disk.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use text_davinci::models::{GrayscaleImage, SelectionPolicy, TextOptions};
use text_davinci::pipeline::binarize;
use text_davinci::{Error, render_to_string, run};

/// Left half black, right half white
fn split_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    }))
}

fn save(dir: &TempDir, name: &str, img: &DynamicImage, format: ImageFormat) -> PathBuf {
    let path = dir.path().join(name);
    img.save_with_format(&path, format).expect("failed to write input image");
    path
}

fn options_in(dir: &TempDir) -> TextOptions {
    TextOptions {
        white_glyph: ".".into(),
        black_glyph: "#".into(),
        output: dir.path().join("output.txt"),
        ..TextOptions::default()
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("output missing")
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[test]
fn all_white_fixed_threshold_renders_spaces() {
    let gray = GrayscaleImage::filled(2, 2, 255);
    let options = TextOptions {
        disable_threshold_optimization: true,
        ..TextOptions::default()
    };
    let rendering = binarize(&gray, &options);
    let text = render_to_string(&rendering.binary, &options);
    assert_eq!(text, "  \n  ");
    assert!(!text.contains('⠢'));
}

#[test]
fn checkerboard_fixed_threshold_keeps_pattern() {
    let gray = GrayscaleImage::from_raw(2, 2, vec![0, 255, 255, 0]).unwrap();
    let options = TextOptions {
        disable_threshold_optimization: true,
        ..TextOptions::default()
    };
    let rendering = binarize(&gray, &options);
    assert_eq!(render_to_string(&rendering.binary, &options), "⠢ \n ⠢");
}

#[test]
fn mid_gray_at_fixed_threshold_is_white() {
    let gray = GrayscaleImage::filled(5, 5, 128);
    let options = TextOptions {
        disable_threshold_optimization: true,
        ..TextOptions::default()
    };
    let rendering = binarize(&gray, &options);
    assert_eq!(rendering.binary.black_count(), 0);
}

#[test]
fn png_output_has_sixty_rows_of_sixty_glyphs() {
    let dir = tempfile::tempdir().unwrap();
    let input = save(&dir, "split.png", &split_image(300, 200), ImageFormat::Png);
    let options = options_in(&dir);

    run(&input, &options).unwrap();

    let lines = read_lines(&options.output);
    assert_eq!(lines.len(), 60);
    for line in &lines {
        assert_eq!(line.chars().count(), 60);
        assert!(line.chars().all(|c| c == '#' || c == '.'));
    }
}

#[test]
fn fixed_threshold_follows_image_layout() {
    let dir = tempfile::tempdir().unwrap();
    let input = save(&dir, "split.png", &split_image(120, 120), ImageFormat::Png);
    let options = TextOptions {
        disable_threshold_optimization: true,
        ..options_in(&dir)
    };

    let rendering = run(&input, &options).unwrap();
    assert_eq!(rendering.threshold, 128);

    for line in read_lines(&options.output) {
        assert!(line.starts_with("##########"));
        assert!(line.ends_with(".........."));
    }
}

#[test]
fn flip_swaps_glyphs_at_every_position() {
    let dir = tempfile::tempdir().unwrap();
    let input = save(&dir, "split.png", &split_image(90, 60), ImageFormat::Png);

    let plain = options_in(&dir);
    run(&input, &plain).unwrap();
    let plain_text = std::fs::read_to_string(&plain.output).unwrap();

    let flipped = TextOptions {
        flip: true,
        output: dir.path().join("flipped.txt"),
        ..plain.clone()
    };
    run(&input, &flipped).unwrap();
    let flipped_text = std::fs::read_to_string(&flipped.output).unwrap();

    assert_eq!(plain_text.len(), flipped_text.len());
    for (a, b) in plain_text.chars().zip(flipped_text.chars()) {
        match a {
            '#' => assert_eq!(b, '.'),
            '.' => assert_eq!(b, '#'),
            '\n' => assert_eq!(b, '\n'),
            other => panic!("unexpected glyph {other:?}"),
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let gradient = DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, y| {
        let v = ((x * 4 + y) % 256) as u8;
        Rgb([v, v / 2, 255 - v])
    }));
    let input = save(&dir, "gradient.png", &gradient, ImageFormat::Png);

    for selection in [SelectionPolicy::Legacy, SelectionPolicy::Closest] {
        let options = TextOptions {
            selection,
            ..options_in(&dir)
        };
        let first = run(&input, &options).unwrap();
        let first_text = std::fs::read_to_string(&options.output).unwrap();
        let second = run(&input, &options).unwrap();
        let second_text = std::fs::read_to_string(&options.output).unwrap();
        assert_eq!(first.threshold, second.threshold);
        assert_eq!(first_text, second_text);
    }
}

#[test]
fn jpeg_is_sniffed_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = save(&dir, "photo.png", &split_image(80, 80), ImageFormat::Jpeg);
    let options = options_in(&dir);

    run(&input, &options).unwrap();
    assert_eq!(read_lines(&options.output).len(), 60);
}

#[test]
fn preview_is_written_next_to_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = save(&dir, "split.png", &split_image(60, 60), ImageFormat::Png);
    let options = TextOptions {
        preview: Some(dir.path().join("preview.png")),
        ..options_in(&dir)
    };

    run(&input, &options).unwrap();

    let preview = image::open(dir.path().join("preview.png")).unwrap().to_luma8();
    assert_eq!(preview.dimensions(), (60, 60));
    assert!(preview.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}

#[test]
fn unsupported_input_format_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = save(&dir, "split.bmp", &split_image(10, 10), ImageFormat::Bmp);
    let options = options_in(&dir);

    let err = run(&input, &options).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
    assert!(!options.output.exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_in(&dir);
    let err = run(&dir.path().join("absent.png"), &options).unwrap_err();
    assert!(matches!(err, Error::OpenInput { .. }));
}

#[test]
fn uncreatable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = save(&dir, "split.png", &split_image(10, 10), ImageFormat::Png);
    let options = TextOptions {
        output: dir.path().join("missing_dir").join("out.txt"),
        ..options_in(&dir)
    };
    let err = run(&input, &options).unwrap_err();
    assert!(matches!(err, Error::CreateOutput { .. }));
}
