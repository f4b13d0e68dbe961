use std::{fs, path::Path, process::Command};

use extension_icons::{icon_file_name, resize_logo, ICON_SIZES};
use image::{GenericImageView, Rgba, RgbaImage};

/// A 256x256 logo: an opaque red disc on a fully transparent background.
fn write_logo(path: &Path) {
    let logo = RgbaImage::from_fn(256, 256, |x, y| {
        let (dx, dy) = (x as i32 - 128, y as i32 - 128);
        if dx * dx + dy * dy < 64 * 64 {
            Rgba([220, 30, 30, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    logo.save(path).unwrap();
}

fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .filter(|name| name.ends_with(".png"))
        .collect();
    names.sort();
    names
}

#[test]
fn writes_one_icon_per_size() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo.png");
    write_logo(&source);
    let out_dir = dir.path().join("icons");
    fs::create_dir(&out_dir).unwrap();

    let report = resize_logo(&source, &out_dir, &ICON_SIZES).unwrap();
    assert_eq!((report.width, report.height), (256, 256));
    assert_eq!(report.color, image::ColorType::Rgba8);
    assert_eq!(report.written.len(), 3);
    assert_eq!(
        png_files(&out_dir),
        ["icon-128.png", "icon-16.png", "icon-48.png"]
    );

    for size in ICON_SIZES {
        let icon = image::open(out_dir.join(icon_file_name(size))).unwrap();
        assert_eq!(icon.dimensions(), (size, size));
        assert_eq!(icon.color(), image::ColorType::Rgba8);

        let icon = icon.to_rgba8();
        assert_eq!(icon.get_pixel(0, 0).0[3], 0, "corner of icon-{size} is transparent");
        assert!(icon.get_pixel(size / 2, size / 2).0[3] > 200);
    }
}

#[test]
fn wide_source_still_gives_square_icons() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("banner.png");
    RgbaImage::from_pixel(300, 100, Rgba([255, 255, 255, 255]))
        .save(&source)
        .unwrap();

    let report = resize_logo(&source, dir.path(), &ICON_SIZES).unwrap();
    assert_eq!((report.width, report.height), (300, 100));
    for (path, size) in report.written.iter().zip(ICON_SIZES) {
        let icon = image::open(path).unwrap();
        assert_eq!(icon.dimensions(), (size, size));
        assert!(icon.to_rgba8().pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let err = resize_logo(&dir.path().join("nope.png"), dir.path(), &ICON_SIZES).unwrap_err();
    assert!(format!("{err:#}").contains("nope.png"));
    assert!(png_files(dir.path()).is_empty());
}

#[test]
fn unreadable_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo.png");
    fs::write(&source, b"not an image").unwrap();
    let out_dir = dir.path().join("icons");
    fs::create_dir(&out_dir).unwrap();

    assert!(resize_logo(&source, &out_dir, &ICON_SIZES).is_err());
    assert!(png_files(&out_dir).is_empty());
}

#[test]
fn binary_resizes_logo_from_assets() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    write_logo(&dir.path().join("assets/newnewwhite.png"));
    let icons = dir.path().join("icons");
    fs::create_dir(&icons).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_resize-icons"))
        .current_dir(&icons)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Created: icon-48.png (48x48)"));
    assert_eq!(png_files(&icons), ["icon-128.png", "icon-16.png", "icon-48.png"]);
}

#[test]
fn binary_fails_without_logo() {
    let dir = tempfile::tempdir().unwrap();
    let icons = dir.path().join("icons");
    fs::create_dir(&icons).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_resize-icons"))
        .current_dir(&icons)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("❌ Error:"));
    assert!(png_files(&icons).is_empty());
}

#[test]
fn generator_binary_writes_solid_icons() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_generate-icons"))
        .arg("--manifest")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("All icons created!"));
    assert!(stdout.contains("\"icons/icon-16.png\""));

    for size in ICON_SIZES {
        let icon = image::open(dir.path().join(icon_file_name(size)))
            .unwrap()
            .to_rgb8();
        assert_eq!(icon.dimensions(), (size, size));
        assert!(icon.pixels().all(|p| p.0 == [37, 99, 235]));
    }
}

#[test]
fn generator_binary_takes_a_color() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_generate-icons"))
        .args(["--color", "#10a020"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let icon = image::open(dir.path().join("icon-16.png")).unwrap().to_rgb8();
    assert!(icon.pixels().all(|p| p.0 == [0x10, 0xa0, 0x20]));
}

#[test]
fn binaries_reject_unknown_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_generate-icons"))
        .arg("logo.png")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn resizer_rejects_color_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_resize-icons"))
        .args(["--color", "#ffffff"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}
