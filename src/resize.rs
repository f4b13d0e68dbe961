//! Scales an existing logo down to the extension's icon sizes.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{
    imageops::{self, FilterType},
    ColorType, DynamicImage, ImageFormat, Rgba,
};
use log::{info, warn};

use crate::icons::icon_path;

/// Relative to the `icons/` directory the tool is run from.
pub const SOURCE_LOGO: &str = "../assets/newnewwhite.png";

pub fn load_logo(source: &Path) -> anyhow::Result<DynamicImage> {
    let img =
        image::open(source).with_context(|| format!("Failed to open {}", source.display()))?;
    info!(
        "Source {}: {}x{}, {:?}",
        source.display(),
        img.width(),
        img.height(),
        img.color()
    );
    if img.width() != img.height() {
        warn!("{} isn't square, icons will be stretched", source.display());
    }
    Ok(img)
}

/// A `size` x `size` RGBA copy of `img`, resampled with Lanczos3.
///
/// Color is weighted by alpha while resampling, so fully transparent
/// neighbours don't darken the edges of the logo.
pub fn resize_icon(img: &DynamicImage, size: u32) -> DynamicImage {
    let mut premultiplied = img.to_rgba32f();
    for Rgba([r, g, b, a]) in premultiplied.pixels_mut() {
        *r *= *a;
        *g *= *a;
        *b *= *a;
    }
    let mut icon = imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);
    for Rgba([r, g, b, a]) in icon.pixels_mut() {
        if *a > 0.0 {
            *r = (*r / *a).clamp(0.0, 1.0);
            *g = (*g / *a).clamp(0.0, 1.0);
            *b = (*b / *a).clamp(0.0, 1.0);
        }
    }
    DynamicImage::ImageRgba8(DynamicImage::ImageRgba32F(icon).into_rgba8())
}

/// What was read and what was written by [`resize_logo`].
#[derive(Debug)]
pub struct ResizeReport {
    pub width: u32,
    pub height: u32,
    pub color: ColorType,
    pub written: Vec<PathBuf>,
}

/// Writes one icon per entry of `sizes` into `out_dir`. The source is decoded
/// before anything is written.
pub fn resize_logo(source: &Path, out_dir: &Path, sizes: &[u32]) -> anyhow::Result<ResizeReport> {
    let img = load_logo(source)?;

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let output_path = icon_path(out_dir, size);
        resize_icon(&img, size)
            .save_with_format(&output_path, ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        info!("Wrote {}", output_path.display());
        written.push(output_path);
    }
    Ok(ResizeReport {
        width: img.width(),
        height: img.height(),
        color: img.color(),
        written,
    })
}
