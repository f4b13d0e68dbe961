//! Flat-color PNGs assembled chunk by chunk.

use log::debug;
use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::{
    chunks::{EncodableChunk, IDATChunk, IENDChunk, IHDRChunk},
    color::Rgb,
    SIGNATURE,
};

const COMPRESSION_LEVEL: u8 = 9;

/// Everything needed to derive a solid-color icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub width: u32,
    pub height: u32,
    pub color: Rgb,
}
impl IconSpec {
    pub fn new(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    pub fn square(size: u32, color: Rgb) -> Self {
        Self::new(size, size, color)
    }

    pub fn to_png(&self) -> Vec<u8> {
        create_png(self.width, self.height, self.color)
    }
}

/// Encodes a `width` x `height` rectangle of `color` as an 8-bit truecolor
/// PNG.
///
/// Dimensions aren't checked. A zero width or height still yields a framed
/// stream, but one that conforming decoders refuse.
pub fn create_png(width: u32, height: u32, color: impl Into<Rgb>) -> Vec<u8> {
    let spec = IconSpec::new(width, height, color.into());
    let header = IHDRChunk::truecolor(width, height);

    let raw = raw_scanlines(&spec);
    let compressed = compress_to_vec_zlib(&raw, COMPRESSION_LEVEL);
    debug!(
        "{width}x{height} {}: {} raw bytes deflated to {}",
        spec.color,
        raw.len(),
        compressed.len()
    );
    let idat = IDATChunk::new(compressed);

    let mut png = SIGNATURE.to_vec();
    png.extend(header.to_bytes());
    png.extend(idat.to_bytes());
    png.extend(IENDChunk.to_bytes());
    png
}

/// The uncompressed image data: each row is a `0` filter byte followed by
/// `width` copies of the color.
pub fn raw_scanlines(spec: &IconSpec) -> Vec<u8> {
    let pixel = spec.color.to_bytes();
    let row_len = spec.width as usize * pixel.len() + 1;
    let mut data = Vec::with_capacity(row_len * spec.height as usize);
    for _ in 0..spec.height {
        data.push(0);
        for _ in 0..spec.width {
            data.extend_from_slice(&pixel);
        }
    }
    data
}
