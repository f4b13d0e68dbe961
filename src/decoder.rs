//! Reads back the subset of PNG this crate writes: 8-bit truecolor,
//! unfiltered, not interlaced.

use std::marker::PhantomData;

use anyhow::{anyhow, bail, ensure, Context};
use miniz_oxide::inflate::decompress_to_vec_zlib;
use nom::{bytes::complete::tag, IResult};

use crate::{
    chunks::{ihdr::ColorType, ihdr::Interlacing, iter_chunks, Chunk, IHDRChunk},
    color::Rgb,
    SIGNATURE,
};

pub struct PNGDecoder<'a, State>(&'a [u8], PhantomData<State>);

pub struct Start;
pub struct Chunks;

impl<'a> PNGDecoder<'a, Start> {
    pub fn new(data: &'a [u8]) -> anyhow::Result<Self> {
        let (rest, _) = parse_signature(data)
            .map_err(|_| anyhow!("input doesn't start with expected signature"))?;
        Ok(Self(rest, PhantomData))
    }

    pub fn parse_ihdr(self) -> anyhow::Result<(PNGDecoder<'a, Chunks>, IHDRChunk)> {
        let mut chunks = iter_chunks(self.0);
        match chunks.next() {
            Some(Ok(Chunk::IHDR(header))) => {
                Ok((PNGDecoder(chunks.remaining(), PhantomData), header))
            }
            Some(Ok(other)) => bail!("expected IHDR first, found {other:?}"),
            Some(Err(e)) => Err(e.context("Failed to read IHDR")),
            None => bail!("no chunks after signature"),
        }
    }
}

impl<'a> PNGDecoder<'a, Chunks> {
    /// Concatenates every IDAT payload, requiring the stream to end in IEND.
    pub fn collect_idat(self) -> anyhow::Result<Vec<u8>> {
        let mut data = vec![];
        let mut ended = false;
        for chunk in iter_chunks(self.0) {
            match chunk? {
                Chunk::IDAT(idat) => data.extend_from_slice(&idat.data),
                Chunk::IEND => ended = true,
                Chunk::IHDR(_) => bail!("duplicate IHDR"),
                Chunk::Unknown(_) => (),
            }
        }
        ensure!(ended, "stream ended without IEND");
        ensure!(!data.is_empty(), "Couldn't find an IDAT");
        Ok(data)
    }
}

#[derive(Debug)]
pub struct DecodedImage {
    pub header: IHDRChunk,
    scanlines: Vec<u8>,
}
impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.scanlines
            .chunks(self.header.scanline_size())
            .flat_map(|row| row[1..].chunks_exact(3))
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }
}

pub fn decode(bytes: &[u8]) -> anyhow::Result<DecodedImage> {
    let (decoder, header) = PNGDecoder::new(bytes)?.parse_ihdr()?;
    ensure!(
        header.bit_depth == 8
            && header.color_type == ColorType::Truecolor
            && header.interlace_method == Interlacing::None,
        "unsupported pixel format {header:?}"
    );
    let compressed = decoder.collect_idat()?;
    let scanlines =
        decompress_to_vec_zlib(&compressed).context("Failed to decompress image data.")?;

    let row_len = header.scanline_size();
    let expected = row_len
        .checked_mul(header.height as usize)
        .context("image too large")?;
    ensure!(
        scanlines.len() == expected,
        "expected {expected} bytes of scanlines, got {}",
        scanlines.len()
    );
    if let Some(filter) = scanlines.iter().step_by(row_len).find(|&&f| f != 0) {
        bail!("unsupported filter type {filter}");
    }
    Ok(DecodedImage { header, scanlines })
}

fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(&SIGNATURE[..])(input)
}
