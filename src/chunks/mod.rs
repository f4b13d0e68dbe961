use std::borrow::Cow;

use nom::{
    bytes::complete::{tag, take},
    combinator::map_res,
    number::complete::be_u32,
    IResult,
};

use crate::crc::chunk_crc;

pub mod idat;
pub mod iend;
pub mod ihdr;

pub use idat::IDATChunk;
pub use iend::IENDChunk;
pub use ihdr::IHDRChunk;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub enum Chunk<'a> {
    IHDR(IHDRChunk),
    IDAT(IDATChunk<'a>),
    IEND,
    Unknown(RawChunk<'a>),
}

/// A chunk this crate doesn't interpret. Its checksum has still been verified.
#[derive(Debug)]
pub struct RawChunk<'a> {
    pub chunk_type: &'a [u8; 4],
    pub chunk_data: &'a [u8],
}

/// Iterates the chunks following the signature, stopping after `IEND` or the
/// first malformed chunk.
pub fn iter_chunks(source: &[u8]) -> ChunkIter {
    ChunkIter {
        source,
        finished: false,
    }
}

pub struct ChunkIter<'a> {
    source: &'a [u8],
    finished: bool,
}

impl<'a> ChunkIter<'a> {
    /// Bytes not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.source
    }
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = anyhow::Result<Chunk<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match parse_chunk(self.source) {
            Ok((rest, chunk)) => {
                self.source = rest;
                if matches!(chunk, Chunk::IEND) {
                    self.finished = true;
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e.to_owned().into()))
            }
        }
    }
}

pub(crate) fn parse_chunk(input: &[u8]) -> IResult<&[u8], Chunk<'_>> {
    let (rest, (header, chunk_data)) = valid_chunk(input)?;
    let chunk = match header {
        IHDRChunk::HEADER => Chunk::IHDR(ihdr::parse_data(chunk_data)?.1),
        IDATChunk::HEADER => Chunk::IDAT(idat::parse_data(chunk_data)?.1),
        IENDChunk::HEADER => Chunk::IEND,
        _ => Chunk::Unknown(RawChunk {
            chunk_type: header,
            chunk_data,
        }),
    };
    Ok((rest, chunk))
}

/// Splits one framed chunk off `input`, rejecting it unless the stored CRC
/// matches the one recomputed over type and payload.
fn valid_chunk(input: &[u8]) -> IResult<&[u8], (&[u8; 4], &[u8])> {
    let (input, length) = be_u32(input)?;
    let (input, chunk_type) = map_res(take(4usize), <&[u8; 4]>::try_from)(input)?;
    let (input, chunk_data) = take(length as usize)(input)?;
    let crc = chunk_crc(chunk_type, chunk_data).to_be_bytes();
    let (input, _) = tag(&crc[..])(input)?;
    Ok((input, (chunk_type, chunk_data)))
}

/// Length, type, payload and CRC, in that order.
pub(crate) fn frame(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(payload.len() + 12);
    bytes.extend((payload.len() as u32).to_be_bytes());
    bytes.extend(chunk_type);
    bytes.extend(payload);
    bytes.extend(chunk_crc(chunk_type, payload).to_be_bytes());
    bytes
}

pub trait EncodableChunk {
    const HEADER: &'static [u8; 4];

    fn payload(&self) -> Cow<'_, [u8]>;

    fn to_bytes(&self) -> Vec<u8> {
        frame(Self::HEADER, &self.payload())
    }
}
