use std::borrow::Cow;

use nom::IResult;

use super::EncodableChunk;

/// Image data. Borrowed when read back from a file, owned when freshly
/// compressed.
#[derive(Debug)]
pub struct IDATChunk<'a> {
    pub data: Cow<'a, [u8]>,
}
impl IDATChunk<'static> {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: Cow::Owned(data),
        }
    }
}
impl EncodableChunk for IDATChunk<'_> {
    const HEADER: &'static [u8; 4] = b"IDAT";

    fn payload(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.data)
    }
}

pub(crate) fn parse_data(chunk_data: &[u8]) -> IResult<&[u8], IDATChunk<'_>> {
    Ok((
        &chunk_data[0..0],
        IDATChunk {
            data: Cow::Borrowed(chunk_data),
        },
    ))
}
