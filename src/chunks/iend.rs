use std::borrow::Cow;

use super::EncodableChunk;

pub struct IENDChunk;
impl EncodableChunk for IENDChunk {
    const HEADER: &'static [u8; 4] = b"IEND";

    fn payload(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&[])
    }
}
