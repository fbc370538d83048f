use super::*;

/// UTF-8 text codec: the encoded form is the raw UTF-8 bytes.
///
/// Cell values are length-framed by the store, so no prefix or trailer is
/// needed, and raw UTF-8 already sorts byte-lexicographically in code-point
/// order. Decoding validates the bytes; anything that is not well-formed
/// UTF-8 is rejected.
pub struct Utf8;

impl Utf8 {
    /// Borrow the text without allocation.
    #[inline]
    pub fn decode_borrowed(src: &[u8]) -> Option<&str> {
        std::str::from_utf8(src).ok()
    }
}

impl Codec for Utf8 {
    const WIDTH: usize = 0; // variable-width
    type Borrowed<'a> = &'a str;
    type Owned = String;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &str) -> Result<(), EncodeError> {
        dst.extend_from_slice(v.as_bytes());
        Ok(())
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<String, DecodeError> {
        Self::decode_borrowed(src)
            .map(|s| s.to_string())
            .ok_or(DecodeError::InvalidFormat)
    }
}
