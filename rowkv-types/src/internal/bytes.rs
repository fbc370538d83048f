use super::*;

/// Opaque bytes codec: the encoded form is the value itself.
///
/// The store frames every cell value, so raw bytes pass through untouched in
/// both directions and decoding cannot fail. Embedded NULs are fine.
pub struct Bytes;

impl Codec for Bytes {
    const WIDTH: usize = 0; // variable-width
    type Borrowed<'a> = &'a [u8];
    type Owned = Vec<u8>;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &[u8]) -> Result<(), EncodeError> {
        dst.extend_from_slice(v);
        Ok(())
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<Vec<u8>, DecodeError> {
        Ok(src.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_roundtrip() {
        let data = [0x00u8, 0xFF, 0x10, 0x00, 0x7A];
        let mut buf = Vec::new();
        Bytes::encode_into(&mut buf, &data[..]).unwrap();
        assert_eq!(buf, data);

        let dec = Bytes::decode(&buf).unwrap();
        assert_eq!(dec, data);

        assert_eq!(Bytes::decode(&[]).unwrap(), Vec::<u8>::new());
    }
}
