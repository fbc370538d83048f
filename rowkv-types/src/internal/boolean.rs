use super::*;

/// Codec for bool. `false` -> `0u8`, `true` -> `1u8`.
///
/// Decoding is strict: any byte other than 0 or 1 is rejected rather than
/// coerced, since a stray value here means the cell was written by something
/// that disagrees about the column's type.
pub struct Boolean;

impl Codec for Boolean {
    const WIDTH: usize = 1;
    type Borrowed<'a> = &'a bool;
    type Owned = bool;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &bool) -> Result<(), EncodeError> {
        dst.push(if *v { 1 } else { 0 });
        Ok(())
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<bool, DecodeError> {
        match src.first() {
            None => Err(DecodeError::NotEnoughData),
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            Some(_) => Err(DecodeError::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_roundtrip_and_order() {
        let mut f_bytes = Vec::new();
        let mut t_bytes = Vec::new();

        false.encode_into(&mut f_bytes);
        true.encode_into(&mut t_bytes);

        assert_eq!(f_bytes, &[0]);
        assert_eq!(t_bytes, &[1]);

        // Lex order: false < true.
        assert!(f_bytes < t_bytes);

        assert!(!Boolean::decode(&f_bytes).unwrap());
        assert!(Boolean::decode(&t_bytes).unwrap());
    }

    #[test]
    fn boolean_invalid_input_rejected() {
        assert_eq!(Boolean::decode(&[]), Err(DecodeError::NotEnoughData));
        assert_eq!(Boolean::decode(&[2]), Err(DecodeError::InvalidFormat));
        assert_eq!(Boolean::decode(&[0xFF]), Err(DecodeError::InvalidFormat));
    }
}
