use super::*;

/// Big-endian i32 codec with sign-bit flip so lexicographic order == numeric order.
///
/// Canonical encoding for 32-bit integer and date (epoch-day) columns.
pub struct BeI32;

impl BeI32 {
    #[inline]
    fn to_lex(v: i32) -> u32 {
        (v as u32) ^ 0x8000_0000
    }
    #[inline]
    fn from_lex(u: u32) -> i32 {
        (u ^ 0x8000_0000) as i32
    }
}

impl Codec for BeI32 {
    const WIDTH: usize = 4;
    type Borrowed<'a> = &'a i32;
    type Owned = i32;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &i32) -> Result<(), EncodeError> {
        let x = Self::to_lex(*v);
        dst.extend_from_slice(&x.to_be_bytes());
        Ok(())
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<i32, DecodeError> {
        if src.len() < 4 {
            return Err(DecodeError::NotEnoughData);
        }
        // Length checked above; the conversion cannot fail.
        let bytes: [u8; 4] = src[..4].try_into().unwrap();
        Ok(Self::from_lex(u32::from_be_bytes(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bei32_roundtrip_and_order() {
        let vals = [i32::MIN, -365, -1, 0, 1, 19_000, i32::MAX];

        let encoded: Vec<Vec<u8>> = vals
            .iter()
            .map(|v| {
                let mut b = Vec::new();
                BeI32::encode_into(&mut b, v).unwrap();
                b
            })
            .collect();

        let mut bytes_sorted = encoded.clone();
        bytes_sorted.sort();

        let mut vals_sorted = vals.to_vec();
        vals_sorted.sort();

        let decoded: Vec<i32> = bytes_sorted
            .iter()
            .map(|b| BeI32::decode(b).unwrap())
            .collect();

        assert_eq!(decoded, vals_sorted, "lexicographic != numeric order");

        for (i, v) in vals.iter().enumerate() {
            assert_eq!(BeI32::decode(&encoded[i]).unwrap(), *v);
        }
    }

    #[test]
    fn bei32_short_input_rejected() {
        assert_eq!(BeI32::decode(&[0x80, 0x00]), Err(DecodeError::NotEnoughData));
    }
}
