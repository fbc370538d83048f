use super::*;

/// Big-endian i64 codec with sign-bit flip so lexicographic order == numeric order.
///
/// This is the canonical encoding for 64-bit integer and timestamp columns:
/// values written through it sort correctly in the store's key space without
/// any decode step.
pub struct BeI64;

impl BeI64 {
    #[inline]
    fn to_lex(v: i64) -> u64 {
        (v as u64) ^ 0x8000_0000_0000_0000
    }
    #[inline]
    fn from_lex(u: u64) -> i64 {
        (u ^ 0x8000_0000_0000_0000) as i64
    }
}

impl Codec for BeI64 {
    const WIDTH: usize = 8;
    type Borrowed<'a> = &'a i64;
    type Owned = i64;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &i64) -> Result<(), EncodeError> {
        let x = Self::to_lex(*v);
        dst.extend_from_slice(&x.to_be_bytes());
        Ok(())
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<i64, DecodeError> {
        if src.len() < 8 {
            return Err(DecodeError::NotEnoughData);
        }
        // Length checked above; the conversion cannot fail.
        let bytes: [u8; 8] = src[..8].try_into().unwrap();
        Ok(Self::from_lex(u64::from_be_bytes(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bei64_roundtrip_and_order() {
        // Negatives, zero, positives, and both extremes.
        let vals = [i64::MIN, -100_000, -7, 0, 3, 42, 1 << 40, i64::MAX];

        let encoded: Vec<Vec<u8>> = vals
            .iter()
            .map(|v| {
                let mut b = Vec::new();
                v.encode_into(&mut b);
                b
            })
            .collect();

        // Lex sort of bytes should match numeric sort of values.
        let mut bytes_sorted = encoded.clone();
        bytes_sorted.sort();

        let mut vals_sorted = vals.to_vec();
        vals_sorted.sort();

        let decoded: Vec<i64> = bytes_sorted
            .iter()
            .map(|b| BeI64::decode(b).unwrap())
            .collect();

        assert_eq!(decoded, vals_sorted, "lexicographic != numeric order");

        for (i, v) in vals.iter().enumerate() {
            assert_eq!(BeI64::decode(&encoded[i]).unwrap(), *v);
        }
    }

    #[test]
    fn bei64_short_input_rejected() {
        let mut buf = Vec::new();
        7i64.encode_into(&mut buf);
        assert_eq!(BeI64::decode(&buf[..7]), Err(DecodeError::NotEnoughData));
        assert_eq!(BeI64::decode(&[]), Err(DecodeError::NotEnoughData));
    }
}
