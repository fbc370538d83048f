use super::*;

/// Big-endian f64 codec using the IEEE-754 total-order trick.
///
/// Positive values get their sign bit flipped; negative values get every bit
/// flipped. The resulting bytes sort lexicographically in numeric order:
/// negatives ascend toward zero, then positives ascend. `-0.0` and `0.0`
/// keep distinct encodings (with `-0.0` ordering first), and NaN payloads
/// round-trip bit-exactly, sorting above positive infinity.
pub struct BeF64;

impl BeF64 {
    const SIGN: u64 = 0x8000_0000_0000_0000;

    #[inline]
    fn to_lex(v: f64) -> u64 {
        let bits = v.to_bits();
        if bits & Self::SIGN != 0 { !bits } else { bits ^ Self::SIGN }
    }
    #[inline]
    fn from_lex(u: u64) -> f64 {
        let bits = if u & Self::SIGN != 0 { u ^ Self::SIGN } else { !u };
        f64::from_bits(bits)
    }
}

impl Codec for BeF64 {
    const WIDTH: usize = 8;
    type Borrowed<'a> = &'a f64;
    type Owned = f64;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &f64) -> Result<(), EncodeError> {
        let x = Self::to_lex(*v);
        dst.extend_from_slice(&x.to_be_bytes());
        Ok(())
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<f64, DecodeError> {
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

    fn encode(v: f64) -> Vec<u8> {
        let mut b = Vec::new();
        v.encode_into(&mut b);
        b
    }

    #[test]
    fn bef64_roundtrip_and_order() {
        let vals = [
            f64::NEG_INFINITY,
            f64::MIN,
            -1.5e300,
            -2.0,
            -f64::MIN_POSITIVE,
            -0.0,
            0.0,
            f64::MIN_POSITIVE,
            2.0,
            1.5e300,
            f64::MAX,
            f64::INFINITY,
        ];

        let encoded: Vec<Vec<u8>> = vals.iter().map(|v| encode(*v)).collect();

        // The inputs are already in ascending numeric order (with -0.0 ahead
        // of 0.0 by encoding), so their bytes must already be sorted.
        let mut bytes_sorted = encoded.clone();
        bytes_sorted.sort();
        assert_eq!(bytes_sorted, encoded, "lexicographic != numeric order");

        for (i, v) in vals.iter().enumerate() {
            let back = BeF64::decode(&encoded[i]).unwrap();
            assert_eq!(back.to_bits(), v.to_bits());
        }
    }

    #[test]
    fn bef64_nan_roundtrips_above_infinity() {
        let nan = encode(f64::NAN);
        let inf = encode(f64::INFINITY);
        assert!(nan > inf);
        assert!(BeF64::decode(&nan).unwrap().is_nan());
    }

    #[test]
    fn bef64_short_input_rejected() {
        let buf = encode(3.25);
        assert_eq!(BeF64::decode(&buf[..7]), Err(DecodeError::NotEnoughData));
    }
}
