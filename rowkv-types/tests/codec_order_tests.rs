use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rowkv_types::internal::{BeF64, BeI32, BeI64, Codec, EncodeInto, Utf8};

/* --------------------------- Shared helpers ---------------------------- */

/// Encode every value through `C` and return the raw buffers.
#[inline]
fn encode_all<'a, C>(vals: &[C::Borrowed<'a>]) -> Vec<Vec<u8>>
where
    C: Codec,
    C::Borrowed<'a>: Clone,
{
    vals.iter()
        .map(|v| {
            let mut buf = Vec::new();
            C::encode_into(&mut buf, v.clone()).expect("encoding must succeed");
            buf
        })
        .collect()
}

/* ------------------------------ Tests ---------------------------------- */

/// Random i64 inputs: sorting the encoded bytes lexicographically must give
/// the same sequence as sorting the values numerically.
#[test]
fn random_i64_lex_order_matches_numeric() {
    let mut rng = StdRng::seed_from_u64(7);
    let vals: Vec<i64> = (0..512).map(|_| rng.random::<i64>()).collect();
    let refs: Vec<&i64> = vals.iter().collect();

    let mut encoded = encode_all::<BeI64>(&refs);
    encoded.sort();

    let mut sorted_vals = vals.clone();
    sorted_vals.sort();

    let decoded: Vec<i64> = encoded
        .iter()
        .map(|b| BeI64::decode(b).expect("decode"))
        .collect();
    assert_eq!(decoded, sorted_vals);
}

#[test]
fn random_i32_lex_order_matches_numeric() {
    let mut rng = StdRng::seed_from_u64(11);
    let vals: Vec<i32> = (0..512).map(|_| rng.random::<i32>()).collect();
    let refs: Vec<&i32> = vals.iter().collect();

    let mut encoded = encode_all::<BeI32>(&refs);
    encoded.sort();

    let mut sorted_vals = vals.clone();
    sorted_vals.sort();

    let decoded: Vec<i32> = encoded
        .iter()
        .map(|b| BeI32::decode(b).expect("decode"))
        .collect();
    assert_eq!(decoded, sorted_vals);
}

/// Random f64 bit patterns (including infinities and NaNs): the encoding
/// must order exactly like IEEE-754 `total_cmp` and round-trip bit-exactly.
#[test]
fn random_f64_lex_order_matches_total_order() {
    let mut rng = StdRng::seed_from_u64(13);
    let vals: Vec<f64> = (0..512)
        .map(|_| f64::from_bits(rng.random::<u64>()))
        .collect();
    let refs: Vec<&f64> = vals.iter().collect();

    let mut encoded = encode_all::<BeF64>(&refs);
    encoded.sort();

    let mut sorted_vals = vals.clone();
    sorted_vals.sort_by(|a, b| a.total_cmp(b));

    let decoded_bits: Vec<u64> = encoded
        .iter()
        .map(|b| BeF64::decode(b).expect("decode").to_bits())
        .collect();
    let sorted_bits: Vec<u64> = sorted_vals.iter().map(|v| v.to_bits()).collect();
    assert_eq!(decoded_bits, sorted_bits);
}

/// Text encodes as raw UTF-8, so byte order equals `str` order.
#[test]
fn utf8_lex_order_matches_str_order() {
    let vals = ["", "a", "ab", "b", "ba", "z", "étude"];

    let mut encoded: Vec<Vec<u8>> = vals
        .iter()
        .map(|s| {
            let mut buf = Vec::new();
            s.encode_into(&mut buf);
            buf
        })
        .collect();
    encoded.sort();

    let mut sorted_vals = vals.to_vec();
    sorted_vals.sort();

    let decoded: Vec<String> = encoded
        .iter()
        .map(|b| Utf8::decode(b).expect("decode"))
        .collect();
    assert_eq!(decoded, sorted_vals);
}
