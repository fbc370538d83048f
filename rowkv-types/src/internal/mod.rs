//! Minimal, fast codecs + value-side `encode_into`.
//!
//! ## A Note on Endianness and Sort Order
//!
//! All numeric payloads are stored **big-endian with an order-preserving
//! transform** (sign-bit flip for integers, the IEEE-754 total-order trick
//! for floats), so that bytewise lexicographic comparison in the store's
//! sorted key space equals numeric comparison. The store never has to decode
//! a value to keep cells in order, and round-tripping any value through the
//! write path reproduces its bytes exactly.
//!
//! Variable-width codecs (`Utf8`, `Bytes`) carry no length prefix or
//! trailer: cell values are already framed by the store, and raw UTF-8 sorts
//! bytewise in code-point order.
//!
//! `EncodeInto` lets you write `v.encode_into(&mut buf)` using the default
//! codec for that native type (`&str`/`String` → `Utf8`, `i64` → `BeI64`,
//! and so on).

pub mod codec;
pub use codec::*;

pub mod be_i32;
pub use be_i32::*;

pub mod be_i64;
pub use be_i64::*;

pub mod be_f64;
pub use be_f64::*;

pub mod boolean;
pub use boolean::*;

pub mod bytes;
pub use bytes::*;

pub mod utf8;
pub use utf8::*;

/* ---------------------- Value-side encode convenience ------------------- */

/// Default, value-side encoding: `v.encode_into(&mut buf)`.
///
/// One default codec per native type to keep call sites simple.
///
/// Use specific codecs directly if you need an alternative.
pub trait EncodeInto {
    fn encode_into(&self, dst: &mut Vec<u8>);
}

// Strings → Utf8
impl EncodeInto for str {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        // These codecs don't have a real failure path for valid inputs, so unwrap is fine.
        Utf8::encode_into(dst, self).unwrap();
    }
}
impl EncodeInto for String {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        Utf8::encode_into(dst, self.as_str()).unwrap();
    }
}

// i32 → BeI32
impl EncodeInto for i32 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeI32::encode_into(dst, self).unwrap();
    }
}

// i64 → BeI64
impl EncodeInto for i64 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeI64::encode_into(dst, self).unwrap();
    }
}

// f64 → BeF64
impl EncodeInto for f64 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeF64::encode_into(dst, self).unwrap();
    }
}

// bool → Boolean
impl EncodeInto for bool {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        Boolean::encode_into(dst, self).unwrap();
    }
}

// [u8] / Vec<u8> -> Bytes
impl EncodeInto for [u8] {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        Bytes::encode_into(dst, self).unwrap();
    }
}
impl EncodeInto for Vec<u8> {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        Bytes::encode_into(dst, self.as_slice()).unwrap();
    }
}
