//! Typed column values and the codecs that map them to raw cell bytes.
//!
//! A cell in the store is untyped bytes; a column in a projection declares a
//! semantic type. This crate is the bridge between the two: [`ValueType`]
//! tags a column's declared type, [`Value`] holds one decoded value, and
//! [`encode_value`]/[`decode_value`] dispatch to the statically-typed codecs
//! in [`internal`]. Every encoding is fixed and order-preserving where the
//! sorted key space can benefit, so a value round-trips to the exact bytes
//! it was written with.

#![forbid(unsafe_code)]

pub mod internal;
use crate::internal::{BeF64, BeI32, BeI64, Boolean, Bytes, Codec, EncodeInto, Utf8};

pub mod errors;
pub use errors::*;

use time::{Date, Month, OffsetDateTime};

// --- Public-Facing Metadata Enums ---

/// A tag representing the declared semantic type of one output column.
///
/// This is a simple, C-like enum that is cheap to store and copy.
/// Its only purpose is to pick the storage format for a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 64-bit signed integer, big-endian with sign-bit flip.
    I64,
    /// 32-bit signed integer, big-endian with sign-bit flip.
    I32,
    /// 64-bit IEEE-754 float, total-order encoded.
    F64,
    /// Boolean as a single 0/1 byte.
    Bool,
    /// UTF-8 text, raw bytes.
    Utf8,
    /// Opaque bytes, passed through unchanged.
    Bytes,
    /// Days since the Unix epoch (1970-01-01), encoded like [`ValueType::I32`].
    Date,
    /// Milliseconds since the Unix epoch, encoded like [`ValueType::I64`].
    Timestamp,
}

/// One decoded column value.
///
/// A column whose cell is absent on a given row decodes to [`Value::Null`];
/// nulls are represented by cell absence in the store and therefore never
/// encode.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    I64(i64),
    I32(i32),
    F64(f64),
    Bool(bool),
    Utf8(String),
    Bytes(Vec<u8>),
    /// Days since the Unix epoch (1970-01-01).
    Date(i32),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
}

macro_rules! impl_from_for_value {
    ($variant:ident, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value!(I64, i64);
impl_from_for_value!(I32, i32);
impl_from_for_value!(F64, f64);
impl_from_for_value!(Bool, bool);
impl_from_for_value!(Utf8, String);
impl_from_for_value!(Bytes, Vec<u8>);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl Value {
    /// Name of the variant, used in type-mismatch diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::I64(_) => "I64",
            Value::I32(_) => "I32",
            Value::F64(_) => "F64",
            Value::Bool(_) => "Bool",
            Value::Utf8(_) => "Utf8",
            Value::Bytes(_) => "Bytes",
            Value::Date(_) => "Date",
            Value::Timestamp(_) => "Timestamp",
        }
    }

    /// Human-friendly rendering used in debug and diagnostic output.
    pub fn format_display(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::I64(i) => i.to_string(),
            Value::I32(i) => i.to_string(),
            Value::F64(f) => f.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Utf8(s) => format!("\"{}\"", escape_string(s)),
            Value::Bytes(b) => format!("0x{}", hex_string(b)),
            Value::Date(days) => format!("DATE '{}'", format_date(*days)),
            Value::Timestamp(ms) => format!("TIMESTAMP '{}'", format_timestamp_millis(*ms)),
        }
    }
}

/// Encode `value` into `out` using `vtype`'s canonical codec.
/// Appends to `out`.
#[inline]
pub fn encode_value(value: &Value, vtype: ValueType, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    match (vtype, value) {
        // Nulls are represented by cell absence, never by an encoding.
        (expected, Value::Null) => Err(EncodeError::TypeMismatch {
            expected,
            got: "Null",
        }),
        //
        (ValueType::I64, Value::I64(x)) => BeI64::encode_into(out, x),
        (ValueType::I32, Value::I32(x)) => BeI32::encode_into(out, x),
        (ValueType::F64, Value::F64(x)) => BeF64::encode_into(out, x),
        (ValueType::Bool, Value::Bool(b)) => Boolean::encode_into(out, b),
        (ValueType::Utf8, Value::Utf8(s)) => Utf8::encode_into(out, s),
        (ValueType::Bytes, Value::Bytes(b)) => Bytes::encode_into(out, b),
        (ValueType::Date, Value::Date(days)) => BeI32::encode_into(out, days),
        (ValueType::Timestamp, Value::Timestamp(ms)) => BeI64::encode_into(out, ms),
        //
        (expected, value) => Err(EncodeError::TypeMismatch {
            expected,
            got: value.kind_name(),
        }),
    }
}

/// Encode `value` into a fresh buffer.
#[inline]
pub fn encode_value_to_vec(value: &Value, vtype: ValueType) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    encode_value(value, vtype, &mut out)?;
    Ok(out)
}

/// Bridges a column's declared type tag to the statically-dispatched codec
/// for that type.
///
/// This function is the key to the whole pattern: it looks at the tag once,
/// then calls the specific decode for that type. Malformed bytes surface as
/// a [`DecodeError`] so the caller can attach row and column context.
pub fn decode_value(bytes: &[u8], vtype: ValueType) -> Result<Value, DecodeError> {
    match vtype {
        ValueType::I64 => BeI64::decode(bytes).map(Value::I64),
        ValueType::I32 => BeI32::decode(bytes).map(Value::I32),
        ValueType::F64 => BeF64::decode(bytes).map(Value::F64),
        ValueType::Bool => Boolean::decode(bytes).map(Value::Bool),
        ValueType::Utf8 => Utf8::decode(bytes).map(Value::Utf8),
        ValueType::Bytes => Bytes::decode(bytes).map(Value::Bytes),
        ValueType::Date => BeI32::decode(bytes).map(Value::Date),
        ValueType::Timestamp => BeI64::decode(bytes).map(Value::Timestamp),
    }
}

/// Encode a native value through [`EncodeInto`]'s default codec and hand the
/// buffer back. Convenience for building cell fixtures.
#[inline]
pub fn encode_native<V: EncodeInto + ?Sized>(v: &V) -> Vec<u8> {
    let mut out = Vec::new();
    v.encode_into(&mut out);
    out
}

fn format_date(days: i32) -> String {
    let julian = match epoch_julian_day().checked_add(days) {
        Some(value) => value,
        None => return days.to_string(),
    };

    match Date::from_julian_day(julian) {
        Ok(date) => {
            let (year, month, day) = date.to_calendar_date();
            let month_number = month as u8;
            format!("{:04}-{:02}-{:02}", year, month_number, day)
        }
        Err(_) => days.to_string(),
    }
}

fn format_timestamp_millis(ms: i64) -> String {
    let secs = ms.div_euclid(1000);
    let millis = ms.rem_euclid(1000);
    match OffsetDateTime::from_unix_timestamp(secs) {
        Ok(dt) => {
            let (year, month, day) = dt.date().to_calendar_date();
            format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
                year,
                month as u8,
                day,
                dt.hour(),
                dt.minute(),
                dt.second(),
                millis
            )
        }
        Err(_) => ms.to_string(),
    }
}

fn epoch_julian_day() -> i32 {
    Date::from_calendar_date(1970, Month::January, 1)
        .expect("1970-01-01 is a valid date")
        .to_julian_day()
}

fn escape_string(value: &str) -> String {
    value.chars().flat_map(|c| c.escape_default()).collect()
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
