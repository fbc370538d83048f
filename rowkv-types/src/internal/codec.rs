pub use crate::{DecodeError, EncodeError};

/// A zero-overhead codec API for a single logical type.
///
/// Each codec maps one native type to the canonical byte form stored in cell
/// values. Cell boundaries are framed by the store itself, so codecs never
/// write their own length prefixes or trailers.
pub trait Codec {
    /// Fixed encoded width in bytes. Use `0` for variable-width codecs.
    const WIDTH: usize;

    type Borrowed<'a>: ?Sized
    where
        Self: 'a;
    type Owned;

    fn encode_into(dst: &mut Vec<u8>, v: Self::Borrowed<'_>) -> Result<(), EncodeError>;

    fn decode(src: &[u8]) -> Result<Self::Owned, DecodeError>;
}
