//! SIGIL Codec - Generic structured payload encoding
//!
//! A reflection-free, self-delimiting binary codec for arbitrary structured
//! values. Message types implement [`Encode`] and [`Decode`] field by field;
//! the registry layer never inspects payload bytes itself.
//!
//! The single extension point is the abstract algebraic element: payloads may
//! carry [`Point`](suite::Point) and [`Scalar`](suite::Scalar) fields whose
//! concrete representation depends on a runtime-selected [`Suite`](suite::Suite).
//! Decoding such a field consults a per-call [`Constructors`] table to
//! allocate a suite-correct zero value before filling it in.

pub mod constructors;
pub mod decode;
pub mod encode;
pub mod rw;
pub mod suite;

pub use constructors::*;
pub use decode::*;
pub use encode::*;
pub use rw::*;
pub use suite::*;

pub use sigil_core::{CodecError, ElementKind};

/// Encode a value to its payload byte representation.
pub fn encode<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut w = Writer::new();
    value.encode(&mut w)?;
    Ok(w.into_vec())
}

/// Decode a value of type `T` from `buf`, resolving abstract element fields
/// through `ctors`. The value must consume the whole buffer; leftover bytes
/// indicate a shape mismatch and fail with [`CodecError::TrailingBytes`].
pub fn decode_with_constructors<T: Decode>(
    buf: &[u8],
    ctors: &Constructors<'_>,
) -> Result<T, CodecError> {
    let mut r = Reader::new(buf);
    let value = T::decode(&mut r, ctors)?;
    if !r.is_empty() {
        return Err(CodecError::TrailingBytes(r.remaining()));
    }
    Ok(value)
}
