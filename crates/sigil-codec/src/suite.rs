//! Algebraic suite seam
//!
//! The codec never interprets elliptic-curve points or scalars; it moves
//! them as length-prefixed opaque bytes and delegates allocation to the
//! active [`Suite`]. Concrete suites live outside this workspace.

use std::fmt;

use sigil_core::{CodecError, ElementKind};

use crate::constructors::Constructors;
use crate::decode::Decode;
use crate::encode::Encode;
use crate::rw::{Reader, Writer};

/// Abstract elliptic-curve point.
pub trait Point: fmt::Debug + Send + Sync {
    /// Serialize to the suite's canonical byte form.
    fn marshal_binary(&self) -> Result<Vec<u8>, CodecError>;

    /// Overwrite this element from its canonical byte form.
    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), CodecError>;
}

/// Abstract scalar of the suite's field.
pub trait Scalar: fmt::Debug + Send + Sync {
    fn marshal_binary(&self) -> Result<Vec<u8>, CodecError>;
    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), CodecError>;
}

/// Provider of concrete point/scalar representations.
///
/// `point()` and `scalar()` allocate zero values; the codec fills them in
/// from wire bytes via `unmarshal_binary`.
pub trait Suite: Send + Sync {
    fn point(&self) -> Box<dyn Point>;
    fn scalar(&self) -> Box<dyn Scalar>;
}

impl Encode for Box<dyn Point> {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        let raw = self.marshal_binary()?;
        w.put_len(raw.len())?;
        w.put_slice(&raw);
        Ok(())
    }
}

impl Decode for Box<dyn Point> {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        let len = r.get_len()?;
        let raw = r.get_slice(len)?;
        let mut point = ctors.point()?;
        point.unmarshal_binary(raw)?;
        Ok(point)
    }
}

impl Encode for Box<dyn Scalar> {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        let raw = self.marshal_binary()?;
        w.put_len(raw.len())?;
        w.put_slice(&raw);
        Ok(())
    }
}

impl Decode for Box<dyn Scalar> {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        let len = r.get_len()?;
        let raw = r.get_slice(len)?;
        let mut scalar = ctors.scalar()?;
        scalar.unmarshal_binary(raw)?;
        Ok(scalar)
    }
}

/// Error helper for suites rejecting malformed element bytes.
pub fn malformed_element(kind: ElementKind, reason: impl Into<String>) -> CodecError {
    CodecError::MalformedElement {
        kind,
        reason: reason.into(),
    }
}
