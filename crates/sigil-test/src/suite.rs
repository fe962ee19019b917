//! Mock algebraic suite
//!
//! No algebra at all: elements are bare u64 values marshaled big-endian.
//! Enough to exercise constructor plumbing without a real curve.

use sigil_codec::{malformed_element, Point, Scalar, Suite};
use sigil_core::{CodecError, ElementKind};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockPoint(pub u64);

impl Point for MockPoint {
    fn marshal_binary(&self) -> Result<Vec<u8>, CodecError> {
        Ok(self.0.to_be_bytes().to_vec())
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), CodecError> {
        let raw: [u8; 8] = data
            .try_into()
            .map_err(|_| malformed_element(ElementKind::Point, "want 8 bytes"))?;
        self.0 = u64::from_be_bytes(raw);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockScalar(pub u64);

impl Scalar for MockScalar {
    fn marshal_binary(&self) -> Result<Vec<u8>, CodecError> {
        Ok(self.0.to_be_bytes().to_vec())
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), CodecError> {
        let raw: [u8; 8] = data
            .try_into()
            .map_err(|_| malformed_element(ElementKind::Scalar, "want 8 bytes"))?;
        self.0 = u64::from_be_bytes(raw);
        Ok(())
    }
}

pub struct MockSuite;

impl Suite for MockSuite {
    fn point(&self) -> Box<dyn Point> {
        Box::<MockPoint>::default()
    }

    fn scalar(&self) -> Box<dyn Scalar> {
        Box::<MockScalar>::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_elements_roundtrip() {
        let point = MockPoint(0x1122_3344_5566_7788);
        let raw = point.marshal_binary().unwrap();

        let mut back = MockSuite.point();
        back.unmarshal_binary(&raw).unwrap();
        assert_eq!(back.marshal_binary().unwrap(), raw);
    }

    #[test]
    fn test_mock_point_rejects_short_input() {
        let mut point = MockPoint::default();
        assert!(point.unmarshal_binary(&[1, 2, 3]).is_err());
    }
}
