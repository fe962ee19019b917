//! Per-decode constructor table for abstract element fields

use sigil_core::{CodecError, ElementKind};

use crate::suite::{Point, Scalar, Suite};

/// Factories the decoder consults when it hits an abstract point or scalar
/// field. Built fresh for each decode call from the caller's suite; never
/// persisted.
///
/// An empty table is valid for payloads with no abstract fields. Hitting
/// such a field through an empty table fails with
/// [`CodecError::MissingConstructor`] rather than guessing a representation.
#[derive(Clone, Copy)]
pub struct Constructors<'a> {
    suite: Option<&'a dyn Suite>,
}

impl<'a> Constructors<'a> {
    /// Table with no constructors.
    pub fn empty() -> Self {
        Constructors { suite: None }
    }

    /// Table backed by `suite` when present, empty otherwise.
    pub fn from_suite(suite: Option<&'a dyn Suite>) -> Self {
        Constructors { suite }
    }

    pub fn is_empty(&self) -> bool {
        self.suite.is_none()
    }

    /// Allocate a zero-valued point for the active suite.
    pub fn point(&self) -> Result<Box<dyn Point>, CodecError> {
        self.suite
            .map(|s| s.point())
            .ok_or(CodecError::MissingConstructor(ElementKind::Point))
    }

    /// Allocate a zero-valued scalar for the active suite.
    pub fn scalar(&self) -> Result<Box<dyn Scalar>, CodecError> {
        self.suite
            .map(|s| s.scalar())
            .ok_or(CodecError::MissingConstructor(ElementKind::Scalar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::malformed_element;
    use crate::{decode_with_constructors, encode};

    /// Minimal 8-byte suite, just enough to exercise the table.
    #[derive(Debug, Default, PartialEq)]
    struct TinyPoint(u64);

    impl Point for TinyPoint {
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

    #[derive(Debug, Default, PartialEq)]
    struct TinyScalar(u64);

    impl Scalar for TinyScalar {
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

    struct TinySuite;

    impl Suite for TinySuite {
        fn point(&self) -> Box<dyn Point> {
            Box::<TinyPoint>::default()
        }

        fn scalar(&self) -> Box<dyn Scalar> {
            Box::<TinyScalar>::default()
        }
    }

    #[test]
    fn test_point_roundtrip_through_suite() {
        let value: Box<dyn Point> = Box::new(TinyPoint(0xFEED_F00D));
        let buf = encode(&value).unwrap();

        let ctors = Constructors::from_suite(Some(&TinySuite));
        let back: Box<dyn Point> = decode_with_constructors(&buf, &ctors).unwrap();
        assert_eq!(back.marshal_binary().unwrap(), value.marshal_binary().unwrap());
    }

    #[test]
    fn test_empty_table_refuses_abstract_field() {
        let value: Box<dyn Scalar> = Box::new(TinyScalar(3));
        let buf = encode(&value).unwrap();

        let err = decode_with_constructors::<Box<dyn Scalar>>(&buf, &Constructors::empty())
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::MissingConstructor(ElementKind::Scalar)
        ));
    }

    #[test]
    fn test_suite_rejects_malformed_element() {
        // 3-byte body where the suite wants 8.
        let buf = vec![0, 0, 0, 3, 1, 2, 3];
        let ctors = Constructors::from_suite(Some(&TinySuite));
        let err = decode_with_constructors::<Box<dyn Point>>(&buf, &ctors).unwrap_err();
        assert!(matches!(
            err,
            CodecError::MalformedElement {
                kind: ElementKind::Point,
                ..
            }
        ));
    }

    #[test]
    fn test_from_suite_none_is_empty() {
        assert!(Constructors::from_suite(None).is_empty());
        assert!(!Constructors::from_suite(Some(&TinySuite)).is_empty());
    }
}
