//! Decoding side of the payload codec

use bytes::Bytes;

use sigil_core::CodecError;

use crate::constructors::Constructors;
use crate::rw::Reader;

/// A value that can be read back from a payload.
///
/// `ctors` resolves abstract algebraic element fields; implementations with
/// no such fields simply ignore it (and pass it through to nested fields).
pub trait Decode: Sized {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError>;
}

impl Decode for bool {
    fn decode(r: &mut Reader<'_>, _ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        match r.get_u8()? {
            0 => Ok(false),
            _ => Ok(true),
        }
    }
}

impl Decode for u8 {
    fn decode(r: &mut Reader<'_>, _ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        r.get_u8()
    }
}

impl Decode for u16 {
    fn decode(r: &mut Reader<'_>, _ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        r.get_u16()
    }
}

impl Decode for u32 {
    fn decode(r: &mut Reader<'_>, _ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        r.get_u32()
    }
}

impl Decode for u64 {
    fn decode(r: &mut Reader<'_>, _ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        r.get_u64()
    }
}

impl Decode for i32 {
    fn decode(r: &mut Reader<'_>, _ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        r.get_i32()
    }
}

impl Decode for i64 {
    fn decode(r: &mut Reader<'_>, _ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        r.get_i64()
    }
}

impl Decode for String {
    fn decode(r: &mut Reader<'_>, _ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        let len = r.get_len()?;
        let raw = r.get_slice(len)?;
        String::from_utf8(raw.to_vec()).map_err(|_| CodecError::InvalidUtf8)
    }
}

impl Decode for Bytes {
    fn decode(r: &mut Reader<'_>, _ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        let len = r.get_len()?;
        Ok(Bytes::copy_from_slice(r.get_slice(len)?))
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        match r.get_u8()? {
            0 => Ok(None),
            1 => Ok(Some(T::decode(r, ctors)?)),
            tag => Err(CodecError::InvalidPresenceTag(tag)),
        }
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        // Every element encodes to at least one byte, so a count exceeding
        // the remaining input is malformed; get_len enforces that bound.
        let len = r.get_len()?;
        let mut out = Vec::with_capacity(len);
        for _ in 0..len {
            out.push(T::decode(r, ctors)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_with_constructors, encode};

    #[test]
    fn test_string_roundtrip() {
        let ctors = Constructors::empty();
        let buf = encode(&"héllo wörld".to_string()).unwrap();
        let back: String = decode_with_constructors(&buf, &ctors).unwrap();
        assert_eq!(back, "héllo wörld");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let ctors = Constructors::empty();
        let buf = vec![0, 0, 0, 2, 0xFF, 0xFE];
        let err = decode_with_constructors::<String>(&buf, &ctors).unwrap_err();
        assert!(matches!(err, CodecError::InvalidUtf8));
    }

    #[test]
    fn test_option_roundtrip() {
        let ctors = Constructors::empty();
        for value in [None, Some(42u32)] {
            let buf = encode(&value).unwrap();
            let back: Option<u32> = decode_with_constructors(&buf, &ctors).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_option_bad_tag_rejected() {
        let ctors = Constructors::empty();
        let err = decode_with_constructors::<Option<u8>>(&[7, 0], &ctors).unwrap_err();
        assert!(matches!(err, CodecError::InvalidPresenceTag(7)));
    }

    #[test]
    fn test_vec_roundtrip() {
        let ctors = Constructors::empty();
        let value = vec!["a".to_string(), String::new(), "ccc".to_string()];
        let buf = encode(&value).unwrap();
        let back: Vec<String> = decode_with_constructors(&buf, &ctors).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_vec_count_exceeding_input_rejected() {
        let ctors = Constructors::empty();
        // Claims 100 elements, supplies 1 byte.
        let buf = vec![0, 0, 0, 100, 1];
        let err = decode_with_constructors::<Vec<u8>>(&buf, &ctors).unwrap_err();
        assert!(matches!(err, CodecError::LengthOverflow(100)));
    }

    #[test]
    fn test_bytes_roundtrip() {
        let ctors = Constructors::empty();
        let value = Bytes::from_static(&[9, 8, 7, 6]);
        let buf = encode(&value).unwrap();
        let back: Bytes = decode_with_constructors(&buf, &ctors).unwrap();
        assert_eq!(back, value);
    }

    proptest::proptest! {
        #[test]
        fn prop_containers_roundtrip(
            items in proptest::collection::vec(".{0,20}", 0..8),
            tail in proptest::option::of(proptest::prelude::any::<i64>()),
        ) {
            let ctors = Constructors::empty();
            let buf = encode(&items).unwrap();
            proptest::prop_assert_eq!(
                decode_with_constructors::<Vec<String>>(&buf, &ctors).unwrap(),
                items
            );
            let buf = encode(&tail).unwrap();
            proptest::prop_assert_eq!(
                decode_with_constructors::<Option<i64>>(&buf, &ctors).unwrap(),
                tail
            );
        }
    }
}
