//! Encoding side of the payload codec

use bytes::Bytes;

use sigil_core::CodecError;

use crate::rw::Writer;

/// A value that can be written to a payload.
///
/// Message types implement this field by field, in declaration order; the
/// matching [`Decode`](crate::Decode) impl must read fields back in the same
/// order.
pub trait Encode {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError>;
}

impl Encode for bool {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_u8(u8::from(*self));
        Ok(())
    }
}

impl Encode for u8 {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_u8(*self);
        Ok(())
    }
}

impl Encode for u16 {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_u16(*self);
        Ok(())
    }
}

impl Encode for u32 {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_u32(*self);
        Ok(())
    }
}

impl Encode for u64 {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_u64(*self);
        Ok(())
    }
}

impl Encode for i32 {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_i32(*self);
        Ok(())
    }
}

impl Encode for i64 {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_i64(*self);
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_len(self.len())?;
        w.put_slice(self.as_bytes());
        Ok(())
    }
}

impl Encode for Bytes {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_len(self.len())?;
        w.put_slice(self);
        Ok(())
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        match self {
            None => w.put_u8(0),
            Some(v) => {
                w.put_u8(1);
                v.encode(w)?;
            }
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_len(self.len())?;
        for item in self {
            item.encode(w)?;
        }
        Ok(())
    }
}
