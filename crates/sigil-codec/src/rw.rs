//! Checked cursor types over payload buffers
//!
//! All multi-byte integers are big-endian (network order). Reads never
//! panic; running off the end of the input is reported as
//! [`CodecError::UnexpectedEof`].

use bytes::{Buf, BufMut, BytesMut};

use sigil_core::CodecError;

/// Growable output cursor.
#[derive(Default)]
pub struct Writer {
    buf: BytesMut,
}

impl Writer {
    pub fn new() -> Self {
        Writer {
            buf: BytesMut::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Writer {
            buf: BytesMut::with_capacity(cap),
        }
    }

    #[inline]
    pub fn put_u8(&mut self, v: u8) {
        self.buf.put_u8(v);
    }

    #[inline]
    pub fn put_u16(&mut self, v: u16) {
        self.buf.put_u16(v);
    }

    #[inline]
    pub fn put_u32(&mut self, v: u32) {
        self.buf.put_u32(v);
    }

    #[inline]
    pub fn put_u64(&mut self, v: u64) {
        self.buf.put_u64(v);
    }

    #[inline]
    pub fn put_i32(&mut self, v: i32) {
        self.buf.put_i32(v);
    }

    #[inline]
    pub fn put_i64(&mut self, v: i64) {
        self.buf.put_i64(v);
    }

    #[inline]
    pub fn put_slice(&mut self, v: &[u8]) {
        self.buf.put_slice(v);
    }

    /// Write a u32 length prefix. Payload sections beyond `u32::MAX` bytes
    /// are not representable on the wire.
    pub fn put_len(&mut self, len: usize) -> Result<(), CodecError> {
        let len = u32::try_from(len).map_err(|_| CodecError::LengthOverflow(len))?;
        self.buf.put_u32(len);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf.to_vec()
    }

    pub fn into_bytes(self) -> bytes::Bytes {
        self.buf.freeze()
    }
}

/// Borrowing input cursor.
pub struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Reader { buf }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    fn check(&self, needed: usize) -> Result<(), CodecError> {
        if self.buf.len() < needed {
            return Err(CodecError::UnexpectedEof {
                needed: needed - self.buf.len(),
                remaining: self.buf.len(),
            });
        }
        Ok(())
    }

    pub fn get_u8(&mut self) -> Result<u8, CodecError> {
        self.check(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn get_u16(&mut self) -> Result<u16, CodecError> {
        self.check(2)?;
        Ok(self.buf.get_u16())
    }

    pub fn get_u32(&mut self) -> Result<u32, CodecError> {
        self.check(4)?;
        Ok(self.buf.get_u32())
    }

    pub fn get_u64(&mut self) -> Result<u64, CodecError> {
        self.check(8)?;
        Ok(self.buf.get_u64())
    }

    pub fn get_i32(&mut self) -> Result<i32, CodecError> {
        self.check(4)?;
        Ok(self.buf.get_i32())
    }

    pub fn get_i64(&mut self) -> Result<i64, CodecError> {
        self.check(8)?;
        Ok(self.buf.get_i64())
    }

    /// Borrow the next `n` bytes.
    pub fn get_slice(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        self.check(n)?;
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    /// Read a u32 length prefix and validate it against the remaining input.
    pub fn get_len(&mut self) -> Result<usize, CodecError> {
        let len = self.get_u32()? as usize;
        if len > self.buf.len() {
            return Err(CodecError::LengthOverflow(len));
        }
        Ok(len)
    }
}
