//! Sample message shapes

use sigil_codec::{Constructors, Decode, Encode, Point, Reader, Scalar, Writer};
use sigil_core::CodecError;
use sigil_registry::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ping {
    pub seq: i32,
}

impl Encode for Ping {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        self.seq.encode(w)
    }
}

impl Decode for Ping {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        Ok(Ping {
            seq: i32::decode(r, ctors)?,
        })
    }
}

impl Message for Ping {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pong {
    pub seq: i32,
}

impl Encode for Pong {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        self.seq.encode(w)
    }
}

impl Decode for Pong {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        Ok(Pong {
            seq: i32::decode(r, ctors)?,
        })
    }
}

impl Message for Pong {}

/// Peer announcement with nested container fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announce {
    pub node: String,
    pub addresses: Vec<String>,
    pub epoch: Option<u64>,
}

impl Encode for Announce {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        self.node.encode(w)?;
        self.addresses.encode(w)?;
        self.epoch.encode(w)
    }
}

impl Decode for Announce {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        Ok(Announce {
            node: String::decode(r, ctors)?,
            addresses: Vec::<String>::decode(r, ctors)?,
            epoch: Option::<u64>::decode(r, ctors)?,
        })
    }
}

impl Message for Announce {}

/// Message carrying abstract algebraic elements; decoding it requires a
/// suite.
#[derive(Debug)]
pub struct KeyShare {
    pub index: u32,
    pub public: Box<dyn Point>,
    pub secret: Box<dyn Scalar>,
}

impl KeyShare {
    pub fn new(index: u32, public: impl Point + 'static, secret: impl Scalar + 'static) -> Self {
        KeyShare {
            index,
            public: Box::new(public),
            secret: Box::new(secret),
        }
    }
}

impl Encode for KeyShare {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        self.index.encode(w)?;
        self.public.encode(w)?;
        self.secret.encode(w)
    }
}

impl Decode for KeyShare {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        Ok(KeyShare {
            index: u32::decode(r, ctors)?,
            public: Box::<dyn Point>::decode(r, ctors)?,
            secret: Box::<dyn Scalar>::decode(r, ctors)?,
        })
    }
}

impl Message for KeyShare {}
