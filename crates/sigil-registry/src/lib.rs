//! SIGIL Registry - Self-describing message registry and wire framing
//!
//! Peers exchange arbitrarily many application-defined message shapes over
//! one shared channel with no out-of-band schema negotiation. Each shape is
//! registered once at startup; its identifier is derived deterministically
//! from the fully-qualified type name, so every peer that registered the
//! shape computes the same 16-byte tag. A wire frame is that tag followed by
//! the codec-encoded payload:
//!
//! ```text
//! offset 0..16   : MessageTypeId, big-endian
//! offset 16..end : payload (sigil-codec encoding of the message value)
//! ```
//!
//! ```
//! use sigil_registry::{Message, TypeRegistry};
//! use sigil_codec::{Constructors, Decode, Encode, Reader, Writer};
//! use sigil_core::CodecError;
//!
//! #[derive(Debug, PartialEq)]
//! struct Ping { seq: i32 }
//!
//! impl Encode for Ping {
//!     fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
//!         self.seq.encode(w)
//!     }
//! }
//!
//! impl Decode for Ping {
//!     fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
//!         Ok(Ping { seq: i32::decode(r, ctors)? })
//!     }
//! }
//!
//! impl Message for Ping {}
//!
//! let registry = TypeRegistry::new();
//! let id = registry.register::<Ping>();
//!
//! let frame = registry.marshal(&Ping { seq: 7 }).unwrap();
//! let (got_id, msg) = registry.unmarshal(&frame, None).unwrap();
//! assert_eq!(got_id, id);
//! assert_eq!(*msg.downcast::<Ping>().unwrap(), Ping { seq: 7 });
//! ```

pub mod framing;
pub mod message;
pub mod registry;

pub use message::*;
pub use registry::*;
