//! Wire framing: 16-byte identifier followed by the encoded payload
//!
//! Embedding the identifier ahead of the payload lets one shared channel
//! multiplex arbitrarily many message shapes at a fixed 16-byte cost per
//! frame, with no per-message coordination between peers.

use sigil_codec::{Constructors, Suite};
use sigil_core::{MessageTypeId, SigilError, SigilResult};

use crate::message::{DynMessage, Message};
use crate::registry::TypeRegistry;

impl TypeRegistry {
    /// Frame `msg` for the wire: its identifier, then its encoded payload.
    ///
    /// The shape must have been registered first; marshal never registers on
    /// the caller's behalf.
    pub fn marshal<M: Message>(&self, msg: &M) -> SigilResult<Vec<u8>> {
        let id = self.type_id_of::<M>();
        if id.is_error() {
            return Err(SigilError::TypeNotRegistered {
                name: M::type_name().to_string(),
            });
        }

        let payload = sigil_codec::encode(msg).map_err(|err| {
            tracing::warn!(name = M::type_name(), error = %err, "payload encoding failed");
            SigilError::EncodingFailed(err)
        })?;

        let mut frame = Vec::with_capacity(MessageTypeId::SIZE + payload.len());
        frame.extend_from_slice(id.as_bytes());
        frame.extend_from_slice(&payload);
        Ok(frame)
    }

    /// Reconstruct a message from a wire frame.
    ///
    /// `suite` supplies constructors for abstract point/scalar fields; pass
    /// `None` for shapes that carry none. Frames tagged with an identifier
    /// this registry never saw fail with `TypeNotRegistered` — callers
    /// talking to untrusted peers should treat that (and any decode failure)
    /// as "drop this frame".
    pub fn unmarshal(
        &self,
        buf: &[u8],
        suite: Option<&dyn Suite>,
    ) -> SigilResult<(MessageTypeId, DynMessage)> {
        if buf.len() < MessageTypeId::SIZE {
            return Err(SigilError::TruncatedFrame {
                expected: MessageTypeId::SIZE,
                actual: buf.len(),
            });
        }

        let mut id_bytes = [0u8; MessageTypeId::SIZE];
        id_bytes.copy_from_slice(&buf[..MessageTypeId::SIZE]);
        let id = MessageTypeId::from_bytes(id_bytes);

        let desc = self.lookup(id).ok_or_else(|| SigilError::unknown_id(id))?;

        let ctors = Constructors::from_suite(suite);
        let msg = desc
            .decode_payload(&buf[MessageTypeId::SIZE..], &ctors)
            .map_err(SigilError::DecodingFailed)?;

        Ok((id, DynMessage::new(id, msg)))
    }
}
