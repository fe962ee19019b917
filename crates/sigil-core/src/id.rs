//! Message type identifiers
//!
//! Every message shape exchanged over a SIGIL channel is tagged with a
//! 128-bit identifier derived from its fully-qualified type name. The
//! derivation is a pure function (name-based UUID v5), so two peers that
//! registered the same shape compute the same identifier without any
//! schema negotiation.

use std::fmt;

use uuid::Uuid;

/// Base namespace for all SIGIL identifiers.
pub const NAMESPACE_URL: &str = "https://sigil.dev/";

/// Namespace under which message type identifiers are derived.
pub const NAMESPACE_MESSAGE_TYPE: &str = "https://sigil.dev/messageType/";

/// Identifier tagging a wire frame's payload shape.
///
/// Equality is bitwise; identifiers are not ordered. The all-zero value is
/// reserved as the [`MessageTypeId::ERROR`] sentinel meaning "unregistered /
/// invalid" and is never produced by derivation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MessageTypeId([u8; 16]);

impl MessageTypeId {
    /// Reserved sentinel for unregistered or invalid types.
    pub const ERROR: MessageTypeId = MessageTypeId([0u8; 16]);

    /// Size of the identifier on the wire, in bytes.
    pub const SIZE: usize = 16;

    #[inline]
    pub fn is_error(&self) -> bool {
        *self == Self::ERROR
    }

    /// Big-endian wire representation (the UUID byte order itself).
    #[inline]
    pub fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        MessageTypeId(bytes)
    }
}

impl fmt::Debug for MessageTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", Uuid::from_bytes(self.0))
    }
}

impl fmt::Display for MessageTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Uuid::from_bytes(self.0))
    }
}

/// Derive the identifier for a fully-qualified type name.
///
/// Deterministic on any machine, any run, any process: the name is appended
/// to [`NAMESPACE_MESSAGE_TYPE`] and hashed as a name-based UUID v5. Any
/// name yields an identifier, registered or not. Renaming a type (or the
/// module that defines it) changes the derived identifier and is therefore
/// a wire-compatibility break.
pub fn derive_type_id(name: &str) -> MessageTypeId {
    let url = format!("{NAMESPACE_MESSAGE_TYPE}{name}");
    MessageTypeId(Uuid::new_v5(&Uuid::NAMESPACE_URL, url.as_bytes()).into_bytes())
}
