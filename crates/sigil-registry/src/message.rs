//! Message shapes and the type-erased decode result

use std::any::Any;
use std::fmt;

use sigil_codec::{Constructors, Decode, Encode};
use sigil_core::{CodecError, MessageTypeId};

/// A registrable message shape.
///
/// A message is an ordinary struct with hand-written [`Encode`]/[`Decode`]
/// impls; this trait only adds the type token the registry keys on. No
/// runtime introspection is involved anywhere.
pub trait Message: Encode + Decode + fmt::Debug + Send + Sync + 'static {
    /// Fully-qualified name used for identifier derivation.
    ///
    /// The default is the compiler's module-qualified type name. Moving or
    /// renaming the type (or its module) therefore changes the derived
    /// identifier on the wire; override this to pin a name across refactors.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Object-safe view of a decoded message, for erased storage.
pub(crate) trait ErasedMessage: fmt::Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<M: Message> ErasedMessage for M {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

pub(crate) type DecodeFn =
    fn(&[u8], &Constructors<'_>) -> Result<Box<dyn ErasedMessage>, CodecError>;

pub(crate) fn decode_erased<M: Message>(
    buf: &[u8],
    ctors: &Constructors<'_>,
) -> Result<Box<dyn ErasedMessage>, CodecError> {
    let msg = sigil_codec::decode_with_constructors::<M>(buf, ctors)?;
    Ok(Box::new(msg))
}

/// A decoded message whose concrete shape the caller selects by identifier.
///
/// `unmarshal` returns `(id, DynMessage)`; the caller matches on the id and
/// downcasts to the one shape that id names. The handle owns the filled-in
/// instance, so the downcast yields the decoded value itself, not a copy.
pub struct DynMessage {
    id: MessageTypeId,
    inner: Box<dyn ErasedMessage>,
}

impl DynMessage {
    pub(crate) fn new(id: MessageTypeId, inner: Box<dyn ErasedMessage>) -> Self {
        DynMessage { id, inner }
    }

    /// Identifier of the contained shape.
    pub fn id(&self) -> MessageTypeId {
        self.id
    }

    pub fn is<M: Message>(&self) -> bool {
        self.inner.as_any().is::<M>()
    }

    pub fn downcast_ref<M: Message>(&self) -> Option<&M> {
        self.inner.as_any().downcast_ref::<M>()
    }

    /// Take ownership of the decoded instance, or get the handle back
    /// unchanged when `M` is not its shape.
    pub fn downcast<M: Message>(self) -> Result<Box<M>, DynMessage> {
        if !self.is::<M>() {
            return Err(self);
        }
        match self.inner.into_any().downcast::<M>() {
            Ok(msg) => Ok(msg),
            Err(_) => unreachable!("shape checked before downcast"),
        }
    }
}

impl fmt::Debug for DynMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynMessage({:?}, {:?})", self.id, self.inner)
    }
}
