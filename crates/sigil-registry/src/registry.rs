//! Concurrent identifier-to-descriptor registry

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use sigil_core::{derive_type_id, MessageTypeId};

use crate::message::{decode_erased, DecodeFn, Message};

/// Immutable handle to a registered shape, sufficient to allocate and fill
/// an instance of that shape at decode time.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    name: &'static str,
    decode: DecodeFn,
}

impl TypeDescriptor {
    fn of<M: Message>() -> Self {
        TypeDescriptor {
            name: M::type_name(),
            decode: decode_erased::<M>,
        }
    }

    /// Fully-qualified name of the registered shape.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Allocate and fill an instance of the registered shape from payload
    /// bytes.
    pub(crate) fn decode_payload(
        &self,
        buf: &[u8],
        ctors: &sigil_codec::Constructors<'_>,
    ) -> Result<Box<dyn crate::message::ErasedMessage>, sigil_core::CodecError> {
        (self.decode)(buf, ctors)
    }
}

impl std::fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeDescriptor({})", self.name)
    }
}

/// Identifier → descriptor store.
///
/// Entries are written once, typically at startup, and never removed. One
/// lock covers both paths; registrations are rare relative to lookups and
/// correctness beats throughput here. Construct independent registries
/// freely (tests do), or share the process-wide [`global`] one.
#[derive(Default)]
pub struct TypeRegistry {
    types: Mutex<HashMap<MessageTypeId, TypeDescriptor>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        TypeRegistry::default()
    }

    /// Register shape `M` and return its identifier.
    ///
    /// Idempotent: re-registering keeps the first descriptor and returns the
    /// same identifier.
    pub fn register<M: Message>(&self) -> MessageTypeId {
        let id = derive_type_id(M::type_name());
        self.types.lock().entry(id).or_insert_with(TypeDescriptor::of::<M>);
        id
    }

    /// Descriptor for `id`, if that identifier was registered. The sentinel
    /// [`MessageTypeId::ERROR`] is never present.
    pub fn lookup(&self, id: MessageTypeId) -> Option<TypeDescriptor> {
        self.types.lock().get(&id).copied()
    }

    /// Identifier of `M` iff `M` is registered, else the sentinel. Never
    /// registers as a side effect.
    pub fn type_id_of<M: Message>(&self) -> MessageTypeId {
        let id = derive_type_id(M::type_name());
        if self.types.lock().contains_key(&id) {
            id
        } else {
            MessageTypeId::ERROR
        }
    }

    /// Render `id` with its shape name when known, else as a plain UUID.
    pub fn describe(&self, id: MessageTypeId) -> String {
        match self.lookup(id) {
            Some(desc) => format!("{}({})", desc.name(), id),
            None => id.to_string(),
        }
    }

    /// Log every registered shape, for debugging.
    pub fn dump(&self) {
        for (id, desc) in self.types.lock().iter() {
            tracing::debug!(%id, name = desc.name(), "registered message type");
        }
    }

    pub fn len(&self) -> usize {
        self.types.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.lock().is_empty()
    }
}

/// Process-wide registry shared for the process lifetime.
///
/// Ergonomic parity with module-level registration; prefer an explicitly
/// constructed [`TypeRegistry`] where independent registries matter.
pub fn global() -> &'static TypeRegistry {
    static GLOBAL: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::new);
    &GLOBAL
}

/// Register several shapes at once, returning one identifier per argument in
/// argument order. Duplicate arguments each contribute their (identical)
/// identifier to the output.
#[macro_export]
macro_rules! register_messages {
    ($registry:expr $(, $ty:ty)+ $(,)?) => {
        ::std::vec![$($registry.register::<$ty>()),+]
    };
}
