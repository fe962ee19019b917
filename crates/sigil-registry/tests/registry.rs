use sigil_codec::{Constructors, Decode, Encode, Reader, Writer};
use sigil_core::{derive_type_id, CodecError, MessageTypeId};
use sigil_registry::{global, register_messages, Message, TypeRegistry};
use sigil_test::messages::{Ping, Pong};

/// Family of distinct shapes for concurrency tests; the const parameter
/// shows up in the type name, so every instantiation derives its own
/// identifier.
#[derive(Debug, PartialEq)]
struct Numbered<const N: u32>(u32);

impl<const N: u32> Encode for Numbered<N> {
    fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        self.0.encode(w)
    }
}

impl<const N: u32> Decode for Numbered<N> {
    fn decode(r: &mut Reader<'_>, ctors: &Constructors<'_>) -> Result<Self, CodecError> {
        Ok(Numbered(u32::decode(r, ctors)?))
    }
}

impl<const N: u32> Message for Numbered<N> {}

#[test]
fn test_register_is_idempotent() {
    let registry = TypeRegistry::new();
    let a = registry.register::<Ping>();
    let b = registry.register::<Ping>();
    assert_eq!(a, b);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_register_matches_pure_derivation() {
    let registry = TypeRegistry::new();
    let id = registry.register::<Ping>();
    assert_eq!(id, derive_type_id(<Ping as Message>::type_name()));
}

#[test]
fn test_same_shape_same_id_across_registries() {
    let a = TypeRegistry::new().register::<Ping>();
    let b = TypeRegistry::new().register::<Ping>();
    assert_eq!(a, b);
}

#[test]
fn test_type_id_of_does_not_register() {
    let registry = TypeRegistry::new();
    assert!(registry.type_id_of::<Ping>().is_error());
    assert!(registry.is_empty());

    let id = registry.register::<Ping>();
    assert_eq!(registry.type_id_of::<Ping>(), id);
    assert!(registry.type_id_of::<Pong>().is_error());
}

#[test]
fn test_sentinel_never_found() {
    let registry = TypeRegistry::new();
    registry.register::<Ping>();
    registry.register::<Pong>();
    assert!(registry.lookup(MessageTypeId::ERROR).is_none());
}

#[test]
fn test_lookup_returns_descriptor() {
    let registry = TypeRegistry::new();
    let id = registry.register::<Ping>();
    let desc = registry.lookup(id).expect("registered");
    assert!(desc.name().ends_with("Ping"));
    assert!(registry.lookup(derive_type_id("nobody::Home")).is_none());
}

#[test]
fn test_register_messages_macro_order_and_duplicates() {
    let registry = TypeRegistry::new();
    let ids = register_messages![registry, Ping, Pong, Ping];
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[0], ids[2]);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_describe_names_known_ids() {
    let registry = TypeRegistry::new();
    let id = registry.register::<Ping>();
    assert!(registry.describe(id).contains("Ping"));

    let unknown = derive_type_id("nobody::Home");
    assert_eq!(registry.describe(unknown), unknown.to_string());
}

#[test]
fn test_concurrent_registration() {
    let registry = TypeRegistry::new();

    // Every thread registers all eight shapes; duplicates across threads
    // must collapse to exactly one entry each.
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                register_messages![
                    registry,
                    Numbered<0>,
                    Numbered<1>,
                    Numbered<2>,
                    Numbered<3>,
                    Numbered<4>,
                    Numbered<5>,
                    Numbered<6>,
                    Numbered<7>,
                ]
            });
        }
    });

    assert_eq!(registry.len(), 8);
    assert!(registry.lookup(registry.type_id_of::<Numbered<0>>()).is_some());
    assert!(registry.lookup(registry.type_id_of::<Numbered<7>>()).is_some());
}

#[test]
fn test_global_registry_is_shared() {
    let id = global().register::<Numbered<100>>();
    assert_eq!(global().type_id_of::<Numbered<100>>(), id);
}
