//! SIGIL Core - Message type identifiers and error types
//!
//! This crate defines the primitives shared by the rest of the SIGIL
//! protocol stack:
//! - `MessageTypeId` and its deterministic name-based derivation
//! - Error taxonomy (`SigilError`, `CodecError`)

pub mod error;
pub mod id;

pub use error::*;
pub use id::*;
