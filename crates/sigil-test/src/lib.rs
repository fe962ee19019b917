//! SIGIL Test Fixtures
//!
//! Shared material for the workspace's tests:
//! - A mock algebraic suite over trivial 8-byte elements
//! - Sample message shapes with hand-written codec impls

pub mod messages;
pub mod suite;

pub use messages::*;
pub use suite::*;
