//! Cipher registry and encrypt/decrypt capabilities
//!
//! The four benchmarked algorithms share one capability shape: encrypt and
//! decrypt with fixed key/IV sizing metadata, dispatched through a closed
//! enum rather than open-ended dynamic dispatch.

pub mod cipher_algorithm;
pub mod cipher_engine;
pub mod encrypted_payload;
pub mod registry;

// Re-export all public items from submodules
pub use cipher_algorithm::*;
pub use cipher_engine::*;
pub use encrypted_payload::*;
