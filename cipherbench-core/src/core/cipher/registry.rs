//! Process-wide cipher registry
//!
//! Built once at first use and never mutated afterwards, so concurrent
//! benchmark runs can share it without locking.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{CipherAlgorithm, CipherEngine};
use crate::shared::error::{BenchError, BenchResult};

lazy_static! {
    static ref CIPHER_REGISTRY: HashMap<&'static str, CipherAlgorithm> = {
        let mut registry = HashMap::new();
        for algorithm in CipherAlgorithm::ALL {
            registry.insert(algorithm.id(), algorithm);
        }
        registry
    };
}

/// Resolve an algorithm identifier to an engine, or fail with
/// [`BenchError::UnsupportedAlgorithm`].
pub fn lookup(id: &str) -> BenchResult<CipherEngine> {
    CIPHER_REGISTRY
        .get(id)
        .copied()
        .map(CipherEngine::new)
        .ok_or_else(|| BenchError::unsupported_algorithm(id))
}

/// Identifiers of all registered algorithms, in registration order.
pub fn supported_algorithms() -> Vec<&'static str> {
    CipherAlgorithm::ALL.iter().map(|a| a.id()).collect()
}
