//! Constants for the benchmark engine
//!
//! This module contains all constants used throughout the benchmark engine.

/// Key material used when a request does not supply one. Not a secret;
/// only there so benchmark results are comparable across requests.
pub const DEFAULT_BENCHMARK_KEY: &str = "mysecretkey123";

/// Alphabet for generated text payloads: uppercase, lowercase, digits, space.
/// 63 characters; the distribution of generated text depends on this exact set.
pub const TEXT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 ";

/// Alphabet for the random value strings in generated JSON entries.
pub const BASE36_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Approximate serialized size of one generated JSON entry; the generator
/// derives its entry count from this, so JSON payload sizes are approximate.
pub const JSON_ENTRY_TARGET_BYTES: usize = 100;

/// Length of the random base-36 value string in each generated JSON entry.
pub const JSON_VALUE_LENGTH: usize = 13;

/// Bytes per kilobyte, the unit all request sizes are expressed in.
pub const BYTES_PER_KB: f64 = 1024.0;

/// Ceiling for uploaded-file benchmarks.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10MB

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
