//! CipherBench Core
//!
//! Benchmark engine for comparing symmetric-cipher performance.
//! Measures encrypt/decrypt timings against generated or caller-supplied
//! payloads and derives throughput and an efficiency score.
//!
//! ## Architecture
//!
//! - **Core**: cipher registry, test-data generator, benchmark runner,
//!   recommendation advisor
//! - **Shared**: common types, constants, and errors
//!
//! Every value is created per request and discarded with the response; the
//! only process-wide state is the immutable cipher registry, so concurrent
//! benchmark runs need no locking.
//!
//! ## Usage
//!
//! ```rust
//! use cipherbench_core::{BenchmarkRequest, BenchmarkRunner};
//!
//! let runner = BenchmarkRunner::new();
//! let request = BenchmarkRequest::new("aes", 16.0, "text");
//! let result = runner.run(&request)?;
//!
//! println!("{} took {:.3}ms", result.algorithm, result.metrics.total_time);
//! # Ok::<(), cipherbench_core::BenchError>(())
//! ```
//!
//! The default key material and the space-padding key normalization are
//! compatibility behaviors carried over from the service this engine
//! replaces; neither is a security property.

// Re-export main modules for easy access
pub mod core;
pub mod shared;

// Re-export main types
pub use crate::core::advisor::{recommend, Recommendation};
pub use crate::core::benchmark::{BenchmarkResult, BenchmarkRunner, TimingMetrics};
pub use crate::core::cipher::{registry, CipherAlgorithm, CipherEngine, EncryptedPayload};
pub use crate::core::generator::DataGenerator;
pub use crate::shared::error::{BenchError, BenchResult};
pub use crate::shared::types::{BenchmarkRequest, DataType};

/// Initialize logging for binaries that embed the engine directly.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
    log::debug!("cipherbench core initialized");
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
