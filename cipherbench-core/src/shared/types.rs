//! Shared types for the benchmark engine
//!
//! Request types and the payload-shape tag shared between the generator,
//! the benchmark runner, and the transport layer.

use serde::{Deserialize, Serialize};

use crate::shared::constants::DEFAULT_BENCHMARK_KEY;

/// Shape of a generated test payload.
///
/// Requests carry a free-form tag; anything that is not `text` or `json`
/// is treated as binary, including the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Text,
    Json,
    Binary,
}

impl DataType {
    /// Canonicalize a request tag. Unrecognized tags fall back to binary.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "json" => Self::Json,
            _ => Self::Binary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Binary => "binary",
        }
    }
}

/// A request to benchmark one algorithm against generated data.
///
/// Wire field names are camelCase for compatibility with existing clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRequest {
    /// Algorithm identifier, validated against the cipher registry.
    pub algorithm: String,
    /// Requested payload size in KB. Must be positive.
    #[serde(default)]
    pub data_size: f64,
    /// Payload shape tag (`text`, `json`, `binary`; anything else is binary).
    #[serde(default)]
    pub data_type: String,
    /// Key material; padded/truncated to the algorithm's key length.
    #[serde(default)]
    pub key: Option<String>,
}

impl BenchmarkRequest {
    pub fn new(algorithm: impl Into<String>, data_size: f64, data_type: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            data_size,
            data_type: data_type.into(),
            key: None,
        }
    }

    /// The key to benchmark with, falling back to the shared default.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(DEFAULT_BENCHMARK_KEY)
    }
}
