//! The closed set of benchmarked cipher algorithms
//!
//! Each variant carries fixed key/IV sizing and mode metadata. Sizes must
//! not change: benchmark results are only comparable across runs if every
//! run configures the ciphers identically.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported cipher algorithms, all in CBC mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherAlgorithm {
    /// AES-256-CBC
    Aes,
    /// DES-CBC
    Des,
    /// 3DES (EDE3) CBC
    TripleDes,
    /// Blowfish-CBC with a 128-bit key
    Blowfish,
}

impl CipherAlgorithm {
    pub const ALL: [CipherAlgorithm; 4] = [
        CipherAlgorithm::Aes,
        CipherAlgorithm::Des,
        CipherAlgorithm::TripleDes,
        CipherAlgorithm::Blowfish,
    ];

    /// Wire identifier used in requests and responses
    pub fn id(&self) -> &'static str {
        match self {
            Self::Aes => "aes",
            Self::Des => "des",
            Self::TripleDes => "tripledes",
            Self::Blowfish => "blowfish",
        }
    }

    /// Required key length in bytes; shorter keys are space-padded,
    /// longer keys truncated
    pub fn key_len(&self) -> usize {
        match self {
            Self::Aes => 32,
            Self::Des => 8,
            Self::TripleDes => 24,
            Self::Blowfish => 16,
        }
    }

    /// IV length in bytes, regenerated per encrypt call
    pub fn iv_len(&self) -> usize {
        match self {
            Self::Aes => 16,
            Self::Des => 8,
            Self::TripleDes => 8,
            Self::Blowfish => 8,
        }
    }

    /// Block-mode name
    pub fn mode(&self) -> &'static str {
        "cbc"
    }

    /// Look up a variant by its wire identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "aes" => Some(Self::Aes),
            "des" => Some(Self::Des),
            "tripledes" => Some(Self::TripleDes),
            "blowfish" => Some(Self::Blowfish),
            _ => None,
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
