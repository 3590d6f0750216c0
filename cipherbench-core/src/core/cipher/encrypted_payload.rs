//! Output of one encrypt call
//!
//! The scheme is not self-describing: decryption needs the IV back, so it
//! travels next to the ciphertext. Both are lowercase hex. Payloads live
//! only for the duration of one benchmark run and are never persisted.

use serde::{Deserialize, Serialize};

/// Hex-encoded ciphertext plus the IV it was produced with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedPayload {
    pub ciphertext: String,
    pub iv: String,
}

impl EncryptedPayload {
    /// Length of the hex-encoded ciphertext, reported as `encryptedSize`
    /// in benchmark results.
    pub fn ciphertext_len(&self) -> usize {
        self.ciphertext.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ciphertext_len_counts_hex_chars() {
        let payload = EncryptedPayload {
            ciphertext: "deadbeef".to_string(),
            iv: "0102030405060708".to_string(),
        };

        assert_eq!(payload.ciphertext_len(), 8);
    }
}
