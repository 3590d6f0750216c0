//! CBC encrypt/decrypt dispatch for the benchmarked ciphers

use aes::Aes256;
use blowfish::Blowfish;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use des::{Des, TdesEde3};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

use super::{CipherAlgorithm, EncryptedPayload};
use crate::shared::error::{BenchError, BenchResult};

/// Encrypt/decrypt capability for one algorithm from the registry
pub struct CipherEngine {
    algorithm: CipherAlgorithm,
}

impl CipherEngine {
    pub fn new(algorithm: CipherAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    /// Encrypt the UTF-8 bytes of `plaintext` under a fresh random IV.
    ///
    /// Returns lowercase-hex ciphertext and IV; the IV must be handed back
    /// to [`decrypt`](Self::decrypt) unchanged.
    pub fn encrypt(&self, plaintext: &str, key: &str) -> BenchResult<EncryptedPayload> {
        let key = self.normalize_key(key);
        let iv = self.generate_iv();

        let ciphertext = match self.algorithm {
            CipherAlgorithm::Aes => cbc_encrypt::<Aes256>(&key, &iv, plaintext.as_bytes())?,
            CipherAlgorithm::Des => cbc_encrypt::<Des>(&key, &iv, plaintext.as_bytes())?,
            CipherAlgorithm::TripleDes => cbc_encrypt::<TdesEde3>(&key, &iv, plaintext.as_bytes())?,
            CipherAlgorithm::Blowfish => cbc_encrypt::<Blowfish>(&key, &iv, plaintext.as_bytes())?,
        };

        Ok(EncryptedPayload {
            ciphertext: hex::encode(ciphertext),
            iv: hex::encode(iv),
        })
    }

    /// Decrypt a payload produced by [`encrypt`](Self::encrypt).
    ///
    /// Bad hex, a wrong key/IV, or a padding mismatch all surface as
    /// [`BenchError::Decryption`]; callers must propagate these.
    pub fn decrypt(&self, payload: &EncryptedPayload, key: &str) -> BenchResult<String> {
        let key = self.normalize_key(key);
        let iv = hex::decode(&payload.iv)?;
        let ciphertext = hex::decode(&payload.ciphertext)?;

        let plaintext = match self.algorithm {
            CipherAlgorithm::Aes => cbc_decrypt::<Aes256>(&key, &iv, &ciphertext)?,
            CipherAlgorithm::Des => cbc_decrypt::<Des>(&key, &iv, &ciphertext)?,
            CipherAlgorithm::TripleDes => cbc_decrypt::<TdesEde3>(&key, &iv, &ciphertext)?,
            CipherAlgorithm::Blowfish => cbc_decrypt::<Blowfish>(&key, &iv, &ciphertext)?,
        };

        String::from_utf8(plaintext)
            .map_err(|e| BenchError::decryption(format!("plaintext is not valid UTF-8: {}", e)))
    }

    /// Normalize caller key material to the algorithm's exact key length:
    /// right-pad with ASCII spaces, then truncate. This deliberately weakens
    /// short keys; it is kept byte-for-byte so results stay comparable with
    /// existing benchmark data, and is not a security property.
    fn normalize_key(&self, key: &str) -> Zeroizing<Vec<u8>> {
        let mut bytes = key.as_bytes().to_vec();
        bytes.resize(self.algorithm.key_len(), b' ');
        Zeroizing::new(bytes)
    }

    /// Generate a fresh IV from the OS random source. Always
    /// cryptographically strong, even when payload generation is seeded.
    fn generate_iv(&self) -> Vec<u8> {
        let mut iv = vec![0u8; self.algorithm.iv_len()];
        OsRng.fill_bytes(&mut iv);
        iv
    }
}

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> BenchResult<Vec<u8>>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| BenchError::encryption(format!("cipher init failed: {}", e)))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> BenchResult<Vec<u8>>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| BenchError::decryption(format!("cipher init failed: {}", e)))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| BenchError::decryption(format!("bad key, IV, or padding: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_trip_all_algorithms() {
        let plaintext = "The quick brown fox jumps over the lazy dog";

        for algorithm in CipherAlgorithm::ALL {
            let engine = CipherEngine::new(algorithm);
            let payload = engine
                .encrypt(plaintext, "mysecretkey123")
                .expect("Failed to encrypt");
            let decrypted = engine
                .decrypt(&payload, "mysecretkey123")
                .expect("Failed to decrypt");

            assert_eq!(decrypted, plaintext, "round trip failed for {}", algorithm);
        }
    }

    #[test]
    fn test_round_trip_empty_plaintext() {
        for algorithm in CipherAlgorithm::ALL {
            let engine = CipherEngine::new(algorithm);
            let payload = engine.encrypt("", "key").expect("Failed to encrypt");
            let decrypted = engine.decrypt(&payload, "key").expect("Failed to decrypt");

            assert_eq!(decrypted, "");
        }
    }

    #[test]
    fn test_output_is_lowercase_hex() {
        let engine = CipherEngine::new(CipherAlgorithm::Aes);
        let payload = engine.encrypt("hello", "key").expect("Failed to encrypt");

        assert!(payload.ciphertext.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(payload.iv.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // hex doubles the byte length
        assert_eq!(payload.iv.len(), CipherAlgorithm::Aes.iv_len() * 2);
    }

    #[test]
    fn test_fresh_iv_per_encrypt() {
        let engine = CipherEngine::new(CipherAlgorithm::Aes);
        let first = engine.encrypt("same input", "same key").expect("Failed to encrypt");
        let second = engine.encrypt("same input", "same key").expect("Failed to encrypt");

        assert_ne!(first.iv, second.iv);
        assert_ne!(first.ciphertext, second.ciphertext);
    }

    #[test]
    fn test_wrong_key_does_not_round_trip() {
        let plaintext = "sensitive benchmark payload that is several blocks long";
        let engine = CipherEngine::new(CipherAlgorithm::Aes);
        let payload = engine.encrypt(plaintext, "right key").expect("Failed to encrypt");

        // CBC has no authentication: a wrong key usually fails padding
        // validation, but can occasionally unpad to garbage.
        match engine.decrypt(&payload, "wrong key") {
            Ok(garbage) => assert_ne!(garbage, plaintext),
            Err(e) => assert!(matches!(e, BenchError::Decryption(_))),
        }
    }

    #[test]
    fn test_invalid_hex_fails_decryption() {
        let engine = CipherEngine::new(CipherAlgorithm::Des);
        let payload = EncryptedPayload {
            ciphertext: "not hex at all".to_string(),
            iv: "0102030405060708".to_string(),
        };

        let result = engine.decrypt(&payload, "key");
        assert!(matches!(result, Err(BenchError::Decryption(_))));
    }

    #[test]
    fn test_key_padding_is_explicit_spaces() {
        // A short key and the same key with trailing spaces up to the key
        // length normalize identically.
        let engine = CipherEngine::new(CipherAlgorithm::Aes);
        let padded = format!("{:<32}", "abc");
        assert_eq!(padded.len(), 32);

        let payload = engine.encrypt("payload", "abc").expect("Failed to encrypt");
        let decrypted = engine.decrypt(&payload, &padded).expect("Failed to decrypt");

        assert_eq!(decrypted, "payload");
    }

    #[test]
    fn test_over_long_key_is_truncated() {
        let engine = CipherEngine::new(CipherAlgorithm::Blowfish);
        let long_key = "0123456789abcdefEXTRA MATERIAL IGNORED";
        let truncated = &long_key[..CipherAlgorithm::Blowfish.key_len()];

        let payload = engine.encrypt("payload", long_key).expect("Failed to encrypt");
        let decrypted = engine.decrypt(&payload, truncated).expect("Failed to decrypt");

        assert_eq!(decrypted, "payload");
    }

    proptest! {
        #[test]
        fn prop_round_trip_law(plaintext in ".*", key in ".*") {
            for algorithm in CipherAlgorithm::ALL {
                let engine = CipherEngine::new(algorithm);
                let payload = engine.encrypt(&plaintext, &key).expect("Failed to encrypt");
                let decrypted = engine.decrypt(&payload, &key).expect("Failed to decrypt");
                prop_assert_eq!(&decrypted, &plaintext);
            }
        }
    }
}
