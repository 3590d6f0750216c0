//! Test data generation
//!
//! Produces payloads of a requested size and shape (text, JSON, binary) for
//! benchmark runs that do not supply their own data. Generation is
//! parameterized over the random source so tests can seed it; the
//! production path uses the thread RNG for text/JSON shapes and the OS
//! random source for binary payloads.

use chrono::Utc;
use rand::Rng;
use rand_core::{OsRng, RngCore};
use serde_json::json;

use crate::shared::constants::{
    BASE36_ALPHABET, BYTES_PER_KB, JSON_ENTRY_TARGET_BYTES, JSON_VALUE_LENGTH, TEXT_ALPHABET,
};
use crate::shared::error::{BenchError, BenchResult};
use crate::shared::types::DataType;

/// Test payload generator
pub struct DataGenerator;

impl DataGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a payload of approximately `size_kb * 1024` bytes.
    ///
    /// Text payloads hit the size exactly, binary payloads decode to it
    /// exactly, JSON payloads approximate it via entry count.
    pub fn generate(&self, size_kb: f64, data_type: DataType) -> BenchResult<String> {
        let byte_size = Self::validated_byte_size(size_kb)?;

        match data_type {
            DataType::Text => Ok(Self::text_payload(&mut rand::thread_rng(), byte_size)),
            DataType::Json => Self::json_payload(&mut rand::thread_rng(), byte_size),
            DataType::Binary => Ok(Self::binary_payload_os(byte_size)),
        }
    }

    /// Generate with a caller-supplied RNG, including for binary payloads.
    /// Tests pass a seeded `StdRng` here to get reproducible output.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        size_kb: f64,
        data_type: DataType,
    ) -> BenchResult<String> {
        let byte_size = Self::validated_byte_size(size_kb)?;

        match data_type {
            DataType::Text => Ok(Self::text_payload(rng, byte_size)),
            DataType::Json => Self::json_payload(rng, byte_size),
            DataType::Binary => {
                let mut buf = vec![0u8; byte_size];
                rng.fill_bytes(&mut buf);
                Ok(hex::encode(buf))
            }
        }
    }

    fn validated_byte_size(size_kb: f64) -> BenchResult<usize> {
        // The negated comparison also rejects NaN.
        if !(size_kb > 0.0) {
            return Err(BenchError::invalid_data_size(format!(
                "{} KB (size must be a positive number)",
                size_kb
            )));
        }
        Ok((size_kb * BYTES_PER_KB) as usize)
    }

    /// `byte_size` characters drawn uniformly from the fixed alphabet.
    fn text_payload<R: Rng + ?Sized>(rng: &mut R, byte_size: usize) -> String {
        let alphabet = TEXT_ALPHABET.as_bytes();
        let mut payload = String::with_capacity(byte_size);
        for _ in 0..byte_size {
            payload.push(alphabet[rng.gen_range(0..alphabet.len())] as char);
        }
        payload
    }

    /// A `{"data": [...]}` document with one entry per ~100 target bytes.
    fn json_payload<R: Rng + ?Sized>(rng: &mut R, byte_size: usize) -> BenchResult<String> {
        let entries = byte_size.div_ceil(JSON_ENTRY_TARGET_BYTES);
        let mut items = Vec::with_capacity(entries);
        for id in 0..entries {
            items.push(json!({
                "id": id,
                "value": Self::base36_value(rng),
                "timestamp": Utc::now().timestamp_millis(),
            }));
        }
        Ok(serde_json::to_string(&json!({ "data": items }))?)
    }

    /// `byte_size` OS-random bytes, hex-encoded into the payload.
    fn binary_payload_os(byte_size: usize) -> String {
        let mut buf = vec![0u8; byte_size];
        OsRng.fill_bytes(&mut buf);
        hex::encode(buf)
    }

    fn base36_value<R: Rng + ?Sized>(rng: &mut R) -> String {
        let alphabet = BASE36_ALPHABET.as_bytes();
        (0..JSON_VALUE_LENGTH)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}
