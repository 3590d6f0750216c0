//! Benchmark execution and derived metrics
//!
//! Times one encrypt and one decrypt of a payload against a registered
//! cipher and derives throughput and an efficiency score. Purely CPU-bound
//! and free of shared mutable state, so concurrent runs need no locking.

use std::time::Instant;

use serde::Serialize;

use crate::core::cipher::{registry, CipherEngine};
use crate::core::generator::DataGenerator;
use crate::shared::error::{BenchError, BenchResult};
use crate::shared::types::{BenchmarkRequest, DataType};

/// Timings and derived metrics for one benchmark run.
///
/// Wire field names are camelCase for compatibility with existing clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingMetrics {
    /// Encryption wall time in milliseconds (sub-millisecond precision)
    pub encrypt_time: f64,
    /// Decryption wall time in milliseconds
    pub decrypt_time: f64,
    pub total_time: f64,
    /// KB per second over the total time. `f64::INFINITY` when the total
    /// time is zero; serde_json renders that as `null`, which is what the
    /// previous implementation of this service emitted.
    pub throughput: f64,
    /// `100 - min(100, total_ms / size_kb)`. A deliberately crude score
    /// that rewards low time-per-KB; only meaningful relative to other
    /// algorithms, and reproduced exactly for comparability.
    pub efficiency: f64,
    /// Payload length in bytes before encryption
    pub original_size: usize,
    /// Hex-encoded ciphertext length
    pub encrypted_size: usize,
}

impl TimingMetrics {
    /// Derive the full metric set from raw timings and sizes.
    pub fn compute(
        encrypt_time: f64,
        decrypt_time: f64,
        data_size_kb: f64,
        original_size: usize,
        encrypted_size: usize,
    ) -> Self {
        let total_time = encrypt_time + decrypt_time;
        let throughput = if total_time > 0.0 {
            data_size_kb / (total_time / 1000.0)
        } else {
            f64::INFINITY
        };
        let efficiency = 100.0 - (total_time / data_size_kb).min(100.0);

        Self {
            encrypt_time,
            decrypt_time,
            total_time,
            throughput,
            efficiency,
            original_size,
            encrypted_size,
        }
    }
}

/// Result of benchmarking one algorithm against generated data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub algorithm: String,
    pub data_size: f64,
    pub data_type: String,
    #[serde(flatten)]
    pub metrics: TimingMetrics,
}

/// Runs benchmarks against ciphers from the registry
pub struct BenchmarkRunner {
    generator: DataGenerator,
}

impl BenchmarkRunner {
    pub fn new() -> Self {
        Self {
            generator: DataGenerator::new(),
        }
    }

    /// Benchmark a request against generated test data.
    ///
    /// The algorithm is resolved before any data is generated so an
    /// unsupported identifier fails fast.
    pub fn run(&self, request: &BenchmarkRequest) -> BenchResult<BenchmarkResult> {
        let engine = registry::lookup(&request.algorithm)?;
        let payload = self
            .generator
            .generate(request.data_size, DataType::from_tag(&request.data_type))?;

        let metrics = self.run_payload(&engine, &payload, request.data_size, request.key())?;

        log::debug!(
            "benchmark complete: algorithm={} size={}KB total={:.3}ms",
            request.algorithm,
            request.data_size,
            metrics.total_time
        );

        Ok(BenchmarkResult {
            algorithm: request.algorithm.clone(),
            data_size: request.data_size,
            data_type: request.data_type.clone(),
            metrics,
        })
    }

    /// Benchmark a caller-supplied payload (e.g. an uploaded file).
    ///
    /// `data_size_kb` is the payload size the throughput and efficiency
    /// formulas are computed against.
    pub fn run_payload(
        &self,
        engine: &CipherEngine,
        payload: &str,
        data_size_kb: f64,
        key: &str,
    ) -> BenchResult<TimingMetrics> {
        let encrypt_start = Instant::now();
        let encrypted = engine.encrypt(payload, key)?;
        let encrypt_time = encrypt_start.elapsed().as_secs_f64() * 1000.0;

        // Decrypting what we just encrypted; a failure here means the run
        // itself is broken and must surface, not be swallowed. Results are
        // never retried automatically since a retry would skew timings.
        let decrypt_start = Instant::now();
        engine
            .decrypt(&encrypted, key)
            .map_err(|e| BenchError::execution(e.to_string()))?;
        let decrypt_time = decrypt_start.elapsed().as_secs_f64() * 1000.0;

        Ok(TimingMetrics::compute(
            encrypt_time,
            decrypt_time,
            data_size_kb,
            payload.len(),
            encrypted.ciphertext_len(),
        ))
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_produces_consistent_metrics() {
        let runner = BenchmarkRunner::new();
        let request = BenchmarkRequest::new("aes", 1.0, "text");

        let result = runner.run(&request).expect("Failed to run benchmark");

        assert_eq!(result.algorithm, "aes");
        assert_eq!(result.data_size, 1.0);
        assert_eq!(result.metrics.original_size, 1024);
        assert!(result.metrics.encrypted_size > 0);
        // hex encoding always yields an even number of characters
        assert_eq!(result.metrics.encrypted_size % 2, 0);
        assert!(result.metrics.encrypt_time >= 0.0);
        assert!(result.metrics.decrypt_time >= 0.0);
        let expected_total = result.metrics.encrypt_time + result.metrics.decrypt_time;
        assert!((result.metrics.total_time - expected_total).abs() < f64::EPSILON);
        assert!(result.metrics.throughput > 0.0);
    }

    #[test]
    fn test_run_rejects_unknown_algorithm_before_generating_data() {
        let runner = BenchmarkRunner::new();
        // An enormous size: if generation ran first this test would be slow.
        let request = BenchmarkRequest::new("rot13", 1e9, "binary");

        let result = runner.run(&request);
        assert!(matches!(result, Err(BenchError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_run_rejects_non_positive_size() {
        let runner = BenchmarkRunner::new();
        let request = BenchmarkRequest::new("aes", -5.0, "text");

        let result = runner.run(&request);
        assert!(matches!(result, Err(BenchError::InvalidDataSize(_))));
    }

    #[test]
    fn test_every_registered_algorithm_benchmarks() {
        let runner = BenchmarkRunner::new();
        for id in registry::supported_algorithms() {
            let request = BenchmarkRequest::new(id, 1.0, "json");
            let result = runner.run(&request).expect("Failed to run benchmark");
            assert_eq!(result.algorithm, id);
        }
    }

    #[test]
    fn test_efficiency_is_capped_at_100() {
        // Total time of zero is the most favorable case the formula allows.
        let metrics = TimingMetrics::compute(0.0, 0.0, 10.0, 10240, 20480);
        assert_eq!(metrics.efficiency, 100.0);

        // A tiny size inflates time-per-KB; the min() clamp floors the
        // score at 0 rather than letting it go negative.
        let slow = TimingMetrics::compute(300.0, 300.0, 0.001, 1, 2);
        assert_eq!(slow.efficiency, 0.0);

        for (enc, dec, size) in [(0.5, 0.5, 1.0), (12.0, 9.0, 64.0), (0.001, 0.002, 0.25)] {
            let m = TimingMetrics::compute(enc, dec, size, 1024, 2048);
            assert!(m.efficiency <= 100.0);
            assert!(m.efficiency >= 0.0);
        }
    }

    #[test]
    fn test_zero_total_time_yields_infinite_throughput() {
        let metrics = TimingMetrics::compute(0.0, 0.0, 10.0, 10240, 20480);

        assert!(metrics.throughput.is_infinite());
        // serde_json renders non-finite floats as null, matching the wire
        // behavior of the previous implementation.
        let json = serde_json::to_value(&metrics).expect("Failed to serialize metrics");
        assert!(json["throughput"].is_null());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let runner = BenchmarkRunner::new();
        let request = BenchmarkRequest::new("blowfish", 1.0, "text");
        let result = runner.run(&request).expect("Failed to run benchmark");

        let json = serde_json::to_value(&result).expect("Failed to serialize result");
        for field in [
            "algorithm",
            "dataSize",
            "dataType",
            "encryptTime",
            "decryptTime",
            "totalTime",
            "throughput",
            "efficiency",
            "originalSize",
            "encryptedSize",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }
}
