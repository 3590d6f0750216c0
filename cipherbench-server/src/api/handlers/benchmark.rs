//! HTTP handlers for the benchmark API

use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use cipherbench_core::shared::constants::DEFAULT_BENCHMARK_KEY;
use cipherbench_core::{recommend, registry, BenchmarkRequest, BenchmarkRunner, TimingMetrics};

use crate::domain::error::ApiError;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "message": "CipherBench server is running"
    }))
}

/// Run a benchmark against generated test data.
#[post("/benchmark")]
pub async fn run_benchmark(
    runner: web::Data<BenchmarkRunner>,
    request: web::Json<BenchmarkRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    let runner = runner.clone();

    // Encrypt/decrypt of multi-MB payloads is CPU-bound; keep it off the
    // async workers.
    let result = web::block(move || runner.run(&request))
        .await
        .map_err(|e| ApiError::internal(format!("benchmark task failed: {e}")))??;

    Ok(HttpResponse::Ok().json(result))
}

#[derive(Debug, MultipartForm)]
pub struct FileBenchmarkForm {
    #[multipart(limit = "10MiB")]
    pub file: Option<TempFile>,
    pub algorithm: Option<Text<String>>,
    pub key: Option<Text<String>>,
}

/// Response for a file benchmark: file identity instead of the generated
/// data-size/type echo, same metric fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileBenchmarkResult {
    pub algorithm: String,
    pub file_name: String,
    pub file_size: f64,
    #[serde(flatten)]
    pub metrics: TimingMetrics,
}

/// Run a benchmark against an uploaded file.
#[post("/file-benchmark")]
pub async fn file_benchmark(
    runner: web::Data<BenchmarkRunner>,
    MultipartForm(form): MultipartForm<FileBenchmarkForm>,
) -> Result<HttpResponse, ApiError> {
    let file = form
        .file
        .ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    let algorithm = form
        .algorithm
        .map(|t| t.into_inner())
        .unwrap_or_default();
    let key = form
        .key
        .map(|t| t.into_inner())
        .unwrap_or_else(|| DEFAULT_BENCHMARK_KEY.to_string());

    let file_name = file
        .file_name
        .clone()
        .unwrap_or_else(|| "upload".to_string());
    let file_size_kb = file.size as f64 / 1024.0;

    let runner = runner.clone();
    let algorithm_id = algorithm.clone();
    // The upload sits in a NamedTempFile; moving it into the closure keeps
    // it alive for the read and removes it from disk when the closure
    // returns, success or failure.
    let temp = file.file;

    let metrics = web::block(move || -> Result<TimingMetrics, ApiError> {
        let engine = registry::lookup(&algorithm_id)?;
        let bytes = std::fs::read(temp.path())
            .map_err(|e| ApiError::internal(format!("failed to read uploaded file: {e}")))?;
        let payload = String::from_utf8_lossy(&bytes).into_owned();
        Ok(runner.run_payload(&engine, &payload, file_size_kb, &key)?)
    })
    .await
    .map_err(|e| ApiError::internal(format!("benchmark task failed: {e}")))??;

    log::info!(
        "file benchmark complete: algorithm={} file={} size={:.1}KB",
        algorithm,
        file_name,
        file_size_kb
    );

    Ok(HttpResponse::Ok().json(FileBenchmarkResult {
        algorithm,
        file_name,
        file_size: file_size_kb,
        metrics,
    }))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub data_size: f64,
    #[serde(default)]
    pub data_type: String,
}

/// Recommend an algorithm for the given data characteristics.
#[post("/recommend")]
pub async fn recommend_algorithm(request: web::Json<RecommendRequest>) -> impl Responder {
    let recommendation = recommend(request.data_size, &request.data_type);
    HttpResponse::Ok().json(recommendation)
}
