use actix_multipart::form::MultipartFormConfig;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use cipherbench_core::{registry, BenchmarkRunner};
use cipherbench_server::api::handlers::benchmark::{
    file_benchmark, health, recommend_algorithm, run_benchmark,
};
use cipherbench_server::infrastructure::config::ServerConfig;
use cipherbench_server::infrastructure::logger::Logger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {e}");
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Configuration initialization failed: {e}"),
            ));
        }
    };

    Logger::init(&config.log_level);

    log::info!("🚀 Starting CipherBench server...");
    log::info!("✅ Configuration loaded successfully");
    log::info!(
        "🔐 Registered algorithms: {}",
        registry::supported_algorithms().join(", ")
    );

    let runner = web::Data::new(BenchmarkRunner::new());
    log::info!("✅ Benchmark engine initialized successfully");

    let port = config.port;
    let max_upload_bytes = config.max_upload_bytes;

    log::info!("🌐 Starting CipherBench server on port {}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(actix_cors::Cors::permissive())
            .app_data(runner.clone())
            .app_data(MultipartFormConfig::default().total_limit(max_upload_bytes))
            .service(health)
            .service(
                web::scope("/api")
                    .service(run_benchmark)
                    .service(file_benchmark)
                    .service(recommend_algorithm),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
