mod detector;
mod mock;
mod routes;

use std::env;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use detector::DetectorClient;
use routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let frontend_dir = env::var("FRONTEND_DIST").unwrap_or_else(|_| {
        if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
            format!("{}/../frontend/dist", manifest_dir)
        } else {
            "/usr/src/app/frontend/dist".to_string()
        }
    });

    let detector_url =
        env::var("DETECTOR_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let detector = DetectorClient::new(&detector_url)
        .map_err(|e| std::io::Error::other(format!("Invalid DETECTOR_API_URL: {e}")))?;
    log::info!("Relaying detection traffic to {detector_url}");

    let port = env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let bind_address = format!("0.0.0.0:{port}");

    log::info!("Starting server on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::AUTHORIZATION,
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(detector.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
