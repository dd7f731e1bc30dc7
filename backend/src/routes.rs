use std::str::FromStr;

use actix_files::Files;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::ReportStatus;

use crate::detector::{DetectorClient, DetectorError, DetectorHealth, ImageRelay, RelayedResponse};
use crate::mock;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    success: bool,
    details: String,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/logs").route(web::get().to(get_logs)))
        .service(web::resource("/api/update-status").route(web::post().to(update_status)))
        .service(web::resource("/api/detector-check").route(web::get().to(detector_check)))
        .service(web::resource("/api/completed-tasks").route(web::get().to(completed_tasks)))
        .service(
            web::resource("/api/admin/janitor-reports").route(web::get().to(list_janitor_reports)),
        )
        .service(
            web::resource("/api/admin/janitor-reports/{id}")
                .route(web::get().to(get_janitor_report))
                .route(web::patch().to(update_janitor_report))
                .route(web::delete().to(delete_janitor_report)),
        )
        .service(web::resource("/view_image/{path:.*}").route(web::get().to(view_image)));
}

/// Successful upstream responses pass through untouched; anything else
/// collapses into the generic 500 envelope.
fn relay_or_envelope(
    context: &str,
    relayed: Result<RelayedResponse, DetectorError>,
) -> HttpResponse {
    match relayed {
        Ok(upstream) if upstream.is_success() => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);
            let mut builder = HttpResponse::build(status);
            if let Some(content_type) = upstream.content_type {
                builder.content_type(content_type);
            }
            builder.body(upstream.body)
        }
        Ok(upstream) => {
            error!("Failed to {context}: detector answered {}", upstream.status);
            failure_envelope(context, &format!("Detector API error: {}", upstream.status))
        }
        Err(err) => {
            error!("Failed to {context}: {err}");
            failure_envelope(context, &err.to_string())
        }
    }
}

fn failure_envelope(context: &str, details: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: format!("Failed to {context}"),
        success: false,
        details: details.to_string(),
    })
}

async fn get_logs(detector: web::Data<DetectorClient>, req: HttpRequest) -> HttpResponse {
    relay_or_envelope(
        "fetch detection logs",
        detector.relay_get("get_logs", req.query_string()).await,
    )
}

async fn update_status(detector: web::Data<DetectorClient>, body: web::Bytes) -> HttpResponse {
    info!("Forwarding status update to the detector");
    relay_or_envelope(
        "update status",
        detector.relay_post("update_status", body.to_vec()).await,
    )
}

async fn view_image(detector: web::Data<DetectorClient>, path: web::Path<String>) -> HttpResponse {
    let image_path = path.into_inner();
    info!("Image path from request: {image_path}");

    match detector.fetch_image(&image_path).await {
        Ok(ImageRelay::Fetched { content_type, body }) => HttpResponse::Ok()
            .content_type(content_type)
            .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
            .body(body),
        Ok(ImageRelay::Redirect { url }) => HttpResponse::TemporaryRedirect()
            .insert_header((header::LOCATION, url))
            .finish(),
        Err(err) => {
            error!("Error fetching image {image_path}: {err}");
            failure_envelope("fetch image", &err.to_string())
        }
    }
}

async fn detector_check(detector: web::Data<DetectorClient>) -> HttpResponse {
    match detector.check().await {
        Ok(DetectorHealth::Primary(data)) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Successfully connected to detector API",
            "data": data,
        })),
        Ok(DetectorHealth::Fallback(status)) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Connected to detector API via fallback endpoint",
            "status": status,
        })),
        Err(err) => {
            error!("Detector API connection test failed: {err}");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to connect to detector API",
                "error": err.to_string(),
                "suggestion": format!(
                    "Make sure the detection service is running on {}",
                    detector.base_url()
                ),
            }))
        }
    }
}

async fn completed_tasks() -> HttpResponse {
    HttpResponse::Ok().json(mock::completed_tasks())
}

#[derive(Deserialize)]
struct ReportFilter {
    status: Option<String>,
}

async fn list_janitor_reports(query: web::Query<ReportFilter>) -> HttpResponse {
    let mut reports = mock::janitor_reports();
    if let Some(status) = query.status.as_deref() {
        reports.retain(|report| report.status.to_string() == status);
    }
    reports.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    HttpResponse::Ok().json(reports)
}

async fn get_janitor_report(path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Report with ID {id} would be fetched from database"),
    }))
}

#[derive(Deserialize)]
struct ReportPatch {
    status: Option<String>,
}

async fn update_janitor_report(
    path: web::Path<String>,
    body: web::Json<ReportPatch>,
) -> HttpResponse {
    let id = path.into_inner();
    let status = body
        .status
        .as_deref()
        .and_then(|raw| ReportStatus::from_str(raw).ok());
    let Some(status) = status else {
        return HttpResponse::BadRequest().json(json!({
            "error": "Invalid status. Must be one of: pending, in-progress, resolved",
        }));
    };

    HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Report {id} status updated to {status}"),
        "report": { "id": id, "status": status },
    }))
}

async fn delete_janitor_report(path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Report {id} would be deleted from database"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use wiremock::matchers::{body_json, method, path as upstream_path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    macro_rules! gateway {
        ($base:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(DetectorClient::new($base).unwrap()))
                    .configure(configure_api),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn update_status_forwards_the_exact_body_and_relays_the_response() {
        let server = MockServer::start().await;
        let request_body = json!({
            "timestamp": "2026-08-01 10:15:00",
            "status": "cleaned",
            "cleanedBy": "Jane Smith",
            "notes": "Status updated to cleaned by admin"
        });
        Mock::given(method("POST"))
            .and(upstream_path("/update_status"))
            .and(body_json(&request_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let app = gateway!(&server.uri());
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/update-status")
                .set_json(&request_body)
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": true}));
    }

    #[actix_web::test]
    async fn update_status_relays_an_upstream_failure_payload_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(upstream_path("/update_status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let app = gateway!(&server.uri());
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/update-status")
                .set_json(json!({"timestamp": "x", "status": "cleaned"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": false}));
    }

    #[actix_web::test]
    async fn update_status_upstream_error_becomes_the_generic_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(upstream_path("/update_status"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let app = gateway!(&server.uri());
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/update-status")
                .set_json(json!({"timestamp": "x", "status": "cleaned"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("update status"));
    }

    #[actix_web::test]
    async fn update_status_network_error_becomes_the_generic_envelope() {
        // Nothing listens on this port.
        let app = gateway!("http://127.0.0.1:1");
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/update-status")
                .set_json(json!({"timestamp": "x", "status": "cleaned"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
    }

    #[actix_web::test]
    async fn logs_relay_passes_the_array_and_query_through() {
        let server = MockServer::start().await;
        let upstream_logs = json!([{
            "timestamp": "2026-08-01 10:15:00",
            "class": "garbage_bag",
            "confidence": 0.87,
            "location": "Main Entrance",
            "status": "pending"
        }]);
        Mock::given(method("GET"))
            .and(upstream_path("/get_logs"))
            .and(query_param("range", "7d"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&upstream_logs))
            .expect(1)
            .mount(&server)
            .await;

        let app = gateway!(&server.uri());
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/logs?range=7d").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, upstream_logs);
    }

    #[actix_web::test]
    async fn image_relay_serves_a_direct_hit_with_cache_headers() {
        let server = MockServer::start().await;
        let image_bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        Mock::given(method("GET"))
            .and(upstream_path("/uploads/det_1.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(image_bytes.clone(), "image/png"))
            .mount(&server)
            .await;

        let app = gateway!(&server.uri());
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/view_image/det_1.jpg")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=3600"
        );
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), image_bytes.as_slice());
    }

    #[actix_web::test]
    async fn image_relay_falls_back_to_the_uploads_prefix() {
        let server = MockServer::start().await;
        let image_bytes = vec![1, 2, 3];
        // The direct path 404s; only the uploads/-prefixed retry hits.
        Mock::given(method("GET"))
            .and(upstream_path("/detections/missing.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(upstream_path("/uploads/detections/missing.jpg"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(image_bytes.clone(), "image/jpeg"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let app = gateway!(&server.uri());
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/view_image/detections/missing.jpg")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), image_bytes.as_slice());
    }

    #[actix_web::test]
    async fn image_relay_redirects_when_every_attempt_fails() {
        let server = MockServer::start().await;
        // No mounted mocks: every fetch 404s.
        let app = gateway!(&server.uri());
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/view_image/detections/gone.jpg")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        let location = resp.headers().get(header::LOCATION).unwrap();
        assert_eq!(
            location.to_str().unwrap(),
            format!("{}/detections/gone.jpg", server.uri())
        );
    }

    #[actix_web::test]
    async fn detector_check_reports_the_fallback_probe() {
        let server = MockServer::start().await;
        // /ping is unknown (404); the root endpoint answers.
        Mock::given(method("GET"))
            .and(upstream_path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let app = gateway!(&server.uri());
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/detector-check")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert!(body["message"].as_str().unwrap().contains("fallback"));
    }

    #[actix_web::test]
    async fn completed_tasks_returns_the_mock_archive() {
        let app = gateway!("http://127.0.0.1:1");
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/completed-tasks")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<shared::CompletedTask> = test::read_body_json(resp).await;
        assert_eq!(body.len(), 5);
    }

    #[actix_web::test]
    async fn janitor_reports_are_sorted_newest_first_and_filterable() {
        let app = gateway!("http://127.0.0.1:1");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/admin/janitor-reports")
                .to_request(),
        )
        .await;
        let all: Vec<shared::JanitorReport> = test::read_body_json(resp).await;
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, "report-005");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/admin/janitor-reports?status=pending")
                .to_request(),
        )
        .await;
        let pending: Vec<shared::JanitorReport> = test::read_body_json(resp).await;
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].id, "report-004");
        assert!(pending.iter().all(|r| r.status == ReportStatus::Pending));
    }

    #[actix_web::test]
    async fn patching_a_report_validates_the_status() {
        let app = gateway!("http://127.0.0.1:1");

        let resp = test::call_service(
            &app,
            test::TestRequest::patch()
                .uri("/api/admin/janitor-reports/report-001")
                .set_json(json!({"status": "sideways"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(
            &app,
            test::TestRequest::patch()
                .uri("/api/admin/janitor-reports/report-001")
                .set_json(json!({"status": "resolved"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["report"]["status"], json!("resolved"));
    }
}
