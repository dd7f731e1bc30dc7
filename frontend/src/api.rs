use gloo_net::http::Request;
use shared::{CompletedTask, DetectionLog, JanitorReport, StatusUpdateRequest};

// All requests go through the gateway on the same origin; it relays to
// the external detector or serves mock data itself.

pub async fn fetch_logs(range: Option<&str>) -> Result<Vec<DetectionLog>, String> {
    let url = match range {
        Some(range) => format!("/api/logs?range={range}"),
        None => "/api/logs".to_string(),
    };
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch logs: {} {}",
            response.status(),
            response.status_text()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn update_status(request: &StatusUpdateRequest) -> Result<(), String> {
    let response = Request::post("/api/update-status")
        .json(request)
        .map_err(|e| format!("Failed to build request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Server error: {status} - {body}"));
    }

    Ok(())
}

pub async fn fetch_completed_tasks() -> Result<Vec<CompletedTask>, String> {
    let response = Request::get("/api/completed-tasks")
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch completed tasks: {} {}",
            response.status(),
            response.status_text()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn fetch_janitor_reports(status: Option<&str>) -> Result<Vec<JanitorReport>, String> {
    let url = match status {
        Some(status) => format!("/api/admin/janitor-reports?status={status}"),
        None => "/api/admin/janitor-reports".to_string(),
    };
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch janitor reports: {} {}",
            response.status(),
            response.status_text()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}
