use js_sys::Date;
use shared::DetectionStatus;
use shared::stats::parse_timestamp;
use yew::prelude::*;

/// Report ids look like `REP<time><salt>` in base 36, matching what the
/// success modal shows the citizen.
pub fn generate_report_id() -> String {
    let now = Date::now() as u64;
    let salt = (js_sys::Math::random() * 1_679_616.0) as u64; // 36^4
    format!("REP{}{}", to_base36(now), to_base36(salt)).to_uppercase()
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// "14:05" for table cells.
pub fn format_time(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|when| when.format("%H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// "Aug 1, 2026" for table cells.
pub fn format_date(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|when| when.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Full date and time for detail views.
pub fn format_datetime(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|when| when.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Detector confidences are 0..1; mock data sometimes carries percents
/// already. Display both as a whole percent.
pub fn confidence_percent(confidence: f32) -> i32 {
    if confidence <= 1.0 {
        (confidence * 100.0).round() as i32
    } else {
        confidence.round() as i32
    }
}

/// "Pending" from "pending" for badges.
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn status_badge_class(status: DetectionStatus) -> &'static str {
    match status {
        DetectionStatus::Pending => "badge badge-pending",
        DetectionStatus::Assigned => "badge badge-assigned",
        DetectionStatus::InProgress => "badge badge-in-progress",
        DetectionStatus::Cleaned => "badge badge-cleaned",
    }
}

pub fn render_error_banner(error: &Option<String>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

pub fn render_loading(label: &str) -> Html {
    html! {
        <div class="loading-indicator">
            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            <p>{ label }</p>
        </div>
    }
}

/// Browser alert, the product's blunt instrument for user-facing errors.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
