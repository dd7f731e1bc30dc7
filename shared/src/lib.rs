use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub mod location;
pub mod report_store;
pub mod stats;

/// Lifecycle of a detection, from the moment the detector logs it until a
/// janitor confirms the cleanup. Missing status on the wire means pending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DetectionStatus {
    #[default]
    Pending,
    Assigned,
    InProgress,
    Cleaned,
}

/// One detection record as the external detector reports it. The detector
/// is free to add fields; anything unknown is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionLog {
    pub timestamp: String,
    pub class: String,
    pub confidence: f32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: DetectionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_id: Option<String>,
    #[serde(rename = "forCleaning", default, skip_serializing_if = "Option::is_none")]
    pub for_cleaning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DetectionLog {
    /// Records the janitor portal treats as actionable cleanup work.
    pub fn is_cleanup_candidate(&self) -> bool {
        self.for_cleaning.unwrap_or(true)
            && matches!(
                self.status,
                DetectionStatus::Pending | DetectionStatus::Assigned | DetectionStatus::InProgress
            )
    }
}

/// Body of the status-update call. Field names match the external
/// detector's `/update_status` contract exactly (camelCase `cleanedBy`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub timestamp: String,
    pub status: DetectionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Urgency scale shared by assigned tasks and janitor incident reports.
/// Ordering follows urgency, so sorting by it is meaningful.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Status of a janitor-filed incident report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReportStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

/// Archived cleanup task returned by the gateway's mock archive endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: String,
    pub priority: Severity,
    pub assigned_to: String,
    pub created_at: String,
    pub completed_at: String,
    pub images: Vec<String>,
}

/// Incident report filed from the janitor portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JanitorReport {
    pub id: String,
    pub timestamp: String,
    pub location: String,
    pub waste_type: String,
    pub severity: Severity,
    pub description: String,
    pub images: Vec<String>,
    pub status: ReportStatus,
    pub janitor_name: String,
    pub created_at: String,
}

/// Roster entry for the assign-task flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub available: bool,
}

/// Entry in the dashboard's mock task table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTask {
    pub id: String,
    pub garbage_id: String,
    pub location: String,
    pub assigned_to: String,
    pub assigned_at: String,
    pub deadline: String,
    pub status: String,
    pub priority: Severity,
}

/// A report submitted through the public reporting page. Never leaves the
/// browser: persisted only in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenReport {
    pub id: String,
    pub timestamp: String,
    pub report_type: String,
    pub description: String,
    pub photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default)]
    pub status: DetectionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!(DetectionStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            DetectionStatus::from_str("in-progress").unwrap(),
            DetectionStatus::InProgress
        );
        assert_eq!(
            serde_json::to_string(&DetectionStatus::Cleaned).unwrap(),
            "\"cleaned\""
        );
        let parsed: DetectionStatus = serde_json::from_str("\"assigned\"").unwrap();
        assert_eq!(parsed, DetectionStatus::Assigned);
    }

    #[test]
    fn detection_log_defaults_and_tolerates_unknown_fields() {
        // A minimal record straight from the detector, plus a field this
        // crate has never heard of.
        let raw = r#"{
            "timestamp": "2026-08-01 10:15:00",
            "class": "garbage_bag",
            "confidence": 0.87,
            "location": "Main Entrance",
            "bbox": [1, 2, 3, 4]
        }"#;
        let log: DetectionLog = serde_json::from_str(raw).unwrap();
        assert_eq!(log.status, DetectionStatus::Pending);
        assert_eq!(log.image_path, None);
        assert!(log.is_cleanup_candidate());
    }

    #[test]
    fn cleaned_records_are_not_cleanup_candidates() {
        let raw = r#"{
            "timestamp": "2026-08-01 10:15:00",
            "class": "trash",
            "confidence": 0.5,
            "location": "Zone 2",
            "status": "cleaned",
            "forCleaning": true
        }"#;
        let log: DetectionLog = serde_json::from_str(raw).unwrap();
        assert!(!log.is_cleanup_candidate());
    }

    #[test]
    fn status_update_uses_camel_case_wire_names() {
        let req = StatusUpdateRequest {
            timestamp: "2026-08-01 10:15:00".into(),
            status: DetectionStatus::Cleaned,
            cleaned_by: Some("Jane Smith".into()),
            notes: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"cleanedBy\":\"Jane Smith\""));
        assert!(!json.contains("notes"));
    }

    #[test]
    fn severity_orders_by_urgency() {
        let mut levels = vec![
            Severity::High,
            Severity::Low,
            Severity::Critical,
            Severity::Medium,
        ];
        levels.sort();
        assert_eq!(
            levels,
            vec![
                Severity::Low,
                Severity::Medium,
                Severity::High,
                Severity::Critical
            ]
        );
    }
}
