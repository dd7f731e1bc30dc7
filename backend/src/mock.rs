use chrono::{Duration, Utc};
use shared::{CompletedTask, JanitorReport, ReportStatus, Severity};

// Demo datasets for the surfaces the detector does not cover. Timestamps
// are generated relative to now so the views never show stale dates.

fn iso(ago: Duration) -> String {
    (Utc::now() - ago).to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

pub fn completed_tasks() -> Vec<CompletedTask> {
    let task = |id: &str,
                title: &str,
                description: &str,
                location: &str,
                priority: Severity,
                assigned_to: &str,
                created_hours_ago: i64| {
        CompletedTask {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            status: "completed".to_string(),
            priority,
            assigned_to: assigned_to.to_string(),
            created_at: iso(Duration::hours(created_hours_ago)),
            completed_at: iso(Duration::hours(created_hours_ago - 2)),
            images: vec!["/uploads/mockimages/placeholder.svg".to_string()],
        }
    };

    vec![
        task(
            "task-101",
            "Plastic bottle cleanup",
            "Plastic bottles detected in park area",
            "North Campus, Building A",
            Severity::High,
            "John Doe",
            72,
        ),
        task(
            "task-102",
            "Paper waste removal",
            "Paper waste detected near office building",
            "Student Center, East Entrance",
            Severity::Medium,
            "Jane Smith",
            96,
        ),
        task(
            "task-103",
            "Glass debris cleanup",
            "Broken glass detected on sidewalk",
            "Library, Main Entrance",
            Severity::High,
            "Robert Johnson",
            48,
        ),
        task(
            "task-104",
            "Food waste cleanup",
            "Food waste detected in public area",
            "West Parking Lot",
            Severity::Low,
            "Emily Chen",
            24,
        ),
        task(
            "task-105",
            "Mixed waste cleanup",
            "Mixed waste detected in residential area",
            "Science Building, Room 204",
            Severity::Medium,
            "Rajesh Kumar",
            12,
        ),
    ]
}

pub fn janitor_reports() -> Vec<JanitorReport> {
    let report = |id: &str,
                  hours_ago: i64,
                  location: &str,
                  waste_type: &str,
                  severity: Severity,
                  description: &str,
                  images: &[&str],
                  status: ReportStatus,
                  janitor_name: &str| {
        JanitorReport {
            id: id.to_string(),
            timestamp: iso(Duration::hours(hours_ago)),
            location: location.to_string(),
            waste_type: waste_type.to_string(),
            severity,
            description: description.to_string(),
            images: images.iter().map(|path| path.to_string()).collect(),
            status,
            janitor_name: janitor_name.to_string(),
            created_at: iso(Duration::hours(hours_ago)),
        }
    };

    vec![
        report(
            "report-001",
            24,
            "North Campus, Building A",
            "Plastic",
            Severity::Medium,
            "Large pile of plastic bottles and containers near the recycling bin.",
            &["/uploads/mockimages/plastic-waste-1.jpg"],
            ReportStatus::Pending,
            "John Doe",
        ),
        report(
            "report-002",
            48,
            "Student Center, East Entrance",
            "Glass",
            Severity::High,
            "Broken glass bottles scattered across the walkway. Hazard for pedestrians.",
            &["/uploads/mockimages/glass-waste-1.jpg"],
            ReportStatus::InProgress,
            "Jane Smith",
        ),
        report(
            "report-003",
            72,
            "West Parking Lot",
            "E-waste",
            Severity::Low,
            "Discarded electronic components left near garbage bin.",
            &["/uploads/mockimages/ewaste-1.jpg"],
            ReportStatus::Resolved,
            "Alex Johnson",
        ),
        report(
            "report-004",
            12,
            "Library, South Wing",
            "Paper",
            Severity::Medium,
            "Large pile of discarded books and papers left on the floor.",
            &["/uploads/mockimages/paper-waste-1.jpg"],
            ReportStatus::Pending,
            "Morgan Lee",
        ),
        report(
            "report-005",
            4,
            "Science Building, Room 204",
            "Hazardous",
            Severity::Critical,
            "Chemical spill in science lab. Room evacuated; needs trained personnel.",
            &["/uploads/mockimages/hazardous-1.jpg"],
            ReportStatus::InProgress,
            "Sam Wilson",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_has_five_completed_tasks() {
        let tasks = completed_tasks();
        assert_eq!(tasks.len(), 5);
        assert!(tasks.iter().all(|task| task.status == "completed"));
    }

    #[test]
    fn completion_never_precedes_creation() {
        for task in completed_tasks() {
            assert!(task.completed_at > task.created_at, "task {}", task.id);
        }
    }

    #[test]
    fn reports_cover_every_status() {
        let reports = janitor_reports();
        assert!(reports.iter().any(|r| r.status == ReportStatus::Pending));
        assert!(reports.iter().any(|r| r.status == ReportStatus::InProgress));
        assert!(reports.iter().any(|r| r.status == ReportStatus::Resolved));
    }
}
