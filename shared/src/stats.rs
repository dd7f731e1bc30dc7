use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::{DetectionLog, DetectionStatus};

/// Counters behind the dashboard's stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub assigned: usize,
    pub in_progress: usize,
    pub cleaned: usize,
}

impl DashboardStats {
    pub fn compute(logs: &[DetectionLog]) -> Self {
        let mut stats = Self {
            total: logs.len(),
            ..Self::default()
        };
        for log in logs {
            match log.status {
                DetectionStatus::Pending => stats.pending += 1,
                DetectionStatus::Assigned => stats.assigned += 1,
                DetectionStatus::InProgress => stats.in_progress += 1,
                DetectionStatus::Cleaned => stats.cleaned += 1,
            }
        }
        stats
    }
}

/// Everything the analytics view renders, computed in one pass over the
/// raw logs so the page and the tests share a single implementation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsSummary {
    pub total_detections: usize,
    /// Percent of detections marked cleaned, 0 when there are none.
    pub completion_rate: f32,
    /// Daily counts for the seven days ending at `today` (oldest first).
    pub detection_trend: [usize; 7],
    /// Count per waste class, most frequent first.
    pub waste_distribution: Vec<(String, usize)>,
    /// Top five locations by detection count.
    pub location_hotspots: Vec<(String, usize)>,
    /// Counts per weekday, Sunday first.
    pub detections_by_weekday: [usize; 7],
    /// Counts per hour of day.
    pub detections_by_hour: [usize; 24],
}

impl AnalyticsSummary {
    pub fn compute(logs: &[DetectionLog], today: NaiveDate) -> Self {
        let total_detections = logs.len();
        let cleaned = logs
            .iter()
            .filter(|log| log.status == DetectionStatus::Cleaned)
            .count();
        let completion_rate = if total_detections > 0 {
            cleaned as f32 / total_detections as f32 * 100.0
        } else {
            0.0
        };

        let mut detection_trend = [0usize; 7];
        let mut detections_by_weekday = [0usize; 7];
        let mut detections_by_hour = [0usize; 24];
        let window_start = today - chrono::Days::new(6);

        for log in logs {
            let Some(when) = parse_timestamp(&log.timestamp) else {
                continue;
            };
            let date = when.date();
            if date >= window_start && date <= today {
                let offset = (date - window_start).num_days() as usize;
                detection_trend[offset] += 1;
            }
            detections_by_weekday[date.weekday().num_days_from_sunday() as usize] += 1;
            detections_by_hour[when.hour() as usize] += 1;
        }

        let waste_distribution = count_by(logs, |log| {
            if log.class.is_empty() {
                "Unknown".to_string()
            } else {
                log.class.clone()
            }
        });
        let mut location_hotspots = count_by(logs, |log| {
            if log.location.is_empty() {
                "Unknown Location".to_string()
            } else {
                log.location.clone()
            }
        });
        location_hotspots.truncate(5);

        Self {
            total_detections,
            completion_rate,
            detection_trend,
            waste_distribution,
            location_hotspots,
            detections_by_weekday,
            detections_by_hour,
        }
    }
}

/// Group logs by an arbitrary key, most frequent first (name breaks ties
/// so the output is stable).
pub fn count_by<F>(logs: &[DetectionLog], key: F) -> Vec<(String, usize)>
where
    F: Fn(&DetectionLog) -> String,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for log in logs {
        *counts.entry(key(log)).or_default() += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

pub fn count_by_class(logs: &[DetectionLog]) -> Vec<(String, usize)> {
    count_by(logs, |log| {
        if log.class.is_empty() {
            "Unknown".to_string()
        } else {
            log.class.clone()
        }
    })
}

pub fn count_by_zone(logs: &[DetectionLog]) -> Vec<(String, usize)> {
    count_by(logs, |log| {
        log.zone_name
            .clone()
            .unwrap_or_else(|| "Unknown Zone".to_string())
    })
}

/// The detector is not consistent about timestamp formats: live records
/// use `2026-08-01 10:15:00`, image filenames leak `2026-08-01_10-15-00`,
/// and mock data uses RFC 3339. Accept all three.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d_%H-%M-%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(timestamp: &str, class: &str, status: DetectionStatus) -> DetectionLog {
        DetectionLog {
            timestamp: timestamp.to_string(),
            class: class.to_string(),
            confidence: 0.9,
            location: "Main Entrance (1.0, 2.0)".into(),
            status,
            image_path: None,
            image_url: None,
            zone_name: Some("Zone 1".into()),
            camera_id: Some("camera_0".into()),
            for_cleaning: Some(true),
            cleaned_by: None,
            cleaned_at: None,
            notes: None,
        }
    }

    #[test]
    fn dashboard_counts_split_by_status() {
        let logs = vec![
            log("2026-08-01 08:00:00", "trash", DetectionStatus::Pending),
            log("2026-08-01 09:00:00", "trash", DetectionStatus::Assigned),
            log("2026-08-01 10:00:00", "trash", DetectionStatus::InProgress),
            log("2026-08-01 11:00:00", "trash", DetectionStatus::Cleaned),
            log("2026-08-01 12:00:00", "trash", DetectionStatus::Pending),
        ];
        let stats = DashboardStats::compute(&logs);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.assigned, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.cleaned, 1);
    }

    #[test]
    fn two_cleaned_of_five_is_forty_percent() {
        let logs = vec![
            log("2026-08-01 08:00:00", "trash", DetectionStatus::Cleaned),
            log("2026-08-01 09:00:00", "trash", DetectionStatus::Cleaned),
            log("2026-08-01 10:00:00", "trash", DetectionStatus::Pending),
            log("2026-08-01 11:00:00", "trash", DetectionStatus::Pending),
            log("2026-08-01 12:00:00", "trash", DetectionStatus::Assigned),
        ];
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let summary = AnalyticsSummary::compute(&logs, today);
        assert_eq!(summary.completion_rate, 40.0);
    }

    #[test]
    fn empty_input_has_zero_completion_rate() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let summary = AnalyticsSummary::compute(&[], today);
        assert_eq!(summary.completion_rate, 0.0);
        assert_eq!(summary.total_detections, 0);
    }

    #[test]
    fn trend_buckets_the_last_seven_days() {
        let logs = vec![
            log("2026-07-26 08:00:00", "trash", DetectionStatus::Pending), // 6 days back
            log("2026-08-01 09:00:00", "trash", DetectionStatus::Pending), // today
            log("2026-08-01 23:59:59", "trash", DetectionStatus::Pending), // today
            log("2026-07-25 10:00:00", "trash", DetectionStatus::Pending), // outside window
        ];
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let summary = AnalyticsSummary::compute(&logs, today);
        assert_eq!(summary.detection_trend, [1, 0, 0, 0, 0, 0, 2]);
    }

    #[test]
    fn distribution_sorts_most_frequent_first() {
        let logs = vec![
            log("2026-08-01 08:00:00", "plastic", DetectionStatus::Pending),
            log("2026-08-01 09:00:00", "garbage_bag", DetectionStatus::Pending),
            log("2026-08-01 10:00:00", "plastic", DetectionStatus::Pending),
        ];
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let summary = AnalyticsSummary::compute(&logs, today);
        assert_eq!(
            summary.waste_distribution,
            vec![("plastic".to_string(), 2), ("garbage_bag".to_string(), 1)]
        );
    }

    #[test]
    fn hotspots_keep_only_the_top_five() {
        let mut logs = Vec::new();
        for i in 0..7 {
            for _ in 0..=i {
                let mut entry = log("2026-08-01 08:00:00", "trash", DetectionStatus::Pending);
                entry.location = format!("Spot {i}");
                logs.push(entry);
            }
        }
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let summary = AnalyticsSummary::compute(&logs, today);
        assert_eq!(summary.location_hotspots.len(), 5);
        assert_eq!(summary.location_hotspots[0], ("Spot 6".to_string(), 7));
        assert_eq!(summary.location_hotspots[4], ("Spot 2".to_string(), 3));
    }

    #[test]
    fn hour_buckets_use_the_timestamp_hour() {
        let logs = vec![
            log("2026-08-01 08:10:00", "trash", DetectionStatus::Pending),
            log("2026-08-01 08:50:00", "trash", DetectionStatus::Pending),
            log("2026-08-01 23:00:00", "trash", DetectionStatus::Pending),
        ];
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let summary = AnalyticsSummary::compute(&logs, today);
        assert_eq!(summary.detections_by_hour[8], 2);
        assert_eq!(summary.detections_by_hour[23], 1);
    }

    #[test]
    fn zone_counts_bucket_missing_zones() {
        let mut anonymous = log("2026-08-01 08:00:00", "trash", DetectionStatus::Pending);
        anonymous.zone_name = None;
        let logs = vec![
            log("2026-08-01 08:00:00", "trash", DetectionStatus::Pending),
            anonymous,
        ];
        let zones = count_by_zone(&logs);
        assert!(zones.contains(&("Zone 1".to_string(), 1)));
        assert!(zones.contains(&("Unknown Zone".to_string(), 1)));
    }

    #[test]
    fn timestamps_parse_in_all_detector_formats() {
        assert!(parse_timestamp("2026-08-01 10:15:00").is_some());
        assert!(parse_timestamp("2026-08-01_10-15-00").is_some());
        assert!(parse_timestamp("2026-08-01T10:15:00Z").is_some());
        assert!(parse_timestamp("2026-08-01T10:15:00+07:00").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }
}
