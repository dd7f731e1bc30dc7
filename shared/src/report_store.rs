use serde::{Deserialize, Serialize};

use crate::CitizenReport;

/// Local storage holds at most this many reports; older entries are
/// evicted to stay under the browser's storage quota (photos are inlined
/// as data URLs).
pub const REPORT_CAP: usize = 50;

/// Newest-first list of citizen reports, serialized as a plain JSON array
/// so the stored value stays compatible with the `garbage_reports` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportStore {
    reports: Vec<CitizenReport>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front; evict from the back once over capacity.
    pub fn push(&mut self, report: CitizenReport) {
        self.reports.insert(0, report);
        self.reports.truncate(REPORT_CAP);
    }

    /// The `n` most recent reports, newest first.
    pub fn recent(&self, n: usize) -> &[CitizenReport] {
        &self.reports[..self.reports.len().min(n)]
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DetectionStatus;

    fn report(id: &str) -> CitizenReport {
        CitizenReport {
            id: id.to_string(),
            timestamp: "2026-08-01T10:00:00Z".into(),
            report_type: "plastic".into(),
            description: "bottles by the bench".into(),
            photo: "data:image/jpeg;base64,/9j/4AAQ".into(),
            latitude: None,
            longitude: None,
            custom_location: Some("east gate".into()),
            user_email: None,
            status: DetectionStatus::Pending,
        }
    }

    #[test]
    fn newest_report_comes_first() {
        let mut store = ReportStore::new();
        store.push(report("REP1"));
        store.push(report("REP2"));
        assert_eq!(store.recent(10)[0].id, "REP2");
        assert_eq!(store.recent(10)[1].id, "REP1");
    }

    #[test]
    fn capacity_is_fifty_and_oldest_is_evicted() {
        let mut store = ReportStore::new();
        for i in 0..60 {
            store.push(report(&format!("REP{i}")));
        }
        assert_eq!(store.len(), REPORT_CAP);
        // The ten oldest (REP0..REP9) are gone.
        assert_eq!(store.recent(REPORT_CAP).last().unwrap().id, "REP10");
        assert_eq!(store.recent(1)[0].id, "REP59");
    }

    #[test]
    fn recent_is_bounded_by_available_reports() {
        let mut store = ReportStore::new();
        store.push(report("REP1"));
        assert_eq!(store.recent(10).len(), 1);
    }

    #[test]
    fn stored_form_is_a_plain_array() {
        let mut store = ReportStore::new();
        store.push(report("REP1"));
        let json = serde_json::to_string(&store).unwrap();
        assert!(json.starts_with('['));
        let back: ReportStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
