use gloo_timers::callback::Interval;
use shared::location::{ParsedLocation, parse_location};
use shared::{DetectionLog, DetectionStatus, StatusUpdateRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::dashboard_render;
use crate::components::utils::alert;
use crate::mock::staff_roster;

pub enum Msg {
    // Data refresh
    FetchLogs,
    LogsFetched(Vec<DetectionLog>),
    FetchFailed(String),

    // Table controls
    SetFilter(String),
    SetSearch(String),

    // Modals
    ShowDetails(DetectionLog),
    ShowAssign(DetectionLog),
    ShowMap(String),
    CloseModals,

    // Assignment flow
    SetStaff(String),
    SetNote(String),
    SubmitAssignment,
    MarkCleaned(String),
    StatusUpdated(DetectionStatus),
    UpdateFailed(String),
}

/// Admin dashboard: the live detection table with status management.
pub struct DashboardPage {
    pub logs: Vec<DetectionLog>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: String,
    pub search: String,
    pub selected_log: Option<DetectionLog>,
    pub assign_target: Option<DetectionLog>,
    pub selected_staff: String,
    pub assignment_note: String,
    pub map_location: Option<ParsedLocation>,
    _poll: Interval,
}

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::FetchLogs);
        let link = ctx.link().clone();
        // Refresh every 30 seconds. Overlapping polls are not deduplicated.
        let poll = Interval::new(30_000, move || link.send_message(Msg::FetchLogs));

        Self {
            logs: Vec::new(),
            loading: true,
            error: None,
            filter: "all".to_string(),
            search: String::new(),
            selected_log: None,
            assign_target: None,
            selected_staff: String::new(),
            assignment_note: String::new(),
            map_location: None,
            _poll: poll,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FetchLogs => {
                self.loading = true;
                self.error = None;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::fetch_logs(None).await {
                        Ok(logs) => link.send_message(Msg::LogsFetched(logs)),
                        Err(err) => link.send_message(Msg::FetchFailed(err)),
                    }
                });
                true
            }
            Msg::LogsFetched(logs) => {
                self.logs = logs;
                self.loading = false;
                true
            }
            Msg::FetchFailed(err) => {
                gloo_console::error!(format!("Error fetching logs: {err}"));
                self.error = Some(err);
                self.loading = false;
                true
            }

            Msg::SetFilter(filter) => {
                self.filter = filter;
                true
            }
            Msg::SetSearch(search) => {
                self.search = search;
                true
            }

            Msg::ShowDetails(log) => {
                self.selected_log = Some(log);
                true
            }
            Msg::ShowAssign(log) => {
                self.assign_target = Some(log);
                self.selected_staff = String::new();
                self.assignment_note = String::new();
                true
            }
            Msg::ShowMap(location) => match parse_location(&location) {
                Some(parsed) if parsed.coords.is_some() => {
                    self.map_location = Some(parsed);
                    true
                }
                _ => {
                    alert("No valid location coordinates found");
                    false
                }
            },
            Msg::CloseModals => {
                self.selected_log = None;
                self.assign_target = None;
                self.map_location = None;
                true
            }

            Msg::SetStaff(id) => {
                self.selected_staff = id;
                true
            }
            Msg::SetNote(note) => {
                self.assignment_note = note;
                true
            }
            Msg::SubmitAssignment => self.handle_submit_assignment(ctx),
            Msg::MarkCleaned(timestamp) => {
                self.send_status_update(
                    ctx,
                    timestamp,
                    DetectionStatus::Cleaned,
                    "Admin Dashboard".to_string(),
                    "Status updated to cleaned by admin".to_string(),
                );
                false
            }
            Msg::StatusUpdated(status) => {
                alert(&format!("Log has been marked as {status}"));
                ctx.link().send_message(Msg::FetchLogs);
                false
            }
            Msg::UpdateFailed(err) => {
                gloo_console::error!(format!("Error updating log status: {err}"));
                alert("Failed to update log status. Please try again.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="dashboard-page">
                { dashboard_render::render_controls(self, ctx) }
                { dashboard_render::render_stat_cards(self) }
                { dashboard_render::render_body(self, ctx) }
                { dashboard_render::render_breakdowns(self) }
                { dashboard_render::render_details_modal(self, ctx) }
                { dashboard_render::render_assign_modal(self, ctx) }
                { dashboard_render::render_map_modal(self, ctx) }
            </div>
        }
    }
}

impl DashboardPage {
    /// Logs surviving the status filter and the free-text search.
    pub fn filtered_logs(&self) -> Vec<&DetectionLog> {
        self.logs
            .iter()
            .filter(|log| self.filter == "all" || log.status.to_string() == self.filter)
            .filter(|log| {
                if self.search.is_empty() {
                    return true;
                }
                let query = self.search.to_lowercase();
                log.location.to_lowercase().contains(&query)
                    || log.class.to_lowercase().contains(&query)
                    || log.status.to_string().contains(&query)
            })
            .collect()
    }

    fn handle_submit_assignment(&mut self, ctx: &Context<Self>) -> bool {
        let Some(target) = self.assign_target.clone() else {
            return false;
        };
        let staff_name = staff_roster()
            .into_iter()
            .find(|member| member.id == self.selected_staff)
            .map(|member| member.name);
        let Some(staff_name) = staff_name else {
            alert("Please select a staff member");
            return false;
        };

        let notes = if self.assignment_note.is_empty() {
            "Status updated to assigned by admin".to_string()
        } else {
            self.assignment_note.clone()
        };
        self.send_status_update(
            ctx,
            target.timestamp,
            DetectionStatus::Assigned,
            staff_name,
            notes,
        );

        self.assign_target = None;
        self.selected_staff = String::new();
        self.assignment_note = String::new();
        true
    }

    fn send_status_update(
        &self,
        ctx: &Context<Self>,
        timestamp: String,
        status: DetectionStatus,
        cleaned_by: String,
        notes: String,
    ) {
        let link = ctx.link().clone();
        spawn_local(async move {
            let request = StatusUpdateRequest {
                timestamp,
                status,
                cleaned_by: Some(cleaned_by),
                notes: Some(notes),
            };
            match api::update_status(&request).await {
                Ok(()) => link.send_message(Msg::StatusUpdated(status)),
                Err(err) => link.send_message(Msg::UpdateFailed(err)),
            }
        });
    }
}
