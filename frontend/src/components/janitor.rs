use gloo_timers::callback::Interval;
use shared::{CompletedTask, DetectionLog, DetectionStatus, StatusUpdateRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::components::utils::{
    alert, confidence_percent, format_datetime, render_error_banner, render_loading,
    status_badge_class, title_case,
};

/// Signed-in demo janitor; there is no real session handling.
const JANITOR_NAME: &str = "John Doe";

pub enum Msg {
    FetchTasks,
    TasksFetched(Vec<DetectionLog>),
    FetchFailed(String),
    ArchiveFetched(Vec<CompletedTask>),

    SetZone(String),
    SelectTask(String),
    SetNotes(String),

    StartTask(String),
    CompleteTask(String),
    StatusUpdated(DetectionStatus),
    UpdateFailed(String),
}

/// Janitor portal: the personal cleanup queue with zone filtering, plus
/// the completed-task archive.
pub struct JanitorPage {
    tasks: Vec<DetectionLog>,
    archive: Vec<CompletedTask>,
    zone: String,
    selected_task: Option<String>,
    cleanup_notes: String,
    loading: bool,
    error: Option<String>,
    _poll: Interval,
}

impl Component for JanitorPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::FetchTasks);
        {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_completed_tasks().await {
                    Ok(archive) => link.send_message(Msg::ArchiveFetched(archive)),
                    Err(err) => {
                        gloo_console::error!(format!("Error fetching completed tasks: {err}"));
                    }
                }
            });
        }
        let link = ctx.link().clone();
        let poll = Interval::new(30_000, move || link.send_message(Msg::FetchTasks));

        Self {
            tasks: Vec::new(),
            archive: Vec::new(),
            zone: "all".to_string(),
            selected_task: None,
            cleanup_notes: String::new(),
            loading: true,
            error: None,
            _poll: poll,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FetchTasks => {
                self.error = None;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::fetch_logs(None).await {
                        Ok(logs) => link.send_message(Msg::TasksFetched(logs)),
                        Err(err) => link.send_message(Msg::FetchFailed(err)),
                    }
                });
                false
            }
            Msg::TasksFetched(logs) => {
                self.tasks = logs
                    .into_iter()
                    .filter(DetectionLog::is_cleanup_candidate)
                    .collect();
                self.loading = false;
                true
            }
            Msg::FetchFailed(err) => {
                self.error = Some(err);
                self.loading = false;
                true
            }
            Msg::ArchiveFetched(archive) => {
                self.archive = archive;
                true
            }

            Msg::SetZone(zone) => {
                self.zone = zone;
                true
            }
            Msg::SelectTask(timestamp) => {
                if self.selected_task.as_deref() == Some(&timestamp) {
                    self.selected_task = None;
                } else {
                    self.selected_task = Some(timestamp);
                }
                self.cleanup_notes = String::new();
                true
            }
            Msg::SetNotes(notes) => {
                self.cleanup_notes = notes;
                true
            }

            Msg::StartTask(timestamp) => {
                self.send_status_update(ctx, timestamp, DetectionStatus::InProgress, None);
                false
            }
            Msg::CompleteTask(timestamp) => {
                let notes = if self.cleanup_notes.is_empty() {
                    None
                } else {
                    Some(self.cleanup_notes.clone())
                };
                self.send_status_update(ctx, timestamp, DetectionStatus::Cleaned, notes);
                false
            }
            Msg::StatusUpdated(status) => {
                if status == DetectionStatus::Cleaned {
                    alert("Task marked as cleaned. Thank you!");
                }
                self.selected_task = None;
                self.cleanup_notes = String::new();
                ctx.link().send_message(Msg::FetchTasks);
                false
            }
            Msg::UpdateFailed(err) => {
                gloo_console::error!(format!("Error updating task status: {err}"));
                alert("Failed to update task status. Please try again.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_zone = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SetZone(select.value())
        });

        let visible = self.visible_tasks();

        html! {
            <div class="janitor-page">
                <div class="page-controls">
                    <div>
                        <h2>{"Garbage Cleaner Portal"}</h2>
                        <p class="subtitle">{ format!("Signed in as {JANITOR_NAME}") }</p>
                    </div>
                    <div class="control-row">
                        <select class="filter-select" onchange={on_zone}>
                            <option value="all" selected={self.zone == "all"}>{"All Zones"}</option>
                            { for self.zones().into_iter().map(|zone| html! {
                                <option value={zone.clone()} selected={self.zone == zone}>
                                    { zone.clone() }
                                </option>
                            })}
                        </select>
                        <button class="refresh-btn" onclick={link.callback(|_| Msg::FetchTasks)}>
                            {"Refresh"}
                        </button>
                    </div>
                </div>

                { self.render_stats() }
                { render_error_banner(&self.error) }
                {
                    if self.loading && self.tasks.is_empty() {
                        render_loading("Loading your tasks...")
                    } else {
                        self.render_task_list(ctx, &visible)
                    }
                }
                { self.render_archive() }
            </div>
        }
    }
}

impl JanitorPage {
    /// Distinct zones present in the current queue.
    fn zones(&self) -> Vec<String> {
        let mut zones: Vec<String> = self
            .tasks
            .iter()
            .filter_map(|task| task.zone_name.clone())
            .collect();
        zones.sort();
        zones.dedup();
        zones
    }

    fn visible_tasks(&self) -> Vec<&DetectionLog> {
        self.tasks
            .iter()
            .filter(|task| self.zone == "all" || task.zone_name.as_deref() == Some(self.zone.as_str()))
            .collect()
    }

    fn render_stats(&self) -> Html {
        let pending = self
            .tasks
            .iter()
            .filter(|t| t.status == DetectionStatus::Pending)
            .count();
        let assigned = self
            .tasks
            .iter()
            .filter(|t| t.status == DetectionStatus::Assigned)
            .count();
        let in_progress = self
            .tasks
            .iter()
            .filter(|t| t.status == DetectionStatus::InProgress)
            .count();

        html! {
            <div class="stat-grid">
                <div class="stat-card">
                    <div class="stat-label">{"Open Tasks"}</div>
                    <div class="stat-value">{ self.tasks.len() }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-label">{"Pending"}</div>
                    <div class="stat-value stat-pending">{ pending }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-label">{"Assigned"}</div>
                    <div class="stat-value stat-assigned">{ assigned }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-label">{"In Progress"}</div>
                    <div class="stat-value stat-in-progress">{ in_progress }</div>
                </div>
            </div>
        }
    }

    fn render_task_list(&self, ctx: &Context<Self>, tasks: &[&DetectionLog]) -> Html {
        if tasks.is_empty() {
            return html! {
                <div class="panel empty-state">
                    <p>{"No tasks in this zone"}</p>
                    <p class="cell-secondary">{"New detections will appear here automatically."}</p>
                </div>
            };
        }

        html! {
            <div class="task-list">
                { for tasks.iter().map(|task| self.render_task(ctx, task)) }
            </div>
        }
    }

    fn render_task(&self, ctx: &Context<Self>, task: &DetectionLog) -> Html {
        let link = ctx.link();
        let timestamp = task.timestamp.clone();
        let expanded = self.selected_task.as_deref() == Some(&task.timestamp);

        let toggle = {
            let timestamp = timestamp.clone();
            link.callback(move |_| Msg::SelectTask(timestamp.clone()))
        };
        let start = {
            let timestamp = timestamp.clone();
            link.callback(move |_| Msg::StartTask(timestamp.clone()))
        };
        let complete = {
            let timestamp = timestamp.clone();
            link.callback(move |_| Msg::CompleteTask(timestamp.clone()))
        };
        let on_notes = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::SetNotes(area.value())
        });

        html! {
            <div class={classes!("panel", "task-card", expanded.then_some("selected"))}>
                <div class="task-card-header" onclick={toggle}>
                    {
                        if let Some(path) = &task.image_path {
                            html! { <img class="thumbnail" src={format!("/view_image/{path}")} alt={format!("Detected {}", task.class)} /> }
                        } else {
                            html! { <div class="thumbnail thumbnail-empty">{"No image"}</div> }
                        }
                    }
                    <div class="task-card-body">
                        <div class="cell-primary">{ &task.class }</div>
                        <div class="cell-secondary">
                            { format!("{}% confidence", confidence_percent(task.confidence)) }
                        </div>
                        <div class="cell-secondary">{ &task.location }</div>
                        <div class="cell-secondary">{ format_datetime(&task.timestamp) }</div>
                    </div>
                    <span class={status_badge_class(task.status)}>
                        { title_case(&task.status.to_string()) }
                    </span>
                </div>
                {
                    if expanded {
                        html! {
                            <div class="task-card-actions">
                                <textarea
                                    placeholder="Cleanup notes (optional)"
                                    value={self.cleanup_notes.clone()}
                                    oninput={on_notes}
                                />
                                <div class="action-row">
                                    {
                                        if task.status != DetectionStatus::InProgress {
                                            html! {
                                                <button class="secondary-btn" onclick={start}>
                                                    {"Start Cleanup"}
                                                </button>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <button class="primary-btn" onclick={complete}>
                                        {"Mark Cleaned"}
                                    </button>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }

    fn render_archive(&self) -> Html {
        if self.archive.is_empty() {
            return html! {};
        }

        html! {
            <div class="panel">
                <h3>{"Recently Completed"}</h3>
                <div class="archive-list">
                    { for self.archive.iter().map(|task| html! {
                        <div class="archive-row" key={task.id.clone()}>
                            <div>
                                <div class="cell-primary">{ &task.title }</div>
                                <div class="cell-secondary">{ &task.location }</div>
                            </div>
                            <div class="archive-meta">
                                <span class="cell-secondary">{ &task.assigned_to }</span>
                                <span class="cell-secondary">{ format_datetime(&task.completed_at) }</span>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        }
    }

    fn send_status_update(
        &self,
        ctx: &Context<Self>,
        timestamp: String,
        status: DetectionStatus,
        notes: Option<String>,
    ) {
        let link = ctx.link().clone();
        spawn_local(async move {
            let request = StatusUpdateRequest {
                timestamp,
                status,
                cleaned_by: Some(JANITOR_NAME.to_string()),
                notes,
            };
            match api::update_status(&request).await {
                Ok(()) => link.send_message(Msg::StatusUpdated(status)),
                Err(err) => link.send_message(Msg::UpdateFailed(err)),
            }
        });
    }
}
