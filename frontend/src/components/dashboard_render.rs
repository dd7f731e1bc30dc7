use shared::stats::{DashboardStats, count_by_class, count_by_zone};
use shared::{DetectionLog, DetectionStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::dashboard::{DashboardPage, Msg};
use crate::components::utils::{
    confidence_percent, format_date, format_datetime, format_time, render_error_banner,
    render_loading, status_badge_class, title_case,
};
use crate::mock::staff_roster;

const IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/80?text=No+Image";

pub fn render_controls(page: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let link = ctx.link();

    let on_search = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearch(input.value())
    });
    let on_filter = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetFilter(select.value())
    });

    html! {
        <div class="page-controls">
            <div>
                <h2>{"Dashboard"}</h2>
                <p class="subtitle">{"Monitor and manage garbage detection in real-time."}</p>
            </div>
            <div class="control-row">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search logs..."
                    value={page.search.clone()}
                    oninput={on_search}
                />
                <select class="filter-select" onchange={on_filter}>
                    <option value="all" selected={page.filter == "all"}>{"All Status"}</option>
                    <option value="pending" selected={page.filter == "pending"}>{"Pending"}</option>
                    <option value="assigned" selected={page.filter == "assigned"}>{"Assigned"}</option>
                    <option value="in-progress" selected={page.filter == "in-progress"}>{"In Progress"}</option>
                    <option value="cleaned" selected={page.filter == "cleaned"}>{"Cleaned"}</option>
                </select>
                <button class="refresh-btn" onclick={link.callback(|_| Msg::FetchLogs)}>
                    {"Refresh"}
                </button>
            </div>
        </div>
    }
}

pub fn render_stat_cards(page: &DashboardPage) -> Html {
    let stats = DashboardStats::compute(&page.logs);
    let card = |label: &str, value: usize, class: &'static str| {
        html! {
            <div class="stat-card">
                <div class="stat-label">{ label.to_string() }</div>
                <div class={classes!("stat-value", class)}>{ value }</div>
            </div>
        }
    };

    html! {
        <div class="stat-grid">
            { card("Total Detections", stats.total, "stat-total") }
            { card("Pending Tasks", stats.pending, "stat-pending") }
            { card("Assigned Tasks", stats.assigned, "stat-assigned") }
            { card("Cleaned Tasks", stats.cleaned, "stat-cleaned") }
        </div>
    }
}

pub fn render_body(page: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    if page.loading && page.logs.is_empty() {
        return render_loading("Loading data...");
    }
    if page.error.is_some() {
        return render_error_banner(&page.error);
    }
    render_log_table(page, ctx)
}

fn render_log_table(page: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let filtered = page.filtered_logs();

    html! {
        <div class="panel">
            <h2>{"Garbage Detection Logs"}</h2>
            <div class="table-scroll">
                <table class="log-table">
                    <thead>
                        <tr>
                            <th>{"Image"}</th>
                            <th>{"Type"}</th>
                            <th>{"Location"}</th>
                            <th>{"Time"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if filtered.is_empty() {
                                html! {
                                    <tr>
                                        <td colspan="6" class="empty-row">
                                            {"No detection logs found matching your criteria"}
                                        </td>
                                    </tr>
                                }
                            } else {
                                filtered.iter().map(|log| render_log_row(ctx, log)).collect::<Html>()
                            }
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn render_log_row(ctx: &Context<DashboardPage>, log: &DetectionLog) -> Html {
    let link = ctx.link();
    let timestamp = log.timestamp.clone();

    let details = {
        let log = (*log).clone();
        link.callback(move |_| Msg::ShowDetails(log.clone()))
    };
    let assign = {
        let log = (*log).clone();
        link.callback(move |_| Msg::ShowAssign(log.clone()))
    };
    let mark_cleaned = link.callback(move |_| Msg::MarkCleaned(timestamp.clone()));

    html! {
        <tr key={log.timestamp.clone()}>
            <td>{ render_thumbnail(log) }</td>
            <td>
                <div class="cell-primary">{ &log.class }</div>
                <div class="cell-secondary">
                    { format!("{}% confidence", confidence_percent(log.confidence)) }
                </div>
            </td>
            <td>
                <div class="cell-primary">{ &log.location }</div>
                <div class="cell-secondary">
                    { log.zone_name.clone().unwrap_or_else(|| "Unknown zone".to_string()) }
                    { " / " }
                    { log.camera_id.clone().unwrap_or_else(|| "Unknown camera".to_string()) }
                </div>
            </td>
            <td>
                <div class="cell-primary">{ format_time(&log.timestamp) }</div>
                <div class="cell-secondary">{ format_date(&log.timestamp) }</div>
            </td>
            <td>
                <span class={status_badge_class(log.status)}>
                    { title_case(&log.status.to_string()) }
                </span>
                {
                    if let Some(cleaned_by) = &log.cleaned_by {
                        html! { <div class="cell-secondary">{ format!("by {cleaned_by}") }</div> }
                    } else {
                        html! {}
                    }
                }
            </td>
            <td>
                <div class="action-row">
                    <button class="link-btn" onclick={details}>{"View"}</button>
                    {
                        if log.status == DetectionStatus::Pending {
                            html! { <button class="link-btn action-assign" onclick={assign}>{"Assign"}</button> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if log.status != DetectionStatus::Cleaned {
                            html! { <button class="link-btn action-clean" onclick={mark_cleaned}>{"Mark Cleaned"}</button> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </td>
        </tr>
    }
}

fn render_thumbnail(log: &DetectionLog) -> Html {
    let onerror = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<web_sys::HtmlImageElement>() {
            img.set_src(IMAGE_PLACEHOLDER);
        }
    });

    match &log.image_path {
        Some(path) => html! {
            <img
                class="thumbnail"
                src={format!("/view_image/{path}")}
                alt={format!("Detected {}", log.class)}
                {onerror}
            />
        },
        None => html! { <div class="thumbnail thumbnail-empty">{"No image"}</div> },
    }
}

pub fn render_breakdowns(page: &DashboardPage) -> Html {
    if page.logs.is_empty() {
        return html! {};
    }
    let total = page.logs.len();

    let bar_list = |title: &str, rows: Vec<(String, usize)>, bar_class: &'static str| {
        html! {
            <div class="panel">
                <h3>{ title.to_string() }</h3>
                <div class="bar-list">
                    { for rows.into_iter().map(|(label, count)| {
                        let width = count as f32 / total as f32 * 100.0;
                        html! {
                            <div class="bar-row">
                                <div class="bar-labels">
                                    <span>{ label }</span>
                                    <span class="cell-secondary">{ count }</span>
                                </div>
                                <div class="bar-track">
                                    <div class={classes!("bar-fill", bar_class)}
                                        style={format!("width: {width}%")} />
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        }
    };

    html! {
        <div class="breakdown-grid">
            { bar_list("Detections by Type", count_by_class(&page.logs), "bar-type") }
            { bar_list("Detections by Zone", count_by_zone(&page.logs), "bar-zone") }
        </div>
    }
}

pub fn render_details_modal(page: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let Some(log) = &page.selected_log else {
        return html! {};
    };
    let link = ctx.link();
    let close = link.callback(|_| Msg::CloseModals);
    let show_map = {
        let location = log.location.clone();
        link.callback(move |_| Msg::ShowMap(location.clone()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{"Detection Details"}</h2>
                <p class="subtitle">{"Complete information about the selected detection"}</p>
                <div class="detail-grid">
                    <div class="detail-image">{ render_thumbnail(log) }</div>
                    <div>
                        <h3 class="cell-secondary">{"Detection Type"}</h3>
                        <p class="cell-primary">{ &log.class }</p>
                        <h3 class="cell-secondary">{"Confidence"}</h3>
                        <p class="cell-primary">{ format!("{}%", confidence_percent(log.confidence)) }</p>
                        <h3 class="cell-secondary">{"Status"}</h3>
                        <span class={status_badge_class(log.status)}>
                            { title_case(&log.status.to_string()) }
                        </span>
                    </div>
                </div>
                <div class="detail-grid">
                    <div>
                        <h3 class="cell-secondary">{"Location"}</h3>
                        <p>{ &log.location }</p>
                        <button class="link-btn" onclick={show_map}>{"View on map"}</button>
                    </div>
                    <div>
                        <h3 class="cell-secondary">{"Date & Time"}</h3>
                        <p>{ format_datetime(&log.timestamp) }</p>
                    </div>
                    <div>
                        <h3 class="cell-secondary">{"Zone"}</h3>
                        <p>{ log.zone_name.clone().unwrap_or_else(|| "Unknown zone".to_string()) }</p>
                    </div>
                    <div>
                        <h3 class="cell-secondary">{"Camera ID"}</h3>
                        <p>{ log.camera_id.clone().unwrap_or_else(|| "Unknown camera".to_string()) }</p>
                    </div>
                </div>
                {
                    if let Some(cleaned_by) = &log.cleaned_by {
                        let heading = if log.status == DetectionStatus::Cleaned {
                            "Cleaned by"
                        } else {
                            "Assigned to"
                        };
                        html! {
                            <div>
                                <h3 class="cell-secondary">{ heading }</h3>
                                <p>{ cleaned_by }</p>
                                {
                                    if let Some(cleaned_at) = &log.cleaned_at {
                                        html! { <p class="cell-secondary">{ format_datetime(cleaned_at) }</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(notes) = &log.notes {
                        html! {
                            <div>
                                <h3 class="cell-secondary">{"Notes"}</h3>
                                <p class="notes-box">{ notes }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="modal-actions">
                    <button class="primary-btn" onclick={close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}

pub fn render_assign_modal(page: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let Some(log) = &page.assign_target else {
        return html! {};
    };
    let link = ctx.link();

    let on_staff = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetStaff(select.value())
    });
    let on_note = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetNote(area.value())
    });

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{"Assign Task"}</h2>
                <p class="subtitle">{"Assign this task to a staff member for cleaning"}</p>
                <div class="assign-summary">
                    { render_thumbnail(log) }
                    <div>
                        <p class="cell-primary">{ &log.class }</p>
                        <p class="cell-secondary">{ &log.location }</p>
                        <p class="cell-secondary">{ format_datetime(&log.timestamp) }</p>
                    </div>
                </div>
                <label for="staff">{"Assign to Staff Member"}</label>
                <select id="staff" onchange={on_staff}>
                    <option value="" selected={page.selected_staff.is_empty()}>
                        {"Select staff member"}
                    </option>
                    { for staff_roster().into_iter().map(|member| {
                        let label = if member.available {
                            format!("{} - {}", member.name, member.role)
                        } else {
                            format!("{} - {} (Unavailable)", member.name, member.role)
                        };
                        html! {
                            <option
                                value={member.id.clone()}
                                disabled={!member.available}
                                selected={page.selected_staff == member.id}
                            >
                                { label }
                            </option>
                        }
                    })}
                </select>
                <label for="notes">{"Assignment Notes"}</label>
                <textarea
                    id="notes"
                    placeholder="Add notes or instructions for this assignment"
                    value={page.assignment_note.clone()}
                    oninput={on_note}
                />
                <div class="modal-actions">
                    <button class="secondary-btn" onclick={link.callback(|_| Msg::CloseModals)}>
                        {"Cancel"}
                    </button>
                    <button class="primary-btn" onclick={link.callback(|_| Msg::SubmitAssignment)}>
                        {"Assign Task"}
                    </button>
                </div>
            </div>
        </div>
    }
}

pub fn render_map_modal(page: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let Some(location) = &page.map_location else {
        return html! {};
    };
    let close = ctx.link().callback(|_| Msg::CloseModals);

    let map = match location.coords {
        Some((lat, lng)) => {
            let src = format!(
                "https://www.openstreetmap.org/export/embed.html?bbox={:.4},{:.4},{:.4},{:.4}&layer=mapnik&marker={lat},{lng}",
                lng - 0.01,
                lat - 0.01,
                lng + 0.01,
                lat + 0.01,
            );
            html! { <iframe title="Location Map" class="map-frame" {src} /> }
        }
        None => html! {
            <div class="map-empty">
                <p>{"No coordinates available for this location."}</p>
            </div>
        },
    };

    html! {
        <div class="modal-overlay">
            <div class="modal modal-wide">
                <h2>{ format!("Location: {}", location.name) }</h2>
                { map }
                <div class="modal-actions">
                    <button class="primary-btn" onclick={close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
