use gloo_timers::callback::Interval;
use shared::stats::AnalyticsSummary;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api;
use crate::components::utils::{render_error_banner, render_loading};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Analytics view: aggregates the raw detection logs client-side and
/// refreshes them every 60 seconds.
#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let summary = use_state(AnalyticsSummary::default);
    let range = use_state(|| "7d".to_string());
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let refresh = {
        let summary = summary.clone();
        let range = range.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let summary = summary.clone();
            let range = (*range).clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                loading.set(true);
                match api::fetch_logs(Some(&range)).await {
                    Ok(logs) => {
                        let today = chrono::Utc::now().date_naive();
                        summary.set(AnalyticsSummary::compute(&logs, today));
                        error.set(None);
                    }
                    Err(err) => {
                        gloo_console::error!(format!("Error fetching analytics data: {err}"));
                        error.set(Some(err));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with(range.clone(), move |_| {
            refresh.emit(());
            let poll = Interval::new(60_000, move || refresh.emit(()));
            move || drop(poll)
        });
    }

    let on_range = {
        let range = range.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            range.set(select.value());
        })
    };
    let on_refresh = {
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <div class="analytics-page">
            <div class="page-controls">
                <div>
                    <h2>{"Analytics"}</h2>
                    <p class="subtitle">{"Analyze garbage detection and collection performance."}</p>
                </div>
                <div class="control-row">
                    <select class="filter-select" onchange={on_range}>
                        <option value="24h" selected={*range == "24h"}>{"Last 24 Hours"}</option>
                        <option value="7d" selected={*range == "7d"}>{"Last 7 Days"}</option>
                        <option value="30d" selected={*range == "30d"}>{"Last 30 Days"}</option>
                        <option value="90d" selected={*range == "90d"}>{"Last 90 Days"}</option>
                    </select>
                    <button class="refresh-btn" onclick={on_refresh}>{"Refresh Data"}</button>
                </div>
            </div>

            { render_error_banner(&error) }
            {
                if *loading && summary.total_detections == 0 {
                    render_loading("Loading analytics data...")
                } else {
                    render_summary(&summary)
                }
            }
        </div>
    }
}

fn render_summary(summary: &AnalyticsSummary) -> Html {
    html! {
        <>
            <div class="stat-grid">
                <div class="stat-card">
                    <div class="stat-label">{"Total Detections"}</div>
                    <div class="stat-value">{ summary.total_detections }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-label">{"Completion Rate"}</div>
                    <div class="stat-value">{ format!("{}%", summary.completion_rate.round() as i32) }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-label">{"Hotspots Tracked"}</div>
                    <div class="stat-value">{ summary.location_hotspots.len() }</div>
                </div>
            </div>

            <div class="breakdown-grid">
                { render_trend(summary) }
                { render_distribution(summary) }
            </div>
            <div class="breakdown-grid">
                { render_hotspots(summary) }
                { render_weekdays(summary) }
            </div>
            { render_hours(summary) }
        </>
    }
}

fn render_trend(summary: &AnalyticsSummary) -> Html {
    let max = summary.detection_trend.iter().copied().max().unwrap_or(0).max(1);

    html! {
        <div class="panel">
            <h3>{"Detection Trend"}</h3>
            <p class="subtitle">{"Garbage detections over the last 7 days"}</p>
            <div class="trend-chart">
                { for summary.detection_trend.iter().map(|&count| {
                    let height = count as f32 / max as f32 * 100.0;
                    html! {
                        <div class="trend-col">
                            <div class="trend-bar" style={format!("height: {height}%")} />
                            <div class="cell-secondary">{ count }</div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

fn render_distribution(summary: &AnalyticsSummary) -> Html {
    let total = summary.total_detections.max(1);

    html! {
        <div class="panel">
            <h3>{"Waste Type Distribution"}</h3>
            <p class="subtitle">{"Breakdown by waste category"}</p>
            <div class="bar-list">
                { for summary.waste_distribution.iter().map(|(class, count)| {
                    let percent = *count as f32 / total as f32 * 100.0;
                    html! {
                        <div class="bar-row">
                            <div class="bar-labels">
                                <span>{ class.clone() }</span>
                                <span class="cell-secondary">
                                    { format!("{count} ({}%)", percent.round() as i32) }
                                </span>
                            </div>
                            <div class="bar-track">
                                <div class="bar-fill bar-type" style={format!("width: {percent}%")} />
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

fn render_hotspots(summary: &AnalyticsSummary) -> Html {
    html! {
        <div class="panel">
            <h3>{"Location Hotspots"}</h3>
            <p class="subtitle">{"Top locations by detection count"}</p>
            <ol class="hotspot-list">
                { for summary.location_hotspots.iter().map(|(name, count)| html! {
                    <li>
                        <span>{ name.clone() }</span>
                        <span class="cell-secondary">{ format!("{count} detections") }</span>
                    </li>
                })}
            </ol>
        </div>
    }
}

fn render_weekdays(summary: &AnalyticsSummary) -> Html {
    let max = summary
        .detections_by_weekday
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    html! {
        <div class="panel">
            <h3>{"Detections by Day"}</h3>
            <div class="bar-list">
                { for summary.detections_by_weekday.iter().enumerate().map(|(day, &count)| {
                    let width = count as f32 / max as f32 * 100.0;
                    html! {
                        <div class="bar-row">
                            <div class="bar-labels">
                                <span>{ WEEKDAYS[day] }</span>
                                <span class="cell-secondary">{ count }</span>
                            </div>
                            <div class="bar-track">
                                <div class="bar-fill bar-zone" style={format!("width: {width}%")} />
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

fn render_hours(summary: &AnalyticsSummary) -> Html {
    let max = summary
        .detections_by_hour
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    html! {
        <div class="panel">
            <h3>{"Detections by Hour"}</h3>
            <div class="trend-chart hours-chart">
                { for summary.detections_by_hour.iter().enumerate().map(|(hour, &count)| {
                    let height = count as f32 / max as f32 * 100.0;
                    html! {
                        <div class="trend-col" title={format!("{hour:02}:00 - {count}")}>
                            <div class="trend-bar" style={format!("height: {height}%")} />
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
