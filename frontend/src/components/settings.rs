use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const STORAGE_KEY: &str = "dashboard_settings";

/// Preferences persisted per browser. Nothing here reaches the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub auto_refresh: bool,
    pub desktop_notifications: bool,
    pub email_alerts: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            desktop_notifications: true,
            email_alerts: false,
        }
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let settings =
        use_state(|| LocalStorage::get::<DashboardSettings>(STORAGE_KEY).unwrap_or_default());
    let saved = use_state(|| false);

    let toggle = |update: fn(&mut DashboardSettings, bool)| {
        let settings = settings.clone();
        let saved = saved.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*settings).clone();
            update(&mut updated, input.checked());
            settings.set(updated);
            saved.set(false);
        })
    };

    let on_auto_refresh = toggle(|s, value| s.auto_refresh = value);
    let on_notifications = toggle(|s, value| s.desktop_notifications = value);
    let on_email_alerts = toggle(|s, value| s.email_alerts = value);

    let on_save = {
        let settings = settings.clone();
        let saved = saved.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = LocalStorage::set(STORAGE_KEY, &*settings) {
                gloo_console::error!(format!("Failed to save settings: {err:?}"));
                return;
            }
            saved.set(true);
        })
    };

    let row = |id: &'static str, label: &str, checked: bool, onchange: Callback<Event>| {
        html! {
            <div class="settings-row">
                <label for={id}>{ label.to_string() }</label>
                <input {id} type="checkbox" {checked} {onchange} />
            </div>
        }
    };

    html! {
        <div class="settings-page">
            <div class="page-controls">
                <div>
                    <h2>{"Settings"}</h2>
                    <p class="subtitle">{"Preferences are stored in this browser only."}</p>
                </div>
            </div>

            <div class="panel">
                { row("auto-refresh", "Auto-refresh dashboards", settings.auto_refresh, on_auto_refresh) }
                { row("notifications", "Desktop notifications", settings.desktop_notifications, on_notifications) }
                { row("email-alerts", "Email alerts", settings.email_alerts, on_email_alerts) }
                <div class="action-row">
                    <button class="primary-btn" onclick={on_save}>{"Save Settings"}</button>
                    {
                        if *saved {
                            html! { <span class="save-confirmation">{"Saved."}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}
