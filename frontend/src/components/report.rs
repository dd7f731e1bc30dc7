use gloo_storage::{LocalStorage, Storage};
use shared::CitizenReport;
use shared::report_store::ReportStore;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::utils::{alert, format_datetime, generate_report_id, title_case};

/// Local storage key shared with nothing else; reports never leave the
/// browser.
const STORAGE_KEY: &str = "garbage_reports";

/// Public reporting page: citizens submit waste sightings with a photo
/// and a location; submissions persist client-side only.
#[function_component(ReportPage)]
pub fn report_page() -> Html {
    let store = use_state(|| LocalStorage::get::<ReportStore>(STORAGE_KEY).unwrap_or_default());
    let report_type = use_state(String::new);
    let description = use_state(String::new);
    let custom_location = use_state(String::new);
    let user_email = use_state(String::new);
    let photo = use_state(|| None::<String>);
    let latitude = use_state(|| None::<String>);
    let longitude = use_state(|| None::<String>);
    let location_text = use_state(|| "Location: Not detected yet".to_string());
    let success_id = use_state(|| None::<String>);

    let on_type = {
        let report_type = report_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            report_type.set(select.value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(area.value());
        })
    };
    let on_custom_location = {
        let custom_location = custom_location.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            custom_location.set(input.value());
        })
    };
    let on_email = {
        let user_email = user_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            user_email.set(input.value());
        })
    };

    let on_photo = {
        let photo = photo.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.item(0));
            input.set_value("");
            let Some(file) = file else {
                return;
            };
            if !file.type_().starts_with("image/") {
                alert(&format!("Skipped non-image file: {}", file.name()));
                return;
            }
            let photo = photo.clone();
            let file = gloo_file::File::from(file);
            spawn_local(async move {
                match gloo_file::futures::read_as_data_url(&file).await {
                    Ok(data_url) => photo.set(Some(data_url)),
                    Err(err) => {
                        gloo_console::error!(format!("Failed to read photo: {err:?}"));
                        alert("Failed to read the selected photo.");
                    }
                }
            });
        })
    };

    let on_get_location = {
        let latitude = latitude.clone();
        let longitude = longitude.clone();
        let location_text = location_text.clone();
        Callback::from(move |_: MouseEvent| {
            let geolocation = web_sys::window().and_then(|w| w.navigator().geolocation().ok());
            let Some(geolocation) = geolocation else {
                location_text.set("Geolocation is not supported by your browser.".to_string());
                return;
            };
            location_text.set("Getting location...".to_string());

            let success = {
                let latitude = latitude.clone();
                let longitude = longitude.clone();
                let location_text = location_text.clone();
                Closure::once(move |position: web_sys::GeolocationPosition| {
                    let coords = position.coords();
                    let lat = coords.latitude();
                    let lng = coords.longitude();
                    latitude.set(Some(format!("{lat:.6}")));
                    longitude.set(Some(format!("{lng:.6}")));
                    location_text.set(format!("Location: {lat:.6}, {lng:.6}"));
                })
            };
            let failure = {
                let location_text = location_text.clone();
                Closure::once(move |_err: web_sys::GeolocationPositionError| {
                    location_text
                        .set("Error getting location. Please try again or enter manually.".to_string());
                })
            };

            let options = web_sys::PositionOptions::new();
            options.set_enable_high_accuracy(true);
            options.set_timeout(10_000);
            options.set_maximum_age(0);
            if geolocation
                .get_current_position_with_error_callback_and_options(
                    success.as_ref().unchecked_ref(),
                    Some(failure.as_ref().unchecked_ref()),
                    &options,
                )
                .is_err()
            {
                location_text.set("Error getting location. Please try again or enter manually.".to_string());
            }
            success.forget();
            failure.forget();
        })
    };

    let on_submit = {
        let store = store.clone();
        let report_type = report_type.clone();
        let description = description.clone();
        let custom_location = custom_location.clone();
        let user_email = user_email.clone();
        let photo = photo.clone();
        let latitude = latitude.clone();
        let longitude = longitude.clone();
        let location_text = location_text.clone();
        let success_id = success_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if report_type.is_empty() || description.is_empty() {
                alert("Please fill in all required fields");
                return;
            }
            let Some(photo_data) = (*photo).clone() else {
                alert("Please upload a photo");
                return;
            };
            let has_geo = latitude.is_some() && longitude.is_some();
            let has_custom = !custom_location.trim().is_empty();
            if !has_geo && !has_custom {
                alert("Please provide a location (either automatically or manually)");
                return;
            }

            let report = CitizenReport {
                id: generate_report_id(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                report_type: (*report_type).clone(),
                description: (*description).clone(),
                photo: photo_data,
                latitude: (*latitude).clone(),
                longitude: (*longitude).clone(),
                custom_location: has_custom.then(|| (*custom_location).clone()),
                user_email: (!user_email.is_empty()).then(|| (*user_email).clone()),
                status: Default::default(),
            };

            let mut updated = (*store).clone();
            updated.push(report.clone());
            if let Err(err) = LocalStorage::set(STORAGE_KEY, &updated) {
                gloo_console::error!(format!("Failed to persist report: {err:?}"));
            }
            store.set(updated);
            success_id.set(Some(report.id));

            report_type.set(String::new());
            description.set(String::new());
            custom_location.set(String::new());
            user_email.set(String::new());
            photo.set(None);
            latitude.set(None);
            longitude.set(None);
            location_text.set("Location: Not detected yet".to_string());
        })
    };

    let close_modal = {
        let success_id = success_id.clone();
        Callback::from(move |_: MouseEvent| success_id.set(None))
    };

    html! {
        <div class="report-page">
            <div class="page-controls">
                <div>
                    <h2>{"Report Waste"}</h2>
                    <p class="subtitle">{"Spotted garbage? Let the cleanup crew know."}</p>
                </div>
            </div>

            <form class="panel report-form" onsubmit={on_submit}>
                <label for="report-type">{"Waste Type *"}</label>
                <select id="report-type" onchange={on_type}>
                    <option value="" selected={report_type.is_empty()}>{"Select a type"}</option>
                    <option value="plastic" selected={*report_type == "plastic"}>{"Plastic"}</option>
                    <option value="paper" selected={*report_type == "paper"}>{"Paper"}</option>
                    <option value="glass" selected={*report_type == "glass"}>{"Glass"}</option>
                    <option value="organic" selected={*report_type == "organic"}>{"Organic"}</option>
                    <option value="hazardous" selected={*report_type == "hazardous"}>{"Hazardous"}</option>
                    <option value="mixed" selected={*report_type == "mixed"}>{"Mixed"}</option>
                </select>

                <label for="description">{"Description *"}</label>
                <textarea
                    id="description"
                    placeholder="Describe what you found and how much of it there is"
                    value={(*description).clone()}
                    oninput={on_description}
                />

                <label for="photo-upload">{"Photo *"}</label>
                <input id="photo-upload" type="file" accept="image/*" onchange={on_photo} />
                {
                    if let Some(data_url) = &*photo {
                        html! { <img class="photo-preview" src={data_url.clone()} alt="Report photo preview" /> }
                    } else {
                        html! {}
                    }
                }

                <label>{"Location"}</label>
                <div class="control-row">
                    <button type="button" class="secondary-btn" onclick={on_get_location}>
                        {"Use My Location"}
                    </button>
                    <span class="cell-secondary">{ (*location_text).clone() }</span>
                </div>
                <input
                    type="text"
                    placeholder="...or describe the location manually"
                    value={(*custom_location).clone()}
                    oninput={on_custom_location}
                />

                <label for="email">{"Email (optional)"}</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    value={(*user_email).clone()}
                    oninput={on_email}
                />

                <button type="submit" class="primary-btn">{"Submit Report"}</button>
            </form>

            { render_recent_reports(&store) }

            {
                if let Some(id) = &*success_id {
                    html! {
                        <div class="modal-overlay">
                            <div class="modal">
                                <h2>{"Report Submitted"}</h2>
                                <p>{"Thank you for helping keep the area clean."}</p>
                                <p>{"Your report ID: "}<strong>{ id.clone() }</strong></p>
                                <div class="modal-actions">
                                    <button class="primary-btn" onclick={close_modal}>{"Close"}</button>
                                </div>
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

fn render_recent_reports(store: &ReportStore) -> Html {
    html! {
        <div class="panel">
            <h3>{"Recent Reports"}</h3>
            {
                if store.is_empty() {
                    html! { <p class="empty-state">{"No reports yet"}</p> }
                } else {
                    html! {
                        <div class="report-list">
                            { for store.recent(10).iter().map(|report| {
                                let location = report
                                    .custom_location
                                    .clone()
                                    .or_else(|| match (&report.latitude, &report.longitude) {
                                        (Some(lat), Some(lng)) => Some(format!("{lat}, {lng}")),
                                        _ => None,
                                    })
                                    .unwrap_or_else(|| "Unknown location".to_string());
                                html! {
                                    <div class="report-item" key={report.id.clone()}>
                                        <img class="thumbnail" src={report.photo.clone()}
                                            alt={title_case(&report.report_type)} />
                                        <div>
                                            <div class="cell-primary">{ title_case(&report.report_type) }</div>
                                            <div class="cell-secondary">
                                                { format_datetime(&report.timestamp) }{ " \u{2022} " }{ location }
                                            </div>
                                            <div class="report-description">{ &report.description }</div>
                                        </div>
                                    </div>
                                }
                            })}
                        </div>
                    }
                }
            }
        </div>
    }
}
