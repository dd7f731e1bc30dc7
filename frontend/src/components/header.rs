use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-recycle"></i> {" WasteWatch"}</h1>
            <p class="subtitle">{"Monitor and manage garbage detection in real-time"}</p>
        </header>
    }
}
