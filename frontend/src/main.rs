mod api;
mod components;
mod mock;

use yew::prelude::*;
use yew_router::prelude::*;

use components::analytics::AnalyticsPage;
use components::dashboard::DashboardPage;
use components::header::render_header;
use components::janitor::JanitorPage;
use components::login::LoginPage;
use components::report::ReportPage;
use components::settings::SettingsPage;
use components::tasks::TasksPage;
use components::theme_toggle::ThemeToggle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/analytics")]
    Analytics,
    #[at("/dashboard/tasks")]
    Tasks,
    #[at("/dashboard/settings")]
    Settings,
    #[at("/janitor")]
    Janitor,
    #[at("/report")]
    Report,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Analytics => html! { <AnalyticsPage /> },
        Route::Tasks => html! { <TasksPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::Janitor => html! { <JanitorPage /> },
        Route::Report => html! { <ReportPage /> },
        Route::NotFound => html! { <p class="not-found">{"Page not found"}</p> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="container">
                { render_header() }
                <div class="top-right">
                    <ThemeToggle />
                </div>
                <nav class="main-nav">
                    <Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                    <Link<Route> to={Route::Analytics}>{"Analytics"}</Link<Route>>
                    <Link<Route> to={Route::Tasks}>{"Tasks"}</Link<Route>>
                    <Link<Route> to={Route::Janitor}>{"Janitor Portal"}</Link<Route>>
                    <Link<Route> to={Route::Report}>{"Report Waste"}</Link<Route>>
                    <Link<Route> to={Route::Settings}>{"Settings"}</Link<Route>>
                </nav>

                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>

                <footer class="app-footer">
                    <p>{"WasteWatch | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
