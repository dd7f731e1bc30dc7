use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Demo sign-in: hard-coded credentials route to the matching surface.
/// There is no real authentication anywhere in this product.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator().expect("router context");

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match (username.as_str(), password.as_str()) {
                ("admin", "admin") => navigator.push(&Route::Dashboard),
                ("janitor", "janitor") => navigator.push(&Route::Janitor),
                _ => error.set(Some("Invalid credentials. Try admin/admin or janitor/janitor.".to_string())),
            }
        })
    };

    html! {
        <div class="login-page">
            <form class="panel login-form" onsubmit={on_submit}>
                <h2>{"Sign In"}</h2>
                <p class="subtitle">{"Admins go to the dashboard, janitors to the portal."}</p>
                {
                    if let Some(message) = &*error {
                        html! {
                            <div class="error-message">
                                <p>{ message }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <label for="username">{"Username"}</label>
                <input
                    id="username"
                    type="text"
                    value={(*username).clone()}
                    oninput={on_username}
                />
                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password}
                />
                <button type="submit" class="primary-btn">{"Sign In"}</button>
            </form>
        </div>
    }
}
