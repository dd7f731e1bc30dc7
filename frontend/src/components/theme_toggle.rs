use yew::prelude::*;

/// Light/dark switch. The theme lives on the body element as a class so
/// the stylesheet can restyle everything at once.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(|| "light".to_string());

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
            if *theme == "light" {
                theme.set("dark".to_string());
                body.class_list().add_1("dark-mode").unwrap();
            } else {
                theme.set("light".to_string());
                body.class_list().remove_1("dark-mode").unwrap();
            }
        })
    };

    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            {onclick}
            title={ if *theme == "light" { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
        >
            { if *theme == "light" {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/2600.svg" alt="Sun Icon" class="toggle-icon" /> }
            } else {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f319.svg" alt="Moon Icon" class="toggle-icon" /> }
            }}
        </button>
    }
}
