use leptos::prelude::*;
use crate::core::models::ThemeMode;

#[component]
pub fn AppBar(
    #[prop(into)] title: String,
    theme: RwSignal<ThemeMode>,
) -> impl IntoView {
    view! {
        <header class="app-bar">
            <h1 class="app-bar-title">{title}</h1>
            <button
                class="app-bar-btn"
                title=move || format!("Switch to {} theme", theme.get().toggled().as_str())
                on:click=move |_| theme.update(|mode| *mode = mode.toggled())
            >"Toggle Theme"</button>
        </header>
    }
}
