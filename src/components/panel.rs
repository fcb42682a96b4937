use leptos::prelude::*;

/// Titled card wrapping one dashboard widget. `wide` spans the full row.
#[component]
pub fn Panel(
    #[prop(into)] title: String,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="panel" class:wide=wide>
            <h2 class="panel-title">{title}</h2>
            {children()}
        </section>
    }
}
