use leptos::prelude::*;
use crate::core::config::DashboardConfig;
use crate::core::models::ThemeMode;
use crate::core::services::apply_theme;
use crate::pages::Dashboard;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::load();
    let theme = RwSignal::new(config.initial_theme);

    Effect::new(move |_| apply_theme(theme.get()));

    provide_context(config);
    provide_context(theme);

    view! {
        <div class="app" class:dark=move || theme.get() == ThemeMode::Dark>
            <Dashboard />
        </div>
    }
}
