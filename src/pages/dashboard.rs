use leptos::prelude::*;
use crate::components::{AppBar, Panel};
use crate::core::config::DashboardConfig;
use crate::core::models::{sample, ThemeMode};
use crate::features::bar_chart::BarChart;
use crate::features::calendar::Calendar;
use crate::features::data_table::DataTable;
use crate::features::kanban::KanbanBoard;

#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_context::<DashboardConfig>().expect("dashboard config context");
    let theme = use_context::<RwSignal<ThemeMode>>().expect("theme context");

    view! {
        <div class="dashboard">
            <AppBar title=config.title.clone() theme=theme />
            <main class="dashboard-grid">
                <Panel title="Data Table">
                    <DataTable rows=sample::people() page_size=config.page_size />
                </Panel>
                <Panel title="Bar Chart">
                    <BarChart data=sample::page_stats() width=config.chart_width height=config.chart_height />
                </Panel>
                <Panel title="Calendar" wide=true>
                    <Calendar events=sample::events() height=config.calendar_height />
                </Panel>
                <Panel title="Kanban Board" wide=true>
                    <KanbanBoard />
                </Panel>
            </main>
        </div>
    }
}
