use leptos::prelude::*;
use leptos::ev::DragEvent;
use crate::core::models::{Board, Location};
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::services::DropTarget;

#[component]
pub fn KanbanColumn(
    #[prop(into)] column_id: String,
    #[prop(into)] board: Signal<Board>,
    #[prop(into)] dragging: Signal<Option<Location>>,
    start_drag: Callback<Location>,
    drop_on: Callback<DropTarget>,
    end_drag: Callback<()>,
) -> impl IntoView {
    let items = {
        let column_id = column_id.clone();
        move || {
            board.with(|b| {
                b.column(&column_id)
                    .map(|c| c.items.clone())
                    .unwrap_or_default()
            })
        }
    };
    let count = {
        let items = items.clone();
        move || items().len()
    };

    let title = column_id.clone();

    let on_drop = {
        let target = DropTarget::ColumnBody { column: column_id.clone() };
        move |ev: DragEvent| {
            ev.prevent_default();
            drop_on.run(target.clone());
        }
    };

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h3>{title}</h3>
                <span class="task-count">{count}</span>
            </div>
            <div
                class="column-content"
                on:dragover=move |ev: DragEvent| ev.prevent_default()
                on:drop=on_drop
            >
                {move || {
                    items()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let location = Location::new(column_id.clone(), index);
                            view! {
                                <TaskCard
                                    item=item
                                    location=location
                                    dragging=dragging
                                    start_drag=start_drag
                                    drop_on=drop_on
                                    end_drag=end_drag
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
