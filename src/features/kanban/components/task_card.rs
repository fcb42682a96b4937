use leptos::prelude::*;
use leptos::ev::DragEvent;
use crate::core::models::{Item, Location};
use crate::features::kanban::services::DropTarget;

#[component]
pub fn TaskCard(
    item: Item,
    location: Location,
    #[prop(into)] dragging: Signal<Option<Location>>,
    start_drag: Callback<Location>,
    drop_on: Callback<DropTarget>,
    end_drag: Callback<()>,
) -> impl IntoView {
    let is_dragging = {
        let location = location.clone();
        move || dragging.get().as_ref() == Some(&location)
    };

    let on_drag_start = {
        let location = location.clone();
        let item_id = item.id.clone();
        move |ev: DragEvent| {
            // Firefox refuses to start a drag without payload
            if let Some(transfer) = ev.data_transfer() {
                if let Err(e) = transfer.set_data("text/plain", &item_id) {
                    log::debug!("failed to set drag payload for {}: {:?}", item_id, e);
                }
                transfer.set_effect_allowed("move");
            }
            start_drag.run(location.clone());
        }
    };

    let on_drop = {
        let target = DropTarget::Card {
            column: location.column.clone(),
            index: location.index,
        };
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            drop_on.run(target.clone());
        }
    };

    view! {
        <div
            class="task-card"
            class:dragging=is_dragging
            draggable="true"
            on:dragstart=on_drag_start
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=on_drop
            on:dragend=move |_| end_drag.run(())
        >
            {item.content}
        </div>
    }
}
