use leptos::prelude::*;
use crate::core::models::sample;
use crate::features::kanban::components::KanbanColumn;
use crate::features::kanban::hooks::use_board;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let initial = match sample::initial_board() {
        Ok(board) => board,
        Err(e) => {
            log::error!("failed to build kanban board: {}", e);
            return view! { <p class="kanban-error">"Kanban board unavailable"</p> }.into_any();
        }
    };

    let hook = use_board(initial);
    let column_ids: Vec<String> = hook
        .board
        .with_untracked(|b| b.column_names().into_iter().map(String::from).collect());

    view! {
        <div class="kanban-board">
            {column_ids
                .into_iter()
                .map(|column_id| {
                    view! {
                        <KanbanColumn
                            column_id=column_id
                            board=hook.board
                            dragging=hook.dragging
                            start_drag=hook.start_drag
                            drop_on=hook.drop_on
                            end_drag=hook.end_drag
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
