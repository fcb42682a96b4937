use leptos::prelude::*;
use crate::core::models::{Board, DragResult, Location};
use crate::features::kanban::services::{apply_drag_result, resolve_destination, DropTarget};

pub struct BoardHook {
    pub board: ReadSignal<Board>,
    pub dragging: ReadSignal<Option<Location>>,
    pub start_drag: Callback<Location>,
    pub drop_on: Callback<DropTarget>,
    pub end_drag: Callback<()>,
}

pub fn use_board(initial: Board) -> BoardHook {
    let board = RwSignal::new(initial);
    let dragging = RwSignal::new(None::<Location>);

    let start_drag = Callback::new(move |source: Location| {
        dragging.set(Some(source));
    });

    // A drop always precedes dragend, so clearing `dragging` here keeps end_drag from cancelling
    let drop_on = Callback::new(move |target: DropTarget| {
        let Some(source) = dragging.get_untracked() else {
            return;
        };
        dragging.set(None);
        let destination = board.with_untracked(|b| resolve_destination(b, &source, &target));
        apply_drag_result(board, DragResult { source, destination });
    });

    let end_drag = Callback::new(move |_: ()| {
        if let Some(source) = dragging.get_untracked() {
            dragging.set(None);
            apply_drag_result(board, DragResult { source, destination: None });
        }
    });

    BoardHook {
        board: board.read_only(),
        dragging: dragging.read_only(),
        start_drag,
        drop_on,
        end_drag,
    }
}
