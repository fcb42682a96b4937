use leptos::prelude::*;
use crate::core::models::{Board, DragResult, Location, MoveOutcome};

/// Where a dragged card was released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// On top of the card currently at `index`.
    Card { column: String, index: usize },
    /// On the column background, below every card.
    ColumnBody { column: String },
}

impl DropTarget {
    pub fn column(&self) -> &str {
        match self {
            DropTarget::Card { column, .. } | DropTarget::ColumnBody { column } => column,
        }
    }
}

// Convert a drop target into the post-removal destination index the board expects.
// Dropping on card k lands the item at position k; dropping on the body appends.
pub fn resolve_destination(board: &Board, source: &Location, target: &DropTarget) -> Option<Location> {
    let column = board.column(target.column())?;
    let remaining = if column.id == source.column {
        column.len().saturating_sub(1)
    } else {
        column.len()
    };
    let index = match target {
        DropTarget::Card { index, .. } => (*index).min(remaining),
        DropTarget::ColumnBody { .. } => remaining,
    };
    Some(Location::new(column.id.clone(), index))
}

// Apply the end of a drag to the board signal; rejected moves are logged and leave it untouched
pub fn apply_drag_result(board: RwSignal<Board>, result: DragResult) {
    if result.destination.is_none() {
        log::debug!("drag released outside the board");
        return;
    }

    let next = board.with_untracked(|current| {
        let mut next = current.clone();
        next.apply_drag(&result).map(|outcome| (outcome, next))
    });

    match next {
        Ok((MoveOutcome::Moved, next)) => board.set(next),
        Ok((MoveOutcome::Cancelled, _)) => {}
        Err(e) => log::warn!("rejected board move: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Column, Item};

    fn board() -> Board {
        Board::new(vec![
            Column::new("todo", vec![Item::new("a", "A"), Item::new("b", "B"), Item::new("c", "C")]),
            Column::new("done", vec![Item::new("d", "D")]),
        ])
        .unwrap()
    }

    #[test]
    fn drop_on_card_in_other_column_inserts_before_it() {
        let target = DropTarget::Card { column: "done".into(), index: 0 };
        let dest = resolve_destination(&board(), &Location::new("todo", 1), &target);
        assert_eq!(dest, Some(Location::new("done", 0)));
    }

    #[test]
    fn drop_on_column_body_appends() {
        let target = DropTarget::ColumnBody { column: "done".into() };
        assert_eq!(
            resolve_destination(&board(), &Location::new("todo", 0), &target),
            Some(Location::new("done", 1))
        );

        let same = DropTarget::ColumnBody { column: "todo".into() };
        assert_eq!(
            resolve_destination(&board(), &Location::new("todo", 0), &same),
            Some(Location::new("todo", 2))
        );
    }

    #[test]
    fn drop_on_card_in_same_column_takes_its_slot() {
        let b = board();
        let target = DropTarget::Card { column: "todo".into(), index: 2 };
        let dest = resolve_destination(&b, &Location::new("todo", 0), &target).unwrap();
        let next = b.moved(&Location::new("todo", 0), &dest).unwrap();
        let ids: Vec<_> = next.column("todo").unwrap().items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn drop_on_unknown_column_has_no_destination() {
        let target = DropTarget::ColumnBody { column: "archive".into() };
        assert_eq!(resolve_destination(&board(), &Location::new("todo", 0), &target), None);
    }

    #[test]
    fn apply_drag_result_updates_signal() {
        let signal = RwSignal::new(board());
        apply_drag_result(
            signal,
            DragResult {
                source: Location::new("todo", 0),
                destination: Some(Location::new("done", 0)),
            },
        );
        assert_eq!(signal.with_untracked(|b| b.locate("a")), Some(Location::new("done", 0)));
    }

    #[test]
    fn rejected_or_cancelled_drags_leave_signal_unchanged() {
        let signal = RwSignal::new(board());
        let before = signal.get_untracked();
        apply_drag_result(
            signal,
            DragResult {
                source: Location::new("todo", 0),
                destination: None,
            },
        );
        apply_drag_result(
            signal,
            DragResult {
                source: Location::new("todo", 7),
                destination: Some(Location::new("done", 0)),
            },
        );
        assert_eq!(signal.get_untracked(), before);
    }
}
