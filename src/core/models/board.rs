//! Kanban board state.
//!
//! A `Board` partitions items into named, ordered columns. Every item lives in
//! exactly one column; `move_item` is the only mutation and either fully
//! applies or leaves the board untouched.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by board construction and moves.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("column not found: {column}")]
    ColumnNotFound { column: String },

    #[error("source index {index} out of range for column '{column}' with {len} items")]
    SourceIndexOutOfRange { column: String, index: usize, len: usize },

    /// `len` is measured after the source item has been removed.
    #[error("destination index {index} out of range for column '{column}' with {len} items")]
    DestinationIndexOutOfRange { column: String, index: usize, len: usize },

    #[error("duplicate column: {column}")]
    DuplicateColumn { column: String },

    #[error("duplicate item id: {id}")]
    DuplicateItem { id: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub content: String,
}

impl Item {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub items: Vec<Item>,
}

impl Column {
    pub fn new(id: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A position inside a column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub column: String,
    pub index: usize,
}

impl Location {
    pub fn new(column: impl Into<String>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }
}

/// What the drag layer reports when a drag ends. `destination` is `None`
/// when the card was released outside every column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DragResult {
    pub source: Location,
    pub destination: Option<Location>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoveOutcome {
    Moved,
    Cancelled,
}

// Deserialization goes through `Board::new` so decoded boards keep single ownership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "BoardColumns")]
pub struct Board {
    columns: Vec<Column>,
}

#[derive(Deserialize)]
struct BoardColumns {
    columns: Vec<Column>,
}

impl TryFrom<BoardColumns> for Board {
    type Error = BoardError;

    fn try_from(raw: BoardColumns) -> Result<Self, Self::Error> {
        Board::new(raw.columns)
    }
}

impl Board {
    /// Builds a board, rejecting repeated column names or item ids.
    pub fn new(columns: Vec<Column>) -> Result<Self, BoardError> {
        let mut column_names = HashSet::new();
        let mut item_ids = HashSet::new();
        for column in &columns {
            if !column_names.insert(column.id.as_str()) {
                return Err(BoardError::DuplicateColumn {
                    column: column.id.clone(),
                });
            }
            for item in &column.items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(BoardError::DuplicateItem { id: item.id.clone() });
                }
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn total_items(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Finds the column and position currently holding `item_id`.
    pub fn locate(&self, item_id: &str) -> Option<Location> {
        self.columns.iter().find_map(|column| {
            column
                .items
                .iter()
                .position(|item| item.id == item_id)
                .map(|index| Location::new(column.id.clone(), index))
        })
    }

    fn position_of(&self, name: &str) -> Result<usize, BoardError> {
        self.columns
            .iter()
            .position(|c| c.id == name)
            .ok_or_else(|| BoardError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Removes the item at `source` and inserts it at `destination`.
    ///
    /// `destination.index` is relative to the destination column with the
    /// source item already removed, so for a same-column reorder the valid
    /// range is `0..len` rather than `0..=len`. Everything is validated
    /// before the board is touched.
    pub fn move_item(&mut self, source: &Location, destination: &Location) -> Result<(), BoardError> {
        let src = self.position_of(&source.column)?;
        let dst = self.position_of(&destination.column)?;

        let src_len = self.columns[src].len();
        if source.index >= src_len {
            return Err(BoardError::SourceIndexOutOfRange {
                column: source.column.clone(),
                index: source.index,
                len: src_len,
            });
        }

        let dst_len = if src == dst {
            src_len - 1
        } else {
            self.columns[dst].len()
        };
        if destination.index > dst_len {
            return Err(BoardError::DestinationIndexOutOfRange {
                column: destination.column.clone(),
                index: destination.index,
                len: dst_len,
            });
        }

        let item = self.columns[src].items.remove(source.index);
        log::debug!(
            "moving {} from {}[{}] to {}[{}]",
            item.id,
            source.column,
            source.index,
            destination.column,
            destination.index
        );
        self.columns[dst].items.insert(destination.index, item);
        Ok(())
    }

    /// Non-mutating form of [`Board::move_item`].
    pub fn moved(&self, source: &Location, destination: &Location) -> Result<Board, BoardError> {
        let mut next = self.clone();
        next.move_item(source, destination)?;
        Ok(next)
    }

    /// Applies the end of a drag. A drag without a destination is a no-op.
    pub fn apply_drag(&mut self, result: &DragResult) -> Result<MoveOutcome, BoardError> {
        match &result.destination {
            None => {
                log::debug!("drag of {}[{}] cancelled", result.source.column, result.source.index);
                Ok(MoveOutcome::Cancelled)
            }
            Some(destination) => {
                self.move_item(&result.source, destination)?;
                Ok(MoveOutcome::Moved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(board: &Board, column: &str) -> Vec<String> {
        board
            .column(column)
            .map(|c| c.items.iter().map(|i| i.id.clone()).collect())
            .unwrap_or_default()
    }

    fn board(layout: &[(&str, &[&str])]) -> Board {
        let columns = layout
            .iter()
            .map(|(name, items)| {
                Column::new(*name, items.iter().map(|id| Item::new(*id, id.to_lowercase())).collect())
            })
            .collect();
        Board::new(columns).unwrap()
    }

    fn assert_single_ownership(board: &Board) {
        let mut seen = HashSet::new();
        for column in board.columns() {
            for item in &column.items {
                assert!(seen.insert(item.id.clone()), "{} appears twice", item.id);
            }
        }
    }

    #[test]
    fn same_column_reorder_uses_post_removal_index() {
        let mut b = board(&[("todo", &["A", "B", "C", "D"])]);
        b.move_item(&Location::new("todo", 0), &Location::new("todo", 2)).unwrap();
        assert_eq!(ids(&b, "todo"), ["B", "C", "A", "D"]);
    }

    #[test]
    fn cross_column_move() {
        let mut b = board(&[("todo", &["A", "B"]), ("done", &["C"])]);
        b.move_item(&Location::new("todo", 0), &Location::new("done", 1)).unwrap();
        assert_eq!(ids(&b, "todo"), ["B"]);
        assert_eq!(ids(&b, "done"), ["C", "A"]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut b = board(&[("todo", &["A"]), ("done", &["C", "D"])]);
        b.move_item(&Location::new("todo", 0), &Location::new("done", 2)).unwrap();
        assert_eq!(ids(&b, "done"), ["C", "D", "A"]);
        assert!(b.column("todo").unwrap().is_empty());
    }

    #[test]
    fn same_column_move_to_last_slot() {
        let mut b = board(&[("todo", &["A", "B", "C"])]);
        b.move_item(&Location::new("todo", 0), &Location::new("todo", 2)).unwrap();
        assert_eq!(ids(&b, "todo"), ["B", "C", "A"]);
    }

    #[test]
    fn move_into_empty_column() {
        let mut b = board(&[("todo", &["A"]), ("inProgress", &[])]);
        b.move_item(&Location::new("todo", 0), &Location::new("inProgress", 0)).unwrap();
        assert_eq!(ids(&b, "inProgress"), ["A"]);
    }

    #[test]
    fn moves_conserve_items_and_ownership() {
        let mut b = board(&[
            ("todo", &["task-1", "task-2"]),
            ("inProgress", &["task-3"]),
            ("done", &["task-4"]),
        ]);
        let moves = [
            (("todo", 1), ("done", 0)),
            (("done", 1), ("inProgress", 0)),
            (("inProgress", 1), ("inProgress", 0)),
            (("todo", 0), ("inProgress", 2)),
            (("done", 0), ("todo", 0)),
        ];
        for ((sc, si), (dc, di)) in moves {
            b.move_item(&Location::new(sc, si), &Location::new(dc, di)).unwrap();
            assert_eq!(b.total_items(), 4);
            assert_single_ownership(&b);
        }
        assert_eq!(ids(&b, "inProgress"), ["task-3", "task-4", "task-1"]);
    }

    #[test]
    fn cancelled_drag_leaves_board_unchanged() {
        let mut b = board(&[("todo", &["A", "B"]), ("done", &[])]);
        let before = b.clone();
        let outcome = b
            .apply_drag(&DragResult {
                source: Location::new("todo", 0),
                destination: None,
            })
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Cancelled);
        assert_eq!(b, before);
    }

    #[test]
    fn apply_drag_with_destination_moves() {
        let mut b = board(&[("todo", &["A", "B"]), ("done", &[])]);
        let outcome = b
            .apply_drag(&DragResult {
                source: Location::new("todo", 1),
                destination: Some(Location::new("done", 0)),
            })
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(ids(&b, "done"), ["B"]);
    }

    #[test]
    fn unknown_column_is_rejected_without_change() {
        let mut b = board(&[("todo", &["A"])]);
        let before = b.clone();
        let err = b
            .move_item(&Location::new("todo", 0), &Location::new("archive", 0))
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::ColumnNotFound {
                column: "archive".into()
            }
        );
        assert_eq!(b, before);
    }

    #[test]
    fn source_index_out_of_range_is_rejected() {
        let mut b = board(&[("todo", &["A"]), ("done", &[])]);
        let err = b
            .move_item(&Location::new("todo", 1), &Location::new("done", 0))
            .unwrap_err();
        assert!(matches!(err, BoardError::SourceIndexOutOfRange { index: 1, len: 1, .. }));
    }

    #[test]
    fn destination_index_is_checked_after_removal() {
        let mut b = board(&[("todo", &["A", "B", "C"])]);
        let before = b.clone();
        let err = b
            .move_item(&Location::new("todo", 0), &Location::new("todo", 3))
            .unwrap_err();
        assert!(matches!(err, BoardError::DestinationIndexOutOfRange { index: 3, len: 2, .. }));
        assert_eq!(b, before);
    }

    #[test]
    fn moved_returns_new_board_and_keeps_original() {
        let b = board(&[("todo", &["A", "B"]), ("done", &["C"])]);
        let next = b.moved(&Location::new("todo", 0), &Location::new("done", 1)).unwrap();
        assert_eq!(ids(&b, "todo"), ["A", "B"]);
        assert_eq!(ids(&next, "done"), ["C", "A"]);
    }

    #[test]
    fn new_rejects_duplicates() {
        let dup_column = Board::new(vec![Column::new("todo", vec![]), Column::new("todo", vec![])]);
        assert!(matches!(dup_column, Err(BoardError::DuplicateColumn { .. })));

        let dup_item = Board::new(vec![
            Column::new("todo", vec![Item::new("x", "one")]),
            Column::new("done", vec![Item::new("x", "two")]),
        ]);
        assert_eq!(dup_item, Err(BoardError::DuplicateItem { id: "x".into() }));
    }

    #[test]
    fn decoding_rejects_duplicate_columns_and_items() {
        let dup_column = r#"{"columns":[{"id":"todo","items":[]},{"id":"todo","items":[]}]}"#;
        let err = serde_json::from_str::<Board>(dup_column).unwrap_err();
        assert!(err.to_string().contains("duplicate column: todo"));

        let dup_item = r#"{"columns":[
            {"id":"todo","items":[{"id":"x","content":"one"}]},
            {"id":"done","items":[{"id":"x","content":"two"}]}
        ]}"#;
        let err = serde_json::from_str::<Board>(dup_item).unwrap_err();
        assert!(err.to_string().contains("duplicate item id: x"));
    }

    #[test]
    fn encoded_board_decodes_to_same_board() {
        let b = board(&[("todo", &["A", "B"]), ("done", &["C"])]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), b);
    }

    #[test]
    fn drag_result_from_json_without_destination_is_a_noop() {
        let result: DragResult =
            serde_json::from_str(r#"{"source":{"column":"todo","index":0},"destination":null}"#).unwrap();
        let mut b = board(&[("todo", &["A", "B"]), ("done", &[])]);
        let before = b.clone();
        assert_eq!(b.apply_drag(&result).unwrap(), MoveOutcome::Cancelled);
        assert_eq!(b, before);
        assert_eq!(serde_json::to_string(&MoveOutcome::Cancelled).unwrap(), r#""cancelled""#);
    }

    #[test]
    fn locate_finds_item_position() {
        let b = board(&[("todo", &["A"]), ("done", &["B", "C"])]);
        assert_eq!(b.locate("C"), Some(Location::new("done", 1)));
        assert_eq!(b.locate("Z"), None);
        assert_eq!(b.column_names(), ["todo", "done"]);
    }
}
