pub mod board;
pub mod dashboard;
pub mod sample;
pub mod theme;

pub use board::{Board, BoardError, Column, DragResult, Item, Location, MoveOutcome};
pub use dashboard::{CalendarEvent, PageStats, Person};
pub use theme::ThemeMode;
