// Hardcoded demo data rendered by the dashboard.

use chrono::{NaiveDate, NaiveDateTime};

use super::board::{Board, BoardError, Column, Item};
use super::dashboard::{CalendarEvent, PageStats, Person};

pub fn people() -> Vec<Person> {
    [(1, "John Doe", 35), (2, "Jane Smith", 42), (3, "Alice Johnson", 29)]
        .into_iter()
        .map(|(id, name, age)| Person {
            id,
            name: name.to_string(),
            age,
        })
        .collect()
}

pub fn page_stats() -> Vec<PageStats> {
    [
        ("Page A", 4000.0, 2400.0, 2400.0),
        ("Page B", 3000.0, 1398.0, 2210.0),
        ("Page C", 2000.0, 9800.0, 2290.0),
    ]
    .into_iter()
    .map(|(name, uv, pv, amt)| PageStats {
        name: name.to_string(),
        uv,
        pv,
        amt,
    })
    .collect()
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, 0, 0)
}

pub fn events() -> Vec<CalendarEvent> {
    [
        (0, "Board meeting", (2023, 6, 20, 10), (2023, 6, 20, 12)),
        (1, "Team lunch", (2023, 6, 21, 12), (2023, 6, 21, 13)),
    ]
    .into_iter()
    .filter_map(|(id, title, (sy, sm, sd, sh), (ey, em, ed, eh))| {
        Some(CalendarEvent {
            id,
            title: title.to_string(),
            start: at(sy, sm, sd, sh)?,
            end: at(ey, em, ed, eh)?,
        })
    })
    .collect()
}

pub fn initial_board() -> Result<Board, BoardError> {
    let column = |id: &str, items: &[(&str, &str)]| {
        Column::new(id, items.iter().map(|(id, content)| Item::new(*id, *content)).collect())
    };
    Board::new(vec![
        column("todo", &[("task-1", "Task 1"), ("task-2", "Task 2")]),
        column("inProgress", &[("task-3", "Task 3")]),
        column("done", &[("task-4", "Task 4")]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_has_three_columns_and_four_tasks() {
        let board = initial_board().unwrap();
        assert_eq!(board.column_names(), ["todo", "inProgress", "done"]);
        assert_eq!(board.total_items(), 4);
    }

    #[test]
    fn sample_events_are_well_formed() {
        let events = events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.start < e.end));
    }
}
