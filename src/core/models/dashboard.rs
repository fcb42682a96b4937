use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the people table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub age: u32,
}

/// Per-page traffic figures plotted by the bar chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageStats {
    pub name: String,
    pub uv: f64,
    pub pv: f64,
    pub amt: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
