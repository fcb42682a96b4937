pub mod bar_chart;
pub mod calendar;
pub mod data_table;
pub mod kanban;
