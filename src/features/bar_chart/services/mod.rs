pub mod chart_layout;

pub use chart_layout::*;
