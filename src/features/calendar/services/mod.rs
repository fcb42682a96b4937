pub mod month_grid;

pub use month_grid::*;
