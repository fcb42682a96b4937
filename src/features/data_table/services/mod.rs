pub mod table_operations;

pub use table_operations::*;
