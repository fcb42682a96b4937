pub mod app_bar;
pub mod panel;

pub use app_bar::AppBar;
pub use panel::Panel;
