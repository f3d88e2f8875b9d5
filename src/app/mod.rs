pub mod app;
pub mod calc;
pub mod portfolio;
pub mod ui;
pub mod utils;

pub use app::{App, InputMode};
pub use portfolio::{HistorySettings, Portfolio};
