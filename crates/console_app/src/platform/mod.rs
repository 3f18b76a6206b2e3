mod app;
mod clipboard;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
