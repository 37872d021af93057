pub mod config;
pub mod logging;
pub mod markdown;
pub mod theme;
pub mod timer;
pub mod types;
pub mod ui;
pub mod views;
pub mod wiki;
