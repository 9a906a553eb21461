pub mod app;
pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod themes;
pub mod utils;
pub mod views;
