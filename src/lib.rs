pub mod attendance;
pub mod cli;
pub mod config;
pub mod logging;
pub mod nav;
pub mod session;
pub mod ui;
