pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod render;
