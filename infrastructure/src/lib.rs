pub mod ask_client;
pub mod config;
pub mod logging;
