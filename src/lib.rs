// Library modules for integration tests
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod spelling;
pub mod utils;
