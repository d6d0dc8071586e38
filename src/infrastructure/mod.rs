//! Infrastructure adapters: configuration, logging, and the `SQLite`
//! implementations of the domain ports.

pub mod config;
pub mod database;
pub mod logging;
