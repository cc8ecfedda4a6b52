//! clinova-desktop library root.
//!
//! Re-exports the config module so that examples and integration tests
//! can exercise it directly without going through the Tauri command
//! layer.

pub mod config;
