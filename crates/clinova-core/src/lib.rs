//! clinova-core
//!
//! Pure domain types and the weekly-schedule vocabulary. No network
//! dependency — this is the shared vocabulary of the Clinova client.

pub mod error;
pub mod models;
pub mod schedule;
