//! clinova-api
//!
//! Typed client for the Clinova backend REST API. The backend owns all
//! business rules; this crate is the wire layer — routes, request/response
//! shapes, error extraction, and the two client-side delivery policies
//! (retry-once for reservation lists, sequence tags for stale responses).

pub mod admin;
pub mod client;
pub mod diagnostics;
pub mod error;
pub mod profile;
pub mod retry;
pub mod routes;
pub mod schedule;
pub mod seq;
pub mod sessions;

pub use client::ApiClient;
pub use error::ApiError;
pub use seq::SequenceGuard;
