//! clinova-auth
//!
//! Identity-provider authentication: credential flows against the
//! provider's REST token API and local validation of the tokens it issues.

pub mod client;
pub mod error;
pub mod flows;
pub mod jwt;
