//! # Time Conversion Domain
//!
//! Timezone-aware conversion logic behind the HTTP handlers.
//!
//! ## Features
//! - Exact validation of IANA timezone identifiers
//! - Strict `YYYY-MM-DD HH:MM` timestamp parsing
//! - Localization with standard-time preference across DST transitions
//!
//! ## Modules
//! - `error`: Request-level error types and their HTTP rendering
//! - `models`: Request and response bodies
//! - `provider`: Timezone lookups and the conversion itself
//! - `utils`: Format strings and localization helpers

pub mod error;
pub mod models;
pub mod provider;
pub mod utils;
