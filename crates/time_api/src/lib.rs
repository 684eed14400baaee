//! # Timezone Converter API
//!
//! A small REST service for converting wall-clock times between IANA time zones.
//!
//! ## Endpoints
//! - `GET /`: health check
//! - `GET /timezones`: every identifier known to the bundled tz database
//! - `POST /convert-time`: convert a `YYYY-MM-DD HH:MM` time between two zones
//! - `GET /openapi.json`: generated OpenAPI document

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod openapi;
pub mod server;
pub mod utils;
