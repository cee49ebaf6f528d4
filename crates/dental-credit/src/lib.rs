//! Core library for the DentalCredit dashboard: a schema-driven query
//! engine over record collections, the credit domain built on top of it,
//! and the profile service the HTTP and CLI surfaces share.

pub mod config;
pub mod credit;
pub mod error;
pub mod query;
pub mod telemetry;

pub use error::AppError;
