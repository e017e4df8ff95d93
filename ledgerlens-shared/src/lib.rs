//! # LedgerLens Shared Library
//!
//! This crate contains the wire types shared between the LedgerLens client
//! backends. Every struct here matches the field names the HTTP API speaks,
//! so the same types serve both the live transport and the local simulation.
//!
//! ## Module Organization
//!
//! - `models`: Request and response types for every API operation

pub mod models;

/// Current version of the LedgerLens shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
