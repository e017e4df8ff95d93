//! # LedgerLens Client Library
//!
//! This library is the API layer of the LedgerLens financial-analytics
//! client. Callers talk to one [`backend::BackendClient`] instance; whether
//! that instance reaches a real server over HTTP or simulates the whole
//! backend locally is decided once, at construction.
//!
//! ## Modules
//!
//! - `backend`: The backend contract and its two implementations
//! - `config`: Configuration management
//! - `error`: Error types shared by both backends

pub mod backend;
pub mod config;
pub mod error;
