//! Track resolution against the external download service.
//!
//! # Architecture
//!
//! Mirrors the usual client layering:
//! - **Domain models** (`domain.rs`) - our types, plus display remapping
//! - **API DTOs** (`dto.rs`) - the exact wire shape of the service
//! - **Adapter** (`adapter.rs`) - converts DTOs to domain models
//! - **Client** (`client.rs`) - the HTTP call and response classification
//!
//! The split keeps the service's quirks (capitalized `DownloadLink`,
//! `channel` for artist) out of the rest of the codebase.

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;

pub use client::{DEFAULT_ENDPOINT, LookupClient};
pub use domain::{LookupError, LookupResult};
