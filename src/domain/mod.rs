//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep the decoded spec document types in one place.
//! - Domain types are data-only: no filesystem side effects.
//!
//! ## Files
//! - `models.rs` — the configuration document and its sub-descriptors.

pub mod models;
