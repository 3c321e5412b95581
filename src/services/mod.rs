//! Service layer containing the validation logic.
//!
//! ## Service map
//! - `spec.rs` — document loading + the common/linux field rule groups.
//! - `layout.rs` — single-pass image-layout classifier and acceptance.
//! - `validation.rs` — ordered field-error accumulator.
//!
//! ## Conventions
//! - Services never print; command handlers own all output.
//! - One accumulator per rule group, moved by value, never shared.

pub mod layout;
pub mod spec;
pub mod validation;
