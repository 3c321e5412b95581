//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `validate.rs` — spec-document and layout validation flows.
//! - `show.rs` — decode + pretty-print a spec document.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate validation logic to `services/*`.
//! - Every outcome prints a message; the returned bool is the verdict.

pub mod show;
pub mod validate;

pub use show::handle_show;
pub use validate::handle_validate;
