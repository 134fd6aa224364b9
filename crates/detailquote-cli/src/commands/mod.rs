//! Subcommand handlers.
//!
//! Each module owns one subcommand so `main.rs` stays focused on parsing
//! and dispatch.

pub mod packages;
pub mod quote;
pub mod validate;
