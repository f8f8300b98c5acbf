//! Small shared helpers.
//!
//! - [`dom`] - window/document accessors
//! - [`format_kb`], [`format_percent`] - display formatting

pub mod dom;
mod format;

pub use format::{format_kb, format_percent};
