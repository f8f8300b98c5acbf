//! Data models for the application.
//!
//! - [`FileCategory`], [`Direction`] - what is being transferred, which way
//! - [`SelectedFile`] - metadata for the file chosen in a panel
//! - [`TransferStats`] - figures shown after a successful transfer

mod category;
mod file;
mod stats;

pub use category::{Direction, FileCategory};
pub use file::SelectedFile;
pub use stats::TransferStats;
