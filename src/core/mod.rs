//! Core workflow logic for the transfer application.
//!
//! This module provides:
//! - [`catalog`] per-category transfer rules as static data
//! - [`validate`] pre-flight checks for candidate files
//! - [`Session`], [`Action`], [`reduce`] - the interface state machine
//! - [`TransferRequest`] - the validated exchange with the service
//! - [`materialize`] - artifact-to-download plumbing

pub mod catalog;
pub mod error;

mod download;
mod session;
mod transfer;
mod validate;

pub use download::{materialize, output_filename};
pub use session::{Action, Mode, PanelState, Session, reduce};
pub use transfer::{Artifact, TransferRequest, TransferResult};
pub use validate::validate;
