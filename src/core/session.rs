//! Interface state machine.
//!
//! One [`Session`] value is the single source of truth for the interface.
//! Components never mutate it directly; they dispatch [`Action`]s through
//! [`reduce`], a pure total transition function, which keeps every
//! transition testable without a rendering layer.

use crate::core::error::TransferError;
use crate::core::validate::validate;
use crate::models::{Direction, FileCategory, SelectedFile, TransferStats};

/// Which view is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Category grid; nothing is retained in this mode.
    #[default]
    Browse,
    /// Compression and decompression panels for one category.
    Workflow(FileCategory),
}

/// State of one compress-or-decompress panel inside a workflow.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PanelState {
    /// Metadata of the file that passed validation, if any.
    pub file: Option<SelectedFile>,
    /// Figures from the last successful transfer.
    pub stats: Option<TransferStats>,
    /// Message shown next to the input control.
    pub error: Option<String>,
    /// True while a transfer is in flight; the submit control is disabled
    /// off this flag, which is the only admission control there is.
    pub loading: bool,
}

/// The one interface state instance.
///
/// A workflow shows both directions side by side, so each direction gets
/// its own panel under the shared mode.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    pub mode: Mode,
    pub compress: PanelState,
    pub decompress: PanelState,
}

impl Session {
    pub fn panel(&self, direction: Direction) -> &PanelState {
        match direction {
            Direction::Compress => &self.compress,
            Direction::Decompress => &self.decompress,
        }
    }

    fn panel_mut(&mut self, direction: Direction) -> &mut PanelState {
        match direction {
            Direction::Compress => &mut self.compress,
            Direction::Decompress => &mut self.decompress,
        }
    }
}

/// Everything the interface can do, as data.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Enter the workflow for a category.
    SelectCategory(FileCategory),
    /// Leave the workflow and drop everything it retained.
    Back,
    /// A file was picked in one panel; the validator decides its fate.
    FileChosen(Direction, SelectedFile),
    /// The submit control was activated.
    SubmitStarted(Direction),
    /// The transfer (and download) finished, one way or the other.
    SubmitFinished(Direction, Result<TransferStats, TransferError>),
}

/// Total transition function for the interface state machine.
///
/// Every (state, action) pair yields a defined next state; workflow
/// actions arriving in Browse mode - including a transfer completing
/// after the user already left, since nothing can be cancelled - leave
/// the state untouched.
pub fn reduce(mut state: Session, action: Action) -> Session {
    match action {
        Action::SelectCategory(category) => Session {
            mode: Mode::Workflow(category),
            ..Session::default()
        },
        Action::Back => Session::default(),
        Action::FileChosen(direction, file) => {
            let Mode::Workflow(category) = state.mode else {
                return state;
            };
            let panel = state.panel_mut(direction);
            panel.stats = None;
            match validate(&file, category, direction) {
                Ok(_) => {
                    panel.file = Some(file);
                    panel.error = None;
                }
                Err(err) => {
                    panel.file = None;
                    panel.error = Some(err.to_string());
                }
            }
            state
        }
        Action::SubmitStarted(direction) => {
            let Mode::Workflow(category) = state.mode else {
                return state;
            };
            let panel = state.panel_mut(direction);
            if panel.file.is_none() {
                panel.error = Some(match direction {
                    Direction::Compress => {
                        format!("Please select a {} file first!", category.noun())
                    }
                    Direction::Decompress => {
                        format!("Please select a compressed {} file first!", category.noun())
                    }
                });
                return state;
            }
            panel.loading = true;
            panel.error = None;
            state
        }
        Action::SubmitFinished(direction, outcome) => {
            if !matches!(state.mode, Mode::Workflow(_)) {
                return state;
            }
            let panel = state.panel_mut(direction);
            panel.loading = false;
            match outcome {
                Ok(stats) => {
                    panel.stats = Some(stats);
                    panel.error = None;
                }
                // The selected file stays put so the user can resubmit.
                Err(err) => {
                    panel.error = Some(format!("{} failed: {}", direction.title(), err));
                }
            }
            state
        }
    }
}
