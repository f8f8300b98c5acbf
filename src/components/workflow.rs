//! Active workflow view for one category.

use leptos::prelude::*;

use super::panel::TransferPanel;
use crate::app::AppContext;
use crate::core::Action;
use crate::models::{Direction, FileCategory};

stylance::import_crate_style!(css, "src/components/workflow.module.css");

/// Back control plus one panel per direction.
///
/// Both panels are always shown; each keeps its own file, error, and
/// statistics in the session.
#[component]
pub fn Workflow(category: FileCategory) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::workflow>
            <button class=css::backButton on:click=move |_| ctx.dispatch(Action::Back)>
                "\u{2190} Go Back"
            </button>
            <div class=css::panels>
                <TransferPanel category=category direction=Direction::Compress />
                <TransferPanel category=category direction=Direction::Decompress />
            </div>
        </div>
    }
}
