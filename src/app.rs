//! Root application module.
//!
//! Contains the App component and the AppContext holding the single
//! session signal, following Leptos conventions.

use leptos::prelude::*;

use crate::components::{Home, Workflow};
use crate::config::APP_NAME;
use crate::core::{Action, Mode, Session, reduce};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Holds the one [`Session`] instance. Components read it through the
/// signal and change it only by dispatching [`Action`]s, so every state
/// transition flows through [`reduce`].
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal, which
/// is cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Session>,
}

impl AppContext {
    /// Creates a fresh context in the initial Browse state.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
        }
    }

    /// Run one action through the transition function.
    pub fn dispatch(&self, action: Action) {
        self.session
            .update(|session| *session = reduce(session.clone(), action));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App Component
// ============================================================================

/// Root component: provides the context and switches between the category
/// grid and the active workflow.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <div class=css::app>
            <header class=css::header>
                <h1 class=css::brand>{APP_NAME}</h1>
                <p class=css::tagline>"Huffman compression, in your browser tab"</p>
            </header>

            <main class=css::main>
                {move || match ctx.session.with(|session| session.mode) {
                    Mode::Browse => view! { <Home /> }.into_any(),
                    Mode::Workflow(category) => {
                        view! { <Workflow category=category /> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}
