//! Category grid shown while browsing.

use leptos::prelude::CollectView;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::Action;
use crate::models::FileCategory;

stylance::import_crate_style!(css, "src/components/home.module.css");

/// One card per supported category; clicking a card enters its workflow.
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::grid>
            {FileCategory::ALL
                .iter()
                .map(|&category| {
                    view! {
                        <button
                            class=css::card
                            on:click=move |_| ctx.dispatch(Action::SelectCategory(category))
                        >
                            <span class=css::cardGlyph>{glyph(category)}</span>
                            <span class=css::cardTitle>{category.label()} " File"</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Stand-in glyph for a category card.
fn glyph(category: FileCategory) -> &'static str {
    match category {
        FileCategory::Text => "Aa",
        FileCategory::Image => "▦",
        FileCategory::Audio => "♫",
    }
}
