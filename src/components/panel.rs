//! A single compress-or-decompress panel.
//!
//! Owns the browser `File` handle for its picker; everything else the
//! panel shows comes straight out of the session. Submitting runs the
//! whole chain: validated request, one POST, decode, download, and a
//! final action carrying statistics or the failure message.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::catalog::lookup;
use crate::core::error::TransferError;
use crate::core::{Action, TransferRequest, materialize};
use crate::models::{Direction, FileCategory, SelectedFile, TransferStats};
use crate::utils::{format_kb, format_percent};

stylance::import_crate_style!(css, "src/components/panel.module.css");

/// File picker, inline error, statistics, and the submit control for one
/// direction of the active category.
#[component]
pub fn TransferPanel(category: FileCategory, direction: Direction) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.session;

    // The File handle stays here in the view layer; the session only
    // tracks its metadata.
    let handle = StoredValue::new_local(None::<web_sys::File>);

    let panel = Signal::derive(move || session.with(|s| s.panel(direction).clone()));

    let accept = lookup(category)
        .map(|spec| spec.accept_attr(direction))
        .unwrap_or_default();
    let input_id = match direction {
        Direction::Compress => "file-upload",
        Direction::Decompress => "decompress-upload",
    };
    let picker_label = match direction {
        Direction::Compress => format!("Choose a {} file", category.noun()),
        Direction::Decompress => format!("Choose a compressed {} file", category.noun()),
    };

    let on_file = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let selected = SelectedFile::new(file.name(), file.size() as u64, file.type_());
        ctx.dispatch(Action::FileChosen(direction, selected));

        // Keep the handle only when the state machine kept the metadata.
        let accepted = session.with_untracked(|s| s.panel(direction).file.is_some());
        handle.set_value(accepted.then_some(file));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // Advisory admission control: the button is disabled while a
        // transfer is in flight, this is the matching belt.
        if session.with_untracked(|s| s.panel(direction).loading) {
            return;
        }

        let selected = session.with_untracked(|s| s.panel(direction).file.clone());
        ctx.dispatch(Action::SubmitStarted(direction));
        let Some(selected) = selected else {
            // The state machine surfaced the "select a file first" prompt.
            return;
        };
        let Some(file) = handle.get_value() else {
            ctx.dispatch(Action::SubmitFinished(
                direction,
                Err(TransferError::Download(
                    "selected file is no longer available".into(),
                )),
            ));
            return;
        };

        spawn_local(async move {
            let outcome = run_transfer(category, direction, selected, file).await;
            if let Err(err) = &outcome {
                web_sys::console::error_1(&format!("transfer failed: {}", err).into());
            }
            ctx.dispatch(Action::SubmitFinished(direction, outcome));
        });
    };

    view! {
        <section class=css::panel>
            <h2 class=css::title>{direction.title()} " - " {category.label()}</h2>

            {move || {
                panel
                    .get()
                    .error
                    .map(|err| view! { <p class=css::errorMessage>{err}</p> })
            }}

            <form class=css::form on:submit=on_submit>
                <label class=css::fileLabel for=input_id>
                    {picker_label}
                </label>
                <input
                    id=input_id
                    type="file"
                    class=css::fileInput
                    accept=accept
                    on:change=on_file
                />

                {move || {
                    panel
                        .get()
                        .file
                        .map(|file| {
                            view! {
                                <p class=css::fileInfo>
                                    <span class=css::fileInfoLabel>"Selected File: "</span>
                                    {file.name}
                                    " ("
                                    {format_kb(file.size)}
                                    ")"
                                </p>
                            }
                        })
                }}

                {move || panel.get().stats.map(|stats| stats_view(stats, direction))}

                <button
                    type="submit"
                    class=css::submitButton
                    disabled=move || panel.get().loading
                >
                    {move || {
                        if panel.get().loading {
                            direction.busy_label()
                        } else {
                            direction.label()
                        }
                    }}
                </button>
            </form>
        </section>
    }
}

/// Statistics block, or a plain notice when the exchange reported nothing.
fn stats_view(stats: TransferStats, direction: Direction) -> AnyView {
    if stats.is_empty() {
        return view! {
            <p class=css::notice>{direction.title()} " finished; your download has started."</p>
        }
        .into_any();
    }

    let ratio = (direction == Direction::Compress).then(|| {
        stats
            .ratio
            .map(format_percent)
            .unwrap_or_else(|| "N/A".to_string())
    });

    view! {
        <div class=css::stats>
            {stats.original_size.map(|n| view! { <p>"Original Size: " {format_kb(n)}</p> })}
            {stats
                .compressed_size
                .map(|n| view! { <p>"Compressed Size: " {format_kb(n)}</p> })}
            {ratio.map(|r| view! { <p>"Compression Ratio: " {r}</p> })}
        </div>
    }
    .into_any()
}

/// One full exchange: validated request, POST, decode, download.
async fn run_transfer(
    category: FileCategory,
    direction: Direction,
    selected: SelectedFile,
    file: web_sys::File,
) -> Result<TransferStats, TransferError> {
    let request = TransferRequest::new(category, direction, selected)
        .map_err(|_| TransferError::RequestCreationFailed)?;
    let result = request.send(&file).await?;
    let stats = result.stats(direction);
    materialize(result, direction, request.spec())?;
    Ok(stats)
}
