use dioxus::prelude::*;
use store::Note;

use crate::icons::{FaChevronDown, FaChevronUp, FaSpinner};
use crate::note_editor_dialog::NoteEditorDialog;
use crate::session::use_session;
use crate::state::summary::{fetch_summary, SummaryPress, SummaryResolution, SummaryState};
use crate::Icon;

/// One note in the list. Clicking the body opens the edit dialog; the footer
/// button fetches the AI summary once and then toggles it.
#[component]
pub fn NoteCard(note: Note, on_sign_in: EventHandler<()>) -> Element {
    let session = use_session();
    let mut summary = use_signal(SummaryState::default);
    let mut editing = use_signal(|| false);

    let note_id = note.id.clone();
    let handle_summary = move |evt: MouseEvent| {
        evt.stop_propagation();
        let press = summary.write().press();
        if press != SummaryPress::Fetch {
            return;
        }
        let session = session.clone();
        let note_id = note_id.clone();
        spawn(async move {
            let result = fetch_summary(&session.client, &session.store, &note_id).await;
            let resolution = summary.write().resolve(result);
            if resolution == SummaryResolution::SignInRequired {
                on_sign_in.call(());
            }
        });
    };

    let state = summary();
    let label = state.button_label();
    let timestamp = note.timestamp_label();

    rsx! {
        div {
            class: "flex flex-col rounded-lg border border-neutral-200 bg-white shadow-sm transition-shadow hover:shadow-lg",

            div {
                class: "cursor-pointer p-4",
                onclick: move |_| editing.set(true),
                h3 { class: "m-0 text-lg font-semibold text-neutral-800", "{note.title}" }
                p { class: "mt-1 text-sm text-neutral-500", "{timestamp}" }
                p { class: "mt-3 whitespace-pre-line text-neutral-700", "{note.content}" }
            }

            div {
                class: "flex flex-col items-start border-t border-neutral-200 p-4 pt-2",
                button {
                    class: "flex items-center gap-2 rounded-md border border-neutral-300 px-3 py-1.5 text-sm disabled:opacity-50",
                    disabled: state.is_loading(),
                    onclick: handle_summary,
                    {match &state {
                        SummaryState::Loading => rsx! {
                            Icon { class: "animate-spin", icon: FaSpinner, width: 14, height: 14 }
                        },
                        SummaryState::Shown(_) => rsx! {
                            Icon { icon: FaChevronUp, width: 14, height: 14 }
                        },
                        SummaryState::Hidden(_) => rsx! {
                            Icon { icon: FaChevronDown, width: 14, height: 14 }
                        },
                        _ => rsx! {},
                    }}
                    "{label}"
                }

                if let Some(error) = state.error() {
                    p { class: "mt-2 text-sm text-red-500", "{error}" }
                }

                if let Some(text) = state.visible_text() {
                    div {
                        class: "mt-3 w-full rounded-md bg-neutral-50 p-3",
                        h4 { class: "mb-1 text-sm font-medium", "AI Summary:" }
                        p { class: "text-sm text-neutral-600", "{text}" }
                    }
                }
            }
        }

        NoteEditorDialog {
            open: editing(),
            note: note.clone(),
            on_close: move |_| editing.set(false),
            on_sign_in,
        }
    }
}
