use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::note_card::NoteCard;
use crate::refresh::use_refresh;
use crate::session::use_session;
use crate::state::list::{load_notes, ListState};
use crate::Icon;

/// Grid of the signed-in user's notes.
///
/// Loads on mount and again whenever the refresh signal fires. A missing or
/// rejected session calls `on_sign_in` instead of rendering anything.
#[component]
pub fn NotesList(on_sign_in: EventHandler<()>) -> Element {
    let session = use_session();
    let refresh = use_refresh();
    let mut state = use_signal(ListState::default);

    let _loader = use_resource(move || {
        let session = session.clone();
        let generation = refresh.generation();
        async move {
            tracing::debug!("Loading notes (refresh #{generation})");
            state.set(ListState::Loading);
            let next = load_notes(&session.client, &session.store).await;
            let redirect = next == ListState::Redirecting;
            state.set(next);
            if redirect {
                on_sign_in.call(());
            }
        }
    });

    match state() {
        ListState::Loading => rsx! {
            div {
                class: "flex min-h-[50vh] items-center justify-center text-indigo-600",
                Icon { class: "animate-spin", icon: FaSpinner, width: 32, height: 32 }
            }
        },
        ListState::Redirecting => rsx! {},
        ListState::Failed(message) => rsx! {
            div {
                class: "flex flex-col items-center gap-3 p-10 text-center",
                p { class: "text-red-500", "{message}" }
                button {
                    class: "rounded-md border border-neutral-300 px-4 py-2 text-sm",
                    onclick: move |_| refresh.fire(),
                    "Try again"
                }
            }
        },
        ListState::Ready(notes) => rsx! {
            div {
                class: "grid gap-3 p-4 sm:grid-cols-2 lg:grid-cols-3",
                for note in notes.iter() {
                    NoteCard {
                        key: "{note.id}",
                        note: note.clone(),
                        on_sign_in,
                    }
                }
                if notes.is_empty() {
                    div {
                        class: "col-span-full p-10 text-center text-neutral-500",
                        "You don't have any notes yet."
                    }
                }
            }
        },
    }
}
