use dioxus::prelude::*;

use crate::icons::FaPlus;
use crate::note_editor_dialog::NoteEditorDialog;
use crate::session::use_session;
use crate::Icon;

/// Top bar of the notes page: user menu with sign-out, and the "Add Note" button.
#[component]
pub fn Navbar(on_sign_out: EventHandler<()>, on_sign_in: EventHandler<()>) -> Element {
    let session = use_session();
    let mut adding = use_signal(|| false);

    let user = session.read().user;
    let initial = user.initial();
    let display_name = user.display_name().to_string();

    let handle_sign_out = move |_| {
        session.clear();
        on_sign_out.call(());
    };

    rsx! {
        div {
            class: "p-4 shadow",
            div {
                class: "m-auto flex max-w-7xl flex-wrap items-center justify-between gap-3",
                span { class: "font-bold", "AIBrain" }

                div {
                    class: "flex items-center gap-2",
                    div {
                        class: "group relative",
                        button {
                            class: "flex h-10 w-10 items-center justify-center rounded-full bg-indigo-100 font-medium text-indigo-700",
                            "{initial}"
                        }
                        div {
                            class: "invisible absolute right-0 z-50 mt-2 w-48 rounded-md bg-white py-2 opacity-0 shadow-lg transition-all group-hover:visible group-hover:opacity-100",
                            div {
                                class: "border-b border-neutral-200 px-4 py-2 text-sm text-neutral-700",
                                "{display_name}"
                            }
                            button {
                                class: "block w-full px-4 py-2 text-left text-sm text-neutral-700 hover:bg-neutral-100",
                                onclick: handle_sign_out,
                                "Sign out"
                            }
                        }
                    }
                    button {
                        class: "flex items-center gap-2 rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white",
                        onclick: move |_| adding.set(true),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { class: "hidden sm:block", "Add Note" }
                    }
                }
            }
        }

        NoteEditorDialog {
            open: adding(),
            on_close: move |_| adding.set(false),
            on_sign_in,
        }
    }
}
