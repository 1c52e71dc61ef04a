use dioxus::prelude::*;
use store::Note;

use crate::icons::FaSpinner;
use crate::refresh::use_refresh;
use crate::session::use_session;
use crate::state::editor::{perform, EditorOutcome, EditorState, EditorStatus, Mutation};
use crate::Icon;

/// Modal form for creating a note, or editing `note` when one is given.
///
/// The form is reset every time the dialog opens. A successful mutation closes
/// the dialog and refreshes the notes list.
#[component]
pub fn NoteEditorDialog(
    open: bool,
    #[props(default)] note: Option<Note>,
    on_close: EventHandler<()>,
    on_sign_in: EventHandler<()>,
) -> Element {
    let session = use_session();
    let refresh = use_refresh();
    let mut editor = use_signal({
        let note = note.clone();
        move || EditorState::new(note)
    });

    // Reset when opening, or when the backing note changes under an open dialog
    use_effect(use_reactive!(|(open, note)| {
        if editor.peek().needs_sync(open, note.as_ref()) {
            editor.write().sync(open, note.as_ref());
        }
    }));

    let dispatch = use_callback(move |mutation: Mutation| {
        let session = session.clone();
        spawn(async move {
            let result = perform(&session.client, &session.store, &mutation).await;
            let outcome = editor.write().finish(result);
            match outcome {
                EditorOutcome::Close => {
                    on_close.call(());
                    refresh.fire();
                }
                EditorOutcome::SignInRequired => {
                    on_close.call(());
                    on_sign_in.call(());
                }
                EditorOutcome::StayOpen => {}
            }
        });
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mutation = editor.write().begin_submit();
        if let Some(mutation) = mutation {
            dispatch.call(mutation);
        }
    };

    let handle_delete = move |_| {
        let mutation = editor.write().begin_delete();
        if let Some(mutation) = mutation {
            dispatch.call(mutation);
        }
    };

    if !open {
        return rsx! {};
    }

    let state = editor();
    let heading = state.mode.heading();
    let input_class = "w-full rounded-md border border-neutral-300 bg-white px-3 py-2 text-sm text-neutral-800 outline-none focus:border-indigo-500";

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/50 p-4",
            onclick: move |_| on_close.call(()),

            div {
                class: "w-full max-w-lg rounded-lg bg-white p-6 shadow-xl",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "mb-4 flex items-center justify-between",
                    h2 { class: "m-0 text-lg font-semibold text-neutral-800", "{heading}" }
                    button {
                        r#type: "button",
                        class: "text-neutral-500 hover:text-neutral-800",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                form {
                    class: "flex flex-col gap-4",
                    onsubmit: handle_submit,

                    div {
                        class: "flex flex-col gap-2",
                        label { r#for: "note-title", class: "text-sm font-medium", "Note Title" }
                        input {
                            id: "note-title",
                            class: input_class,
                            r#type: "text",
                            placeholder: "Note title",
                            value: "{state.title}",
                            oninput: move |evt: FormEvent| editor.write().set_title(evt.value()),
                        }
                        if let Some(message) = state.errors.title {
                            p { class: "text-sm text-red-500", "{message}" }
                        }
                    }

                    div {
                        class: "flex flex-col gap-2",
                        label { r#for: "note-content", class: "text-sm font-medium", "Note Content" }
                        textarea {
                            id: "note-content",
                            class: input_class,
                            placeholder: "Note content",
                            rows: 5,
                            value: "{state.content}",
                            oninput: move |evt: FormEvent| editor.write().set_content(evt.value()),
                        }
                        if let Some(message) = state.errors.content {
                            p { class: "text-sm text-red-500", "{message}" }
                        }
                    }

                    if let Some(alert) = state.alert() {
                        div {
                            class: "rounded border border-red-200 bg-red-50 px-3 py-2 text-sm text-red-600",
                            role: "alert",
                            "{alert}"
                        }
                    }

                    div {
                        class: "flex justify-end gap-2",
                        if state.can_delete() {
                            button {
                                r#type: "button",
                                class: "flex items-center gap-2 rounded-md bg-red-600 px-4 py-2 text-sm font-medium text-white disabled:opacity-50",
                                disabled: state.delete_disabled(),
                                onclick: handle_delete,
                                if state.status == EditorStatus::Deleting {
                                    Icon { class: "animate-spin", icon: FaSpinner, width: 14, height: 14 }
                                }
                                "Delete"
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "flex items-center gap-2 rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white disabled:opacity-50",
                            disabled: state.submit_disabled(),
                            if state.status == EditorStatus::Submitting {
                                Icon { class: "animate-spin", icon: FaSpinner, width: 14, height: 14 }
                            }
                            "Submit"
                        }
                    }
                }
            }
        }
    }
}
