//! Sign-in page: stores a bearer token issued by the backend.

use dioxus::prelude::*;
use store::UserProfile;
use ui::use_session;

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut token = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // If already signed in, go straight to the notes
    if session.read().is_authenticated() {
        nav.replace(Route::Notes {});
    }

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let t = token().trim().to_string();
        if t.is_empty() {
            error.set(Some("Please enter your access token".to_string()));
            return;
        }

        let user = UserProfile::new(Some(name()), Some(email()));
        match session.save(&t, &user) {
            Ok(()) => {
                nav.replace(Route::Notes {});
            }
            Err(e) => {
                tracing::error!("Failed to save session: {e}");
                error.set(Some("Could not save your session".to_string()));
            }
        }
    };

    let input_class = "w-full rounded-md border border-neutral-300 bg-white px-3 py-2 text-sm text-neutral-800 outline-none focus:border-indigo-500";

    rsx! {
        div {
            class: "flex min-h-screen flex-col items-center justify-center bg-white p-8",

            h1 {
                class: "mb-2 text-[1.75rem] font-bold text-neutral-800",
                "AIBrain"
            }

            p {
                class: "mb-8 text-[0.9375rem] text-neutral-600",
                "Sign in to your account"
            }

            form {
                onsubmit: handle_sign_in,
                class: "flex w-full max-w-[320px] flex-col gap-3",

                if let Some(err) = error() {
                    div {
                        class: "rounded border border-red-200 bg-red-50 px-2.5 py-2.5 text-[0.8125rem] text-red-600",
                        "{err}"
                    }
                }

                input {
                    class: input_class,
                    r#type: "password",
                    placeholder: "Access token",
                    value: token(),
                    oninput: move |evt: FormEvent| token.set(evt.value()),
                }
                input {
                    class: input_class,
                    r#type: "text",
                    placeholder: "Name (optional)",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    class: input_class,
                    r#type: "email",
                    placeholder: "Email (optional)",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white",
                    "Sign in"
                }
            }

            Link {
                to: Route::Home {},
                class: "mt-6 text-sm text-neutral-500",
                "Back"
            }
        }
    }
}
