use dioxus::prelude::*;

use crate::Route;

/// Landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            class: "flex h-screen flex-col items-center justify-center gap-5",
            span {
                class: "text-4xl font-extrabold tracking-tight lg:text-5xl",
                "AIBrain"
            }
            p {
                class: "max-w-prose text-center text-neutral-500",
                "An intelligent note taking app with AI summaries of your notes."
            }
            Link {
                to: Route::SignIn {},
                class: "rounded-md bg-indigo-600 px-6 py-3 font-medium text-white",
                "Get Started"
            }
        }
    }
}
