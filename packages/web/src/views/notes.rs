use dioxus::prelude::*;
use ui::{use_refresh_provider, Navbar, NotesList};

use crate::Route;

/// The signed-in notes page.
#[component]
pub fn Notes() -> Element {
    let nav = use_navigator();
    use_refresh_provider();

    let to_sign_in = move |_: ()| {
        nav.replace(Route::SignIn {});
    };

    rsx! {
        Navbar {
            on_sign_out: move |_| {
                nav.push(Route::Home {});
            },
            on_sign_in: to_sign_in,
        }
        main {
            class: "m-auto max-w-7xl",
            NotesList { on_sign_in: to_sign_in }
        }
    }
}
