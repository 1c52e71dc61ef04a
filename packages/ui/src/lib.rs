//! This crate contains all shared UI for the workspace: the client-side state
//! machines, the session provider, and the notes components.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod state;

mod platform;
pub use platform::{load_client_config, make_session_store, PlatformStore};

mod session;
pub use session::{use_session, SessionContext, SessionProvider};

mod refresh;
pub use refresh::{use_refresh, use_refresh_provider, RefreshSignal};

mod navbar;
pub use navbar::Navbar;

mod note_card;
pub use note_card::NoteCard;

mod note_editor_dialog;
pub use note_editor_dialog::NoteEditorDialog;

mod notes_list;
pub use notes_list::NotesList;
