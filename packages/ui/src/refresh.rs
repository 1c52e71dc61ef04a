//! List refresh signal shared by the notes page and the editor dialogs.

use dioxus::prelude::*;

/// Bumping the generation re-runs every resource that read it.
#[derive(Clone, Copy, PartialEq)]
pub struct RefreshSignal(Signal<u32>);

impl RefreshSignal {
    pub fn fire(mut self) {
        *self.0.write() += 1;
    }

    pub fn generation(&self) -> u32 {
        (self.0)()
    }
}

/// Install a fresh refresh signal for the current subtree.
pub fn use_refresh_provider() -> RefreshSignal {
    let generation = use_signal(|| 0u32);
    use_context_provider(|| RefreshSignal(generation))
}

pub fn use_refresh() -> RefreshSignal {
    use_context::<RefreshSignal>()
}
