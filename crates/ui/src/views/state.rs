use dioxus::prelude::*;
use lesson_core::model::ProgressMap;

use crate::context::AppContext;
use crate::vm::ViewController;

/// Reactive window state shared by every tab.
///
/// `progress` mirrors the store after each mutation so views re-render.
#[derive(Clone, Copy)]
pub struct UiState {
    pub controller: Signal<ViewController>,
    pub progress: Signal<ProgressMap>,
}

impl UiState {
    /// Re-read the store after a mutation.
    pub fn refresh_progress(&mut self, ctx: &AppContext) {
        self.progress.set(ctx.progress().get());
    }
}

/// Provide `UiState` to descendants, starting on the first movie.
pub fn use_ui_state(ctx: &AppContext) -> UiState {
    let content = ctx.content();
    use_ui_state_with(ctx, move || ViewController::new(&content))
}

/// Provide `UiState` to descendants with a custom initial controller.
pub fn use_ui_state_with(
    ctx: &AppContext,
    initial: impl FnOnce() -> ViewController,
) -> UiState {
    let store = ctx.progress();
    let controller = use_signal(initial);
    let progress = use_signal(move || store.get());
    use_context_provider(|| UiState {
        controller,
        progress,
    })
}
