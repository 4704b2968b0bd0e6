use std::sync::Arc;

use lesson_core::model::ContentStore;
use services::ProgressStore;

pub trait UiApp: Send + Sync {
    fn content(&self) -> Arc<ContentStore>;
    fn progress(&self) -> Arc<ProgressStore>;
}

#[derive(Clone)]
pub struct AppContext {
    content: Arc<ContentStore>,
    progress: Arc<ProgressStore>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content: app.content(),
            progress: app.progress(),
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentStore> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
