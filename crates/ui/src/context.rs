use std::sync::Arc;

use services::SessionLoopService;

pub trait UiApp: Send + Sync {
    fn app_title(&self) -> String;
    fn session_loop(&self) -> Arc<SessionLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    session_loop: Arc<SessionLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.app_title(),
            session_loop: app.session_loop(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
