use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flashcards_core::model::QuizSettings;
use flashcards_core::time::fixed_clock;
use services::{DeckService, SessionLoopService};
use storage::repository::{CardRecord, DeckRecord, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::vm::QuizIntent;

use super::quiz::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    session_loop: Arc<SessionLoopService>,
}

impl UiApp for TestApp {
    fn app_title(&self) -> String {
        "🌸 Flashcards".to_string()
    }

    fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Run `intent` through the view's own dispatcher, then re-render.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned timers run until the rendered page contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn card(question: &str, options: [&str; 4], answer: &str) -> CardRecord {
    CardRecord {
        question: question.to_string(),
        options: options.iter().map(|o| (*o).to_string()).collect(),
        answer: answer.to_string(),
    }
}

/// Quiz page over `cards`, loaded through the in-memory source with options unshuffled.
pub async fn setup_quiz_harness(cards: Vec<CardRecord>) -> ViewHarness {
    let storage = Storage::in_memory(DeckRecord { title: None, cards });
    let decks = DeckService::new(Arc::clone(&storage.decks));
    let settings = QuizSettings::default()
        .with_shuffle_options(false)
        .with_feedback_delay(Duration::from_millis(10));
    let session_loop = SessionLoopService::load(fixed_clock(), &decks, settings)
        .await
        .expect("load deck");

    let app = Arc::new(TestApp {
        session_loop: Arc::new(session_loop),
    });
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
