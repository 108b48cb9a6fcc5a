use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{CourseId, Question};
use services::{
    AppServices, ExplanationError, ExplanationProvider, ExplanationService, PromptStyle,
    QuizLoopService,
};
use storage::repository::InMemoryRepository;

use crate::context::{QuizControls, UiApp, build_app_context};
use crate::routes::Sidebar;
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

pub const CANNED_EXPLANATION: &str = "Because **payslips** are mandatory.";

/// Provider that always answers with the same Markdown.
pub struct CannedExplainer;

#[async_trait]
impl ExplanationProvider for CannedExplainer {
    fn enabled(&self) -> bool {
        true
    }

    async fn explain(&self, _prompt: &str) -> Result<String, ExplanationError> {
        Ok(CANNED_EXPLANATION.to_string())
    }
}

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    source: String,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn question_source(&self) -> String {
        self.source.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Sidebar,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(QuizControls::new);
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Sidebar => rsx! { Sidebar {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub async fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        self.drive_async().await;
    }

    /// Index of the correct choice for the question on screen.
    pub fn correct_choice(&self) -> Option<usize> {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| {
            vm.read()
                .as_ref()
                .and_then(|vm| vm.session().current_question().map(Question::answer))
        })
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

pub fn sample_bank() -> Vec<Question> {
    vec![
        Question::new(
            "Which document must an employer hand over every month?",
            vec!["Payslip".into(), "Contract".into(), "Badge".into()],
            0,
            CourseId::number(1),
        )
        .unwrap(),
        Question::new(
            "How long is the legal trial period for a clerk?",
            vec!["One week".into(), "Two months".into()],
            1,
            CourseId::number(2),
        )
        .unwrap(),
    ]
}

pub async fn setup_view_harness(
    view: ViewKind,
    questions: Vec<Question>,
    explainer: Arc<dyn ExplanationProvider>,
) -> ViewHarness {
    let repo = InMemoryRepository::new(questions);
    let services = AppServices::new(&repo, explainer, PromptStyle::default())
        .await
        .expect("build services");

    let app = Arc::new(TestApp {
        quiz_loop: services.quiz_loop(),
        source: services.source().to_string(),
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}

pub fn disabled_explainer() -> Arc<dyn ExplanationProvider> {
    Arc::new(ExplanationService::new(None))
}
