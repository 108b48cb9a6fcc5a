use dioxus::prelude::*;

use crate::context::{AppContext, QuizControls};
use crate::views::{ResultsPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{FeedbackVm, QuestionVm, QuizIntent, QuizPhase, QuizScreen, QuizVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let controls = use_context::<QuizControls>();
    let quiz_loop = ctx.quiz_loop();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<QuizVm>);
    // Rendered while the view-model is out of its signal during a submission.
    let pending = use_signal(|| None::<QuizScreen>);

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut error = error;
        let mut vm = vm;
        let mut pending = pending;

        async move {
            // Only the restart counter is tracked; course changes bump it too.
            let _generation = *controls.restarts.read();
            let filter = controls.course.peek().clone();
            pending.set(None);
            vm.set(None);
            let started = start_quiz(&quiz_loop, &filter)?;
            vm.set(Some(started));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });

    let dispatch_intent = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |intent: QuizIntent| {
            let mut error = error;
            let mut vm = vm;
            let mut pending = pending;

            match intent {
                QuizIntent::Choose(index) => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.choose(index);
                    }
                }
                QuizIntent::Submit => {
                    let quiz_loop = quiz_loop.clone();
                    spawn(async move {
                        let generation = *controls.restarts.peek();
                        let ready = vm.write().as_mut().is_some_and(QuizVm::begin_submit);
                        if !ready {
                            return;
                        }
                        let Some(mut vm_value) = vm.write().take() else {
                            error.set(Some(ViewError::Unknown));
                            return;
                        };
                        pending.set(Some(vm_value.screen()));

                        let result = vm_value.submit(&quiz_loop).await;

                        pending.set(None);
                        // A restart during the call already replaced the session.
                        if *controls.restarts.peek() != generation {
                            return;
                        }
                        vm.set(Some(vm_value));
                        match result {
                            Ok(_) => error.set(None),
                            Err(err) => error.set(Some(err)),
                        }
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let state = view_state_from_resource(resource);
    let screen = vm
        .read()
        .as_ref()
        .map(QuizVm::screen)
        .or_else(|| pending.read().clone());

    rsx! {
        div { class: "page quiz",
            h2 { "🧠 Training quiz" }
            match state {
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "banner warning", "{err.message()}" }
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = error() {
                        div { class: "banner error", "{err.message()}" }
                    }
                    if let Some(screen) = screen {
                        QuizScreenView { screen, on_intent: dispatch_intent }
                    }
                },
            }
        }
    }
}

#[component]
fn QuizScreenView(screen: QuizScreen, on_intent: Callback<QuizIntent>) -> Element {
    let locked = screen.input_locked();
    let can_submit = screen.can_submit();
    let explaining = screen.phase == QuizPhase::Explaining;

    rsx! {
        if let Some(feedback) = screen.feedback.clone() {
            FeedbackPanel { feedback }
        }
        match (screen.results.clone(), screen.question.clone()) {
            (Some(results), _) => rsx! {
                ResultsPanel { results }
            },
            (None, Some(question)) => rsx! {
                QuestionCard {
                    question,
                    selected: screen.selected,
                    locked,
                    can_submit,
                    on_intent,
                }
            },
            (None, None) => rsx! {},
        }
        if explaining {
            p { class: "pending", "⏳ Preparing an explanation..." }
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    let class = if feedback.correct {
        "banner success"
    } else {
        "banner error"
    };

    rsx! {
        section { class: "feedback",
            div { class: "{class}", "{feedback.message}" }
            if let Some(answer) = feedback.correct_answer.clone() {
                div { class: "banner info", "{answer}" }
            }
            if let Some(html) = feedback.explanation_html.clone() {
                details { class: "explanation",
                    summary { "📚 Explanation" }
                    div { class: "explanation-body", dangerous_inner_html: "{html}" }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(
    question: QuestionVm,
    selected: Option<usize>,
    locked: bool,
    can_submit: bool,
    on_intent: Callback<QuizIntent>,
) -> Element {
    let group = format!("answer-{}", question.header);

    rsx! {
        section { class: "question",
            h3 { "{question.header}" }
            p { class: "question-text", "{question.text}" }

            fieldset { class: "choices", disabled: locked,
                legend { "Your answer:" }
                for (index, choice) in question.choices.iter().enumerate() {
                    label { key: "{index}", class: "choice",
                        input {
                            r#type: "radio",
                            name: "{group}",
                            value: "{index}",
                            checked: selected == Some(index),
                            disabled: locked,
                            onchange: move |_| on_intent.call(QuizIntent::Choose(index)),
                        }
                        span { "{choice}" }
                    }
                }
            }

            button {
                id: "submit-answer",
                r#type: "button",
                disabled: !can_submit,
                onclick: move |_| on_intent.call(QuizIntent::Submit),
                "Validate and go to next question ➜"
            }

            progress { max: "100", value: "{question.progress_percent}" }
            p { class: "caption", "{question.score_caption}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
