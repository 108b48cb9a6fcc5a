use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use quiz_core::model::CourseFilter;

use crate::context::{AppContext, QuizControls};
use crate::views::QuizView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    use_context_provider(QuizControls::new);
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub(crate) fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let mut controls = use_context::<QuizControls>();
    let quiz_loop = ctx.quiz_loop();
    let filters = quiz_loop.course_filters();
    let options = filters.clone();
    let current = controls.course.read().clone();
    let explanations = if quiz_loop.explanations_enabled() {
        "Explanations: on"
    } else {
        "Explanations: off"
    };

    rsx! {
        nav { class: "sidebar",
            h1 { "Quiz" }
            p { class: "source", "{ctx.question_source()}" }

            h2 { "Quiz settings" }
            label { r#for: "course-select", "Course to review" }
            select {
                id: "course-select",
                onchange: move |evt| {
                    if let Some(filter) = filter_for_option(&options, &evt.value()) {
                        controls.select_course(filter);
                    }
                },
                for (index, filter) in filters.into_iter().enumerate() {
                    option {
                        key: "{index}",
                        value: "{index}",
                        selected: filter == current,
                        "{filter}"
                    }
                }
            }
            p { class: "hint", "Pick a course, or All to mix every course." }

            button {
                id: "restart-quiz",
                r#type: "button",
                onclick: move |_| controls.restart(),
                "🔁 (Re)start the quiz"
            }

            p { class: "status", "{explanations}" }
        }
    }
}

/// Options carry their position in the filter list, so the course is looked
/// up rather than re-parsed from its label.
fn filter_for_option(filters: &[CourseFilter], value: &str) -> Option<CourseFilter> {
    value
        .parse::<usize>()
        .ok()
        .and_then(|index| filters.get(index))
        .cloned()
}
