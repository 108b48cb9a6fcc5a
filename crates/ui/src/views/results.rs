use dioxus::prelude::*;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsPanel(results: ResultsVm) -> Element {
    rsx! {
        section { class: "results",
            h2 { "🏁 Quiz finished" }
            p { class: "final-score", "{results.headline}" }
            div { class: "{results.banner_class()}", "{results.message}" }
            p { class: "hint", "{results.hint}" }
        }
    }
}
