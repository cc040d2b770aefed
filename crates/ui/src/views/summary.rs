use dioxus::prelude::*;

use crate::vm::SummaryVm;

fn close_window() {
    dioxus::desktop::window().close();
}

#[component]
pub fn SummaryView(summary: SummaryVm) -> Element {
    rsx! {
        div { class: "page summary-page",
            h1 { class: "summary__title", "🎉 Congratulations! 🎉" }
            p { class: "summary__headline", "{summary.headline()}" }
            dl { class: "summary__stats",
                dt { "Cards" }
                dd { "{summary.total}" }
                dt { "Accuracy" }
                dd { "{summary.accuracy_percent}%" }
                dt { "Time" }
                dd { "{summary.elapsed_str}" }
                dt { "Finished" }
                dd { "{summary.completed_at_str}" }
            }
            div { class: "summary__actions",
                button {
                    class: "btn btn-next",
                    id: "summary-close",
                    r#type: "button",
                    onclick: move |_| close_window(),
                    "Close"
                }
            }
        }
    }
}
