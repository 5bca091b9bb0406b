use dioxus::prelude::*;

/// A thin horizontal rule between sections.
#[component]
pub fn Separator() -> Element {
    rsx! {
        div { class: "separator", role: "separator" }
    }
}
