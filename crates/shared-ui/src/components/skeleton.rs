use dioxus::prelude::*;

/// A shimmering placeholder block shown while content loads.
#[component]
pub fn Skeleton(#[props(default)] style: String) -> Element {
    rsx! {
        div { class: "skeleton", style: "{style}" }
    }
}
