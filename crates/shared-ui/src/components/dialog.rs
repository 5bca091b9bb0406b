use dioxus::prelude::*;

/// A centered modal dialog over a dimmed backdrop.
///
/// Renders nothing while `open` is false. Clicking the backdrop or the close
/// button fires `on_close`; clicks inside the panel are swallowed.
#[component]
pub fn Dialog(
    open: bool,
    #[props(default)] title: String,
    #[props(default)] on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog-panel",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "dialog-header",
                    if !title.is_empty() {
                        h2 { class: "dialog-title", "{title}" }
                    }
                    button {
                        class: "dialog-close",
                        r#type: "button",
                        aria_label: "Cerrar",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }
                div { class: "dialog-body", {children} }
            }
        }
    }
}
