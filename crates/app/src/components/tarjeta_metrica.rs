use dioxus::prelude::*;
use shared_ui::{Card, CardContent};

/// A single metric tile on the admin dashboard.
#[component]
pub fn TarjetaMetrica(titulo: String, valor: i64) -> Element {
    rsx! {
        Card { class: "metrica-card",
            CardContent {
                span { class: "metrica-valor", "{valor}" }
                span { class: "metrica-titulo", "{titulo}" }
            }
        }
    }
}
