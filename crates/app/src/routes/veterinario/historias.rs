use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle};

use crate::components::BuscadorHistorias;

/// `/veterinario/historias` — dedicated clinical-history browser.
#[component]
pub fn HistoriasPage() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Historias Clínicas" }
                PageSubtitle { "Busca y consulta el historial médico completo de las mascotas." }
            }
        }
        Card {
            CardHeader {
                CardTitle { "Mascotas con Historias Clínicas" }
            }
            CardContent {
                BuscadorHistorias {}
            }
        }
    }
}
