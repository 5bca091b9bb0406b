use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageHeader, PageTitle};

/// Sections that exist in the navigation but have no backend yet.
#[component]
pub fn ComingSoon(titulo: String) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "{titulo}" }
        }
        Card {
            CardContent { "Próximamente..." }
        }
    }
}

/// Static demo inventory table shown under Admin → Inventario.
#[component]
pub fn InventarioDemo() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Inventario" }
        }
        Card {
            CardContent {
                table { class: "table",
                    thead {
                        tr {
                            th { "Ítem" }
                            th { "Stock" }
                            th { "Estado" }
                        }
                    }
                    tbody {
                        tr {
                            td { "Vacuna X" }
                            td { "12" }
                            td { "OK" }
                        }
                        tr {
                            td { "Antiparasitario Y" }
                            td { "3" }
                            td { class: "stock-bajo", "Bajo" }
                        }
                    }
                }
            }
        }
    }
}
