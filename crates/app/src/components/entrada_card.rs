use dioxus::prelude::*;
use shared_types::EntradaHistoria;
use shared_ui::{Badge, BadgeVariant, Card, CardContent};

use crate::format::formatea_fecha;

/// One medical-visit entry: date, description, vitals and observations.
#[component]
pub fn EntradaCard(entrada: EntradaHistoria) -> Element {
    rsx! {
        Card { class: "entrada-card",
            CardContent {
                div { class: "entrada-card-top",
                    strong { "{formatea_fecha(&entrada.fecha_entrada)}" }
                    span { class: "muted", "Veterinario #{entrada.id_veterinario}" }
                }
                p { "{entrada.descripcion}" }
                div { class: "entrada-card-vitales",
                    if let Some(peso) = entrada.peso_actual {
                        Badge { variant: BadgeVariant::Outline, "Peso: {peso} kg" }
                    }
                    if let Some(temp) = entrada.temperatura {
                        Badge { variant: BadgeVariant::Outline, "Temp: {temp} °C" }
                    }
                    if let Some(fc) = entrada.frecuencia_cardiaca {
                        Badge { variant: BadgeVariant::Outline, "FC: {fc} lpm" }
                    }
                }
                if let Some(obs) = entrada.observaciones.as_ref() {
                    p { class: "muted", "Observaciones: {obs}" }
                }
            }
        }
    }
}
