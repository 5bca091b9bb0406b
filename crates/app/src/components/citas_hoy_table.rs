use dioxus::prelude::*;
use shared_types::Cita;
use shared_ui::{Button, ButtonVariant};

use crate::components::cita_card::clase_estado;
use crate::format::formatea_hora;

/// Today's agenda as a table with a per-row "Completar" action.
#[component]
pub fn CitasHoyTable(citas: Vec<Cita>, on_completar: EventHandler<i64>) -> Element {
    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "Hora" }
                    th { "Mascota" }
                    th { "Motivo" }
                    th { "Duración" }
                    th { "Estado" }
                    th { "Acciones" }
                }
            }
            tbody {
                for cita in citas.iter() {
                    CitaHoyFila { cita: cita.clone(), on_completar: on_completar }
                }
            }
        }
    }
}

#[component]
fn CitaHoyFila(cita: Cita, on_completar: EventHandler<i64>) -> Element {
    let id = cita.id;
    let completada = cita.estado_cita == "Completada";
    let duracion = cita
        .duracion_minutos
        .map(|m| format!("{m} min"))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        tr {
            td { "{formatea_hora(&cita.hora_cita)}" }
            td { "Mascota #{cita.id_mascota}" }
            td { "{cita.motivo}" }
            td { "{duracion}" }
            td {
                span { class: clase_estado(&cita.estado_cita), "{cita.estado_cita}" }
            }
            td {
                if !completada {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_completar.call(id),
                        "Completar"
                    }
                }
            }
        }
    }
}
