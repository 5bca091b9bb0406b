use dioxus::prelude::*;
use shared_types::Cita;
use shared_ui::{Card, CardContent, Separator};

use crate::format::{formatea_fecha, formatea_hora};

/// Map a status label to the pill class that colors it. Matching is fuzzy
/// on purpose: the backend has sent both "Programada" and "programada".
pub fn clase_estado(estado: &str) -> &'static str {
    let k = estado.trim().to_lowercase();
    if k.contains("curso") {
        "pill pill-en-curso"
    } else if k.contains("complet") {
        "pill pill-completada"
    } else if k.contains("cancel") {
        "pill pill-cancelada"
    } else {
        "pill pill-programada"
    }
}

/// Appointment card with date, time, status pill and reason.
#[component]
pub fn CitaCard(cita: Cita) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "cita-card-top",
                    div { class: "cita-card-fecha",
                        strong { "{formatea_fecha(&cita.fecha_cita)}" }
                        span { class: "muted", " • {formatea_hora(&cita.hora_cita)}" }
                    }
                    span { class: clase_estado(&cita.estado_cita), "{cita.estado_cita}" }
                }
                Separator {}
                p { class: "cita-card-motivo",
                    span { class: "muted", "Motivo: " }
                    "{cita.motivo}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estados_conocidos_tienen_su_pildora() {
        assert_eq!(clase_estado("Programada"), "pill pill-programada");
        assert_eq!(clase_estado("En curso"), "pill pill-en-curso");
        assert_eq!(clase_estado("Completada"), "pill pill-completada");
        assert_eq!(clase_estado("Cancelada"), "pill pill-cancelada");
    }

    #[test]
    fn el_matching_ignora_mayusculas_y_espacios() {
        assert_eq!(clase_estado("  completada "), "pill pill-completada");
        assert_eq!(clase_estado("EN CURSO"), "pill pill-en-curso");
    }

    #[test]
    fn estados_desconocidos_caen_en_programada() {
        assert_eq!(clase_estado("Pendiente"), "pill pill-programada");
        assert_eq!(clase_estado(""), "pill pill-programada");
    }
}
