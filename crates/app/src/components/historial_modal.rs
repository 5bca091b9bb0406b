use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind, Mascota};
use shared_ui::{Dialog, Skeleton};

use crate::components::EntradaCard;
use crate::format::formatea_fecha;
use crate::session::use_api;

fn mensaje_historial(err: &AppError) -> String {
    match err.kind {
        AppErrorKind::Forbidden => {
            "No tienes permiso para ver el historial de esta mascota".to_string()
        }
        AppErrorKind::NotFound => "Mascota no encontrada".to_string(),
        _ => err.user_message(),
    }
}

/// Read-only clinical history dialog (client view), backed by the
/// `/historias/mascota/{id}/completo` endpoint.
#[component]
pub fn HistorialMascotaModal(mascota: Mascota, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let id = mascota.id;

    let historial = use_resource(move || {
        let api = api.clone();
        async move { api.historial_completo(id).await }
    });

    rsx! {
        Dialog {
            open: true,
            title: "Historia Clínica - {mascota.nombre}",
            on_close: move |_| on_close.call(()),
            match &*historial.read() {
                Some(Ok(h)) => rsx! {
                    div { class: "historia-resumen",
                        p {
                            span { class: "muted", "Historia #" }
                            "{h.historia.id_historia}"
                        }
                        p {
                            span { class: "muted", "Creada: " }
                            "{formatea_fecha(&h.historia.fecha_creacion)}"
                        }
                        p {
                            span { class: "muted", "Entradas: " }
                            "{h.total_entradas}"
                        }
                    }
                    if h.entradas.is_empty() {
                        p { class: "muted", "Aún no hay entradas médicas registradas." }
                    } else {
                        div { class: "lista-entradas",
                            for entrada in h.entradas.iter() {
                                EntradaCard { entrada: entrada.clone() }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "alert alert-error", "{mensaje_historial(err)}" }
                },
                None => rsx! {
                    Skeleton { style: "height: 6rem; width: 100%;" }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_403_tiene_mensaje_especifico() {
        let err = AppError::forbidden("");
        assert_eq!(
            mensaje_historial(&err),
            "No tienes permiso para ver el historial de esta mascota"
        );
    }

    #[test]
    fn el_404_habla_de_la_mascota() {
        let err = AppError::not_found("");
        assert_eq!(mensaje_historial(&err), "Mascota no encontrada");
    }

    #[test]
    fn el_resto_usa_el_mensaje_generico() {
        let err = AppError::unauthorized("");
        assert_eq!(
            mensaje_historial(&err),
            "Sesión expirada. Por favor, inicia sesión nuevamente."
        );
    }
}
