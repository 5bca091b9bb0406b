use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, PageActions, PageHeader, PageSubtitle, PageTitle, Skeleton};

use crate::components::{AgendarCitaModal, CitaCard, FuenteMascotas};
use crate::session::use_api;

/// `/recepcionista/citas` — every appointment in the clinic, with the
/// scheduling dialog fed by the full pet listing.
#[component]
pub fn GestionCitasPage() -> Element {
    let api = use_api();

    let mut modal_abierto = use_signal(|| false);
    let mut recarga = use_signal(|| 0u32);

    let citas = use_resource(move || {
        let api = api.clone();
        let _tick = recarga();
        async move { api.citas().await }
    });

    rsx! {
        PageHeader {
            div {
                PageTitle { "Gestión de Citas" }
                PageSubtitle { "Administra y programa nuevas citas." }
            }
            PageActions {
                Button { onclick: move |_| modal_abierto.set(true), "+ Nueva cita" }
            }
        }

        match &*citas.read() {
            Some(Ok(lista)) => rsx! {
                if lista.is_empty() {
                    p { class: "muted estado-vacio", "No hay citas registradas." }
                } else {
                    div { class: "lista-citas",
                        for c in lista.iter() {
                            CitaCard { cita: c.clone() }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                Card {
                    CardContent {
                        div { class: "alert alert-error",
                            p { "No se pudieron cargar las citas: {err.user_message()}" }
                            Button {
                                onclick: move |_| recarga.set(recarga() + 1),
                                "Reintentar"
                            }
                        }
                    }
                }
            },
            None => rsx! {
                for _ in 0..3 {
                    Card {
                        CardContent {
                            Skeleton { style: "height: 4rem; width: 100%;" }
                        }
                    }
                }
            },
        }

        if modal_abierto() {
            AgendarCitaModal {
                fuente: FuenteMascotas::Todas,
                on_close: move |_| modal_abierto.set(false),
                on_success: move |_| recarga.set(recarga() + 1),
            }
        }
    }
}
