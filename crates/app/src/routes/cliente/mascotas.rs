use dioxus::prelude::*;
use shared_types::Mascota;
use shared_ui::{Button, Card, CardContent, PageActions, PageHeader, PageSubtitle, PageTitle, Skeleton};

use crate::components::{AgendarCitaModal, HistorialMascotaModal, MascotaCard};
use crate::routes::Route;
use crate::session::use_api;

/// `/cliente/mascotas` — the client's pets, with scheduling and history
/// shortcuts on every card.
#[component]
pub fn MascotasPage() -> Element {
    let api = use_api();

    let mut modal_abierto = use_signal(|| false);
    let mut mascota_seleccionada = use_signal(|| None::<i64>);
    let mut historial_de = use_signal(|| None::<Mascota>);
    let mut recarga = use_signal(|| 0u32);

    let mascotas = use_resource(move || {
        let api = api.clone();
        let _tick = recarga();
        async move { api.mascotas_mias().await }
    });

    rsx! {
        PageHeader {
            div {
                PageTitle { "Mis Mascotas" }
                PageSubtitle { "Accede rápidamente a la información y agenda nuevas citas." }
            }
            PageActions {
                Button {
                    onclick: move |_| {
                        mascota_seleccionada.set(None);
                        modal_abierto.set(true);
                    },
                    "+ Nueva cita"
                }
            }
        }

        match &*mascotas.read() {
            Some(Ok(lista)) => rsx! {
                if lista.is_empty() {
                    p { class: "muted estado-vacio", "No tienes mascotas registradas aún." }
                } else {
                    div { class: "grid-mascotas",
                        for m in lista.iter() {
                            MascotaCard {
                                mascota: m.clone(),
                                on_agendar: move |id| {
                                    mascota_seleccionada.set(Some(id));
                                    modal_abierto.set(true);
                                },
                                on_ver_historial: move |mascota| historial_de.set(Some(mascota)),
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                Card {
                    CardContent {
                        div { class: "alert alert-error",
                            p { "No se pudieron cargar tus mascotas: {err.user_message()}" }
                            Button {
                                onclick: move |_| recarga.set(recarga() + 1),
                                "Reintentar"
                            }
                        }
                    }
                }
            },
            None => rsx! {
                div { class: "grid-mascotas",
                    for _ in 0..3 {
                        Card {
                            CardContent {
                                Skeleton { style: "height: 6rem; width: 100%;" }
                            }
                        }
                    }
                }
            },
        }

        if modal_abierto() {
            AgendarCitaModal {
                mascota_preseleccionada: mascota_seleccionada(),
                on_close: move |_| {
                    modal_abierto.set(false);
                    mascota_seleccionada.set(None);
                },
                on_success: move |_| {
                    navigator().push(Route::ClienteCitas {});
                },
            }
        }

        if let Some(mascota) = historial_de() {
            HistorialMascotaModal {
                mascota: mascota,
                on_close: move |_| historial_de.set(None),
            }
        }
    }
}
