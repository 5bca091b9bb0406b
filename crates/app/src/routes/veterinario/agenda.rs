use dioxus::prelude::*;
use shared_types::EstadoCita;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, Skeleton};

use crate::cache;
use crate::components::{BuscadorHistorias, CitasHoyTable};
use crate::session::use_api;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Vista {
    Agendas,
    Historias,
    Reportes,
}

/// `/veterinario/agenda` — the vet workspace: today's agenda plus quick
/// access to histories and reports through a view toggle.
#[component]
pub fn AgendaPage() -> Element {
    let api = use_api();

    let mut vista = use_signal(|| Vista::Agendas);
    let mut recarga = use_signal(|| 0u32);
    let mut error_accion = use_signal(|| None::<String>);

    let api_citas = api.clone();
    let citas = use_resource(move || {
        let api = api_citas.clone();
        let _tick = recarga();
        async move { api.citas_hoy().await }
    });

    let api_completar = api.clone();
    let completar = move |id: i64| {
        let api = api_completar.clone();
        spawn(async move {
            error_accion.set(None);
            match api.actualizar_estado_cita(id, &EstadoCita::Completada).await {
                Ok(()) => {
                    // Today's badge count just changed.
                    cache::invalidate_citas_hoy();
                    recarga.set(recarga() + 1);
                }
                Err(err) => {
                    error_accion.set(Some(format!(
                        "Error al completar la cita: {}",
                        err.user_message()
                    )));
                }
            }
        });
    };

    rsx! {
        PageHeader {
            div {
                PageTitle { "Panel Veterinario" }
                PageSubtitle { "Gestiona tus citas y consultas médicas" }
            }
        }

        div { class: "vista-toggle",
            Button {
                variant: if vista() == Vista::Agendas { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                onclick: move |_| vista.set(Vista::Agendas),
                "Agendas"
            }
            Button {
                variant: if vista() == Vista::Historias { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                onclick: move |_| vista.set(Vista::Historias),
                "Historias"
            }
            Button {
                variant: if vista() == Vista::Reportes { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                onclick: move |_| vista.set(Vista::Reportes),
                "Reportes"
            }
        }

        match vista() {
            Vista::Agendas => rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Agenda de Hoy" }
                        CardDescription { "Revisa tus citas y actúa rápidamente." }
                    }
                    CardContent {
                        if let Some(err) = error_accion() {
                            div { class: "alert alert-error", "{err}" }
                        }
                        match &*citas.read() {
                            Some(Ok(lista)) => rsx! {
                                if lista.is_empty() {
                                    p { class: "muted estado-vacio",
                                        "No tienes citas programadas para hoy"
                                    }
                                } else {
                                    CitasHoyTable {
                                        citas: lista.clone(),
                                        on_completar: completar,
                                    }
                                }
                            },
                            Some(Err(err)) => rsx! {
                                div { class: "alert alert-error",
                                    p { "{err.user_message()}" }
                                    Button {
                                        onclick: move |_| recarga.set(recarga() + 1),
                                        "Reintentar"
                                    }
                                }
                            },
                            None => rsx! {
                                Skeleton { style: "height: 8rem; width: 100%;" }
                            },
                        }
                    }
                }
            },
            Vista::Historias => rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Historias Clínicas" }
                        CardDescription { "Busca y consulta el historial médico de las mascotas." }
                    }
                    CardContent {
                        BuscadorHistorias {}
                    }
                }
            },
            Vista::Reportes => rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Reportes" }
                    }
                    CardContent { "Próximamente..." }
                }
            },
        }
    }
}
