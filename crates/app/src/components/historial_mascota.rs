use dioxus::prelude::*;
use shared_types::HistoriaClinica;
use shared_ui::{Button, Card, CardContent, Skeleton};

use crate::components::{EntradaCard, FormEntradaHistoria};
use crate::format::formatea_fecha;
use crate::session::use_api;

/// A clinical history with its entries and the new-entry form (vet view).
#[component]
pub fn HistorialMascota(historia: HistoriaClinica) -> Element {
    let api = use_api();
    let id_historia = historia.id_historia;

    let mut mostrar_form = use_signal(|| false);
    let mut recarga = use_signal(|| 0u32);

    let entradas = use_resource(move || {
        let api = api.clone();
        let _tick = recarga();
        async move { api.entradas(id_historia).await }
    });

    rsx! {
        Card { class: "historia-cabecera",
            CardContent {
                div { class: "historia-cabecera-fila",
                    div {
                        h3 { "Historia Clínica" }
                        p { class: "muted",
                            "Historia #{historia.id_historia} · Mascota #{historia.id_mascota}"
                        }
                        p { class: "muted", "Creada: {formatea_fecha(&historia.fecha_creacion)}" }
                    }
                    Button {
                        onclick: move |_| mostrar_form.set(!mostrar_form()),
                        if mostrar_form() { "Cancelar" } else { "Nueva Entrada" }
                    }
                }
            }
        }

        if mostrar_form() {
            FormEntradaHistoria {
                id_historia: id_historia,
                on_agregada: move |_| {
                    mostrar_form.set(false);
                    recarga.set(recarga() + 1);
                },
                on_cancelar: move |_| mostrar_form.set(false),
            }
        }

        match &*entradas.read() {
            Some(Ok(lista)) => rsx! {
                if lista.is_empty() {
                    p { class: "muted", "Aún no hay entradas médicas registradas." }
                } else {
                    div { class: "lista-entradas",
                        for entrada in lista.iter() {
                            EntradaCard { entrada: entrada.clone() }
                        }
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
                Skeleton { style: "height: 4rem; width: 100%; margin-bottom: 0.5rem;" }
                Skeleton { style: "height: 4rem; width: 100%;" }
            },
        }
    }
}
