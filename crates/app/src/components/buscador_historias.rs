use dioxus::prelude::*;
use shared_types::AppErrorKind;
use shared_ui::{Button, ButtonVariant, Card, CardContent, Input, Skeleton};

use crate::components::HistorialMascota;
use crate::session::use_api;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Vista {
    Lista,
    Busqueda,
}

/// History browser for veterinarians: pick a pet from the clinic listing or
/// search by id, then drill into its clinical history.
#[component]
pub fn BuscadorHistorias() -> Element {
    let api = use_api();

    let mut vista = use_signal(|| Vista::Lista);
    let mut id_texto = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    // The pet id whose history is being shown; None while browsing.
    let mut solicitud = use_signal(|| None::<i64>);

    let api_mascotas = api.clone();
    let mascotas = use_resource(move || {
        let api = api_mascotas.clone();
        async move { api.mascotas().await.ok() }
    });

    let api_historia = api.clone();
    let historia = use_resource(move || {
        let api = api_historia.clone();
        let id = solicitud();
        async move {
            match id {
                None => None,
                Some(id) => Some(api.historia_de_mascota(id).await),
            }
        }
    });

    let mut buscar_por_texto = move || {
        error_msg.set(None);
        match id_texto.read().trim().parse::<i64>() {
            Ok(id) if id > 0 => solicitud.set(Some(id)),
            _ => error_msg.set(Some(
                "Por favor selecciona o ingresa un ID de mascota válido".to_string(),
            )),
        }
    };

    rsx! {
        if solicitud().is_none() {
            div { class: "vista-toggle",
                Button {
                    variant: if vista() == Vista::Lista { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    onclick: move |_| vista.set(Vista::Lista),
                    "Ver Mascotas"
                }
                Button {
                    variant: if vista() == Vista::Busqueda { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    onclick: move |_| vista.set(Vista::Busqueda),
                    "Buscar por ID"
                }
            }

            if vista() == Vista::Lista {
                p { class: "muted", "Haz clic en una mascota para ver su historial médico completo" }
                match &*mascotas.read() {
                    Some(Some(lista)) => rsx! {
                        div { class: "grid-mascotas",
                            {lista.iter().map(|m| {
                                let id = m.id;
                                rsx! {
                                    button {
                                        class: "mascota-historia-card",
                                        onclick: move |_| {
                                            error_msg.set(None);
                                            solicitud.set(Some(id));
                                        },
                                        h4 { "{m.nombre}" }
                                        p { class: "muted", "{m.especie} · ID #{m.id}" }
                                        span { class: "muted", "Ver historial médico" }
                                    }
                                }
                            })}
                        }
                    },
                    Some(None) => rsx! {
                        div { class: "alert alert-error", "No se pudieron cargar las mascotas" }
                    },
                    None => rsx! {
                        Skeleton { style: "height: 6rem; width: 100%;" }
                    },
                }
            } else {
                Card {
                    CardContent {
                        div { class: "busqueda-fila",
                            Input {
                                label: "ID de Mascota",
                                input_type: "number",
                                placeholder: "Ej: 1",
                                value: id_texto(),
                                on_input: move |e: FormEvent| id_texto.set(e.value()),
                            }
                            Button {
                                onclick: move |_| buscar_por_texto(),
                                "Buscar"
                            }
                        }
                    }
                }
            }
        }

        if let Some(err) = error_msg() {
            div { class: "alert alert-error", "{err}" }
        }

        match &*historia.read() {
            Some(Some(Ok(h))) => rsx! {
                div { class: "historia-encontrada",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| solicitud.set(None),
                        "Cerrar historial"
                    }
                    HistorialMascota { historia: h.clone() }
                }
            },
            Some(Some(Err(err))) => rsx! {
                div { class: "alert alert-error",
                    p {
                        {match err.kind {
                            AppErrorKind::NotFound => "No se encontró historia clínica para esta mascota".to_string(),
                            _ => err.user_message(),
                        }}
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| solicitud.set(None),
                        "Volver"
                    }
                }
            },
            Some(None) => rsx! {},
            None => rsx! {
                if solicitud().is_some() {
                    Skeleton { style: "height: 6rem; width: 100%;" }
                }
            },
        }
    }
}
