use dioxus::prelude::*;
use shared_types::NuevaEntrada;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Textarea};

use crate::session::use_api;

/// Form for appending a medical entry to a clinical history. The general
/// description is required; vitals are optional and sent only when given.
#[component]
pub fn FormEntradaHistoria(
    id_historia: i64,
    on_agregada: EventHandler<()>,
    on_cancelar: EventHandler<()>,
) -> Element {
    let api = use_api();

    let mut descripcion = use_signal(String::new);
    let mut observaciones = use_signal(String::new);
    let mut peso = use_signal(String::new);
    let mut temperatura = use_signal(String::new);
    let mut frecuencia = use_signal(String::new);

    let mut error_msg = use_signal(|| None::<String>);
    let mut enviando = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);

        if descripcion.read().trim().is_empty() {
            error_msg.set(Some("La descripción es obligatoria".to_string()));
            return;
        }

        let obs = observaciones();
        let entrada = NuevaEntrada {
            descripcion: descripcion.read().trim().to_string(),
            observaciones: if obs.trim().is_empty() { None } else { Some(obs.trim().to_string()) },
            peso_actual: peso.read().trim().parse().ok(),
            temperatura: temperatura.read().trim().parse().ok(),
            frecuencia_cardiaca: frecuencia.read().trim().parse().ok(),
        };

        let api = api.clone();
        spawn(async move {
            enviando.set(true);
            match api.agregar_entrada(id_historia, &entrada).await {
                Ok(_) => on_agregada.call(()),
                Err(err) => error_msg.set(Some(err.user_message())),
            }
            enviando.set(false);
        });
    };

    rsx! {
        Card { class: "form-entrada",
            CardHeader {
                CardTitle { "Nueva Entrada Médica" }
            }
            CardContent {
                if let Some(err) = error_msg() {
                    div { class: "alert alert-error", "{err}" }
                }
                form { onsubmit: handle_submit,
                    Textarea {
                        label: "Descripción General *",
                        placeholder: "Describe el motivo de consulta, diagnóstico y hallazgos principales...",
                        rows: 4,
                        value: descripcion(),
                        on_input: move |e: FormEvent| descripcion.set(e.value()),
                    }
                    div { class: "form-fila-tres",
                        Input {
                            label: "Peso (kg)",
                            input_type: "number",
                            placeholder: "25.50",
                            value: peso(),
                            on_input: move |e: FormEvent| peso.set(e.value()),
                        }
                        Input {
                            label: "Temperatura (°C)",
                            input_type: "number",
                            placeholder: "38.50",
                            value: temperatura(),
                            on_input: move |e: FormEvent| temperatura.set(e.value()),
                        }
                        Input {
                            label: "Frecuencia cardíaca (lpm)",
                            input_type: "number",
                            placeholder: "110",
                            value: frecuencia(),
                            on_input: move |e: FormEvent| frecuencia.set(e.value()),
                        }
                    }
                    Textarea {
                        label: "Observaciones",
                        placeholder: "Indicaciones y seguimiento...",
                        rows: 2,
                        value: observaciones(),
                        on_input: move |e: FormEvent| observaciones.set(e.value()),
                    }
                    div { class: "form-acciones",
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: enviando(),
                            onclick: move |_| on_cancelar.call(()),
                            "Cancelar"
                        }
                        Button {
                            button_type: "submit".to_string(),
                            disabled: enviando(),
                            if enviando() { "Guardando..." } else { "Guardar entrada" }
                        }
                    }
                }
            }
        }
    }
}
