use chrono::{Local, Months};
use dioxus::prelude::*;
use shared_types::{validar_ahora, AppErrorKind, FormCita};
use shared_ui::{Button, ButtonVariant, Dialog, FormSelect, Input, Textarea};

use crate::cache;
use crate::session::use_api;

/// Which pet listing feeds the pet selector: the signed-in client's own
/// pets, or the whole clinic (reception desk).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FuenteMascotas {
    Mias,
    Todas,
}

/// Time slots offered by the scheduler: every half hour within business
/// hours, `HH:MM:SS`.
pub fn opciones_hora() -> Vec<String> {
    let mut opciones = Vec::new();
    for h in 8..18 {
        opciones.push(format!("{h:02}:00:00"));
        opciones.push(format!("{h:02}:30:00"));
    }
    opciones
}

/// Scheduling dialog. Mount it only while open so each opening starts from
/// a clean form (and picks up a newly preselected pet).
#[component]
pub fn AgendarCitaModal(
    #[props(default)] mascota_preseleccionada: Option<i64>,
    #[props(default = FuenteMascotas::Mias)] fuente: FuenteMascotas,
    on_close: EventHandler<()>,
    on_success: EventHandler<()>,
) -> Element {
    let api = use_api();

    let mut id_mascota = use_signal(|| mascota_preseleccionada.unwrap_or(0));
    let mut id_veterinario = use_signal(|| 0i64);
    let mut fecha = use_signal(String::new);
    let mut hora = use_signal(String::new);
    let mut duracion = use_signal(|| "30".to_string());
    let mut motivo = use_signal(String::new);
    let mut observaciones = use_signal(String::new);

    let mut error_msg = use_signal(|| None::<String>);
    let mut success_msg = use_signal(|| None::<String>);
    let mut enviando = use_signal(|| false);

    let api_mascotas = api.clone();
    let mascotas = use_resource(move || {
        let api = api_mascotas.clone();
        async move {
            match fuente {
                FuenteMascotas::Mias => api.mascotas_mias().await.ok(),
                FuenteMascotas::Todas => api.mascotas().await.ok(),
            }
        }
    });

    let api_vets = api.clone();
    let veterinarios = use_resource(move || {
        let api = api_vets.clone();
        async move { api.veterinarios_activos().await.ok() }
    });

    let hoy = Local::now().date_naive();
    let fecha_min = hoy.format("%Y-%m-%d").to_string();
    let fecha_max = hoy
        .checked_add_months(Months::new(3))
        .unwrap_or(hoy)
        .format("%Y-%m-%d")
        .to_string();

    let api_envio = api.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);
        success_msg.set(None);

        let obs = observaciones();
        let form = FormCita {
            id_mascota: id_mascota(),
            id_veterinario: id_veterinario(),
            fecha_cita: fecha(),
            hora_cita: hora(),
            duracion_minutos: duracion.read().parse().unwrap_or(0),
            motivo: motivo(),
            observaciones: if obs.trim().is_empty() { None } else { Some(obs) },
            ..FormCita::default()
        };

        if let Err(mensaje) = validar_ahora(&form) {
            error_msg.set(Some(mensaje));
            return;
        }

        let api = api_envio.clone();
        spawn(async move {
            enviando.set(true);
            match api.agendar_cita(&form).await {
                Ok(_) => {
                    cache::invalidate_mis_citas();
                    success_msg.set(Some(
                        "Cita agendada exitosamente. Recibirás confirmación por correo."
                            .to_string(),
                    ));
                    on_success.call(());
                }
                Err(err) => {
                    // The backend answers 400 when the pet belongs to
                    // someone else; everything else keeps its generic text.
                    let mensaje = if err.kind == AppErrorKind::BadRequest {
                        "No puedes agendar citas para mascotas que no son tuyas.".to_string()
                    } else {
                        err.user_message()
                    };
                    error_msg.set(Some(mensaje));
                }
            }
            enviando.set(false);
        });
    };

    rsx! {
        Dialog {
            open: true,
            title: "Agendar Nueva Cita",
            on_close: move |_| on_close.call(()),
            form { class: "form-cita", onsubmit: handle_submit,
                FormSelect {
                    label: "Selecciona tu mascota *",
                    value: "{id_mascota}",
                    onchange: move |e: Event<FormData>| {
                        id_mascota.set(e.value().parse().unwrap_or(0));
                    },
                    option { value: "0", "-- Elige una mascota --" }
                    {match &*mascotas.read() {
                        Some(Some(lista)) => rsx! {
                            for m in lista.iter() {
                                option { value: "{m.id}", "{m.etiqueta()}" }
                            }
                        },
                        _ => rsx! {
                            option { value: "0", disabled: true, "Cargando mascotas..." }
                        },
                    }}
                }

                FormSelect {
                    label: "Elige un veterinario *",
                    value: "{id_veterinario}",
                    onchange: move |e: Event<FormData>| {
                        id_veterinario.set(e.value().parse().unwrap_or(0));
                    },
                    option { value: "0", "-- Elige un veterinario --" }
                    {match &*veterinarios.read() {
                        Some(Some(lista)) => rsx! {
                            for v in lista.iter() {
                                option { value: "{v.id_veterinario}", "{v.nombre}" }
                            }
                        },
                        _ => rsx! {
                            option { value: "0", disabled: true, "Cargando..." }
                        },
                    }}
                }

                div { class: "form-fila",
                    Input {
                        label: "Fecha de la cita *",
                        input_type: "date",
                        value: fecha(),
                        min: Some(fecha_min),
                        max: Some(fecha_max),
                        on_input: move |e: FormEvent| fecha.set(e.value()),
                    }
                    FormSelect {
                        label: "Hora *",
                        value: "{hora}",
                        onchange: move |e: Event<FormData>| hora.set(e.value()),
                        option { value: "", "-- Selecciona hora --" }
                        for opcion in opciones_hora() {
                            option { value: "{opcion}", {opcion[..5].to_string()} }
                        }
                    }
                }

                Input {
                    label: "Duración (minutos) *",
                    input_type: "number",
                    value: duracion(),
                    min: Some("15".to_string()),
                    max: Some("120".to_string()),
                    on_input: move |e: FormEvent| duracion.set(e.value()),
                }

                Textarea {
                    label: "Motivo de la consulta *",
                    placeholder: "Ej: Vacunación, control general, seguimiento...",
                    rows: 3,
                    value: motivo(),
                    on_input: move |e: FormEvent| motivo.set(e.value()),
                }

                Textarea {
                    label: "Observaciones (opcional)",
                    placeholder: "Información adicional...",
                    rows: 2,
                    value: observaciones(),
                    on_input: move |e: FormEvent| observaciones.set(e.value()),
                }

                if let Some(err) = error_msg() {
                    div { class: "alert alert-error", "{err}" }
                }
                if let Some(ok) = success_msg() {
                    div { class: "alert alert-success", "{ok}" }
                }

                div { class: "form-acciones",
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: enviando(),
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    Button {
                        button_type: "submit".to_string(),
                        disabled: enviando(),
                        if enviando() { "Agendando..." } else { "Agendar Cita" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn los_turnos_cubren_el_horario_laboral_cada_media_hora() {
        let opciones = opciones_hora();
        assert_eq!(opciones.len(), 20);
        assert_eq!(opciones.first().unwrap(), "08:00:00");
        assert_eq!(opciones.last().unwrap(), "17:30:00");
        assert!(opciones.contains(&"12:30:00".to_string()));
        assert!(!opciones.contains(&"18:00:00".to_string()));
    }
}
