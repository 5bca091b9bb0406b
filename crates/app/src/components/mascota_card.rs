use dioxus::prelude::*;
use shared_types::Mascota;
use shared_ui::{Button, ButtonVariant, Card, CardContent};

/// Pet card with quick actions: schedule an appointment or open the
/// clinical history.
#[component]
pub fn MascotaCard(
    mascota: Mascota,
    on_agendar: EventHandler<i64>,
    on_ver_historial: EventHandler<Mascota>,
) -> Element {
    let id = mascota.id;
    let para_historial = mascota.clone();

    rsx! {
        Card { class: "mascota-card",
            CardContent {
                h3 { class: "mascota-card-nombre", "{mascota.nombre}" }
                p { class: "muted", "{mascota.especie} · {mascota.edad_texto()}" }
                if !mascota.raza.is_empty() {
                    p { class: "muted", "{mascota.raza}" }
                }
                div { class: "mascota-card-actions",
                    Button { onclick: move |_| on_agendar.call(id), "Agendar cita" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_ver_historial.call(para_historial.clone()),
                        "Ver historial"
                    }
                }
            }
        }
    }
}
