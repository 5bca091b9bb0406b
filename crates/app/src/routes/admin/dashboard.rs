use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageActions, PageHeader, PageSubtitle, PageTitle, Skeleton};

use crate::components::TarjetaMetrica;
use crate::routes::Route;
use crate::session::use_api;

/// `/admin/dashboard` — clinic metrics with manual refresh, quick links and
/// a low-stock warning.
#[component]
pub fn PanelControlPage() -> Element {
    let api = use_api();
    let mut recarga = use_signal(|| 0u32);

    let metricas = use_resource(move || {
        let api = api.clone();
        let _tick = recarga();
        async move { api.metricas().await }
    });

    rsx! {
        PageHeader {
            div {
                PageTitle { "Panel de Control" }
                PageSubtitle { "Visión general del funcionamiento de la clínica" }
            }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| recarga.set(recarga() + 1),
                    "Actualizar"
                }
            }
        }

        match &*metricas.read() {
            Some(Ok(m)) => rsx! {
                div { class: "grid-metricas",
                    TarjetaMetrica { titulo: "Citas este mes", valor: m.citas_mes }
                    TarjetaMetrica { titulo: "Mascotas activas", valor: m.mascotas_activas }
                    TarjetaMetrica { titulo: "Productos con stock bajo", valor: m.productos_minimos }
                }

                if m.productos_minimos > 0 {
                    div { class: "alert alert-aviso",
                        p {
                            "Hay "
                            strong { "{m.productos_minimos}" }
                            " producto(s) con stock mínimo que requieren reposición."
                        }
                        Link { to: Route::AdminInventario {},
                            Button { variant: ButtonVariant::Secondary, "Ver Inventario" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Accesos Rápidos" }
                    }
                    CardContent {
                        div { class: "accesos-rapidos",
                            Link { to: Route::AdminVeterinarios {}, class: "acceso-rapido",
                                strong { "Veterinarios" }
                                span { class: "muted", "Gestionar personal" }
                            }
                            Link { to: Route::AdminInventario {}, class: "acceso-rapido",
                                strong { "Inventario" }
                                span { class: "muted", "Control de stock" }
                            }
                            Link { to: Route::AdminPagos {}, class: "acceso-rapido",
                                strong { "Pagos" }
                                span { class: "muted", "Gestión financiera" }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                Card {
                    CardContent {
                        div { class: "alert alert-error",
                            p { "Error al cargar métricas: {err.user_message()}" }
                            Button {
                                onclick: move |_| recarga.set(recarga() + 1),
                                "Reintentar"
                            }
                        }
                    }
                }
            },
            None => rsx! {
                div { class: "grid-metricas",
                    for _ in 0..3 {
                        Card {
                            CardContent {
                                Skeleton { style: "height: 3rem; width: 100%;" }
                            }
                        }
                    }
                }
            },
        }
    }
}
