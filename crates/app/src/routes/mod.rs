pub mod admin;
pub mod cliente;
pub mod dashboard;
pub mod login;
pub mod placeholder;
pub mod recepcionista;
pub mod veterinario;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendarCheck, LdClipboardList, LdCreditCard, LdLayoutDashboard, LdLogOut, LdPackage,
    LdPawPrint, LdReceipt, LdStethoscope, LdTrendingUp, LdUserCog, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Rol;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant};

use crate::cache;
use crate::guard::RoleGate;
use crate::nav;
use crate::session::{use_api, use_session};

use dashboard::Dashboard;
use login::Login;

/// Application routes. Everything under `RequireAuth` needs a token; the
/// per-role pages additionally gate on the session role.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(RequireAuth)]
    #[route("/dashboard")]
    Dashboard {},
    #[layout(AppLayout)]
    // ── CLIENTE ──
    #[route("/cliente/mascotas")]
    ClienteMascotas {},
    #[route("/cliente/citas")]
    ClienteCitas {},
    #[route("/cliente/facturacion")]
    ClienteFacturacion {},
    // ── VETERINARIO ──
    #[route("/veterinario/agenda")]
    VeterinarioAgenda {},
    #[route("/veterinario/historias")]
    VeterinarioHistorias {},
    #[route("/veterinario/reportes")]
    VeterinarioReportes {},
    // ── RECEPCIONISTA ──
    #[route("/recepcionista/citas")]
    RecepcionistaCitas {},
    #[route("/recepcionista/clientes")]
    RecepcionistaClientes {},
    // ── ADMIN ──
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/usuarios")]
    AdminUsuarios {},
    #[route("/admin/veterinarios")]
    AdminVeterinarios {},
    #[route("/admin/inventario")]
    AdminInventario {},
    #[route("/admin/pagos")]
    AdminPagos {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout: no token means straight back to the login page.
#[component]
fn RequireAuth() -> Element {
    let session = use_session();

    if !session.is_authenticated() {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "guard-loading",
                p { "Redirigiendo al inicio de sesión..." }
            }
        };
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Shell for every protected page: fixed navbar, role-driven sidebar and the
/// routed content area.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();

    let rol_texto = session
        .rol
        .read()
        .clone()
        .unwrap_or_else(|| "Invitado".to_string());
    let grupos = nav::menu_for(session.rol_parsed());

    rsx! {
        header { class: "navbar",
            div { class: "navbar-brand",
                Icon::<LdPawPrint> { icon: LdPawPrint, width: 24, height: 24 }
                span { "Clínica Veterinaria" }
            }
            div { class: "navbar-right",
                Badge { variant: BadgeVariant::Secondary, "{rol_texto}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        session.logout();
                        navigator().push(Route::Login {});
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                    span { "Salir" }
                }
            }
        }
        div { class: "layout",
            aside { class: "sidebar",
                for grupo in grupos {
                    div { class: "sidebar-group",
                        h4 { class: "sidebar-title", "{grupo.title}" }
                        nav { class: "sidebar-nav",
                            for entry in grupo.items.iter() {
                                SidebarLink {
                                    item: entry.clone(),
                                    active: route == entry.route,
                                }
                            }
                        }
                    }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn SidebarLink(item: nav::MenuItem, active: bool) -> Element {
    let class = if active {
        "sidebar-link sidebar-link-active"
    } else {
        "sidebar-link"
    };

    rsx! {
        Link { to: item.route.clone(), class: "{class}",
            MenuGlyph { icon: item.icon }
            span { "{item.label}" }
            match item.badge {
                Some(nav::MenuBadge::CitasHoy) => rsx! { CitasHoyBadge {} },
                Some(nav::MenuBadge::MisCitas) => rsx! { MisCitasBadge {} },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn MenuGlyph(icon: nav::MenuIcon) -> Element {
    match icon {
        nav::MenuIcon::Mascotas => rsx! { Icon::<LdPawPrint> { icon: LdPawPrint, width: 18, height: 18 } },
        nav::MenuIcon::Citas => rsx! { Icon::<LdCalendarCheck> { icon: LdCalendarCheck, width: 18, height: 18 } },
        nav::MenuIcon::Facturacion => rsx! { Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 } },
        nav::MenuIcon::Historias => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
        nav::MenuIcon::Reportes => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
        nav::MenuIcon::Clientes => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        nav::MenuIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        nav::MenuIcon::Usuarios => rsx! { Icon::<LdUserCog> { icon: LdUserCog, width: 18, height: 18 } },
        nav::MenuIcon::Veterinarios => rsx! { Icon::<LdStethoscope> { icon: LdStethoscope, width: 18, height: 18 } },
        nav::MenuIcon::Inventario => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        nav::MenuIcon::Pagos => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
    }
}

/// Count of today's appointments, served from the session cache while fresh.
#[component]
fn CitasHoyBadge() -> Element {
    let api = use_api();
    let count = use_resource(move || {
        let api = api.clone();
        async move {
            if let Some(n) = cache::get::<i64>(cache::keys::CITAS_HOY) {
                return Some(n);
            }
            match api.citas_hoy().await {
                Ok(citas) => {
                    let n = citas.len() as i64;
                    cache::put(cache::keys::CITAS_HOY, &n);
                    Some(n)
                }
                Err(err) => {
                    tracing::debug!(%err, "no se pudo actualizar la insignia de citas de hoy");
                    None
                }
            }
        }
    });

    let rendered = match *count.read() {
        Some(Some(n)) if n > 0 => rsx! {
            Badge { variant: BadgeVariant::Primary, "{n}" }
        },
        _ => rsx! {},
    };
    rendered
}

/// Count of the client's appointments, served from the session cache.
#[component]
fn MisCitasBadge() -> Element {
    let api = use_api();
    let count = use_resource(move || {
        let api = api.clone();
        async move {
            if let Some(n) = cache::get::<i64>(cache::keys::MIS_CITAS) {
                return Some(n);
            }
            match api.mis_citas().await {
                Ok(citas) => {
                    let n = citas.len() as i64;
                    cache::put(cache::keys::MIS_CITAS, &n);
                    Some(n)
                }
                Err(err) => {
                    tracing::debug!(%err, "no se pudo actualizar la insignia de mis citas");
                    None
                }
            }
        }
    });

    let rendered = match *count.read() {
        Some(Some(n)) if n > 0 => rsx! {
            Badge { variant: BadgeVariant::Primary, "{n}" }
        },
        _ => rsx! {},
    };
    rendered
}

// ── Route components ─────────────────────────────────────────────────────

#[component]
fn ClienteMascotas() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Cliente],
            cliente::mascotas::MascotasPage {}
        }
    }
}

#[component]
fn ClienteCitas() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Cliente],
            cliente::citas::CitasPage {}
        }
    }
}

#[component]
fn ClienteFacturacion() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Cliente],
            placeholder::ComingSoon { titulo: "Facturación" }
        }
    }
}

#[component]
fn VeterinarioAgenda() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Veterinario],
            veterinario::agenda::AgendaPage {}
        }
    }
}

#[component]
fn VeterinarioHistorias() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Veterinario],
            veterinario::historias::HistoriasPage {}
        }
    }
}

#[component]
fn VeterinarioReportes() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Veterinario],
            placeholder::ComingSoon { titulo: "Reportes" }
        }
    }
}

#[component]
fn RecepcionistaCitas() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Recepcionista],
            recepcionista::citas::GestionCitasPage {}
        }
    }
}

#[component]
fn RecepcionistaClientes() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Recepcionista],
            placeholder::ComingSoon { titulo: "Clientes" }
        }
    }
}

#[component]
fn AdminDashboard() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Admin],
            admin::dashboard::PanelControlPage {}
        }
    }
}

#[component]
fn AdminUsuarios() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Admin],
            admin::usuarios::UsuariosPage {}
        }
    }
}

#[component]
fn AdminVeterinarios() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Admin],
            placeholder::ComingSoon { titulo: "Veterinarios" }
        }
    }
}

#[component]
fn AdminInventario() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Admin],
            placeholder::InventarioDemo {}
        }
    }
}

#[component]
fn AdminPagos() -> Element {
    rsx! {
        RoleGate { allowed: vec![Rol::Admin],
            placeholder::ComingSoon { titulo: "Pagos" }
        }
    }
}

/// Unknown paths fall back to the login page, which in turn resolves
/// signed-in users to their dashboard.
#[component]
fn NotFound(route: Vec<String>) -> Element {
    navigator().replace(Route::Login {});
    rsx! {
        div { class: "guard-loading",
            p { "Página no encontrada. Redirigiendo..." }
        }
    }
}
