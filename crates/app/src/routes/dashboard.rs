use dioxus::prelude::*;
use shared_types::Rol;

use crate::routes::Route;
use crate::session::use_session;

/// Pure role → dashboard mapping. Unknown or missing roles resolve to the
/// login page.
pub fn dashboard_route(rol: Option<Rol>) -> Route {
    match rol {
        Some(Rol::Cliente) => Route::ClienteMascotas {},
        Some(Rol::Veterinario) => Route::VeterinarioAgenda {},
        Some(Rol::Recepcionista) => Route::RecepcionistaCitas {},
        Some(Rol::Admin) => Route::AdminDashboard {},
        None => Route::Login {},
    }
}

/// `/dashboard` — resolves the signed-in role to its landing page.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let destino = dashboard_route(session.rol_parsed());
    navigator().replace(destino);

    rsx! {
        div { class: "guard-loading",
            p { "Redirigiendo..." }
        }
    }
}
