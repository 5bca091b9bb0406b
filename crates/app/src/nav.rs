use shared_types::Rol;

use crate::routes::Route;

/// Icon identifier for a menu entry; the sidebar maps these to lucide
/// glyphs. Kept as data so the composer stays pure and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Mascotas,
    Citas,
    Facturacion,
    Historias,
    Reportes,
    Clientes,
    Dashboard,
    Usuarios,
    Veterinarios,
    Inventario,
    Pagos,
}

/// Which live badge count, if any, decorates a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuBadge {
    CitasHoy,
    MisCitas,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: MenuIcon,
    pub badge: Option<MenuBadge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

fn item(route: Route, label: &'static str, icon: MenuIcon) -> MenuItem {
    MenuItem {
        route,
        label,
        icon,
        badge: None,
    }
}

fn item_con_badge(
    route: Route,
    label: &'static str,
    icon: MenuIcon,
    badge: MenuBadge,
) -> MenuItem {
    MenuItem {
        route,
        label,
        icon,
        badge: Some(badge),
    }
}

/// Compose the sidebar menu for a role. Unknown or missing roles get an
/// empty menu: the guard will already be redirecting them.
pub fn menu_for(rol: Option<Rol>) -> Vec<MenuGroup> {
    match rol {
        Some(Rol::Cliente) => vec![MenuGroup {
            title: "Mi cuenta",
            items: vec![
                item(Route::ClienteMascotas {}, "Mascotas", MenuIcon::Mascotas),
                item_con_badge(
                    Route::ClienteCitas {},
                    "Citas",
                    MenuIcon::Citas,
                    MenuBadge::MisCitas,
                ),
                item(Route::ClienteFacturacion {}, "Facturación", MenuIcon::Facturacion),
            ],
        }],
        Some(Rol::Veterinario) => vec![MenuGroup {
            title: "Consultorio",
            items: vec![
                item_con_badge(
                    Route::VeterinarioAgenda {},
                    "Agenda",
                    MenuIcon::Citas,
                    MenuBadge::CitasHoy,
                ),
                item(Route::VeterinarioHistorias {}, "Historias", MenuIcon::Historias),
                item(Route::VeterinarioReportes {}, "Reportes", MenuIcon::Reportes),
            ],
        }],
        Some(Rol::Recepcionista) => vec![MenuGroup {
            title: "Recepción",
            items: vec![
                item(Route::RecepcionistaCitas {}, "Citas", MenuIcon::Citas),
                item(Route::RecepcionistaClientes {}, "Clientes", MenuIcon::Clientes),
            ],
        }],
        Some(Rol::Admin) => vec![MenuGroup {
            title: "Administración",
            items: vec![
                item(Route::AdminDashboard {}, "Dashboard", MenuIcon::Dashboard),
                item(Route::AdminUsuarios {}, "Usuarios", MenuIcon::Usuarios),
                item(Route::AdminVeterinarios {}, "Veterinarios", MenuIcon::Veterinarios),
                item(Route::AdminInventario {}, "Inventario", MenuIcon::Inventario),
                item(Route::AdminPagos {}, "Pagos", MenuIcon::Pagos),
            ],
        }],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(rol: Rol) -> Vec<&'static str> {
        menu_for(Some(rol))
            .into_iter()
            .flat_map(|g| g.items)
            .map(|i| i.label)
            .collect()
    }

    #[test]
    fn menu_de_cliente() {
        let grupos = menu_for(Some(Rol::Cliente));
        assert_eq!(grupos.len(), 1);
        assert_eq!(grupos[0].title, "Mi cuenta");
        assert_eq!(labels(Rol::Cliente), vec!["Mascotas", "Citas", "Facturación"]);
    }

    #[test]
    fn menu_de_veterinario() {
        let grupos = menu_for(Some(Rol::Veterinario));
        assert_eq!(grupos[0].title, "Consultorio");
        assert_eq!(labels(Rol::Veterinario), vec!["Agenda", "Historias", "Reportes"]);
    }

    #[test]
    fn menu_de_recepcionista() {
        assert_eq!(labels(Rol::Recepcionista), vec!["Citas", "Clientes"]);
    }

    #[test]
    fn menu_de_admin() {
        assert_eq!(
            labels(Rol::Admin),
            vec!["Dashboard", "Usuarios", "Veterinarios", "Inventario", "Pagos"]
        );
    }

    #[test]
    fn sin_rol_no_hay_menu() {
        assert!(menu_for(None).is_empty());
    }

    #[test]
    fn las_insignias_estan_donde_corresponden() {
        let cliente = menu_for(Some(Rol::Cliente));
        let citas = cliente[0].items.iter().find(|i| i.label == "Citas").unwrap();
        assert_eq!(citas.badge, Some(MenuBadge::MisCitas));

        let vet = menu_for(Some(Rol::Veterinario));
        let agenda = vet[0].items.iter().find(|i| i.label == "Agenda").unwrap();
        assert_eq!(agenda.badge, Some(MenuBadge::CitasHoy));

        let admin = menu_for(Some(Rol::Admin));
        assert!(admin[0].items.iter().all(|i| i.badge.is_none()));
    }
}
