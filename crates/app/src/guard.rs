use dioxus::prelude::*;
use shared_types::Rol;

use crate::routes::Route;
use crate::session::use_session;

/// What a guard decided for the current navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content.
    Allow,
    /// No token: back to the login page.
    RedirectLogin,
    /// Authenticated but the role is not in the allowed set: back to the
    /// role resolver, which lands the user on their own dashboard.
    RedirectDashboard,
}

/// Pure guard logic. `allowed = None` means any authenticated user; roles
/// match case-insensitively via [`Rol::parse`].
pub fn evaluate(
    token: Option<&str>,
    rol: Option<&str>,
    allowed: Option<&[Rol]>,
) -> GuardDecision {
    if token.is_none() {
        return GuardDecision::RedirectLogin;
    }
    match allowed {
        None => GuardDecision::Allow,
        Some(set) => match rol.and_then(Rol::parse) {
            Some(r) if set.contains(&r) => GuardDecision::Allow,
            _ => GuardDecision::RedirectDashboard,
        },
    }
}

/// Conditionally render children for the allowed roles; anyone else is sent
/// to `/dashboard` (or `/login` if the session is gone).
#[component]
pub fn RoleGate(allowed: Vec<Rol>, children: Element) -> Element {
    let session = use_session();
    let token = session.token.read().clone();
    let rol = session.rol.read().clone();

    match evaluate(token.as_deref(), rol.as_deref(), Some(&allowed)) {
        GuardDecision::Allow => rsx! {
            {children}
        },
        GuardDecision::RedirectLogin => {
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "guard-loading", p { "Redirigiendo al inicio de sesión..." } }
            }
        }
        GuardDecision::RedirectDashboard => {
            navigator().replace(Route::Dashboard {});
            rsx! {
                div { class: "guard-loading", p { "No tienes acceso a esta sección." } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOLO_CLIENTE: &[Rol] = &[Rol::Cliente];
    const PERSONAL: &[Rol] = &[Rol::Veterinario, Rol::Recepcionista, Rol::Admin];

    #[test]
    fn sin_token_redirige_a_login() {
        assert_eq!(
            evaluate(None, Some("CLIENTE"), Some(SOLO_CLIENTE)),
            GuardDecision::RedirectLogin
        );
        assert_eq!(evaluate(None, None, None), GuardDecision::RedirectLogin);
    }

    #[test]
    fn token_sin_restriccion_de_rol_permite() {
        assert_eq!(evaluate(Some("t"), None, None), GuardDecision::Allow);
        assert_eq!(evaluate(Some("t"), Some("CLIENTE"), None), GuardDecision::Allow);
    }

    #[test]
    fn rol_permitido_renderiza() {
        assert_eq!(
            evaluate(Some("t"), Some("CLIENTE"), Some(SOLO_CLIENTE)),
            GuardDecision::Allow
        );
    }

    #[test]
    fn el_rol_se_compara_sin_distincion_de_mayusculas() {
        assert_eq!(
            evaluate(Some("t"), Some("cliente"), Some(SOLO_CLIENTE)),
            GuardDecision::Allow
        );
    }

    #[test]
    fn rol_fuera_del_conjunto_redirige_al_dashboard() {
        assert_eq!(
            evaluate(Some("t"), Some("ADMIN"), Some(SOLO_CLIENTE)),
            GuardDecision::RedirectDashboard
        );
        assert_eq!(
            evaluate(Some("t"), Some("CLIENTE"), Some(PERSONAL)),
            GuardDecision::RedirectDashboard
        );
    }

    #[test]
    fn rol_desconocido_o_ausente_redirige_al_dashboard() {
        assert_eq!(
            evaluate(Some("t"), Some("GERENTE"), Some(SOLO_CLIENTE)),
            GuardDecision::RedirectDashboard
        );
        assert_eq!(
            evaluate(Some("t"), None, Some(SOLO_CLIENTE)),
            GuardDecision::RedirectDashboard
        );
    }
}
