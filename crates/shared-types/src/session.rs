use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::rol::Rol;

/// The authenticated session: a bearer token and the role string the backend
/// issued with it. Both persist across reloads (the app's session store owns
/// the durable copy).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub rol: Option<String>,
}

impl Session {
    pub fn new(token: String, rol: String) -> Self {
        Self {
            token: Some(token),
            rol: Some(rol),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The role parsed into the typed enum; `None` when logged out or when
    /// the backend sent something unrecognized.
    pub fn rol_parsed(&self) -> Option<Rol> {
        self.rol.as_deref().and_then(Rol::parse)
    }
}

/// Login response body: `POST /api/auth/login` → `{token, rol}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub rol: String,
}

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Decode the `sub` claim (the signed-in email) from a JWT without
/// verifying it. Verification belongs to the backend; the client only needs
/// the subject for display rules such as "you cannot deactivate yourself".
pub fn token_subject(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let trimmed = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("sub")?.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jwt_con_sub(sub: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{sub}","rol":"ADMIN"}}"#));
        format!("{header}.{payload}.firma")
    }

    #[test]
    fn extrae_el_sub_del_token() {
        let token = jwt_con_sub("admin@clinica.com");
        assert_eq!(token_subject(&token), Some("admin@clinica.com".to_string()));
    }

    #[test]
    fn token_malformado_devuelve_none() {
        assert_eq!(token_subject("no-es-un-jwt"), None);
        assert_eq!(token_subject(""), None);
        assert_eq!(token_subject("a.%%%%.c"), None);
    }

    #[test]
    fn payload_sin_sub_devuelve_none() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"rol":"ADMIN"}"#);
        let token = format!("h.{payload}.s");
        assert_eq!(token_subject(&token), None);
    }

    #[test]
    fn sesion_autenticada_solo_con_token() {
        assert!(!Session::default().is_authenticated());
        assert!(Session::new("t".into(), "CLIENTE".into()).is_authenticated());
    }

    #[test]
    fn rol_parsed_tolera_mayusculas_y_minusculas() {
        let sesion = Session::new("t".into(), "cliente".into());
        assert_eq!(sesion.rol_parsed(), Some(Rol::Cliente));

        let sesion = Session::new("t".into(), "DESCONOCIDO".into());
        assert_eq!(sesion.rol_parsed(), None);
    }

    #[test]
    fn login_response_deserializa() {
        let json = r#"{"token": "abc.def.ghi", "rol": "VETERINARIO"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.rol, "VETERINARIO");
    }
}
