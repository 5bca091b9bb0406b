use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of client-side application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// The request never reached the backend (DNS, offline, CORS, timeout).
    Network,
    /// 400 — the backend rejected the payload.
    BadRequest,
    /// 401 — missing, invalid or expired token.
    Unauthorized,
    /// 403 — authenticated but not allowed.
    Forbidden,
    /// 404 — the resource does not exist.
    NotFound,
    /// 5xx or anything unrecognized.
    Server,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Server => write!(f, "Server"),
        }
    }
}

/// Structured application error shared by the API client and the UI.
///
/// `message` carries whatever detail the backend returned (may be empty);
/// `user_message` produces the Spanish text pages actually display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Forbidden,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Server,
            message: message.into(),
        }
    }

    /// Map an HTTP status code (plus optional response body text) to an error.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let message = body.into();
        match status {
            400 => Self::bad_request(message),
            401 => Self::unauthorized(message),
            403 => Self::forbidden(message),
            404 => Self::not_found(message),
            _ => Self::server(message),
        }
    }

    /// True when the session should be considered expired and the user sent
    /// back to the login page.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// Spanish text suitable for inline display. Falls back to the backend's
    /// own message for validation rejections, where it is the most specific
    /// information available.
    pub fn user_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => {
                "Error de conexión. Verifica tu red e intenta nuevamente.".to_string()
            }
            AppErrorKind::Unauthorized => {
                "Sesión expirada. Por favor, inicia sesión nuevamente.".to_string()
            }
            AppErrorKind::Forbidden => {
                "No tienes permisos para realizar esta acción.".to_string()
            }
            AppErrorKind::BadRequest => {
                if self.message.trim().is_empty() {
                    "La solicitud no es válida.".to_string()
                } else {
                    self.message.clone()
                }
            }
            AppErrorKind::NotFound => {
                if self.message.trim().is_empty() {
                    "No se encontró el recurso solicitado.".to_string()
                } else {
                    self.message.clone()
                }
            }
            AppErrorKind::Server => {
                "Error del servidor. Intenta nuevamente más tarde.".to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_status_maps_client_errors() {
        assert_eq!(AppError::from_status(400, "x").kind, AppErrorKind::BadRequest);
        assert_eq!(AppError::from_status(401, "x").kind, AppErrorKind::Unauthorized);
        assert_eq!(AppError::from_status(403, "x").kind, AppErrorKind::Forbidden);
        assert_eq!(AppError::from_status(404, "x").kind, AppErrorKind::NotFound);
    }

    #[test]
    fn from_status_maps_everything_else_to_server() {
        assert_eq!(AppError::from_status(500, "").kind, AppErrorKind::Server);
        assert_eq!(AppError::from_status(502, "").kind, AppErrorKind::Server);
        assert_eq!(AppError::from_status(418, "").kind, AppErrorKind::Server);
    }

    #[test]
    fn unauthorized_triggers_login_redirect() {
        assert!(AppError::unauthorized("").is_unauthorized());
        assert!(!AppError::forbidden("").is_unauthorized());
    }

    #[test]
    fn bad_request_shows_backend_message() {
        let err = AppError::bad_request("No puedes agendar citas para mascotas que no son tuyas.");
        assert_eq!(
            err.user_message(),
            "No puedes agendar citas para mascotas que no son tuyas."
        );
    }

    #[test]
    fn bad_request_without_detail_uses_generic_text() {
        assert_eq!(AppError::bad_request("  ").user_message(), "La solicitud no es válida.");
    }

    #[test]
    fn session_expiry_message() {
        assert_eq!(
            AppError::unauthorized("token expired").user_message(),
            "Sesión expirada. Por favor, inicia sesión nuevamente."
        );
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::network("connection refused");
        assert_eq!(format!("{err}"), "Network: connection refused");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::forbidden("no access");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
