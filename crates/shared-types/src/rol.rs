use serde::{Deserialize, Serialize};

/// The four user roles the backend issues in the login response's `rol`
/// field. The wire form is uppercase Spanish (`"CLIENTE"`, `"VETERINARIO"`,
/// `"RECEPCIONISTA"`, `"ADMIN"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rol {
    Cliente,
    Veterinario,
    Recepcionista,
    Admin,
}

impl Rol {
    /// Parse a role string case-insensitively. Unknown values return `None`
    /// so guards and the menu composer treat them as unauthenticated rather
    /// than silently granting some default access.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CLIENTE" => Some(Rol::Cliente),
            "VETERINARIO" => Some(Rol::Veterinario),
            "RECEPCIONISTA" => Some(Rol::Recepcionista),
            "ADMIN" => Some(Rol::Admin),
            _ => None,
        }
    }

    /// Canonical uppercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Cliente => "CLIENTE",
            Rol::Veterinario => "VETERINARIO",
            Rol::Recepcionista => "RECEPCIONISTA",
            Rol::Admin => "ADMIN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Rol::parse("CLIENTE"), Some(Rol::Cliente));
        assert_eq!(Rol::parse("cliente"), Some(Rol::Cliente));
        assert_eq!(Rol::parse("Veterinario"), Some(Rol::Veterinario));
        assert_eq!(Rol::parse("recepcionista"), Some(Rol::Recepcionista));
        assert_eq!(Rol::parse("admin"), Some(Rol::Admin));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Rol::parse(" ADMIN "), Some(Rol::Admin));
    }

    #[test]
    fn unknown_roles_parse_to_none() {
        assert_eq!(Rol::parse(""), None);
        assert_eq!(Rol::parse("GERENTE"), None);
        assert_eq!(Rol::parse("superuser"), None);
    }

    #[test]
    fn as_str_roundtrips_through_parse() {
        for rol in [Rol::Cliente, Rol::Veterinario, Rol::Recepcionista, Rol::Admin] {
            assert_eq!(Rol::parse(rol.as_str()), Some(rol));
        }
    }
}
