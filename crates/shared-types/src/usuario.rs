use serde::{Deserialize, Serialize};

/// A user row in the admin table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub email: String,
    pub nombre: String,
    pub rol: String,
    pub activo: bool,
}

/// An active veterinarian offered in the scheduling dropdown.
///
/// The value submitted with an appointment is `id_veterinario` (the
/// veterinarian record), not `id` (the user account).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Veterinario {
    pub id: i64,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
    pub id_veterinario: i64,
}
