//! Raw DTOs tolerating the field-name variance the backend exhibits across
//! endpoints, plus the normalization into the canonical shapes of
//! `shared_types`. Nothing outside this crate ever sees a raw payload.

use serde::Deserialize;
use shared_types::{AppError, Mascota};

/// A pet as any of the backend's endpoints serialize it: the identifier
/// arrives as `idMascota` on some routes and `id` on others, and `edad` has
/// been observed both as a number and as pre-formatted text ("4 años").
#[derive(Debug, Clone, Deserialize)]
pub struct MascotaRaw {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "idMascota")]
    pub id_mascota: Option<i64>,
    pub nombre: String,
    pub especie: String,
    #[serde(default)]
    pub raza: Option<String>,
    #[serde(default)]
    pub edad: Option<EdadRaw>,
    #[serde(default)]
    pub peso: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub sexo: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

/// Age field variance: numeric years or display text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EdadRaw {
    Numero(i32),
    Texto(String),
}

impl EdadRaw {
    /// Years as a number; text forms keep their leading digits ("4 años" → 4).
    pub fn anios(&self) -> i32 {
        match self {
            EdadRaw::Numero(n) => *n,
            EdadRaw::Texto(s) => s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
                .parse()
                .unwrap_or(0),
        }
    }
}

/// Normalize a raw pet payload into the canonical [`Mascota`]. The
/// `idMascota` form wins when both identifiers are present; a payload with
/// neither is rejected rather than propagated with a bogus id.
pub fn normalizar_mascota(raw: MascotaRaw) -> Result<Mascota, AppError> {
    let id = raw
        .id_mascota
        .or(raw.id)
        .ok_or_else(|| AppError::server("respuesta de mascota sin identificador"))?;
    Ok(Mascota {
        id,
        nombre: raw.nombre,
        especie: raw.especie,
        raza: raw.raza.unwrap_or_default(),
        edad: raw.edad.map(|e| e.anios()).unwrap_or(0),
        peso: raw.peso,
        color: raw.color,
        sexo: raw.sexo,
        estado: raw.estado,
    })
}

/// Normalize a whole listing, rejecting the response if any row lacks an id.
pub fn normalizar_mascotas(raw: Vec<MascotaRaw>) -> Result<Vec<Mascota>, AppError> {
    raw.into_iter().map(normalizar_mascota).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normaliza_la_forma_id_mascota() {
        let json = r#"{
            "idMascota": 3, "nombre": "Luna", "especie": "Perro",
            "raza": "Labrador", "edad": 4, "peso": 24.5,
            "color": "Dorado", "sexo": "Hembra", "estado": "Activa"
        }"#;
        let raw: MascotaRaw = serde_json::from_str(json).unwrap();
        let mascota = normalizar_mascota(raw).unwrap();
        assert_eq!(mascota.id, 3);
        assert_eq!(mascota.edad, 4);
    }

    #[test]
    fn normaliza_la_forma_id_plano() {
        let json = r#"{"id": 8, "nombre": "Misu", "especie": "Gato", "raza": "Criollo", "edad": 2}"#;
        let raw: MascotaRaw = serde_json::from_str(json).unwrap();
        let mascota = normalizar_mascota(raw).unwrap();
        assert_eq!(mascota.id, 8);
    }

    #[test]
    fn ambas_formas_producen_la_misma_mascota() {
        let con_id_mascota = r#"{"idMascota": 5, "nombre": "Rocky", "especie": "Perro", "raza": "Boxer", "edad": 6}"#;
        let con_id = r#"{"id": 5, "nombre": "Rocky", "especie": "Perro", "raza": "Boxer", "edad": 6}"#;
        let a = normalizar_mascota(serde_json::from_str(con_id_mascota).unwrap()).unwrap();
        let b = normalizar_mascota(serde_json::from_str(con_id).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn id_mascota_gana_cuando_llegan_ambos() {
        let json = r#"{"id": 99, "idMascota": 3, "nombre": "Luna", "especie": "Perro", "edad": 4}"#;
        let mascota = normalizar_mascota(serde_json::from_str(json).unwrap()).unwrap();
        assert_eq!(mascota.id, 3);
    }

    #[test]
    fn edad_como_texto_conserva_los_anios() {
        let json = r#"{"id": 1, "nombre": "Misu", "especie": "Gato", "edad": "2 años"}"#;
        let mascota = normalizar_mascota(serde_json::from_str(json).unwrap()).unwrap();
        assert_eq!(mascota.edad, 2);
    }

    #[test]
    fn sin_identificador_se_rechaza() {
        let json = r#"{"nombre": "Anónimo", "especie": "Gato"}"#;
        let raw: MascotaRaw = serde_json::from_str(json).unwrap();
        assert!(normalizar_mascota(raw).is_err());
    }

    #[test]
    fn una_fila_invalida_rechaza_el_listado() {
        let json = r#"[
            {"idMascota": 1, "nombre": "Luna", "especie": "Perro", "edad": 4},
            {"nombre": "Anónimo", "especie": "Gato"}
        ]"#;
        let raw: Vec<MascotaRaw> = serde_json::from_str(json).unwrap();
        assert!(normalizar_mascotas(raw).is_err());
    }
}
