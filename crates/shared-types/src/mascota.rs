use serde::{Deserialize, Serialize};

/// A pet, in the one canonical shape the UI consumes.
///
/// The backend alternates between `idMascota` and `id` for the identifier
/// depending on the endpoint; the API client normalizes both into `id`
/// before this type ever reaches a view (see `api_client::raw`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mascota {
    pub id: i64,
    pub nombre: String,
    pub especie: String,
    pub raza: String,
    /// Age in years.
    pub edad: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peso: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

impl Mascota {
    /// Display label for dropdowns: `"Luna (Perro - Labrador)"`.
    pub fn etiqueta(&self) -> String {
        format!("{} ({} - {})", self.nombre, self.especie, self.raza)
    }

    /// Display label for age: `"4 años"`.
    pub fn edad_texto(&self) -> String {
        format!("{} años", self.edad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luna() -> Mascota {
        Mascota {
            id: 3,
            nombre: "Luna".into(),
            especie: "Perro".into(),
            raza: "Labrador".into(),
            edad: 4,
            peso: Some(24.5),
            color: Some("Dorado".into()),
            sexo: Some("Hembra".into()),
            estado: Some("Activa".into()),
        }
    }

    #[test]
    fn etiqueta_para_dropdown() {
        assert_eq!(luna().etiqueta(), "Luna (Perro - Labrador)");
    }

    #[test]
    fn edad_en_texto() {
        assert_eq!(luna().edad_texto(), "4 años");
    }

    #[test]
    fn optionals_missing_in_payload_are_fine() {
        let json = r#"{"id": 1, "nombre": "Misu", "especie": "Gato", "raza": "Criollo", "edad": 2}"#;
        let mascota: Mascota = serde_json::from_str(json).unwrap();
        assert_eq!(mascota.peso, None);
        assert_eq!(mascota.estado, None);
    }
}
