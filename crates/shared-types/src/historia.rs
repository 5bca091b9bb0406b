use serde::{Deserialize, Serialize};

/// A pet's clinical history record (one per pet).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoriaClinica {
    pub id_historia: i64,
    /// ISO date or datetime, as sent by the backend.
    pub fecha_creacion: String,
    pub id_mascota: i64,
}

/// A single medical-visit entry within a clinical history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntradaHistoria {
    pub id_entrada: i64,
    /// Visit date, `YYYY-MM-DD`.
    pub fecha_entrada: String,
    pub descripcion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peso_actual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperatura: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frecuencia_cardiaca: Option<i32>,
    pub id_veterinario: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<String>,
}

/// Full history response: the record plus every entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistorialCompleto {
    pub historia: HistoriaClinica,
    pub entradas: Vec<EntradaHistoria>,
    pub mascota_id: i64,
    pub total_entradas: i64,
}

/// Payload for adding a medical entry. Vitals are optional and omitted from
/// the JSON when absent, matching what the backend accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NuevaEntrada {
    pub descripcion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peso_actual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperatura: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frecuencia_cardiaca: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historial_completo_deserializa() {
        let json = r#"{
            "historia": {"idHistoria": 5, "fechaCreacion": "2025-03-01", "idMascota": 3},
            "entradas": [{
                "idEntrada": 11,
                "fechaEntrada": "2025-06-10",
                "descripcion": "Control anual, sin hallazgos",
                "pesoActual": 24.5,
                "idVeterinario": 2
            }],
            "mascotaId": 3,
            "totalEntradas": 1
        }"#;
        let historial: HistorialCompleto = serde_json::from_str(json).unwrap();
        assert_eq!(historial.historia.id_historia, 5);
        assert_eq!(historial.total_entradas, 1);
        assert_eq!(historial.entradas[0].peso_actual, Some(24.5));
        assert_eq!(historial.entradas[0].temperatura, None);
    }

    #[test]
    fn nueva_entrada_omite_vitales_ausentes() {
        let entrada = NuevaEntrada {
            descripcion: "Consulta por cojera".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&entrada).unwrap();
        assert_eq!(json["descripcion"], "Consulta por cojera");
        assert!(json.get("pesoActual").is_none());
        assert!(json.get("temperatura").is_none());
        assert!(json.get("frecuenciaCardiaca").is_none());
    }

    #[test]
    fn nueva_entrada_incluye_vitales_presentes() {
        let entrada = NuevaEntrada {
            descripcion: "Fiebre y decaimiento".into(),
            observaciones: Some("Reposo 48h".into()),
            peso_actual: Some(12.3),
            temperatura: Some(39.8),
            frecuencia_cardiaca: Some(110),
        };
        let json = serde_json::to_value(&entrada).unwrap();
        assert_eq!(json["pesoActual"], 12.3);
        assert_eq!(json["temperatura"], 39.8);
        assert_eq!(json["frecuenciaCardiaca"], 110);
    }
}
