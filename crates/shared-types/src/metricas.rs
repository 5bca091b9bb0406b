use serde::{Deserialize, Serialize};

/// Aggregated clinic metrics for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metricas {
    pub citas_mes: i64,
    pub mascotas_activas: i64,
    pub productos_minimos: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metricas_deserializan_del_backend() {
        let json = r#"{"citasMes": 42, "mascotasActivas": 180, "productosMinimos": 3}"#;
        let m: Metricas = serde_json::from_str(json).unwrap();
        assert_eq!(m.citas_mes, 42);
        assert_eq!(m.mascotas_activas, 180);
        assert_eq!(m.productos_minimos, 3);
    }
}
