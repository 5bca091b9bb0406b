//! Central endpoint table for the clinic backend.
//!
//! In deployment the backend sits behind a reverse proxy at `/api`; local
//! development overrides the base at compile time with the `API_BASE_URL`
//! environment variable (e.g. `http://localhost:8080/api`).

/// Base URL every endpoint is built from.
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("/api")
}

pub fn login(base: &str) -> String {
    format!("{base}/auth/login")
}

pub fn citas(base: &str) -> String {
    format!("{base}/citas")
}

pub fn mis_citas(base: &str) -> String {
    format!("{base}/citas/mis-citas")
}

pub fn citas_hoy(base: &str) -> String {
    format!("{base}/citas/hoy")
}

pub fn cita_estado(base: &str, id: i64) -> String {
    format!("{base}/citas/{id}/estado")
}

pub fn mascotas(base: &str) -> String {
    format!("{base}/mascotas")
}

pub fn mascotas_mias(base: &str) -> String {
    format!("{base}/mascotas/mias")
}

pub fn historia_mascota(base: &str, id_mascota: i64) -> String {
    format!("{base}/historias/mascota/{id_mascota}")
}

pub fn historia_completa(base: &str, id_mascota: i64) -> String {
    format!("{base}/historias/mascota/{id_mascota}/completo")
}

pub fn entradas(base: &str, id_historia: i64) -> String {
    format!("{base}/historias/{id_historia}/entradas")
}

pub fn usuarios(base: &str) -> String {
    format!("{base}/usuarios")
}

pub fn usuario_estado(base: &str, id: i64) -> String {
    format!("{base}/usuarios/{id}/estado")
}

pub fn veterinarios_activos(base: &str) -> String {
    format!("{base}/usuarios/veterinarios/activos")
}

pub fn admin_metricas(base: &str) -> String {
    format!("{base}/admin/metricas")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "/api";

    #[test]
    fn rutas_de_autenticacion_y_citas() {
        assert_eq!(login(BASE), "/api/auth/login");
        assert_eq!(citas(BASE), "/api/citas");
        assert_eq!(mis_citas(BASE), "/api/citas/mis-citas");
        assert_eq!(citas_hoy(BASE), "/api/citas/hoy");
        assert_eq!(cita_estado(BASE, 12), "/api/citas/12/estado");
    }

    #[test]
    fn rutas_de_mascotas_e_historias() {
        assert_eq!(mascotas(BASE), "/api/mascotas");
        assert_eq!(mascotas_mias(BASE), "/api/mascotas/mias");
        assert_eq!(historia_mascota(BASE, 3), "/api/historias/mascota/3");
        assert_eq!(historia_completa(BASE, 3), "/api/historias/mascota/3/completo");
        assert_eq!(entradas(BASE, 5), "/api/historias/5/entradas");
    }

    #[test]
    fn rutas_de_usuarios_y_admin() {
        assert_eq!(usuarios(BASE), "/api/usuarios");
        assert_eq!(usuario_estado(BASE, 7), "/api/usuarios/7/estado");
        assert_eq!(
            veterinarios_activos(BASE),
            "/api/usuarios/veterinarios/activos"
        );
        assert_eq!(admin_metricas(BASE), "/api/admin/metricas");
    }

    #[test]
    fn base_por_defecto_es_el_proxy() {
        // Unless API_BASE_URL was set at compile time.
        if option_env!("API_BASE_URL").is_none() {
            assert_eq!(base_url(), "/api");
        }
    }
}
