//! The client for the clinic's REST backend — the only place in the
//! workspace that performs I/O. One async method per backend operation, all
//! returning `Result<T, AppError>`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AppError, Cita, EntradaHistoria, EstadoCita, FormCita, HistoriaClinica, HistorialCompleto,
    LoginRequest, LoginResponse, Metricas, Mascota, NuevaEntrada, Usuario, Veterinario,
};

use crate::endpoints;
use crate::raw::{normalizar_mascotas, MascotaRaw};

/// REST client carrying the session token. Cheap to build; pages construct
/// one per call site from the current session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client against the default base URL (`/api`, or `API_BASE_URL`).
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(endpoints::base_url(), token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bearer(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        let resp = self.check(req).await?;
        resp.json::<T>()
            .await
            .map_err(|e| AppError::server(format!("respuesta inesperada del backend: {e}")))
    }

    /// Send the request and map transport failures and non-2xx statuses to
    /// the error taxonomy; the response body of a failed request becomes the
    /// error detail.
    async fn check(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        let resp = req
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "el backend rechazó la solicitud");
        Err(AppError::from_status(status.as_u16(), body))
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        self.bearer(self.http.get(url))
    }

    fn post_json<B: Serialize + ?Sized>(&self, url: String, body: &B) -> reqwest::RequestBuilder {
        self.bearer(self.http.post(url).json(body))
    }

    fn put_json<B: Serialize + ?Sized>(&self, url: String, body: &B) -> reqwest::RequestBuilder {
        self.bearer(self.http.put(url).json(body))
    }

    // ── Auth ────────────────────────────────────────────────────────────

    /// `POST /auth/login` — no token required.
    pub async fn login(&self, email: String, password: String) -> Result<LoginResponse, AppError> {
        let body = LoginRequest { email, password };
        self.send_json(self.http.post(endpoints::login(&self.base_url)).json(&body))
            .await
    }

    // ── Citas ───────────────────────────────────────────────────────────

    /// `GET /citas` — every appointment (ADMIN, VETERINARIO, RECEPCIONISTA).
    pub async fn citas(&self) -> Result<Vec<Cita>, AppError> {
        self.send_json(self.get(endpoints::citas(&self.base_url))).await
    }

    /// `GET /citas/mis-citas` — the signed-in client's appointments.
    pub async fn mis_citas(&self) -> Result<Vec<Cita>, AppError> {
        self.send_json(self.get(endpoints::mis_citas(&self.base_url)))
            .await
    }

    /// `GET /citas/hoy` — today's appointments for the signed-in vet.
    pub async fn citas_hoy(&self) -> Result<Vec<Cita>, AppError> {
        self.send_json(self.get(endpoints::citas_hoy(&self.base_url)))
            .await
    }

    /// `POST /citas` — schedule a new appointment. The form must already
    /// have passed `validar_form_cita`; the backend re-validates ownership
    /// and replies 400 for pets that are not the caller's.
    pub async fn agendar_cita(&self, form: &FormCita) -> Result<Cita, AppError> {
        self.send_json(self.post_json(endpoints::citas(&self.base_url), form))
            .await
    }

    /// `PUT /citas/{id}/estado` — transition an appointment's status.
    pub async fn actualizar_estado_cita(
        &self,
        id: i64,
        estado: &EstadoCita,
    ) -> Result<(), AppError> {
        let body = serde_json::json!({ "estado": estado.as_str() });
        self.check(self.put_json(endpoints::cita_estado(&self.base_url, id), &body))
            .await?;
        Ok(())
    }

    // ── Mascotas ────────────────────────────────────────────────────────

    /// `GET /mascotas` — every pet in the clinic, normalized.
    pub async fn mascotas(&self) -> Result<Vec<Mascota>, AppError> {
        let raw: Vec<MascotaRaw> = self
            .send_json(self.get(endpoints::mascotas(&self.base_url)))
            .await?;
        normalizar_mascotas(raw)
    }

    /// `GET /mascotas/mias` — the signed-in client's pets, normalized.
    pub async fn mascotas_mias(&self) -> Result<Vec<Mascota>, AppError> {
        let raw: Vec<MascotaRaw> = self
            .send_json(self.get(endpoints::mascotas_mias(&self.base_url)))
            .await?;
        normalizar_mascotas(raw)
    }

    // ── Historias clínicas ──────────────────────────────────────────────

    /// `GET /historias/mascota/{id}` — the pet's history record.
    pub async fn historia_de_mascota(&self, id_mascota: i64) -> Result<HistoriaClinica, AppError> {
        self.send_json(self.get(endpoints::historia_mascota(&self.base_url, id_mascota)))
            .await
    }

    /// `GET /historias/mascota/{id}/completo` — record plus all entries.
    pub async fn historial_completo(&self, id_mascota: i64) -> Result<HistorialCompleto, AppError> {
        self.send_json(self.get(endpoints::historia_completa(&self.base_url, id_mascota)))
            .await
    }

    /// `GET /historias/{id}/entradas` — the entries of a history record.
    pub async fn entradas(&self, id_historia: i64) -> Result<Vec<EntradaHistoria>, AppError> {
        self.send_json(self.get(endpoints::entradas(&self.base_url, id_historia)))
            .await
    }

    /// `POST /historias/{id}/entradas` — append a medical entry.
    pub async fn agregar_entrada(
        &self,
        id_historia: i64,
        entrada: &NuevaEntrada,
    ) -> Result<EntradaHistoria, AppError> {
        self.send_json(self.post_json(endpoints::entradas(&self.base_url, id_historia), entrada))
            .await
    }

    // ── Usuarios ────────────────────────────────────────────────────────

    /// `GET /usuarios` — every user (ADMIN only).
    pub async fn usuarios(&self) -> Result<Vec<Usuario>, AppError> {
        self.send_json(self.get(endpoints::usuarios(&self.base_url)))
            .await
    }

    /// `PUT /usuarios/{id}/estado` — activate or deactivate a user.
    pub async fn cambiar_estado_usuario(&self, id: i64, activo: bool) -> Result<(), AppError> {
        let body = serde_json::json!({ "activo": activo });
        self.check(self.put_json(endpoints::usuario_estado(&self.base_url, id), &body))
            .await?;
        Ok(())
    }

    /// `GET /usuarios/veterinarios/activos` — public endpoint, no auth
    /// header even when a token is held.
    pub async fn veterinarios_activos(&self) -> Result<Vec<Veterinario>, AppError> {
        self.send_json(self.http.get(endpoints::veterinarios_activos(&self.base_url)))
            .await
    }

    // ── Admin ───────────────────────────────────────────────────────────

    /// `GET /admin/metricas` — aggregated clinic metrics.
    pub async fn metricas(&self) -> Result<Metricas, AppError> {
        self.send_json(self.get(endpoints::admin_metricas(&self.base_url)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn conserva_la_base_configurada() {
        let client = ApiClient::with_base_url("http://localhost:8080/api", None);
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn el_cuerpo_de_estado_usa_la_forma_del_backend() {
        let body = serde_json::json!({ "estado": EstadoCita::Completada.as_str() });
        assert_eq!(body.to_string(), r#"{"estado":"Completada"}"#);
    }
}
