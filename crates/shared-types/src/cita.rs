use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Appointment status values issued by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EstadoCita {
    #[serde(rename = "Programada")]
    Programada,
    #[serde(rename = "En curso")]
    EnCurso,
    #[serde(rename = "Completada")]
    Completada,
    #[serde(rename = "Cancelada")]
    Cancelada,
}

impl EstadoCita {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Programada => "Programada",
            Self::EnCurso => "En curso",
            Self::Completada => "Completada",
            Self::Cancelada => "Cancelada",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "Programada" => Some(Self::Programada),
            "En curso" => Some(Self::EnCurso),
            "Completada" => Some(Self::Completada),
            "Cancelada" => Some(Self::Cancelada),
            _ => None,
        }
    }
}

/// An appointment as returned by the backend.
///
/// `estado_cita` stays a plain string on the wire; use
/// [`EstadoCita::from_str_opt`] when the variant matters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cita {
    pub id: i64,
    /// Calendar date, `YYYY-MM-DD`.
    pub fecha_cita: String,
    /// Time of day, `HH:MM:SS` (sometimes `HH:MM`).
    pub hora_cita: String,
    pub motivo: String,
    pub estado_cita: String,
    pub id_mascota: i64,
    pub id_veterinario: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duracion_minutos: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Candidate appointment submission, built by the scheduling form and
/// discarded on submit or cancel. Serializes to the backend's camelCase
/// field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormCita {
    pub id_mascota: i64,
    pub id_veterinario: i64,
    /// `YYYY-MM-DD`.
    pub fecha_cita: String,
    /// `HH:MM:SS`.
    pub hora_cita: String,
    pub duracion_minutos: i32,
    pub motivo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    pub estado_cita: String,
}

impl Default for FormCita {
    fn default() -> Self {
        Self {
            id_mascota: 0,
            id_veterinario: 0,
            fecha_cita: String::new(),
            hora_cita: String::new(),
            duracion_minutos: 30,
            motivo: String::new(),
            observaciones: None,
            estado_cita: EstadoCita::Programada.as_str().to_string(),
        }
    }
}

/// Business hours: appointments start at 08:00 and the last slot begins
/// before 18:00.
pub const HORA_APERTURA: u32 = 8;
pub const HORA_CIERRE: u32 = 18;

/// Allowed appointment length in minutes.
pub const DURACION_MINIMA: i32 = 15;
pub const DURACION_MAXIMA: i32 = 120;

fn parse_hora(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// Validate a candidate appointment against `hoy` (today's local calendar
/// date) and `ahora` (the current local time). Checks run in a fixed order
/// and the first failure's message is returned; `Ok(())` means the form is
/// ready to submit.
pub fn validar_form_cita(
    form: &FormCita,
    hoy: NaiveDate,
    ahora: NaiveTime,
) -> Result<(), String> {
    // 1. Required fields.
    if form.id_mascota == 0 {
        return Err("Debes seleccionar una mascota".to_string());
    }
    if form.id_veterinario == 0 {
        return Err("Debes seleccionar un veterinario".to_string());
    }
    if form.fecha_cita.trim().is_empty() {
        return Err("Debes seleccionar una fecha".to_string());
    }
    if form.hora_cita.trim().is_empty() {
        return Err("Debes seleccionar una hora".to_string());
    }

    // 2. A meaningful reason.
    if form.motivo.trim().chars().count() < 10 {
        return Err("El motivo debe tener al menos 10 caracteres".to_string());
    }

    // 3. Not in the past (calendar day).
    let fecha = NaiveDate::parse_from_str(form.fecha_cita.trim(), "%Y-%m-%d")
        .map_err(|_| "La fecha seleccionada no es válida".to_string())?;
    if fecha < hoy {
        return Err("No puedes agendar citas en fechas pasadas".to_string());
    }

    // 4. Within business hours. The closing hour itself is already outside.
    let hora = parse_hora(form.hora_cita.trim())
        .ok_or_else(|| "La hora seleccionada no es válida".to_string())?;
    if hora < NaiveTime::from_hms_opt(HORA_APERTURA, 0, 0).unwrap_or_default()
        || hora >= NaiveTime::from_hms_opt(HORA_CIERRE, 0, 0).unwrap_or_default()
    {
        return Err("La hora debe estar entre 08:00 y 18:00".to_string());
    }

    // 5. Same-day appointments cannot start before the current time.
    if fecha == hoy && hora < ahora {
        return Err("No puedes agendar citas en horas que ya pasaron".to_string());
    }

    // 6. Duration bounds.
    if form.duracion_minutos < DURACION_MINIMA || form.duracion_minutos > DURACION_MAXIMA {
        return Err("La duración debe estar entre 15 y 120 minutos".to_string());
    }

    Ok(())
}

/// Validate against the browser's local clock.
pub fn validar_ahora(form: &FormCita) -> Result<(), String> {
    let now = Local::now();
    validar_form_cita(form, now.date_naive(), now.time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hoy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn ahora() -> NaiveTime {
        NaiveTime::from_hms_opt(10, 30, 0).unwrap()
    }

    /// A form valid on every check, dated tomorrow.
    fn form_valida() -> FormCita {
        FormCita {
            id_mascota: 3,
            id_veterinario: 2,
            fecha_cita: "2026-08-08".to_string(),
            hora_cita: "09:00:00".to_string(),
            duracion_minutos: 30,
            motivo: "Control general y vacunación anual".to_string(),
            observaciones: None,
            estado_cita: "Programada".to_string(),
        }
    }

    fn validar(form: &FormCita) -> Result<(), String> {
        validar_form_cita(form, hoy(), ahora())
    }

    #[test]
    fn acepta_formulario_valido() {
        assert_eq!(validar(&form_valida()), Ok(()));
    }

    #[test]
    fn rechaza_mascota_sin_seleccionar() {
        let form = FormCita { id_mascota: 0, ..form_valida() };
        assert_eq!(validar(&form), Err("Debes seleccionar una mascota".to_string()));
    }

    #[test]
    fn rechaza_veterinario_sin_seleccionar() {
        let form = FormCita { id_veterinario: 0, ..form_valida() };
        assert_eq!(validar(&form), Err("Debes seleccionar un veterinario".to_string()));
    }

    #[test]
    fn rechaza_fecha_vacia() {
        let form = FormCita { fecha_cita: String::new(), ..form_valida() };
        assert_eq!(validar(&form), Err("Debes seleccionar una fecha".to_string()));
    }

    #[test]
    fn rechaza_hora_vacia() {
        let form = FormCita { hora_cita: String::new(), ..form_valida() };
        assert_eq!(validar(&form), Err("Debes seleccionar una hora".to_string()));
    }

    #[test]
    fn rechaza_motivo_corto() {
        let form = FormCita { motivo: "Vacuna".to_string(), ..form_valida() };
        assert_eq!(
            validar(&form),
            Err("El motivo debe tener al menos 10 caracteres".to_string())
        );
    }

    #[test]
    fn motivo_con_solo_espacios_no_cuenta() {
        let form = FormCita { motivo: "   Vacuna      ".to_string(), ..form_valida() };
        assert!(validar(&form).is_err());
    }

    #[test]
    fn rechaza_fecha_pasada_aunque_el_resto_sea_valido() {
        let form = FormCita { fecha_cita: "2026-08-06".to_string(), ..form_valida() };
        assert_eq!(
            validar(&form),
            Err("No puedes agendar citas en fechas pasadas".to_string())
        );
    }

    #[test]
    fn rechaza_fecha_malformada() {
        let form = FormCita { fecha_cita: "08/08/2026".to_string(), ..form_valida() };
        assert_eq!(validar(&form), Err("La fecha seleccionada no es válida".to_string()));
    }

    #[test]
    fn acepta_hora_de_apertura_exacta() {
        let form = FormCita { hora_cita: "08:00:00".to_string(), ..form_valida() };
        assert_eq!(validar(&form), Ok(()));
    }

    #[test]
    fn acepta_ultimo_minuto_laboral() {
        let form = FormCita { hora_cita: "17:59:00".to_string(), ..form_valida() };
        assert_eq!(validar(&form), Ok(()));
    }

    #[test]
    fn rechaza_hora_de_cierre() {
        let form = FormCita { hora_cita: "18:00:00".to_string(), ..form_valida() };
        assert_eq!(
            validar(&form),
            Err("La hora debe estar entre 08:00 y 18:00".to_string())
        );
    }

    #[test]
    fn rechaza_hora_antes_de_apertura() {
        let form = FormCita { hora_cita: "07:59:00".to_string(), ..form_valida() };
        assert_eq!(
            validar(&form),
            Err("La hora debe estar entre 08:00 y 18:00".to_string())
        );
    }

    #[test]
    fn acepta_hora_sin_segundos() {
        let form = FormCita { hora_cita: "09:30".to_string(), ..form_valida() };
        assert_eq!(validar(&form), Ok(()));
    }

    #[test]
    fn rechaza_hora_malformada() {
        let form = FormCita { hora_cita: "9 y media".to_string(), ..form_valida() };
        assert_eq!(validar(&form), Err("La hora seleccionada no es válida".to_string()));
    }

    #[test]
    fn rechaza_hora_pasada_si_la_cita_es_hoy() {
        let form = FormCita {
            fecha_cita: "2026-08-07".to_string(),
            hora_cita: "10:00:00".to_string(),
            ..form_valida()
        };
        assert_eq!(
            validar(&form),
            Err("No puedes agendar citas en horas que ya pasaron".to_string())
        );
    }

    #[test]
    fn acepta_hora_futura_si_la_cita_es_hoy() {
        let form = FormCita {
            fecha_cita: "2026-08-07".to_string(),
            hora_cita: "11:00:00".to_string(),
            ..form_valida()
        };
        assert_eq!(validar(&form), Ok(()));
    }

    #[test]
    fn hora_pasada_no_afecta_fechas_futuras() {
        let form = FormCita {
            fecha_cita: "2026-08-08".to_string(),
            hora_cita: "08:30:00".to_string(),
            ..form_valida()
        };
        assert_eq!(validar(&form), Ok(()));
    }

    #[test]
    fn limites_de_duracion() {
        let casos = [(14, false), (15, true), (120, true), (121, false)];
        for (minutos, valido) in casos {
            let form = FormCita { duracion_minutos: minutos, ..form_valida() };
            let resultado = validar(&form);
            if valido {
                assert_eq!(resultado, Ok(()), "duración {minutos} debería aceptarse");
            } else {
                assert_eq!(
                    resultado,
                    Err("La duración debe estar entre 15 y 120 minutos".to_string()),
                    "duración {minutos} debería rechazarse"
                );
            }
        }
    }

    #[test]
    fn el_orden_de_los_errores_es_fijo() {
        // Everything wrong at once: the pet check wins.
        let form = FormCita {
            id_mascota: 0,
            id_veterinario: 0,
            fecha_cita: String::new(),
            hora_cita: String::new(),
            duracion_minutos: 0,
            motivo: String::new(),
            observaciones: None,
            estado_cita: "Programada".to_string(),
        };
        assert_eq!(validar(&form), Err("Debes seleccionar una mascota".to_string()));
    }

    #[test]
    fn form_cita_serializa_en_camel_case() {
        let json = serde_json::to_value(form_valida()).unwrap();
        assert_eq!(json["idMascota"], 3);
        assert_eq!(json["idVeterinario"], 2);
        assert_eq!(json["fechaCita"], "2026-08-08");
        assert_eq!(json["horaCita"], "09:00:00");
        assert_eq!(json["duracionMinutos"], 30);
        assert_eq!(json["estadoCita"], "Programada");
        assert!(json.get("observaciones").is_none());
    }

    #[test]
    fn estado_cita_roundtrip() {
        for estado in [
            EstadoCita::Programada,
            EstadoCita::EnCurso,
            EstadoCita::Completada,
            EstadoCita::Cancelada,
        ] {
            assert_eq!(EstadoCita::from_str_opt(estado.as_str()), Some(estado));
        }
        assert_eq!(EstadoCita::from_str_opt("Pendiente"), None);
    }

    #[test]
    fn cita_deserializa_del_backend() {
        let json = r#"{
            "id": 7,
            "fechaCita": "2026-08-07",
            "horaCita": "09:30:00",
            "motivo": "Control de peso",
            "estadoCita": "Programada",
            "idMascota": 3,
            "idVeterinario": 2,
            "duracionMinutos": 30
        }"#;
        let cita: Cita = serde_json::from_str(json).unwrap();
        assert_eq!(cita.id, 7);
        assert_eq!(cita.estado_cita, "Programada");
        assert_eq!(cita.duracion_minutos, Some(30));
        assert_eq!(cita.observaciones, None);
    }
}
