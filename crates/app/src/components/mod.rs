pub mod agendar_cita_modal;
pub mod buscador_historias;
pub mod cita_card;
pub mod citas_hoy_table;
pub mod entrada_card;
pub mod form_entrada;
pub mod historial_mascota;
pub mod historial_modal;
pub mod mascota_card;
pub mod tarjeta_metrica;

pub use agendar_cita_modal::{AgendarCitaModal, FuenteMascotas};
pub use buscador_historias::BuscadorHistorias;
pub use cita_card::CitaCard;
pub use citas_hoy_table::CitasHoyTable;
pub use entrada_card::EntradaCard;
pub use form_entrada::FormEntradaHistoria;
pub use historial_mascota::HistorialMascota;
pub use historial_modal::HistorialMascotaModal;
pub use mascota_card::MascotaCard;
pub use tarjeta_metrica::TarjetaMetrica;
