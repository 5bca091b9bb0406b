pub mod cita;
pub mod error;
pub mod historia;
pub mod mascota;
pub mod metricas;
pub mod rol;
pub mod session;
pub mod usuario;

pub use cita::*;
pub use error::*;
pub use historia::*;
pub use mascota::*;
pub use metricas::*;
pub use rol::*;
pub use session::*;
pub use usuario::*;
