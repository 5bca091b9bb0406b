pub mod dashboard;
pub mod usuarios;
