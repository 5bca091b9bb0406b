pub mod client;
pub mod endpoints;
pub mod raw;

pub use client::ApiClient;
