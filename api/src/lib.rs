//! A small blog: posts held in a store, listed on an HTML page with their
//! markdown bodies rendered by a hosted markdown API.

pub mod config;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod markup;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;
pub mod templates;

pub use states::AppState;
