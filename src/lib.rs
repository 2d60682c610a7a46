//! Bakery API: read-only REST endpoints over bakeries and their baked goods.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use models::{BakedGoodBody, BakeryDetail, BakerySummary, MessageBody};
pub use routes::app_routes;
pub use service::BakeryService;
pub use state::AppState;
pub use store::connect;
