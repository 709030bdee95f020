//! Account REST API Service.
//!
//! A JSON-over-HTTP service managing customer accounts: create, read, list,
//! update and delete, plus health and metadata endpoints.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, or an in-memory store when no database is configured
//! - **Format**: JSON requests/responses

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod store;

pub use app::{AppState, build_router};
pub use config::Config;
pub use error::AppError;
