//! # bridge-api
//!
//! HTTP API layer for paymongo-bridge-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The checkout-initiator endpoint (normalize + forward + relay)
//! - The webhook-verifier endpoint (authenticate + dispatch)
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/checkout` | Create checkout session |
//! | POST | `/webhook/paymongo` | PayMongo webhook |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
