//! API Module
//!
//! HTTP handlers and routing for the joke service.
//!
//! # Endpoints
//! - `GET /joke` - Endpoint overview
//! - `GET /joke/:type?count=N` - Random jokes of a type
//! - `GET /types` - Known joke types
//! - `POST /submit` - Add a joke
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
