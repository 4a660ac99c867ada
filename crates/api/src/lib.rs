//! Técnico API server library.
//!
//! Exposes config, state, error handling, services and routes so integration
//! tests and the binary entrypoint build the exact same application.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
