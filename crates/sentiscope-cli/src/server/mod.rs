//! Dashboard API server.

pub mod app;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;
