//! HTTP API: server wiring, routing, and the admin gate middleware.

pub mod app;
pub mod middleware;
pub mod resolver;
