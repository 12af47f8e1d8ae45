// Composition root: configuration, wiring of handlers over in-memory
// infrastructure, caller resolution, and the HTTP and GraphQL surfaces.

pub mod auth;
pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
