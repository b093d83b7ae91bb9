//! stashd - Minimal HTTP/1.1 File Stash
//!
//! Core library: request parsing, routing, and file serve/store functionality.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
pub mod store;
