//! Depot - Minimal HTTP/1.1 echo and file server
//!
//! Core library for request parsing, routing, and response serialization.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
