//! Networking modules for the product catalog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the product wire schema
//! shared with the server.

pub mod api;
pub mod types;
