//! Networking modules for the content REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies their failures, and
//! `types` defines the JSON schema shared with the API server.

pub mod api;
pub mod error;
pub mod types;
