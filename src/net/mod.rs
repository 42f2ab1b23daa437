//! Networking for the prediction endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the `/predict` wire schema and how a response is classified
//! into an outcome; `api` performs the request in the browser.

pub mod api;
pub mod types;
