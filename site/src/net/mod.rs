//! HTTP plumbing between the browser and the site server.

pub mod api;
pub mod types;
