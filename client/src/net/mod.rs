//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport, credential attachment, and the error taxonomy;
//! `response` owns envelope normalization; `types` defines the DTOs; the
//! `api_*` modules map one function to one backend endpoint.

pub mod api_admin;
pub mod api_applications;
pub mod api_auth;
pub mod api_jobs;
pub mod api_market;
pub mod http;
pub mod response;
pub mod types;
