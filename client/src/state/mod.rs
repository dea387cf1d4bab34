//! Shared application state provided via Leptos context.
//!
//! DESIGN
//! ======
//! `session` is the single writer for authentication state; `notifications`
//! carries the unread chat counts. Everything page-local (lists, drafts,
//! form errors) stays in page-owned signals instead.

pub mod notifications;
pub mod session;
