//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and shared affordances while reading session
//! and notification state from Leptos context providers; pages own the
//! route-scoped orchestration.

pub mod confirm_dialog;
pub mod error_banner;
pub mod job_card;
pub mod login_form;
pub mod nav_bar;
pub mod service_card;
pub mod status_badge;
