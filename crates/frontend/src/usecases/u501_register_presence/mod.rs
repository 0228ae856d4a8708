//! u501: attendance registration for event extras
//!
//! - workflow.rs: state machine (pure, host-testable)
//! - api.rs: HTTP calls against the feirinha API
//! - view_model.rs: signals + command execution
//! - view.rs: Leptos component

pub mod api;
mod view;
mod view_model;
pub mod workflow;

pub use view::RegisterPresencePage;
pub use view_model::RegisterPresenceVm;
