//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard cards, forms, and the app chrome while reading
//! the shared `SessionState` from Leptos context.

pub mod appliance_card;
pub mod appliance_form;
pub mod completion_form;
pub mod nav_bar;
pub mod request_card;
pub mod require_role;
