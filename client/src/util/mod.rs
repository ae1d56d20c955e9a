//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and pure rules (guards, dates,
//! validation) from page and component logic to improve reuse and testability.

pub mod auth;
pub mod forms;
pub mod storage;
pub mod warranty;
