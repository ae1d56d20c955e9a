//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the single reactive source of identity; `listing` is the
//! load/error bookkeeping each dashboard section keeps for its records.

pub mod listing;
pub mod session;
