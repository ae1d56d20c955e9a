//! Session, authorization, and navigation model for Warranty Tracker.
//!
//! This crate owns the rules that both the web `client` and the `cli` apply:
//! who is logged in, which views a role may open, and where a role lands after
//! login. It performs no I/O of its own; persistence goes through the
//! [`CredentialStore`] trait so each host supplies its own backend.
//!
//! STATE MACHINE
//! =============
//! `Anonymous --login--> Authenticated(role) --logout--> Anonymous`.
//! A denied guard check changes the view, never the session.

pub mod container;
pub mod error;
pub mod gate;
pub mod guard;
pub mod role;
pub mod routes;
pub mod session;
pub mod store;

pub use container::{SessionContainer, Subscription};
pub use error::{ApiFailure, AuthError};
pub use gate::{RequestGate, Ticket};
pub use guard::{Denial, GuardDecision, check_access};
pub use role::Role;
pub use routes::{AppRoute, Navigation, dashboard_for, dashboard_for_raw, resolve_navigation};
pub use session::{Credentials, Session, Transition};
pub use store::{CredentialStore, MemoryStore, clear_session, load_session, persist_session, sync_store};
