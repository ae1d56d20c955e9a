//! The session value and its two transitions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::role::Role;

/// A complete credential triple. Every field is non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    username: String,
    role: Role,
}

impl Credentials {
    /// Build a triple, returning `None` when the token or username is blank.
    #[must_use]
    pub fn new(token: impl Into<String>, username: impl Into<String>, role: Role) -> Option<Self> {
        let token = token.into();
        let username = username.into();
        if token.trim().is_empty() || username.trim().is_empty() {
            return None;
        }
        Some(Self { token, username, role })
    }

    /// Build a triple from raw strings as they come out of storage or the wire.
    ///
    /// Any missing field, blank field, or unknown role yields `None`.
    #[must_use]
    pub fn from_parts(token: Option<String>, username: Option<String>, role: Option<String>) -> Option<Self> {
        let role = Role::parse(&role?)?;
        Self::new(token?, username?, role)
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

// Hand-written so tokens never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .field("role", &self.role)
            .finish()
    }
}

/// Who the current user is, if anyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Credentials),
}

/// Whether a transition actually changed the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(creds) => Some(creds),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials().map(Credentials::token)
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.credentials().map(Credentials::username)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.credentials().map(Credentials::role)
    }

    /// Replace the session with `creds`. Re-applying the same triple is a no-op.
    pub fn login(&mut self, creds: Credentials) -> Transition {
        if self.credentials() == Some(&creds) {
            return Transition::Unchanged;
        }
        *self = Self::Authenticated(creds);
        Transition::Changed
    }

    /// Clear all three fields.
    pub fn logout(&mut self) -> Transition {
        if matches!(self, Self::Anonymous) {
            return Transition::Unchanged;
        }
        *self = Self::Anonymous;
        Transition::Changed
    }
}
