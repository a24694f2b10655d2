//! Shared-secret privilege gate.
//!
//! A session that arrives with the recognized secret in its query string may
//! act as the market operator: approve, move, and delete records, and toggle
//! operator mode off and on for the rest of the session.
//!
//! This is a display/authorization convenience, not a security boundary.
//! The remote store is a passive JSON file and enforces nothing; anyone who
//! learns the secret has operator rights. Do not treat this gate as
//! protecting anything of value.

use crate::core::error::{AppError, Result};

pub struct AccessGate {
    secret: String,
}

/// Per-session privilege state derived from the gate at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    privileged: bool,
    can_toggle: bool,
}

impl AccessGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Derives a session from the page's query string (without the leading
    /// `?`). A matching `secret` parameter starts the session privileged and
    /// allows toggling thereafter; anything else yields an anonymous,
    /// non-toggleable session.
    pub fn session_from_query(&self, query: &str) -> Session {
        let matched = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(key, value)| key == "secret" && value == self.secret);

        Session {
            privileged: matched,
            can_toggle: matched,
        }
    }
}

impl Session {
    pub fn anonymous() -> Self {
        Session {
            privileged: false,
            can_toggle: false,
        }
    }

    pub fn is_privileged(&self) -> bool {
        self.privileged
    }

    /// Interactive operator-mode toggle, available only to sessions that
    /// presented the secret at load time.
    pub fn set_privileged(&mut self, privileged: bool) -> Result<()> {
        if !self.can_toggle {
            return Err(AppError::Unauthorized(
                "This session cannot switch operator mode".to_string(),
            ));
        }
        self.privileged = privileged;
        Ok(())
    }
}
