// src/auth.rs

use chrono::{DateTime, Local};
use log::{info, warn};

/// Checks a credential pair.
pub trait Authenticator: std::fmt::Debug {
    fn verify(&self, identifier: &str, secret: &str) -> bool;
}

/// Accepts any pair with a non-blank identifier and a non-empty secret.
/// No real verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAuthenticator;

impl Authenticator for StubAuthenticator {
    fn verify(&self, identifier: &str, secret: &str) -> bool {
        !identifier.trim().is_empty() && !secret.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identifier: String,
    pub signed_in_at: DateTime<Local>,
}

/// Sign-in state for one application session.
#[derive(Debug)]
pub struct AuthContext {
    authenticator: Box<dyn Authenticator>,
    session: Option<Session>,
}

impl AuthContext {
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            authenticator,
            session: None,
        }
    }

    pub fn login(&mut self, identifier: &str, secret: &str) -> bool {
        if !self.authenticator.verify(identifier, secret) {
            warn!("Login rejected for '{}'", identifier.trim());
            return false;
        }

        let identifier = identifier.trim().to_string();
        info!("Signed in as '{}'", identifier);
        self.session = Some(Session {
            identifier,
            signed_in_at: Local::now(),
        });
        true
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!("Signed out '{}'", session.identifier);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new(Box::new(StubAuthenticator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct DenyAll;

    impl Authenticator for DenyAll {
        fn verify(&self, _identifier: &str, _secret: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_stub_login_accepts_any_non_empty_pair() {
        let mut auth = AuthContext::default();
        assert!(auth.login("a@b.com", "anything"));
        assert!(auth.is_authenticated());
        assert_eq!(auth.session().unwrap().identifier, "a@b.com");
    }

    #[test]
    fn test_stub_login_rejects_empty_fields() {
        let mut auth = AuthContext::default();
        assert!(!auth.login("", ""));
        assert!(!auth.login("a@b.com", ""));
        assert!(!auth.login("   ", "secret"));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_secret_is_not_trimmed() {
        let mut auth = AuthContext::default();
        assert!(auth.login("a@b.com", "   "));
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut auth = AuthContext::default();
        assert!(auth.login("founder@startup.io", "pw"));
        auth.logout();
        assert!(!auth.is_authenticated());
        auth.logout();
        assert!(auth.session().is_none());
    }

    #[test]
    fn test_custom_authenticator_is_consulted() {
        let mut auth = AuthContext::new(Box::new(DenyAll));
        assert!(!auth.login("a@b.com", "anything"));
    }
}
