//! Session store.
//!
//! Tracks whether the user is signed in, who they are, and the state of the
//! last register/login request.

use crate::api::User;

/// Fallback message for failed registration.
///
pub const REGISTER_FAILED: &str = "An error occurred during registration";

/// Fallback message for failed login.
///
pub const LOGIN_FAILED: &str = "Invalid email or password";

/// Houses authentication state.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStore {
    authenticated: bool,
    user: Option<User>,
    loading: bool,
    error: Option<String>,
}

impl SessionStore {
    /// Returns true if the session holds a token.
    ///
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns the signed-in user, if the server reported one.
    ///
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns true while a register/login request is in flight.
    ///
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the message of the last failed request.
    ///
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark a request as started.
    ///
    pub fn begin(&mut self) -> &mut Self {
        self.loading = true;
        self.error = None;
        self
    }

    /// Mark the session as signed in.
    ///
    pub fn sign_in(&mut self, user: Option<User>) -> &mut Self {
        self.authenticated = true;
        self.user = user;
        self.loading = false;
        self.error = None;
        self
    }

    /// Mark the session as signed in from a persisted token. The user is not
    /// known until the next login.
    ///
    pub fn restore(&mut self) -> &mut Self {
        self.authenticated = true;
        self.user = None;
        self.loading = false;
        self
    }

    /// Record a failed request.
    ///
    pub fn fail(&mut self, message: String) -> &mut Self {
        self.loading = false;
        self.error = Some(message);
        self
    }

    /// Clear the error message.
    ///
    pub fn clear_error(&mut self) -> &mut Self {
        self.error = None;
        self
    }

    /// Forget everything about the session.
    ///
    pub fn sign_out(&mut self) -> &mut Self {
        *self = SessionStore::default();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn starts_signed_out() {
        let session = SessionStore::default();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!session.is_loading());
        assert!(session.error().is_none());
    }

    #[test]
    fn begin_clears_error() {
        let mut session = SessionStore::default();
        session.fail(LOGIN_FAILED.to_string());
        session.begin();
        assert!(session.is_loading());
        assert!(session.error().is_none());
    }

    #[test]
    fn sign_in_stores_user() {
        let user: User = Faker.fake();
        let mut session = SessionStore::default();
        session.begin().sign_in(Some(user.clone()));
        assert!(session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.user(), Some(&user));
    }

    #[test]
    fn fail_keeps_authentication_state() {
        let mut session = SessionStore::default();
        session.begin().fail(REGISTER_FAILED.to_string());
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some(REGISTER_FAILED));
    }

    #[test]
    fn restore_has_no_user() {
        let mut session = SessionStore::default();
        session.restore();
        assert!(session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn sign_out_resets() {
        let mut session = SessionStore::default();
        session.sign_in(Some(Faker.fake()));
        session.sign_out();
        assert_eq!(session, SessionStore::default());
    }
}
