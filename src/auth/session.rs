use thiserror::Error;

use super::credentials::CredentialStore;

/// Where a [`Session`] sits in the login state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

/// Authentication status of the one interactive user.
///
/// Starts anonymous. Only [`AuthGate::login`] and [`AuthGate::logout`]
/// change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    username: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        if self.logged_in {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    /// Name of the logged-in user, if any.
    pub fn username(&self) -> Option<&str> {
        self.logged_in.then_some(self.username.as_str())
    }
}

/// Login failure. Carries nothing that tells a wrong password apart from an
/// unknown user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password. Please try again.")]
    InvalidCredentials,
}

/// Checks credentials against a [`CredentialStore`] and moves sessions
/// between anonymous and authenticated.
#[derive(Debug, Clone)]
pub struct AuthGate {
    store: CredentialStore,
}

impl AuthGate {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    /// Exact, case-sensitive match. Unknown users never verify.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.store.lookup(username) == Some(password)
    }

    /// Authenticate `session`. A session that is already authenticated is
    /// left as it is and the credentials are not checked.
    pub fn login(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        if session.logged_in {
            return Ok(());
        }
        if !self.verify(username, password) {
            return Err(AuthError::InvalidCredentials);
        }
        session.logged_in = true;
        session.username = username.to_string();
        Ok(())
    }

    /// Back to anonymous, from any state.
    pub fn logout(&self, session: &mut Session) {
        session.logged_in = false;
        session.username.clear();
    }

    pub fn is_authenticated(&self, session: &Session) -> bool {
        session.logged_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AuthGate {
        AuthGate::new(CredentialStore::from_pairs([("user1", "password1")]).unwrap())
    }

    #[test]
    fn verify_requires_the_exact_pair() {
        let gate = gate();
        assert!(gate.verify("user1", "password1"));
        assert!(!gate.verify("user1", "wrong"));
        assert!(!gate.verify("nouser", "x"));
        assert!(!gate.verify("USER1", "password1"));
        assert!(!gate.verify("user1", "password1 "));
        assert!(!gate.verify("", ""));
    }

    #[test]
    fn login_then_logout() {
        let gate = gate();
        let mut session = Session::new();
        assert_eq!(session.state(), AuthState::Anonymous);

        gate.login(&mut session, "user1", "password1").unwrap();
        assert!(gate.is_authenticated(&session));
        assert_eq!(session.username(), Some("user1"));

        gate.logout(&mut session);
        assert!(!gate.is_authenticated(&session));
        assert_eq!(session.username(), None);
        assert_eq!(session, Session::new());
    }

    #[test]
    fn failed_login_leaves_session_unchanged() {
        let gate = gate();
        let mut session = Session::new();
        assert_eq!(
            gate.login(&mut session, "user1", "nope"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            gate.login(&mut session, "ghost", "password1"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(session.state(), AuthState::Anonymous);
    }

    #[test]
    fn unknown_user_and_wrong_password_read_the_same() {
        let gate = gate();
        let mut session = Session::new();
        let wrong_password = gate.login(&mut session, "user1", "nope").unwrap_err();
        let unknown_user = gate.login(&mut session, "ghost", "nope").unwrap_err();
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[test]
    fn login_while_authenticated_is_a_no_op() {
        let gate = gate();
        let mut session = Session::new();
        gate.login(&mut session, "user1", "password1").unwrap();
        gate.login(&mut session, "someone", "else").unwrap();
        assert_eq!(session.username(), Some("user1"));
    }

    #[test]
    fn logout_is_idempotent() {
        let gate = gate();
        let mut session = Session::new();
        gate.logout(&mut session);
        gate.logout(&mut session);
        assert_eq!(session.state(), AuthState::Anonymous);
    }
}
