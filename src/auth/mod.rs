//! Login gate: a static credential store and the session it guards.
//!
//! This is a toy gate, not a security boundary. Passwords are compared in
//! plain text and nothing is hashed or persisted.

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::{AuthError, AuthGate, Session};

/// Shown when the user asks for a password reset.
pub const PASSWORD_RESET_NOTICE: &str =
    "Password reset functionality is not implemented yet. Please contact support.";
