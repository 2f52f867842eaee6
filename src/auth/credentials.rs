use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("username '{0}' appears more than once in the credential store")]
pub struct DuplicateUsername(pub String);

/// Immutable username → password lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStore {
    entries: BTreeMap<String, String>,
}

impl CredentialStore {
    /// Build a store from `(username, password)` pairs. Usernames must be
    /// unique.
    pub fn from_pairs<I, U, P>(pairs: I) -> Result<Self, DuplicateUsername>
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (user, password) in pairs {
            let user = user.into();
            if entries.contains_key(&user) {
                return Err(DuplicateUsername(user));
            }
            entries.insert(user, password.into());
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, username: &str) -> Option<&str> {
        self.entries.get(username).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self {
            entries: BTreeMap::from([
                ("user1".to_string(), "password1".to_string()),
                ("user2".to_string(), "password2".to_string()),
            ]),
        }
    }
}
