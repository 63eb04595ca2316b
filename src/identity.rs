//! Who signs the tag and how the push authenticates.

use std::fmt;

use crate::domain::Identity;
use crate::error::{BumpError, Result};

/// Environment variable holding the push token unless configured otherwise
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Source of the tagger's name and email
pub trait IdentityProvider {
    fn identity(&self) -> Result<Identity>;
}

/// A fixed identity, mostly useful for tests and scripted runs
impl IdentityProvider for Identity {
    fn identity(&self) -> Result<Identity> {
        Ok(self.clone())
    }
}

/// Reads `user.name` and `user.email` from git configuration.
///
/// Holds a snapshot, so later config edits during the run are not observed.
pub struct GitConfigIdentity {
    config: git2::Config,
}

impl GitConfigIdentity {
    /// Use the given configuration (typically the repository's, which layers
    /// local over global and system settings)
    pub fn from_config(mut config: git2::Config) -> Result<Self> {
        let config = config.snapshot()?;
        Ok(GitConfigIdentity { config })
    }

    fn read(&self, key: &str) -> Result<String> {
        match self.config.get_string(key) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            Ok(_) => Err(BumpError::identity(format!("{} is empty", key))),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Err(BumpError::identity(format!(
                "{} is not set (run `git config --global {} <value>`)",
                key, key
            ))),
            Err(e) => Err(BumpError::identity(format!("cannot read {}: {}", key, e))),
        }
    }
}

impl IdentityProvider for GitConfigIdentity {
    fn identity(&self) -> Result<Identity> {
        let name = self.read("user.name")?;
        let email = self.read("user.email")?;
        Ok(Identity::new(name, email))
    }
}

/// Credentials offered to the remote when pushing.
///
/// HTTPS remotes receive the username and token as basic auth; SSH remotes ignore
/// the token and go through the SSH agent.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    token: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: Option<String>) -> Self {
        Credentials {
            username: username.into(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Read a push token from the environment; unset and empty both count as missing
pub fn token_from_env(variable: &str) -> Option<String> {
    std::env::var(variable).ok().filter(|token| !token.is_empty())
}
