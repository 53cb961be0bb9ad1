//! Credentials and the login/logout bracket around network commands

use tracing::warn;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::error::{SaveyError, SaveyResult};
use crate::session::{Client, Transport};

/// Username and password for one login
pub struct Credentials {
    pub username: String,
    password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Resolve credentials from arguments, settings and, last, a prompt
    ///
    /// Username: `--username`/`SAVEY_USERNAME`, then settings. Password:
    /// `--password`/`SAVEY_PASSWORD`, then an interactive prompt.
    pub fn resolve(
        username: Option<String>,
        password: Option<String>,
        settings: &Settings,
    ) -> SaveyResult<Self> {
        let username = username
            .or_else(|| settings.username.clone())
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                SaveyError::Config(
                    "No username given; pass --username or set SAVEY_USERNAME".into(),
                )
            })?;

        let password = match password {
            Some(password) => password,
            None => rpassword::prompt_password(format!("Password for {}: ", username))
                .map_err(|e| SaveyError::Io(format!("Failed to read password: {}", e)))?,
        };

        Ok(Self::new(username, password))
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Log in, run `command`, then log out
///
/// A logout failure after a successful command is only a warning. When the
/// command fails, logout is still attempted and the command's error wins.
pub fn with_login<T, R, F>(
    client: &mut Client<T>,
    credentials: &Credentials,
    command: F,
) -> SaveyResult<R>
where
    T: Transport,
    F: FnOnce(&mut Client<T>) -> SaveyResult<R>,
{
    client.login(&credentials.username, credentials.password())?;

    let result = command(client);

    if let Err(e) = client.logout() {
        warn!(error = %e, "logout failed");
    }

    result
}
