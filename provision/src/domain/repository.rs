//! Repository references derived from an application name.
//!
//! Every function here is a pure function of [`GitConfig`] and its
//! arguments, plus the shell lines used to sync a unit's working copy.

use crate::domain::config::GitConfig;
use crate::domain::error::ConfigError;

/// Authenticated push URL, `<user>@<host>:<app>.git`.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if `git:user` is blank or `git:host`
/// is unset.
pub fn url(git: &GitConfig, app: &str) -> Result<String, ConfigError> {
    Ok(format!("{}@{}:{app}.git", git.user()?, git.host()?))
}

/// Anonymous clone URL, `git://<host>/<app>.git`.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if `git:host` is unset.
pub fn read_only_url(git: &GitConfig, app: &str) -> Result<String, ConfigError> {
    Ok(format!("git://{}/{app}.git", git.host()?))
}

/// Working-copy path on a unit.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if `git:unit-repo` is blank.
pub fn path(git: &GitConfig) -> Result<String, ConfigError> {
    git.unit_repo().map(str::to_string)
}

/// Bare repository path on the git host, `<root>/<app>.git`.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if `git:root` is unset.
pub fn bare_path(git: &GitConfig, app: &str) -> Result<String, ConfigError> {
    let root = git.root()?.trim_end_matches('/');
    Ok(format!("{root}/{app}.git"))
}

/// Shallow clone of the read-only remote into the working-copy path.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if `git:host` or `git:unit-repo` is unset.
pub fn clone_command(git: &GitConfig, app: &str) -> Result<String, ConfigError> {
    Ok(format!(
        "git clone {} {} --depth 1",
        read_only_url(git, app)?,
        path(git)?
    ))
}

/// Fast-forward of an existing working copy.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if `git:unit-repo` is blank.
pub fn pull_command(git: &GitConfig) -> Result<String, ConfigError> {
    Ok(format!("cd {} && git pull origin master", path(git)?))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
