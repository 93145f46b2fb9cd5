//! Per-project token storage.
//!
//! The token lives in `<project>/.sparkstart.env` as a single
//! `GITHUB_TOKEN=<value>` line. Resolution order is fixed: project file,
//! then the `GITHUB_TOKEN` environment variable, then (only when a prompt is
//! supplied) interactive entry, which is written back to the project file.

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TokenPrompt},
    },
    domain::AccessToken,
    error::SparkResult,
};

/// Credential file name, relative to the project root.
pub const CREDENTIAL_FILE: &str = ".sparkstart.env";

/// Key inside the credential file.
pub const TOKEN_KEY: &str = "GITHUB_TOKEN";

/// Environment variable consulted when the project file has no token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

const GITIGNORE: &str = ".gitignore";

/// Pre-filled new-token form for `project_name`.
pub fn token_creation_url(project_name: &str) -> String {
    format!(
        "https://github.com/settings/tokens/new?description=sparkstart:{project_name}&scopes=repo,delete_repo,user"
    )
}

/// File-backed token store over the [`Filesystem`] port.
pub struct CredentialStore<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> CredentialStore<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Token from the project file, or an empty string when the file or the
    /// key is absent. Never fails: an unreadable file counts as absent and
    /// malformed lines are skipped.
    pub fn get_token(&self, project_dir: &Path) -> String {
        let path = project_dir.join(CREDENTIAL_FILE);
        let content = match self.fs.read_file(&path) {
            Ok(Some(content)) => content,
            Ok(None) => return String::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable credential file");
                return String::new();
            }
        };

        dotenvy::from_read_iter(content.as_bytes())
            .filter_map(Result::ok)
            .filter(|(key, _)| key == TOKEN_KEY)
            .map(|(_, value)| value)
            .last()
            .unwrap_or_default()
    }

    /// Overwrite the credential file and make sure `.gitignore` lists it.
    ///
    /// Calling this repeatedly never duplicates the ignore entry.
    pub fn save_token(&self, project_dir: &Path, token: &AccessToken) -> SparkResult<()> {
        self.fs.write_file(
            &project_dir.join(CREDENTIAL_FILE),
            &format!("{TOKEN_KEY}={}\n", token.expose()),
        )?;
        self.ensure_ignored(project_dir)
    }

    fn ensure_ignored(&self, project_dir: &Path) -> SparkResult<()> {
        let path = project_dir.join(GITIGNORE);
        let updated = match self.fs.read_file(&path)? {
            None => format!("{CREDENTIAL_FILE}\n"),
            Some(existing) if existing.lines().any(|l| l.trim() == CREDENTIAL_FILE) => {
                return Ok(());
            }
            Some(existing) if existing.is_empty() || existing.ends_with('\n') => {
                format!("{existing}{CREDENTIAL_FILE}\n")
            }
            Some(existing) => format!("{existing}\n{CREDENTIAL_FILE}\n"),
        };
        self.fs.write_file(&path, &updated)
    }

    /// Resolve a token: project file, then `env_token`, then `prompt`.
    ///
    /// A prompted token is saved to the project file. Without a prompt (a
    /// non-interactive run, or any delete) an unresolved token is
    /// `MissingCredential`.
    #[instrument(skip_all, fields(project = %project_name, interactive = prompt.is_some()))]
    pub fn resolve(
        &self,
        project_dir: &Path,
        project_name: &str,
        env_token: Option<String>,
        prompt: Option<&dyn TokenPrompt>,
    ) -> SparkResult<AccessToken> {
        if let Some(token) = AccessToken::new(self.get_token(project_dir)) {
            debug!("Using token from {CREDENTIAL_FILE}");
            return Ok(token);
        }

        if let Some(token) = env_token.and_then(AccessToken::new) {
            debug!("Using token from ${TOKEN_ENV_VAR}");
            return Ok(token);
        }

        if let Some(prompt) = prompt {
            let url = token_creation_url(project_name);
            if let Some(token) = prompt.prompt_token(project_name, &url)? {
                self.save_token(project_dir, &token)?;
                debug!("Saved prompted token to {CREDENTIAL_FILE}");
                return Ok(token);
            }
        }

        Err(ApplicationError::MissingCredential {
            file: CREDENTIAL_FILE,
            env_var: TOKEN_ENV_VAR,
        }
        .into())
    }
}
