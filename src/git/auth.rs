use crate::error::{GitSemanticError, Result};
use std::path::{Path, PathBuf};

/// Credentials used for the experimental push
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAuth {
    /// Key-based authentication for `git@host:...` remotes
    SshKey {
        user: String,
        key_path: PathBuf,
        passphrase: Option<String>,
    },
    /// Username and password for `http(s)://` remotes
    Basic { user: String, password: String },
}

impl RemoteAuth {
    /// Pick the authentication scheme from the remote URL.
    ///
    /// URLs starting with `git` use the key at `key` (a leading `~` is expanded
    /// to the home directory) with `password` as its passphrase. URLs starting
    /// with `http` use basic credentials.
    ///
    /// # Errors
    /// `Remote` if the scheme is not supported or the key file does not exist.
    pub fn for_url(url: &str, user: &str, password: &str, key: &str) -> Result<Self> {
        if url.starts_with("git") {
            let key_path = expand_home(key);
            if !key_path.is_file() {
                return Err(GitSemanticError::remote(format!("PEM file not found: {}", key)));
            }
            Ok(RemoteAuth::SshKey {
                user: user.to_string(),
                key_path,
                passphrase: Some(password.to_string()).filter(|p| !p.is_empty()),
            })
        } else if url.starts_with("http") {
            Ok(RemoteAuth::Basic {
                user: user.to_string(),
                password: password.to_string(),
            })
        } else {
            Err(GitSemanticError::remote(format!("unsupported remote URL: {}", url)))
        }
    }

    /// Build the git2 credential for this scheme
    pub fn credential(&self) -> std::result::Result<git2::Cred, git2::Error> {
        match self {
            RemoteAuth::SshKey {
                user,
                key_path,
                passphrase,
            } => git2::Cred::ssh_key(user, None, key_path, passphrase.as_deref()),
            RemoteAuth::Basic { user, password } => git2::Cred::userpass_plaintext(user, password),
        }
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest.trim_start_matches(['/', '\\'])),
        _ => Path::new(path).to_path_buf(),
    }
}
