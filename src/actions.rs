//! Optional side-effecting actions performed after the release info is computed

use crate::error::Result;
use crate::git::{RemoteAuth, RepositorySource};
use crate::release::ReleaseInfo;

/// Credentials supplied for the experimental push
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushCredentials {
    pub user: String,
    pub password: String,
    /// Path to the private key, used for `git@` remotes
    pub key: String,
}

/// Tag HEAD with the next version.
///
/// Returns the created tag name, or `None` if no release is pending.
pub fn create_release_tag<R: RepositorySource + ?Sized>(
    repo: &R,
    info: &ReleaseInfo,
    prefix: &str,
) -> Result<Option<String>> {
    if !info.has_next_version() {
        tracing::warn!("no releasable commits since {}, not tagging", info.latest_version);
        return Ok(None);
    }

    let head = repo.resolve_head()?;
    let name = format!("{}{}", prefix, info.next_version);
    repo.create_tag(&name, &head)?;

    tracing::info!(tag = %name, commit = %head, "created tag");
    Ok(Some(name))
}

/// Push branches and tags to `remote`, choosing the auth scheme from its URL
pub fn push_experimental<R: RepositorySource + ?Sized>(
    repo: &R,
    remote: &str,
    credentials: &PushCredentials,
) -> Result<()> {
    let url = repo.remote_url(remote)?;
    let auth = RemoteAuth::for_url(
        &url,
        &credentials.user,
        &credentials.password,
        &credentials.key,
    )?;

    tracing::info!(remote, url = %url, "pushing branches and tags");
    repo.push_refs(remote, &auth)
}
