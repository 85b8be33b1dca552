//! Git operations abstraction layer
//!
//! The version engine never talks to git directly. It reads everything it needs
//! through the [RepositorySource] trait, which has two implementations:
//!
//! - [repository::Git2Repository]: a real repository opened with the `git2` crate
//! - [mock::MockRepository]: an in-memory repository for tests
//!
//! ```rust
//! # use git_semantic::git::RepositorySource;
//! # fn example<R: RepositorySource>(repo: &R) -> git_semantic::Result<()> {
//! let head = repo.resolve_head()?;
//! for entry in repo.walk_history(&head)? {
//!     let entry = entry?;
//!     println!("{} {}", entry.hash, entry.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod mock;
pub mod repository;

pub use auth::RemoteAuth;
pub use mock::MockRepository;
pub use repository::Git2Repository;

pub use crate::domain::TagRef;
use crate::error::Result;

/// One commit produced by a history walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Full commit hash
    pub hash: String,
    /// Raw commit message
    pub message: String,
}

impl HistoryEntry {
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        HistoryEntry {
            hash: hash.into(),
            message: message.into(),
        }
    }
}

/// Lazy, fallible sequence of commits, newest first
pub type History<'a> = Box<dyn Iterator<Item = Result<HistoryEntry>> + 'a>;

/// Read access to a repository, plus the optional side-effecting actions.
///
/// ## Error Handling
///
/// Implementations map their underlying errors onto
/// [crate::error::GitSemanticError]: enumeration failures become `RepositoryAccess`,
/// an unborn HEAD becomes `EmptyRepository`.
pub trait RepositorySource {
    /// All tags with the commit each one points at, in no particular order.
    ///
    /// Annotated tags are peeled to their commit.
    fn list_tags(&self) -> Result<Vec<TagRef>>;

    /// Hash of the commit HEAD points at.
    ///
    /// # Errors
    /// `EmptyRepository` if the repository has no commits yet.
    fn resolve_head(&self) -> Result<String>;

    /// Walk history backwards from `from`, newest committer time first.
    fn walk_history(&self, from: &str) -> Result<History<'_>>;

    /// Whether the working tree differs from HEAD, untracked files included
    fn working_tree_dirty(&self) -> Result<bool>;

    /// First URL configured for a remote
    fn remote_url(&self, remote: &str) -> Result<String>;

    /// Create a lightweight tag at `commit`
    fn create_tag(&self, name: &str, commit: &str) -> Result<()>;

    /// Force-push all branches and tags to `remote`.
    ///
    /// A single blocking round trip; retries are left to the caller.
    fn push_refs(&self, remote: &str, auth: &RemoteAuth) -> Result<()>;
}
