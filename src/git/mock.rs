use crate::domain::TagRef;
use crate::error::{GitSemanticError, Result};
use crate::git::{History, HistoryEntry, RemoteAuth, RepositorySource};
use std::cell::RefCell;

/// In-memory repository for testing without actual git operations.
///
/// History is a single line of commits; `add_commit` appends a new HEAD.
#[derive(Debug, Default)]
pub struct MockRepository {
    commits: Vec<HistoryEntry>,
    tags: RefCell<Vec<TagRef>>,
    dirty: bool,
    remotes: Vec<(String, String)>,
    pushes: RefCell<Vec<(String, RemoteAuth)>>,
    fail_tags: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit on top of the current HEAD
    pub fn add_commit(&mut self, hash: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.commits.push(HistoryEntry::new(hash, message));
        self
    }

    /// Add a tag pointing at a commit
    pub fn add_tag(&mut self, name: impl Into<String>, commit: impl Into<String>) -> &mut Self {
        self.tags.get_mut().push(TagRef::new(name, commit));
        self
    }

    /// Mark the working tree as modified
    pub fn set_dirty(&mut self, dirty: bool) -> &mut Self {
        self.dirty = dirty;
        self
    }

    /// Configure a remote URL
    pub fn add_remote(&mut self, name: impl Into<String>, url: impl Into<String>) -> &mut Self {
        self.remotes.push((name.into(), url.into()));
        self
    }

    /// Make tag enumeration fail
    pub fn fail_tag_listing(&mut self) -> &mut Self {
        self.fail_tags = true;
        self
    }

    /// Pushes recorded so far
    pub fn pushes(&self) -> Vec<(String, RemoteAuth)> {
        self.pushes.borrow().clone()
    }
}

impl RepositorySource for MockRepository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        if self.fail_tags {
            return Err(git2::Error::from_str("cannot enumerate tags").into());
        }
        Ok(self.tags.borrow().clone())
    }

    fn resolve_head(&self) -> Result<String> {
        self.commits
            .last()
            .map(|c| c.hash.clone())
            .ok_or_else(|| GitSemanticError::empty_repository("reference 'HEAD' not found"))
    }

    fn walk_history(&self, from: &str) -> Result<History<'_>> {
        let start = self
            .commits
            .iter()
            .position(|c| c.hash == from)
            .ok_or_else(|| git2::Error::from_str("object not found"))?;

        Ok(Box::new(self.commits[..=start].iter().rev().cloned().map(Ok::<_, GitSemanticError>)))
    }

    fn working_tree_dirty(&self) -> Result<bool> {
        Ok(self.dirty)
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        self.remotes
            .iter()
            .find(|(name, _)| name == remote)
            .map(|(_, url)| url.clone())
            .ok_or_else(|| GitSemanticError::remote(format!("Cannot find remote: {}", remote)))
    }

    fn create_tag(&self, name: &str, commit: &str) -> Result<()> {
        let mut tags = self.tags.borrow_mut();
        if tags.iter().any(|t| t.name == name) {
            return Err(git2::Error::from_str("tag already exists").into());
        }
        tags.push(TagRef::new(name, commit));
        Ok(())
    }

    fn push_refs(&self, remote: &str, auth: &RemoteAuth) -> Result<()> {
        self.remote_url(remote)?;
        self.pushes.borrow_mut().push((remote.to_string(), auth.clone()));
        Ok(())
    }
}
