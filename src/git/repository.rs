use crate::domain::TagRef;
use crate::error::{GitSemanticError, Result};
use crate::git::{History, HistoryEntry, RemoteAuth, RepositorySource};
use git2::{ErrorCode, Oid, Repository as Git2Repo, Sort, StatusOptions};
use std::path::Path;

const PUSH_REFSPECS: [&str; 2] = ["+refs/heads/*:refs/heads/*", "+refs/tags/*:refs/tags/*"];

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            GitSemanticError::NotARepository(format!("{}: {}", path.display(), e.message()))
        })?;
        tracing::debug!(git_dir = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl RepositorySource for Git2Repository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::with_capacity(names.len());

        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;
            match reference.peel_to_commit() {
                Ok(commit) => tags.push(TagRef::new(name, commit.id().to_string())),
                Err(e) => tracing::debug!(tag = name, error = %e, "tag does not point at a commit"),
            }
        }

        Ok(tags)
    }

    fn resolve_head(&self) -> Result<String> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Err(GitSemanticError::empty_repository(format!(
                    "{} - is repository empty?",
                    e.message()
                )))
            }
            Err(e) => return Err(e.into()),
        };

        Ok(head.peel_to_commit()?.id().to_string())
    }

    fn walk_history(&self, from: &str) -> Result<History<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(Oid::from_str(from)?)?;

        let repo = &self.repo;
        Ok(Box::new(revwalk.map(move |oid| -> Result<HistoryEntry> {
            let oid = oid?;
            let commit = repo.find_commit(oid)?;
            let message = String::from_utf8_lossy(commit.message_bytes());
            Ok(HistoryEntry::new(oid.to_string(), message))
        })))
    }

    fn working_tree_dirty(&self) -> Result<bool> {
        let statuses = self.repo.statuses(Some(
            StatusOptions::new()
                .include_untracked(true)
                .recurse_untracked_dirs(true)
                .include_ignored(false),
        ))?;

        Ok(!statuses.is_empty())
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        let remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| GitSemanticError::remote(format!("Cannot find remote: {}", e)))?;

        remote
            .url()
            .map(str::to_string)
            .ok_or_else(|| GitSemanticError::remote("Remote has no valid URL"))
    }

    fn create_tag(&self, name: &str, commit: &str) -> Result<()> {
        let object = self.repo.find_object(Oid::from_str(commit)?, None)?;
        self.repo.tag_lightweight(name, &object, false)?;

        Ok(())
    }

    fn push_refs(&self, remote: &str, auth: &RemoteAuth) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| GitSemanticError::remote(format!("Cannot find remote: {}", e)))?;

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, _username_from_url, _allowed_types| auth.credential());
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "Push failed for {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        remote
            .push(&PUSH_REFSPECS, Some(&mut push_options))
            .map_err(|e| GitSemanticError::remote(format!("Push failed: {}", e)))
    }
}
