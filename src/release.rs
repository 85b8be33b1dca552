//! Consolidated release report for the current state of a repository

use crate::analyzer::{TagResolver, VersionLedger};
use crate::config::ClassificationConfig;
use crate::domain::version::current_tag;
use crate::domain::{ClassifiedCommit, CommitClassifier};
use crate::error::Result;
use crate::git::RepositorySource;
use serde::Serialize;

/// Version information about a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    /// Highest version tag, `0.0.0` if there is none
    pub latest_version: String,
    /// Tag describing HEAD and the working tree
    pub current_tag: String,
    /// Next release version, empty if no pending commit is releasable
    pub next_version: String,
    /// Commits since the latest version tag, newest first
    pub next_commits: Vec<ClassifiedCommit>,
}

impl ReleaseInfo {
    /// Whether there is a version to release
    pub fn has_next_version(&self) -> bool {
        !self.next_version.is_empty()
    }
}

/// Builds a [`ReleaseInfo`] from a repository
#[derive(Debug, Clone, Default)]
pub struct ReleaseInfoBuilder {
    classifier: CommitClassifier,
    resolver: TagResolver,
    ledger: VersionLedger,
}

impl ReleaseInfoBuilder {
    /// Create a builder classifying commits with `classifier`
    pub fn new(classifier: CommitClassifier) -> Self {
        ReleaseInfoBuilder {
            classifier,
            resolver: TagResolver::new(),
            ledger: VersionLedger::new(),
        }
    }

    /// Create a builder using the given classification tables
    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self::new(CommitClassifier::new(config.clone()))
    }

    /// Produce the release report for the repository as it is right now.
    ///
    /// Errors from the repository propagate unchanged; nothing partial is
    /// returned.
    pub fn build<R: RepositorySource + ?Sized>(&self, repo: &R) -> Result<ReleaseInfo> {
        let latest = self.resolver.resolve(repo)?;
        let head = repo.resolve_head()?;
        let commits = self.commits_since(repo, &head, &latest.commit)?;

        let next = self
            .ledger
            .next_version(&latest.version.to_string(), &commits)?;

        let dirty = repo.working_tree_dirty()?;
        let untagged_head = (head != latest.commit).then_some(head.as_str());
        let current = current_tag(&latest.version, untagged_head, dirty);

        tracing::info!(
            latest = %latest.version,
            current = %current,
            magnitude = %next.magnitude,
            pending = commits.len(),
            dirty,
            "computed release info"
        );

        Ok(ReleaseInfo {
            latest_version: latest.version.to_string(),
            current_tag: current.to_string(),
            next_version: next.version.map(|v| v.to_string()).unwrap_or_default(),
            next_commits: commits,
        })
    }

    /// Classify history from `head` back to `stop` (exclusive).
    ///
    /// An empty `stop` walks the whole history.
    pub fn commits_since<R: RepositorySource + ?Sized>(
        &self,
        repo: &R,
        head: &str,
        stop: &str,
    ) -> Result<Vec<ClassifiedCommit>> {
        let mut commits = Vec::new();

        for entry in repo.walk_history(head)? {
            let entry = entry?;
            if !stop.is_empty() && entry.hash == stop {
                break;
            }
            tracing::trace!(commit = %entry.hash, "classifying commit");
            commits.push(self.classifier.classify_with_hash(entry.hash, &entry.message));
        }

        Ok(commits)
    }
}
