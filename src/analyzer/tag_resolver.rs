use crate::domain::{resolve_latest, LatestVersion};
use crate::error::Result;
use crate::git::RepositorySource;

/// Finds the highest version tag of a repository
#[derive(Debug, Clone, Copy, Default)]
pub struct TagResolver;

impl TagResolver {
    /// Create a new tag resolver
    pub fn new() -> Self {
        TagResolver
    }

    /// Resolve the latest version tag and the commit it points at.
    ///
    /// Tags that are not versions are skipped; only a failure to enumerate tags
    /// at all is an error.
    pub fn resolve<R: RepositorySource + ?Sized>(&self, repo: &R) -> Result<LatestVersion> {
        let tags = repo.list_tags()?;
        let count = tags.len();
        let latest = resolve_latest(tags);

        tracing::debug!(
            tags = count,
            version = %latest.version,
            commit = %latest.commit,
            "resolved latest version tag"
        );
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitSemanticError;
    use crate::git::MockRepository;

    #[test]
    fn test_resolve_from_repository() {
        let mut repo = MockRepository::new();
        repo.add_commit("c1", "feat: one")
            .add_commit("c2", "fix: two")
            .add_tag("v0.1.0", "c1")
            .add_tag("v0.1.1", "c2")
            .add_tag("nightly", "c2");

        let latest = TagResolver::new().resolve(&repo).unwrap();
        assert_eq!(latest.version.to_string(), "0.1.1");
        assert_eq!(latest.commit, "c2");
    }

    #[test]
    fn test_resolve_without_tags() {
        let mut repo = MockRepository::new();
        repo.add_commit("c1", "feat: one");

        let latest = TagResolver::new().resolve(&repo).unwrap();
        assert_eq!(latest, LatestVersion::default());
    }

    #[test]
    fn test_enumeration_failure_is_an_error() {
        let mut repo = MockRepository::new();
        repo.fail_tag_listing();

        let err = TagResolver::new().resolve(&repo).unwrap_err();
        assert!(matches!(err, GitSemanticError::RepositoryAccess(_)));
    }
}
