use crate::domain::version::{bump, parse_version};
use crate::domain::{ClassifiedCommit, Magnitude};
use crate::error::Result;
use semver::Version;

/// Outcome of applying pending commits to a base version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersion {
    /// The bumped version, `None` when nothing releasable is pending
    pub version: Option<Version>,
    /// Highest magnitude found among the commits
    pub magnitude: Magnitude,
}

/// Computes the next version from the commits pending since a release
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionLedger;

impl VersionLedger {
    /// Create a new version ledger
    pub fn new() -> Self {
        VersionLedger
    }

    /// Highest magnitude in `commits`, `None` for an empty sequence.
    ///
    /// Any major commit anywhere in the range forces a major release, however
    /// many minor or patch commits surround it.
    pub fn magnitude<'a, I>(&self, commits: I) -> Magnitude
    where
        I: IntoIterator<Item = &'a ClassifiedCommit>,
    {
        commits
            .into_iter()
            .map(|c| c.magnitude)
            .max()
            .unwrap_or(Magnitude::None)
    }

    /// Apply exactly one increment of the highest pending magnitude to `base`.
    ///
    /// # Errors
    /// `InvalidVersion` if `base` is not a semantic version.
    pub fn next_version<'a, I>(&self, base: &str, commits: I) -> Result<NextVersion>
    where
        I: IntoIterator<Item = &'a ClassifiedCommit>,
    {
        let base = parse_version(base)?;
        let magnitude = self.magnitude(commits);

        Ok(NextVersion {
            version: bump(&base, magnitude),
            magnitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CommitClassifier;
    use crate::error::GitSemanticError;

    fn classify_all(messages: &[&str]) -> Vec<ClassifiedCommit> {
        let classifier = CommitClassifier::default();
        messages.iter().map(|m| classifier.classify(m)).collect()
    }

    fn next(base: &str, messages: &[&str]) -> NextVersion {
        VersionLedger::new()
            .next_version(base, &classify_all(messages))
            .unwrap()
    }

    #[test]
    fn test_feature_and_fix_bump_minor() {
        let result = next("0.0.0", &["feat: add x", "fix: correct y"]);
        assert_eq!(result.magnitude, Magnitude::Minor);
        assert_eq!(result.version.unwrap().to_string(), "0.1.0");
    }

    #[test]
    fn test_many_fixes_bump_patch_once() {
        let result = next("0.0.0", &["fix: a", "fix: b", "chore: c"]);
        assert_eq!(result.magnitude, Magnitude::Patch);
        assert_eq!(result.version.unwrap().to_string(), "0.0.1");
    }

    #[test]
    fn test_major_anywhere_dominates() {
        let result = next(
            "1.4.2",
            &[
                "fix: newest",
                "feat: middle",
                "fix: minor change\n\nBREAKING CHANGE: removed API",
                "feat: oldest",
            ],
        );
        assert_eq!(result.magnitude, Magnitude::Major);
        assert_eq!(result.version.unwrap().to_string(), "2.0.0");
    }

    #[test]
    fn test_break_type_bumps_major() {
        let result = next("0.3.9", &["break(api): drop v1"]);
        assert_eq!(result.version.unwrap().to_string(), "1.0.0");
    }

    #[test]
    fn test_no_releasable_commits() {
        let result = next("1.0.0", &["docs: readme", "chore: deps", "Merge branch 'x'"]);
        assert_eq!(result.magnitude, Magnitude::None);
        assert_eq!(result.version, None);
    }

    #[test]
    fn test_empty_sequence() {
        let result = next("1.0.0", &[]);
        assert_eq!(result.magnitude, Magnitude::None);
        assert_eq!(result.version, None);
    }

    #[test]
    fn test_decision_is_max_and_idempotent() {
        let messages = ["perf: a", "docs: b", "feat(x): c", "ref: d"];
        let commits = classify_all(&messages);
        let ledger = VersionLedger::new();

        let expected = commits.iter().map(|c| c.magnitude).max().unwrap();
        assert_eq!(ledger.magnitude(&commits), expected);

        let first = ledger.next_version("2.1.0", &commits).unwrap();
        let second = ledger.next_version("2.1.0", &classify_all(&messages)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.version.unwrap().to_string(), "2.2.0");
    }

    #[test]
    fn test_invalid_base_version() {
        let err = VersionLedger::new()
            .next_version("not.a.version", &classify_all(&["feat: x"]))
            .unwrap_err();
        assert!(matches!(err, GitSemanticError::InvalidVersion(_)));
    }
}
