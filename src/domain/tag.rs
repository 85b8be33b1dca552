use crate::domain::version::{initial_version, parse_tag_version};
use semver::Version;
use std::cmp::Ordering;

/// A tag reference and the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub commit: String,
}

impl TagRef {
    /// Create a new tag reference
    pub fn new(name: impl Into<String>, commit: impl Into<String>) -> Self {
        TagRef {
            name: name.into(),
            commit: commit.into(),
        }
    }
}

/// Highest version tag of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestVersion {
    pub version: Version,
    /// Commit of the tag, empty when the repository has no version tag
    pub commit: String,
}

impl Default for LatestVersion {
    fn default() -> Self {
        LatestVersion {
            version: initial_version(),
            commit: String::new(),
        }
    }
}

/// Find the highest version among `tags`.
///
/// Names that do not parse as versions are skipped. The result starts at
/// `0.0.0` with no commit and only moves for a version of strictly greater
/// precedence, so neither `0.0.0` nor `0.0.0+build` replaces it. Build metadata
/// does not affect precedence; versions of equal precedence are settled by tag
/// name, which keeps the result independent of tag order.
pub fn resolve_latest<I>(tags: I) -> LatestVersion
where
    I: IntoIterator<Item = TagRef>,
{
    let best = tags
        .into_iter()
        .filter_map(|tag| match parse_tag_version(&tag.name) {
            Some(version) => Some((version, tag)),
            None => {
                tracing::debug!(tag = %tag.name, "skipping tag that is not a version");
                None
            }
        })
        .fold(None, |best: Option<(Version, TagRef)>, candidate| match best {
            Some(current) if precedence(&current, &candidate) != Ordering::Less => Some(current),
            _ => Some(candidate),
        });

    match best {
        Some((version, tag)) if version.cmp_precedence(&initial_version()) == Ordering::Greater => {
            LatestVersion {
                version,
                commit: tag.commit,
            }
        }
        _ => LatestVersion::default(),
    }
}

fn precedence(a: &(Version, TagRef), b: &(Version, TagRef)) -> Ordering {
    a.0.cmp_precedence(&b.0).then_with(|| a.1.name.cmp(&b.1.name))
}
