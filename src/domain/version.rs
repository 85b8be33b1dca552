use crate::domain::commit::Magnitude;
use crate::error::{GitSemanticError, Result};
use semver::{BuildMetadata, Prerelease, Version};

/// Version assumed when a repository carries no version tag
pub const INITIAL_VERSION: &str = "0.0.0";

/// Build metadata attached to the current tag when the working tree has local changes
pub const DIRTY_METADATA: &str = "dirty";

const SHORT_HASH_LEN: usize = 7;

/// The implicit version of an untagged repository
pub fn initial_version() -> Version {
    Version::new(0, 0, 0)
}

/// Parse a version string strictly, reporting failures as `InvalidVersion`
pub fn parse_version(text: &str) -> Result<Version> {
    Version::parse(text)
        .map_err(|e| GitSemanticError::version(format!("'{}' is not a semantic version: {}", text, e)))
}

/// Parse a version from a tag name (e.g., "v1.2.3" -> 1.2.3).
///
/// Accepts a leading `v` or `V` and pads a missing minor or patch component with
/// zero, so `v1.2` reads as `1.2.0`. Anything else must be a valid semantic
/// version.
///
/// # Returns
/// * `Some(Version)` - Successfully parsed version
/// * `None` - If the tag is not a version tag
pub fn parse_tag_version(tag: &str) -> Option<Version> {
    let clean_tag = tag
        .strip_prefix('v')
        .or_else(|| tag.strip_prefix('V'))
        .unwrap_or(tag);

    let core_end = clean_tag.find(['-', '+']).unwrap_or(clean_tag.len());
    let (core, suffix) = clean_tag.split_at(core_end);

    let padded = match core.split('.').count() {
        1 => format!("{}.0.0{}", core, suffix),
        2 => format!("{}.0{}", core, suffix),
        _ => clean_tag.to_string(),
    };

    Version::parse(&padded).ok()
}

/// Apply a single increment of the given magnitude.
///
/// Returns `None` when the magnitude does not produce a release. Pre-release and
/// build metadata are always cleared; a patch bump of a pre-release only drops
/// the pre-release, since `1.2.3-rc.1` already precedes `1.2.3`.
pub fn bump(version: &Version, magnitude: Magnitude) -> Option<Version> {
    match magnitude {
        Magnitude::Major => Some(Version::new(version.major + 1, 0, 0)),
        Magnitude::Minor => Some(Version::new(version.major, version.minor + 1, 0)),
        Magnitude::Patch if !version.pre.is_empty() => {
            Some(Version::new(version.major, version.minor, version.patch))
        }
        Magnitude::Patch => Some(Version::new(version.major, version.minor, version.patch + 1)),
        Magnitude::None | Magnitude::Invalid => None,
    }
}

/// First seven characters of a commit hash
pub fn short_hash(hash: &str) -> &str {
    hash.get(..SHORT_HASH_LEN).unwrap_or(hash)
}

/// Build the tag describing the current working state.
///
/// Starts from `version`; a HEAD that is not the tagged commit adds its short
/// hash as pre-release, a dirty tree adds `dirty` build metadata.
pub fn current_tag(version: &Version, untagged_head: Option<&str>, dirty: bool) -> Version {
    let mut tag = version.clone();
    if let Some(hash) = untagged_head.filter(|h| !h.is_empty()) {
        tag.pre = hash_prerelease(short_hash(hash));
    }
    if dirty {
        tag.build = BuildMetadata::new(DIRTY_METADATA).unwrap_or(BuildMetadata::EMPTY);
    }
    tag
}

// A numeric identifier with a leading zero is not a legal pre-release, so such
// hashes get the `g` prefix git describe uses.
fn hash_prerelease(short: &str) -> Prerelease {
    Prerelease::new(short)
        .or_else(|_| Prerelease::new(&format!("g{}", short)))
        .unwrap_or(Prerelease::EMPTY)
}
