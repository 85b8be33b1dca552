use crate::config::ClassificationConfig;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Marker that forces a major release wherever it appears in a commit message
pub const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE:";

const SCOPE_WILDCARD: &str = "*";

/// Class of change a commit implies for version numbering.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Invalid < None < Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    Invalid,
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl Magnitude {
    /// Whether this magnitude produces a new version
    pub fn is_release(self) -> bool {
        self >= Magnitude::Patch
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Magnitude::Invalid => "invalid",
            Magnitude::None => "none",
            Magnitude::Patch => "patch",
            Magnitude::Minor => "minor",
            Magnitude::Major => "major",
        };
        f.pad(label)
    }
}

/// A commit message broken into its conventional-commit parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedCommit {
    pub hash: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub scope: String,
    pub message: String,
    pub magnitude: Magnitude,
}

impl ClassifiedCommit {
    /// First line of the free-text description
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// Header of a conventional commit: `type(scope): rest` or `type: rest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub r#type: &'a str,
    pub scope: &'a str,
    pub rest: &'a str,
}

fn scoped_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_]+)\(([A-Za-z0-9_]+|\*)\): (.+)")
            .expect("scoped header pattern is valid")
    })
}

fn plain_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_]+): (.+)").expect("plain header pattern is valid")
    })
}

/// Parse the conventional-commit header at the very start of `text`.
///
/// Tries `type(scope): rest` first, then `type: rest`. A scope of `*` is
/// normalised to empty. `rest` is the remainder of the first line with
/// trailing whitespace removed, so a header with nothing after `": "` does not
/// match.
pub fn parse_header(text: &str) -> Option<Header<'_>> {
    if let Some(captures) = scoped_header().captures(text) {
        let scope = captures.get(2).map_or("", |m| m.as_str());
        return Some(Header {
            r#type: captures.get(1).map_or("", |m| m.as_str()),
            scope: if scope == SCOPE_WILDCARD { "" } else { scope },
            rest: captures.get(3).map_or("", |m| m.as_str().trim_end()),
        });
    }

    plain_header().captures(text).map(|captures| Header {
        r#type: captures.get(1).map_or("", |m| m.as_str()),
        scope: "",
        rest: captures.get(2).map_or("", |m| m.as_str().trim_end()),
    })
}

/// Assigns a [`Magnitude`] to commit messages using a fixed set of type tables
#[derive(Debug, Clone, Default)]
pub struct CommitClassifier {
    tables: ClassificationConfig,
}

impl CommitClassifier {
    /// Create a classifier over the given type tables
    pub fn new(tables: ClassificationConfig) -> Self {
        CommitClassifier { tables }
    }

    /// Classify a raw commit message. The hash is left empty.
    ///
    /// Never fails: a message without a recognisable header keeps its full text
    /// as `message` and has empty `type` and `scope`.
    pub fn classify(&self, raw: &str) -> ClassifiedCommit {
        let (r#type, scope, message) = match parse_header(raw) {
            Some(header) => (header.r#type, header.scope, header.rest),
            None => ("", "", raw),
        };

        ClassifiedCommit {
            hash: String::new(),
            r#type: r#type.to_string(),
            scope: scope.to_string(),
            message: message.to_string(),
            magnitude: self.magnitude(r#type, raw),
        }
    }

    /// Classify a raw commit message and attach its hash
    pub fn classify_with_hash(&self, hash: impl Into<String>, raw: &str) -> ClassifiedCommit {
        ClassifiedCommit {
            hash: hash.into(),
            ..self.classify(raw)
        }
    }

    fn magnitude(&self, commit_type: &str, raw: &str) -> Magnitude {
        let listed = |table: &[String]| table.iter().any(|t| t == commit_type);

        if raw.contains(BREAKING_CHANGE_MARKER) {
            Magnitude::Major
        } else if listed(&self.tables.major) {
            Magnitude::Major
        } else if listed(&self.tables.minor) {
            Magnitude::Minor
        } else if listed(&self.tables.patch) {
            Magnitude::Patch
        } else {
            Magnitude::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(message: &str) -> ClassifiedCommit {
        CommitClassifier::default().classify(message)
    }

    #[test]
    fn test_parse_with_scope() {
        let commit = classify("feat(auth): add login");
        assert_eq!(commit.r#type, "feat");
        assert_eq!(commit.scope, "auth");
        assert_eq!(commit.message, "add login");
        assert_eq!(commit.magnitude, Magnitude::Minor);
    }

    #[test]
    fn test_parse_without_scope() {
        let commit = classify("fix: correct y");
        assert_eq!(commit.r#type, "fix");
        assert_eq!(commit.scope, "");
        assert_eq!(commit.message, "correct y");
        assert_eq!(commit.magnitude, Magnitude::Patch);
    }

    #[test]
    fn test_wildcard_scope_is_empty() {
        for message in ["feat(*): everything", "fix(*): all of it", "chore(*): x"] {
            let commit = classify(message);
            assert_eq!(commit.scope, "", "scope of {:?}", message);
        }
        assert_eq!(classify("feat(*): everything").r#type, "feat");
    }

    #[test]
    fn test_non_conventional_keeps_whole_message() {
        let commit = classify("Random commit message");
        assert_eq!(commit.r#type, "");
        assert_eq!(commit.scope, "");
        assert_eq!(commit.message, "Random commit message");
        assert_eq!(commit.magnitude, Magnitude::None);
    }

    #[test]
    fn test_header_must_start_the_message() {
        let commit = classify("Merge branch 'x'\n\nfeat: hidden");
        assert_eq!(commit.r#type, "");
        assert_eq!(commit.magnitude, Magnitude::None);
    }

    #[test]
    fn test_header_needs_space_and_text() {
        assert!(parse_header("fix:no space").is_none());
        assert!(parse_header("fix: ").is_none());
        assert!(parse_header("").is_none());
    }

    #[test]
    fn test_breaking_change_footer_forces_major() {
        let commit = classify("fix: minor change\n\nBREAKING CHANGE: removed API");
        assert_eq!(commit.r#type, "fix");
        assert_eq!(commit.magnitude, Magnitude::Major);
    }

    #[test]
    fn test_breaking_change_without_header_forces_major() {
        let commit = classify("rework storage\n\nBREAKING CHANGE: new format");
        assert_eq!(commit.r#type, "");
        assert_eq!(commit.magnitude, Magnitude::Major);
    }

    #[test]
    fn test_type_tables() {
        assert_eq!(classify("break: drop v1 api").magnitude, Magnitude::Major);
        assert_eq!(classify("feat(ui): dark mode").magnitude, Magnitude::Minor);
        assert_eq!(classify("ref: extract module").magnitude, Magnitude::Patch);
        assert_eq!(classify("perf: cache results").magnitude, Magnitude::Patch);
        assert_eq!(classify("docs: update readme").magnitude, Magnitude::None);
        assert_eq!(classify("chore: c").magnitude, Magnitude::None);
    }

    #[test]
    fn test_type_matching_is_case_sensitive() {
        let commit = classify("Feat: capitalised");
        assert_eq!(commit.r#type, "Feat");
        assert_eq!(commit.magnitude, Magnitude::None);
    }

    #[test]
    fn test_custom_tables() {
        let classifier = CommitClassifier::new(ClassificationConfig {
            major: vec!["epic".to_string()],
            minor: vec![],
            patch: vec!["docs".to_string()],
        });
        assert_eq!(classifier.classify("epic: rewrite").magnitude, Magnitude::Major);
        assert_eq!(classifier.classify("feat: x").magnitude, Magnitude::None);
        assert_eq!(classifier.classify("docs: y").magnitude, Magnitude::Patch);
    }

    #[test]
    fn test_message_stops_at_first_line() {
        let commit = classify("feat(api): add endpoint\n\nLonger description");
        assert_eq!(commit.message, "add endpoint");
        assert_eq!(commit.summary(), "add endpoint");

        let commit = classify("fix: trailing cr\r\nbody");
        assert_eq!(commit.message, "trailing cr");
    }

    #[test]
    fn test_empty_subject_is_not_a_header() {
        let commit = classify("fix: \nbody text");
        assert_eq!(commit.r#type, "");
        assert_eq!(commit.scope, "");
        assert_eq!(commit.message, "fix: \nbody text");
        assert_eq!(commit.magnitude, Magnitude::None);
        assert!(parse_header("feat(api): \nbody").is_none());
    }

    #[test]
    fn test_classify_with_hash() {
        let commit = CommitClassifier::default().classify_with_hash("abc123", "fix: a");
        assert_eq!(commit.hash, "abc123");
        assert_eq!(commit.magnitude, Magnitude::Patch);
    }

    #[test]
    fn test_magnitude_order() {
        assert!(Magnitude::Invalid < Magnitude::None);
        assert!(Magnitude::None < Magnitude::Patch);
        assert!(Magnitude::Patch < Magnitude::Minor);
        assert!(Magnitude::Minor < Magnitude::Major);
        assert!(!Magnitude::None.is_release());
        assert!(Magnitude::Patch.is_release());
    }
}
