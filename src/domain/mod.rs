//! Domain logic - pure version rules independent of git operations

pub mod commit;
pub mod tag;
pub mod version;

pub use commit::{parse_header, ClassifiedCommit, CommitClassifier, Header, Magnitude};
pub use tag::{resolve_latest, LatestVersion, TagRef};
