//! Analysis engine: tag discovery and reduction of commits to a release decision

pub mod tag_resolver;
pub mod version_ledger;

pub use tag_resolver::TagResolver;
pub use version_ledger::{NextVersion, VersionLedger};
