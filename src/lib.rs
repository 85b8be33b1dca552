pub mod actions;
pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod release;
pub mod ui;

pub use error::{GitSemanticError, Result};
pub use release::{ReleaseInfo, ReleaseInfoBuilder};
