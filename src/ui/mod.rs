//! User interface module - terminal output of the release report.
//!
//! - `formatter` - Pure formatting functions and printers

pub mod formatter;

pub use formatter::{
    display_error, display_release_info, display_status, display_success, format_commit_line,
};
