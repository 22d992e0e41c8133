//! Core logic for commit-hash-injector
//!
//! Injects a version identifier, normally the abbreviated hash of the latest
//! git commit, into a static HTML page. The template page carries a
//! placeholder of eight lowercase `x` characters; the first one found is
//! replaced and the result written to a new file.
//!
//! # Examples
//! ```
//! use commit_hash_injector::substitute;
//!
//! let lines = vec!["<html>".to_string(), "Build: xxxxxxxx".to_string()];
//! let result = substitute(&lines, "Commit Hash: abc1234");
//!
//! assert!(result.found());
//! assert_eq!(result.lines[1], "Build: Commit Hash: abc1234");
//! ```

mod config;
mod error;
mod injector;
mod lines;
pub mod logging;
mod substitute;
mod version;
mod web;

pub use config::*;
pub use error::{InjectorError, Result};
pub use injector::{InjectionReport, Injector};
pub use lines::{split_lines, FileSink, FileSource, LineSink, LineSource};
pub use substitute::{substitute, Substitution, PLACEHOLDER};
pub use version::*;
pub use web::{configure, start_web_server, ServerState};
