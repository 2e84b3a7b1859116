//! Core utilities for relimport.
//!
//! This crate provides the JavaScript/TypeScript plumbing the import rules run
//! on top of:
//! - Collecting source files from a project
//! - Parsing import declarations (with the byte range of each path literal)
//! - Applying text fixes back to source files
//! - Configuration utilities (git root finding)

mod collector;
mod config;
mod constants;
mod fixer;
mod parser;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_sources};
pub use config::{find_git_root, find_git_root_from};
pub use constants::{JS_TS_EXTENSIONS, SKIPPED_DIRS};
pub use fixer::{Fix, apply_fixes, write_fixes};
pub use parser::{imports_for, imports_in_source};
pub use types::{ImportStatement, ParsedImports, TextRange};
