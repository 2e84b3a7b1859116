//! Relative import detection for JavaScript/TypeScript projects.
//!
//! This crate flags `import` declarations whose path is written relative to the
//! importing file (`./x`, `../x`) in projects that want root-relative or
//! aliased paths instead, and computes the replacement for each one.
//!
//! Each import is judged on its own by a [`Policy`]: the path is classified,
//! its upward depth compared against `allowedDepth`, and flagged imports get a
//! rewrite from [`absolute_path`].
//!
//! # Examples
//!
//! ## Checking a single import
//!
//! ```
//! use relimport_core::{ImportStatement, TextRange};
//! use relimport_rule::{Policy, RuleOptions};
//! use std::path::PathBuf;
//!
//! let policy = Policy::new(RuleOptions { allowed_depth: Some(1), ..Default::default() }, "/proj");
//! let stmt = ImportStatement {
//!     raw_path: "../../lib".to_string(),
//!     source_file: PathBuf::from("/proj/src/a/b.ts"),
//!     range: TextRange::new(15, 24),
//!     line: 1,
//!     column: 16,
//! };
//!
//! let violation = policy.evaluate(&stmt).expect("depth 2 is over the limit");
//! assert_eq!(violation.replacement.as_deref(), Some("lib"));
//! ```
//!
//! ## Checking a project
//!
//! ```no_run
//! use clap::Parser;
//! use relimport_rule::{Config, run_no_relative_imports_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::parse_from(["no-relative-imports", "--root", "/path/to/project"]);
//!
//! let result = run_no_relative_imports_check(cfg.clone())?;
//!
//! if !result.violations.is_empty() {
//!     let mut stdout = BufWriter::new(std::io::stdout());
//!     relimport_rule::print_violations(&mut stdout, &result, &cfg)?;
//!     stdout.flush()?;
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod classify;
mod config;
mod depth;
mod options;
mod policy;
mod reporter;
mod resolver;
mod types;

// Re-export public API
pub use checker::run_no_relative_imports_check;
pub use classify::{Classification, classify};
pub use config::{Config, OutputFormat};
pub use depth::relative_depth;
pub use options::{AliasEntry, AliasTable, RuleOptions};
pub use policy::Policy;
pub use reporter::{print_no_violations_message, print_violations, print_violations_json};
pub use resolver::{absolute_path, destination, project_root};
pub use types::{CheckResult, MESSAGE, Violation};
