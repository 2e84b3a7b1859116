use anyhow::{Result, anyhow};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{path::PathBuf, sync::Arc, thread};

use relimport_core::{CollectorConfig, Fix, collect_sources, imports_for, write_fixes};

use crate::{
    config::Config,
    policy::Policy,
    types::{CheckResult, Violation},
};

pub fn run_no_relative_imports_check(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting relative import check");

    // Initialize config (resolve root and working directory, load rule options)
    cfg.initialize()?;
    let root = cfg.root()?.clone();

    debug!("Collecting source files with glob: {:?}", cfg.glob);
    let collector_cfg = CollectorConfig { root: root.clone(), glob: cfg.glob.clone() };
    let files = collect_sources(&collector_cfg)?;
    if files.is_empty() {
        warn!("No source files found under {}", root.display());
        return Err(anyhow!("No source files found under {}", root.display()));
    }
    info!("Found {} source files", files.len());

    let policy = Arc::new(Policy::new(cfg.options.clone(), cfg.cwd()?.clone()));
    let fix = cfg.fix;

    info!("Processing {} source files in parallel", files.len());

    let per_file: Vec<(PathBuf, Vec<Violation>, usize)> = files
        .par_iter()
        .filter_map(|file| {
            let thread_id = thread::current().id();
            debug!("Thread {:?} processing: {}", thread_id, file.display());

            let policy = Arc::clone(&policy);
            let parsed = match imports_for(file) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Error parsing imports for {}: {}", file.display(), e);
                    return None;
                }
            };

            let violations: Vec<Violation> = parsed
                .imports
                .iter()
                .filter_map(|stmt| {
                    trace!("Checking import: '{}'", stmt.raw_path);
                    policy.evaluate(stmt)
                })
                .collect();

            let fixed = if fix && parsed.has_errors() {
                warn!(
                    "Not fixing {}: {} parse errors",
                    file.display(),
                    parsed.parse_errors
                );
                0
            } else if fix && !violations.is_empty() {
                let fixes: Vec<Fix> = violations.iter().filter_map(Violation::fix).collect();
                match write_fixes(file, &fixes) {
                    Ok(count) => count,
                    Err(e) => {
                        warn!("Error fixing {}: {}", file.display(), e);
                        0
                    }
                }
            } else {
                0
            };

            Some((file.clone(), violations, fixed))
        })
        .collect();

    let files_analyzed = per_file.len();
    let fixes_applied: usize = per_file.iter().map(|(_, _, fixed)| fixed).sum();
    let mut violations: Vec<Violation> =
        per_file.into_iter().flat_map(|(_, violations, _)| violations).collect();
    violations.sort_by(|a, b| {
        (&a.statement.source_file, a.statement.range)
            .cmp(&(&b.statement.source_file, b.statement.range))
    });

    info!(
        "Relative import check complete. Found {} violations in {} files",
        violations.len(),
        files_analyzed
    );
    if fix {
        info!("Applied {} fixes", fixes_applied);
    }

    Ok(CheckResult { root, violations, files_analyzed, fixes_applied })
}
