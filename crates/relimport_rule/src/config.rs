use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

use crate::options::RuleOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "no-relative-imports")]
#[command(about = "Flag relative import paths in JavaScript/TypeScript projects")]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory `--root-dir` and rewritten paths are relative to (defaults to the root)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// JSON file with rule options (allowedDepth, allowSameFolder, rootDir, paths)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of `../` levels tolerated before an import is flagged
    #[arg(long)]
    pub allowed_depth: Option<usize>,

    /// Allow `./` imports. Only turns the option on; it cannot override
    /// `"allowSameFolder": true` from the options file
    #[arg(long)]
    pub allow_same_folder: bool,

    /// Project root that rewritten paths start from
    #[arg(long)]
    pub root_dir: Option<String>,

    /// Alias for a root-relative prefix, e.g. `@app=src/app` (repeatable, first match wins)
    #[arg(long = "path", value_name = "ALIAS=PREFIX", value_parser = parse_alias)]
    pub paths: Vec<(String, String)>,

    /// Only check files whose path contains this pattern
    #[arg(long)]
    pub glob: Option<String>,

    /// Rewrite flagged imports in place
    #[arg(long)]
    pub fix: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    #[clap(skip)]
    pub options: RuleOptions,
}

fn parse_alias(s: &str) -> Result<(String, String), String> {
    let (alias, prefix) =
        s.split_once('=').ok_or_else(|| format!("invalid alias '{}', expected ALIAS=PREFIX", s))?;
    if alias.is_empty() {
        return Err(format!("invalid alias '{}', alias is empty", s));
    }
    Ok((alias.to_string(), prefix.to_string()))
}

impl Config {
    /// Resolve the root and working directories and merge the options file with CLI flags
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, searching for git root");
            relimport_core::find_git_root()?
        };
        info!("Using root directory: {}", root.display());

        let cwd = match self.cwd.take() {
            Some(c) => c.canonicalize().unwrap_or(c),
            None => root.clone(),
        };
        debug!("Using working directory: {}", cwd.display());

        let mut options = match &self.config {
            Some(path) => RuleOptions::from_file(path)?,
            None => RuleOptions::default(),
        };
        if let Some(depth) = self.allowed_depth {
            options.allowed_depth = Some(depth);
        }
        if self.allow_same_folder {
            options.allow_same_folder = true;
        }
        if let Some(root_dir) = &self.root_dir {
            options.root_dir = root_dir.clone();
        }
        for (alias, prefix) in &self.paths {
            options.paths.push(alias.clone(), prefix.clone());
        }
        debug!(
            "Rule options: allowed_depth={:?}, allow_same_folder={}, root_dir={:?}, {} aliases",
            options.allowed_depth,
            options.allow_same_folder,
            options.root_dir,
            options.paths.len()
        );

        self.options = options;
        self.root = Some(root);
        self.cwd = Some(cwd);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    /// Get the working directory, returning an error if not initialized
    pub fn cwd(&self) -> Result<&PathBuf> {
        self.cwd
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["no-relative-imports"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cfg = parse(&[]);
        assert_eq!(cfg.allowed_depth, None);
        assert!(!cfg.allow_same_folder);
        assert!(cfg.paths.is_empty());
        assert!(!cfg.fix);
        assert_eq!(cfg.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_parse_repeated_paths_keep_order() {
        let cfg = parse(&["--path", "@app=src/app", "--path", "@=src"]);
        assert_eq!(
            cfg.paths,
            vec![
                ("@app".to_string(), "src/app".to_string()),
                ("@".to_string(), "src".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_invalid_path_rejected() {
        assert!(Config::try_parse_from(["no-relative-imports", "--path", "nope"]).is_err());
        assert!(Config::try_parse_from(["no-relative-imports", "--path", "=src"]).is_err());
    }

    #[test]
    fn test_initialize_merges_file_and_flags() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let options_file = root.join("relimport.json");
        fs::write(&options_file, r#"{"allowedDepth": 3, "rootDir": "src", "paths": {"@": "src"}}"#)
            .unwrap();

        let mut cfg = parse(&[
            "--root",
            root.to_str().unwrap(),
            "--config",
            options_file.to_str().unwrap(),
            "--allowed-depth",
            "1",
            "--path",
            "@lib=lib",
        ]);
        cfg.initialize().unwrap();

        assert_eq!(cfg.options.allowed_depth, Some(1));
        assert_eq!(cfg.options.root_dir, "src");
        let aliases: Vec<&str> = cfg.options.paths.iter().map(|e| e.alias.as_str()).collect();
        assert_eq!(aliases, vec!["@", "@lib"]);
        assert_eq!(cfg.cwd().unwrap(), cfg.root().unwrap());
    }

    #[test]
    fn test_initialize_invalid_options_file() {
        let temp_dir = TempDir::new().unwrap();
        let options_file = temp_dir.path().join("bad.json");
        fs::write(&options_file, r#"{"allowedDepth": "two"}"#).unwrap();

        let mut cfg = parse(&[
            "--root",
            temp_dir.path().to_str().unwrap(),
            "--config",
            options_file.to_str().unwrap(),
        ]);
        assert!(cfg.initialize().is_err());
    }

    #[test]
    fn test_root_before_initialize_errors() {
        let cfg = parse(&[]);
        assert!(cfg.root().is_err());
        assert!(cfg.cwd().is_err());
    }

    #[test]
    fn test_allow_same_folder_flag_only_turns_option_on() {
        let temp_dir = TempDir::new().unwrap();
        let options_file = temp_dir.path().join("relimport.json");
        fs::write(&options_file, r#"{"allowSameFolder": true}"#).unwrap();

        let mut cfg = parse(&[
            "--root",
            temp_dir.path().to_str().unwrap(),
            "--config",
            options_file.to_str().unwrap(),
        ]);
        cfg.initialize().unwrap();
        assert!(cfg.options.allow_same_folder);

        let help = Config::command().render_long_help().to_string();
        assert!(help.contains("cannot override"));
    }
}
