//! Configuration management for `glossgen.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[build]`   | Input file, output directory, minification     |
//! | `[parse]`   | Duplicate term policy                          |
//! | `[render]`  | Cross-linking options                          |
//!
//! The file is optional. Command-line values override it, and paths that
//! are still missing afterwards are asked for interactively.
//!
//! # Example
//!
//! ```toml
//! [build]
//! input = "glossary.txt"
//! output = "public"
//! minify = false
//!
//! [parse]
//! duplicates = "reject"
//!
//! [render]
//! trailing = "keep"
//! ```

mod build;
pub mod defaults;
mod error;
mod parse;
mod render;

use build::BuildConfig;
use error::ConfigError;
use parse::ParseConfig;
use render::RenderConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Prompt shown when no input file was configured.
pub const INPUT_PROMPT: &str = "Name of input file: ";
/// Prompt shown when no output directory was configured.
pub const OUTPUT_PROMPT: &str = "Name of output folder: ";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing glossgen.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct GlossaryConfig {
    /// Path of the config file that was loaded, if any
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Input/output settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Glossary source parsing
    #[serde(default)]
    pub parse: ParseConfig,

    /// Page rendering
    #[serde(default)]
    pub render: RenderConfig,
}

impl GlossaryConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: GlossaryConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load the config file named by the CLI if it exists, else defaults.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = if cli.config.exists() {
            Self::from_path(&cli.config)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.input, cli.input.clone().map(Some).as_ref());
        Self::update_option(&mut self.build.output, cli.output.clone().map(Some).as_ref());
        Self::update_option(&mut self.build.minify, cli.minify.as_ref());
        Self::update_option(&mut self.parse.duplicates, cli.duplicates.as_ref());
        Self::update_option(&mut self.render.trailing, cli.trailing.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Fill in unset paths by asking `ask` with the matching prompt.
    ///
    /// An empty answer is an error.
    pub fn fill_missing_paths(&mut self, mut ask: impl FnMut(&str) -> Result<String>) -> Result<()> {
        if self.build.input.is_none() {
            self.build.input = Some(Self::required_answer(ask(INPUT_PROMPT)?, "input file")?);
        }
        if self.build.output.is_none() {
            self.build.output = Some(Self::required_answer(ask(OUTPUT_PROMPT)?, "output folder")?);
        }
        Ok(())
    }

    fn required_answer(answer: String, what: &'static str) -> Result<PathBuf> {
        let answer = answer.trim();
        if answer.is_empty() {
            bail!(ConfigError::Missing(what));
        }
        Ok(PathBuf::from(answer))
    }

    /// Glossary source file.
    pub fn input(&self) -> Result<&Path> {
        match &self.build.input {
            Some(path) => Ok(path),
            None => bail!(ConfigError::Missing("input file")),
        }
    }

    /// Output directory.
    pub fn output(&self) -> Result<&Path> {
        match &self.build.output {
            Some(path) => Ok(path),
            None => bail!(ConfigError::Missing("output folder")),
        }
    }

    /// Reject path combinations that can never produce a build.
    ///
    /// Existence is not checked here: a missing input or output directory is
    /// reported by the build itself.
    pub fn validate(&self) -> Result<()> {
        let input = self.input()?;
        let output = self.output()?;

        if input.is_dir() {
            bail!(ConfigError::Validation(format!(
                "[build.input] `{}` is a directory",
                input.display()
            )));
        }

        if output.exists() && !output.is_dir() {
            bail!(ConfigError::Validation(format!(
                "[build.output] `{}` is not a directory",
                output.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::DuplicatePolicy;
    use crate::render::TrailingWords;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("glossgen").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_config() {
        let config = GlossaryConfig::default();

        assert!(config.config_path.is_none());
        assert!(config.build.input.is_none());
        assert!(config.build.output.is_none());
        assert!(!config.build.minify);
        assert_eq!(config.parse.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.render.trailing, TrailingWords::Keep);
    }

    #[test]
    fn test_from_str_all_sections() {
        let config = GlossaryConfig::from_str(
            r#"
            [build]
            input = "glossary.txt"
            output = "public"
            minify = true

            [parse]
            duplicates = "last"

            [render]
            trailing = "drop"
        "#,
        )
        .unwrap();

        assert_eq!(config.input().unwrap(), Path::new("glossary.txt"));
        assert_eq!(config.output().unwrap(), Path::new("public"));
        assert!(config.build.minify);
        assert_eq!(config.parse.duplicates, DuplicatePolicy::Last);
        assert_eq!(config.render.trailing, TrailingWords::Drop);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(GlossaryConfig::from_str("[build\ninput = 1").is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = GlossaryConfig::from_str(
            r#"
            [serve]
            port = 5277
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_records_location() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("glossgen.toml");
        fs::write(&path, "[build]\noutput = \"out\"\n").unwrap();

        let config = GlossaryConfig::from_path(&path).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.output().unwrap(), Path::new("out"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = GlossaryConfig::from_path(Path::new("/nonexistent/glossgen.toml")).unwrap_err();
        assert!(format!("{err}").contains("IO error"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = GlossaryConfig::from_str(
            r#"
            [build]
            input = "from-file.txt"
            output = "from-file"
        "#,
        )
        .unwrap();
        config.update_with_cli(&cli(&["cli.txt", "--trailing", "drop", "--minify"]));

        assert_eq!(config.input().unwrap(), Path::new("cli.txt"));
        // Not given on the command line, file value stays
        assert_eq!(config.output().unwrap(), Path::new("from-file"));
        assert!(config.build.minify);
        assert_eq!(config.render.trailing, TrailingWords::Drop);
        assert_eq!(config.parse.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_load_existing_file_with_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("glossgen.toml");
        fs::write(
            &path,
            r#"
            [build]
            input = "from-file.txt"
            output = "from-file"
            minify = true

            [parse]
            duplicates = "last"
        "#,
        )
        .unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let config = GlossaryConfig::load(&cli(&[
            "-C",
            &path_arg,
            "cli.txt",
            "--minify=false",
            "--duplicates",
            "reject",
        ]))
        .unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.input().unwrap(), Path::new("cli.txt"));
        assert_eq!(config.output().unwrap(), Path::new("from-file"));
        assert!(!config.build.minify);
        assert_eq!(config.parse.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path_arg = dir.path().join("absent.toml").to_string_lossy().into_owned();
        let config = GlossaryConfig::load(&cli(&["-C", &path_arg, "in.txt", "out"])).unwrap();

        assert!(config.config_path.is_none());
        assert_eq!(config.input().unwrap(), Path::new("in.txt"));
        assert_eq!(config.output().unwrap(), Path::new("out"));
        assert_eq!(config.render.trailing, TrailingWords::Keep);
    }

    #[test]
    fn test_fill_missing_paths_prompts_in_order() {
        let mut config = GlossaryConfig::default();
        let mut asked = Vec::new();
        config
            .fill_missing_paths(|prompt| {
                asked.push(prompt.to_owned());
                let answer = if prompt == INPUT_PROMPT { " terms.txt\n" } else { "out" };
                Ok(answer.to_owned())
            })
            .unwrap();

        assert_eq!(asked, vec![INPUT_PROMPT, OUTPUT_PROMPT]);
        assert_eq!(config.input().unwrap(), Path::new("terms.txt"));
        assert_eq!(config.output().unwrap(), Path::new("out"));
    }

    #[test]
    fn test_fill_missing_paths_skips_known() {
        let mut config = GlossaryConfig::default();
        config.update_with_cli(&cli(&["in.txt", "out"]));
        config
            .fill_missing_paths(|_| panic!("should not prompt"))
            .unwrap();
    }

    #[test]
    fn test_fill_missing_paths_empty_answer() {
        let mut config = GlossaryConfig::default();
        let err = config.fill_missing_paths(|_| Ok(String::new())).unwrap_err();
        assert!(format!("{err}").contains("No input file given"));
    }

    #[test]
    fn test_validate_input_is_directory() {
        let dir = TempDir::new().unwrap();
        let mut config = GlossaryConfig::default();
        config.build.input = Some(dir.path().to_path_buf());
        config.build.output = Some(dir.path().to_path_buf());

        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("[build.input]"));
    }

    #[test]
    fn test_validate_output_is_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("glossary.txt");
        fs::write(&file, "A\nB\n").unwrap();

        let mut config = GlossaryConfig::default();
        config.build.input = Some(file.clone());
        config.build.output = Some(file);

        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("[build.output]"));
    }

    #[test]
    fn test_validate_missing_output_is_left_to_build() {
        let dir = TempDir::new().unwrap();
        let mut config = GlossaryConfig::default();
        config.build.input = Some(dir.path().join("glossary.txt"));
        config.build.output = Some(dir.path().join("missing"));

        assert!(config.validate().is_ok());
    }
}
