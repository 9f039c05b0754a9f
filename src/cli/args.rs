//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: check translation files against their reference files
//! - `init`: write a default `.proptoolrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{checks::CheckId, config::Config};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct CheckCommand {
    /// Config file (default: nearest .proptoolrc.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference (base) files, e.g. messages.properties
    #[arg(short, long, num_args = 1..)]
    pub base: Vec<PathBuf>,

    /// Language codes to check, e.g. de pl
    #[arg(short, long, num_args = 1..)]
    pub lang: Vec<String>,

    /// Checks to run (default: all)
    #[arg(long, value_enum, num_args = 1..)]
    pub checks: Vec<CheckId>,

    /// Also report keys that are only commented out
    #[arg(long)]
    pub strict: bool,

    /// Treat warnings as errors for the exit status
    #[arg(long)]
    pub fatal: bool,

    /// Rewrite translation files using the reference as template
    #[arg(long)]
    pub update: bool,

    /// Create missing translation files
    #[arg(long)]
    pub create: bool,

    /// Write the reference value into commented-out entries
    #[arg(long)]
    pub write_content: bool,

    /// Write the reference value as a comment above every entry
    #[arg(long)]
    pub write_reference: bool,

    /// Key/value separator for written entries
    #[arg(long)]
    pub separator: Option<char>,

    /// Comment marker for written comments
    #[arg(long)]
    pub comment_marker: Option<char>,

    /// File name suffix of properties files
    #[arg(long)]
    pub suffix: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Only print failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckCommand {
    /// Layer the command line over `config`. Flags only ever switch options on.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if !self.base.is_empty() {
            config.files = self
                .base
                .iter()
                .map(|path| path.display().to_string())
                .collect();
        }
        if !self.lang.is_empty() {
            config.languages = self.lang.clone();
        }
        if !self.checks.is_empty() {
            config.enabled_checks = self.checks.clone();
        }
        if let Some(separator) = self.separator {
            config.separator = separator;
        }
        if let Some(marker) = self.comment_marker {
            config.comment_marker = marker;
        }
        if let Some(suffix) = &self.suffix {
            config.file_suffix = suffix.clone();
        }

        config.strict |= self.strict;
        config.fatal |= self.fatal;
        config.update |= self.update;
        config.create |= self.create;
        config.write_content |= self.write_content;
        config.write_reference |= self.write_reference;
        config.quiet |= self.quiet;
        config.verbose |= self.verbose;
        if self.no_color {
            config.color = false;
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation files against their reference files
    Check(CheckCommand),
    /// Initialize a new .proptoolrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CheckCommand {
        let args = Arguments::try_parse_from(args).unwrap();
        match args.command {
            Some(Command::Check(cmd)) => cmd,
            other => panic!("expected check command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_options() {
        let cmd = parse(&[
            "prop-tool",
            "check",
            "-b",
            "a.properties",
            "b.properties",
            "-l",
            "de",
            "pl",
            "--checks",
            "brackets",
            "key-format",
            "--separator",
            ":",
        ]);
        assert_eq!(cmd.base.len(), 2);
        assert_eq!(cmd.lang, vec!["de", "pl"]);
        assert_eq!(cmd.checks, vec![CheckId::Brackets, CheckId::KeyFormat]);
        assert_eq!(cmd.separator, Some(':'));
    }

    #[test]
    fn test_command_line_overrides_config() {
        let config = Config {
            languages: vec!["fr".to_string()],
            fatal: true,
            ..Default::default()
        };
        let cmd = parse(&["prop-tool", "check", "-l", "de", "--strict", "--no-color"]);
        let config = cmd.apply_to(config);

        assert_eq!(config.languages, vec!["de"]);
        assert!(config.strict);
        assert!(config.fatal);
        assert!(!config.color);
        assert!(config.files.is_empty());
    }

    #[test]
    fn test_unknown_check_is_rejected() {
        assert!(Arguments::try_parse_from(["prop-tool", "check", "--checks", "nope"]).is_err());
    }
}
