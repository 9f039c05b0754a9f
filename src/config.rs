use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::checks::{ChecksConfig, CheckId, build_checks};

pub const CONFIG_FILE_NAME: &str = ".proptoolrc.json";

/// Characters that may separate a key from its value.
pub const ALLOWED_SEPARATORS: [char; 2] = ['=', ':'];

/// Characters that start a comment line.
pub const ALLOWED_COMMENT_MARKERS: [char; 2] = ['#', '!'];

/// Written after the comment marker of a reference comment emitted by `update`.
pub const REFERENCE_COMMENT_MARKER: &str = ">>";

/// Process-wide settings, built once per run and shared read-only by every
/// document and check.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Separator used when writing new entries.
    #[serde(default = "default_separator")]
    pub separator: char,
    /// Comment marker used when writing new comments.
    #[serde(default = "default_comment_marker")]
    pub comment_marker: char,
    /// Marks a comment as a deferred translation, e.g. `# ==> key =`.
    #[serde(default = "default_commented_out_marker")]
    pub commented_out_marker: String,
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,
    /// Language codes to check against every base file.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Base (reference) files.
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub strict: bool,
    /// Promote warnings to errors when deciding the exit status.
    #[serde(default)]
    pub fatal: bool,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default)]
    pub verbose: bool,
    /// Rewrite translation files using the reference as template.
    #[serde(default)]
    pub update: bool,
    /// Create missing translation files from the reference.
    #[serde(default)]
    pub create: bool,
    /// Include the reference value in commented-out entries written by `update`.
    #[serde(default)]
    pub write_content: bool,
    /// Write the reference value as a comment above every entry written by `update`.
    #[serde(default)]
    pub write_reference: bool,
    #[serde(default = "default_enabled_checks")]
    pub enabled_checks: Vec<CheckId>,
    #[serde(default)]
    pub checks: ChecksConfig,
}

fn default_separator() -> char {
    '='
}

fn default_comment_marker() -> char {
    '#'
}

fn default_commented_out_marker() -> String {
    "==>".to_string()
}

fn default_file_suffix() -> String {
    ".properties".to_string()
}

fn default_color() -> bool {
    true
}

fn default_enabled_checks() -> Vec<CheckId> {
    CheckId::all().to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            comment_marker: default_comment_marker(),
            commented_out_marker: default_commented_out_marker(),
            file_suffix: default_file_suffix(),
            languages: Vec::new(),
            files: Vec::new(),
            strict: false,
            fatal: false,
            color: default_color(),
            quiet: false,
            verbose: false,
            update: false,
            create: false,
            write_content: false,
            write_reference: false,
            enabled_checks: default_enabled_checks(),
            checks: ChecksConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Builds the enabled check suite once so that invalid check options
    /// (e.g. a broken key pattern) fail here rather than mid-run.
    pub fn validate(&self) -> Result<()> {
        if !ALLOWED_SEPARATORS.contains(&self.separator) {
            bail!(
                "Invalid 'separator': \"{}\" (allowed: {})",
                self.separator,
                join_chars(&ALLOWED_SEPARATORS)
            );
        }
        if !ALLOWED_COMMENT_MARKERS.contains(&self.comment_marker) {
            bail!(
                "Invalid 'commentMarker': \"{}\" (allowed: {})",
                self.comment_marker,
                join_chars(&ALLOWED_COMMENT_MARKERS)
            );
        }
        if self.commented_out_marker.is_empty()
            || self.commented_out_marker.chars().any(char::is_whitespace)
        {
            bail!(
                "Invalid 'commentedOutMarker': \"{}\" (must be non-empty, without white space)",
                self.commented_out_marker
            );
        }
        if self.file_suffix.is_empty() {
            bail!("Invalid 'fileSuffix': must not be empty");
        }

        build_checks(self).context("Invalid check configuration")?;

        Ok(())
    }

    /// Regex matching a commented-out translation line, capturing its key.
    ///
    /// The key stops at the first separator, so compact lines such as
    /// `# ==> link=http://example.com` still capture `link`.
    pub fn commented_out_regex(&self) -> std::result::Result<Regex, regex::Error> {
        let markers: String = ALLOWED_COMMENT_MARKERS.iter().collect();
        let separators: String = ALLOWED_SEPARATORS.iter().collect();
        Regex::new(&format!(
            r"^[{markers}]\s*{}\s*([^\s{separators}]+)\s*[{separators}].*$",
            regex::escape(&self.commented_out_marker),
        ))
    }

    /// Comment line recording `key` as a deferred translation.
    pub fn commented_out_line(&self, key: &str, value: Option<&str>) -> String {
        let line = format!(
            "{} {} {} {}",
            self.comment_marker, self.commented_out_marker, key, self.separator
        );
        match value {
            Some(value) => format!("{} {}", line, value),
            None => line,
        }
    }

    /// Comment line echoing a reference value for proofreading.
    pub fn reference_comment_line(&self, value: &str) -> String {
        format!(
            "{} {} {}",
            self.comment_marker, REFERENCE_COMMENT_MARKER, value
        )
    }

    /// Path of the `lang` translation of `base`: `dir/messages.properties`
    /// becomes `dir/messages_de.properties`.
    pub fn language_file(&self, base: &Path, lang: &str) -> Result<PathBuf> {
        let file_name = base
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Invalid base file name: {:?}", base))?;
        let Some(prefix) = file_name.strip_suffix(self.file_suffix.as_str()) else {
            bail!(
                "Base file {:?} does not end with \"{}\"",
                base,
                self.file_suffix
            );
        };
        Ok(base.with_file_name(format!("{}_{}{}", prefix, lang, self.file_suffix)))
    }
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub source: Option<PathBuf>,
}

/// Load the config from `explicit` if given, otherwise from the nearest
/// config file above `start_dir`, otherwise use defaults.
///
/// The result is not validated yet: command line overrides still apply.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {:?}", path);
            }
            Some(path.to_path_buf())
        }
        None => find_config_file(start_dir),
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
