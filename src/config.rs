//! Configuration module for tagpick
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TAGPICK_*)
//! 3. Explicit `--config` file, else project config (./tagpick.toml)
//! 4. User config (<config dir>/tagpick/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TagpickError, TagpickResult};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "tagpick.toml";

/// Tag source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsConfig {
    #[serde(default = "default_tags_file")]
    pub file: PathBuf,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            file: default_tags_file(),
        }
    }
}

fn default_tags_file() -> PathBuf {
    PathBuf::from("tags.json")
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: bool,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TagpickResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TagpickResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| TagpickError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .rsplit('.')
                    .next()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                    key,
                    file: path.to_path_buf(),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist. Otherwise the project config in `cwd`
    /// wins over the user config, and defaults apply when neither exists.
    /// Environment overrides are applied last.
    pub fn resolve(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> TagpickResult<(Self, Vec<ConfigWarning>)> {
        let candidate = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => [
                Some(cwd.join(PROJECT_CONFIG_FILE)),
                dirs::config_dir().map(|dir| dir.join("tagpick").join("config.toml")),
            ]
            .into_iter()
            .flatten()
            .find(|path| path.is_file()),
        };

        let (config, warnings) = match candidate {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load_with_warnings(&path)?
            }
            None => (Self::default(), Vec::new()),
        };

        Ok((config.with_env_overrides(), warnings))
    }

    /// Apply environment variable overrides (TAGPICK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        // TAGPICK_TAGS_FILE
        if let Some(file) = get_env("TAGPICK_TAGS_FILE").filter(|f| !f.is_empty()) {
            self.tags.file = PathBuf::from(file);
        }

        // TAGPICK_JSON
        if let Some(json) = get_env("TAGPICK_JSON").and_then(|v| parse_bool(&v)) {
            self.output.json = json;
        }

        // TAGPICK_UNICODE
        if let Some(unicode) = get_env("TAGPICK_UNICODE").and_then(|v| parse_bool(&v)) {
            self.output.unicode = unicode;
        }

        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["tags", "file", "output", "json", "unicode"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
