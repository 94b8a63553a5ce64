use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity allowed to run mutating commands when none is configured.
pub const DEFAULT_OPERATOR_ID: u64 = 1146923509856096397;

pub const DEFAULT_PORT: u16 = 5000;

// ---------------------------------------------------------------------------
// ReadPolicy
// ---------------------------------------------------------------------------

/// What the store does when an existing document cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadPolicy {
    /// Treat the collection as empty and keep serving.
    #[default]
    Lenient,
    /// Surface the failure to the caller.
    Strict,
}

impl fmt::Display for ReadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReadPolicy::Lenient => "lenient",
            ReadPolicy::Strict => "strict",
        })
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_operator_id")]
    pub operator_id: u64,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub read_policy: ReadPolicy,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_operator_id() -> u64 {
    DEFAULT_OPERATOR_ID
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            operator_id: default_operator_id(),
            port: default_port(),
            read_policy: ReadPolicy::default(),
        }
    }
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_operator(mut self, operator_id: u64) -> Self {
        self.operator_id = operator_id;
        self
    }

    pub fn with_read_policy(mut self, policy: ReadPolicy) -> Self {
        self.read_policy = policy;
        self
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
