use anyhow::Context;
use showcase_core::config::Config;
use showcase_core::paths;
use std::path::{Path, PathBuf};

/// Overrides collected from flags and environment variables.
#[derive(Debug, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub operator_id: Option<u64>,
}

/// Resolve the effective configuration.
///
/// Priority, highest first:
/// 1. flags / environment (`overrides`)
/// 2. the config file: `--config`, else `showcase.yaml` in the data directory
/// 3. built-in defaults
///
/// An explicitly named config file must exist; the implicit one is optional.
pub fn resolve(overrides: &Overrides) -> anyhow::Result<Config> {
    let data_dir = overrides.data_dir.as_deref().unwrap_or(Path::new("."));

    let mut config = match &overrides.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => {
            let path = paths::default_config_path(data_dir);
            Config::load_or_default(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
    };

    if let Some(dir) = &overrides.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(id) = overrides.operator_id {
        config.operator_id = id;
    }
    Ok(config)
}
