use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::config::{
    DEFAULT_DATASET_CANDIDATES, DEFAULT_LOG_LEVEL, ENV_DATASET_PATH, ENV_LOG_FORMAT,
};
use crate::errors::EngineError;

/// Layout of log lines written to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = EngineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(EngineError::Configuration(format!(
                "unknown log format '{other}' (expected 'pretty' or 'json')"
            ))),
        }
    }
}

/// Top-level configuration for loading the record store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Path to the JSON dataset file.
    pub dataset_path: PathBuf,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Log layout.
    pub log_format: LogFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_CANDIDATES[0]),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl StoreConfig {
    /// Override the dataset path.
    pub fn with_dataset_path(mut self, dataset_path: impl Into<PathBuf>) -> Self {
        self.dataset_path = dataset_path.into();
        self
    }

    /// Override the fallback log level.
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Override the log layout.
    pub fn with_log_format(mut self, log_format: LogFormat) -> Self {
        self.log_format = log_format;
        self
    }

    /// Build a configuration from an optional explicit dataset path plus the environment.
    ///
    /// The dataset path is resolved in order by explicit arg, the
    /// `SALESDASH_DATASET` variable, then the default candidates.
    pub fn resolve(dataset_override: Option<PathBuf>) -> Result<Self, EngineError> {
        let dataset_path = resolve_dataset_path(
            dataset_override,
            &[ENV_DATASET_PATH],
            DEFAULT_DATASET_CANDIDATES,
        )?;
        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(raw) => raw.parse()?,
            Err(_) => LogFormat::default(),
        };
        Ok(Self::default()
            .with_dataset_path(dataset_path)
            .with_log_format(log_format))
    }
}

/// Resolve a dataset file from an explicit override, environment keys, or default candidates.
pub fn resolve_dataset_path(
    override_arg: Option<PathBuf>,
    env_keys: &[&str],
    default_candidates: &[&str],
) -> Result<PathBuf, EngineError> {
    if let Some(path) = override_arg {
        if path.is_file() {
            return Ok(path);
        }
        return Err(EngineError::Configuration(format!(
            "dataset file not found: {}",
            path.display()
        )));
    }

    if let Some(env_path) = env_path(env_keys)? {
        return Ok(env_path);
    }

    first_existing_file(default_candidates).ok_or_else(|| {
        EngineError::Configuration(format!(
            "could not locate a dataset file; pass --dataset or set {}",
            env_keys.join(" / ")
        ))
    })
}

/// First set variable among `env_keys`; it must name an existing file.
fn env_path(env_keys: &[&str]) -> Result<Option<PathBuf>, EngineError> {
    let Some((key, value)) = env_keys
        .iter()
        .find_map(|key| env::var(key).ok().map(|value| (key, value)))
    else {
        return Ok(None);
    };
    let path = PathBuf::from(value);
    if !path.is_file() {
        return Err(EngineError::Configuration(format!(
            "{key} points at a missing dataset file: {}",
            path.display()
        )));
    }
    Ok(Some(path))
}

fn first_existing_file(candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}
