//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DeployError, DeployResult};

use super::types::Config;

pub const PROJECT_CONFIG: &str = ".armdeploy/config.toml";
pub const USER_CONFIG: &str = "armdeploy/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A configuration plus the warnings raised while loading it.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the configuration for a run.
///
/// An explicit path must exist. Otherwise the project config wins over the
/// user config, and defaults are used when neither exists. Environment
/// overrides apply last in every case.
pub fn discover(project_root: Option<&Path>, explicit: Option<&Path>) -> DeployResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => candidates(project_root).into_iter().find(|p| p.exists()),
    };

    let mut loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            debug!(path = %path.display(), "config loaded");
            LoadedConfig { config, warnings }
        }
        None => LoadedConfig::default(),
    };

    loaded.config = with_env_overrides(loaded.config);
    Ok(loaded)
}

/// Apply environment variable overrides (ARMDEPLOY_* prefix)
fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // ARMDEPLOY_SUBSCRIPTION
    if let Some(subscription) = var("ARMDEPLOY_SUBSCRIPTION").filter(|s| !s.is_empty()) {
        config.deploy.subscription = Some(subscription);
    }

    // ARMDEPLOY_DEPLOYMENT_PREFIX
    if let Some(prefix) = var("ARMDEPLOY_DEPLOYMENT_PREFIX").filter(|s| !s.is_empty()) {
        config.deploy.deployment_prefix = prefix;
    }

    // ARMDEPLOY_ARM_ENDPOINT
    if let Some(endpoint) = var("ARMDEPLOY_ARM_ENDPOINT").filter(|s| !s.is_empty()) {
        config.arm.endpoint = endpoint;
    }

    // ARMDEPLOY_ACCOUNTS
    if let Some(path) = var("ARMDEPLOY_ACCOUNTS").filter(|s| !s.is_empty()) {
        config.accounts.path = Some(PathBuf::from(path));
    }

    config
}

/// Default location of the accounts file
pub fn default_accounts_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("armdeploy/accounts.json"))
}

fn candidates(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG));
    }
    if let Some(user_config_dir) = dirs::config_dir() {
        paths.push(user_config_dir.join(USER_CONFIG));
    }
    paths
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "subscription",
        "deployment_prefix",
        "mode",
        "arm",
        "endpoint",
        "timeout_secs",
        "api_version_resources",
        "api_version_subscriptions",
        "accounts",
        "path",
        "settings",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
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
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
