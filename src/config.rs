use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Defaults
// =============================================================================

/// Maven metadata listing every published Jenkins WAR version
pub const DEFAULT_METADATA_URL: &str =
    "https://repo.jenkins-ci.org/releases/org/jenkins-ci/main/jenkins-war/maven-metadata.xml";

/// Public download host serving the packages
pub const DEFAULT_HOST: &str = "get.jenkins.io";

/// Local DogStatsD agent
pub const DEFAULT_STATSD_ADDRESS: &str = "127.0.0.1:8125";

/// Name of the availability gauge
pub const METRIC_NAME: &str = "jenkins.package.available";

/// User agent sent with every request
pub const USER_AGENT: &str = "package-availability";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No package to check: pass --package or configure instances")]
    NoPackages,
}

/// Check configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    pub metadata_url: String,
    pub host: String,
    /// Request timeout in seconds; the HTTP client default applies when unset
    pub timeout_secs: Option<u64>,
    pub statsd: StatsdConfig,
    pub instances: Vec<InstanceConfig>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            timeout_secs: None,
            statsd: StatsdConfig::default(),
            instances: Vec::new(),
        }
    }
}

/// DogStatsD agent configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatsdConfig {
    pub address: String,
}

impl Default for StatsdConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_STATSD_ADDRESS.to_string(),
        }
    }
}

/// One check-runner instance
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InstanceConfig {
    pub package: String,
}

impl CheckConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Packages to check: the explicit list when given, otherwise the configured instances
    pub fn packages_to_check(&self, requested: &[String]) -> Result<Vec<String>, ConfigError> {
        let packages: Vec<String> = if requested.is_empty() {
            self.instances.iter().map(|i| i.package.clone()).collect()
        } else {
            requested.to_vec()
        };

        if packages.is_empty() {
            return Err(ConfigError::NoPackages);
        }
        Ok(packages)
    }
}

/// Returns the path to the data directory for package-availability.
/// Uses $XDG_DATA_HOME/package-availability if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/package-availability,
/// or ./package-availability if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("package-availability.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("package-availability")
}
