use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Fallback endpoint when nothing else names a prover
pub const DEFAULT_PROVER_URL: &str = "http://localhost:8787/api/prove";

/// Environment variable overriding the prover endpoint
pub const PROVER_URL_ENV: &str = "REQMINE_PROVER_URL";

/// Environment variable overriding the prover timeout, shared with the server
pub const PROVER_TIMEOUT_ENV: &str = "PROVER_TIMEOUT_MS";

/// Environment variable overriding the server port
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Which linguistic capability the analyzer should use
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinguisticsMode {
    #[default]
    Lexicon,
    None,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProverConfig {
    /// Endpoint of the remote evaluation service
    pub url: Option<String>,

    /// Client-side timeout for a single evaluation
    pub timeout_ms: u64,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_ms: 12_000,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Budget for evaluating one request before answering 504
    pub timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Wall-clock duration of one discrete transition step
    pub step_ms: u64,

    pub linguistics: LinguisticsMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            step_ms: crate::implementations::temporal::STEP_MS,
            linguistics: LinguisticsMode::Lexicon,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ReqmineConfig {
    pub prover: ProverConfig,
    pub server: ServerConfig,
    pub analysis: AnalysisConfig,
}

/// Prover endpoint settings, resolved once at startup and handed to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProverSettings {
    pub url: String,
    pub timeout: Duration,
}

impl ReqmineConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: ReqmineConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the prover endpoint: explicit flag, then environment, then file, then default
    pub fn resolve_prover(
        &self,
        url_flag: Option<&str>,
        timeout_flag: Option<u64>,
    ) -> Result<ProverSettings, ConfigError> {
        use log::debug;

        let url = match url_flag {
            Some(u) => u.to_string(),
            None => match std::env::var(PROVER_URL_ENV) {
                Ok(u) if !u.trim().is_empty() => {
                    debug!("Using prover URL from {}", PROVER_URL_ENV);
                    u
                }
                _ => self.prover.url.clone().unwrap_or_else(|| DEFAULT_PROVER_URL.to_string()),
            },
        };

        let timeout_ms = match timeout_flag {
            Some(ms) => ms,
            None => env_u64(PROVER_TIMEOUT_ENV)?.unwrap_or(self.prover.timeout_ms),
        };

        Ok(ProverSettings {
            url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Resolve the server bind settings
    pub fn resolve_server(
        &self,
        host_flag: Option<&str>,
        port_flag: Option<u16>,
        timeout_flag: Option<u64>,
    ) -> Result<ServerConfig, ConfigError> {
        let host = host_flag.map(str::to_string).unwrap_or_else(|| self.server.host.clone());
        let port = match port_flag {
            Some(p) => p,
            None => match env_u64(PORT_ENV)? {
                Some(p) => u16::try_from(p).map_err(|_| ConfigError::InvalidValue {
                    name: PORT_ENV.to_string(),
                    value: p.to_string(),
                })?,
                None => self.server.port,
            },
        };
        let timeout_ms = match timeout_flag {
            Some(ms) => ms,
            None => env_u64(PROVER_TIMEOUT_ENV)?.unwrap_or(self.server.timeout_ms),
        };
        Ok(ServerConfig { host, port, timeout_ms })
    }
}

fn env_u64(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value: raw,
            }),
        _ => Ok(None),
    }
}
