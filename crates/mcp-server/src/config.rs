//! Gateway configuration: discovery on disk and validation of `config.yaml`.

use serde_yaml::{Mapping, Value};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found at CONFIG_PATH: {}", .0.display())]
    EnvPathMissing(PathBuf),

    #[error(
        "Config file not found. Please create config.yaml in the current directory or set CONFIG_PATH environment variable."
    )]
    NotFound,

    #[error("Failed to read config file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// How to launch the upstream MCP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub command: String,
    pub args: Vec<String>,
    /// Bound for the catalog fetch and every forwarded call. `None` waits indefinitely.
    pub call_timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub allowed_tools: Vec<String>,
    pub upstream: UpstreamConfig,
}

impl Config {
    /// Locate the config file (see [`ConfigLocator`]) and load it.
    pub fn discover() -> Result<(PathBuf, Self)> {
        let path = ConfigLocator::from_process_env().locate()?;
        let config = Self::load(&path)?;
        Ok((path, config))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // The document is walked as an untyped tree so that each field gets its own message
        // instead of a generic deserializer failure. An empty, `null` or non-mapping document
        // behaves like a document with no fields.
        let root: Value = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(content)?
        };
        let mut root = match root {
            Value::Mapping(map) => map,
            _ => Mapping::new(),
        };

        let allowed_tools = match root.remove("allowedTools") {
            Some(Value::Sequence(items)) => string_list(items, "allowedTools")?,
            _ => return Err(ConfigError::invalid("'allowedTools' must be an array")),
        };
        if allowed_tools.is_empty() {
            return Err(ConfigError::invalid("'allowedTools' must not be empty"));
        }

        let mut upstream = match root.remove("upstream") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                return Err(ConfigError::invalid("'upstream' configuration is required"))
            }
            Some(Value::Mapping(map)) => map,
            // A scalar or list has no `command` field.
            Some(_) => Mapping::new(),
        };

        let command = match upstream.remove("command") {
            Some(Value::String(command)) if !command.trim().is_empty() => command,
            _ => return Err(ConfigError::invalid("'upstream.command' is required")),
        };

        let args = match upstream.remove("args") {
            Some(Value::Sequence(items)) => string_list(items, "upstream.args")?,
            _ => return Err(ConfigError::invalid("'upstream.args' must be an array")),
        };

        let call_timeout = match upstream.remove("callTimeoutMs") {
            None | Some(Value::Null) => None,
            Some(value) => match value.as_u64() {
                Some(ms) if ms > 0 => Some(Duration::from_millis(ms)),
                _ => {
                    return Err(ConfigError::invalid(
                        "'upstream.callTimeoutMs' must be a positive integer",
                    ))
                }
            },
        };

        Ok(Self {
            allowed_tools,
            upstream: UpstreamConfig {
                command,
                args,
                call_timeout,
            },
        })
    }
}

fn string_list(items: Vec<Value>, field: &str) -> Result<Vec<String>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(value) => Ok(value),
            _ => Err(ConfigError::invalid(format!(
                "'{field}' entries must be strings"
            ))),
        })
        .collect()
}

/// Config file discovery.
///
/// Order: `CONFIG_PATH` (must exist when set), `./config.yaml`, then `config.yaml` one and two
/// directories above the executable's directory (covers `target/<profile>/` builds and installs
/// under `<prefix>/bin/`).
#[derive(Debug, Clone, Default)]
pub struct ConfigLocator {
    pub env_path: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
    pub exe_dir: Option<PathBuf>,
}

impl ConfigLocator {
    pub fn from_process_env() -> Self {
        Self {
            env_path: env::var_os(CONFIG_PATH_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            cwd: env::current_dir().ok(),
            exe_dir: env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
        }
    }

    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut out = Vec::new();
        if let Some(cwd) = &self.cwd {
            out.push(cwd.join(CONFIG_FILE_NAME));
        }
        if let Some(exe_dir) = &self.exe_dir {
            out.push(exe_dir.join("..").join(CONFIG_FILE_NAME));
            out.push(exe_dir.join("..").join("..").join(CONFIG_FILE_NAME));
        }
        out
    }

    pub fn locate(&self) -> Result<PathBuf> {
        if let Some(path) = &self.env_path {
            if path.exists() {
                return Ok(path.clone());
            }
            return Err(ConfigError::EnvPathMissing(path.clone()));
        }

        self.candidates()
            .into_iter()
            .find(|candidate| candidate.is_file())
            .ok_or(ConfigError::NotFound)
    }
}
