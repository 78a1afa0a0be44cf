use crate::{model::ArgusConfigV1, presets};
use anyhow::Context;
use argus_domain::policy::EnginePolicy;
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_KEY_ENV: &str = "WEBACY_API_KEY";
const DEFAULT_BASE_URL: &str = "https://api.webacy.com";

/// Values that win over the config file: CLI flags, then `PORT` / `HOST` from the
/// environment (the caller decides the order when filling this in).
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub registry_path: Option<Utf8PathBuf>,
    pub log_level: Option<String>,
    /// Directory of the config file; relative paths in the file resolve against it.
    pub config_dir: Option<Utf8PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReputationSettings {
    pub base_url: String,
    pub api_key_env: String,
}

#[derive(Clone, Debug)]
pub struct ResolvedSettings {
    pub policy: EnginePolicy,
    pub server: ServerSettings,
    pub reputation: ReputationSettings,
    /// `None` means the builtin registry.
    pub registry_path: Option<Utf8PathBuf>,
    pub log_level: LogLevel,
}

pub fn resolve_settings(
    cfg: ArgusConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedSettings> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut policy = presets::preset(&profile)?;

    if let Some(ms) = cfg.reputation.timeout_ms {
        policy.provider_timeout = parse_timeout(ms).context("invalid reputation.timeout_ms")?;
    }
    if let Some(ms) = cfg.registry.timeout_ms {
        policy.registry_timeout = parse_timeout(ms).context("invalid registry.timeout_ms")?;
    }
    if let Some(enabled) = cfg.assets.issuer_reputation {
        policy.issuer_reputation = enabled;
    }

    let server = ServerSettings {
        host: overrides
            .host
            .or(cfg.server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: overrides.port.or(cfg.server.port).unwrap_or(DEFAULT_PORT),
    };

    let base_url = cfg
        .reputation
        .base_url
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        anyhow::bail!("invalid reputation.base_url: {base_url} (expected http:// or https://)");
    }
    let api_key_env = cfg
        .reputation
        .api_key_env
        .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
    if api_key_env.trim().is_empty() {
        anyhow::bail!("reputation.api_key_env must not be empty");
    }

    let registry_path = match overrides.registry_path {
        Some(path) => Some(path),
        None => cfg
            .registry
            .path
            .map(|p| relative_to(overrides.config_dir.as_deref(), &p)),
    };

    let log_level = match overrides.log_level.or(cfg.logging.level) {
        Some(level) => parse_log_level(&level)?,
        None => LogLevel::default(),
    };

    Ok(ResolvedSettings {
        policy,
        server,
        reputation: ReputationSettings {
            base_url,
            api_key_env,
        },
        registry_path,
        log_level,
    })
}

fn relative_to(base: Option<&Utf8Path>, path: &str) -> Utf8PathBuf {
    let path = Utf8Path::new(path);
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

fn parse_timeout(ms: u64) -> anyhow::Result<Duration> {
    if ms == 0 {
        anyhow::bail!("timeout must be greater than zero");
    }
    Ok(Duration::from_millis(ms))
}

fn parse_log_level(v: &str) -> anyhow::Result<LogLevel> {
    match v.to_ascii_lowercase().as_str() {
        "error" => Ok(LogLevel::Error),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        other => anyhow::bail!("unknown log level: {other} (expected error|warn|info|debug|trace)"),
    }
}
