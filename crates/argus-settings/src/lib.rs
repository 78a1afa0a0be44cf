//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: callers read `argus.toml` and the environment, then hand the
//! text and overrides in.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{
    ArgusConfigV1, AssetsConfig, LoggingConfig, RegistryConfig, ReputationConfig, ServerConfig,
};
pub use presets::PROFILES;
pub use resolve::{
    DEFAULT_API_KEY_ENV, DEFAULT_HOST, DEFAULT_PORT, LogLevel, Overrides, ReputationSettings,
    ResolvedSettings, ServerSettings,
};

pub const SCHEMA_CONFIG_V1: &str = "argus.config.v1";

/// Parse `argus.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ArgusConfigV1> {
    let cfg: ArgusConfigV1 = toml::from_str(input)?;
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }
    Ok(cfg)
}

/// Resolve the effective settings (profile preset, then file, then overrides).
pub fn resolve_settings(
    cfg: ArgusConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedSettings> {
    resolve::resolve_settings(cfg, overrides)
}
