use anyhow::Context;
use argus_settings::{ArgusConfigV1, Overrides, ResolvedSettings};

/// Parse config text (empty means defaults) and resolve it against overrides.
pub fn load_settings(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedSettings> {
    let cfg = if config_text.trim().is_empty() {
        ArgusConfigV1::default()
    } else {
        argus_settings::parse_config_toml(config_text).context("parse config")?
    };
    argus_settings::resolve_settings(cfg, overrides).context("resolve config")
}
