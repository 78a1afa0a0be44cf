use argus_domain::policy::EnginePolicy;
use std::time::Duration;

pub const PROFILES: &[&str] = &["standard", "strict"];

/// Preset profiles. Keep these small and readable.
pub fn preset(profile: &str) -> anyhow::Result<EnginePolicy> {
    match profile {
        "standard" => Ok(EnginePolicy::default()),
        "strict" => Ok(strict_profile()),
        other => anyhow::bail!("unknown profile: {other} (expected standard|strict)"),
    }
}

/// Tighter deadlines and issuer screening on.
fn strict_profile() -> EnginePolicy {
    EnginePolicy {
        profile: "strict".to_string(),
        provider_timeout: Duration::from_millis(3_000),
        registry_timeout: Duration::from_millis(500),
        issuer_reputation: true,
    }
}
