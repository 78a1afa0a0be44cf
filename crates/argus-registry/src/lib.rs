//! Offline trust registry: document parsing plus exact issuer/asset lookup.
//!
//! Parsing is IO-free; [`StaticTrustRegistry::load`] is the only entry point that touches
//! the filesystem. The loaded registry is an immutable snapshot shared across requests.

#![forbid(unsafe_code)]

mod index;
mod model;

pub use model::{AssetEntry, EntryStatus, IssuerEntry, IssuerStatus, RegistryDocumentV1};

use anyhow::Context;
use argus_domain::ports::{AssetRecord, RegistryError, TrustRegistry};
use argus_types::Identifier;
use async_trait::async_trait;
use camino::Utf8Path;
use index::RegistryIndex;

pub const SCHEMA_REGISTRY_V1: &str = "argus.registry.v1";

/// Registry shipped with the repo; used when no path is configured.
pub const BUILTIN_REGISTRY_TOML: &str = include_str!("../data/registry.toml");

/// Parse a TOML registry document.
pub fn parse_registry_toml(input: &str) -> anyhow::Result<RegistryDocumentV1> {
    let doc: RegistryDocumentV1 = toml::from_str(input).context("parse registry TOML")?;
    check_schema(&doc)?;
    Ok(doc)
}

/// Parse a JSON registry document.
pub fn parse_registry_json(input: &str) -> anyhow::Result<RegistryDocumentV1> {
    let doc: RegistryDocumentV1 = serde_json::from_str(input).context("parse registry JSON")?;
    check_schema(&doc)?;
    Ok(doc)
}

fn check_schema(doc: &RegistryDocumentV1) -> anyhow::Result<()> {
    match doc.schema.as_deref() {
        None | Some(SCHEMA_REGISTRY_V1) => Ok(()),
        Some(other) => anyhow::bail!("unsupported registry schema: {other}"),
    }
}

#[derive(Clone, Debug)]
pub struct StaticTrustRegistry {
    index: RegistryIndex,
}

impl StaticTrustRegistry {
    pub fn from_document(doc: RegistryDocumentV1) -> anyhow::Result<Self> {
        Ok(Self {
            index: RegistryIndex::build(doc)?,
        })
    }

    pub fn from_toml(input: &str) -> anyhow::Result<Self> {
        Self::from_document(parse_registry_toml(input)?)
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_toml(BUILTIN_REGISTRY_TOML).context("builtin registry")
    }

    /// Read a registry file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Utf8Path) -> anyhow::Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("read registry {path}"))?;
        let doc = match path.extension() {
            Some("json") => parse_registry_json(&text),
            _ => parse_registry_toml(&text),
        }
        .with_context(|| format!("load registry {path}"))?;
        let registry = Self::from_document(doc).with_context(|| format!("load registry {path}"))?;
        tracing::info!(
            %path,
            assets = registry.asset_count(),
            issuers = registry.issuer_count(),
            "trust registry loaded"
        );
        Ok(registry)
    }

    pub fn asset_count(&self) -> usize {
        self.index.asset_count()
    }

    pub fn issuer_count(&self) -> usize {
        self.index.issuer_count()
    }

    /// Synchronous lookup against the snapshot.
    pub fn get(&self, asset_id: &str, issuer: &Identifier) -> AssetRecord {
        self.index.lookup(asset_id, issuer)
    }
}

#[async_trait]
impl TrustRegistry for StaticTrustRegistry {
    async fn lookup(
        &self,
        asset_id: &str,
        issuer: &Identifier,
    ) -> Result<AssetRecord, RegistryError> {
        let record = self.get(asset_id, issuer);
        tracing::debug!(asset_id, %issuer, status = ?record.status, "registry lookup");
        Ok(record)
    }
}
