use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Trust registry document, schema v1.
///
/// Accepted as TOML (`[[assets]]`, `[[issuers]]`) or the equivalent JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RegistryDocumentV1 {
    /// Optional schema string for tooling (`argus.registry.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub assets: Vec<AssetEntry>,

    /// Issuer-level entries apply to every asset the issuer presents.
    #[serde(default)]
    pub issuers: Vec<IssuerEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AssetEntry {
    #[serde(alias = "assetId")]
    pub asset_id: String,
    pub issuer: String,
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concern: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IssuerEntry {
    pub address: String,
    pub status: IssuerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concern: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Trusted,
    Untrusted,
}

/// Issuers are only ever listed to be distrusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IssuerStatus {
    Untrusted,
}
