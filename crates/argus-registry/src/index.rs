use crate::model::{EntryStatus, RegistryDocumentV1};
use anyhow::Context;
use argus_domain::ports::{AssetRecord, AssetStatus};
use argus_types::{Identifier, validate};
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug)]
struct Listing {
    status: AssetStatus,
    concern: Option<String>,
}

/// Exact-match lookup tables built from a [`RegistryDocumentV1`].
#[derive(Clone, Debug, Default)]
pub(crate) struct RegistryIndex {
    /// asset id -> issuer -> listing
    assets: HashMap<String, BTreeMap<String, Listing>>,
    issuers: HashMap<String, Option<String>>,
}

impl RegistryIndex {
    pub(crate) fn build(doc: RegistryDocumentV1) -> anyhow::Result<Self> {
        let mut index = RegistryIndex::default();

        for (i, entry) in doc.assets.into_iter().enumerate() {
            let asset_id = entry.asset_id.trim().to_string();
            if asset_id.is_empty() {
                anyhow::bail!("assets[{i}]: asset_id is empty");
            }
            let issuer = validate(&entry.issuer)
                .with_context(|| format!("assets[{i}] ({asset_id}): invalid issuer"))?;
            let status = match entry.status {
                EntryStatus::Trusted => AssetStatus::Trusted,
                EntryStatus::Untrusted => AssetStatus::Untrusted,
            };
            let issuers = index.assets.entry(asset_id.clone()).or_default();
            if issuers.contains_key(issuer.as_str()) {
                anyhow::bail!("assets[{i}]: duplicate entry for {asset_id} / {issuer}");
            }
            issuers.insert(
                issuer.into(),
                Listing {
                    status,
                    concern: entry.concern,
                },
            );
        }

        for (i, entry) in doc.issuers.into_iter().enumerate() {
            let issuer = validate(&entry.address)
                .with_context(|| format!("issuers[{i}]: invalid address"))?;
            if index.issuers.contains_key(issuer.as_str()) {
                anyhow::bail!("issuers[{i}]: duplicate entry for {issuer}");
            }
            index.issuers.insert(issuer.into(), entry.concern);
        }

        Ok(index)
    }

    pub(crate) fn asset_count(&self) -> usize {
        self.assets.values().map(BTreeMap::len).sum()
    }

    pub(crate) fn issuer_count(&self) -> usize {
        self.issuers.len()
    }

    /// Issuer-level entry, then exact pair, then asset held by another issuer.
    pub(crate) fn lookup(&self, asset_id: &str, issuer: &Identifier) -> AssetRecord {
        let record = |status, concern| AssetRecord {
            asset_id: asset_id.to_string(),
            issuer: issuer.clone(),
            status,
            concern,
        };

        if let Some(concern) = self.issuers.get(issuer.as_str()) {
            let concern = concern
                .clone()
                .or_else(|| Some("issuer is listed as untrusted".to_string()));
            return record(AssetStatus::Untrusted, concern);
        }

        if let Some(listed) = self.assets.get(asset_id) {
            if let Some(listing) = listed.get(issuer.as_str()) {
                return record(listing.status, listing.concern.clone());
            }
            return record(
                AssetStatus::Untrusted,
                Some(format!("asset {asset_id} is registered to a different issuer")),
            );
        }

        AssetRecord::not_found(asset_id, issuer)
    }
}
