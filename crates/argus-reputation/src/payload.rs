use argus_domain::ports::{ProviderError, ReputationReport, RiskFinding};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressResponse {
    #[serde(default)]
    overall_risk: Option<f64>,
    issues: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
struct Issue {
    #[serde(default)]
    tags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
struct Tag {
    key: String,
    #[serde(default)]
    severity: Option<f64>,
}

/// Map a provider body into a report. Tag keys become categories in first-seen order;
/// a repeated key keeps its first severity.
pub fn parse_report(body: &[u8]) -> Result<ReputationReport, ProviderError> {
    let response: AddressResponse =
        serde_json::from_slice(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let mut findings: Vec<RiskFinding> = Vec::new();
    for tag in response.issues.into_iter().flat_map(|issue| issue.tags) {
        let key = tag.key.trim();
        if key.is_empty() || findings.iter().any(|f| f.category == key) {
            continue;
        }
        findings.push(RiskFinding {
            category: key.to_string(),
            severity: tag.severity.filter(|s| s.is_finite()),
        });
    }

    Ok(ReputationReport {
        findings,
        overall_risk: response.overall_risk,
    })
}
