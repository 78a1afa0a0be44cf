//! Conformance tests for argus.
//!
//! 1. Every registry flag and validation rule has an explanation.
//! 2. Receipts emitted by the binary validate against the receipt JSON schema.

use argus_types::{ScreeningReceipt, explain, ids};
use assert_cmd::Command;
use serde_json::Value;

const WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

#[test]
fn all_flags_have_explanations() {
    for flag in explain::all_flags() {
        let exp = explain::lookup_explanation(flag)
            .unwrap_or_else(|| panic!("flag '{flag}' has no explanation"));
        assert!(!exp.title.is_empty(), "flag '{flag}' has empty title");
        assert!(!exp.description.is_empty(), "flag '{flag}' has empty description");
        assert!(!exp.remediation.is_empty(), "flag '{flag}' has empty remediation");
    }
}

#[test]
fn all_rules_have_explanations() {
    for rule in explain::all_rules() {
        let exp = explain::lookup_explanation(rule)
            .unwrap_or_else(|| panic!("rule '{rule}' has no explanation"));
        assert!(!exp.title.is_empty(), "rule '{rule}' has empty title");
        assert!(!exp.remediation.is_empty(), "rule '{rule}' has empty remediation");
    }
}

#[test]
fn rule_codes_match_validation_errors() {
    use argus_types::ValidationError;
    let codes: Vec<_> = [
        ValidationError::Empty,
        ValidationError::MalformedCharacters,
        ValidationError::LengthOutOfRange,
    ]
    .iter()
    .map(|e| e.code())
    .collect();
    assert_eq!(codes, explain::all_rules());
}

#[test]
fn issuer_categories_are_explained_generically() {
    let flag = format!("{}mixer-contact", ids::FLAG_PREFIX_ISSUER);
    assert!(explain::lookup_explanation(&flag).is_some());
    assert!(explain::lookup_explanation("mixer-contact").is_none());
}

fn receipt_validator() -> jsonschema::Validator {
    let schema = serde_json::to_value(schemars::schema_for!(ScreeningReceipt)).unwrap();
    jsonschema::validator_for(&schema).expect("receipt schema compiles")
}

#[allow(deprecated)]
fn receipt_json(args: &[&str]) -> Value {
    let tmp = tempfile::tempdir().unwrap();
    let out = Command::cargo_bin("argus")
        .unwrap()
        .current_dir(tmp.path())
        .env_remove("WEBACY_API_KEY")
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    serde_json::from_slice(&out.stdout).expect("stdout is a JSON receipt")
}

#[test]
fn emitted_receipts_match_schema() {
    let validator = receipt_validator();
    let cases: [&[&str]; 3] = [
        &["verify-asset", "--asset-id", "LAND-NG-001", "--issuer", WALLET],
        &["verify-asset", "--asset-id", "LAND-NG-404", "--issuer", WALLET, "--value", "12.5"],
        &["verify-asset", "--asset-id", " ", "--issuer", WALLET],
    ];

    for args in cases {
        let receipt = receipt_json(args);
        let errors: Vec<String> = validator
            .iter_errors(&receipt)
            .map(|e| e.to_string())
            .collect();
        assert!(errors.is_empty(), "{args:?}: {errors:?}");
        assert_eq!(receipt["schema"], "argus.receipt.v1");
    }
}

#[test]
fn schema_rejects_unknown_outcome() {
    let validator = receipt_validator();
    let mut receipt = receipt_json(&["verify-asset", "--asset-id", "LAND-NG-001", "--issuer", WALLET]);
    receipt["outcome"]["outcome"] = Value::String("maybe".to_string());
    assert!(!validator.is_valid(&receipt));
}
