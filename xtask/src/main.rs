//! Developer tasks (schema generation, contract fixtures, conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use argus_types::{ScreeningOutcome, Subject, explain};
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(root) if manifest_dir.ends_with("xtask") => root.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn contracts_fixtures_dir() -> PathBuf {
    project_root().join("contracts").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaFile {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_receipt_schema() -> schemars::Schema {
    schema_for!(argus_types::ScreeningReceipt)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(argus_settings::ArgusConfigV1)
}

fn generate_registry_schema() -> schemars::Schema {
    schema_for!(argus_registry::RegistryDocumentV1)
}

fn schema_files() -> Vec<SchemaFile> {
    vec![
        SchemaFile {
            filename: "argus.receipt.v1.json",
            generate: generate_receipt_schema,
        },
        SchemaFile {
            filename: "argus.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaFile {
            filename: "argus.registry.v1.json",
            generate: generate_registry_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for file in schema_files() {
        let json = serialize_schema(&(file.generate)())?;
        let path = dir.join(file.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for file in schema_files() {
        let path = dir.join(file.filename);
        if !path.exists() {
            missing.push(file.filename);
            continue;
        }
        let expected = serialize_schema(&(file.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(file.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate contract fixtures against the receipt schema");
    eprintln!("  conform-full      Contract fixtures + argus output compared to asset fixtures");
    eprintln!("  explain-coverage  Validate all flags and rules have explanations");
}

/// Flags are lowercase kebab tokens, optionally with one `source:` prefix.
fn is_valid_flag(flag: &str) -> bool {
    let token = |s: &str| {
        !s.is_empty()
            && !s.starts_with('-')
            && s.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    };
    match flag.split_once(':') {
        Some((prefix, rest)) => token(prefix) && token(rest),
        None => token(flag),
    }
}

fn receipt_validator() -> anyhow::Result<jsonschema::Validator> {
    let schema = serde_json::to_value(generate_receipt_schema()).context("receipt schema")?;
    jsonschema::validator_for(&schema).map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))
}

fn fixture_files() -> anyhow::Result<Vec<PathBuf>> {
    let dir = contracts_fixtures_dir();
    if !dir.exists() {
        bail!("contracts/fixtures/ not found at {}", dir.display());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Schema, flag hygiene, fingerprint and normalization checks for one fixture.
fn check_fixture(validator: &jsonschema::Validator, name: &str, value: &Value) -> Vec<String> {
    let mut errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| format!("fixture '{name}': schema validation: {e}"))
        .collect();

    if argus_test_util::normalize_nondeterministic(value.clone()) != *value {
        errors.push(format!("fixture '{name}': not stored in normalized form"));
    }

    if let Some(flags) = value["outcome"]["flags"].as_array() {
        for flag in flags {
            let flag = flag.as_str().unwrap_or_default();
            if !is_valid_flag(flag) {
                errors.push(format!("fixture '{name}': bad flag token {flag:?}"));
            }
        }
    }

    let subject: Result<Subject, _> = serde_json::from_value(value["subject"].clone());
    let outcome: Result<ScreeningOutcome, _> = serde_json::from_value(value["outcome"].clone());
    match (subject, outcome) {
        (Ok(subject), Ok(outcome)) => {
            let expected = argus_domain::fingerprint_outcome(&subject.canonical(), &outcome);
            if value["fingerprint"] != expected.as_str() {
                errors.push(format!("fixture '{name}': fingerprint does not match {expected}"));
            }
        }
        (Err(e), _) => errors.push(format!("fixture '{name}': subject: {e}")),
        (_, Err(e)) => errors.push(format!("fixture '{name}': outcome: {e}")),
    }
    errors
}

fn fixture_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn report_errors(errors: &[String], what: &str) -> anyhow::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    eprintln!("\n{what} errors:");
    for err in errors {
        eprintln!("  - {err}");
    }
    bail!("{what} failed with {} errors", errors.len())
}

fn conform() -> anyhow::Result<()> {
    let validator = receipt_validator()?;
    let mut errors = Vec::new();
    let files = fixture_files()?;

    for path in &files {
        let name = fixture_name(path);
        let value = read_json(path)?;
        errors.extend(check_fixture(&validator, &name, &value));
    }

    report_errors(&errors, "Conformance")?;
    println!("✓ {} contract fixtures conform", files.len());
    Ok(())
}

/// Run the built `argus` binary for every asset fixture and compare normalized output.
///
/// Asset fixtures need only the builtin registry; wallet fixtures would need the live
/// reputation provider and are checked statically.
fn conform_full() -> anyhow::Result<()> {
    conform()?;

    let argus_bin = project_root().join("target").join("debug").join("argus");
    if !argus_bin.exists() {
        bail!(
            "argus binary not found at {}\n\nRun `cargo build -p argus-cli` first.",
            argus_bin.display()
        );
    }

    let mut errors = Vec::new();
    for path in fixture_files()? {
        let name = fixture_name(&path);
        let golden = read_json(&path)?;
        let subject = &golden["subject"];
        if subject["kind"] != "asset" {
            continue;
        }

        let value = subject["declaredValue"].as_f64().unwrap_or_default().to_string();
        let output = std::process::Command::new(&argus_bin)
            .current_dir(project_root())
            .env_remove("WEBACY_API_KEY")
            .args([
                "--config",
                "xtask-does-not-exist.toml",
                "verify-asset",
                "--asset-id",
                subject["assetId"].as_str().unwrap_or_default(),
                "--issuer",
                subject["issuer"].as_str().unwrap_or_default(),
                "--value",
                &value,
                "--json",
            ])
            .output()
            .with_context(|| format!("Failed to run argus for fixture '{name}'"))?;

        let actual: Value = match serde_json::from_slice(&output.stdout) {
            Ok(v) => v,
            Err(e) => {
                errors.push(format!(
                    "fixture '{name}': argus printed no receipt ({e}): {}",
                    String::from_utf8_lossy(&output.stderr)
                ));
                continue;
            }
        };
        if argus_test_util::normalize_nondeterministic(actual) != golden {
            errors.push(format!("fixture '{name}': output differs from golden fixture"));
        } else {
            println!("  ✓ fixture '{name}' matches argus output");
        }
    }

    report_errors(&errors, "Full conformance")?;
    println!("\n✓ Full conformance checks passed!");
    Ok(())
}

fn explain_coverage() -> anyhow::Result<()> {
    let flags = explain::all_flags();
    let rules = explain::all_rules();
    let mut errors = Vec::new();

    for (kind, id) in flags
        .iter()
        .map(|f| ("Flag", *f))
        .chain(rules.iter().map(|r| ("Rule", *r)))
    {
        match explain::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("{kind} '{id}' has empty title"));
                }
                if exp.description.is_empty() {
                    errors.push(format!("{kind} '{id}' has empty description"));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("{kind} '{id}' has empty remediation"));
                }
            }
            None => errors.push(format!("{kind} '{id}' has no explanation")),
        }
    }

    report_errors(&errors, "Explain coverage")?;
    println!("✓ {} flags have explanations", flags.len());
    println!("✓ {} rules have explanations", rules.len());
    println!("\n✓ All explain coverage checks passed!");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "conform-full" => conform_full(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", argus_types::SCHEMA_RECEIPT_V1);
            println!("{}", argus_settings::SCHEMA_CONFIG_V1);
            println!("{}", argus_registry::SCHEMA_REGISTRY_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_tokens() {
        assert!(is_valid_flag("mixer-contact"));
        assert!(is_valid_flag("registry:unverified"));
        assert!(is_valid_flag("issuer:sanctioned-entity"));
        assert!(!is_valid_flag("Mixer"));
        assert!(!is_valid_flag("a:b:c"));
        assert!(!is_valid_flag("registry:"));
        assert!(!is_valid_flag(""));
    }

    #[test]
    fn committed_fixtures_conform() {
        let validator = receipt_validator().unwrap();
        let files = fixture_files().unwrap();
        assert!(files.len() >= 5);
        for path in files {
            let value = read_json(&path).unwrap();
            let errors = check_fixture(&validator, &fixture_name(&path), &value);
            assert!(errors.is_empty(), "{errors:?}");
        }
    }

    #[test]
    fn tampered_fingerprint_is_caught() {
        let validator = receipt_validator().unwrap();
        let mut value = read_json(&contracts_fixtures_dir().join("wallet-flagged.json")).unwrap();
        value["outcome"]["flags"] = serde_json::json!(["mixer-contact"]);
        let errors = check_fixture(&validator, "tampered", &value);
        assert!(errors.iter().any(|e| e.contains("fingerprint")), "{errors:?}");
    }
}
