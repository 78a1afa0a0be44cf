use argus_domain::ports::AssetStatus;
use argus_domain::testing::{ISSUER, WALLET};
use argus_registry::StaticTrustRegistry;
use argus_types::validate;
use camino::Utf8PathBuf;

fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 temp path");
    std::fs::write(&path, body).expect("write registry");
    path
}

#[test]
fn loads_toml_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "registry.toml",
        &format!("[[assets]]\nasset_id = \"LAND-NG-001\"\nissuer = \"{ISSUER}\"\nstatus = \"trusted\"\n"),
    );
    let registry = StaticTrustRegistry::load(&path).unwrap();
    let rec = registry.get("LAND-NG-001", &validate(ISSUER).unwrap());
    assert_eq!(rec.status, AssetStatus::Trusted);
}

#[test]
fn loads_json_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "registry.json",
        &format!(r#"{{"issuers":[{{"address":"{WALLET}","status":"untrusted"}}]}}"#),
    );
    let registry = StaticTrustRegistry::load(&path).unwrap();
    assert_eq!(registry.issuer_count(), 1);
    let rec = registry.get("ANY-1", &validate(WALLET).unwrap());
    assert_eq!(rec.status, AssetStatus::Untrusted);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.toml")).unwrap();
    let err = StaticTrustRegistry::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn malformed_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "registry.toml", "[[assets]]\nasset_id = 7\n");
    assert!(StaticTrustRegistry::load(&path).is_err());
}
