//! Receipt serialization and output files.

use anyhow::Context;
use argus_types::ScreeningReceipt;
use camino::Utf8Path;

pub fn serialize_receipt(receipt: &ScreeningReceipt) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(receipt).context("serialize receipt")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn parse_receipt_json(text: &str) -> anyhow::Result<ScreeningReceipt> {
    serde_json::from_str(text).context("parse receipt JSON")
}

/// Write the receipt as pretty JSON, creating parent directories.
pub fn write_receipt(path: &Utf8Path, receipt: &ScreeningReceipt) -> anyhow::Result<()> {
    write_text(path, &String::from_utf8_lossy(&serialize_receipt(receipt)?))
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))?;
    Ok(())
}
