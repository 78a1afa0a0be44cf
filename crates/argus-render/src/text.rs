use crate::RenderableReceipt;
use argus_types::ScreeningReceipt;

/// One status line plus indented details, for terminals.
pub fn render_text(receipt: &ScreeningReceipt) -> String {
    let r = RenderableReceipt::from_receipt(receipt);
    let mut out = format!("{} {} {}\n", r.status.label(), r.subject_kind, r.subject);
    out.push_str(&format!("  reason: {}\n", r.reason));
    if !r.flags.is_empty() {
        out.push_str(&format!("  flags: {}\n", r.flags.join(", ")));
    }
    if let Some(value) = r.declared_value {
        out.push_str(&format!("  declared value: {value}\n"));
    }
    out.push_str(&format!("  fingerprint: {}\n", r.fingerprint));
    out
}
