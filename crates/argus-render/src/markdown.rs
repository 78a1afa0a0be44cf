use crate::{RenderableReceipt, RenderableStatus};
use argus_types::{ScreeningReceipt, lookup_explanation};

pub fn render_markdown(receipt: &ScreeningReceipt) -> String {
    let r = RenderableReceipt::from_receipt(receipt);
    let mut out = String::new();

    out.push_str("# Argus screening receipt\n\n");
    out.push_str(&format!(
        "- Outcome: **{}**\n- Subject: {} `{}`\n",
        r.status.label(),
        r.subject_kind,
        r.subject
    ));
    if let Some(value) = r.declared_value {
        out.push_str(&format!("- Declared value: {value}\n"));
    }
    out.push_str(&format!(
        "- Duration: {} ms\n- Fingerprint: `{}`\n\n",
        r.duration_ms, r.fingerprint
    ));

    out.push_str(&format!("> {}\n\n", r.reason));

    if r.status == RenderableStatus::Unavailable {
        out.push_str("Screening could not be completed. This is not a safe verdict; retry later.\n");
        return out;
    }

    if r.flags.is_empty() {
        out.push_str("No flags.\n");
        return out;
    }

    out.push_str("## Flags\n\n");
    for flag in &r.flags {
        match lookup_explanation(flag) {
            Some(e) => out.push_str(&format!("- `{flag}`: {}\n", e.title)),
            None => out.push_str(&format!("- `{flag}`\n")),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn renders_safe_asset() {
        insta::assert_snapshot!(render_markdown(&fixtures::trusted_asset()), @r"
        # Argus screening receipt

        - Outcome: **SAFE**
        - Subject: asset `LAND-NG-001 by 0x742d35Cc6634C0532925a3b844Bc454e4438f44e`
        - Declared value: 50000
        - Duration: 3 ms
        - Fingerprint: `9b7d11aa`

        > Issuer and asset verified against registry.

        No flags.
        ");
    }

    #[test]
    fn known_flags_carry_titles() {
        let md = render_markdown(&fixtures::unverified_asset());
        assert!(md.contains("Outcome: **UNSAFE**"));
        assert!(md.contains("## Flags"));
        assert!(md.contains("- `registry:unverified`: Unverified Issuer/Asset Pair"));
    }

    #[test]
    fn provider_categories_are_listed_plainly() {
        let md = render_markdown(&fixtures::flagged_wallet());
        assert!(md.contains("- `mixer-contact`\n"));
        assert!(md.contains("- `sanctioned-entity`\n"));
    }

    #[test]
    fn unavailable_is_never_presented_as_safe() {
        let md = render_markdown(&fixtures::unavailable_wallet());
        assert!(md.contains("**UNAVAILABLE**"));
        assert!(md.contains("not a safe verdict"));
        assert!(!md.contains("## Flags"));
    }
}
