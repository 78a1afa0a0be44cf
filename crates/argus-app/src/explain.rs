//! The `explain` use case: look up flag and rule documentation.

use argus_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the registered flags and rule codes.
    NotFound {
        identifier: String,
        available_flags: &'static [&'static str],
        available_rules: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_flags: explain::all_flags(),
            available_rules: explain::all_rules(),
        },
    }
}

pub fn format_explanation(identifier: &str, exp: &Explanation) -> String {
    argus_render::render_explanation(identifier, exp)
}

pub fn format_not_found(identifier: &str, flags: &[&'static str], rules: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown flag or rule: {identifier}\n\n"));
    out.push_str("Available flags:\n");
    for flag in flags {
        out.push_str(&format!("  - {flag}\n"));
    }
    out.push_str("  - issuer:<category>\n");
    out.push_str("\nAvailable rules:\n");
    for rule in rules {
        out.push_str(&format!("  - {rule}\n"));
    }
    out.push_str("\nReputation categories (for example `mixer-contact`) come from the provider and are not documented here.\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_flag_and_rule() {
        assert!(matches!(
            run_explain("registry:unverified"),
            ExplainOutput::Found(_)
        ));
        assert!(matches!(
            run_explain("length-out-of-range"),
            ExplainOutput::Found(_)
        ));
        assert!(matches!(
            run_explain("issuer:phishing"),
            ExplainOutput::Found(_)
        ));
    }

    #[test]
    fn explain_unknown_lists_alternatives() {
        let ExplainOutput::NotFound {
            identifier,
            available_flags,
            available_rules,
        } = run_explain("mixer-contact")
        else {
            panic!("expected NotFound");
        };
        let formatted = format_not_found(&identifier, available_flags, available_rules);
        assert!(formatted.contains("Unknown flag or rule: mixer-contact"));
        assert!(formatted.contains("registry:untrusted-issuer"));
        assert!(formatted.contains("malformed-characters"));
    }

    #[test]
    fn format_explanation_has_remediation() {
        let ExplainOutput::Found(exp) = run_explain("registry:untrusted-issuer") else {
            panic!("expected Found");
        };
        assert!(format_explanation("registry:untrusted-issuer", &exp).contains("Remediation"));
    }
}
