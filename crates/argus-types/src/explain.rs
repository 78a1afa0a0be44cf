//! Explain registry for flags and validation rules.
//!
//! Maps flag strings and rule codes to human-readable explanations with remediation
//! guidance. Reputation categories come from the provider and are explained generically.

use crate::ids;

/// Explanation entry for a flag or rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the flag/rule.
    pub title: &'static str,
    /// What the signal means and where it comes from.
    pub description: &'static str,
    /// What the caller should do about it.
    pub remediation: &'static str,
}

/// Look up an explanation by flag or rule code.
///
/// Returns `None` if the identifier is not recognized. Any `issuer:<category>` flag
/// resolves to the issuer reputation explanation.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Flags
        ids::FLAG_REGISTRY_UNTRUSTED_ISSUER => Some(explain_untrusted_issuer()),
        ids::FLAG_REGISTRY_UNVERIFIED => Some(explain_unverified()),

        // Rules
        ids::RULE_EMPTY => Some(explain_empty()),
        ids::RULE_MALFORMED_CHARACTERS => Some(explain_malformed_characters()),
        ids::RULE_LENGTH_OUT_OF_RANGE => Some(explain_length_out_of_range()),

        other if other.starts_with(ids::FLAG_PREFIX_ISSUER) => Some(explain_issuer_reputation()),
        _ => None,
    }
}

/// List all registry flags.
pub fn all_flags() -> &'static [&'static str] {
    &[
        ids::FLAG_REGISTRY_UNTRUSTED_ISSUER,
        ids::FLAG_REGISTRY_UNVERIFIED,
    ]
}

/// List all validation rule codes.
pub fn all_rules() -> &'static [&'static str] {
    &[
        ids::RULE_EMPTY,
        ids::RULE_MALFORMED_CHARACTERS,
        ids::RULE_LENGTH_OUT_OF_RANGE,
    ]
}

fn explain_untrusted_issuer() -> Explanation {
    Explanation {
        title: "Untrusted Issuer",
        description: "\
The trust registry lists this issuer, or this issuer/asset pairing, as untrusted.

This is raised when:
- the exact issuer/asset pair is recorded with status `untrusted`
- the asset is registered to a different issuer than the one presented
- the issuer itself is blocked for every asset it issues

The verdict reason carries the concern recorded in the registry.",
        remediation: "\
Do not accept the asset. If the registry entry is wrong, correct the registry
document and reload the service; the engine never writes through the registry.",
    }
}

fn explain_unverified() -> Explanation {
    Explanation {
        title: "Unverified Issuer/Asset Pair",
        description: "\
The trust registry has no record for this issuer/asset pair.

Absence of proof is not proof of safety: unregistered pairs are reported as
not safe rather than waved through.",
        remediation: "\
Register the pair in the trust registry after off-chain due diligence, then
verify again.",
    }
}

fn explain_issuer_reputation() -> Explanation {
    Explanation {
        title: "Issuer Reputation Signal",
        description: "\
The reputation provider reported a risk category for the asset issuer's address.
The part after `issuer:` is the provider's category name.

Only emitted when issuer reputation screening is enabled.",
        remediation: "\
Screen the issuer address directly with `argus scan` for the full list of
categories before deciding whether to proceed.",
    }
}

fn explain_empty() -> Explanation {
    Explanation {
        title: "Empty Input",
        description: "\
The address (or asset id) was missing, empty, or whitespace only.
No evidence source is contacted for invalid input.",
        remediation: "Supply a non-empty value.",
    }
}

fn explain_malformed_characters() -> Explanation {
    Explanation {
        title: "Malformed Characters",
        description: "\
The address contains whitespace or a character outside `[A-Za-z0-9]`.
Addresses are matched verbatim, so surrounding spaces are rejected rather
than silently stripped.",
        remediation: "Remove whitespace, separators and punctuation from the address.",
    }
}

fn explain_length_out_of_range() -> Explanation {
    Explanation {
        title: "Length Out Of Range",
        description: "\
Addresses must be between 26 and 60 characters long (inclusive). This covers
common wallet formats; no chain-specific checksum is verified.",
        remediation: "Check that the address was copied completely.",
    }
}
