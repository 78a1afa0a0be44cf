use argus_types::Explanation;

/// Plain-text explanation block for `argus explain`.
pub fn render_explanation(identifier: &str, e: &Explanation) -> String {
    format!(
        "{identifier}: {}\n\n{}\n\nRemediation:\n{}\n",
        e.title, e.description, e.remediation
    )
}
