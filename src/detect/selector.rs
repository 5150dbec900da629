use crate::detect::element_model::RawElement;

// ============================================================================
// Robust selector synthesis
// ============================================================================

/// Text-based selectors longer than this churn too much to be useful.
const MAX_TEXT_SELECTOR_LEN: usize = 50;

/// Build the most stable selector available for an element.
///
/// Candidates are tried in order of resilience to restyling: explicit test
/// ids and element ids survive redesigns, class- and text-based selectors
/// are last resorts. Always returns a non-empty string; an element with no
/// usable attributes falls through to its bare tag, or `unknown` if even
/// that is missing. Whether the selector matches anything on the live page
/// is the caller's concern.
pub fn build_selector(el: &RawElement) -> String {
    if !el.data_test_id.is_empty() {
        return format!("[data-testid=\"{}\"]", el.data_test_id);
    }

    if !el.id.is_empty() {
        return format!("#{}", el.id);
    }

    if !el.name.is_empty() {
        return format!("[name=\"{}\"]", el.name);
    }

    if !el.input_type.is_empty() {
        return format!("{}[type=\"{}\"]", el.tag, el.input_type);
    }

    // Tag plus up to two class tokens
    let classes: Vec<&str> = el.class_name.split_whitespace().take(2).collect();
    if !classes.is_empty() {
        return format!("{}.{}", el.tag, classes.join("."));
    }

    // Text equality, only for clickables with short text
    let text = el.text.trim();
    if !text.is_empty()
        && text.len() < MAX_TEXT_SELECTOR_LEN
        && matches!(el.tag.as_str(), "button" | "a")
    {
        return format!("{}:has-text(\"{}\")", el.tag, text.replace('"', "\\\""));
    }

    if el.tag.is_empty() {
        "unknown".to_string()
    } else {
        el.tag.clone()
    }
}
