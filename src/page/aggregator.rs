use std::fmt;

use crate::detect::classifier::classify;
use crate::detect::element_model::{Classification, RawElement};
use crate::detect::rules::DetectionRules;
use crate::detect::selector::build_selector;
use crate::page::page_model::{PageElement, PageObject};

// ============================================================================
// Element aggregation into a PageObject
// ============================================================================

/// Text longer than this makes a poor identifier.
const MAX_TEXT_NAME_LEN: usize = 30;

/// Why an element was not added to the page object. Skipping is a
/// filtering decision, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    Hidden,
    Disabled,
    LowConfidence(f32),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Hidden => write!(f, "not visible"),
            SkipReason::Disabled => write!(f, "disabled"),
            SkipReason::LowConfidence(c) => write!(f, "confidence {:.2} below threshold", c),
        }
    }
}

/// Outcome of offering one element to a page object.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added {
        name: String,
        classification: Classification,
    },
    Skipped {
        classification: Classification,
        reason: SkipReason,
    },
}

/// Classify, filter, name and store one raw element.
///
/// `index` is the element's ordinal position in the scan; it is the last
/// resort for naming and the disambiguating suffix on collisions. Stored
/// elements are never overwritten: a name collision renames the newer
/// element instead.
pub fn add_element(
    page: &mut PageObject,
    el: &RawElement,
    index: usize,
    rules: &DetectionRules,
) -> AddOutcome {
    let classification = classify(el, rules);

    let reason = if !el.is_visible {
        Some(SkipReason::Hidden)
    } else if !el.is_enabled {
        Some(SkipReason::Disabled)
    } else if classification.confidence < rules.min_confidence {
        Some(SkipReason::LowConfidence(classification.confidence))
    } else {
        None
    };

    if let Some(reason) = reason {
        return AddOutcome::Skipped {
            classification,
            reason,
        };
    }

    let base = derive_name(el, &classification, index);
    let name = unique_name(page, base, index);

    page.elements.push(PageElement {
        name: name.clone(),
        role: classification.role,
        confidence: classification.confidence,
        selector: build_selector(el),
        text: el.text.trim().to_string(),
        position: el.bounding_box.into(),
    });

    AddOutcome::Added {
        name,
        classification,
    }
}

/// Pick a meaningful base name: data-testid, then id, then name, then
/// short text content, then role plus ordinal.
fn derive_name(el: &RawElement, classification: &Classification, index: usize) -> String {
    if !el.data_test_id.is_empty() {
        return sanitize_identifier(&el.data_test_id);
    }
    if !el.id.is_empty() {
        return sanitize_identifier(&el.id);
    }
    if !el.name.is_empty() {
        return sanitize_identifier(&el.name);
    }

    let role = classification.role.type_name();
    let text = el.text.trim();
    if !text.is_empty() && text.len() < MAX_TEXT_NAME_LEN {
        let clean = sanitize_identifier(text);
        if clean != "element" {
            return format!("{}_{}", role, clean);
        }
    }

    format!("{}_{}", role, index)
}

/// Resolve collisions by suffixing the current ordinal index; keep bumping
/// if re-scans of the same page already claimed that too.
fn unique_name(page: &PageObject, base: String, index: usize) -> String {
    if !page.contains(&base) {
        return base;
    }

    let mut n = index;
    loop {
        let candidate = format!("{}_{}", base, n);
        if !page.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Collapse a raw string into a safe identifier: non-alphanumeric runs
/// become single underscores, leading/trailing underscores are trimmed,
/// and an empty result falls back to `element`.
pub fn sanitize_identifier(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_sep = true; // suppress leading underscore

    for c in raw.chars() {
        if c.is_alphanumeric() {
            out.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }

    let trimmed = out.trim_end_matches('_');
    if trimmed.is_empty() {
        "element".to_string()
    } else {
        trimmed.to_string()
    }
}
