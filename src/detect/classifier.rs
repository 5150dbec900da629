use crate::detect::element_model::{Classification, RawElement, Role};
use crate::detect::rules::DetectionRules;

// ============================================================================
// Rule-based element classification
// ============================================================================

/// Confidence granted to a `type="submit"` declaration on top of whatever
/// the submit pattern already scored. Part of the rule logic rather than
/// the tunable weight table.
const SUBMIT_TYPE_CONFIDENCE: f32 = 0.9;

/// Classify one element into a semantic role with a relative confidence.
///
/// Pure and deterministic: the same `RawElement` always yields the same
/// result, missing attributes behave as empty strings, and the function
/// never fails. If nothing scores above zero the element is `Role::Other`
/// with confidence 0.0.
///
/// Ties on the top confidence go to the earlier pattern in
/// `rules.patterns`; the strictly-greater comparison below is what pins
/// that down.
pub fn classify(el: &RawElement, rules: &DetectionRules) -> Classification {
    let blob = text_blob(el);
    let elem_type = el.input_type.to_lowercase();
    let tag = el.tag.to_lowercase();

    let mut best = Classification::none();

    for pattern in &rules.patterns {
        let mut confidence: f32 = 0.0;

        // Direct type match is the strongest signal
        if elem_type == pattern.role.type_name() {
            confidence = pattern.weight;
        }

        // Keyword matching over the combined text blob
        let keyword_matches = pattern
            .keywords
            .iter()
            .filter(|k| blob.contains(k.as_str()))
            .count();
        if keyword_matches > 0 && !pattern.keywords.is_empty() {
            let keyword_score =
                pattern.weight * 0.8 * (keyword_matches as f32 / pattern.keywords.len() as f32);
            confidence = confidence.max(keyword_score);
        }

        // Role-specific refinements
        match pattern.role {
            Role::Email => {
                let identity_hint = ["email", "username", "user"]
                    .iter()
                    .any(|kw| blob.contains(kw));
                if (elem_type == "email" || elem_type == "text") && identity_hint {
                    confidence = confidence.max(pattern.weight);
                }
            }
            Role::Password => {
                if elem_type == "password" {
                    confidence = pattern.weight;
                }
            }
            Role::Submit => {
                let action_hint = ["login", "signin", "submit"]
                    .iter()
                    .any(|kw| blob.contains(kw));
                if tag == "button" && action_hint {
                    confidence = confidence.max(pattern.weight);
                } else if elem_type == "submit" {
                    confidence = confidence.max(SUBMIT_TYPE_CONFIDENCE);
                }
            }
            _ => {}
        }

        if confidence > best.confidence {
            best = Classification {
                role: pattern.role,
                confidence,
            };
        }
    }

    best.confidence = best.confidence.clamp(0.0, 1.0);
    best
}

/// Lowercased concatenation of every text-bearing attribute, the haystack
/// for keyword matching.
fn text_blob(el: &RawElement) -> String {
    [
        el.text.as_str(),
        el.placeholder.as_str(),
        el.name.as_str(),
        el.id.as_str(),
        el.class_name.as_str(),
        el.aria_label.as_str(),
        el.data_test_id.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}
