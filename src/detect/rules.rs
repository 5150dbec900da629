use serde::{Deserialize, Serialize};

use crate::detect::element_model::Role;

// ============================================================================
// Detection rules — the tunable part of classification
// ============================================================================

/// Keyword set and base weight for one candidate role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePattern {
    pub role: Role,
    pub keywords: Vec<String>,
    pub weight: f32,
}

impl RolePattern {
    fn new(role: Role, keywords: &[&str], weight: f32) -> Self {
        Self {
            role,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            weight,
        }
    }
}

/// Full rule set driving `classify()`. Pattern order is significant:
/// on an exact confidence tie the earlier pattern wins, so the declared
/// order (email, password, submit, link) is part of the contract.
///
/// Weights, keywords and the acceptance threshold are hand-tuned values
/// carried over from the original rule tables. They are reproducible
/// defaults, not derived truths, so they stay overridable via config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRules {
    pub patterns: Vec<RolePattern>,
    pub min_confidence: f32,
}

pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.3;

impl Default for DetectionRules {
    fn default() -> Self {
        Self {
            patterns: vec![
                RolePattern::new(
                    Role::Email,
                    &["email", "username", "user", "login", "account", "signin"],
                    0.9,
                ),
                RolePattern::new(
                    Role::Password,
                    &["password", "pass", "pwd", "secret", "auth"],
                    0.95,
                ),
                RolePattern::new(
                    Role::Submit,
                    &["submit", "login", "signin", "sign-in", "enter", "go", "continue"],
                    0.85,
                ),
                RolePattern::new(
                    Role::Link,
                    &["link", "href", "navigate", "goto", "click"],
                    0.7,
                ),
            ],
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl DetectionRules {
    /// Replace the weight of one role's pattern, leaving keywords intact.
    pub fn set_weight(&mut self, role: Role, weight: f32) {
        if let Some(p) = self.patterns.iter_mut().find(|p| p.role == role) {
            p.weight = weight;
        }
    }

    /// Replace the keyword list of one role's pattern.
    pub fn set_keywords(&mut self, role: Role, keywords: Vec<String>) {
        if let Some(p) = self.patterns.iter_mut().find(|p| p.role == role) {
            p.keywords = keywords;
        }
    }
}
