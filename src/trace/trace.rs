use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::detect::element_model::Classification;
use crate::page::aggregator::SkipReason;

/// One classification decision, serialized as a JSONL record. Captures
/// enough to replay why an element was accepted or filtered out.
#[derive(Debug, Serialize)]
pub struct DecisionEvent {
    pub timestamp_ms: u128,
    pub page: String,
    pub index: usize,

    pub role: String,
    pub confidence: f32,

    pub name: Option<String>,
    pub selector: Option<String>,

    pub accepted: bool,
    pub skip_reason: Option<String>,
}

impl DecisionEvent {
    pub fn now(page: &str, index: usize, classification: &Classification) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            page: page.to_string(),
            index,
            role: format!("{:?}", classification.role),
            confidence: classification.confidence,
            name: None,
            selector: None,
            accepted: false,
            skip_reason: None,
        }
    }

    pub fn accepted(mut self, name: &str, selector: &str) -> Self {
        self.accepted = true;
        self.name = Some(name.to_string());
        self.selector = Some(selector.to_string());
        self
    }

    pub fn skipped(mut self, reason: &SkipReason) -> Self {
        self.accepted = false;
        self.skip_reason = Some(reason.to_string());
        self
    }
}
