use serde::{Deserialize, Serialize};

/// Raw attribute snapshot of one DOM element, as emitted by the external
/// extractor's in-page evaluation. Field names mirror the camelCase JSON
/// the extractor produces; anything absent deserializes to its neutral
/// value so classification never has to deal with missing data.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    #[serde(rename = "tagName", default)]
    pub tag: String,
    #[serde(rename = "type", default)]
    pub input_type: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "ariaLabel", default)]
    pub aria_label: String,
    #[serde(rename = "dataTestId", default)]
    pub data_test_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub alt: String,
    #[serde(rename = "boundingBox", default)]
    pub bounding_box: BoundingBox,
    #[serde(rename = "isVisible", default = "default_true")]
    pub is_visible: bool,
    #[serde(rename = "isEnabled", default = "default_true")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

fn default_true() -> bool {
    true
}

impl Default for RawElement {
    /// An element nothing is known about. Visibility and enablement
    /// default to true, matching the wire-format defaults.
    fn default() -> Self {
        Self {
            tag: String::new(),
            input_type: String::new(),
            id: String::new(),
            name: String::new(),
            class_name: String::new(),
            placeholder: String::new(),
            text: String::new(),
            role: String::new(),
            aria_label: String::new(),
            data_test_id: String::new(),
            title: String::new(),
            alt: String::new(),
            bounding_box: BoundingBox::default(),
            is_visible: true,
            is_enabled: true,
        }
    }
}

/// One page scan handed over by the extractor: where it was, what the tab
/// was called, and every interactive element it pulled out of the DOM.
#[derive(Debug, Clone, Deserialize)]
pub struct PageCapture {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

/// Semantic category assigned to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Email,
    Password,
    Submit,
    Link,
    Other,
}

impl Role {
    /// Canonical `type` attribute value for a direct-type match.
    pub fn type_name(&self) -> &'static str {
        match self {
            Role::Email => "email",
            Role::Password => "password",
            Role::Submit => "submit",
            Role::Link => "link",
            Role::Other => "other",
        }
    }
}

/// Result of classifying one element. Confidence is a relative-ranking
/// score in [0,1], not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub role: Role,
    pub confidence: f32,
}

impl Classification {
    pub fn none() -> Self {
        Self {
            role: Role::Other,
            confidence: 0.0,
        }
    }
}
