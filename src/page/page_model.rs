use serde::{Deserialize, Serialize};

use crate::detect::element_model::{BoundingBox, Role};

// ============================================================================
// Page object model — aggregated output of classification
// ============================================================================

/// Integer screen position, truncated from the extractor's float box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<BoundingBox> for Position {
    fn from(bb: BoundingBox) -> Self {
        Self {
            x: bb.x as i32,
            y: bb.y as i32,
            width: bb.width as i32,
            height: bb.height as i32,
        }
    }
}

/// One accepted element: immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    pub name: String,
    pub role: Role,
    pub confidence: f32,
    pub selector: String,
    pub text: String,
    pub position: Position,
}

/// Named collection of classified elements for one distinct page.
///
/// Created on first analysis of a page, grown by later analyses of the
/// same page, never pruned during a run. Element names are unique within
/// a page; elements keep their insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageObject {
    pub page_name: String,
    pub url_pattern: String,
    pub elements: Vec<PageElement>,
}

impl PageObject {
    pub fn new(page_name: impl Into<String>, url_pattern: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            url_pattern: url_pattern.into(),
            elements: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All elements of one role, in insertion order.
    pub fn elements_of_role(&self, role: Role) -> impl Iterator<Item = &PageElement> {
        self.elements.iter().filter(move |e| e.role == role)
    }

    /// Interaction hints for downstream generators: `fill_*` for inputs,
    /// `click_*` for clickables.
    pub fn action_hints(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter_map(|el| match el.role {
                Role::Email => Some(format!("fill_{}(username)", el.name)),
                Role::Password => Some(format!("fill_{}(password)", el.name)),
                Role::Submit | Role::Link => Some(format!("click_{}()", el.name)),
                Role::Other => None,
            })
            .collect()
    }
}
