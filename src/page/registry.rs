use serde::{Deserialize, Serialize};

use crate::detect::element_model::Role;
use crate::page::aggregator::sanitize_identifier;
use crate::page::page_model::{PageElement, PageObject};

// ============================================================================
// Run-wide page registry
// ============================================================================

/// Every page object produced during a run, in first-seen order.
///
/// Pages are keyed by their sanitized title; re-analyzing a page grows the
/// existing object rather than creating a new one. The "best element of a
/// role" policy for downstream consumers lives here so it is defined once
/// instead of re-derived per generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRegistry {
    pub pages: Vec<PageObject>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the page object for a captured title/URL pair.
    pub fn page_for(&mut self, title: &str, url: &str) -> &mut PageObject {
        let pattern = url_pattern(url);
        let key = page_key(title, &pattern);

        if let Some(idx) = self.pages.iter().position(|p| p.page_name == key) {
            return &mut self.pages[idx];
        }

        self.pages.push(PageObject::new(key, pattern));
        self.pages.last_mut().unwrap()
    }

    pub fn get(&self, page_name: &str) -> Option<&PageObject> {
        self.pages.iter().find(|p| p.page_name == page_name)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn element_count(&self) -> usize {
        self.pages.iter().map(|p| p.elements.len()).sum()
    }

    /// All elements of a role across every page, in insertion order.
    pub fn elements_of_role(&self, role: Role) -> impl Iterator<Item = &PageElement> {
        self.pages
            .iter()
            .flat_map(move |p| p.elements_of_role(role))
    }

    /// The element to use when a consumer needs "the" element of a role:
    /// highest confidence across all pages analyzed so far. Ties go to the
    /// first-inserted element, which the strictly-greater comparison
    /// guarantees.
    pub fn best_of_role(&self, role: Role) -> Option<&PageElement> {
        let mut best: Option<&PageElement> = None;
        for el in self.elements_of_role(role) {
            match best {
                Some(b) if el.confidence > b.confidence => best = Some(el),
                None => best = Some(el),
                _ => {}
            }
        }
        best
    }
}

// ============================================================================
// Page identity
// ============================================================================

/// Strip query string and fragment; what remains identifies the page.
pub fn url_pattern(url: &str) -> String {
    let no_query = url.split('?').next().unwrap_or(url);
    let no_fragment = no_query.split('#').next().unwrap_or(no_query);
    no_fragment.to_string()
}

/// Registry key for a page: the sanitized title, or a short fingerprint of
/// the URL pattern when the page has no title. Distinct untitled pages
/// must not collapse into one entry.
pub fn page_key(title: &str, pattern: &str) -> String {
    if title.trim().is_empty() {
        return format!("page_{}", &url_fingerprint(pattern)[..10]);
    }
    sanitize_identifier(title)
}

fn url_fingerprint(pattern: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(pattern.as_bytes());
    format!("{:x}", hasher.finalize())
}
