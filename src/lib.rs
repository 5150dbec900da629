use crate::{
    detect::element_model::PageCapture,
    detect::rules::DetectionRules,
    page::aggregator::{AddOutcome, add_element},
    page::registry::PageRegistry,
    trace::logger::DecisionLogger,
    trace::trace::DecisionEvent,
};

pub mod cli;
pub mod detect;
pub mod error;
pub mod page;
pub mod trace;

/// What one capture contributed to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSummary {
    pub page_name: String,
    pub added: usize,
    pub skipped: usize,
}

/// Run one captured page through the classify/synthesize/aggregate
/// pipeline, growing the registry in place.
///
/// Pass `DecisionLogger::disabled()` when no trace is wanted.
pub fn analyze_capture(
    capture: &PageCapture,
    registry: &mut PageRegistry,
    rules: &DetectionRules,
    tracer: &DecisionLogger,
) -> CaptureSummary {
    let page = registry.page_for(&capture.title, &capture.url);
    let page_name = page.page_name.clone();

    let mut added = 0;
    let mut skipped = 0;

    for (index, el) in capture.elements.iter().enumerate() {
        match add_element(page, el, index, rules) {
            AddOutcome::Added {
                name,
                classification,
            } => {
                added += 1;
                if tracer.is_enabled() {
                    let selector = page
                        .get(&name)
                        .map(|e| e.selector.clone())
                        .unwrap_or_default();
                    tracer.log(
                        &DecisionEvent::now(&page_name, index, &classification)
                            .accepted(&name, &selector),
                    );
                }
            }
            AddOutcome::Skipped {
                classification,
                reason,
            } => {
                skipped += 1;
                if tracer.is_enabled() {
                    tracer.log(
                        &DecisionEvent::now(&page_name, index, &classification).skipped(&reason),
                    );
                }
            }
        }
    }

    CaptureSummary {
        page_name,
        added,
        skipped,
    }
}
