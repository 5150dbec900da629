use crate::analyze_capture;
use crate::cli::config::{AppConfig, build_rules};
use crate::detect::element_model::{PageCapture, Role};
use crate::error::DetectionError;
use crate::page::registry::PageRegistry;
use crate::trace::logger::DecisionLogger;

// ============================================================================
// analyze subcommand
// ============================================================================

pub fn cmd_analyze(
    input: &str,
    format: Option<&str>,
    output: Option<&str>,
    min_confidence: Option<f32>,
    trace: Option<&str>,
    verbose: u8,
    config: &AppConfig,
) -> Result<(), DetectionError> {
    let rules = build_rules(&config.detection, min_confidence);
    let captures = load_captures(input)?;

    // CLI flags win over config-file values
    let format = format.unwrap_or(config.analyze.format.as_str());
    let output = output.or(config.analyze.output.as_deref());
    let trace = trace.or(config.analyze.trace.as_deref());

    let tracer = match trace {
        Some(path) => DecisionLogger::new(path),
        None => DecisionLogger::disabled(),
    };

    if verbose > 0 {
        eprintln!("Analyzing {} capture(s) from {}...", captures.len(), input);
    }

    let mut registry = PageRegistry::new();
    for capture in &captures {
        let summary = analyze_capture(capture, &mut registry, &rules, &tracer);
        if verbose > 0 {
            eprintln!(
                "  {}: {} elements kept, {} skipped",
                summary.page_name, summary.added, summary.skipped
            );
        }
    }

    println!(
        "Detected {} elements across {} page(s)",
        registry.element_count(),
        registry.page_count()
    );

    for role in [Role::Email, Role::Password, Role::Submit, Role::Link] {
        if let Some(el) = registry.best_of_role(role) {
            println!(
                "  best {:?}: {} ({}, confidence {:.2})",
                role, el.name, el.selector, el.confidence
            );
        }
    }

    if verbose > 1 {
        for page in &registry.pages {
            eprintln!("  [{}] actions:", page.page_name);
            for hint in page.action_hints() {
                eprintln!("    - {}", hint);
            }
        }
    }

    let rendered = render_registry(&registry, format)?;
    match output {
        Some(path) => std::fs::write(path, &rendered).map_err(|e| DetectionError::Io {
            path: path.to_string(),
            source: e,
        })?,
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Load captures from a JSON file holding either one capture object or an
/// array of them.
pub fn load_captures(path: &str) -> Result<Vec<PageCapture>, DetectionError> {
    let content = std::fs::read_to_string(path).map_err(|e| DetectionError::Io {
        path: path.to_string(),
        source: e,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| DetectionError::Json {
            context: format!("capture file {}", path),
            source: e,
        })?;

    match value {
        serde_json::Value::Array(_) => {
            serde_json::from_value(value).map_err(|e| DetectionError::Json {
                context: format!("capture array in {}", path),
                source: e,
            })
        }
        serde_json::Value::Object(_) => {
            let capture: PageCapture =
                serde_json::from_value(value).map_err(|e| DetectionError::Json {
                    context: format!("capture object in {}", path),
                    source: e,
                })?;
            Ok(vec![capture])
        }
        other => Err(DetectionError::CaptureShape(format!(
            "expected object or array, got {}",
            json_kind(&other)
        ))),
    }
}

fn render_registry(registry: &PageRegistry, format: &str) -> Result<String, DetectionError> {
    match format {
        "json" => serde_json::to_string_pretty(registry).map_err(|e| DetectionError::Json {
            context: "page registry output".to_string(),
            source: e,
        }),
        "yaml" => serde_yaml::to_string(registry).map_err(|e| DetectionError::Yaml {
            context: "page registry output".to_string(),
            source: e,
        }),
        other => Err(DetectionError::UnknownFormat(other.to_string())),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// ============================================================================
// rules subcommand
// ============================================================================

/// Print the effective detection rules (defaults + config overrides) as
/// YAML, for hand tuning.
pub fn cmd_rules(config: &AppConfig) -> Result<(), DetectionError> {
    let rules = build_rules(&config.detection, None);
    let yaml = serde_yaml::to_string(&rules).map_err(|e| DetectionError::Yaml {
        context: "detection rules".to_string(),
        source: e,
    })?;
    print!("{}", yaml);
    Ok(())
}
