use element_detection::cli::commands::load_captures;
use element_detection::detect::element_model::{PageCapture, RawElement, Role};
use element_detection::detect::rules::DetectionRules;
use element_detection::page::registry::PageRegistry;
use element_detection::trace::logger::DecisionLogger;
use element_detection::{CaptureSummary, analyze_capture};

// ============================================================================
// Helper builders
// ============================================================================

fn login_capture() -> PageCapture {
    PageCapture {
        url: "https://example.com/login?next=/home".into(),
        title: "Login - Example App".into(),
        elements: vec![
            RawElement {
                tag: "input".into(),
                input_type: "email".into(),
                name: "email".into(),
                placeholder: "Email address".into(),
                ..Default::default()
            },
            RawElement {
                tag: "input".into(),
                input_type: "password".into(),
                name: "password".into(),
                ..Default::default()
            },
            RawElement {
                tag: "button".into(),
                input_type: "submit".into(),
                text: "Sign in".into(),
                ..Default::default()
            },
            // Noise: should be filtered by the threshold
            RawElement {
                tag: "div".into(),
                text: "Some banner".into(),
                ..Default::default()
            },
        ],
    }
}

fn run(capture: &PageCapture, registry: &mut PageRegistry) -> CaptureSummary {
    analyze_capture(
        capture,
        registry,
        &DetectionRules::default(),
        &DecisionLogger::disabled(),
    )
}

// ============================================================================
// 1. End-to-end: password field
// ============================================================================

#[test]
fn password_field_end_to_end() {
    let mut registry = PageRegistry::new();
    let summary = run(&login_capture(), &mut registry);

    assert_eq!(summary.page_name, "Login_Example_App");
    assert_eq!(summary.added, 3);
    assert_eq!(summary.skipped, 1);

    let page = registry.get("Login_Example_App").unwrap();
    let password = page.get("password").unwrap();
    assert_eq!(password.role, Role::Password);
    assert!((password.confidence - 0.95).abs() < 1e-6);
    assert_eq!(password.selector, "[name=\"password\"]");
}

// ============================================================================
// 2. End-to-end: submit button
// ============================================================================

#[test]
fn submit_button_end_to_end() {
    let mut registry = PageRegistry::new();
    run(&login_capture(), &mut registry);

    let best = registry.best_of_role(Role::Submit).unwrap();
    assert!(best.confidence >= 0.85);
    // The declared type wins over the text-based selector
    assert_eq!(best.selector, "button[type=\"submit\"]");
    assert_eq!(best.text, "Sign in");
}

// ============================================================================
// 3. URL pattern and page identity
// ============================================================================

#[test]
fn query_string_is_stripped_from_url_pattern() {
    let mut registry = PageRegistry::new();
    run(&login_capture(), &mut registry);

    let page = registry.get("Login_Example_App").unwrap();
    assert_eq!(page.url_pattern, "https://example.com/login");
}

#[test]
fn rescan_of_same_page_grows_one_object() {
    let mut registry = PageRegistry::new();
    run(&login_capture(), &mut registry);
    run(&login_capture(), &mut registry);

    assert_eq!(registry.page_count(), 1);
    // Re-scan renames colliding elements instead of overwriting
    assert_eq!(registry.get("Login_Example_App").unwrap().elements.len(), 6);
}

// ============================================================================
// 4. Capture JSON — the extractor's camelCase wire shape
// ============================================================================

#[test]
fn capture_parses_extractor_json() {
    let json = r#"{
        "url": "https://example.com/login",
        "title": "Login",
        "elements": [
            {
                "tagName": "input",
                "type": "password",
                "name": "password",
                "className": "form-control",
                "ariaLabel": "Password",
                "dataTestId": "",
                "boundingBox": {"x": 10.5, "y": 200.0, "width": 320.0, "height": 44.0},
                "isVisible": true,
                "isEnabled": true
            },
            {
                "tagName": "button",
                "type": "submit",
                "text": "Log in",
                "isVisible": false
            }
        ]
    }"#;

    let capture: PageCapture = serde_json::from_str(json).unwrap();
    assert_eq!(capture.elements.len(), 2);
    assert_eq!(capture.elements[0].input_type, "password");
    assert_eq!(capture.elements[0].aria_label, "Password");
    // Absent isEnabled defaults to true
    assert!(capture.elements[1].is_enabled);

    let mut registry = PageRegistry::new();
    let summary = run(&capture, &mut registry);

    // The hidden button is skipped, the password field kept
    assert_eq!(summary.added, 1);
    assert_eq!(summary.skipped, 1);

    let password = registry.best_of_role(Role::Password).unwrap();
    assert_eq!(password.selector, "[name=\"password\"]");
    assert_eq!(password.position.x, 10);
    assert_eq!(password.position.height, 44);
}

#[test]
fn load_captures_accepts_single_and_array() {
    let dir = std::env::temp_dir();

    let single = dir.join("element_detection_single.json");
    std::fs::write(
        &single,
        r#"{"url":"https://a.example","title":"A","elements":[]}"#,
    )
    .unwrap();
    assert_eq!(load_captures(single.to_str().unwrap()).unwrap().len(), 1);

    let array = dir.join("element_detection_array.json");
    std::fs::write(
        &array,
        r#"[{"url":"https://a.example","title":"A","elements":[]},
            {"url":"https://b.example","title":"B","elements":[]}]"#,
    )
    .unwrap();
    assert_eq!(load_captures(array.to_str().unwrap()).unwrap().len(), 2);

    let scalar = dir.join("element_detection_scalar.json");
    std::fs::write(&scalar, "42").unwrap();
    assert!(load_captures(scalar.to_str().unwrap()).is_err());

    for p in [single, array, scalar] {
        let _ = std::fs::remove_file(p);
    }
}

// ============================================================================
// 5. Registry serialization
// ============================================================================

#[test]
fn registry_json_roundtrip() {
    let mut registry = PageRegistry::new();
    run(&login_capture(), &mut registry);

    let json = serde_json::to_string_pretty(&registry).unwrap();
    let parsed: PageRegistry = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, registry);
}

#[test]
fn registry_yaml_roundtrip() {
    let mut registry = PageRegistry::new();
    run(&login_capture(), &mut registry);

    let yaml = serde_yaml::to_string(&registry).unwrap();
    let parsed: PageRegistry = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, registry);
}

// ============================================================================
// 6. Decision trace
// ============================================================================

#[test]
fn trace_records_one_line_per_element() {
    let path = std::env::temp_dir().join("element_detection_trace.jsonl");
    let _ = std::fs::remove_file(&path);

    let tracer = DecisionLogger::new(path.to_str().unwrap());
    assert!(tracer.is_enabled());

    let mut registry = PageRegistry::new();
    let capture = login_capture();
    analyze_capture(&capture, &mut registry, &DetectionRules::default(), &tracer);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), capture.elements.len());

    let mut accepted = 0;
    for line in &lines {
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["page"], "Login_Example_App");
        if event["accepted"].as_bool().unwrap() {
            accepted += 1;
            assert!(event["selector"].is_string());
        } else {
            assert!(event["skip_reason"].is_string());
        }
    }
    assert_eq!(accepted, 3);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn disabled_logger_is_inert() {
    let tracer = DecisionLogger::disabled();
    assert!(!tracer.is_enabled());

    let mut registry = PageRegistry::new();
    run(&login_capture(), &mut registry);
    // No panic, no file — that is the whole contract
}
