use element_detection::cli::config::{AppConfig, build_rules, load_config};
use element_detection::detect::element_model::Role;
use element_detection::detect::rules::{DEFAULT_MIN_CONFIDENCE, DetectionRules};

// ============================================================================
// 1. Built-in defaults
// ============================================================================

#[test]
fn default_rules_have_fixed_pattern_order() {
    let rules = DetectionRules::default();
    let roles: Vec<Role> = rules.patterns.iter().map(|p| p.role).collect();
    assert_eq!(roles, vec![Role::Email, Role::Password, Role::Submit, Role::Link]);
    assert_eq!(rules.min_confidence, DEFAULT_MIN_CONFIDENCE);
}

#[test]
fn default_weights_match_rule_table() {
    let rules = DetectionRules::default();
    let weight_of = |role: Role| {
        rules
            .patterns
            .iter()
            .find(|p| p.role == role)
            .map(|p| p.weight)
            .unwrap()
    };

    assert_eq!(weight_of(Role::Email), 0.9);
    assert_eq!(weight_of(Role::Password), 0.95);
    assert_eq!(weight_of(Role::Submit), 0.85);
    assert_eq!(weight_of(Role::Link), 0.7);
}

#[test]
fn default_app_config() {
    let config = AppConfig::default();
    assert_eq!(config.detection.min_confidence, DEFAULT_MIN_CONFIDENCE);
    assert_eq!(config.analyze.format, "json");
    assert!(config.analyze.output.is_none());
}

// ============================================================================
// 2. Config file overrides
// ============================================================================

#[test]
fn partial_yaml_keeps_defaults_elsewhere() {
    let yaml = r#"
detection:
  min_confidence: 0.5
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.detection.min_confidence, 0.5);
    assert!(config.detection.email.weight.is_none());
    assert_eq!(config.analyze.format, "json");
}

#[test]
fn role_overrides_flow_into_rules() {
    let yaml = r#"
detection:
  min_confidence: 0.4
  submit:
    weight: 0.9
  email:
    keywords: ["email", "mail"]
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    let rules = build_rules(&config.detection, None);

    assert_eq!(rules.min_confidence, 0.4);

    let submit = rules.patterns.iter().find(|p| p.role == Role::Submit).unwrap();
    assert_eq!(submit.weight, 0.9);

    let email = rules.patterns.iter().find(|p| p.role == Role::Email).unwrap();
    assert_eq!(email.keywords, vec!["email".to_string(), "mail".to_string()]);
    // Untouched weight keeps its default
    assert_eq!(email.weight, 0.9);
}

#[test]
fn cli_threshold_wins_over_config() {
    let yaml = r#"
detection:
  min_confidence: 0.5
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    let rules = build_rules(&config.detection, Some(0.2));
    assert_eq!(rules.min_confidence, 0.2);
}

// ============================================================================
// 3. Config file loading
// ============================================================================

#[test]
fn missing_config_file_yields_defaults() {
    let config = load_config(Some("definitely/not/a/real/path.yaml"));
    assert_eq!(config.detection.min_confidence, DEFAULT_MIN_CONFIDENCE);
}

#[test]
fn malformed_config_file_yields_defaults() {
    let path = std::env::temp_dir().join("element_detection_bad_config.yaml");
    std::fs::write(&path, "detection: [this is not a mapping").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.detection.min_confidence, DEFAULT_MIN_CONFIDENCE);

    let _ = std::fs::remove_file(&path);
}

// ============================================================================
// 4. Rules serialization (for the `rules` subcommand)
// ============================================================================

#[test]
fn rules_yaml_roundtrip() {
    let rules = DetectionRules::default();
    let yaml = serde_yaml::to_string(&rules).unwrap();
    let parsed: DetectionRules = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(parsed.min_confidence, rules.min_confidence);
    assert_eq!(parsed.patterns.len(), rules.patterns.len());
    for (a, b) in parsed.patterns.iter().zip(rules.patterns.iter()) {
        assert_eq!(a.role, b.role);
        assert_eq!(a.keywords, b.keywords);
        assert_eq!(a.weight, b.weight);
    }
}
