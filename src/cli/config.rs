use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::detect::element_model::Role;
use crate::detect::rules::{DEFAULT_MIN_CONFIDENCE, DetectionRules};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "element-detection",
    version,
    about = "Heuristic page-object detection from DOM capture files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: element-detection.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a DOM capture into page objects
    Analyze {
        /// Path to a capture JSON file (one capture or an array of captures)
        #[arg(long)]
        input: String,

        /// Output format: json or yaml
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Minimum confidence for an element to be kept
        #[arg(long)]
        min_confidence: Option<f32>,

        /// Write a JSONL decision trace to this path
        #[arg(long)]
        trace: Option<String>,
    },

    /// Print the effective detection rules as YAML
    Rules,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `element-detection.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub analyze: AnalyzeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,

    #[serde(default)]
    pub email: RoleOverride,
    #[serde(default)]
    pub password: RoleOverride,
    #[serde(default)]
    pub submit: RoleOverride,
    #[serde(default)]
    pub link: RoleOverride,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            email: RoleOverride::default(),
            password: RoleOverride::default(),
            submit: RoleOverride::default(),
            link: RoleOverride::default(),
        }
    }
}

/// Per-role tuning knobs; anything left unset keeps the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleOverride {
    pub weight: Option<f32>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    #[serde(default = "default_json")]
    pub format: String,

    pub output: Option<String>,
    pub trace: Option<String>,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            output: None,
            trace: None,
        }
    }
}

// Serde default helpers
fn default_min_confidence() -> f32 {
    DEFAULT_MIN_CONFIDENCE
}
fn default_json() -> String {
    "json".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("element-detection.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Rule Resolution (merge CLI args with config file)
// ============================================================================

/// Build the effective detection rules: built-in defaults, overlaid with
/// config-file overrides, overlaid with the CLI threshold if given.
pub fn build_rules(config: &DetectionConfig, cli_min_confidence: Option<f32>) -> DetectionRules {
    let mut rules = DetectionRules::default();

    apply_override(&mut rules, Role::Email, &config.email);
    apply_override(&mut rules, Role::Password, &config.password);
    apply_override(&mut rules, Role::Submit, &config.submit);
    apply_override(&mut rules, Role::Link, &config.link);

    rules.min_confidence = cli_min_confidence.unwrap_or(config.min_confidence);
    rules
}

fn apply_override(rules: &mut DetectionRules, role: Role, over: &RoleOverride) {
    if let Some(weight) = over.weight {
        rules.set_weight(role, weight);
    }
    if let Some(keywords) = &over.keywords {
        rules.set_keywords(role, keywords.clone());
    }
}
