use std::fmt;

/// Errors surfaced by the tooling around the core. Classification itself
/// never fails; everything here comes from reading captures, parsing, or
/// writing results.
#[derive(Debug)]
pub enum DetectionError {
    /// Could not read the capture file or write the output file
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Capture or output JSON failed to parse/serialize
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Config or output YAML failed to parse/serialize
    Yaml {
        context: String,
        source: serde_yaml::Error,
    },

    /// Capture file had neither a single capture nor an array of captures
    CaptureShape(String),

    /// Unsupported output format name on the command line
    UnknownFormat(String),
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            DetectionError::Json { context, source } => {
                write!(f, "JSON error ({}): {}", context, source)
            }
            DetectionError::Yaml { context, source } => {
                write!(f, "YAML error ({}): {}", context, source)
            }
            DetectionError::CaptureShape(msg) => {
                write!(f, "Unrecognized capture structure: {}", msg)
            }
            DetectionError::UnknownFormat(name) => {
                write!(f, "Unknown output format '{}' (expected json or yaml)", name)
            }
        }
    }
}

impl std::error::Error for DetectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectionError::Io { source, .. } => Some(source),
            DetectionError::Json { source, .. } => Some(source),
            DetectionError::Yaml { source, .. } => Some(source),
            _ => None,
        }
    }
}
