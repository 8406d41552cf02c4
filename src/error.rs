use thiserror::Error;

#[derive(Error, Debug)]
pub enum SspadError {
    #[error("Directory not found: {0}")]
    DirNotFound(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to read directory: {path}")]
    ReadDir {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {path}")]
    ParseYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid region pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No template directory given: pass one as an argument or set stackset_template_dir in the config")]
    NoTemplateDir,
}

pub type Result<T> = std::result::Result<T, SspadError>;
