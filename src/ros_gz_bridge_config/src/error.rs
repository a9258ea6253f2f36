//! Error types for the bridge configuration loader

use thiserror::Error;

/// Reasons a single configuration entry is rejected.
///
/// These never abort a whole load: the loader logs them and drops the entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("entry must be a YAML map")]
    NotAMap,

    #[error("{first} and {second} are mutually exclusive")]
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },

    #[error("both {ros} and {gz} must be set")]
    MissingTypeNames {
        ros: &'static str,
        gz: &'static str,
    },

    #[error("one of topic_name, ros_topic_name or gz_topic_name must be set")]
    MissingTopicName,

    #[error("invalid direction [{0}]")]
    InvalidDirection(String),

    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("Type coercion failed for field '{field}' with value '{value}' (expected {expected_type})")]
    TypeCoercion {
        field: String,
        value: String,
        expected_type: &'static str,
    },
}

/// Whole-document failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
