//! Rules configuration.
//!
//! Options can be set field by field or by name through
//! [`RulesConfig::apply_option`], which takes the same `name`/`value` pairs
//! a front end reads from its settings.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How `+` / `#` annotations are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnnotationPolicy {
    /// Reject moves whose annotation contradicts the resulting position.
    #[default]
    Verify,
    /// Accept annotations as written.
    Trust,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    pub annotations: AnnotationPolicy,
    /// Accept `O-O` / `O-O-O` besides `0-0` / `0-0-0`.
    pub letter_castling: bool,
    /// Require the `"<number>."` prefix on every token.
    pub require_move_number: bool,
    /// Reject tokens numbered for a different full move.
    pub strict_move_numbers: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            annotations: AnnotationPolicy::Verify,
            letter_castling: true,
            require_move_number: true,
            strict_move_numbers: false,
        }
    }
}

impl RulesConfig {
    /// Set an option by name (case-insensitive).
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "annotations" => {
                self.annotations = match value.trim().to_ascii_lowercase().as_str() {
                    "verify" => AnnotationPolicy::Verify,
                    "trust" => AnnotationPolicy::Trust,
                    _ => return Err(ConfigError::invalid(name, value)),
                };
            }
            "letter castling" => self.letter_castling = parse_flag(name, value)?,
            "require move number" => self.require_move_number = parse_flag(name, value)?,
            "strict move numbers" => self.strict_move_numbers = parse_flag(name, value)?,
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::invalid(name, value)),
    }
}

/// Error type for configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl ConfigError {
    fn invalid(name: &str, value: &str) -> Self {
        ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
