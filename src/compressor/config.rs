/// Compressor configuration structures
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::{DEFAULT_PROTECTED_TAGS, DEFAULT_TEMPLATE_SCRIPT_TYPES};
use crate::error::{PressError, Result};

/// Settings for the compression pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressorConfig {
    /// Tags whose blocks are kept verbatim, scanned in this order
    #[serde(default = "default_protected_tags")]
    pub protected_tags: Vec<String>,

    /// Remove non-conditional HTML comments (default: true)
    #[serde(default = "default_true")]
    pub strip_comments: bool,

    /// Collapse whitespace outside protected blocks (default: true)
    #[serde(default = "default_true")]
    pub collapse_whitespace: bool,

    /// Script `type` values whose content is collapsed like markup
    #[serde(default = "default_template_script_types")]
    pub template_script_types: Vec<String>,
}

fn default_protected_tags() -> Vec<String> {
    DEFAULT_PROTECTED_TAGS.iter().map(|t| t.to_string()).collect()
}

fn default_template_script_types() -> Vec<String> {
    DEFAULT_TEMPLATE_SCRIPT_TYPES
        .iter()
        .map(|t| t.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl CompressorConfig {
    pub fn new() -> Self {
        CompressorConfig {
            protected_tags: default_protected_tags(),
            strip_comments: true,
            collapse_whitespace: true,
            template_script_types: default_template_script_types(),
        }
    }

    /// Validate tag names and template types
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for tag in &self.protected_tags {
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(PressError::InvalidTag(tag.clone()));
            }
            if !seen.insert(tag.as_str()) {
                return Err(PressError::Config(format!(
                    "protected tag '{}' listed more than once",
                    tag
                )));
            }
        }

        for media_type in &self.template_script_types {
            if media_type.is_empty() || media_type.contains('"') {
                return Err(PressError::Config(format!(
                    "invalid template script type '{}'",
                    media_type
                )));
            }
        }

        Ok(())
    }
}

impl Default for CompressorConfig {
    fn default() -> Self {
        CompressorConfig::new()
    }
}
