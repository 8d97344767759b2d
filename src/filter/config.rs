/// Response filter configuration
use serde::{Deserialize, Serialize};

/// Settings for [`HtmlResponseFilter`](super::HtmlResponseFilter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Apply the compressor to HTML responses (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Write Content-Length even when the response did not carry one
    #[serde(default)]
    pub always_set_content_length: bool,
}

fn default_enabled() -> bool {
    true
}

impl FilterConfig {
    pub fn new() -> Self {
        FilterConfig {
            enabled: default_enabled(),
            always_set_content_length: false,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig::new()
    }
}
