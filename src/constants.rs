// Constants module - centralized markers and default values
//
// Textual markers used by the compressor stages live here together with the
// configuration defaults, so the scanning code and the config layer agree.

// =============================================================================
// Comment markers
// =============================================================================

/// Opening marker of an HTML comment
pub const COMMENT_OPEN: &str = "<!--";

/// Closing marker of an HTML comment
pub const COMMENT_CLOSE: &str = "-->";

/// Substring identifying the opening half of a conditional comment
pub const CONDITIONAL_IF_MARKER: &str = "[if";

/// Substring identifying the closing half of a conditional comment
pub const CONDITIONAL_ENDIF_MARKER: &str = "![endif]";

// =============================================================================
// Protected regions
// =============================================================================

/// Tags whose content survives whitespace collapsing, in extraction order
pub const DEFAULT_PROTECTED_TAGS: [&str; 4] = ["script", "textarea", "pre", "code"];

/// The only tag that carries the template-type exemption
pub const SCRIPT_TAG: &str = "script";

/// Script `type` values treated as template markup rather than code
pub const DEFAULT_TEMPLATE_SCRIPT_TYPES: [&str; 2] = ["text/template", "text/html"];

/// Separator between call id and sequence index in placeholder tokens
pub const PLACEHOLDER_SEPARATOR: char = '#';

// =============================================================================
// HTTP filter
// =============================================================================

/// Media type the response filter operates on
pub const HTML_MEDIA_TYPE: &str = "text/html";

// =============================================================================
// Logging defaults
// =============================================================================

/// Default log level when neither config nor RUST_LOG set one
pub const DEFAULT_LOG_LEVEL: &str = "info";
