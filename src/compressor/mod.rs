//! HTML compressor
//!
//! Removes comments and redundant whitespace from a complete HTML document
//! while keeping the content of protected tags byte-for-byte. Three stages run
//! in order, each on the previous stage's output:
//!
//! - [`comments`] - strips `<!-- ... -->` blocks, keeping conditional comments
//! - [`protected`] - swaps `script`/`textarea`/`pre`/`code` blocks for tokens
//! - [`whitespace`] - deletes newline/tab runs and runs of 2+ whitespace
//!
//! The pipeline is textual scanning, not parsing, and never fails: markers
//! that are never closed simply end the scan for that construct.
//!
//! # Module Organization
//!
//! - [`config`] - Compressor settings
//! - [`placeholder`] - Placeholder tokens and the per-call region cache
//! - [`stats`] - Per-call statistics

pub mod comments;
pub mod config;
pub mod placeholder;
pub mod protected;
pub mod stats;
pub mod whitespace;

use std::time::Instant;

use tracing::debug;

pub use comments::{find_comments, strip_comments, CommentBlock};
pub use config::CompressorConfig;
pub use placeholder::{PlaceholderGenerator, PlaceholderToken, RegionCache};
pub use protected::{ExtractedDocument, ProtectedBlock, ProtectedRegionExtractor};
pub use stats::CompressionStats;
pub use whitespace::collapse_whitespace;

use crate::error::Result;

/// Reusable compressor
///
/// Holds only immutable settings; every call builds its own placeholder
/// sequence and region cache, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Compressor {
    config: CompressorConfig,
    extractor: ProtectedRegionExtractor,
}

impl Compressor {
    /// Build a compressor from validated settings
    pub fn new(config: CompressorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: CompressorConfig) -> Self {
        let extractor = ProtectedRegionExtractor::new(
            config.protected_tags.iter().cloned(),
            &config.template_script_types,
        );
        Self { config, extractor }
    }

    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Compress `html`; empty input comes back unchanged
    pub fn compress(&self, html: &str) -> String {
        self.compress_with_stats(html).0
    }

    /// Compress `html` and report what was done
    pub fn compress_with_stats(&self, html: &str) -> (String, CompressionStats) {
        let started = Instant::now();
        let mut stats = CompressionStats {
            original_size: html.len(),
            ..Default::default()
        };

        if html.is_empty() {
            return (String::new(), stats);
        }

        let stripped = if self.config.strip_comments {
            let (out, removed) = comments::strip_comments_counted(html);
            stats.comments_removed = removed;
            out
        } else {
            html.to_string()
        };

        let output = if self.config.collapse_whitespace {
            let mut tokens = PlaceholderGenerator::new();
            let extracted = self.extractor.extract(&stripped, &mut tokens);
            stats.regions_protected = extracted.cache().len();
            debug!(
                call_id = tokens.call_id(),
                regions = extracted.cache().len(),
                absorbed = extracted.absorbed(),
                "protected regions extracted"
            );
            extracted.collapse_and_restore()
        } else {
            stripped
        };

        stats.compressed_size = output.len();
        stats.elapsed = started.elapsed();
        debug!(
            original_size = stats.original_size,
            compressed_size = stats.compressed_size,
            comments_removed = stats.comments_removed,
            regions_protected = stats.regions_protected,
            "html compressed"
        );

        (output, stats)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::from_config(CompressorConfig::default())
    }
}

/// Compress `html` with the default settings
pub fn compress_html(html: &str) -> String {
    Compressor::default().compress(html)
}

/// Optional-input form of [`compress_html`]: `None` stays `None`
pub fn compress_html_opt(html: Option<&str>) -> Option<String> {
    html.map(compress_html)
}
