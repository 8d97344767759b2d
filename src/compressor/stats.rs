//! Compression statistics
//!
//! Per-call figures returned alongside the compressed document, used by the
//! CLI summary and the response filter's log events.

use std::time::Duration;

/// Statistics for a single compression call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressionStats {
    /// Input size in bytes
    pub original_size: usize,
    /// Output size in bytes
    pub compressed_size: usize,
    /// Non-conditional comments deleted
    pub comments_removed: usize,
    /// Protected blocks kept verbatim (after nesting was resolved)
    pub regions_protected: usize,
    /// Wall time spent compressing
    pub elapsed: Duration,
}

impl CompressionStats {
    /// Compression ratio (compressed / original)
    pub fn compression_ratio(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            self.compressed_size as f64 / self.original_size as f64
        }
    }

    /// Bytes removed by compression
    pub fn bytes_saved(&self) -> usize {
        self.original_size.saturating_sub(self.compressed_size)
    }

    /// Percentage of the input removed
    pub fn percentage_saved(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            (self.bytes_saved() as f64 / self.original_size as f64) * 100.0
        }
    }
}
