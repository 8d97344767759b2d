//! Protected region extraction
//!
//! Blocks from `<tag` to the first following `</tag>` are swapped for
//! placeholder tokens so the whitespace pass cannot touch them, then swapped
//! back. Regions are tracked by offset into the comment-stripped document
//! rather than by searching for their text, so duplicate blocks and text that
//! happens to look like a token are never confused with a placeholder.
//!
//! Tags are processed in the configured order. Markers are only matched in
//! text that is not already inside an extracted region, which mirrors scanning
//! a document whose earlier blocks have already been replaced by tokens.

use tracing::{debug, trace};

use super::placeholder::{PlaceholderGenerator, PlaceholderToken, RegionCache};
use super::whitespace::collapse_into;
use crate::constants::{DEFAULT_PROTECTED_TAGS, DEFAULT_TEMPLATE_SCRIPT_TYPES, SCRIPT_TAG};

/// Scanner settings: which tags to protect and which script types to exempt
#[derive(Debug, Clone)]
pub struct ProtectedRegionExtractor {
    tags: Vec<String>,
    template_markers: Vec<String>,
}

impl ProtectedRegionExtractor {
    /// `template_types` are bare media types such as `text/template`
    pub fn new<T, S>(tags: T, template_types: S) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            template_markers: template_types
                .into_iter()
                .map(|t| format!("type=\"{}\"", t.as_ref()))
                .collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Extract every protected block of `doc`
    pub fn extract<'a>(
        &self,
        doc: &'a str,
        tokens: &mut PlaceholderGenerator,
    ) -> ExtractedDocument<'a> {
        let mut extracted = ExtractedDocument::new(doc);
        for tag in &self.tags {
            self.extract_tag(&mut extracted, tag, tokens);
        }
        extracted
    }

    fn extract_tag(
        &self,
        extracted: &mut ExtractedDocument<'_>,
        tag: &str,
        tokens: &mut PlaceholderGenerator,
    ) {
        let open = format!("<{}", tag);
        let close = format!("</{}>", tag);
        let mut cursor = 0;

        while let Some(start) = extracted.find_unprotected(&open, cursor) {
            let Some(close_at) = extracted.find_unprotected(&close, start) else {
                trace!(tag, start, "unterminated protected tag, stopping scan");
                break;
            };
            let end = close_at + close.len();

            // Once a template script shows up, no later script is protected
            if tag == SCRIPT_TAG && self.is_template_script(&extracted.source[start..end]) {
                debug!(start, "template script found, leaving remaining scripts unprotected");
                break;
            }

            let token = tokens.next_token();
            extracted.protect(tag, start, end, token);
            cursor = end;
        }
    }

    /// True when a `type` marker sits inside the opening tag
    fn is_template_script(&self, block: &str) -> bool {
        let Some(tag_end) = block.find('>') else {
            return false;
        };
        self.template_markers
            .iter()
            .filter_map(|marker| block.find(marker.as_str()))
            .any(|pos| pos < tag_end)
    }
}

impl Default for ProtectedRegionExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTED_TAGS, DEFAULT_TEMPLATE_SCRIPT_TYPES)
    }
}

/// A protected block located in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedBlock {
    pub tag_name: String,
    pub start: usize,
    pub end: usize,
    pub token: PlaceholderToken,
}

/// A document with its protected blocks pulled out
///
/// `blocks` is sorted by offset and never overlaps. Each block's token maps to
/// its raw text in the cache.
#[derive(Debug)]
pub struct ExtractedDocument<'a> {
    source: &'a str,
    blocks: Vec<ProtectedBlock>,
    cache: RegionCache<'a>,
    absorbed: usize,
}

impl<'a> ExtractedDocument<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            blocks: Vec::new(),
            cache: RegionCache::new(),
            absorbed: 0,
        }
    }

    pub fn blocks(&self) -> &[ProtectedBlock] {
        &self.blocks
    }

    pub fn cache(&self) -> &RegionCache<'a> {
        &self.cache
    }

    /// Number of earlier blocks swallowed by an enclosing block
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// The document as the whitespace pass conceptually sees it
    pub fn with_placeholders(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut last = 0;
        for block in &self.blocks {
            out.push_str(&self.source[last..block.start]);
            out.push_str(block.token.as_str());
            last = block.end;
        }
        out.push_str(&self.source[last..]);
        out
    }

    /// Collapse whitespace between blocks and put the blocks back
    ///
    /// Tokens contain no whitespace, so no whitespace run can span a block
    /// boundary; collapsing each gap on its own gives the same result as
    /// collapsing the placeholder-bearing string.
    pub fn collapse_and_restore(self) -> String {
        let mut cache = self.cache;
        let mut out = String::with_capacity(self.source.len());
        let mut last = 0;

        for block in &self.blocks {
            collapse_into(&self.source[last..block.start], &mut out);
            match cache.take(&block.token) {
                Some(raw) => out.push_str(raw),
                None => {
                    tracing::warn!(token = %block.token, "placeholder missing from cache");
                    out.push_str(block.token.as_str());
                }
            }
            last = block.end;
        }
        collapse_into(&self.source[last..], &mut out);

        out
    }

    /// Find `pattern` at or after `from`, only in text outside every block
    fn find_unprotected(&self, pattern: &str, from: usize) -> Option<usize> {
        let mut gap_start = from;
        for block in &self.blocks {
            if block.end <= gap_start {
                continue;
            }
            if block.start > gap_start {
                if let Some(pos) = self.source[gap_start..block.start].find(pattern) {
                    return Some(gap_start + pos);
                }
            }
            gap_start = block.end;
        }
        self.source[gap_start..]
            .find(pattern)
            .map(|pos| gap_start + pos)
    }

    /// Register `[start, end)` as protected
    ///
    /// Both ends lie outside existing blocks, so any block touching the span
    /// is wholly inside it and gets absorbed: its text is already part of the
    /// new block's raw content.
    fn protect(&mut self, tag: &str, start: usize, end: usize, token: PlaceholderToken) {
        let first = self.blocks.partition_point(|b| b.end <= start);
        let last = self.blocks.partition_point(|b| b.start < end);

        for inner in self.blocks.drain(first..last) {
            trace!(outer = tag, inner = %inner.tag_name, "absorbing nested protected block");
            self.cache.take(&inner.token);
            self.absorbed += 1;
        }

        let source = self.source;
        self.cache.insert(token.clone(), &source[start..end]);
        self.blocks.insert(
            first,
            ProtectedBlock {
                tag_name: tag.to_string(),
                start,
                end,
                token,
            },
        );
    }
}
