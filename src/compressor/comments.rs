//! HTML comment removal
//!
//! Comments are located by forward scanning for `<!--` and the next `-->`,
//! then deleted by offset in a single rebuild pass. Conditional comments
//! (anything containing `[if` or `![endif]`) are left verbatim.

use crate::constants::{
    COMMENT_CLOSE, COMMENT_OPEN, CONDITIONAL_ENDIF_MARKER, CONDITIONAL_IF_MARKER,
};

/// A closed `<!-- ... -->` span, offsets in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentBlock {
    pub start: usize,
    pub end: usize,
    pub is_conditional: bool,
}

impl CommentBlock {
    /// Text of the comment including both markers
    pub fn text<'a>(&self, doc: &'a str) -> &'a str {
        &doc[self.start..self.end]
    }
}

/// Find every closed comment in `doc`, in document order
///
/// The closing marker is searched from `start + 4`, so `<!-->` does not close
/// itself. An opener without a closer ends the scan.
pub fn find_comments(doc: &str) -> Vec<CommentBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = doc[cursor..].find(COMMENT_OPEN) {
        let start = cursor + offset;
        let body = start + COMMENT_OPEN.len();
        let Some(close) = doc[body..].find(COMMENT_CLOSE) else {
            break;
        };
        let end = body + close + COMMENT_CLOSE.len();
        let text = &doc[start..end];

        blocks.push(CommentBlock {
            start,
            end,
            is_conditional: text.contains(CONDITIONAL_IF_MARKER)
                || text.contains(CONDITIONAL_ENDIF_MARKER),
        });
        cursor = end;
    }

    blocks
}

/// Remove all non-conditional comments from `doc`
pub fn strip_comments(doc: &str) -> String {
    strip_comments_counted(doc).0
}

/// Same as [`strip_comments`], also returning how many comments were removed
pub(crate) fn strip_comments_counted(doc: &str) -> (String, usize) {
    let removable: Vec<CommentBlock> = find_comments(doc)
        .into_iter()
        .filter(|block| !block.is_conditional)
        .collect();

    if removable.is_empty() {
        return (doc.to_string(), 0);
    }

    let mut out = String::with_capacity(doc.len());
    let mut last = 0;
    for block in &removable {
        out.push_str(&doc[last..block.start]);
        last = block.end;
    }
    out.push_str(&doc[last..]);

    (out, removable.len())
}
