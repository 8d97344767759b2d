//! Whitespace collapsing
//!
//! Two substitutions applied in order:
//! 1. every run of `\n`, `\r`, `\t` is deleted
//! 2. every remaining run of two or more whitespace characters is deleted
//!
//! Runs collapse to nothing, not to a single space. Both passes are fused into
//! one scan: within a maximal whitespace run, line breaks and tabs are dropped
//! and the rest survives only if exactly one character is left.

/// Characters removed unconditionally by the first pass
fn is_line_break_or_tab(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t')
}

/// Collapse whitespace in `doc`
pub fn collapse_whitespace(doc: &str) -> String {
    let mut out = String::with_capacity(doc.len());
    collapse_into(doc, &mut out);
    out
}

/// Append the collapsed form of `doc` to `out`
pub(crate) fn collapse_into(doc: &str, out: &mut String) {
    let mut chars = doc.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }

        let mut survivors = doc[start..end].chars().filter(|ch| !is_line_break_or_tab(*ch));
        if let (Some(only), None) = (survivors.next(), survivors.next()) {
            out.push(only);
        }
    }
}
