//! Placeholder tokens and the per-call region cache

use std::collections::HashMap;
use std::fmt;

use chrono::Utc;

use crate::constants::PLACEHOLDER_SEPARATOR;

/// Key standing in for a protected block, formatted `<callId>#<index>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceholderToken(String);

impl PlaceholderToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceholderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues tokens for one compression call
///
/// The call id is the call-time Unix timestamp in milliseconds; the index
/// increases monotonically, so tokens never repeat within a call.
#[derive(Debug)]
pub struct PlaceholderGenerator {
    call_id: i64,
    next_index: usize,
}

impl PlaceholderGenerator {
    /// Generator seeded from the current time
    pub fn new() -> Self {
        Self::with_call_id(Utc::now().timestamp_millis())
    }

    /// Generator with a fixed call id, for deterministic output
    pub fn with_call_id(call_id: i64) -> Self {
        Self {
            call_id,
            next_index: 0,
        }
    }

    pub fn call_id(&self) -> i64 {
        self.call_id
    }

    pub fn next_token(&mut self) -> PlaceholderToken {
        let token = format!("{}{}{}", self.call_id, PLACEHOLDER_SEPARATOR, self.next_index);
        self.next_index += 1;
        PlaceholderToken(token)
    }
}

impl Default for PlaceholderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Token to original block text, scoped to one call
///
/// Content is borrowed from the comment-stripped document the tokens were
/// issued against.
#[derive(Debug, Default)]
pub struct RegionCache<'a> {
    entries: HashMap<PlaceholderToken, &'a str>,
}

impl<'a> RegionCache<'a> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, token: PlaceholderToken, raw: &'a str) {
        self.entries.insert(token, raw);
    }

    pub fn get(&self, token: &PlaceholderToken) -> Option<&'a str> {
        self.entries.get(token).copied()
    }

    /// Remove and return the content for `token`; a token restores once
    pub(crate) fn take(&mut self, token: &PlaceholderToken) -> Option<&'a str> {
        self.entries.remove(token)
    }

    pub fn contains(&self, token: &PlaceholderToken) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlaceholderToken, &'a str)> + '_ {
        self.entries.iter().map(|(token, raw)| (token, *raw))
    }
}
