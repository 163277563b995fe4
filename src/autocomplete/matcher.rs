use std::ops::Range;

use crate::suggestion::Suggestion;

/// Case-insensitive substring matching over suggestion names
pub struct SuggestionMatcher;

impl SuggestionMatcher {
    /// Keep the suggestions whose name contains `query`, preserving order
    ///
    /// A name is kept exactly when `find_match` can emphasize it.
    pub fn filter(candidates: &[Suggestion], query: &str) -> Vec<Suggestion> {
        if query.is_empty() {
            return candidates.to_vec();
        }
        candidates
            .iter()
            .filter(|s| Self::find_match(&s.name, query).is_some())
            .cloned()
            .collect()
    }

    /// Byte range of the first case-insensitive occurrence of `query` in `name`
    ///
    /// The range is in `name`'s own bytes, so it can be sliced directly even
    /// when lowercasing changes a character's encoded length. A match covers
    /// whole characters of `name`: "İ" lowercases to two chars, so it neither
    /// matches "i" nor is listed for it.
    pub fn find_match(name: &str, query: &str) -> Option<Range<usize>> {
        if query.is_empty() {
            return None;
        }
        let query_lower = query.to_lowercase();

        for (start, _) in name.char_indices() {
            let mut lowered = String::new();
            for (offset, ch) in name[start..].char_indices() {
                lowered.extend(ch.to_lowercase());
                if !query_lower.starts_with(lowered.as_str()) {
                    break;
                }
                if lowered.len() == query_lower.len() {
                    let end = start + offset + ch.len_utf8();
                    return Some(start..end);
                }
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
