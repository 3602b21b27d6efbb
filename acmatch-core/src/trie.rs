//! The finalized automaton

use crate::builder::TrieBuilder;
use crate::config::TrieConfig;
use crate::node::{KeywordId, NodeArena};
use crate::resolver::remove_overlaps;
use crate::scanner::Matches;
use crate::span::Match;
use crate::tokenizer::{self, Token};

/// A registered keyword and its payload
#[derive(Debug, Clone)]
pub(crate) struct Keyword<T> {
    /// Keyword text as registered (unfolded)
    pub(crate) text: String,
    /// Length in symbols
    pub(crate) len: usize,
    pub(crate) payload: T,
}

/// Immutable Aho-Corasick automaton
///
/// Built by [`TrieBuilder::build`]. Scanning never mutates the automaton, so
/// a `Trie` can be shared between threads and queried concurrently.
///
/// ```
/// use acmatch_core::Trie;
///
/// let trie = Trie::builder()
///     .keyword("hers", 0)
///     .keyword("his", 1)
///     .keyword("she", 2)
///     .keyword("he", 3)
///     .build();
///
/// let found: Vec<_> = trie
///     .find_matches("ushers")
///     .iter()
///     .map(|m| (m.start(), m.end(), m.keyword()))
///     .collect();
/// assert_eq!(found, vec![(1, 3, "she"), (2, 3, "he"), (2, 5, "hers")]);
/// ```
#[derive(Debug, Clone)]
pub struct Trie<T> {
    config: TrieConfig,
    arena: NodeArena,
    keywords: Vec<Keyword<T>>,
}

impl<T> Trie<T> {
    /// Start building a trie with the default configuration
    pub fn builder() -> TrieBuilder<T> {
        TrieBuilder::new()
    }

    pub(crate) fn from_parts(
        config: TrieConfig,
        arena: NodeArena,
        keywords: Vec<Keyword<T>>,
    ) -> Self {
        Self {
            config,
            arena,
            keywords,
        }
    }

    pub(crate) fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub(crate) fn keyword_entry(&self, id: KeywordId) -> &Keyword<T> {
        &self.keywords[id as usize]
    }

    /// The configuration the trie was built with
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Number of registered keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether no keyword was registered
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Number of automaton states, root included
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    /// Iterate over raw matches lazily
    ///
    /// Matches are ordered by end position, then by descending size, then
    /// by registration order. The whole-word filter applies; overlap removal
    /// does not.
    pub fn matches_iter(&self, text: &str) -> Matches<'_, T> {
        Matches::new(self, text)
    }

    /// Find every match, with the configured filters applied
    ///
    /// With overlaps allowed the result is in scan order (see
    /// [`matches_iter`](Self::matches_iter)); otherwise it is the
    /// longest-first non-overlapping subset ordered by start.
    pub fn find_matches(&self, text: &str) -> Vec<Match<'_, T>> {
        let matches: Vec<_> = self.matches_iter(text).collect();
        if self.config.allow_overlaps {
            matches
        } else {
            remove_overlaps(matches)
        }
    }

    /// Whether any keyword occurs in `text`
    pub fn contains_match(&self, text: &str) -> bool {
        self.matches_iter(text).next().is_some()
    }

    /// The first match [`find_matches`](Self::find_matches) would report
    pub fn first_match(&self, text: &str) -> Option<Match<'_, T>> {
        if self.config.allow_overlaps {
            self.matches_iter(text).next()
        } else {
            self.find_matches(text).into_iter().next()
        }
    }

    /// Split `text` into fragment and match tokens covering it exactly once
    ///
    /// When overlaps are allowed, a match that starts inside text already
    /// claimed by an earlier match (in scan order) is left out of the stream.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<Token<'t, '_, T>> {
        tokenizer::tokenize(text, self.find_matches(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<S: Send + Sync>() {}

    #[test]
    fn test_trie_is_send_and_sync() {
        assert_send_sync::<Trie<String>>();
        assert_send_sync::<Trie<()>>();
    }

    #[test]
    fn test_keyword_and_text_are_the_same() {
        let trie = Trie::builder().keyword("abc", 0).build();
        let matches = trie.find_matches("abc");
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].start(), matches[0].end()), (0, 2));
        assert_eq!(matches[0].keyword(), "abc");
        assert_eq!(*matches[0].payload(), 0);
    }

    #[test]
    fn test_various_keywords_one_match() {
        let trie = Trie::builder()
            .keywords([("abc", 0), ("bcd", 1), ("cde", 2)])
            .build();
        let matches = trie.find_matches("bcd");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].keyword(), "bcd");
        assert_eq!(*matches[0].payload(), 1);
    }

    #[test]
    fn test_contains_match_respects_whole_words() {
        let trie = Trie::builder()
            .only_whole_words(true)
            .keyword("sugar", ())
            .build();
        assert!(!trie.contains_match("sugarcane"));
        assert!(trie.contains_match("raw sugar!"));
    }

    #[test]
    fn test_first_match_with_and_without_overlaps() {
        let keywords = [("ab", 0), ("cba", 1), ("ababc", 2)];

        let overlapping = Trie::builder().keywords(keywords).build();
        let first = overlapping.first_match("ababcbab").unwrap();
        assert_eq!((first.start(), first.end()), (0, 1));

        let exclusive = Trie::builder()
            .allow_overlaps(false)
            .keywords(keywords)
            .build();
        let first = exclusive.first_match("ababcbab").unwrap();
        assert_eq!((first.start(), first.end(), first.keyword()), (0, 4, "ababc"));

        assert!(exclusive.first_match("zzz").is_none());
    }

    #[test]
    fn test_counts() {
        let trie = Trie::builder().keywords([("a", ()), ("ab", ())]).build();
        assert_eq!(trie.len(), 2);
        assert!(!trie.is_empty());
        assert_eq!(trie.state_count(), 3);
        assert_eq!(trie.config(), &TrieConfig::default());
    }
}
