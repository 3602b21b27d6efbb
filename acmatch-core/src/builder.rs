//! Keyword registration and automaton construction
//!
//! [`TrieBuilder`] is the mutable half of the two-phase API: it collects
//! keywords and configuration, and [`TrieBuilder::build`] consumes it to
//! produce an immutable [`Trie`]. Nothing can be inserted or reconfigured
//! after the failure links exist.

use crate::config::TrieConfig;
use crate::node::{KeywordId, NodeArena, StateId, ROOT};
use crate::scanner::fold_char;
use crate::trie::{Keyword, Trie};
use std::collections::VecDeque;

/// Builder for [`Trie`]
#[derive(Debug, Clone)]
pub struct TrieBuilder<T> {
    config: TrieConfig,
    keywords: Vec<(String, T)>,
}

impl<T> Default for TrieBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TrieBuilder<T> {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Create a builder with an explicit configuration
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            config,
            keywords: Vec::new(),
        }
    }

    /// Match regardless of letter case
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.config.case_insensitive = enabled;
        self
    }

    /// Only report matches bounded by non-alphabetic symbols
    pub fn only_whole_words(mut self, enabled: bool) -> Self {
        self.config.only_whole_words = enabled;
        self
    }

    /// Keep overlapping matches (the default)
    pub fn allow_overlaps(mut self, enabled: bool) -> Self {
        self.config.allow_overlaps = enabled;
        self
    }

    /// Register a keyword, builder style
    pub fn keyword(mut self, keyword: impl Into<String>, payload: T) -> Self {
        self.add_keyword(keyword, payload);
        self
    }

    /// Register several keywords, builder style
    pub fn keywords<K, I>(mut self, keywords: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        self.add_keywords(keywords);
        self
    }

    /// Register a keyword
    ///
    /// Empty keywords are ignored. Registering the same text twice keeps
    /// both entries; both are reported, in registration order.
    pub fn add_keyword(&mut self, keyword: impl Into<String>, payload: T) -> &mut Self {
        let keyword = keyword.into();
        if keyword.is_empty() {
            log::debug!("ignoring empty keyword");
            return self;
        }
        self.keywords.push((keyword, payload));
        self
    }

    /// Register keywords in iteration order
    pub fn add_keywords<K, I>(&mut self, keywords: I) -> &mut Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        for (keyword, payload) in keywords {
            self.add_keyword(keyword, payload);
        }
        self
    }

    /// Current configuration
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Number of keywords registered so far
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether no keyword has been registered
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Insert every keyword, link failure states and freeze the automaton
    pub fn build(self) -> Trie<T> {
        let TrieBuilder {
            config,
            keywords: pending,
        } = self;

        let mut arena = NodeArena::new();
        let mut keywords = Vec::with_capacity(pending.len());

        for (text, payload) in pending {
            let id = keywords.len() as KeywordId;
            let len = insert(&mut arena, &text, id, config.case_insensitive);
            keywords.push(Keyword { text, len, payload });
        }

        link_failures(&mut arena);

        log::debug!(
            "built automaton: {} keywords, {} states",
            keywords.len(),
            arena.len()
        );

        Trie::from_parts(config, arena, keywords)
    }
}

impl<K: Into<String>> FromIterator<K> for TrieBuilder<()> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.add_keywords(iter.into_iter().map(|keyword| (keyword, ())));
        builder
    }
}

/// Walk (and extend) the trie along `keyword`, returning its length in symbols
fn insert(arena: &mut NodeArena, keyword: &str, id: KeywordId, fold: bool) -> usize {
    let mut state = ROOT;
    let mut len = 0;

    for ch in keyword.chars() {
        let symbol = if fold { fold_char(ch) } else { ch };
        state = arena.add_child(state, symbol);
        len += 1;
    }

    arena.node_mut(state).terminals.push(id);
    len
}

/// Breadth-first failure link construction
///
/// Nodes are visited in non-decreasing depth, so a failure target's terminal
/// list is complete (including its own inherited entries) before it is
/// appended to a deeper node.
fn link_failures(arena: &mut NodeArena) {
    let mut queue: VecDeque<StateId> = VecDeque::new();

    let depth_one: Vec<StateId> = arena.node(ROOT).transitions.values().copied().collect();
    for state in depth_one {
        arena.node_mut(state).failure = Some(ROOT);
        queue.push_back(state);
    }

    while let Some(current) = queue.pop_front() {
        let fallback = arena.node(current).failure.unwrap_or(ROOT);
        let edges: Vec<(char, StateId)> = arena
            .node(current)
            .transitions
            .iter()
            .map(|(&symbol, &target)| (symbol, target))
            .collect();

        for (symbol, target) in edges {
            queue.push_back(target);

            let failure = arena.next_state(fallback, symbol);
            let inherited = arena.node(failure).terminals.clone();

            let node = arena.node_mut(target);
            node.failure = Some(failure);
            node.terminals.extend(inherited);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_for(trie: &Trie<usize>, prefix: &str) -> StateId {
        prefix
            .chars()
            .fold(ROOT, |state, ch| trie.arena().child(state, ch).unwrap())
    }

    fn terminal_keywords<'a>(trie: &'a Trie<usize>, prefix: &str) -> Vec<&'a str> {
        let state = state_for(trie, prefix);
        trie.arena()
            .node(state)
            .terminals
            .iter()
            .map(|&id| trie.keyword_entry(id).text.as_str())
            .collect()
    }

    fn classic() -> Trie<usize> {
        TrieBuilder::new()
            .keywords([("he", 0), ("she", 1), ("his", 2), ("hers", 3)])
            .build()
    }

    #[test]
    fn test_empty_keyword_is_ignored() {
        let mut builder = TrieBuilder::new();
        builder.add_keyword("", 0).add_keyword("abc", 1);
        assert_eq!(builder.len(), 1);

        let trie = builder.build();
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.state_count(), 4);
    }

    #[test]
    fn test_shared_prefixes_share_states() {
        let trie = classic();
        // root, h, he, s, sh, she, hi, his, her, hers
        assert_eq!(trie.state_count(), 10);
    }

    #[test]
    fn test_depth_one_states_fail_to_root() {
        let trie = classic();
        for prefix in ["h", "s"] {
            let state = state_for(&trie, prefix);
            assert_eq!(trie.arena().node(state).failure, Some(ROOT));
        }
        assert_eq!(trie.arena().node(ROOT).failure, None);
    }

    #[test]
    fn test_failure_links_point_to_longest_suffix() {
        let trie = classic();
        let she = state_for(&trie, "she");
        let he = state_for(&trie, "he");
        let sh = state_for(&trie, "sh");
        let h = state_for(&trie, "h");
        let his = state_for(&trie, "his");
        let s = state_for(&trie, "s");

        assert_eq!(trie.arena().node(she).failure, Some(he));
        assert_eq!(trie.arena().node(sh).failure, Some(h));
        assert_eq!(trie.arena().node(his).failure, Some(s));
    }

    #[test]
    fn test_failure_targets_are_shallower() {
        let trie = classic();
        for id in 1..trie.state_count() as StateId {
            let node = trie.arena().node(id);
            let failure = node.failure.unwrap();
            assert!(trie.arena().node(failure).depth < node.depth);
        }
    }

    #[test]
    fn test_suffix_emits_are_inherited_after_own() {
        let trie = classic();
        assert_eq!(terminal_keywords(&trie, "she"), vec!["she", "he"]);
        assert_eq!(terminal_keywords(&trie, "he"), vec!["he"]);
        assert_eq!(terminal_keywords(&trie, "hers"), vec!["hers"]);
    }

    #[test]
    fn test_transitive_inheritance_in_one_pass() {
        let trie = TrieBuilder::new()
            .keywords([("c", 0), ("bc", 1), ("abc", 2)])
            .build();
        assert_eq!(terminal_keywords(&trie, "abc"), vec!["abc", "bc", "c"]);
    }

    #[test]
    fn test_duplicate_keywords_keep_registration_order() {
        let trie = TrieBuilder::new()
            .keywords([("ab", 7), ("b", 8), ("ab", 9)])
            .build();
        let state = state_for(&trie, "ab");
        let payloads: Vec<usize> = trie
            .arena()
            .node(state)
            .terminals
            .iter()
            .map(|&id| trie.keyword_entry(id).payload)
            .collect();
        assert_eq!(payloads, vec![7, 9, 8]);
    }

    #[test]
    fn test_case_insensitive_folds_keywords() {
        let trie = TrieBuilder::new()
            .case_insensitive(true)
            .keyword("HeLLo", 0)
            .build();
        assert_eq!(terminal_keywords(&trie, "hello"), vec!["HeLLo"]);
    }

    #[test]
    fn test_from_iterator() {
        let builder: TrieBuilder<()> = ["alpha", "beta", ""].into_iter().collect();
        assert_eq!(builder.len(), 2);
        assert!(!builder.is_empty());
    }
}
