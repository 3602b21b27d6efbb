//! Linear-time scanning
//!
//! The scanner feeds one symbol at a time through the automaton and emits
//! every keyword listed at the reached state. Emission order follows the
//! terminal lists built by the builder, so matches come out ordered by end
//! position, then by descending length, then by registration order.

use crate::node::{KeywordId, StateId, ROOT};
use crate::resolver::is_whole_word;
use crate::span::{Match, Span};
use crate::trie::Trie;

/// Fold a single character to lowercase without changing the symbol count
///
/// Characters whose lowercase form expands to several characters (such as
/// `'İ'`) are kept unchanged so positions keep lining up with the input.
pub(crate) fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Turn text into the symbol sequence the automaton consumes
pub(crate) fn symbols(text: &str, case_insensitive: bool) -> Vec<char> {
    if case_insensitive {
        text.chars().map(fold_char).collect()
    } else {
        text.chars().collect()
    }
}

/// Lazy iterator over raw matches
///
/// Created by [`Trie::matches_iter`]. The whole-word filter is applied
/// inline; overlap removal is not, since it needs the complete match set.
#[derive(Debug)]
pub struct Matches<'a, T> {
    trie: &'a Trie<T>,
    symbols: Vec<char>,
    /// Number of symbols consumed so far
    position: usize,
    state: StateId,
    pending: std::slice::Iter<'a, KeywordId>,
    whole_words: bool,
}

impl<'a, T> Matches<'a, T> {
    pub(crate) fn new(trie: &'a Trie<T>, text: &str) -> Self {
        let config = trie.config();
        Self {
            trie,
            symbols: symbols(text, config.case_insensitive),
            position: 0,
            state: ROOT,
            pending: Default::default(),
            whole_words: config.only_whole_words,
        }
    }
}

impl<'a, T> Iterator for Matches<'a, T> {
    type Item = Match<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(&id) = self.pending.next() {
                let keyword = self.trie.keyword_entry(id);
                let end = self.position - 1;
                let span = Span::new(self.position - keyword.len, end);

                // Folding keeps one symbol per char and never changes whether it is a letter
                if self.whole_words && !is_whole_word(&self.symbols, span) {
                    continue;
                }
                return Some(Match::new(span, &keyword.text, &keyword.payload));
            }

            let &symbol = self.symbols.get(self.position)?;
            self.state = self.trie.arena().next_state(self.state, symbol);
            self.position += 1;
            self.pending = self.trie.arena().node(self.state).terminals.iter();
        }
    }
}

impl<T> std::iter::FusedIterator for Matches<'_, T> {}
