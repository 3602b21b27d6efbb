//! Matching configuration

/// Per-automaton matching policy
///
/// Fixed when the [`Trie`](crate::Trie) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TrieConfig {
    /// Fold text and keywords to lowercase before matching
    pub case_insensitive: bool,
    /// Drop matches with an alphabetic neighbour on either side
    pub only_whole_words: bool,
    /// Keep overlapping matches; when false, keep a maximal
    /// longest-first non-overlapping subset
    pub allow_overlaps: bool,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            only_whole_words: false,
            allow_overlaps: true,
        }
    }
}

impl TrieConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for tokenizing natural-language text:
    /// whole words only, no overlaps
    pub fn words() -> Self {
        Self {
            only_whole_words: true,
            allow_overlaps: false,
            ..Default::default()
        }
    }
}
