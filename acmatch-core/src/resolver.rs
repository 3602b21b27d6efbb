//! Post-processing of raw matches: whole-word filtering and overlap removal

use crate::span::{Match, Span};
use std::collections::BTreeMap;

/// Whether `span` is bounded by non-alphabetic symbols (or the text edges)
///
/// Only letters block a match: digits, underscores and punctuation count as
/// boundaries.
pub(crate) fn is_whole_word(symbols: &[char], span: Span) -> bool {
    let left_clear = span.start == 0 || !symbols[span.start - 1].is_alphabetic();
    let right_clear = symbols
        .get(span.end + 1)
        .map_or(true, |symbol| !symbol.is_alphabetic());
    left_clear && right_clear
}

/// Reduce matches to a maximal non-overlapping subset, longest first
///
/// Candidates are visited by descending size, then ascending start; each is
/// kept only if it is disjoint from everything kept before it. The result is
/// ordered by start.
pub fn remove_overlaps<'a, T>(mut matches: Vec<Match<'a, T>>) -> Vec<Match<'a, T>> {
    // Stable sort: equal candidates keep scan order
    matches.sort_by(|a, b| b.size().cmp(&a.size()).then(a.start().cmp(&b.start())));

    // Accepted spans are disjoint, keyed by start
    let mut accepted: BTreeMap<usize, Match<'a, T>> = BTreeMap::new();
    let candidates = matches.len();

    for candidate in matches {
        if !collides(&accepted, candidate.span()) {
            accepted.insert(candidate.start(), candidate);
        }
    }

    log::trace!(
        "overlap removal kept {} of {} matches",
        accepted.len(),
        candidates
    );

    accepted.into_values().collect()
}

fn collides<T>(accepted: &BTreeMap<usize, Match<'_, T>>, span: Span) -> bool {
    // Only the nearest span starting at or before `span.start` can reach into it
    let reaches_in = accepted
        .range(..=span.start)
        .next_back()
        .is_some_and(|(_, kept)| kept.end() >= span.start);

    reaches_in || accepted.range(span.start..=span.end).next().is_some()
}
