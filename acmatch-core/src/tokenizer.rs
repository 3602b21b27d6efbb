//! Gap-filling token streams

use crate::span::Match;
use std::iter;

/// A segment of the scanned text
///
/// Consecutive tokens cover the input exactly once, in order.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum Token<'t, 'a, T> {
    /// Text no keyword matched
    Fragment {
        /// The uncovered text
        text: &'t str,
    },
    /// Text covered by a keyword match
    Match {
        /// The matched text, in its original case
        text: &'t str,
        /// The underlying match
        matched: Match<'a, T>,
    },
}

impl<'t, 'a, T> Token<'t, 'a, T> {
    /// The covered text
    pub fn text(&self) -> &'t str {
        match self {
            Token::Fragment { text } | Token::Match { text, .. } => *text,
        }
    }

    /// Whether this token is a keyword match
    pub fn is_match(&self) -> bool {
        matches!(self, Token::Match { .. })
    }

    /// The match behind a match token
    pub fn matched(&self) -> Option<&Match<'a, T>> {
        match self {
            Token::Fragment { .. } => None,
            Token::Match { matched, .. } => Some(matched),
        }
    }
}

impl<T> Clone for Token<'_, '_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Token<'_, '_, T> {}

impl<T: PartialEq> PartialEq for Token<'_, '_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Fragment { text: a }, Token::Fragment { text: b }) => a == b,
            (
                Token::Match {
                    text: a,
                    matched: ma,
                },
                Token::Match {
                    text: b,
                    matched: mb,
                },
            ) => a == b && ma == mb,
            _ => false,
        }
    }
}

/// Lay matches out as alternating fragment and match tokens
///
/// `matches` must be in scan order or start order. A match starting inside
/// the region already covered by an earlier match token is skipped, so
/// overlapping input resolves first-match-wins.
pub(crate) fn tokenize<'t, 'a, T, I>(text: &'t str, matches: I) -> Vec<Token<'t, 'a, T>>
where
    I: IntoIterator<Item = Match<'a, T>>,
{
    // Byte offset of every symbol, plus the end of the text
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(iter::once(text.len()))
        .collect();
    let total = offsets.len() - 1;
    let slice = |from: usize, to: usize| -> &'t str { &text[offsets[from]..offsets[to]] };

    let mut tokens = Vec::new();
    // One past the last covered symbol
    let mut uncovered = 0;

    for matched in matches {
        if matched.start() < uncovered {
            continue;
        }
        if matched.start() > uncovered {
            tokens.push(Token::Fragment {
                text: slice(uncovered, matched.start()),
            });
        }
        tokens.push(Token::Match {
            text: slice(matched.start(), matched.end() + 1),
            matched,
        });
        uncovered = matched.end() + 1;
    }

    if uncovered < total {
        tokens.push(Token::Fragment {
            text: slice(uncovered, total),
        });
    }

    tokens
}
