//! Aho-Corasick multi-keyword matching
//!
//! This crate finds every occurrence of a fixed set of keywords in a single
//! linear pass over the input, however many keywords are registered. On top
//! of the raw match stream it offers three policies, chosen per automaton:
//!
//! - **Case folding**: text and keywords are compared in lowercase
//! - **Whole words**: matches touching a letter on either side are dropped
//! - **Overlap removal**: a maximal non-overlapping subset is kept, longest
//!   matches first
//!
//! and can lay the result out as a gap-free stream of [`Token`]s.
//!
//! # Architecture
//!
//! Construction is two-phase. A [`TrieBuilder`] collects keywords and
//! configuration; [`TrieBuilder::build`] consumes it, inserts the keywords
//! into an arena-backed trie, links failure states breadth-first and returns
//! an immutable [`Trie`]. The finished automaton is read-only and can be
//! scanned from many threads at once.
//!
//! # Example
//!
//! ```rust
//! use acmatch_core::{Token, Trie};
//!
//! let trie = Trie::builder()
//!     .allow_overlaps(false)
//!     .keywords([("Alpha", 1), ("Beta", 2), ("Gamma", 3)])
//!     .build();
//!
//! let tokens = trie.tokenize("Hear: Alpha team first, Beta from the rear");
//! let texts: Vec<&str> = tokens.iter().map(Token::text).collect();
//! assert_eq!(texts, vec!["Hear: ", "Alpha", " team first, ", "Beta", " from the rear"]);
//! ```
//!
//! Positions in [`Match`] and [`Span`] count Unicode scalar values, not bytes.

#![warn(missing_docs)]

pub mod builder;
pub mod config;
mod node;
pub mod resolver;
pub mod scanner;
pub mod span;
pub mod tokenizer;
pub mod trie;

// Re-export key types
pub use builder::TrieBuilder;
pub use config::TrieConfig;
pub use resolver::remove_overlaps;
pub use scanner::Matches;
pub use span::{Match, Span};
pub use tokenizer::Token;
pub use trie::Trie;
