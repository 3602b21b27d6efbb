//! Automaton states in a flat arena
//!
//! Transitions and failure links are arena indices, so the failure edges
//! that turn the trie into a graph never create ownership cycles.

use smallvec::SmallVec;
use std::collections::HashMap;

/// Index of a state in the node arena
pub type StateId = u32;

/// The root state always lives at index 0
pub const ROOT: StateId = 0;

/// Index into the keyword table of a built trie
pub(crate) type KeywordId = u32;

/// One automaton state
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    /// Length of the prefix this state represents
    pub(crate) depth: usize,
    /// Child nodes: char -> node index
    pub(crate) transitions: HashMap<char, StateId>,
    /// Longest proper suffix state; `None` only for the root (and before linking)
    pub(crate) failure: Option<StateId>,
    /// Keywords ending here, own entries first, then inherited ones
    pub(crate) terminals: SmallVec<[KeywordId; 2]>,
}

/// Contiguous node storage
#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an arena holding only the root
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: StateId) -> &Node {
        &self.nodes[id as usize]
    }

    pub(crate) fn node_mut(&mut self, id: StateId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    /// Direct transition without failure fallback
    pub(crate) fn child(&self, id: StateId, symbol: char) -> Option<StateId> {
        self.node(id).transitions.get(&symbol).copied()
    }

    /// Follow the transition on `symbol`, creating the child if missing
    pub(crate) fn add_child(&mut self, id: StateId, symbol: char) -> StateId {
        if let Some(existing) = self.child(id, symbol) {
            return existing;
        }

        let new_id = self.nodes.len() as StateId;
        let depth = self.node(id).depth + 1;
        self.nodes.push(Node {
            depth,
            ..Default::default()
        });
        self.node_mut(id).transitions.insert(symbol, new_id);
        new_id
    }

    /// Goto with failure fallback
    ///
    /// The root behaves as if it had a self-loop on every symbol it has no
    /// transition for, so this always yields a state.
    pub(crate) fn next_state(&self, mut id: StateId, symbol: char) -> StateId {
        loop {
            if let Some(next) = self.child(id, symbol) {
                return next;
            }
            match self.node(id).failure {
                Some(failure) => id = failure,
                None => return ROOT,
            }
        }
    }
}
