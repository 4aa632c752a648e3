//! Nodes, edges, and traversal distances
//!
//! The world graph is cyclic, so edges hold a [`NodeId`] into the world's
//! node arena rather than owning their target.

use std::fmt;

use serde::Serialize;

/// Most outgoing edges a single node may carry.
///
/// Choices are labelled with a single letter starting at 'A', so the count
/// is capped at build time to keep every label inside A-Z.
pub const MAX_CHOICES: usize = 26;

/// Stable identifier of a node within its world's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the world's arena
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Cost of traversing a single edge
///
/// Non-negative by construction. Unweighted world data uses the neutral
/// default of 1, so weighted and unweighted worlds share one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const DEFAULT: Distance = Distance(1);

    pub fn new(value: u64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Distance(value)
    }
}

// Saturating: world files may carry arbitrarily large weights, and a long
// enough walk must not be able to panic the accumulator.
impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for Distance {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted connection to another node
///
/// Immutable once created. Two-way connections are two independent edges,
/// one in each direction, never a shared undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Distance,
}

/// A location in the world graph
///
/// Outgoing edges keep insertion order; that order is the choice order
/// shown to the player, so it is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    description: String,
    pub(crate) outgoing: Vec<Edge>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            description: description.into(),
            outgoing: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Outgoing edges in choice order
    pub fn outgoing(&self) -> &[Edge] {
        &self.outgoing
    }

    /// Whether this node is a dead end
    pub fn is_dead_end(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// The edge at a choice index, if the index is in range
    ///
    /// Returns `None` for any index outside `[0, outgoing.len())`; the
    /// caller must distinguish that from a valid choice at index 0.
    pub fn resolve_choice(&self, index: usize) -> Option<&Edge> {
        self.outgoing.get(index)
    }
}

/// A player-facing reference to one outgoing edge of the current node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<'a> {
    /// Letter shown to the player ('A' + index)
    pub label: char,
    /// Zero-based position in the outgoing edge list
    pub index: usize,
    /// Name of the destination node
    pub name: &'a str,
    /// Cost of taking this choice
    pub weight: Distance,
}

/// Letter label for a choice index
///
/// Only valid for indexes below [`MAX_CHOICES`], which the builder enforces.
pub(crate) fn choice_label(index: usize) -> char {
    (b'A' + index as u8) as char
}
