//! The world graph: an arena of nodes wired by directed, weighted edges
//!
//! Worlds are built once at startup, either from the built-in island data
//! or from a TOML world definition, and are immutable during play. Every
//! session constructs its own world; there is no shared or global world.

pub mod definition;
pub mod island;
pub mod node;

use std::collections::HashMap;

pub use definition::WorldDefinition;
pub use node::{Choice, Distance, Edge, Node, NodeId, MAX_CHOICES};

use crate::error::{Result, TraipseError};
use node::choice_label;

/// A complete, immutable world graph with designated start and goal nodes
#[derive(Debug, Clone)]
pub struct World {
    nodes: Vec<Node>,
    names: HashMap<String, NodeId>,
    start: NodeId,
    goal: NodeId,
}

impl World {
    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Look up a node by its unique name
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.outgoing().len()).sum()
    }

    /// All nodes in construction order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Lettered choices out of a node, in insertion order
    ///
    /// The sequence is lazy and restartable; it is used purely for display.
    pub fn choices(&self, id: NodeId) -> impl Iterator<Item = Choice<'_>> {
        self.node(id).outgoing().iter().enumerate().map(|(i, edge)| Choice {
            label: choice_label(i),
            index: i,
            name: self.node(edge.target).name(),
            weight: edge.weight,
        })
    }
}

/// Builds a [`World`] by declaring nodes and wiring connections
///
/// Invalid graphs (self connections, duplicate names, over-full choice
/// lists, start == goal) are rejected here, at build time, so traversal
/// never has to deal with them.
#[derive(Debug, Default)]
pub struct WorldBuilder {
    nodes: Vec<Node>,
    names: HashMap<String, NodeId>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a declared node by name
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Declare a node; names must be unique within the world
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<NodeId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(TraipseError::DuplicateNode { name });
        }
        let id = NodeId(self.nodes.len());
        self.names.insert(name.clone(), id);
        self.nodes.push(Node::new(name, description));
        Ok(id)
    }

    /// Add a one-way connection
    ///
    /// A second edge to the same destination is a silent no-op, regardless
    /// of weight. Self connections are rejected.
    pub fn connect(&mut self, from: NodeId, to: NodeId, weight: Distance) -> Result<()> {
        self.connect_dedup(from, to, weight)?;
        Ok(())
    }

    /// Add a two-way connection
    ///
    /// Wires the forward edge through the same dedup check as [`connect`];
    /// only if the forward edge was newly added, the reverse edge is
    /// appended directly, skipping the dedup check on `to`. Calling this
    /// twice for the same pair therefore adds nothing the second time.
    ///
    /// [`connect`]: WorldBuilder::connect
    pub fn connect_both(&mut self, from: NodeId, to: NodeId, weight: Distance) -> Result<()> {
        let added = self.connect_dedup(from, to, weight)?;
        if added {
            self.push_edge(to, from, weight)?;
        }
        Ok(())
    }

    /// Finish the world, fixing its start and goal nodes
    pub fn build(self, start: NodeId, goal: NodeId) -> Result<World> {
        if start == goal {
            return Err(TraipseError::StartIsGoal {
                name: self.nodes[start.0].name().to_string(),
            });
        }
        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.nodes.iter().map(|n| n.outgoing().len()).sum::<usize>(),
            start = self.nodes[start.0].name(),
            goal = self.nodes[goal.0].name(),
            "world_built"
        );
        Ok(World {
            nodes: self.nodes,
            names: self.names,
            start,
            goal,
        })
    }

    /// Dedup-checked edge insert; `Ok(true)` iff the edge was newly added
    fn connect_dedup(&mut self, from: NodeId, to: NodeId, weight: Distance) -> Result<bool> {
        if self.nodes[from.0].outgoing.iter().any(|e| e.target == to) {
            return Ok(false);
        }
        self.push_edge(from, to, weight)?;
        Ok(true)
    }

    /// Raw edge append; enforces the self-connection and A-Z cap rules
    /// but not deduplication.
    fn push_edge(&mut self, from: NodeId, to: NodeId, weight: Distance) -> Result<()> {
        if from == to {
            return Err(TraipseError::SelfConnection {
                name: self.nodes[from.0].name().to_string(),
            });
        }
        let node = &mut self.nodes[from.0];
        if node.outgoing.len() >= MAX_CHOICES {
            return Err(TraipseError::TooManyChoices {
                name: node.name().to_string(),
                max: MAX_CHOICES,
            });
        }
        node.outgoing.push(Edge { target: to, weight });
        Ok(())
    }
}
