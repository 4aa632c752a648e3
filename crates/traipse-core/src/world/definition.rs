//! TOML world definitions
//!
//! A world definition is the static data table the engine consumes: the
//! node list, the connection list, and the start/goal designations. It is
//! loaded once at startup and validated while the graph is wired.
//!
//! ```toml
//! start = "Beach"
//! goal = "Treasure"
//!
//! [[nodes]]
//! name = "Beach"
//! description = "You woke up on a sandy beach."
//!
//! [[connections]]
//! from = "Beach"
//! to = "Jungle"
//! weight = 2        # optional, defaults to 1
//! two-way = false   # optional, defaults to false
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TraipseError};
use crate::world::{Distance, NodeId, World, WorldBuilder};

/// Declarative form of a world, as read from a TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldDefinition {
    pub start: String,
    pub goal: String,
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
    #[serde(default)]
    pub connections: Vec<ConnectionDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionDefinition {
    pub from: String,
    pub to: String,
    /// Signed on the wire so that negative weights can be rejected with a
    /// clear error instead of a type mismatch.
    pub weight: Option<i64>,
    #[serde(default, rename = "two-way")]
    pub two_way: bool,
}

impl WorldDefinition {
    /// Parse a definition from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a definition file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TraipseError::WorldFileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                TraipseError::Io(e)
            }
        })?;
        Self::from_toml_str(&text).map_err(|e| TraipseError::InvalidWorldFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Wire the definition into a validated [`World`]
    pub fn build(&self) -> Result<World> {
        if self.nodes.is_empty() {
            return Err(TraipseError::EmptyWorld);
        }

        let mut builder = WorldBuilder::new();
        for node in &self.nodes {
            builder.add_node(&node.name, &node.description)?;
        }

        for conn in &self.connections {
            let from = resolve(&builder, &conn.from)?;
            let to = resolve(&builder, &conn.to)?;
            let weight = match conn.weight {
                None => Distance::DEFAULT,
                Some(w) if w < 0 => {
                    return Err(TraipseError::NegativeWeight {
                        from: conn.from.clone(),
                        to: conn.to.clone(),
                        weight: w,
                    })
                }
                Some(w) => Distance::new(w as u64),
            };
            if conn.two_way {
                builder.connect_both(from, to, weight)?;
            } else {
                builder.connect(from, to, weight)?;
            }
        }

        let start = resolve(&builder, &self.start)?;
        let goal = resolve(&builder, &self.goal)?;
        builder.build(start, goal)
    }
}

fn resolve(builder: &WorldBuilder, name: &str) -> Result<NodeId> {
    builder.find(name).ok_or_else(|| TraipseError::UnknownNode {
        name: name.to_string(),
    })
}
