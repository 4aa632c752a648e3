//! `traipse check` - validate a world definition and report its shape
//!
//! Construction errors (unknown nodes, negative weights, self connections,
//! start == goal) surface while the world is loaded, before this command
//! runs, and exit with code 3.

use crate::cli::{Cli, OutputFormat};
use traipse_core::error::Result;
use traipse_core::world::World;

/// Execute the check command
pub fn execute(cli: &Cli, world: &World) -> Result<()> {
    let start = world.node(world.start()).name();
    let goal = world.node(world.goal()).name();
    let dead_ends = world.nodes().filter(|(_, n)| n.is_dead_end()).count();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "ok": true,
                "nodes": world.node_count(),
                "connections": world.edge_count(),
                "dead_ends": dead_ends,
                "start": start,
                "goal": goal,
            });
            println!("{}", output);
        }
        OutputFormat::Human => {
            println!(
                "world ok: {} nodes, {} connections, {} dead ends",
                world.node_count(),
                world.edge_count(),
                dead_ends
            );
            println!("start: {}", start);
            println!("goal: {}", goal);
        }
    }

    Ok(())
}
