//! `traipse map` - print every node with its outgoing connections

use crate::cli::{Cli, OutputFormat};
use traipse_core::error::Result;
use traipse_core::world::World;

/// Execute the map command
pub fn execute(cli: &Cli, world: &World) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let nodes: Vec<_> = world
                .nodes()
                .map(|(id, node)| {
                    let choices: Vec<_> = world
                        .choices(id)
                        .map(|c| {
                            serde_json::json!({
                                "label": c.label.to_string(),
                                "to": c.name,
                                "weight": c.weight,
                            })
                        })
                        .collect();
                    serde_json::json!({
                        "name": node.name(),
                        "description": node.description(),
                        "choices": choices,
                    })
                })
                .collect();

            let output = serde_json::json!({
                "start": world.node(world.start()).name(),
                "goal": world.node(world.goal()).name(),
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (id, node) in world.nodes() {
                let marker = if id == world.start() {
                    " (start)"
                } else if id == world.goal() {
                    " (goal)"
                } else {
                    ""
                };
                println!("* {}{}", node.name(), marker);
                if node.is_dead_end() {
                    println!("    (no way out)");
                }
                for choice in world.choices(id) {
                    println!(
                        "    {} - {} (distance {})",
                        choice.label, choice.name, choice.weight
                    );
                }
            }
        }
    }

    Ok(())
}
