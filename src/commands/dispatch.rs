//! Command dispatch logic for traipse

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use traipse_core::error::Result;
use traipse_core::world::{island, World, WorldDefinition};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let world = load_world(cli)?;

    if cli.verbose {
        eprintln!("load_world: {:?}", start.elapsed());
    }

    match &cli.command {
        // Playing is the default when no subcommand is given
        None => commands::play::execute(cli, &world, None, None),

        Some(Commands::Play { player, alias }) => {
            commands::play::execute(cli, &world, player.as_deref(), alias.as_deref())
        }

        Some(Commands::Map) => commands::map::execute(cli, &world),

        Some(Commands::Check) => commands::check::execute(cli, &world),
    }
}

/// Build the world to run against: a definition file if `--world` was
/// given, the built-in island otherwise.
fn load_world(cli: &Cli) -> Result<World> {
    match &cli.world {
        Some(path) => WorldDefinition::load(path)?.build(),
        None => island::world(),
    }
}
