//! The built-in island world
//!
//! Sixteen locations wired into a cyclic graph. The player washes up on
//! the Beach and wins by reaching the Treasure; several branches dead-end
//! in places with no way out.

use crate::error::Result;
use crate::world::{Distance, World, WorldBuilder};

/// Build a fresh copy of the island world
pub fn world() -> Result<World> {
    let mut b = WorldBuilder::new();

    let beach = b.add_node(
        "Beach",
        "You woke up on a sandy beach with no recollection of how you got there.",
    )?;
    let jungle = b.add_node(
        "Jungle",
        "Dense vegetation surrounds you as you enter the mysterious jungle.",
    )?;
    let cave_entrance = b.add_node(
        "Cave Entrance",
        "A dark cave entrance beckons you to explore its depths.",
    )?;
    let underground_lake = b.add_node(
        "Underground lake",
        "A tranquil underground lake shimmers with beauty.",
    )?;
    let spider_lair = b.add_node(
        "Spider lair",
        "You encounter a web-filled lair inhabited by a giant spider.",
    )?;
    let catacombs = b.add_node(
        "Catacombs",
        "A network of underground catacombs stretches before you.",
    )?;
    let crystal_cave = b.add_node(
        "Crystal cave",
        "A cave decorated with shining crystals radiates an otherworldly glow.",
    )?;
    let cavern = b.add_node(
        "Cavern",
        "A vast cavern stretches before you, filled with stalactites and stalagmites.",
    )?;
    let tunnel = b.add_node(
        "Tunnel",
        "You venture into an underground tunnel that leads you deeper into the island.",
    )?;
    let campsite = b.add_node(
        "Campsite",
        "You stumble upon an old campsite, abandoned and overgrown.",
    )?;
    let waterfall = b.add_node("Waterfall", "A magnificent waterfall stands before you.")?;
    let cliffs = b.add_node(
        "Cliffs",
        "You reach a cliff that offers a view of the surrounding ocean.",
    )?;
    let labyrinth = b.add_node("Labyrinth", "You stand in a mysterious labyrinth.")?;
    let riverside = b.add_node("Riverside", "You arrive at a peaceful riverside.")?;
    let ruins = b.add_node(
        "Ruins",
        "Ancient ruins rise from the ground, weathered by time.",
    )?;
    let treasure = b.add_node(
        "Treasure",
        "You have discovered a hidden chamber filled with gold and jewels.",
    )?;

    b.connect(beach, jungle, Distance::new(2))?;
    b.connect(beach, cave_entrance, Distance::new(1))?;
    b.connect(jungle, campsite, Distance::new(3))?;
    b.connect_both(jungle, tunnel, Distance::new(4))?;
    b.connect(cave_entrance, underground_lake, Distance::new(2))?;
    b.connect(cave_entrance, tunnel, Distance::new(5))?;
    b.connect(underground_lake, spider_lair, Distance::new(1))?;
    b.connect(underground_lake, catacombs, Distance::new(3))?;
    b.connect_both(catacombs, crystal_cave, Distance::new(2))?;
    b.connect_both(catacombs, cavern, Distance::new(4))?;
    b.connect_both(cavern, tunnel, Distance::new(2))?;
    b.connect_both(cavern, labyrinth, Distance::new(3))?;
    b.connect(cavern, riverside, Distance::new(5))?;
    b.connect(campsite, waterfall, Distance::new(2))?;
    b.connect_both(campsite, cliffs, Distance::new(1))?;
    b.connect(waterfall, labyrinth, Distance::new(4))?;
    b.connect(labyrinth, cliffs, Distance::new(2))?;
    b.connect(labyrinth, riverside, Distance::new(3))?;
    b.connect(riverside, ruins, Distance::new(2))?;
    b.connect(ruins, treasure, Distance::new(1))?;

    b.build(beach, treasure)
}
