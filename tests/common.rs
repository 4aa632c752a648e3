use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};

pub fn traipse() -> Command {
    cargo_bin_cmd!("traipse")
}

/// Write a world definition file under `dir` and return its path
#[allow(dead_code)]
pub fn write_world(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("world.toml");
    std::fs::write(&path, contents).expect("failed to write world file");
    path
}

/// A minimal three-node world: Start -> Fork -> End, with a dead end
#[allow(dead_code)]
pub const TINY_WORLD: &str = r#"
start = "Start"
goal = "End"

[[nodes]]
name = "Start"
description = "Where it begins."

[[nodes]]
name = "Fork"
description = "A fork in the road."

[[nodes]]
name = "Pit"
description = "A pit with smooth walls."

[[nodes]]
name = "End"
description = "Where it ends."

[[connections]]
from = "Start"
to = "Fork"
weight = 3

[[connections]]
from = "Fork"
to = "Pit"
weight = 1

[[connections]]
from = "Fork"
to = "End"
weight = 4
"#;
