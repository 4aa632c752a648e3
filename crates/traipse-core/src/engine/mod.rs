//! Player state and the traversal engine
//!
//! The engine is synchronous and deterministic: it never reads input
//! itself. The CLI turn loop feeds it one raw choice line at a time and
//! renders whatever it reports back.

use std::fmt;

use thiserror::Error;

use crate::world::{Distance, Node, NodeId, World};

/// Display identity of the player; has no behavioral effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub nickname: String,
}

impl Player {
    pub fn new(name: impl Into<String>, nickname: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            nickname: nickname.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} alias {}", self.name, self.nickname)
    }
}

/// Why a move attempt was refused
///
/// Both kinds are recovered locally by the turn loop; they never change
/// session state and never escalate to a process error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no such choice: {input}")]
    InvalidChoice { input: String },

    #[error("enter a single letter")]
    MalformedInput,
}

/// A successfully applied move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome<'w> {
    /// The node the player now stands on
    pub node: &'w Node,
    /// Cost of the edge just traversed
    pub weight: Distance,
}

/// Where a session stands after the latest move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The current node has outgoing choices and is not the goal
    Exploring,
    /// The current node is the goal (terminal)
    ReachedGoal,
    /// The current node is a non-goal dead end (terminal)
    Stuck,
}

/// One play-through of a world
///
/// Holds the authoritative player position and the cumulative distance of
/// the path actually walked. A failed move attempt leaves both untouched.
#[derive(Debug)]
pub struct Session<'w> {
    world: &'w World,
    player: Player,
    location: NodeId,
    distance: Distance,
}

impl<'w> Session<'w> {
    /// Start a session at the world's start node with zero distance
    pub fn new(world: &'w World, player: Player) -> Self {
        Session {
            world,
            player,
            location: world.start(),
            distance: Distance::ZERO,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The node the player currently stands on
    pub fn location(&self) -> &'w Node {
        self.world.node(self.location)
    }

    pub fn location_id(&self) -> NodeId {
        self.location
    }

    /// Sum of the weights of all edges traversed so far
    pub fn distance_traveled(&self) -> Distance {
        self.distance
    }

    pub fn is_at_goal(&self) -> bool {
        self.location == self.world.goal()
    }

    pub fn is_stuck(&self) -> bool {
        self.location().is_dead_end()
    }

    /// Classify the current position
    ///
    /// The goal check runs before the stuck check, so a goal with no
    /// outgoing edges reports victory rather than being stuck.
    pub fn state(&self) -> SessionState {
        if self.is_at_goal() {
            SessionState::ReachedGoal
        } else if self.is_stuck() {
            SessionState::Stuck
        } else {
            SessionState::Exploring
        }
    }

    /// Validate and apply one raw choice line
    ///
    /// The line is trimmed and must hold exactly one character; the
    /// character is uppercased and mapped to a choice index by its offset
    /// from 'A'. Any index outside the current node's outgoing list,
    /// including negative offsets from characters below 'A', is an
    /// invalid choice. Failures leave location and distance unchanged.
    pub fn attempt_move(&mut self, raw: &str) -> Result<MoveOutcome<'w>, MoveError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(MoveError::MalformedInput),
        };

        let index = (letter as i64) - ('A' as i64);
        let edge = usize::try_from(index)
            .ok()
            .and_then(|i| self.location().resolve_choice(i))
            .ok_or_else(|| MoveError::InvalidChoice {
                input: trimmed.to_string(),
            })?;

        self.location = edge.target;
        self.distance += edge.weight;
        tracing::debug!(
            player = %self.player,
            to = self.location().name(),
            weight = edge.weight.value(),
            total = self.distance.value(),
            "move"
        );
        Ok(MoveOutcome {
            node: self.location(),
            weight: edge.weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{island, Distance, WorldBuilder};

    fn session(world: &World) -> Session<'_> {
        Session::new(world, Player::new("Robinson", "Crusoe"))
    }

    #[test]
    fn test_player_display() {
        let player = Player::new("Robinson", "Crusoe");
        assert_eq!(player.to_string(), "Robinson alias Crusoe");
    }

    #[test]
    fn test_move_to_second_choice() {
        // Beach choice "B" (index 1) is the Cave Entrance, one unit away
        let world = island::world().unwrap();
        let mut session = session(&world);

        let outcome = session.attempt_move("B").unwrap();
        assert_eq!(outcome.node.name(), "Cave Entrance");
        assert_eq!(session.location().name(), "Cave Entrance");
        assert_eq!(session.distance_traveled(), Distance::new(1));
    }

    #[test]
    fn test_lowercase_input_accepted() {
        let world = island::world().unwrap();
        let mut session = session(&world);
        assert_eq!(session.attempt_move("a").unwrap().node.name(), "Jungle");
    }

    #[test]
    fn test_invalid_choice_leaves_state_unchanged() {
        // Beach has two choices; "C" is one past the end
        let world = island::world().unwrap();
        let mut session = session(&world);

        let err = session.attempt_move("C").unwrap_err();
        assert_eq!(err, MoveError::InvalidChoice { input: "C".to_string() });
        assert_eq!(session.location().name(), "Beach");
        assert_eq!(session.distance_traveled(), Distance::ZERO);
        assert_eq!(session.state(), SessionState::Exploring);
    }

    #[test]
    fn test_characters_below_a_are_invalid() {
        let world = island::world().unwrap();
        let mut session = session(&world);
        for input in ["1", "?", "@"] {
            assert!(matches!(
                session.attempt_move(input),
                Err(MoveError::InvalidChoice { .. })
            ));
        }
    }

    #[test]
    fn test_malformed_input() {
        let world = island::world().unwrap();
        let mut session = session(&world);
        for input in ["", "   ", "AB", "north"] {
            assert_eq!(session.attempt_move(input), Err(MoveError::MalformedInput));
        }
        assert_eq!(session.distance_traveled(), Distance::ZERO);
    }

    #[test]
    fn test_distance_accumulates_along_walked_path() {
        let world = island::world().unwrap();
        let mut session = session(&world);

        // Beach -> Cave Entrance -> Tunnel -> Cavern -> Riverside -> Ruins -> Treasure
        for (letter, expected) in [
            ("B", "Cave Entrance"),
            ("B", "Tunnel"),
            ("B", "Cavern"),
            ("D", "Riverside"),
            ("A", "Ruins"),
            ("A", "Treasure"),
        ] {
            let outcome = session.attempt_move(letter).unwrap();
            assert_eq!(outcome.node.name(), expected);
        }

        assert_eq!(session.distance_traveled(), Distance::new(16));
        assert!(session.is_at_goal());
        assert_eq!(session.state(), SessionState::ReachedGoal);
    }

    #[test]
    fn test_stuck_at_non_goal_dead_end() {
        let world = island::world().unwrap();
        let mut session = session(&world);

        // Beach -> Cave Entrance -> Underground lake -> Spider lair
        for letter in ["B", "A", "A"] {
            session.attempt_move(letter).unwrap();
        }

        assert_eq!(session.location().name(), "Spider lair");
        assert!(session.is_stuck());
        assert!(!session.is_at_goal());
        assert_eq!(session.state(), SessionState::Stuck);
    }

    #[test]
    fn test_goal_check_precedes_stuck_check() {
        // A goal with no outgoing edges must report victory, not stuck
        let mut builder = WorldBuilder::new();
        let a = builder.add_node("A", "start").unwrap();
        let b = builder.add_node("B", "end of the line").unwrap();
        builder.connect(a, b, Distance::new(3)).unwrap();
        let world = builder.build(a, b).unwrap();

        let mut session = session(&world);
        session.attempt_move("A").unwrap();
        assert!(session.location().is_dead_end());
        assert_eq!(session.state(), SessionState::ReachedGoal);
    }

    #[test]
    fn test_stuck_possible_at_start() {
        let mut builder = WorldBuilder::new();
        let a = builder.add_node("A", "nowhere to go").unwrap();
        let b = builder.add_node("B", "unreachable").unwrap();
        builder.connect(b, a, Distance::new(1)).unwrap();
        let world = builder.build(a, b).unwrap();

        let session = session(&world);
        assert_eq!(session.state(), SessionState::Stuck);
    }
}
