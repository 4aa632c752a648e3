//! `traipse play` - the interactive turn loop
//!
//! The engine stays free of I/O; this module owns the blocking reads and
//! all player-facing text. The loop prints the current location, lists the
//! lettered choices, applies one move per line of input, and stops when
//! the session reaches a terminal state.

use std::io::{self, BufRead, Write};

use crate::cli::{Cli, OutputFormat};
use traipse_core::engine::{MoveError, Player, Session, SessionState};
use traipse_core::error::{Result, TraipseError};
use traipse_core::world::World;

/// What a finished session looked like, for the JSON summary line
struct Summary {
    outcome: SessionState,
    moves: usize,
    distance: u64,
    location: String,
}

/// Execute the play command
pub fn execute(cli: &Cli, world: &World, player: Option<&str>, alias: Option<&str>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let player = resolve_player(player, alias, &mut input, &mut out)?;
    tracing::debug!(player = %player, "session_start");
    let summary = run_session(world, player, &mut input, &mut out)?;

    if cli.format == OutputFormat::Json {
        let json = serde_json::json!({
            "outcome": outcome_name(summary.outcome),
            "moves": summary.moves,
            "distance": summary.distance,
            "location": summary.location,
        });
        writeln!(out, "{}", json)?;
    }
    Ok(())
}

/// Take the player identity from flags, prompting for whatever is missing
fn resolve_player<R: BufRead, W: Write>(
    name: Option<&str>,
    alias: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<Player> {
    let name = match name {
        Some(n) => n.to_string(),
        None => prompt(input, out, "Enter your name: ")?,
    };
    let nickname = match alias {
        Some(a) => a.to_string(),
        None => prompt(input, out, "Enter your nickname: ")?,
    };
    Ok(Player::new(name, nickname))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;
    read_line(input)
}

/// One blocking line read; a closed input stream is unrecoverable
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TraipseError::Other(
            "input closed before the session finished".to_string(),
        ));
    }
    Ok(line.trim().to_string())
}

/// Drive one session to a terminal state
fn run_session<R: BufRead, W: Write>(
    world: &World,
    player: Player,
    input: &mut R,
    out: &mut W,
) -> Result<Summary> {
    let mut session = Session::new(world, player);
    let mut moves = 0;

    writeln!(out, "\nWelcome, {}!", session.player().nickname)?;

    loop {
        let here = session.location();
        writeln!(out, "\nYou are currently at {}.", here.name())?;
        writeln!(out, "{}", here.description())?;

        match session.state() {
            SessionState::ReachedGoal => {
                writeln!(
                    out,
                    "\nYou made it! Total distance traveled: {}.",
                    session.distance_traveled()
                )?;
                break;
            }
            SessionState::Stuck => {
                writeln!(out, "\nYou are forgotten and lost forever.")?;
                break;
            }
            SessionState::Exploring => {}
        }

        writeln!(out, "\nWhere do you want to go?")?;
        for choice in world.choices(session.location_id()) {
            writeln!(
                out,
                "  {} - {} (distance {})",
                choice.label, choice.name, choice.weight
            )?;
        }
        write!(out, "Enter your choice: ")?;
        out.flush()?;

        let line = read_line(input)?;
        match session.attempt_move(&line) {
            Ok(_) => moves += 1,
            Err(MoveError::InvalidChoice { .. }) => {
                writeln!(out, "\nYou can't go there. Choose another way.")?;
            }
            Err(MoveError::MalformedInput) => {
                writeln!(out, "\nEnter a single letter, like A.")?;
            }
        }
    }

    tracing::debug!(
        outcome = outcome_name(session.state()),
        moves,
        distance = session.distance_traveled().value(),
        "session_end"
    );
    Ok(Summary {
        outcome: session.state(),
        moves,
        distance: session.distance_traveled().value(),
        location: session.location().name().to_string(),
    })
}

fn outcome_name(state: SessionState) -> &'static str {
    match state {
        SessionState::Exploring => "exploring",
        SessionState::ReachedGoal => "reached-goal",
        SessionState::Stuck => "stuck",
    }
}
