//! Traipse Core Library
//!
//! World graph and traversal engine for the traipse exploration game.

pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod world;
