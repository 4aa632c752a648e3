//! Command implementations for traipse

pub mod check;
pub mod dispatch;
pub mod map;
pub mod play;
