//! Hilo - Terminal Guess-the-Number Game
//!
//! This module exposes the game logic for testing and external use. The
//! binaries (`hilo` and `classic`) are thin wrappers that wire stdin,
//! stdout, and a thread-local RNG into the session loops.

pub mod build_info;
pub mod constants;
pub mod difficulty;
pub mod input;
pub mod round;
pub mod session;

pub use difficulty::Difficulty;
pub use input::GuessPolicy;
pub use round::{GuessRange, PromptStyle, RoundConfig, RoundOutcome};
pub use session::SessionStats;
