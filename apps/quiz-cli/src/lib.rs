//! Terminal front end for Aventura Matemática.
//!
//! Drives a [`quiz_core::GameSession`] from line-based input and talks to the
//! ranking backend over HTTP. Network trouble never stops a game: the
//! leaderboard degrades to empty and failed submissions are only logged.

pub mod client;
pub mod game;
pub mod render;

pub use client::{RankingClient, SubmitReply};
pub use game::{play, GameError, Pacing};
