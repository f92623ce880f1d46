//! Terminal Pong: a fixed-tick ball-and-paddle simulation with a predictive
//! computer opponent, drawn in Braille on the terminal.

pub mod ai;
pub mod config;
pub mod debug;
pub mod error;
pub mod game;
pub mod game_modes;
pub mod ui;

pub use error::{Result, SimError};
