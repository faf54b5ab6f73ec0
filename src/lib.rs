//! Rules engine for a Sokoban-style puzzle game.
//!
//! The `board` module owns the whole game state machine: grid construction
//! from level text, movement and push resolution, win detection, and an
//! undo history. The `levels` module loads XSB-format levelsets and hands
//! out raw level text, one level at a time.
//!
//! Rendering and input handling live in the `sokoban` binary, which drives
//! the library through the same interface any other front end would use:
//! feed level text to `board::Board::from_text`, call `move_player`,
//! `undo_move` and `has_won`, and read cells back out for display.

pub mod board;
pub mod levels;
