//! PGN parsing and annotation rendering for the game viewer.
//!
//! This crate turns raw PGN text, as fetched from Lichess or Chess.com, into:
//! - a [`HeaderRecord`] of lower-cased tag names and the movetext line
//! - a sequence of [`MoveToken`]s carrying `%eval` / `%clk` annotations and
//!   the time spent per move
//! - detailed and compact renderings, as HTML or plain text
//!
//! Every function is a pure computation over its input. Rendering never
//! fails; broken movetext degrades to the raw text.
//!
//! # Example
//!
//! ```
//! use pgn_core::{parse_game, Side};
//!
//! let game = parse_game("[White \"alice\"]\n\n1. e4 { [%eval 0.3] [%clk 0:05:00] }").unwrap();
//! assert_eq!(game.header.white(), Some("alice"));
//! assert_eq!(game.moves[0].side, Side::White);
//! assert_eq!(game.moves[0].clock.as_deref(), Some("0:05:00"));
//! ```

pub mod annotation;
mod error;
pub mod export;
pub mod format;
mod locale;
pub mod movetext;
pub mod render;
mod side;
pub mod summary;
mod tags;

pub use error::{MovetextError, UnknownOption};
pub use export::{ExportOptions, ExportPreset};
pub use format::{format_elapsed, format_eval, EvalBucket};
pub use locale::{Labels, Locale};
pub use movetext::{parse_movetext, MoveToken};
pub use render::{format_pgn_compact, format_pgn_for_display, render, RenderOptions, Surface, View};
pub use side::Side;
pub use summary::{format_rating_diff, GameOutcome, GameSummary};
pub use tags::HeaderRecord;

use serde::Serialize;

/// Header and annotated moves of one PGN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedGame {
    pub header: HeaderRecord,
    pub moves: Vec<MoveToken>,
}

/// Parses tags and annotated moves from raw PGN text.
///
/// A PGN without movetext yields an empty move list.
///
/// # Errors
///
/// Returns a [`MovetextError`] when the movetext has unbalanced variations.
pub fn parse_game(pgn: &str) -> Result<ParsedGame, MovetextError> {
    let header = HeaderRecord::parse(pgn);
    let moves = match header.moves() {
        Some(movetext) => parse_movetext(movetext)?,
        None => Vec::new(),
    };
    Ok(ParsedGame { header, moves })
}
