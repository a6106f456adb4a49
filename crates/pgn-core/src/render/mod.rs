//! Detailed and compact renderings of an annotated game.
//!
//! Rendering runs in two steps. A view builder ([`detailed_segments`] or
//! [`compact_segments`]) turns PGN text into a list of [`Segment`]s, and a
//! surface serializer ([`to_html`] or [`to_text`]) turns the segments into the
//! final string. Neither step can fail: if the movetext is structurally broken
//! the builders fall back to the raw movetext, cut to the same ply cap.
//!
//! # Example
//!
//! ```
//! use pgn_core::render::{render, RenderOptions, Surface, View};
//!
//! let pgn = "[White \"alice\"]\n[Black \"bob\"]\n\n1. e4 { [%eval 0.3] } 1... e5 { [%eval 0.25] }";
//! let text = render(pgn, View::Compact, Surface::Text, &RenderOptions::default());
//! assert_eq!(text, "alice - bob\n\n1. e4(+0.30) e5(+0.25)");
//! ```

mod compact;
mod detailed;
mod html;
mod segment;
mod text;

pub use compact::compact_segments;
pub use detailed::detailed_segments;
pub use html::to_html;
pub use segment::{truncate_raw, Block, EvalMark, Segment, TimeMark};
pub use text::to_text;

use crate::error::UnknownOption;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Full moves shown before the move list is cut.
pub const DEFAULT_MAX_MOVES: usize = 300;

/// Settings shared by both views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Full moves to show; the ply cap is twice this.
    pub max_moves: usize,
    pub locale: Locale,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            max_moves: DEFAULT_MAX_MOVES,
            locale: Locale::default(),
        }
    }
}

impl RenderOptions {
    pub fn with_max_moves(max_moves: usize) -> Self {
        RenderOptions {
            max_moves,
            ..Self::default()
        }
    }

    /// Maximum number of plies rendered.
    pub fn ply_cap(&self) -> usize {
        self.max_moves.saturating_mul(2)
    }
}

/// Which rendering to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Detailed,
    Compact,
}

impl FromStr for View {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(View::Detailed),
            "compact" => Ok(View::Compact),
            _ => Err(UnknownOption::new("view", s)),
        }
    }
}

/// Output format of the rendered segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    #[default]
    Html,
    Text,
}

impl FromStr for Surface {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Surface::Html),
            "text" | "plain" => Ok(Surface::Text),
            _ => Err(UnknownOption::new("surface", s)),
        }
    }
}

/// Renders PGN text in the given view and surface.
pub fn render(pgn: &str, view: View, surface: Surface, options: &RenderOptions) -> String {
    let segments = match view {
        View::Detailed => detailed_segments(pgn, options),
        View::Compact => compact_segments(pgn, options),
    };
    match surface {
        Surface::Html => to_html(&segments),
        Surface::Text => to_text(&segments),
    }
}

/// Detailed HTML view with English labels.
pub fn format_pgn_for_display(pgn: &str, max_moves: usize) -> String {
    render(
        pgn,
        View::Detailed,
        Surface::Html,
        &RenderOptions::with_max_moves(max_moves),
    )
}

/// Compact HTML view.
pub fn format_pgn_compact(pgn: &str, max_moves: usize) -> String {
    render(
        pgn,
        View::Compact,
        Surface::Html,
        &RenderOptions::with_max_moves(max_moves),
    )
}
