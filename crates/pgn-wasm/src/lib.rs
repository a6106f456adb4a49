//! WebAssembly bindings for the PGN viewer core.
//!
//! This crate exposes PGN parsing and rendering to the browser viewer, which
//! fetches games from Lichess or Chess.com and displays the rendered markup.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Viewer, formatPgnForDisplay } from 'pgn-wasm';
//!
//! await init();
//!
//! element.innerHTML = formatPgnForDisplay(pgn, 300);
//!
//! const viewer = new Viewer(100, "ru");
//! element.innerHTML = viewer.render(pgn, "compact", "html");
//! ```

use pgn_core::render::DEFAULT_MAX_MOVES;
use pgn_core::{ExportPreset, GameSummary, HeaderRecord, Locale, RenderOptions, Surface, View};
use wasm_bindgen::prelude::*;

/// Renderer with fixed cap and locale, reusable across games.
#[wasm_bindgen]
pub struct Viewer {
    options: RenderOptions,
}

#[wasm_bindgen]
impl Viewer {
    /// Creates a viewer. `maxMoves` defaults to 300 and `locale` to "en".
    ///
    /// Returns an error if the locale is unknown.
    #[wasm_bindgen(constructor)]
    pub fn new(max_moves: Option<u32>, locale: Option<String>) -> Result<Viewer, JsError> {
        let locale = match locale {
            Some(code) => code.parse::<Locale>().map_err(|e| JsError::new(&e.to_string()))?,
            None => Locale::default(),
        };
        Ok(Viewer {
            options: RenderOptions {
                max_moves: cap(max_moves),
                locale,
            },
        })
    }

    /// Renders a game. `view` is "detailed" or "compact"; `surface` is
    /// "html" or "text".
    ///
    /// Returns an error only for unknown view or surface names; the PGN
    /// itself never causes one.
    pub fn render(&self, pgn: &str, view: &str, surface: &str) -> Result<String, JsError> {
        let view = view
            .parse::<View>()
            .map_err(|e| JsError::new(&e.to_string()))?;
        let surface = surface
            .parse::<Surface>()
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(pgn_core::render(pgn, view, surface, &self.options))
    }

    #[wasm_bindgen(js_name = maxMoves)]
    pub fn max_moves(&self) -> u32 {
        u32::try_from(self.options.max_moves).unwrap_or(u32::MAX)
    }

    pub fn locale(&self) -> String {
        self.options.locale.to_string()
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Viewer {
            options: RenderOptions::default(),
        }
    }
}

/// Detailed HTML view with English labels.
#[wasm_bindgen(js_name = formatPgnForDisplay)]
pub fn format_pgn_for_display(pgn: &str, max_moves: Option<u32>) -> String {
    pgn_core::format_pgn_for_display(pgn, cap(max_moves))
}

/// Compact HTML view.
#[wasm_bindgen(js_name = formatPgnCompact)]
pub fn format_pgn_compact(pgn: &str, max_moves: Option<u32>) -> String {
    pgn_core::format_pgn_compact(pgn, cap(max_moves))
}

/// Returns `{ tags: {...}, moves?: string }` for the given PGN.
#[wasm_bindgen(js_name = parsePgn)]
pub fn parse_pgn(pgn: &str) -> Result<JsValue, JsError> {
    to_js(&HeaderRecord::parse(pgn))
}

/// Returns the annotated move tokens of a movetext line.
///
/// Returns an error when variations are unbalanced.
#[wasm_bindgen(js_name = parseMovesWithAnalysis)]
pub fn parse_moves_with_analysis(movetext: &str) -> Result<JsValue, JsError> {
    let moves = pgn_core::parse_movetext(movetext).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&moves)
}

/// Returns the list-row summary (players, ratings, outcome, ...) of a PGN.
#[wasm_bindgen(js_name = gameSummary)]
pub fn game_summary(pgn: &str) -> Result<JsValue, JsError> {
    to_js(&GameSummary::from_pgn(pgn))
}

/// Returns the Lichess export query string for a preset name.
#[wasm_bindgen(js_name = exportQuery)]
pub fn export_query(preset: &str) -> Result<String, JsError> {
    let preset = preset
        .parse::<ExportPreset>()
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(preset.options().query_string())
}

#[wasm_bindgen(js_name = formatEval)]
pub fn format_eval(evaluation: Option<f64>) -> String {
    pgn_core::format_eval(evaluation)
}

#[wasm_bindgen(js_name = formatRatingDiff)]
pub fn format_rating_diff(diff: Option<i32>) -> String {
    pgn_core::format_rating_diff(diff)
}

fn cap(max_moves: Option<u32>) -> usize {
    max_moves.map_or(DEFAULT_MAX_MOVES, |m| m as usize)
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}
