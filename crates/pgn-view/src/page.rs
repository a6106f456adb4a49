//! Standalone HTML page around a rendered game.
//!
//! The page carries the stylesheet for the viewer's class names so an
//! exported file looks the same as the game panel in the browser.

use askama::Template;
use pgn_core::HeaderRecord;

/// Standalone HTML page template.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    /// Page title, escaped on render.
    pub title: String,
    /// Language code for the `lang` attribute.
    pub lang: String,
    /// Markup produced by the HTML surface, inserted unescaped.
    pub body: String,
}

impl PageTemplate {
    /// Title after the players, falling back to the event name.
    #[must_use]
    pub fn title_for(header: &HeaderRecord) -> String {
        match (header.white(), header.black(), header.event()) {
            (Some(white), Some(black), _) => format!("{} - {}", white, black),
            (_, _, Some(event)) => event.to_string(),
            _ => "PGN game".to_string(),
        }
    }
}
