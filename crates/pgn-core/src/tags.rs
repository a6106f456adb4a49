//! Header tag extraction.
//!
//! A PGN blob is split into lines. Every line that is exactly one
//! `[Name "value"]` pair is recorded under the lower-cased tag name, and the
//! first line that is neither a tag nor a `%` escape becomes the movetext.
//! Lines that look like neither are skipped without complaint.

use nom::{
    bytes::complete::{is_not, take_while1},
    character::complete::{char, multispace1},
    combinator::all_consuming,
    sequence::{delimited, separated_pair},
    IResult, Parser,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Tag values and the movetext line of one PGN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderRecord {
    tags: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<String>,
}

impl HeaderRecord {
    /// Extracts tags and the movetext line from raw PGN text.
    ///
    /// When a tag appears twice the later value wins.
    pub fn parse(pgn: &str) -> Self {
        let mut record = HeaderRecord::default();

        for line in pgn.split('\n') {
            let line = line.trim_end_matches('\r');
            if let Ok((_, (name, value))) = tag_pair(line) {
                record
                    .tags
                    .insert(name.to_ascii_lowercase(), value.to_string());
            }
        }

        record.moves = pgn
            .split('\n')
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('[') && !line.starts_with('%'))
            .map(str::to_string);

        record
    }

    /// Looks up a tag by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tags
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn event(&self) -> Option<&str> {
        self.get("event")
    }

    pub fn site(&self) -> Option<&str> {
        self.get("site")
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn round(&self) -> Option<&str> {
        self.get("round")
    }

    pub fn white(&self) -> Option<&str> {
        self.get("white")
    }

    pub fn black(&self) -> Option<&str> {
        self.get("black")
    }

    pub fn result(&self) -> Option<&str> {
        self.get("result")
    }

    pub fn white_elo(&self) -> Option<&str> {
        self.get("whiteelo")
    }

    pub fn black_elo(&self) -> Option<&str> {
        self.get("blackelo")
    }

    pub fn time_control(&self) -> Option<&str> {
        self.get("timecontrol")
    }

    pub fn termination(&self) -> Option<&str> {
        self.get("termination")
    }

    pub fn eco(&self) -> Option<&str> {
        self.get("eco")
    }

    pub fn opening(&self) -> Option<&str> {
        self.get("opening")
    }

    /// The movetext line, trimmed. `None` when the PGN has no movetext.
    pub fn moves(&self) -> Option<&str> {
        self.moves.as_deref()
    }

    /// Number of distinct tags recorded.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over `(lower-cased name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A whole line holding a single `[Name "value"]` pair.
fn tag_pair(line: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(delimited(
        char('['),
        separated_pair(tag_name, multispace1, quoted_value),
        char(']'),
    ))
    .parse(line)
}

fn tag_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_').parse(input)
}

fn quoted_value(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), is_not("\""), char('"')).parse(input)
}
