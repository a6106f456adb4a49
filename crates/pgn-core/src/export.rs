//! Lichess PGN export presets.
//!
//! The viewer asks Lichess for games with one of a few named option sets.
//! This module maps a preset name to the export flags and to the query pairs
//! the request is built from. It does no I/O.

use crate::error::UnknownOption;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named combinations of export flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportPreset {
    #[default]
    Basic,
    WithEvals,
    WithAnalysis,
    MovesOnly,
    Literate,
    Tournament,
    Minimal,
}

/// Flags accepted by the Lichess game export endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    pub moves: bool,
    pub tags: bool,
    pub clocks: bool,
    pub evals: bool,
    pub accuracy: bool,
    pub opening: bool,
    pub literate: bool,
}

impl ExportOptions {
    /// `(name, "true"|"false")` pairs in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let flag = |b: bool| if b { "true" } else { "false" };
        vec![
            ("moves", flag(self.moves)),
            ("tags", flag(self.tags)),
            ("clocks", flag(self.clocks)),
            ("evals", flag(self.evals)),
            ("accuracy", flag(self.accuracy)),
            ("opening", flag(self.opening)),
            ("literate", flag(self.literate)),
        ]
    }

    /// Query string without the leading `?`.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl ExportPreset {
    pub const ALL: [ExportPreset; 7] = [
        ExportPreset::Basic,
        ExportPreset::WithEvals,
        ExportPreset::WithAnalysis,
        ExportPreset::MovesOnly,
        ExportPreset::Literate,
        ExportPreset::Tournament,
        ExportPreset::Minimal,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ExportPreset::Basic => "basic",
            ExportPreset::WithEvals => "with-evals",
            ExportPreset::WithAnalysis => "with-analysis",
            ExportPreset::MovesOnly => "moves-only",
            ExportPreset::Literate => "literate",
            ExportPreset::Tournament => "tournament",
            ExportPreset::Minimal => "minimal",
        }
    }

    pub const fn options(self) -> ExportOptions {
        let base = ExportOptions {
            moves: true,
            tags: false,
            clocks: false,
            evals: false,
            accuracy: false,
            opening: false,
            literate: false,
        };
        match self {
            ExportPreset::Basic => ExportOptions {
                tags: true,
                clocks: true,
                ..base
            },
            ExportPreset::WithEvals => ExportOptions {
                tags: true,
                clocks: true,
                evals: true,
                ..base
            },
            ExportPreset::WithAnalysis => ExportOptions {
                tags: true,
                clocks: true,
                evals: true,
                accuracy: true,
                opening: true,
                ..base
            },
            ExportPreset::Literate => ExportOptions {
                tags: true,
                clocks: true,
                evals: true,
                accuracy: true,
                opening: true,
                literate: true,
                ..base
            },
            ExportPreset::Tournament => ExportOptions {
                tags: true,
                clocks: true,
                opening: true,
                ..base
            },
            ExportPreset::MovesOnly | ExportPreset::Minimal => base,
        }
    }

    pub const fn description(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, ExportPreset::Basic) => "Standard PGN with tags and moves",
            (Locale::En, ExportPreset::WithEvals) => "PGN with computer evaluations",
            (Locale::En, ExportPreset::WithAnalysis) => "Full analysis with accuracy and opening",
            (Locale::En, ExportPreset::MovesOnly) => "Moves only, no game information",
            (Locale::En, ExportPreset::Literate) => "With literate comments",
            (Locale::En, ExportPreset::Tournament) => "For tournaments, with opening information",
            (Locale::En, ExportPreset::Minimal) => "Minimal (moves only)",
            (Locale::Ru, ExportPreset::Basic) => "Стандартный PGN с тегами и ходами",
            (Locale::Ru, ExportPreset::WithEvals) => "PGN с компьютерными оценками позиций",
            (Locale::Ru, ExportPreset::WithAnalysis) => "Полный анализ с точностью и дебютом",
            (Locale::Ru, ExportPreset::MovesOnly) => "Только ходы без мета-информации",
            (Locale::Ru, ExportPreset::Literate) => "С литературными комментариями",
            (Locale::Ru, ExportPreset::Tournament) => "Для турниров с информацией о дебюте",
            (Locale::Ru, ExportPreset::Minimal) => "Минимальный вариант (только ходы)",
        }
    }
}

impl FromStr for ExportPreset {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ExportPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| UnknownOption::new("export preset", s))
    }
}

impl std::fmt::Display for ExportPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
