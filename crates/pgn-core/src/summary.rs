//! Game list summaries built from header tags.

use crate::locale::Locale;
use crate::tags::HeaderRecord;
use serde::Serialize;

/// Outcome encoded in the `Result` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
    Unfinished,
}

impl GameOutcome {
    /// Reads a PGN result marker (`1-0`, `0-1`, `1/2-1/2`, `*`).
    pub fn from_result(result: &str) -> Option<Self> {
        match result.trim() {
            "1-0" => Some(GameOutcome::WhiteWins),
            "0-1" => Some(GameOutcome::BlackWins),
            "1/2-1/2" => Some(GameOutcome::Draw),
            "*" => Some(GameOutcome::Unfinished),
            _ => None,
        }
    }

    /// Localized phrase for result badges and the detailed header.
    pub fn phrase(self, locale: Locale) -> &'static str {
        let labels = locale.labels();
        match self {
            GameOutcome::WhiteWins => labels.white_wins,
            GameOutcome::BlackWins => labels.black_wins,
            GameOutcome::Draw => labels.draw,
            GameOutcome::Unfinished => labels.unfinished,
        }
    }
}

/// Fields a game list row needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub white: Option<String>,
    pub black: Option<String>,
    pub white_elo: Option<u32>,
    pub black_elo: Option<u32>,
    pub outcome: Option<GameOutcome>,
    pub date: Option<String>,
    pub time_control: Option<String>,
    pub opening: Option<String>,
    pub termination: Option<String>,
}

impl GameSummary {
    /// Collects the summary fields. Ratings that are not plain numbers
    /// (`?`, `-`) are left out.
    pub fn from_header(header: &HeaderRecord) -> Self {
        let owned = |value: Option<&str>| value.map(str::to_string);
        GameSummary {
            white: owned(header.white()),
            black: owned(header.black()),
            white_elo: header.white_elo().and_then(|v| v.trim().parse().ok()),
            black_elo: header.black_elo().and_then(|v| v.trim().parse().ok()),
            outcome: header.result().and_then(GameOutcome::from_result),
            date: owned(header.date()),
            time_control: owned(header.time_control()),
            opening: owned(header.opening()),
            termination: owned(header.termination()),
        }
    }

    pub fn from_pgn(pgn: &str) -> Self {
        Self::from_header(&HeaderRecord::parse(pgn))
    }
}

/// Formats a rating change with an explicit `+` for gains.
pub fn format_rating_diff(diff: Option<i32>) -> String {
    match diff {
        None => String::new(),
        Some(d) if d > 0 => format!("+{}", d),
        Some(d) => d.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_result_markers() {
        assert_eq!(GameOutcome::from_result("1-0"), Some(GameOutcome::WhiteWins));
        assert_eq!(GameOutcome::from_result("0-1"), Some(GameOutcome::BlackWins));
        assert_eq!(GameOutcome::from_result("1/2-1/2"), Some(GameOutcome::Draw));
        assert_eq!(GameOutcome::from_result("*"), Some(GameOutcome::Unfinished));
        assert_eq!(GameOutcome::from_result("win"), None);
    }

    #[test]
    fn outcome_marker_is_trimmed() {
        assert_eq!(GameOutcome::from_result(" 1-0 "), Some(GameOutcome::WhiteWins));
    }

    #[test]
    fn outcome_phrases() {
        assert_eq!(GameOutcome::Draw.phrase(Locale::En), "Draw");
        assert_eq!(GameOutcome::Unfinished.phrase(Locale::Ru), "Не завершена");
    }

    #[test]
    fn summary_from_pgn() {
        let summary = GameSummary::from_pgn(
            "[White \"alice\"]\n[Black \"bob\"]\n[WhiteElo \"1500\"]\n[BlackElo \"?\"]\n\
             [Result \"0-1\"]\n[Termination \"Time forfeit\"]\n",
        );
        assert_eq!(summary.white.as_deref(), Some("alice"));
        assert_eq!(summary.white_elo, Some(1500));
        assert_eq!(summary.black_elo, None);
        assert_eq!(summary.outcome, Some(GameOutcome::BlackWins));
        assert_eq!(summary.termination.as_deref(), Some("Time forfeit"));
        assert_eq!(summary.opening, None);
    }

    #[test]
    fn rating_diff() {
        assert_eq!(format_rating_diff(Some(12)), "+12");
        assert_eq!(format_rating_diff(Some(-5)), "-5");
        assert_eq!(format_rating_diff(Some(0)), "0");
        assert_eq!(format_rating_diff(None), "");
    }
}
