//! Display labels for rendered headers and notices.

use crate::error::UnknownOption;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language used for labels and result phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Header and notice labels for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub event: &'static str,
    pub date: &'static str,
    pub white: &'static str,
    pub black: &'static str,
    pub result: &'static str,
    pub opening: &'static str,
    pub time_control: &'static str,
    pub moves: &'static str,
    pub white_wins: &'static str,
    pub black_wins: &'static str,
    pub draw: &'static str,
    pub unfinished: &'static str,
}

const EN: Labels = Labels {
    event: "Event",
    date: "Date",
    white: "White",
    black: "Black",
    result: "Result",
    opening: "Opening",
    time_control: "Time control",
    moves: "Moves",
    white_wins: "White wins",
    black_wins: "Black wins",
    draw: "Draw",
    unfinished: "Unfinished",
};

const RU: Labels = Labels {
    event: "Событие",
    date: "Дата",
    white: "Белые",
    black: "Черные",
    result: "Результат",
    opening: "Дебют",
    time_control: "Контроль времени",
    moves: "Ходы",
    white_wins: "Победа белых",
    black_wins: "Победа черных",
    draw: "Ничья",
    unfinished: "Не завершена",
};

impl Locale {
    pub const fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    /// Notice appended when plies were cut from the detailed view.
    pub fn more_moves(self, omitted: usize) -> String {
        match self {
            Locale::En if omitted == 1 => "... and 1 more move".to_string(),
            Locale::En => format!("... and {} more moves", omitted),
            Locale::Ru => format!("... и еще {} {}", omitted, russian_moves(omitted)),
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

/// Russian plural of "ход" agreeing with `count`.
fn russian_moves(count: usize) -> &'static str {
    match (count % 10, count % 100) {
        (1, n) if n != 11 => "ход",
        (2..=4, n) if !(12..=14).contains(&n) => "хода",
        _ => "ходов",
    }
}

impl FromStr for Locale {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            _ => Err(UnknownOption::new("locale", s)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().labels().event, "Event");
    }

    #[test]
    fn russian_labels() {
        let labels = Locale::Ru.labels();
        assert_eq!(labels.white_wins, "Победа белых");
        assert_eq!(labels.time_control, "Контроль времени");
    }

    #[test]
    fn more_moves_notice() {
        assert_eq!(Locale::En.more_moves(100), "... and 100 more moves");
        assert_eq!(Locale::Ru.more_moves(5), "... и еще 5 ходов");
    }

    #[test]
    fn more_moves_notice_agrees_with_count() {
        assert_eq!(Locale::En.more_moves(1), "... and 1 more move");
        assert_eq!(Locale::En.more_moves(2), "... and 2 more moves");
        assert_eq!(Locale::Ru.more_moves(1), "... и еще 1 ход");
        assert_eq!(Locale::Ru.more_moves(3), "... и еще 3 хода");
        assert_eq!(Locale::Ru.more_moves(11), "... и еще 11 ходов");
        assert_eq!(Locale::Ru.more_moves(21), "... и еще 21 ход");
        assert_eq!(Locale::Ru.more_moves(112), "... и еще 112 ходов");
    }

    #[test]
    fn parse_locale() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" RU ".parse::<Locale>(), Ok(Locale::Ru));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn deserialize_from_toml_style_name() {
        let locale: Locale = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(locale, Locale::Ru);
    }
}
