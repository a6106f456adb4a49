//! Structured output shared by both views and both surfaces.

use crate::format::{format_eval, EvalBucket};
use crate::movetext::MoveToken;

/// Container a run of segments belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Detailed header fields.
    Header,
    /// Detailed move list.
    Moves,
    /// Compact inline move stream.
    CompactMoves,
}

/// Formatted evaluation plus its advantage bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalMark {
    pub text: String,
    pub bucket: EvalBucket,
}

impl EvalMark {
    pub fn from_token(token: &MoveToken) -> Option<Self> {
        let text = format_eval(token.evaluation);
        (!text.is_empty()).then(|| EvalMark {
            text,
            bucket: EvalBucket::classify(token.evaluation),
        })
    }
}

/// Time shown next to a move: time spent when known, otherwise the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeMark {
    Spent(String),
    Clock(String),
}

impl TimeMark {
    pub fn from_token(token: &MoveToken) -> Option<Self> {
        token
            .time_spent
            .clone()
            .map(TimeMark::Spent)
            .or_else(|| token.clock.clone().map(TimeMark::Clock))
    }

    pub fn text(&self) -> &str {
        match self {
            TimeMark::Spent(s) | TimeMark::Clock(s) => s,
        }
    }

    /// Class name used as a styling hook in HTML output.
    pub const fn css_class(&self) -> &'static str {
        match self {
            TimeMark::Spent(_) => "time-spent",
            TimeMark::Clock(_) => "clock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Open(Block),
    Close(Block),
    /// `Label: value` line in the detailed header.
    Field { label: String, value: String },
    /// `white - black` title of the compact view.
    Players { white: String, black: String },
    /// Short `Label: value` line of the compact view.
    Info { label: String, value: String },
    LineBreak,
    MoveNumber(u32),
    Move(String),
    /// Parenthesized eval and time after a move in the detailed view.
    Analysis {
        eval: Option<EvalMark>,
        time: Option<TimeMark>,
    },
    /// `(eval)` after a move in the compact view.
    InlineEval(EvalMark),
    /// `[time]` after a move in the compact view.
    InlineTime(TimeMark),
    Gap,
    /// Notice reporting plies cut from the detailed view.
    MoreMoves(String),
    /// Truncation marker of the compact view.
    Ellipsis,
    /// Unparsed movetext emitted when move parsing failed.
    RawMoves { label: Option<String>, text: String },
}

/// Cuts raw movetext to `cap` whitespace-separated tokens, appending `...`
/// when anything was dropped.
pub fn truncate_raw(movetext: &str, cap: usize) -> String {
    let words: Vec<&str> = movetext.split_whitespace().collect();
    if words.len() > cap {
        let mut out = words[..cap].join(" ");
        out.push_str("...");
        out
    } else {
        movetext.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side::Side;

    fn token(evaluation: Option<f64>, clock: Option<&str>, spent: Option<&str>) -> MoveToken {
        MoveToken {
            text: "e4".into(),
            side: Side::White,
            move_number: 1,
            evaluation,
            clock: clock.map(Into::into),
            time_spent: spent.map(Into::into),
        }
    }

    #[test]
    fn time_mark_prefers_time_spent() {
        let t = token(None, Some("0:04:40"), Some("0:20"));
        assert_eq!(TimeMark::from_token(&t), Some(TimeMark::Spent("0:20".into())));
        let t = token(None, Some("0:04:40"), None);
        assert_eq!(TimeMark::from_token(&t), Some(TimeMark::Clock("0:04:40".into())));
        assert_eq!(TimeMark::from_token(&token(None, None, None)), None);
    }

    #[test]
    fn eval_mark_carries_bucket() {
        let mark = EvalMark::from_token(&token(Some(-0.7), None, None)).unwrap();
        assert_eq!(mark.text, "-0.70");
        assert_eq!(mark.bucket, EvalBucket::BlackGood);
        assert!(EvalMark::from_token(&token(None, None, None)).is_none());
    }

    #[test]
    fn truncate_raw_keeps_short_text() {
        assert_eq!(truncate_raw("1. e4 e5", 10), "1. e4 e5");
    }

    #[test]
    fn truncate_raw_cuts_long_text() {
        assert_eq!(truncate_raw("1. e4  e5 2. Nf3", 3), "1. e4 e5...");
    }
}
