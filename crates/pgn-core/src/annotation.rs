//! Embedded command parsing inside `{ ... }` comment blocks.
//!
//! Lichess and Chess.com write engine scores and clock readings as
//! `[%eval 0.34]` and `[%clk 0:04:59]`. Only those two commands are read;
//! any other comment text is ignored.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit0, digit1, multispace1, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{pair, preceded},
    IResult, Parser,
};

/// Commands found in the comment blocks attached to one move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    pub evaluation: Option<f64>,
    pub clock: Option<String>,
}

impl Annotation {
    /// Scans one comment body for `%eval` and `%clk`.
    ///
    /// The first well-formed occurrence of each command wins. A command whose
    /// argument does not parse is treated as absent.
    pub fn parse(comment: &str) -> Self {
        Annotation {
            evaluation: first_match(comment, "%eval", eval_command),
            clock: first_match(comment, "%clk", clock_command).map(str::to_string),
        }
    }

    /// Fills fields still missing from a later comment block on the same move.
    pub fn merge(&mut self, later: Annotation) {
        if self.evaluation.is_none() {
            self.evaluation = later.evaluation;
        }
        if self.clock.is_none() {
            self.clock = later.clock;
        }
    }
}

/// Converts an `H:MM:SS` clock reading to whole seconds.
///
/// Returns `None` unless the reading has exactly three numeric components.
pub fn clock_seconds(clock: &str) -> Option<u64> {
    let mut parts = clock.split(':');
    let (Some(h), Some(m), Some(s), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let (h, m, s) = (h.parse::<u64>().ok()?, m.parse::<u64>().ok()?, s.parse::<u64>().ok()?);
    Some(
        h.saturating_mul(3600)
            .saturating_add(m.saturating_mul(60))
            .saturating_add(s),
    )
}

fn first_match<'a, T>(
    comment: &'a str,
    command: &str,
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, T>,
) -> Option<T> {
    comment
        .match_indices(command)
        .find_map(|(idx, _)| parser(&comment[idx..]).ok().map(|(_, value)| value))
}

fn eval_command(input: &str) -> IResult<&str, f64> {
    preceded(
        (tag("%eval"), multispace1),
        map_res(signed_number, |s: &str| s.parse::<f64>()),
    )
    .parse(input)
}

fn clock_command(input: &str) -> IResult<&str, &str> {
    preceded(
        (tag("%clk"), multispace1),
        take_while1(|c: char| c.is_ascii_digit() || c == ':'),
    )
    .parse(input)
}

/// Optional sign, then either `digits.digits`, `.digits`, or plain digits.
fn signed_number(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(one_of("+-")),
        alt((recognize((digit0, char('.'), digit1)), digit1)),
    ))
    .parse(input)
}
