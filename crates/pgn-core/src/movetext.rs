//! Movetext tokenizer and annotated move extraction.
//!
//! The movetext line is lexed into move numbers, black-to-move markers, move
//! words, comment blocks, variations, NAGs and result markers. A move only
//! becomes a [`MoveToken`] once a `{ ... }` block follows it; moves without a
//! comment are dropped. Bare words written after one number prefix form a
//! single run, and the whole run owns the next comment. Consecutive comment
//! blocks after one move are merged.
//! Variations are skipped along with everything inside them.

use crate::annotation::{clock_seconds, Annotation};
use crate::error::MovetextError;
use crate::format::format_elapsed;
use crate::side::Side;
use serde::Serialize;

/// Deepest variation nesting accepted before parsing gives up.
pub const MAX_VARIATION_DEPTH: usize = 64;

/// One annotated ply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveToken {
    /// Move in algebraic notation.
    pub text: String,
    pub side: Side,
    /// Full-move number this ply belongs to.
    pub move_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<f64>,
    /// Remaining time as written in the `%clk` command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<String>,
    /// Time used since this side's previous clock reading, as `M:SS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme<'a> {
    /// `12.` or `12...`; `number` is `None` when the digits overflow.
    MoveNumber { number: Option<u32>, black: bool },
    /// A standalone `...`.
    Ellipsis,
    Word(&'a str),
    Comment(&'a str),
    UnterminatedComment,
    VariationStart(usize),
    VariationEnd(usize),
    Nag,
    GameResult,
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Lexer { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_separators(&mut self) {
        let skipped = self
            .rest()
            .bytes()
            .take_while(|b| b.is_ascii_whitespace() || *b == b'}')
            .count();
        self.pos += skipped;
    }

    fn comment(&mut self) -> Lexeme<'a> {
        let body_start = self.pos + 1;
        match self.src[body_start..].find('}') {
            Some(len) => {
                self.pos = body_start + len + 1;
                Lexeme::Comment(&self.src[body_start..body_start + len])
            }
            None => {
                self.pos = self.src.len();
                Lexeme::UnterminatedComment
            }
        }
    }

    /// Lexes `digits` followed by at least one dot. Returns `None` (without
    /// consuming) if the digits are not followed by a dot.
    fn move_number(&mut self) -> Option<Lexeme<'a>> {
        let rest = self.rest();
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let dots = rest[digits..].bytes().take_while(|b| *b == b'.').count();
        if digits == 0 || dots == 0 {
            return None;
        }

        let number = rest[..digits].parse::<u32>().ok();
        self.pos += digits + dots;
        Some(Lexeme::MoveNumber {
            number,
            black: dots >= 3,
        })
    }

    fn word(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .bytes()
            .take_while(|b| !b.is_ascii_whitespace() && !matches!(b, b'{' | b'}' | b'(' | b')'))
            .count();
        self.pos += len;
        &rest[..len]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_separators();
        let offset = self.pos;
        let first = *self.rest().as_bytes().first()?;

        let lexeme = match first {
            b'{' => self.comment(),
            b'(' => {
                self.pos += 1;
                Lexeme::VariationStart(offset)
            }
            b')' => {
                self.pos += 1;
                Lexeme::VariationEnd(offset)
            }
            b'.' if self.rest().starts_with("...") => {
                let dots = self.rest().bytes().take_while(|b| *b == b'.').count();
                self.pos += dots;
                Lexeme::Ellipsis
            }
            b'0'..=b'9' => match self.move_number() {
                Some(number) => number,
                None => classify_word(self.word()),
            },
            _ => classify_word(self.word()),
        };
        Some(lexeme)
    }
}

fn classify_word(word: &str) -> Lexeme<'_> {
    match word {
        "1-0" | "0-1" | "1/2-1/2" | "*" => Lexeme::GameResult,
        w if w.starts_with('$') => Lexeme::Nag,
        w => Lexeme::Word(w),
    }
}

/// Run of move words waiting for its first comment block.
#[derive(Debug, Clone)]
struct PendingMove<'a> {
    words: Vec<&'a str>,
    number: Option<u32>,
    black: bool,
}

struct MoveCollector {
    tokens: Vec<MoveToken>,
    counter: u32,
    last_clock: [Option<String>; 2],
}

impl MoveCollector {
    fn new() -> Self {
        MoveCollector {
            tokens: Vec::new(),
            counter: 1,
            last_clock: [None, None],
        }
    }

    fn emit(&mut self, pending: PendingMove<'_>, annotation: Annotation) {
        let side = if pending.black { Side::Black } else { Side::White };
        let move_number = pending.number.unwrap_or(self.counter);

        let time_spent = annotation.clock.as_deref().and_then(|clock| {
            let previous = self.last_clock[side.index()].replace(clock.to_string())?;
            let elapsed = clock_seconds(&previous)?.checked_sub(clock_seconds(clock)?)?;
            (elapsed > 0).then(|| format_elapsed(elapsed))
        });

        self.tokens.push(MoveToken {
            text: pending.words.join(" "),
            side,
            move_number,
            evaluation: annotation.evaluation,
            clock: annotation.clock,
            time_spent,
        });

        if side.is_black() {
            self.counter = self.counter.saturating_add(1);
        }
    }
}

/// Parses a movetext line into annotated move tokens in source order.
///
/// # Errors
///
/// Returns a [`MovetextError`] when variation parentheses do not balance or
/// nest deeper than [`MAX_VARIATION_DEPTH`].
pub fn parse_movetext(movetext: &str) -> Result<Vec<MoveToken>, MovetextError> {
    let mut collector = MoveCollector::new();
    let mut prefix_number: Option<u32> = None;
    let mut prefix_black = false;
    let mut pending: Option<PendingMove<'_>> = None;
    let mut commented: Option<(PendingMove<'_>, Annotation)> = None;
    let mut depth = 0usize;

    for lexeme in Lexer::new(movetext) {
        if depth > 0 {
            match lexeme {
                Lexeme::VariationStart(offset) => {
                    depth += 1;
                    if depth > MAX_VARIATION_DEPTH {
                        return Err(MovetextError::VariationTooDeep {
                            offset,
                            limit: MAX_VARIATION_DEPTH,
                        });
                    }
                }
                Lexeme::VariationEnd(_) => depth -= 1,
                _ => {}
            }
            continue;
        }

        match lexeme {
            Lexeme::Comment(body) => {
                let annotation = Annotation::parse(body);
                if let Some(mv) = pending.take() {
                    commented = Some((mv, annotation));
                } else if let Some((_, existing)) = commented.as_mut() {
                    existing.merge(annotation);
                }
                continue;
            }
            Lexeme::Nag => continue,
            _ => {}
        }

        // Anything else closes the current move's comment run.
        if let Some((mv, annotation)) = commented.take() {
            collector.emit(mv, annotation);
        }

        match lexeme {
            Lexeme::MoveNumber { number, black } => {
                pending = None;
                prefix_number = number;
                prefix_black = black;
            }
            Lexeme::Ellipsis => {
                pending = None;
                prefix_black = true;
            }
            Lexeme::Word(text) => match pending.as_mut() {
                Some(run) => run.words.push(text),
                None => {
                    pending = Some(PendingMove {
                        words: vec![text],
                        number: prefix_number.take(),
                        black: std::mem::take(&mut prefix_black),
                    });
                }
            },
            Lexeme::VariationStart(_) => {
                pending = None;
                depth = 1;
            }
            Lexeme::VariationEnd(offset) => {
                return Err(MovetextError::UnbalancedVariation { offset });
            }
            Lexeme::UnterminatedComment | Lexeme::GameResult => {
                pending = None;
            }
            Lexeme::Comment(_) | Lexeme::Nag => {}
        }
    }

    if depth > 0 {
        return Err(MovetextError::UnclosedVariation { depth });
    }
    if let Some((mv, annotation)) = commented {
        collector.emit(mv, annotation);
    }

    tracing::debug!(plies = collector.tokens.len(), "parsed movetext");
    Ok(collector.tokens)
}
