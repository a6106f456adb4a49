use super::segment::{Block, Segment};

/// Serializes segments as plain text without markup.
pub fn to_text(segments: &[Segment]) -> String {
    let mut out = String::new();

    for segment in segments {
        match segment {
            Segment::Open(Block::Header) | Segment::Close(_) => {}
            Segment::Open(_) => {
                if !out.is_empty() {
                    end_line(&mut out);
                    out.push('\n');
                }
            }
            Segment::Field { label, value } | Segment::Info { label, value } => {
                out.push_str(&format!("{}: {}\n", label, value));
            }
            Segment::Players { white, black } => {
                out.push_str(&format!("{} - {}\n", white, black));
            }
            Segment::LineBreak => end_line(&mut out),
            Segment::MoveNumber(number) => out.push_str(&format!("{}. ", number)),
            Segment::Move(text) => out.push_str(text),
            Segment::Analysis { eval, time } => {
                let parts: Vec<&str> = eval
                    .iter()
                    .map(|e| e.text.as_str())
                    .chain(time.iter().map(|t| t.text()))
                    .collect();
                out.push_str(&format!(" ({})", parts.join(" ")));
            }
            Segment::InlineEval(eval) => out.push_str(&format!("({})", eval.text)),
            Segment::InlineTime(time) => out.push_str(&format!("[{}]", time.text())),
            Segment::Gap => out.push(' '),
            Segment::MoreMoves(notice) => {
                end_line(&mut out);
                out.push_str(notice);
            }
            Segment::Ellipsis => out.push_str("..."),
            Segment::RawMoves { label, text } => match label {
                Some(label) => out.push_str(&format!("{}: {}", label, text)),
                None => out.push_str(text),
            },
        }
    }

    out.trim_end().to_string()
}

/// Drops trailing spaces and terminates the current line.
fn end_line(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::EvalBucket;
    use crate::render::{EvalMark, TimeMark};

    #[test]
    fn header_then_moves() {
        let text = to_text(&[
            Segment::Open(Block::Header),
            Segment::Field {
                label: "White".into(),
                value: "alice".into(),
            },
            Segment::Close(Block::Header),
            Segment::Open(Block::Moves),
            Segment::MoveNumber(1),
            Segment::Move("e4".into()),
            Segment::Analysis {
                eval: Some(EvalMark {
                    text: "+0.30".into(),
                    bucket: EvalBucket::WhiteSlightlyGood,
                }),
                time: Some(TimeMark::Clock("0:05:00".into())),
            },
            Segment::Gap,
            Segment::Move("e5".into()),
            Segment::Gap,
            Segment::LineBreak,
            Segment::MoveNumber(2),
            Segment::Move("Nf3".into()),
            Segment::Gap,
            Segment::MoreMoves("... and 4 more moves".into()),
            Segment::Close(Block::Moves),
        ]);
        assert_eq!(
            text,
            "White: alice\n\n1. e4 (+0.30 0:05:00) e5\n2. Nf3\n... and 4 more moves"
        );
    }

    #[test]
    fn moves_without_header() {
        let text = to_text(&[
            Segment::Open(Block::CompactMoves),
            Segment::MoveNumber(1),
            Segment::Move("d4".into()),
            Segment::InlineTime(TimeMark::Spent("0:03".into())),
            Segment::Gap,
            Segment::Ellipsis,
            Segment::Close(Block::CompactMoves),
        ]);
        assert_eq!(text, "1. d4[0:03] ...");
    }

    #[test]
    fn text_is_not_escaped() {
        let text = to_text(&[Segment::Players {
            white: "a&b".into(),
            black: "<c>".into(),
        }]);
        assert_eq!(text, "a&b - <c>");
    }
}
