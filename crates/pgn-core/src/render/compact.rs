use super::segment::{truncate_raw, Block, EvalMark, Segment, TimeMark};
use super::RenderOptions;
use crate::movetext::parse_movetext;
use crate::side::Side;
use crate::tags::HeaderRecord;

/// Builds the compact view: a short header and a single inline move stream.
///
/// Unlike the detailed view the result is shown as written in the tag, and
/// truncation is marked with a bare `...`.
pub fn compact_segments(pgn: &str, options: &RenderOptions) -> Vec<Segment> {
    let header = HeaderRecord::parse(pgn);
    let labels = options.locale.labels();
    let cap = options.ply_cap();
    let mut out = Vec::new();

    if let (Some(white), Some(black)) = (header.white(), header.black()) {
        out.push(Segment::Players {
            white: white.to_string(),
            black: black.to_string(),
        });
    }
    if let Some(result) = header.result() {
        out.push(Segment::Info {
            label: labels.result.to_string(),
            value: result.to_string(),
        });
    }
    if let (Some(eco), Some(opening)) = (header.eco(), header.opening()) {
        out.push(Segment::Info {
            label: labels.opening.to_string(),
            value: format!("{} {}", eco, opening),
        });
    }

    let Some(movetext) = header.moves() else {
        return out;
    };

    out.push(Segment::Open(Block::CompactMoves));
    match parse_movetext(movetext) {
        Ok(tokens) => {
            let mut current_number = 0;
            for token in tokens.iter().take(cap) {
                if token.side == Side::White && token.move_number != current_number {
                    out.push(Segment::MoveNumber(token.move_number));
                    current_number = token.move_number;
                }
                out.push(Segment::Move(token.text.clone()));
                if let Some(eval) = EvalMark::from_token(token) {
                    out.push(Segment::InlineEval(eval));
                }
                if let Some(time) = TimeMark::from_token(token) {
                    out.push(Segment::InlineTime(time));
                }
                out.push(Segment::Gap);
            }
            if tokens.len() > cap {
                out.push(Segment::Ellipsis);
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "move parsing failed, showing raw movetext");
            out.push(Segment::RawMoves {
                label: None,
                text: truncate_raw(movetext, cap),
            });
        }
    }
    out.push(Segment::Close(Block::CompactMoves));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PGN: &str = "[White \"alice\"]\n[Black \"bob\"]\n[Result \"1/2-1/2\"]\n\
        [ECO \"C20\"]\n[Opening \"King's Pawn Game\"]\n\n\
        1. e4 { [%eval 0.3] [%clk 0:05:00] } 1... e5 { [%clk 0:05:00] } \
        2. Nf3 { [%eval 0.2] } 1/2-1/2";

    #[test]
    fn header_lines() {
        let segments = compact_segments(PGN, &RenderOptions::default());
        assert_eq!(
            &segments[..3],
            &[
                Segment::Players {
                    white: "alice".into(),
                    black: "bob".into()
                },
                Segment::Info {
                    label: "Result".into(),
                    value: "1/2-1/2".into()
                },
                Segment::Info {
                    label: "Opening".into(),
                    value: "C20 King's Pawn Game".into()
                },
            ][..]
        );
    }

    #[test]
    fn players_need_both_names() {
        let segments = compact_segments("[White \"alice\"]", &RenderOptions::default());
        assert!(segments.is_empty());
    }

    #[test]
    fn inline_stream() {
        let segments = compact_segments(PGN, &RenderOptions::default());
        let moves: Vec<&Segment> = segments
            .iter()
            .skip_while(|s| **s != Segment::Open(Block::CompactMoves))
            .collect();
        assert_eq!(moves[1], &Segment::MoveNumber(1));
        assert_eq!(moves[2], &Segment::Move("e4".into()));
        assert!(matches!(moves[3], Segment::InlineEval(m) if m.text == "+0.30"));
        assert_eq!(moves[4], &Segment::InlineTime(TimeMark::Clock("0:05:00".into())));
        assert!(!segments.contains(&Segment::LineBreak));
        assert!(!segments.contains(&Segment::Ellipsis));
    }

    #[test]
    fn cap_adds_ellipsis() {
        let segments = compact_segments(PGN, &RenderOptions::with_max_moves(1));
        assert_eq!(segments.iter().filter(|s| matches!(s, Segment::Move(_))).count(), 2);
        assert_eq!(segments[segments.len() - 2], Segment::Ellipsis);
    }

    #[test]
    fn broken_movetext_is_raw_without_label() {
        let segments = compact_segments("1. e4 { } (", &RenderOptions::default());
        assert_eq!(
            segments,
            vec![
                Segment::Open(Block::CompactMoves),
                Segment::RawMoves {
                    label: None,
                    text: "1. e4 { } (".into()
                },
                Segment::Close(Block::CompactMoves),
            ]
        );
    }
}
