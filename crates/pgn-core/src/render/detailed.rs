use super::segment::{truncate_raw, Block, EvalMark, Segment, TimeMark};
use super::RenderOptions;
use crate::movetext::{parse_movetext, MoveToken};
use crate::side::Side;
use crate::summary::GameOutcome;
use crate::tags::HeaderRecord;

/// Builds the detailed view: one header line per known field, then the moves
/// with one line per full move.
pub fn detailed_segments(pgn: &str, options: &RenderOptions) -> Vec<Segment> {
    let header = HeaderRecord::parse(pgn);
    let labels = options.locale.labels();

    let mut fields = Vec::new();
    let mut field = |label: &str, value: Option<String>| {
        if let Some(value) = value {
            fields.push(Segment::Field {
                label: label.to_string(),
                value,
            });
        }
    };

    field(labels.event, header.event().map(str::to_string));
    field(labels.date, header.date().map(str::to_string));
    field(labels.white, header.white().map(str::to_string));
    field(labels.black, header.black().map(str::to_string));
    field(
        labels.result,
        header.result().map(|result| {
            GameOutcome::from_result(result)
                .map(|outcome| outcome.phrase(options.locale))
                .unwrap_or(result)
                .to_string()
        }),
    );
    field(
        labels.opening,
        header
            .eco()
            .zip(header.opening())
            .map(|(eco, opening)| format!("{} - {}", eco, opening)),
    );
    field(labels.time_control, header.time_control().map(str::to_string));

    let mut out = Vec::new();
    if !fields.is_empty() {
        out.push(Segment::Open(Block::Header));
        out.append(&mut fields);
        out.push(Segment::Close(Block::Header));
    }

    if let Some(movetext) = header.moves() {
        out.push(Segment::Open(Block::Moves));
        match parse_movetext(movetext) {
            Ok(tokens) => push_moves(&mut out, &tokens, options.ply_cap(), options),
            Err(err) => {
                tracing::warn!(error = %err, "move parsing failed, showing raw movetext");
                out.push(Segment::RawMoves {
                    label: Some(labels.moves.to_string()),
                    text: truncate_raw(movetext, options.ply_cap()),
                });
            }
        }
        out.push(Segment::Close(Block::Moves));
    }

    out
}

fn push_moves(out: &mut Vec<Segment>, tokens: &[MoveToken], cap: usize, options: &RenderOptions) {
    let mut current_number = 0;
    let mut wrote_any = false;

    for token in tokens.iter().take(cap) {
        if token.side == Side::White && token.move_number != current_number {
            if wrote_any {
                out.push(Segment::LineBreak);
            }
            out.push(Segment::MoveNumber(token.move_number));
            current_number = token.move_number;
        }

        out.push(Segment::Move(token.text.clone()));
        wrote_any = true;

        let eval = EvalMark::from_token(token);
        let time = TimeMark::from_token(token);
        if eval.is_some() || time.is_some() {
            out.push(Segment::Analysis { eval, time });
        }
        out.push(Segment::Gap);
    }

    if tokens.len() > cap {
        out.push(Segment::MoreMoves(options.locale.more_moves(tokens.len() - cap)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::EvalBucket;
    use crate::locale::Locale;

    const PGN: &str = "[Event \"Casual\"]\n[White \"alice\"]\n[Black \"bob\"]\n[Result \"0-1\"]\n\
        [ECO \"B20\"]\n[Opening \"Sicilian Defense\"]\n[TimeControl \"180+2\"]\n\n\
        1. e4 { [%eval 0.3] [%clk 0:03:00] } 1... c5 { [%eval 0.35] [%clk 0:03:00] } \
        2. Nf3 { [%clk 0:02:55] } 0-1";

    #[test]
    fn header_fields_in_order() {
        let segments = detailed_segments(PGN, &RenderOptions::default());
        let labels: Vec<&str> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Field { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec!["Event", "White", "Black", "Result", "Opening", "Time control"]
        );
        assert!(segments.contains(&Segment::Field {
            label: "Result".into(),
            value: "Black wins".into()
        }));
        assert!(segments.contains(&Segment::Field {
            label: "Opening".into(),
            value: "B20 - Sicilian Defense".into()
        }));
    }

    #[test]
    fn localized_result_phrase() {
        let options = RenderOptions {
            locale: Locale::Ru,
            ..RenderOptions::default()
        };
        let segments = detailed_segments(PGN, &options);
        assert!(segments.contains(&Segment::Field {
            label: "Результат".into(),
            value: "Победа черных".into()
        }));
    }

    #[test]
    fn unknown_result_is_verbatim() {
        let segments = detailed_segments("[Result \"+--\"]", &RenderOptions::default());
        assert!(segments.contains(&Segment::Field {
            label: "Result".into(),
            value: "+--".into()
        }));
    }

    #[test]
    fn opening_needs_both_tags() {
        let segments = detailed_segments("[ECO \"B20\"]", &RenderOptions::default());
        assert!(segments.is_empty());
    }

    #[test]
    fn moves_grouped_by_number() {
        let segments = detailed_segments(PGN, &RenderOptions::default());
        let start = segments
            .iter()
            .position(|s| *s == Segment::Open(Block::Moves))
            .unwrap();
        assert_eq!(
            &segments[start..],
            &[
                Segment::Open(Block::Moves),
                Segment::MoveNumber(1),
                Segment::Move("e4".into()),
                Segment::Analysis {
                    eval: Some(EvalMark {
                        text: "+0.30".into(),
                        bucket: EvalBucket::WhiteSlightlyGood
                    }),
                    time: Some(TimeMark::Clock("0:03:00".into())),
                },
                Segment::Gap,
                Segment::Move("c5".into()),
                Segment::Analysis {
                    eval: Some(EvalMark {
                        text: "+0.35".into(),
                        bucket: EvalBucket::WhiteSlightlyGood
                    }),
                    time: Some(TimeMark::Clock("0:03:00".into())),
                },
                Segment::Gap,
                Segment::LineBreak,
                Segment::MoveNumber(2),
                Segment::Move("Nf3".into()),
                Segment::Analysis {
                    eval: None,
                    time: Some(TimeMark::Spent("0:05".into())),
                },
                Segment::Gap,
                Segment::Close(Block::Moves),
            ][..]
        );
    }

    #[test]
    fn cap_reports_omitted_plies() {
        let segments = detailed_segments(PGN, &RenderOptions::with_max_moves(1));
        let moves = segments
            .iter()
            .filter(|s| matches!(s, Segment::Move(_)))
            .count();
        assert_eq!(moves, 2);
        assert!(segments.contains(&Segment::MoreMoves("... and 1 more move".into())));
    }

    #[test]
    fn broken_variation_falls_back_to_raw_text() {
        let pgn = "[White \"a\"]\n\n1. e4 { } ) 1... e5 { }";
        let segments = detailed_segments(pgn, &RenderOptions::with_max_moves(1));
        assert!(segments.contains(&Segment::RawMoves {
            label: Some("Moves".into()),
            text: "1. e4...".into()
        }));
    }
}
