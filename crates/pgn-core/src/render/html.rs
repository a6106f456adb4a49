use super::segment::{Block, Segment};
use askama::Template;

/// Segment stream laid out by `templates/segments.html`.
#[derive(Template)]
#[template(path = "segments.html")]
struct SegmentsTemplate<'a> {
    segments: &'a [Segment],
    /// Moves and numbers take the compact class names.
    compact: bool,
}

/// Serializes segments as HTML fragments with styling-hook class names.
///
/// All text taken from the PGN is escaped by the template.
pub fn to_html(segments: &[Segment]) -> String {
    let template = SegmentsTemplate {
        segments,
        compact: segments.contains(&Segment::Open(Block::CompactMoves)),
    };
    template.render().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to render segments");
        String::new()
    })
}
