/// Classification of one slash-delimited route-template token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Static,
    Dynamic,
    CatchAll,
    OptionalCatchAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Literal text for `Static`, the bound parameter name otherwise.
    pub name: String,
}

/// Classifies a single template token by its bracket wrapping.
///
/// Purely syntactic and total: every token maps to exactly one kind, and
/// surrounding segments are never consulted. Optional catch-all must be
/// tested before catch-all before dynamic, since all three share the
/// bracket prefix.
#[tracing::instrument(level = "trace")]
pub fn parse_segment(token: &str) -> Segment {
    if token.starts_with("[[") && token.ends_with("]]") && token.contains("...") {
        // [[...name]]
        Segment {
            kind: SegmentKind::OptionalCatchAll,
            name: token[5..token.len() - 2].to_string(),
        }
    } else if token.starts_with('[') && token.ends_with(']') && token.contains("...") {
        // [...name]
        Segment {
            kind: SegmentKind::CatchAll,
            name: token[4..token.len() - 1].to_string(),
        }
    } else if token.starts_with('[') && token.ends_with(']') {
        // [name]
        Segment {
            kind: SegmentKind::Dynamic,
            name: token[1..token.len() - 1].to_string(),
        }
    } else {
        Segment {
            kind: SegmentKind::Static,
            name: token.to_string(),
        }
    }
}
