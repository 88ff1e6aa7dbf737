//! The annotation line parser.
//!
//! Turns one script line such as `0:05 arrow (1200, 300) "Click here"` into
//! an [`Annotation`].
//!
//! # Algorithm
//!
//! 1. **Timecode:** match `(H:)?M:S` anchored at the start of the line.
//! 2. **Frame:** `start_frame = (H*3600 + M*60 + S) * fps`.
//! 3. **Body:** trim the rest of the line and try each kind grammar in
//!    [`GRAMMAR_ORDER`]. The first grammar that matches from the start of the
//!    body wins and anything after it on the line is ignored.
//!
//! Lines that fail any step yield `None`. A script is mostly prose, comments
//! and blank lines, so a non-annotation line is routine and never an error.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tutorcast_script_model::annotation::{
    Annotation, AnnotationKind, Shape, DEFAULT_CIRCLE_RADIUS, DEFAULT_ZOOM_RADIUS,
    DEFAULT_ZOOM_SCALE,
};
use tutorcast_script_model::timecode::Timecode;

/// Frame rate assumed when the caller does not supply one.
pub const DEFAULT_FPS: u32 = 30;

/// Order in which kind grammars are tried.
///
/// This order is part of the parser's contract. `cursor` and `zoom` share
/// the `kind (x, y)` shape, and `circle`, `text` and `blur` share the
/// parenthesized prefix, so reordering changes which grammar claims a body.
pub const GRAMMAR_ORDER: [AnnotationKind; 7] = [
    AnnotationKind::Arrow,
    AnnotationKind::Highlight,
    AnnotationKind::Circle,
    AnnotationKind::Text,
    AnnotationKind::Blur,
    AnnotationKind::Cursor,
    AnnotationKind::Zoom,
];

static TIMECODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:([0-9]+):)?([0-9]+):([0-9]+)").expect("valid regex"));

static GRAMMARS: LazyLock<Vec<Grammar>> = LazyLock::new(|| {
    GRAMMAR_ORDER
        .iter()
        .map(|&kind| Grammar {
            kind,
            pattern: Regex::new(grammar_pattern(kind)).expect("valid regex"),
        })
        .collect()
});

/// A compiled body grammar for one annotation kind.
struct Grammar {
    kind: AnnotationKind,
    pattern: Regex,
}

fn grammar_pattern(kind: AnnotationKind) -> &'static str {
    match kind {
        AnnotationKind::Arrow => r#"^arrow\s+\(([0-9]+),\s*([0-9]+)\)(?:\s+"([^"]*)")?"#,
        AnnotationKind::Highlight => {
            r"^highlight\s+\(([0-9]+),\s*([0-9]+),\s*([0-9]+),\s*([0-9]+)\)"
        }
        AnnotationKind::Circle => r"^circle\s+\(([0-9]+),\s*([0-9]+)\)(?:\s+r=([0-9]+))?",
        AnnotationKind::Text => r#"^text\s+\(([0-9]+),\s*([0-9]+)\)\s+"([^"]*)""#,
        AnnotationKind::Blur => r"^blur\s+\(([0-9]+),\s*([0-9]+),\s*([0-9]+),\s*([0-9]+)\)",
        AnnotationKind::Cursor => r"^cursor\s+\(([0-9]+),\s*([0-9]+)\)",
        AnnotationKind::Zoom => {
            r"^zoom\s+\(([0-9]+),\s*([0-9]+)\)(?:\s+r=([0-9]+))?(?:\s+scale=([0-9]+(?:\.[0-9]+)?))?"
        }
    }
}

/// Parse one script line at the given frame rate.
///
/// Returns `None` when the line has no leading timecode, when no kind
/// grammar matches the body, or when a number does not fit its field.
pub fn parse_annotation(line: &str, fps: u32) -> Option<Annotation> {
    let ts = TIMECODE_RE.captures(line)?;

    let timestamp = Timecode::new(
        ts.get(1).map_or(Some(0), |m| m.as_str().parse().ok())?,
        ts[2].parse().ok()?,
        ts[3].parse().ok()?,
    );
    let start_frame = timestamp.frame_at(fps)?;

    let body = line[ts.get(0)?.end()..].trim();

    GRAMMARS.iter().find_map(|grammar| {
        let caps = grammar.pattern.captures(body)?;
        let x = number(&caps, 1)?;
        let y = number(&caps, 2)?;
        let shape = build_shape(grammar.kind, &caps)?;
        Some(Annotation::new(timestamp, start_frame, x, y, shape))
    })
}

/// Parse one script line at [`DEFAULT_FPS`].
pub fn parse_annotation_default(line: &str) -> Option<Annotation> {
    parse_annotation(line, DEFAULT_FPS)
}

fn build_shape(kind: AnnotationKind, caps: &Captures<'_>) -> Option<Shape> {
    let shape = match kind {
        AnnotationKind::Arrow => Shape::Arrow {
            label: caps.get(3).map(|m| m.as_str().to_string()),
        },
        AnnotationKind::Highlight => Shape::Highlight {
            width: number(caps, 3)?,
            height: number(caps, 4)?,
        },
        AnnotationKind::Circle => Shape::Circle {
            radius: optional_number(caps, 3)?.unwrap_or(DEFAULT_CIRCLE_RADIUS),
        },
        AnnotationKind::Text => Shape::Text {
            label: caps.get(3)?.as_str().to_string(),
        },
        AnnotationKind::Blur => Shape::Blur {
            width: number(caps, 3)?,
            height: number(caps, 4)?,
        },
        AnnotationKind::Cursor => Shape::Cursor,
        // Zoom options are tuning hints: a value that does not fit falls
        // back to the default instead of dropping the line.
        AnnotationKind::Zoom => Shape::Zoom {
            radius: number(caps, 3).unwrap_or(DEFAULT_ZOOM_RADIUS),
            scale: caps
                .get(4)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .filter(|s| s.is_finite())
                .unwrap_or(DEFAULT_ZOOM_SCALE),
        },
    };
    Some(shape)
}

/// Required numeric capture. `None` when absent or out of range.
fn number(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

/// Optional numeric capture: `Some(None)` when the clause is absent,
/// `None` when present but out of range.
fn optional_number(caps: &Captures<'_>, idx: usize) -> Option<Option<u32>> {
    match caps.get(idx) {
        Some(m) => m.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}
