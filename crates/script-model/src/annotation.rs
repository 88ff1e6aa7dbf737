//! Annotation records produced from script lines.
//!
//! An annotation is a timed overlay instruction (arrow, highlight, circle,
//! text label, zoom lens, blur mask, or cursor) anchored at a pixel position.
//! Each kind carries only the fields that apply to it, so a cursor can never
//! hold a stray width or a highlight a label.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::timecode::Timecode;

/// Radius used by `circle` when the script omits `r=`.
pub const DEFAULT_CIRCLE_RADIUS: u32 = 40;

/// Lens radius used by `zoom` when the script omits `r=`.
pub const DEFAULT_ZOOM_RADIUS: u32 = 100;

/// Magnification used by `zoom` when the script omits `scale=`.
pub const DEFAULT_ZOOM_SCALE: f64 = 2.0;

/// On-screen duration the renderer uses for bounded overlays.
pub const DEFAULT_DISPLAY_FRAMES: u32 = 60;

/// A single parsed annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Normalized timecode as written in the script.
    pub timestamp: Timecode,

    /// Absolute frame index at which the overlay appears.
    pub start_frame: u64,

    /// Anchor X in pixels.
    pub x: u32,

    /// Anchor Y in pixels.
    pub y: u32,

    /// Kind-specific payload.
    #[serde(flatten)]
    pub shape: Shape,
}

/// Discriminated union of annotation payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Bouncing arrow pointing at the anchor.
    Arrow {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },

    /// Rectangle outline with its top-left corner at the anchor.
    Highlight { width: u32, height: u32 },

    /// Circle centered on the anchor.
    Circle { radius: u32 },

    /// Floating text label.
    Text { label: String },

    /// Magnifier lens centered on the anchor.
    Zoom { radius: u32, scale: f64 },

    /// Blur mask over a rectangle.
    Blur { width: u32, height: u32 },

    /// Synthetic cursor drawn at the anchor.
    Cursor,
}

/// Field-less annotation discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    Arrow,
    Highlight,
    Circle,
    Text,
    Zoom,
    Blur,
    Cursor,
}

impl AnnotationKind {
    pub const ALL: [AnnotationKind; 7] = [
        AnnotationKind::Arrow,
        AnnotationKind::Highlight,
        AnnotationKind::Circle,
        AnnotationKind::Text,
        AnnotationKind::Zoom,
        AnnotationKind::Blur,
        AnnotationKind::Cursor,
    ];

    /// Keyword used for this kind in scripts.
    pub fn keyword(self) -> &'static str {
        match self {
            AnnotationKind::Arrow => "arrow",
            AnnotationKind::Highlight => "highlight",
            AnnotationKind::Circle => "circle",
            AnnotationKind::Text => "text",
            AnnotationKind::Zoom => "zoom",
            AnnotationKind::Blur => "blur",
            AnnotationKind::Cursor => "cursor",
        }
    }

    /// Default on-screen duration in frames. Blur masks stay up until the
    /// section ends, so they have none.
    pub fn default_display_frames(self) -> Option<u32> {
        match self {
            AnnotationKind::Blur => None,
            _ => Some(DEFAULT_DISPLAY_FRAMES),
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.keyword())
    }
}

impl Shape {
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Shape::Arrow { .. } => AnnotationKind::Arrow,
            Shape::Highlight { .. } => AnnotationKind::Highlight,
            Shape::Circle { .. } => AnnotationKind::Circle,
            Shape::Text { .. } => AnnotationKind::Text,
            Shape::Zoom { .. } => AnnotationKind::Zoom,
            Shape::Blur { .. } => AnnotationKind::Blur,
            Shape::Cursor => AnnotationKind::Cursor,
        }
    }
}

impl Annotation {
    pub fn new(timestamp: Timecode, start_frame: u64, x: u32, y: u32, shape: Shape) -> Self {
        Self {
            timestamp,
            start_frame,
            x,
            y,
            shape,
        }
    }

    pub fn kind(&self) -> AnnotationKind {
        self.shape.kind()
    }

    /// Label text for arrows and text annotations.
    pub fn label(&self) -> Option<&str> {
        match &self.shape {
            Shape::Arrow { label } => label.as_deref(),
            Shape::Text { label } => Some(label),
            _ => None,
        }
    }

    /// Width and height for rectangular annotations.
    pub fn size(&self) -> Option<(u32, u32)> {
        match self.shape {
            Shape::Highlight { width, height } | Shape::Blur { width, height } => {
                Some((width, height))
            }
            _ => None,
        }
    }

    /// Last frame (exclusive) the overlay is visible, given the on-screen
    /// duration for bounded kinds. `None` means visible until the section ends.
    pub fn end_frame(&self, display_frames: u32) -> Option<u64> {
        self.kind()
            .default_display_frames()
            .map(|_| self.start_frame.saturating_add(u64::from(display_frames)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(shape: Shape) -> Annotation {
        Annotation::new(Timecode::new(0, 0, 1), 30, 10, 20, shape)
    }

    #[test]
    fn test_json_flattens_kind_tag() {
        let annotation = at(Shape::Circle { radius: 40 });
        let json = serde_json::to_string(&annotation).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"0:01","start_frame":30,"x":10,"y":20,"kind":"circle","radius":40}"#
        );
    }

    #[test]
    fn test_arrow_without_label_omits_field() {
        let json = serde_json::to_string(&at(Shape::Arrow { label: None })).unwrap();
        assert!(!json.contains("label"));

        let parsed: Annotation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.shape, Shape::Arrow { label: None });
    }

    #[test]
    fn test_cursor_carries_no_extra_fields() {
        let value = serde_json::to_value(at(Shape::Cursor)).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["kind", "start_frame", "timestamp", "x", "y"]);
    }

    #[test]
    fn test_deserialize_zoom() {
        let raw = r#"{"timestamp":"1:00","start_frame":1800,"x":5,"y":6,"kind":"zoom","radius":100,"scale":2.5}"#;
        let parsed: Annotation = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.kind(), AnnotationKind::Zoom);
        assert_eq!(
            parsed.shape,
            Shape::Zoom {
                radius: 100,
                scale: 2.5
            }
        );
    }

    #[test]
    fn test_label_and_size_accessors() {
        assert_eq!(
            at(Shape::Text {
                label: "hi".into()
            })
            .label(),
            Some("hi")
        );
        assert_eq!(at(Shape::Cursor).label(), None);
        assert_eq!(
            at(Shape::Blur {
                width: 3,
                height: 4
            })
            .size(),
            Some((3, 4))
        );
        assert_eq!(at(Shape::Circle { radius: 1 }).size(), None);
    }

    #[test]
    fn test_end_frame_is_unbounded_for_blur() {
        assert_eq!(at(Shape::Cursor).end_frame(60), Some(90));
        assert_eq!(
            at(Shape::Blur {
                width: 1,
                height: 1
            })
            .end_frame(60),
            None
        );
    }

    #[test]
    fn test_kind_keywords_match_serde_names() {
        for kind in AnnotationKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.keyword()));
        }
    }
}
