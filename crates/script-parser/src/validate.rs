//! Range validation for parsed annotations.
//!
//! The parser accepts any digits its grammar captures, so `0:75` or a
//! zero-width highlight parse fine. This pass reports such values without
//! touching the records; callers decide whether an issue is fatal.

use serde::Serialize;
use tutorcast_script_model::annotation::{Annotation, AnnotationKind, Shape};

use crate::script::ScannedAnnotation;

/// A value that parsed but is outside its sensible range.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum RangeIssue {
    #[error("minutes {minutes} exceed 59 in a timecode with hours")]
    MinutesOutOfRange { minutes: u64 },

    #[error("seconds {seconds} exceed 59")]
    SecondsOutOfRange { seconds: u64 },

    #[error("{field} is zero")]
    ZeroDimension { field: &'static str },

    #[error("zoom scale {scale} is not positive")]
    NonPositiveScale { scale: f64 },

    #[error("text label is empty")]
    EmptyLabel,
}

/// Issues found on one script line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub line: usize,
    pub kind: AnnotationKind,
    pub issues: Vec<RangeIssue>,
}

/// Check one annotation. An empty result means the record is in range.
pub fn validate_annotation(annotation: &Annotation) -> Vec<RangeIssue> {
    let mut issues = vec![];
    let tc = &annotation.timestamp;

    if tc.hours > 0 && tc.minutes > 59 {
        issues.push(RangeIssue::MinutesOutOfRange {
            minutes: tc.minutes,
        });
    }
    if tc.seconds > 59 {
        issues.push(RangeIssue::SecondsOutOfRange {
            seconds: tc.seconds,
        });
    }

    match &annotation.shape {
        Shape::Highlight { width, height } | Shape::Blur { width, height } => {
            if *width == 0 {
                issues.push(RangeIssue::ZeroDimension { field: "width" });
            }
            if *height == 0 {
                issues.push(RangeIssue::ZeroDimension { field: "height" });
            }
        }
        Shape::Circle { radius } => {
            if *radius == 0 {
                issues.push(RangeIssue::ZeroDimension { field: "radius" });
            }
        }
        Shape::Zoom { radius, scale } => {
            if *radius == 0 {
                issues.push(RangeIssue::ZeroDimension { field: "radius" });
            }
            if *scale <= 0.0 {
                issues.push(RangeIssue::NonPositiveScale { scale: *scale });
            }
        }
        Shape::Text { label } if label.is_empty() => issues.push(RangeIssue::EmptyLabel),
        Shape::Arrow { .. } | Shape::Text { .. } | Shape::Cursor => {}
    }

    issues
}

/// Check every scanned annotation, returning reports only for lines with issues.
pub fn validate_script(scanned: &[ScannedAnnotation]) -> Vec<ValidationReport> {
    scanned
        .iter()
        .filter_map(|s| {
            let issues = validate_annotation(&s.annotation);
            (!issues.is_empty()).then(|| ValidationReport {
                line: s.line,
                kind: s.annotation.kind(),
                issues,
            })
        })
        .collect()
}
