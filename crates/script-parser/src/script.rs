//! Multi-line script scanning.
//!
//! A script mixes annotation lines with prose, comments and blank lines.
//! Scanning parses each line independently, keeps the annotations in their
//! original order and sets the rest aside. Nothing is sorted; callers that
//! want `start_frame` order sort themselves.

use serde::Serialize;
use tutorcast_script_model::annotation::Annotation;

use crate::parser::parse_annotation;

/// An annotation together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannedAnnotation {
    pub line: usize,
    pub annotation: Annotation,
}

/// A non-blank, non-comment line that did not parse as an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    pub line: usize,
    pub text: String,
}

/// Result of scanning a whole script.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScriptScan {
    pub annotations: Vec<ScannedAnnotation>,
    pub rejected: Vec<RejectedLine>,
}

impl ScriptScan {
    /// Drop line numbers and keep the annotations in script order.
    pub fn into_annotations(self) -> Vec<Annotation> {
        self.annotations.into_iter().map(|s| s.annotation).collect()
    }

    /// True when every candidate line parsed.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// How script lines are presented to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Each line goes to the parser untouched, so a scan accepts exactly
    /// the lines [`parse_annotation`] accepts.
    #[default]
    Plain,

    /// Outline-style lists: surrounding whitespace and a leading `- `
    /// bullet are stripped before parsing.
    Bulleted,
}

/// Scan a script, keeping both accepted annotations and rejected lines.
///
/// Blank lines and `#` comments are skipped without being reported.
pub fn scan_script(text: &str, fps: u32) -> ScriptScan {
    scan_script_with(text, fps, LineStyle::Plain)
}

/// Scan a script with an explicit line style.
pub fn scan_script_with(text: &str, fps: u32, style: LineStyle) -> ScriptScan {
    let mut scan = ScriptScan::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let Some(candidate) = candidate_line(raw, style) else {
            continue;
        };

        match parse_annotation(candidate, fps) {
            Some(annotation) => scan.annotations.push(ScannedAnnotation { line, annotation }),
            None => {
                tracing::debug!(line, text = candidate, "Skipping non-annotation line");
                scan.rejected.push(RejectedLine {
                    line,
                    text: candidate.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        accepted = scan.annotations.len(),
        rejected = scan.rejected.len(),
        ?style,
        "Scanned script"
    );
    scan
}

/// Parse every annotation line of a script, silently skipping the rest.
pub fn parse_script(text: &str, fps: u32) -> Vec<Annotation> {
    scan_script(text, fps).into_annotations()
}

fn candidate_line(raw: &str, style: LineStyle) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    match style {
        LineStyle::Plain => Some(raw),
        LineStyle::Bulleted => {
            let unbulleted = trimmed.strip_prefix("- ").map_or(trimmed, str::trim_start);
            (!unbulleted.is_empty()).then_some(unbulleted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorcast_script_model::annotation::AnnotationKind;

    const SCRIPT: &str = r#"# Setup section

Open the settings page first.
0:05 arrow (1200, 300) "Click here"
0:07 sparkle (1, 2)
  - 0:10 highlight (100, 200, 400, 50)

0:03 cursor (10, 20)
"#;

    #[test]
    fn test_scan_keeps_script_order() {
        let annotations = scan_script_with(SCRIPT, 30, LineStyle::Bulleted).into_annotations();
        let kinds: Vec<AnnotationKind> = annotations.iter().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            [
                AnnotationKind::Arrow,
                AnnotationKind::Highlight,
                AnnotationKind::Cursor
            ]
        );
        // Not sorted by start frame.
        assert_eq!(annotations[2].start_frame, 90);
    }

    #[test]
    fn test_scan_reports_rejected_lines_with_numbers() {
        let scan = scan_script_with(SCRIPT, 30, LineStyle::Bulleted);
        assert!(!scan.is_clean());
        assert_eq!(
            scan.rejected,
            vec![
                RejectedLine {
                    line: 3,
                    text: "Open the settings page first.".to_string()
                },
                RejectedLine {
                    line: 5,
                    text: "0:07 sparkle (1, 2)".to_string()
                },
            ]
        );
        let lines: Vec<usize> = scan.annotations.iter().map(|s| s.line).collect();
        assert_eq!(lines, [4, 6, 8]);
    }

    #[test]
    fn test_empty_script() {
        let scan = scan_script("", 30);
        assert!(scan.is_clean());
        assert!(scan.annotations.is_empty());
    }

    #[test]
    fn test_lone_dash_is_rejected() {
        let scan = scan_script_with("-\n- \n", 30, LineStyle::Bulleted);
        assert_eq!(scan.rejected.len(), 2);
        assert!(scan.rejected.iter().all(|r| r.text == "-"));
    }

    #[test]
    fn test_crlf_lines() {
        let annotations = parse_script("0:01 cursor (1, 2)\r\n0:02 zoom (3, 4)\r\n", 30);
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[1].kind(), AnnotationKind::Zoom);
    }

    #[test]
    fn test_plain_scan_accepts_exactly_what_the_parser_accepts() {
        let scan = scan_script(SCRIPT, 30);
        let lines: Vec<usize> = scan.annotations.iter().map(|s| s.line).collect();
        assert_eq!(lines, [4, 8]);
        assert!(scan
            .rejected
            .iter()
            .any(|r| r.line == 6 && r.text == "  - 0:10 highlight (100, 200, 400, 50)"));

        for (idx, raw) in SCRIPT.lines().enumerate() {
            let accepted = scan.annotations.iter().any(|s| s.line == idx + 1);
            assert_eq!(accepted, parse_annotation(raw, 30).is_some(), "line {}", idx + 1);
        }
    }

    #[test]
    fn test_indented_line_needs_bulleted_style() {
        let text = "  0:01 arrow (1,2)\n";
        assert!(parse_script(text, 30).is_empty());
        assert_eq!(
            scan_script_with(text, 30, LineStyle::Bulleted).annotations.len(),
            1
        );
    }
}
