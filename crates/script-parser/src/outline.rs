//! Tutorial outline extraction.
//!
//! Reads the markdown outline a tutorial is planned in:
//!
//! ```text
//! # How to Use the Search Feature
//!
//! ## Target Audience
//! New users who have never opened the app.
//!
//! ### 02_setup
//! - Asset: setup.mp4 (30s)
//! - Points:
//!   - Open settings
//! - Annotations:
//!   - 0:05 arrow (1200, 300) "Click here"
//! ```
//!
//! Chapter durations come only from the `(<N>s)` marker on the asset line;
//! media files are never probed.

use std::sync::LazyLock;

use regex::Regex;
use tutorcast_script_model::outline::{Chapter, Outline};

use crate::parser::parse_annotation;

const DEFAULT_TITLE: &str = "Tutorial";

static CHAPTER_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^### ([0-9]+_\w+)$").expect("valid regex"));

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9]+)s\)").expect("valid regex"));

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+- (.+)$").expect("valid regex"));

/// Parse an outline document. Missing sections fall back to defaults, so
/// this never fails.
pub fn parse_outline(markdown: &str) -> Outline {
    let lines: Vec<&str> = markdown.lines().map(str::trim_end).collect();

    let title = lines
        .iter()
        .find_map(|l| l.strip_prefix("# ").filter(|t| !t.is_empty()))
        .unwrap_or(DEFAULT_TITLE);

    let chapters = chapter_blocks(&lines)
        .into_iter()
        .map(|(name, body)| parse_chapter(name, body))
        .collect();

    Outline::new(title, audience(&lines), chapters)
}

/// Parse every chapter's raw annotation lines at the given frame rate and
/// attach the records to the chapter.
pub fn resolve_annotations(outline: &mut Outline, fps: u32) {
    for chapter in &mut outline.chapters {
        let parsed: Vec<_> = chapter
            .annotations
            .iter()
            .filter_map(|line| {
                let annotation = parse_annotation(line, fps);
                if annotation.is_none() {
                    tracing::debug!(chapter = %chapter.name, line = %line, "Unparseable chapter annotation");
                }
                annotation
            })
            .collect();
        chapter.parsed_annotations = Some(parsed);
    }
}

fn audience(lines: &[&str]) -> String {
    let Some(start) = lines.iter().position(|l| l.trim() == "## Target Audience") else {
        return String::new();
    };
    lines[start + 1..]
        .iter()
        .take_while(|l| !l.starts_with('#'))
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Split the document into `(chapter name, body lines)` pairs.
///
/// Any `### ` heading ends the current chapter; only headings shaped like
/// `### 01_intro` start a new one.
fn chapter_blocks<'a>(lines: &[&'a str]) -> Vec<(&'a str, Vec<&'a str>)> {
    let mut blocks = vec![];
    let mut current: Option<(&'a str, Vec<&'a str>)> = None;

    for &line in lines {
        if line.starts_with("### ") {
            blocks.extend(current.take());
            current = CHAPTER_HEADING_RE
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|name| (name.as_str(), vec![]));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    blocks.extend(current);
    blocks
}

fn parse_chapter(name: &str, body: Vec<&str>) -> Chapter {
    let asset_line = body
        .iter()
        .find_map(|l| l.split_once("- Asset: ").map(|(_, rest)| rest.trim()))
        .filter(|a| !a.is_empty() && *a != "none");

    let asset = asset_line
        .and_then(|a| a.split_whitespace().next())
        .map(str::to_string);

    let duration_secs = asset_line
        .and_then(|a| DURATION_RE.captures(a))
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);

    let points = list_section(&body, "- Points:");
    let annotations = list_section(&body, "- Annotations:")
        .into_iter()
        .map(|item| item.trim().to_string())
        .collect();

    Chapter::new(name, asset, duration_secs, points, annotations)
}

/// Indented `- ` items directly under the first line equal to `header`.
fn list_section(body: &[&str], header: &str) -> Vec<String> {
    let Some(start) = body.iter().position(|l| l.trim() == header) else {
        return vec![];
    };
    body[start + 1..]
        .iter()
        .map_while(|l| LIST_ITEM_RE.captures(l).map(|caps| caps[1].to_string()))
        .collect()
}
