//! Validate an annotation script.

use std::path::PathBuf;

use tutorcast_script_parser::{scan_script_with, validate_script, LineStyle};

use super::read_input;

pub fn run(
    path: PathBuf,
    fps: u32,
    strict: bool,
    display_frames: u32,
    style: LineStyle,
) -> anyhow::Result<()> {
    println!("Validating script at: {}", path.display());

    let content = read_input(&path)?;
    let scan = scan_script_with(&content, fps, style);

    println!("  FPS: {fps}");
    println!("  Annotations: {}", scan.annotations.len());
    for scanned in &scan.annotations {
        let a = &scanned.annotation;
        let window = match a.end_frame(display_frames) {
            Some(end) => format!("frames {}..{}", a.start_frame, end),
            None => format!("frames {}..", a.start_frame),
        };
        println!(
            "    line {:>4}: {:<9} at {:>8} ({window})",
            scanned.line,
            a.kind(),
            a.timestamp.to_string()
        );
    }

    if !scan.rejected.is_empty() {
        println!("\nSkipped lines:");
        for rejected in &scan.rejected {
            println!("  - line {}: {}", rejected.line, rejected.text);
        }
    }

    let reports = validate_script(&scan.annotations);
    if reports.is_empty() {
        println!("\nAll values in range.");
        return Ok(());
    }

    println!("\nRange issues:");
    let mut count = 0;
    for report in &reports {
        for issue in &report.issues {
            println!("  - line {} ({}): {issue}", report.line, report.kind);
            count += 1;
        }
    }

    if strict {
        return Err(tutorcast_common::TutorcastError::validation(format!(
            "{count} range issue(s) in {}",
            path.display()
        ))
        .into());
    }

    println!("\n{count} issue(s) found. Annotations were still parsed.");
    Ok(())
}
