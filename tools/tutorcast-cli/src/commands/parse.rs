//! Parse an annotation script to JSON.

use std::path::PathBuf;

use tutorcast_script_parser::{scan_script_with, LineStyle};

use super::read_input;

pub fn run(
    path: PathBuf,
    fps: u32,
    output: Option<PathBuf>,
    pretty: bool,
    style: LineStyle,
) -> anyhow::Result<()> {
    let content = read_input(&path)?;
    let scan = scan_script_with(&content, fps, style);

    tracing::info!(
        path = %path.display(),
        fps,
        annotations = scan.annotations.len(),
        skipped = scan.rejected.len(),
        "Parsed script"
    );

    let annotations = scan.into_annotations();
    let json = if pretty {
        serde_json::to_string_pretty(&annotations)?
    } else {
        serde_json::to_string(&annotations)?
    };

    match output {
        Some(out) => {
            std::fs::write(&out, json)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", out.display()))?;
            println!("Wrote {} annotation(s) to {}", annotations.len(), out.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
