//! Extract a tutorial outline to JSON.

use std::path::PathBuf;

use tutorcast_script_parser::{parse_outline, resolve_annotations};

use super::read_input;

pub fn run(path: PathBuf, fps: u32, with_annotations: bool) -> anyhow::Result<()> {
    let content = read_input(&path)?;
    let mut outline = parse_outline(&content);

    if with_annotations {
        resolve_annotations(&mut outline, fps);
    }

    tracing::info!(
        title = %outline.title,
        chapters = outline.chapters.len(),
        total_duration_secs = outline.total_duration_secs,
        "Extracted outline"
    );

    println!("{}", serde_json::to_string_pretty(&outline)?);
    Ok(())
}
