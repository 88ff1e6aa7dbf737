pub mod config;
pub mod outline;
pub mod parse;
pub mod validate;

use std::path::Path;

/// Read an input file with a CLI-friendly error.
pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
    tutorcast_common::read_text_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))
}
