//! Render command implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::{debug, info};

use ketbook_display::{ImageAsset, MimeBundleRepr};

/// Execute the render command.
///
/// Writes the display bundle of `input` as JSON to `output`, or to stdout
/// when no output path is given.
pub fn execute(input: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let asset = ImageAsset::open(input)
        .with_context(|| format!("failed to load image asset from {}", input.display()))?;
    info!(input = %input.display(), bytes = asset.len(), "rendering display bundle");

    let bundle = asset.mime_bundle_repr();
    let mut json = bundle.to_json_string(pretty);
    json.push('\n');
    debug!(encoded_len = json.len(), "encoded bundle");

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("failed to write bundle to {}", path.display()))?;
            eprintln!(
                "{} Wrote {} ({} bytes)",
                style("✓").green().bold(),
                style(path.display()).green(),
                json.len()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("failed to write bundle to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }

    Ok(())
}
