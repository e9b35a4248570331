use anyhow::{Context, Result};
use std::{fs::File, io::Write, path::Path};

use lrkit_engine::config::Delimiter;

/// Check that `path` is a readable data file for the given delimiter setting.
///
/// `Delimiter::Auto` infers the separator from the extension, so the file
/// must then end in `.csv` or `.tsv`. An explicit delimiter accepts any name.
pub fn validate_data_file(path: &str, delimiter: Delimiter) -> Result<()> {
    let path = Path::new(path);
    if delimiter == Delimiter::Auto {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());
        if !matches!(ext.as_deref(), Some("csv") | Some("tsv")) {
            anyhow::bail!(
                "Cannot infer the delimiter of {}; use a .csv/.tsv file or pass --delimiter",
                path.display()
            );
        }
    }
    if !path.is_file() {
        anyhow::bail!("File does not exist: {}", path.display());
    }
    Ok(())
}

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_text_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(text.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
