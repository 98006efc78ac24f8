use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{self, SpecDocument};
use crate::error::ExportError;

/// MIME type of exported files.
pub const JSON_MIME: &str = "application/json";

/// Suffix appended to the slugified title to form the download name.
pub const FILE_SUFFIX: &str = "-openapi-spec.json";

/// Name used when the document has no usable title.
pub const FALLBACK_NAME: &str = "api";

/// Serialize the document as two-space indented JSON.
pub fn to_pretty_json(doc: &SpecDocument) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// File name for a download: `{slugified-title}-openapi-spec.json`.
pub fn download_file_name(doc: &SpecDocument) -> String {
    let slug = doc.title().map(slugify).unwrap_or_default();
    let stem = if slug.is_empty() {
        FALLBACK_NAME
    } else {
        slug.as_str()
    };
    format!("{stem}{FILE_SUFFIX}")
}

/// Write the document into `dir`, creating the directory if needed.
pub fn download(doc: &SpecDocument, dir: &Path) -> Result<PathBuf, ExportError> {
    let json = to_pretty_json(doc)?;
    fs::create_dir_all(dir).map_err(|source| ExportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(download_file_name(doc));
    fs::write(&path, json).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {} ({JSON_MIME})", path.display());
    Ok(path)
}

/// Load a previously exported document.
pub fn load(path: &Path) -> Result<SpecDocument, ExportError> {
    let content = fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    document::from_json(&content).map_err(|source| ExportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert a title to a lower-case, dash-separated file name stem.
pub fn slugify(title: &str) -> String {
    let mut result = String::new();
    let mut prev_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            prev_dash = false;
        } else if !prev_dash && !result.is_empty() {
            result.push('-');
            prev_dash = true;
        }
    }

    result.trim_end_matches('-').to_string()
}
