//! Startup catalog loader
//!
//! Scans the chain image directory once, encoding every recognized image as
//! a data URI. Individual unreadable files are skipped so that one bad file
//! never aborts the whole scan; a missing directory yields an empty catalog.

use super::{ImageCatalog, ImageRecord};
use crate::logger;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

/// Build the image catalog from `dir`.
///
/// Entries are visited in lexicographic filename order. Only regular files
/// with a `.png`, `.jpg` or `.jpeg` extension (case-insensitive) are loaded.
/// Never fails: every error path degrades to skipping the file or returning
/// an empty catalog.
pub fn scan(dir: &Path, create_missing: bool) -> ImageCatalog {
    let mut catalog = ImageCatalog::default();

    if !dir.is_dir() {
        if create_missing {
            match fs::create_dir_all(dir) {
                Ok(()) => logger::log_warning(&format!(
                    "Chain directory '{}' was missing, created empty",
                    dir.display()
                )),
                Err(e) => logger::log_error(&format!(
                    "Failed to create chain directory '{}': {e}",
                    dir.display()
                )),
            }
        } else {
            logger::log_warning(&format!(
                "Chain directory '{}' not found, starting with empty catalog",
                dir.display()
            ));
        }
        return catalog;
    }

    let entries = match fs::read_dir(dir) {
        Ok(iter) => {
            let mut paths: Vec<_> = iter.filter_map(Result::ok).map(|e| e.path()).collect();
            paths.sort_by_key(|p| p.file_name().map(std::ffi::OsStr::to_os_string));
            paths
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read chain directory '{}': {e}",
                dir.display()
            ));
            return catalog;
        }
    };

    for path in entries {
        if !path.is_file() {
            continue;
        }
        let Some(mime) = image_mime(&path) else {
            continue;
        };
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            logger::log_warning(&format!(
                "Skipping image with non-UTF-8 filename '{}'",
                path.display()
            ));
            continue;
        };

        match fs::read(&path) {
            Ok(bytes) => {
                catalog.push(ImageRecord {
                    name: name.to_string(),
                    data_uri: encode_data_uri(mime, &bytes),
                });
            }
            Err(e) => {
                logger::log_warning(&format!(
                    "Skipping unreadable image '{}': {e}",
                    path.display()
                ));
            }
        }
    }

    catalog
}

/// MIME type for a recognized image path, `None` for anything else.
fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Wrap raw bytes as a base64 data URI.
fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
