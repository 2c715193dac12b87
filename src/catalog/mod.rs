//! Chain image catalog
//!
//! Holds the images loaded at startup as base64 data URIs. The catalog is
//! built once before the server accepts connections and is never mutated
//! afterwards, so request handlers can read it without locking.

mod loader;

pub use loader::scan;

use serde::Serialize;

/// A single loaded chain image.
///
/// `name` is the filename without its extension; `data_uri` is the full
/// `data:<mime>;base64,<payload>` string ready for an `<img src>`.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRecord {
    pub name: String,
    #[serde(rename = "data")]
    pub data_uri: String,
}

/// Ordered collection of chain images plus the parallel name list.
///
/// Records are kept in filename sort order. The name list always mirrors
/// the record list; `push` is the only way to grow either.
#[derive(Debug, Default)]
pub struct ImageCatalog {
    records: Vec<ImageRecord>,
    names: Vec<String>,
}

impl ImageCatalog {
    pub fn push(&mut self, record: ImageRecord) {
        self.names.push(record.name.clone());
        self.records.push(record);
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
