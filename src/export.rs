//! Triple interchange formats.
//!
//! Two serializations of a store: a JSON triple list (the crate's own
//! round-trip format) and line-based N-Triples for interoperability with
//! other RDF tooling. N-Triples output is write-only; restoring a store
//! goes through the JSON format.

use std::path::Path;

use crate::error::{AtomgraphResult, StoreError};
use crate::graph::Triple;
use crate::graph::store::TripleStore;

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON triple list; round-trips through [`from_json`].
    Json,
    /// Line-based N-Triples.
    NTriples,
}

/// Serialize the store as a JSON triple list.
pub fn to_json(store: &TripleStore) -> AtomgraphResult<String> {
    serde_json::to_string_pretty(&store.all_triples()).map_err(|e| {
        StoreError::Serialization {
            message: format!("failed to serialize triples: {e}"),
        }
        .into()
    })
}

/// Rebuild a store from a JSON triple list.
pub fn from_json(json: &str) -> AtomgraphResult<TripleStore> {
    let triples: Vec<Triple> = serde_json::from_str(json).map_err(|e| StoreError::Serialization {
        message: format!("failed to parse triples: {e}"),
    })?;
    let store = TripleStore::new();
    for triple in triples {
        store.insert(triple);
    }
    Ok(store)
}

/// Serialize the store as N-Triples text.
pub fn to_ntriples(store: &TripleStore) -> String {
    let mut out = String::new();
    for triple in store.all_triples() {
        out.push_str(&triple.to_string());
        out.push('\n');
    }
    out
}

/// Write the store to a file in the given format.
pub fn write_file(store: &TripleStore, path: &Path, format: ExportFormat) -> AtomgraphResult<()> {
    let text = match format {
        ExportFormat::Json => to_json(store)?,
        ExportFormat::NTriples => to_ntriples(store),
    };
    std::fs::write(path, text).map_err(|source| StoreError::Io { source })?;
    Ok(())
}

/// Read a store back from a JSON file written by [`write_file`].
pub fn read_json_file(path: &Path) -> AtomgraphResult<TripleStore> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io { source })?;
    from_json(&text)
}
