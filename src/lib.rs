// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # atomgraph
//!
//! Ontology-backed knowledge graphs for atomic-scale material samples.
//!
//! Structure records are encoded into a triple store following a fixed
//! hierarchical schema (CMSO for the sample hierarchy, PLDO/PODO for
//! defects), and decoded back into structural records from any sample
//! entry node.
//!
//! ## Architecture
//!
//! - **Triple model** (`graph`): blank/named/literal nodes, in-memory store,
//!   subgraph extraction
//! - **Schema codec** (`schema`): record → triples encoder, triples → record
//!   decoder
//! - **SPARQL layer** (`graph::sparql`): oxigraph-backed query execution
//! - **Facade** (`sample`): [`sample::SampleGraph`] ties the layers together
//!
//! ## Library usage
//!
//! ```no_run
//! use atomgraph::record::{AtomRecord, StructureRecord};
//! use atomgraph::sample::SampleGraph;
//! use atomgraph::schema::encode::IdentityMode;
//!
//! let graph = SampleGraph::new().unwrap();
//! let record = StructureRecord {
//!     cell_vectors: Some([[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]]),
//!     cell_volume: Some(27.0),
//!     atoms: vec![AtomRecord {
//!         position: [0.5, 0.5, 0.5],
//!         species: Some("Al".into()),
//!         coordination: Some(12),
//!     }],
//!     ..Default::default()
//! };
//! let mode = IdentityMode::Named { index: graph.next_sample_index() };
//! let sample = graph.add_structure(&record, &mode).unwrap();
//! let structure = graph.to_structure(&sample).unwrap();
//! assert_eq!(structure.atoms[0].species, "Al");
//! ```

pub mod error;
pub mod export;
pub mod graph;
pub mod record;
pub mod sample;
pub mod schema;
pub mod vocab;
