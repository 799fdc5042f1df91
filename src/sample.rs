//! Sample graph facade: top-level API for annotating and querying samples.
//!
//! A [`SampleGraph`] owns the in-memory triple store, the blank-node
//! allocator scoped to it, and the SPARQL layer. Encoding, defect
//! annotation, extraction, and decoding all go through this facade; the
//! SPARQL layer is kept in sync after every mutation.

use std::path::PathBuf;

use tracing::info;

use crate::error::AtomgraphResult;
use crate::export::{self, ExportFormat};
use crate::graph::sparql::SparqlStore;
use crate::graph::store::TripleStore;
use crate::graph::traverse::extract_subgraph;
use crate::graph::{BlankAllocator, Node};
use crate::record::{DecodedStructure, GrainBoundaryRecord, StructureRecord, VacancyRecord};
use crate::schema::decode;
use crate::schema::encode::{self, IdentityMode};
use crate::vocab::{RDF_TYPE, cmso};

/// Configuration for a sample graph.
#[derive(Debug, Clone, Default)]
pub struct SampleGraphConfig {
    /// Directory for the persistent SPARQL layer. `None` for memory-only.
    pub data_dir: Option<PathBuf>,
}

/// A triple store of annotated atomic-scale samples.
///
/// One store may hold many independent samples. Writers must be serialized
/// by the caller: encode and annotate calls are single-writer operations,
/// while extraction and decoding are read-only.
pub struct SampleGraph {
    store: TripleStore,
    sparql: SparqlStore,
    alloc: BlankAllocator,
}

impl SampleGraph {
    /// Create a new empty in-memory sample graph.
    pub fn new() -> AtomgraphResult<Self> {
        Self::with_config(SampleGraphConfig::default())
    }

    /// Create a sample graph with the given configuration.
    pub fn with_config(config: SampleGraphConfig) -> AtomgraphResult<Self> {
        let sparql = match &config.data_dir {
            Some(dir) => SparqlStore::open(&dir.join("oxigraph"))?,
            None => SparqlStore::in_memory()?,
        };
        info!(
            persistent = config.data_dir.is_some(),
            "initializing sample graph"
        );
        Ok(Self {
            store: TripleStore::new(),
            sparql,
            alloc: BlankAllocator::new(),
        })
    }

    /// Restore a sample graph from a JSON file written by [`Self::write`].
    ///
    /// The blank-node allocator resumes past every label it allocated in the
    /// previous session, so further anonymous encoding cannot collide.
    pub fn load(path: &std::path::Path) -> AtomgraphResult<Self> {
        let store = export::read_json_file(path)?;
        let next = store
            .nodes()
            .iter()
            .filter_map(|n| n.as_blank()?.strip_prefix('b')?.parse::<u64>().ok())
            .max()
            .map_or(0, |max| max + 1);

        let sparql = SparqlStore::in_memory()?;
        sparql.sync_from(&store)?;

        info!(triples = store.len(), "restored sample graph");
        Ok(Self {
            store,
            sparql,
            alloc: BlankAllocator::starting_from(next),
        })
    }

    /// Encode a structure record into the graph.
    ///
    /// Returns the sample node for chaining defect annotations.
    pub fn add_structure(
        &self,
        record: &StructureRecord,
        mode: &IdentityMode,
    ) -> AtomgraphResult<Node> {
        let sample = encode::encode_structure(&self.store, &self.alloc, record, mode)?;
        self.sparql.sync_from(&self.store)?;
        Ok(sample)
    }

    /// Annotate an encoded sample with a grain boundary. Returns the defect node.
    pub fn add_grain_boundary(
        &self,
        sample: &Node,
        gb: &GrainBoundaryRecord,
        mode: &IdentityMode,
    ) -> AtomgraphResult<Node> {
        let defect = encode::annotate_grain_boundary(&self.store, &self.alloc, sample, gb, mode)?;
        self.sparql.sync_from(&self.store)?;
        Ok(defect)
    }

    /// Annotate an encoded sample with a vacancy. Returns the defect node.
    pub fn add_vacancy(
        &self,
        sample: &Node,
        vacancy: &VacancyRecord,
        mode: &IdentityMode,
    ) -> AtomgraphResult<Node> {
        let defect = encode::annotate_vacancy(&self.store, &self.alloc, sample, vacancy, mode)?;
        self.sparql.sync_from(&self.store)?;
        Ok(defect)
    }

    /// All sample nodes in the graph.
    pub fn samples(&self) -> Vec<Node> {
        self.store
            .subjects_of(RDF_TYPE, &Node::named(cmso::ATOMIC_SCALE_SAMPLE))
    }

    /// Number of samples in the graph.
    pub fn n_samples(&self) -> usize {
        self.samples().len()
    }

    /// The next free two-digit sample index for named encoding.
    pub fn next_sample_index(&self) -> String {
        format!("{:02}", self.n_samples() + 1)
    }

    /// Extract the closed subgraph of one sample into a fresh store.
    pub fn get_sample(&self, sample: &Node) -> TripleStore {
        extract_subgraph(&self.store, sample)
    }

    /// Read a sample's stored atom count without walking its atoms.
    pub fn atom_count(&self, sample: &Node) -> AtomgraphResult<i64> {
        Ok(decode::atom_count(&self.store, sample)?)
    }

    /// Rebuild the structural record of a sample.
    pub fn to_structure(&self, sample: &Node) -> AtomgraphResult<DecodedStructure> {
        Ok(decode::decode_structure(&self.store, sample)?)
    }

    /// Execute a ready-made SPARQL SELECT query against the graph.
    ///
    /// Query formulation is the caller's concern; rows are returned
    /// unmodified.
    pub fn query(&self, sparql: &str) -> AtomgraphResult<Vec<Vec<(String, String)>>> {
        Ok(self.sparql.query_select(sparql)?)
    }

    /// Serialize the graph to a file.
    pub fn write(&self, path: &std::path::Path, format: ExportFormat) -> AtomgraphResult<()> {
        export::write_file(&self.store, path, format)
    }

    /// The underlying triple store.
    pub fn store(&self) -> &TripleStore {
        &self.store
    }

    /// Number of triples in the graph.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl std::fmt::Debug for SampleGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleGraph")
            .field("samples", &self.n_samples())
            .field("triples", &self.len())
            .finish()
    }
}
