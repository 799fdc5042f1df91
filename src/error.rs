//! Rich diagnostic error types for atomgraph.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text so users know exactly what
//! went wrong and how to fix it. Missing record fields are not errors at
//! all: the encoder skips them by design.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for atomgraph.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text, source chains) through to the
/// user.
#[derive(Debug, Error, Diagnostic)]
pub enum AtomgraphError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("I/O error: {source}")]
    #[diagnostic(
        code(atomgraph::store::io),
        help(
            "A filesystem operation failed. Check that the target directory \
             exists, has correct permissions, and that the disk is not full."
        )
    )]
    Io {
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {message}")]
    #[diagnostic(
        code(atomgraph::store::serde),
        help(
            "Failed to serialize or deserialize the triple interchange \
             format. The file may have been written by an incompatible \
             version or truncated."
        )
    )]
    Serialization { message: String },
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("SPARQL store error: {message}")]
    #[diagnostic(
        code(atomgraph::graph::sparql),
        help(
            "The SPARQL layer failed. Check the query syntax and ensure the \
             oxigraph store is initialized."
        )
    )]
    Sparql { message: String },

    #[error("invalid term for the SPARQL layer: {term}")]
    #[diagnostic(
        code(atomgraph::graph::invalid_term),
        help(
            "The term could not be converted into an RDF term. Named nodes \
             must carry absolute IRIs and blank labels must be valid \
             blank-node identifiers."
        )
    )]
    InvalidTerm { term: String },
}

// ---------------------------------------------------------------------------
// Encode errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum EncodeError {
    #[error("sample identity collision: a sample named {index}_Sample already exists")]
    #[diagnostic(
        code(atomgraph::encode::identity_collision),
        help(
            "Deterministic names are prefixed by the caller-supplied sample \
             index, and this index is already in use in the target store. \
             Pick a fresh index (e.g. via SampleGraph::next_sample_index) or \
             encode anonymously."
        )
    )]
    IdentityCollision { index: String },

    #[error("sample {sample} has no material node")]
    #[diagnostic(
        code(atomgraph::encode::material_not_found),
        help(
            "Defect annotations attach to the material of an already-encoded \
             sample. Encode the structure first, then annotate the returned \
             sample node."
        )
    )]
    MaterialNotFound { sample: String },
}

// ---------------------------------------------------------------------------
// Decode errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum DecodeError {
    #[error("missing edge: {subject} has no {predicate}")]
    #[diagnostic(
        code(atomgraph::decode::missing_edge),
        help(
            "A schema edge required to rebuild the structure is absent from \
             the store. The sample was either encoded from a partial record \
             or the store was truncated."
        )
    )]
    MissingEdge { subject: String, predicate: String },

    #[error("malformed literal on {subject}: {lexical:?} is not a valid {expected}")]
    #[diagnostic(
        code(atomgraph::decode::malformed_literal),
        help(
            "A literal in the store does not parse as the datatype the \
             schema expects. The store was likely produced by a foreign \
             encoder or edited by hand."
        )
    )]
    MalformedLiteral {
        subject: String,
        lexical: String,
        expected: &'static str,
    },

    #[error("simulation cell has {found} basis vectors, expected 3")]
    #[diagnostic(
        code(atomgraph::decode::cell_vector_count),
        help(
            "A simulation cell must carry exactly three basis vectors to \
             form a 3x3 cell matrix."
        )
    )]
    CellVectorCount { found: usize },
}

/// Convenience alias for functions returning atomgraph results.
pub type AtomgraphResult<T> = std::result::Result<T, AtomgraphError>;
