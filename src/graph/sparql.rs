//! SPARQL layer backed by oxigraph.
//!
//! Query formulation is an external concern: callers hand this layer a
//! ready-to-execute query string and get the result rows back unmodified.
//! The in-memory [`TripleStore`] is synced into the oxigraph store, which
//! can optionally live on disk for durability.

use oxigraph::model::{BlankNode, GraphNameRef, Literal, NamedNode, Quad, Term};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;

use crate::error::GraphError;
use crate::graph::{Node, Triple};

use super::store::TripleStore;

/// Result type for SPARQL-layer operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// SPARQL-capable store for query execution.
pub struct SparqlStore {
    store: Store,
}

impl SparqlStore {
    /// Create a new in-memory SPARQL store (no persistence).
    pub fn in_memory() -> GraphResult<Self> {
        let store = Store::new().map_err(|e| GraphError::Sparql {
            message: format!("failed to create oxigraph store: {e}"),
        })?;
        Ok(Self { store })
    }

    /// Open or create a persistent SPARQL store at the given path.
    pub fn open(path: &std::path::Path) -> GraphResult<Self> {
        std::fs::create_dir_all(path).map_err(|e| GraphError::Sparql {
            message: format!("failed to create oxigraph directory: {e}"),
        })?;
        let store = Store::open(path).map_err(|e| GraphError::Sparql {
            message: format!("failed to open oxigraph store at {}: {e}", path.display()),
        })?;
        Ok(Self { store })
    }

    fn node_to_term(node: &Node) -> GraphResult<Term> {
        match node {
            Node::Named(iri) => {
                let named = NamedNode::new(iri.clone()).map_err(|_| GraphError::InvalidTerm {
                    term: node.to_string(),
                })?;
                Ok(named.into())
            }
            Node::Blank(label) => {
                let blank = BlankNode::new(label.clone()).map_err(|_| GraphError::InvalidTerm {
                    term: node.to_string(),
                })?;
                Ok(blank.into())
            }
            Node::Literal(lit) => {
                let datatype =
                    NamedNode::new(lit.datatype().iri()).map_err(|_| GraphError::InvalidTerm {
                        term: node.to_string(),
                    })?;
                Ok(Literal::new_typed_literal(lit.lexical(), datatype).into())
            }
        }
    }

    /// Insert a triple into the SPARQL store.
    pub fn insert_triple(&self, triple: &Triple) -> GraphResult<()> {
        let predicate =
            NamedNode::new(triple.predicate.clone()).map_err(|_| GraphError::InvalidTerm {
                term: triple.predicate.clone(),
            })?;
        let object = Self::node_to_term(&triple.object)?;

        // Literals cannot be subjects; the match enforces it.
        let quad = match Self::node_to_term(&triple.subject)? {
            Term::NamedNode(n) => Quad::new(n, predicate, object, GraphNameRef::DefaultGraph),
            Term::BlankNode(b) => Quad::new(b, predicate, object, GraphNameRef::DefaultGraph),
            _ => {
                return Err(GraphError::InvalidTerm {
                    term: triple.subject.to_string(),
                });
            }
        };

        self.store.insert(&quad).map_err(|e| GraphError::Sparql {
            message: format!("insert failed: {e}"),
        })?;

        Ok(())
    }

    /// Sync all triples from an in-memory store.
    ///
    /// The oxigraph store has set semantics, so re-syncing after new
    /// insertions is idempotent for triples already present.
    pub fn sync_from(&self, store: &TripleStore) -> GraphResult<usize> {
        let triples = store.all_triples();
        let count = triples.len();
        for triple in &triples {
            self.insert_triple(triple)?;
        }
        Ok(count)
    }

    /// Execute a SPARQL SELECT query and return rows of (variable, term)
    /// bindings, unmodified.
    pub fn query_select(&self, sparql: &str) -> GraphResult<Vec<Vec<(String, String)>>> {
        let results = self.store.query(sparql).map_err(|e| GraphError::Sparql {
            message: format!("SPARQL query failed: {e}"),
        })?;

        match results {
            QueryResults::Solutions(solutions) => {
                let mut rows = Vec::new();
                for solution in solutions {
                    let solution = solution.map_err(|e| GraphError::Sparql {
                        message: format!("solution error: {e}"),
                    })?;
                    let mut row = Vec::new();
                    for (var, term) in solution.iter() {
                        row.push((var.to_string(), term.to_string()));
                    }
                    rows.push(row);
                }
                Ok(rows)
            }
            QueryResults::Boolean(b) => Ok(vec![vec![("result".to_string(), b.to_string())]]),
            QueryResults::Graph(_) => Err(GraphError::Sparql {
                message: "CONSTRUCT/DESCRIBE queries not supported via query_select".into(),
            }),
        }
    }

    /// Execute a SPARQL ASK query.
    pub fn query_ask(&self, sparql: &str) -> GraphResult<bool> {
        let results = self.store.query(sparql).map_err(|e| GraphError::Sparql {
            message: format!("SPARQL query failed: {e}"),
        })?;
        match results {
            QueryResults::Boolean(b) => Ok(b),
            _ => Err(GraphError::Sparql {
                message: "expected boolean result from ASK query".into(),
            }),
        }
    }
}

impl std::fmt::Debug for SparqlStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparqlStore").finish()
    }
}
