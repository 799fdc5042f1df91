//! In-memory triple store with dual-indexing.
//!
//! Uses `petgraph` for the graph structure and `DashMap` for fast lookups
//! by node or predicate. The store has set semantics: inserting a triple
//! that is already present is a no-op.

use std::sync::RwLock;

use dashmap::DashMap;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::{Node, Triple};

/// Predicate data stored on petgraph edges.
#[derive(Debug, Clone)]
struct EdgeData {
    predicate: String,
}

/// In-memory triple store backed by petgraph with dual-indexing.
///
/// Nodes are [`Node`] values (blank, named, or literal); edges carry the
/// predicate IRI. Identical literals unify into a single graph node, which
/// gives literals value identity. Enumeration methods return triples in
/// insertion order, so repeated enumeration of an unmodified store is
/// deterministic.
pub struct TripleStore {
    /// The directed graph: nodes are terms, edges carry predicates.
    graph: RwLock<DiGraph<Node, EdgeData>>,
    /// Node → NodeIndex mapping for O(1) lookups.
    node_index: DashMap<Node, NodeIndex>,
    /// Predicate IRI → list of (subject, object) pairs.
    predicate_index: DashMap<String, Vec<(Node, Node)>>,
    /// Triple count.
    triple_count: std::sync::atomic::AtomicUsize,
}

impl TripleStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            graph: RwLock::new(DiGraph::new()),
            node_index: DashMap::new(),
            predicate_index: DashMap::new(),
            triple_count: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Ensure a graph node exists for the given term, returning its index.
    fn ensure_node(&self, node: &Node) -> NodeIndex {
        if let Some(idx) = self.node_index.get(node) {
            return *idx.value();
        }
        let mut graph = self.graph.write().expect("graph lock poisoned");
        // Double-check after acquiring write lock
        if let Some(idx) = self.node_index.get(node) {
            return *idx.value();
        }
        let idx = graph.add_node(node.clone());
        self.node_index.insert(node.clone(), idx);
        idx
    }

    /// Insert a triple. Returns `false` if the triple was already present.
    pub fn insert(&self, triple: Triple) -> bool {
        if self.contains(&triple) {
            return false;
        }
        let subj_idx = self.ensure_node(&triple.subject);
        let obj_idx = self.ensure_node(&triple.object);

        {
            let mut graph = self.graph.write().expect("graph lock poisoned");
            graph.add_edge(
                subj_idx,
                obj_idx,
                EdgeData {
                    predicate: triple.predicate.clone(),
                },
            );
        }

        self.predicate_index
            .entry(triple.predicate)
            .or_default()
            .push((triple.subject, triple.object));

        self.triple_count
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);

        true
    }

    /// Whether the exact triple is present.
    pub fn contains(&self, triple: &Triple) -> bool {
        let (subj_idx, obj_idx) = match (
            self.node_index.get(&triple.subject),
            self.node_index.get(&triple.object),
        ) {
            (Some(s), Some(o)) => (*s.value(), *o.value()),
            _ => return false,
        };
        let graph = self.graph.read().expect("graph lock poisoned");
        graph
            .edges_connecting(subj_idx, obj_idx)
            .any(|e| e.weight().predicate == triple.predicate)
    }

    /// First object for a given (subject, predicate) pair, in enumeration order.
    pub fn value(&self, subject: &Node, predicate: &str) -> Option<Node> {
        self.objects_of(subject, predicate).into_iter().next()
    }

    /// All objects for a given subject and predicate, in insertion order.
    pub fn objects_of(&self, subject: &Node, predicate: &str) -> Vec<Node> {
        let graph = self.graph.read().expect("graph lock poisoned");
        let subj_idx = match self.node_index.get(subject) {
            Some(idx) => *idx.value(),
            None => return vec![],
        };

        let mut objects: Vec<Node> = graph
            .edges_directed(subj_idx, Direction::Outgoing)
            .filter(|e| e.weight().predicate == predicate)
            .filter_map(|e| graph.node_weight(e.target()).cloned())
            .collect();
        // edges_directed walks the adjacency chain newest-first
        objects.reverse();
        objects
    }

    /// All subjects for a given predicate and object, in insertion order.
    pub fn subjects_of(&self, predicate: &str, object: &Node) -> Vec<Node> {
        let graph = self.graph.read().expect("graph lock poisoned");
        let obj_idx = match self.node_index.get(object) {
            Some(idx) => *idx.value(),
            None => return vec![],
        };

        let mut subjects: Vec<Node> = graph
            .edges_directed(obj_idx, Direction::Incoming)
            .filter(|e| e.weight().predicate == predicate)
            .filter_map(|e| graph.node_weight(e.source()).cloned())
            .collect();
        subjects.reverse();
        subjects
    }

    /// All triples where the given term appears as subject, in insertion order.
    pub fn triples_from(&self, subject: &Node) -> Vec<Triple> {
        let graph = self.graph.read().expect("graph lock poisoned");
        let subj_idx = match self.node_index.get(subject) {
            Some(idx) => *idx.value(),
            None => return vec![],
        };

        let mut triples: Vec<Triple> = graph
            .edges_directed(subj_idx, Direction::Outgoing)
            .filter_map(|e| {
                let object = graph.node_weight(e.target())?.clone();
                Some(Triple {
                    subject: subject.clone(),
                    predicate: e.weight().predicate.clone(),
                    object,
                })
            })
            .collect();
        triples.reverse();
        triples
    }

    /// All (subject, object) pairs recorded for a predicate.
    pub fn pairs_for_predicate(&self, predicate: &str) -> Vec<(Node, Node)> {
        self.predicate_index
            .get(predicate)
            .map(|v| v.value().clone())
            .unwrap_or_default()
    }

    /// Pattern-match iteration: any combination of subject, predicate, and
    /// object may be left unspecified.
    pub fn triples_matching(
        &self,
        subject: Option<&Node>,
        predicate: Option<&str>,
        object: Option<&Node>,
    ) -> Vec<Triple> {
        let candidates: Vec<Triple> = match (subject, predicate) {
            (Some(s), _) => self.triples_from(s),
            (None, Some(p)) => self
                .pairs_for_predicate(p)
                .into_iter()
                .map(|(s, o)| Triple::new(s, p, o))
                .collect(),
            (None, None) => self.all_triples(),
        };

        candidates
            .into_iter()
            .filter(|t| predicate.is_none_or(|p| t.predicate == p))
            .filter(|t| object.is_none_or(|o| &t.object == o))
            .collect()
    }

    /// All triples in the store, in insertion order.
    pub fn all_triples(&self) -> Vec<Triple> {
        let graph = self.graph.read().expect("graph lock poisoned");
        graph
            .edge_indices()
            .filter_map(|ei| {
                let (src, dst) = graph.edge_endpoints(ei)?;
                let subject = graph.node_weight(src)?.clone();
                let object = graph.node_weight(dst)?.clone();
                let edge = graph.edge_weight(ei)?;
                Some(Triple {
                    subject,
                    predicate: edge.predicate.clone(),
                    object,
                })
            })
            .collect()
    }

    /// Whether a term exists in the store.
    pub fn has_node(&self, node: &Node) -> bool {
        self.node_index.contains_key(node)
    }

    /// Number of distinct terms.
    pub fn node_count(&self) -> usize {
        self.node_index.len()
    }

    /// All distinct terms in the store, in no particular order.
    pub fn nodes(&self) -> Vec<Node> {
        self.node_index.iter().map(|e| e.key().clone()).collect()
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.triple_count
            .load(std::sync::atomic::Ordering::Relaxed)
    }

    /// Whether the store holds no triples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TripleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TripleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripleStore")
            .field("nodes", &self.node_count())
            .field("triples", &self.len())
            .finish()
    }
}
