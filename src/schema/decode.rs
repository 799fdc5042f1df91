//! Schema decoder: subgraph → structural record.
//!
//! Pattern-matches the fixed schema in reverse from a sample entry node,
//! rebuilding the cell matrix and the atom list. Sibling order comes from
//! the ordinal literals written at encode time; stores without ordinals
//! fall back to the store's enumeration order.

use tracing::debug;

use crate::error::DecodeError;
use crate::graph::store::TripleStore;
use crate::graph::{Literal, Node};
use crate::record::{DecodedAtom, DecodedStructure};
use crate::vocab::cmso;

/// Rebuild the structural record for a sample.
///
/// Requires the simulation cell with exactly three basis vectors and, for
/// every atom, a position and an element symbol. A missing mandatory edge
/// aborts the whole decode.
pub fn decode_structure(
    store: &TripleStore,
    sample: &Node,
) -> Result<DecodedStructure, DecodeError> {
    let cell = required(store, sample, cmso::HAS_SIMULATION_CELL)?;

    let vectors = ordered(store, store.objects_of(&cell, cmso::HAS_VECTOR));
    if vectors.len() != 3 {
        return Err(DecodeError::CellVectorCount {
            found: vectors.len(),
        });
    }

    let mut cell_vectors = [[0.0f64; 3]; 3];
    for (row, vector) in cell_vectors.iter_mut().zip(&vectors) {
        *row = components(store, vector)?;
    }

    let atom_nodes = ordered(store, store.objects_of(sample, cmso::HAS_ATOM));
    let mut atoms = Vec::with_capacity(atom_nodes.len());
    for atom in &atom_nodes {
        let position_node = required(store, atom, cmso::HAS_POSITION_VECTOR)?;
        let position = components(store, &position_node)?;

        let element = required(store, atom, cmso::HAS_ELEMENT)?;
        let species = required_string(store, &element, cmso::HAS_SYMBOL)?;

        // Coordination is optional; a malformed value reads as absent.
        let coordination = store
            .value(atom, cmso::HAS_COORDINATION_NUMBER)
            .and_then(|n| n.as_literal().and_then(Literal::as_integer));

        atoms.push(DecodedAtom {
            position,
            species,
            coordination,
        });
    }

    debug!(atoms = atoms.len(), "decoded structure");
    Ok(DecodedStructure { cell_vectors, atoms })
}

/// Read the stored atom count of a sample without walking its atoms.
pub fn atom_count(store: &TripleStore, sample: &Node) -> Result<i64, DecodeError> {
    required_integer(store, sample, cmso::HAS_NUMBER_OF_ATOMS)
}

/// Order sibling nodes by their ordinal literals.
///
/// Falls back to the given enumeration order when any sibling lacks an
/// ordinal, so stores written by pre-ordinal encoders still decode.
fn ordered(store: &TripleStore, nodes: Vec<Node>) -> Vec<Node> {
    let keyed: Vec<(Option<i64>, &Node)> = nodes
        .iter()
        .map(|node| {
            let ordinal = store
                .value(node, cmso::HAS_ORDINAL)
                .and_then(|n| n.as_literal().and_then(Literal::as_integer));
            (ordinal, node)
        })
        .collect();

    if keyed.iter().all(|(ordinal, _)| ordinal.is_some()) {
        let mut keyed: Vec<(i64, Node)> = keyed
            .into_iter()
            .map(|(ordinal, node)| (ordinal.unwrap_or_default(), node.clone()))
            .collect();
        keyed.sort_by_key(|(ordinal, _)| *ordinal);
        keyed.into_iter().map(|(_, node)| node).collect()
    } else {
        debug!("siblings lack ordinals, keeping store enumeration order");
        nodes
    }
}

fn components(store: &TripleStore, node: &Node) -> Result<[f64; 3], DecodeError> {
    Ok([
        required_float(store, node, cmso::HAS_COMPONENT_X)?,
        required_float(store, node, cmso::HAS_COMPONENT_Y)?,
        required_float(store, node, cmso::HAS_COMPONENT_Z)?,
    ])
}

fn required(store: &TripleStore, subject: &Node, predicate: &str) -> Result<Node, DecodeError> {
    store
        .value(subject, predicate)
        .ok_or_else(|| DecodeError::MissingEdge {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
        })
}

fn required_literal<'a>(
    subject: &Node,
    node: &'a Node,
    expected: &'static str,
) -> Result<&'a Literal, DecodeError> {
    node.as_literal().ok_or_else(|| DecodeError::MalformedLiteral {
        subject: subject.to_string(),
        lexical: node.to_string(),
        expected,
    })
}

fn required_float(
    store: &TripleStore,
    subject: &Node,
    predicate: &str,
) -> Result<f64, DecodeError> {
    let node = required(store, subject, predicate)?;
    let literal = required_literal(subject, &node, "float")?;
    literal
        .as_float()
        .ok_or_else(|| DecodeError::MalformedLiteral {
            subject: subject.to_string(),
            lexical: literal.lexical().to_string(),
            expected: "float",
        })
}

fn required_integer(
    store: &TripleStore,
    subject: &Node,
    predicate: &str,
) -> Result<i64, DecodeError> {
    let node = required(store, subject, predicate)?;
    let literal = required_literal(subject, &node, "integer")?;
    literal
        .as_integer()
        .ok_or_else(|| DecodeError::MalformedLiteral {
            subject: subject.to_string(),
            lexical: literal.lexical().to_string(),
            expected: "integer",
        })
}

fn required_string(
    store: &TripleStore,
    subject: &Node,
    predicate: &str,
) -> Result<String, DecodeError> {
    let node = required(store, subject, predicate)?;
    let literal = required_literal(subject, &node, "string")?;
    Ok(literal.lexical().to_string())
}
