//! End-to-end integration tests for atomgraph.
//!
//! These tests exercise the full pipeline: record → encoder → store →
//! extractor → decoder, plus defect annotation and SPARQL forwarding,
//! validating the codec laws the crate is built around.

use atomgraph::graph::store::TripleStore;
use atomgraph::graph::traverse::extract_subgraph;
use atomgraph::graph::{Literal, Node, Triple};
use atomgraph::record::{AtomRecord, ElementRatio, GrainBoundaryRecord, StructureRecord};
use atomgraph::sample::SampleGraph;
use atomgraph::schema::decode::decode_structure;
use atomgraph::schema::encode::IdentityMode;
use atomgraph::vocab::{RDF_TYPE, cmso, pldo};

const EPS: f64 = 1e-10;

fn named(index: &str) -> IdentityMode {
    IdentityMode::Named {
        index: index.into(),
    }
}

/// A cubic aluminium cell with two atoms.
fn al_record() -> StructureRecord {
    StructureRecord {
        composition: vec![ElementRatio {
            element: "Al".into(),
            ratio: Some(1.0),
        }],
        cell_volume: Some(27.0),
        n_atoms: Some(2),
        cell_lengths: Some([3.0, 3.0, 3.0]),
        cell_vectors: Some([[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]]),
        cell_angles: Some([90.0, 90.0, 90.0]),
        crystal_structure: Some("fcc".into()),
        space_group_symbol: Some("Fm-3m".into()),
        space_group_number: Some(225),
        bravais_lattice: Some("cubic".into()),
        lattice_parameter: Some(3.0),
        atoms: vec![
            AtomRecord {
                position: [0.0, 0.0, 0.0],
                species: Some("Al".into()),
                coordination: Some(12),
            },
            AtomRecord {
                position: [1.5, 1.5, 0.0],
                species: Some("Al".into()),
                coordination: Some(12),
            },
        ],
    }
}

#[test]
fn round_trip_law() {
    let graph = SampleGraph::new().unwrap();
    let record = al_record();
    let sample = graph.add_structure(&record, &named("01")).unwrap();

    // Decode from the extracted closed subgraph, not the full store.
    let subgraph = graph.get_sample(&sample);
    let decoded = decode_structure(&subgraph, &sample).unwrap();

    let expected = record.cell_vectors.unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert!((decoded.cell_vectors[i][j] - expected[i][j]).abs() < EPS);
        }
    }

    // Atom (species, position) pairs match regardless of storage order.
    let mut got: Vec<(String, [i64; 3])> = decoded
        .atoms
        .iter()
        .map(|a| {
            (
                a.species.clone(),
                [0, 1, 2].map(|i| (a.position[i] * 1e6) as i64),
            )
        })
        .collect();
    let mut want: Vec<(String, [i64; 3])> = record
        .atoms
        .iter()
        .map(|a| {
            (
                a.species.clone().unwrap(),
                [0, 1, 2].map(|i| (a.position[i] * 1e6) as i64),
            )
        })
        .collect();
    got.sort();
    want.sort();
    assert_eq!(got, want);
}

#[test]
fn concrete_scenario() {
    let graph = SampleGraph::new().unwrap();
    let record = StructureRecord {
        cell_volume: Some(27.0),
        n_atoms: Some(1),
        cell_vectors: Some([[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]]),
        atoms: vec![AtomRecord {
            position: [0.5, 0.5, 0.5],
            species: Some("Al".into()),
            coordination: Some(12),
        }],
        ..Default::default()
    };
    let sample = graph.add_structure(&record, &named("01")).unwrap();

    assert_eq!(sample, Node::blank("01_Sample"));
    let cell = graph
        .store()
        .value(&sample, cmso::HAS_SIMULATION_CELL)
        .unwrap();
    assert_eq!(cell, Node::blank("01_SimulationCell"));
    assert_eq!(
        graph.store().value(&cell, cmso::HAS_VOLUME),
        Some(Node::Literal(Literal::float(27.0)))
    );

    let decoded = graph.to_structure(&sample).unwrap();
    assert_eq!(decoded.atoms.len(), 1);
    assert_eq!(decoded.atoms[0].species, "Al");
    for i in 0..3 {
        assert!((decoded.atoms[0].position[i] - 0.5).abs() < EPS);
    }
}

#[test]
fn null_skip_property() {
    let full = SampleGraph::new().unwrap();
    full.add_structure(&al_record(), &named("01")).unwrap();

    let mut partial_record = al_record();
    partial_record.cell_volume = None;
    let partial = SampleGraph::new().unwrap();
    partial.add_structure(&partial_record, &named("01")).unwrap();

    // Zero volume triples, everything else untouched.
    assert!(
        partial
            .store()
            .triples_matching(None, Some(cmso::HAS_VOLUME), None)
            .is_empty()
    );
    assert_eq!(
        full.store()
            .triples_matching(None, Some(cmso::HAS_VOLUME), None)
            .len(),
        1
    );
    assert_eq!(partial.len(), full.len() - 1);
}

#[test]
fn idempotent_reinsertion() {
    let store = TripleStore::new();
    let triple = Triple::new(
        Node::blank("01_Sample"),
        RDF_TYPE,
        Node::named(cmso::ATOMIC_SCALE_SAMPLE),
    );
    assert!(store.insert(triple.clone()));
    assert!(!store.insert(triple));
    assert_eq!(store.len(), 1);
}

#[test]
fn extractor_terminates_on_cycles_and_is_closed() {
    let store = TripleStore::new();
    let a = Node::blank("a");
    let b = Node::blank("b");
    store.insert(Triple::new(a.clone(), cmso::HAS_MATERIAL, b.clone()));
    store.insert(Triple::new(b.clone(), cmso::HAS_MATERIAL, a.clone()));
    // An unreachable island must not leak into the extraction.
    store.insert(Triple::new(
        Node::blank("x"),
        cmso::HAS_MATERIAL,
        Node::blank("y"),
    ));

    let sub = extract_subgraph(&store, &a);
    assert_eq!(sub.len(), 2);
    assert!(sub.contains(&Triple::new(a.clone(), cmso::HAS_MATERIAL, b.clone())));
    assert!(sub.contains(&Triple::new(b, cmso::HAS_MATERIAL, a)));
}

/// Triples with blank identities erased: the shape that must be preserved
/// across identity modes.
fn shape(store: &TripleStore) -> Vec<String> {
    let mut sig: Vec<String> = store
        .all_triples()
        .iter()
        .map(|t| {
            let subject = match &t.subject {
                Node::Blank(_) => "_".to_string(),
                other => other.to_string(),
            };
            let object = match &t.object {
                Node::Blank(_) => "_".to_string(),
                other => other.to_string(),
            };
            format!("{subject} <{}> {object}", t.predicate)
        })
        .collect();
    sig.sort();
    sig
}

#[test]
fn identity_modes_are_isomorphic() {
    let record = al_record();

    let anonymous = SampleGraph::new().unwrap();
    anonymous
        .add_structure(&record, &IdentityMode::Anonymous)
        .unwrap();

    let deterministic = SampleGraph::new().unwrap();
    deterministic.add_structure(&record, &named("01")).unwrap();

    assert_eq!(anonymous.len(), deterministic.len());
    assert_eq!(shape(anonymous.store()), shape(deterministic.store()));
}

#[test]
fn many_samples_in_one_store() {
    let graph = SampleGraph::new().unwrap();
    let first = graph.add_structure(&al_record(), &named("01")).unwrap();

    let mut second_record = al_record();
    second_record.atoms.pop();
    second_record.n_atoms = Some(1);
    let second = graph
        .add_structure(&second_record, &named("02"))
        .unwrap();

    assert_eq!(graph.n_samples(), 2);
    let samples = graph.samples();
    assert!(samples.contains(&first));
    assert!(samples.contains(&second));

    assert_eq!(graph.atom_count(&first).unwrap(), 2);
    assert_eq!(graph.atom_count(&second).unwrap(), 1);

    // Extraction stays scoped to the requested sample.
    let sub = extract_subgraph(graph.store(), &second);
    assert!(!sub.has_node(&Node::blank("01_Sample")));
    let decoded = decode_structure(&sub, &second).unwrap();
    assert_eq!(decoded.atoms.len(), 1);
}

#[test]
fn grain_boundary_annotation() {
    let graph = SampleGraph::new().unwrap();
    let sample = graph.add_structure(&al_record(), &named("01")).unwrap();

    let gb = GrainBoundaryRecord {
        character: Some("Symmetric Tilt".into()),
        sigma: Some(5),
        plane: Some("(3 1 0)".into()),
        rotation_axis: Some([0.0, 0.0, 1.0]),
        misorientation_angle: Some(36.86),
    };
    let defect = graph.add_grain_boundary(&sample, &gb, &named("01")).unwrap();

    assert_eq!(
        graph.store().value(&defect, RDF_TYPE),
        Some(Node::named(pldo::SYMMETRIC_TILT_BOUNDARY))
    );
    assert_eq!(
        graph.store().value(&defect, pldo::HAS_SIGMA_VALUE),
        Some(Node::Literal(Literal::integer(5)))
    );

    let plane = graph.store().value(&defect, pldo::HAS_GB_PLANE).unwrap();
    assert_eq!(
        graph.store().value(&plane, pldo::HAS_MILLER_INDICES),
        Some(Node::Literal(Literal::string("(3 1 0)")))
    );

    // The defect hangs off the material, and extraction from the sample
    // reaches it.
    let sub = graph.get_sample(&sample);
    assert!(sub.has_node(&defect));
}

#[test]
fn decode_fails_without_species() {
    let graph = SampleGraph::new().unwrap();
    let mut record = al_record();
    record.atoms[1].species = None;
    let sample = graph.add_structure(&record, &named("01")).unwrap();

    let err = graph.to_structure(&sample).unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("hasSymbol"), "unexpected error: {message}");
}

#[test]
fn sparql_query_forwarding() {
    let graph = SampleGraph::new().unwrap();
    graph.add_structure(&al_record(), &named("01")).unwrap();

    // Formulated by an external caller; the facade only forwards it.
    let query = format!(
        "SELECT ?cell WHERE {{ ?cell <{}> \"27\"^^<http://www.w3.org/2001/XMLSchema#float> }}",
        cmso::HAS_VOLUME
    );
    let rows = graph.query(&query).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0][0].1.contains("01_SimulationCell"));
}
