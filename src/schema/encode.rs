//! Schema encoder: record → triples.
//!
//! A single recursive serializer walks the entity tree and emits triples
//! into the store. Literal slots without a value are skipped here and only
//! here, so no insertion path can record an absent field.

use tracing::{debug, info, warn};

use crate::error::EncodeError;
use crate::graph::store::TripleStore;
use crate::graph::{BlankAllocator, Node, Triple};
use crate::record::{GrainBoundaryRecord, StructureRecord, VacancyRecord};
use crate::vocab::{RDF_TYPE, cmso};

use super::EntityNode;

/// How schema nodes receive their identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityMode {
    /// Every schema node gets a store-generated unique identity.
    Anonymous,
    /// Every schema node is labeled `"{index}_{role}"`. The caller must
    /// keep `index` unique per sample within one store.
    Named {
        /// Sample index prefix, e.g. `"01"`.
        index: String,
    },
}

/// Encode a structure record into the store.
///
/// Emits the full sample tree and returns the sample node so callers can
/// chain defect annotations onto it. In named mode, an index already
/// present in the store is rejected before anything is emitted.
pub fn encode_structure(
    store: &TripleStore,
    alloc: &BlankAllocator,
    record: &StructureRecord,
    mode: &IdentityMode,
) -> Result<Node, EncodeError> {
    if let IdentityMode::Named { index } = mode {
        let probe = Node::blank(format!("{index}_Sample"));
        if store.has_node(&probe) {
            return Err(EncodeError::IdentityCollision {
                index: index.clone(),
            });
        }
    }

    info!(atoms = record.atoms.len(), ?mode, "encoding structure");
    let tree = super::structure_tree(record);
    Ok(emit_entity(store, alloc, mode, None, &tree))
}

/// Annotate the material of an already-encoded sample with a grain boundary.
///
/// Returns the defect node.
pub fn annotate_grain_boundary(
    store: &TripleStore,
    alloc: &BlankAllocator,
    sample: &Node,
    gb: &GrainBoundaryRecord,
    mode: &IdentityMode,
) -> Result<Node, EncodeError> {
    let material = material_of(store, sample)?;
    let tree = super::grain_boundary_tree(gb);
    if tree.class.is_none() {
        warn!(
            character = gb.character.as_deref().unwrap_or_default(),
            "unrecognized grain boundary character, boundary left untyped"
        );
    }
    info!(sample = %sample, "annotating grain boundary");
    Ok(emit_entity(
        store,
        alloc,
        mode,
        Some((&material, cmso::HAS_DEFECT)),
        &tree,
    ))
}

/// Annotate the material of an already-encoded sample with a vacancy.
///
/// Returns the defect node.
pub fn annotate_vacancy(
    store: &TripleStore,
    alloc: &BlankAllocator,
    sample: &Node,
    vacancy: &VacancyRecord,
    mode: &IdentityMode,
) -> Result<Node, EncodeError> {
    let material = material_of(store, sample)?;
    let tree = super::vacancy_tree(vacancy);
    info!(sample = %sample, concentration = vacancy.concentration, "annotating vacancy");
    Ok(emit_entity(
        store,
        alloc,
        mode,
        Some((&material, cmso::HAS_DEFECT)),
        &tree,
    ))
}

fn material_of(store: &TripleStore, sample: &Node) -> Result<Node, EncodeError> {
    store
        .value(sample, cmso::HAS_MATERIAL)
        .ok_or_else(|| EncodeError::MaterialNotFound {
            sample: sample.to_string(),
        })
}

/// The single emission point for schema entities.
///
/// Creates the entity node per the identity mode, links it to its parent,
/// types it, emits its literal attributes, then recurses into children.
fn emit_entity(
    store: &TripleStore,
    alloc: &BlankAllocator,
    mode: &IdentityMode,
    parent: Option<(&Node, &'static str)>,
    entity: &EntityNode,
) -> Node {
    let node = match mode {
        IdentityMode::Anonymous => Node::blank(alloc.next_label()),
        IdentityMode::Named { index } => Node::blank(format!("{index}_{}", entity.label)),
    };

    if let Some((parent_node, role)) = parent {
        store.insert(Triple::new(parent_node.clone(), role, node.clone()));
    }

    if let Some(class) = entity.class {
        store.insert(Triple::new(
            node.clone(),
            RDF_TYPE,
            Node::named(class),
        ));
    }

    for (predicate, value) in &entity.literals {
        match value {
            Some(literal) => {
                store.insert(Triple::new(
                    node.clone(),
                    *predicate,
                    Node::Literal(literal.clone()),
                ));
            }
            None => debug!(predicate, "field has no value, skipping literal"),
        }
    }

    for (role, child) in &entity.children {
        emit_entity(store, alloc, mode, Some((&node, *role)), child);
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AtomRecord;
    use crate::vocab::pldo;

    fn simple_record() -> StructureRecord {
        StructureRecord {
            cell_volume: Some(27.0),
            n_atoms: Some(1),
            cell_vectors: Some([[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]]),
            atoms: vec![AtomRecord {
                position: [0.5, 0.5, 0.5],
                species: Some("Al".into()),
                coordination: Some(12),
            }],
            ..Default::default()
        }
    }

    fn named(index: &str) -> IdentityMode {
        IdentityMode::Named {
            index: index.into(),
        }
    }

    #[test]
    fn named_mode_labels_schema_nodes() {
        let store = TripleStore::new();
        let alloc = BlankAllocator::new();
        let sample =
            encode_structure(&store, &alloc, &simple_record(), &named("01")).unwrap();

        assert_eq!(sample, Node::blank("01_Sample"));
        assert!(store.has_node(&Node::blank("01_SimulationCell")));
        assert!(store.has_node(&Node::blank("01_SimulationCellVector02")));
        assert!(store.has_node(&Node::blank("01_Atom_0_Element")));
    }

    #[test]
    fn anonymous_mode_uses_allocator() {
        let store = TripleStore::new();
        let alloc = BlankAllocator::new();
        let sample = encode_structure(
            &store,
            &alloc,
            &simple_record(),
            &IdentityMode::Anonymous,
        )
        .unwrap();
        assert_eq!(sample, Node::blank("b0"));
    }

    #[test]
    fn absent_fields_emit_no_triples() {
        let store = TripleStore::new();
        let alloc = BlankAllocator::new();
        // No space group in the record at all.
        encode_structure(&store, &alloc, &simple_record(), &named("01")).unwrap();

        assert!(
            store
                .triples_matching(None, Some(cmso::HAS_SPACE_GROUP_SYMBOL), None)
                .is_empty()
        );
        // The SpaceGroup entity itself is still present and typed.
        assert!(store.has_node(&Node::blank("01_SpaceGroup")));
    }

    #[test]
    fn identity_collision_is_detected() {
        let store = TripleStore::new();
        let alloc = BlankAllocator::new();
        encode_structure(&store, &alloc, &simple_record(), &named("01")).unwrap();

        let err = encode_structure(&store, &alloc, &simple_record(), &named("01"))
            .unwrap_err();
        assert!(matches!(err, EncodeError::IdentityCollision { .. }));

        // A fresh index goes through.
        encode_structure(&store, &alloc, &simple_record(), &named("02")).unwrap();
    }

    #[test]
    fn grain_boundary_requires_material() {
        let store = TripleStore::new();
        let alloc = BlankAllocator::new();
        let orphan = Node::blank("nowhere");
        let err = annotate_grain_boundary(
            &store,
            &alloc,
            &orphan,
            &GrainBoundaryRecord::default(),
            &IdentityMode::Anonymous,
        )
        .unwrap_err();
        assert!(matches!(err, EncodeError::MaterialNotFound { .. }));
    }

    #[test]
    fn unrecognized_character_skips_type_but_keeps_attributes() {
        let store = TripleStore::new();
        let alloc = BlankAllocator::new();
        let sample =
            encode_structure(&store, &alloc, &simple_record(), &named("01")).unwrap();

        let gb = GrainBoundaryRecord {
            character: Some("Screw".into()),
            sigma: Some(5),
            plane: Some("(3 1 0)".into()),
            ..Default::default()
        };
        let defect =
            annotate_grain_boundary(&store, &alloc, &sample, &gb, &named("01")).unwrap();

        assert!(store.value(&defect, RDF_TYPE).is_none());
        assert!(store.value(&defect, pldo::HAS_SIGMA_VALUE).is_some());
        assert!(store.value(&defect, pldo::HAS_GB_PLANE).is_some());
    }

    #[test]
    fn vacancy_triples() {
        let store = TripleStore::new();
        let alloc = BlankAllocator::new();
        let sample = encode_structure(
            &store,
            &alloc,
            &simple_record(),
            &IdentityMode::Anonymous,
        )
        .unwrap();

        let vacancy = VacancyRecord {
            concentration: 0.02,
            count: None,
        };
        let defect = annotate_vacancy(
            &store,
            &alloc,
            &sample,
            &vacancy,
            &IdentityMode::Anonymous,
        )
        .unwrap();

        assert_eq!(
            store.value(&defect, RDF_TYPE),
            Some(Node::named(crate::vocab::podo::VACANCY))
        );
        assert!(
            store
                .value(&defect, crate::vocab::podo::HAS_VACANCY_CONCENTRATION)
                .is_some()
        );
        // Absent count emits nothing.
        assert!(
            store
                .value(&defect, crate::vocab::podo::HAS_NUMBER_OF_VACANCY)
                .is_none()
        );
    }
}
