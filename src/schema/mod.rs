//! The fixed sample schema as an entity tree.
//!
//! Every schema entity is a node with a class tag, a role label (the name
//! fragment used for deterministic identities), literal attribute slots,
//! and child entities reached by schema edges. Constructor functions
//! translate the intermediate records into trees; a single serializer in
//! [`encode`](crate::schema::encode) walks them, which keeps the
//! skip-on-missing rule in exactly one place.

pub mod decode;
pub mod encode;

use crate::graph::Literal;
use crate::record::{GrainBoundaryRecord, StructureRecord, VacancyRecord};
use crate::vocab::{cmso, pldo, podo};

/// One entity in the schema tree.
#[derive(Debug, Clone)]
pub struct EntityNode {
    /// `rdf:type` object IRI. `None` emits no type triple (the untyped
    /// defect fallthrough).
    pub class: Option<&'static str>,
    /// Role label; named identities are `"{index}_{label}"`.
    pub label: String,
    /// Literal attribute slots. A `None` value is skipped at emission.
    pub literals: Vec<(&'static str, Option<Literal>)>,
    /// Child entities and the schema edge leading to each.
    pub children: Vec<(&'static str, EntityNode)>,
}

impl EntityNode {
    fn new(class: &'static str, label: impl Into<String>) -> Self {
        Self {
            class: Some(class),
            label: label.into(),
            literals: Vec::new(),
            children: Vec::new(),
        }
    }

    fn untyped(label: impl Into<String>) -> Self {
        Self {
            class: None,
            label: label.into(),
            literals: Vec::new(),
            children: Vec::new(),
        }
    }

    fn literal(mut self, predicate: &'static str, value: Option<Literal>) -> Self {
        self.literals.push((predicate, value));
        self
    }

    fn child(mut self, role: &'static str, child: EntityNode) -> Self {
        self.children.push((role, child));
        self
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn float_at(triplet: Option<[f64; 3]>, i: usize) -> Option<Literal> {
    triplet.map(|t| Literal::float(t[i]))
}

/// Build the full sample tree for a structure record.
///
/// Entity nodes and their type triples are always present; only literal
/// slots depend on which record fields carry values.
pub fn structure_tree(record: &StructureRecord) -> EntityNode {
    let mut sample = EntityNode::new(cmso::ATOMIC_SCALE_SAMPLE, "Sample")
        .literal(
            cmso::HAS_NUMBER_OF_ATOMS,
            record.n_atoms.map(Literal::integer),
        )
        .child(cmso::HAS_MATERIAL, material_tree(record))
        .child(cmso::HAS_SIMULATION_CELL, simulation_cell_tree(record));

    for (i, atom) in record.atoms.iter().enumerate() {
        let position = EntityNode::new(cmso::POSITION_VECTOR, format!("Atom_{i}_Position"))
            .literal(cmso::HAS_COMPONENT_X, Some(Literal::float(atom.position[0])))
            .literal(cmso::HAS_COMPONENT_Y, Some(Literal::float(atom.position[1])))
            .literal(cmso::HAS_COMPONENT_Z, Some(Literal::float(atom.position[2])));

        let element = EntityNode::new(cmso::ELEMENT, format!("Atom_{i}_Element")).literal(
            cmso::HAS_SYMBOL,
            atom.species.as_deref().map(Literal::string),
        );

        let atom_entity = EntityNode::new(cmso::ATOM, format!("Atom_{i}"))
            .literal(cmso::HAS_ORDINAL, Some(Literal::integer(i as i64)))
            .literal(
                cmso::HAS_COORDINATION_NUMBER,
                atom.coordination.map(Literal::integer),
            )
            .child(cmso::HAS_POSITION_VECTOR, position)
            .child(cmso::HAS_ELEMENT, element);

        sample = sample.child(cmso::HAS_ATOM, atom_entity);
    }

    sample
}

fn material_tree(record: &StructureRecord) -> EntityNode {
    let mut composition = EntityNode::new(cmso::CHEMICAL_COMPOSITION, "ChemicalComposition");
    for entry in &record.composition {
        composition = composition.literal(
            cmso::HAS_ELEMENT_RATIO,
            entry
                .ratio
                .map(|ratio| Literal::string(format!("{}={}", entry.element, ratio))),
        );
    }

    let space_group = EntityNode::new(cmso::SPACE_GROUP, "SpaceGroup")
        .literal(
            cmso::HAS_SPACE_GROUP_SYMBOL,
            record.space_group_symbol.as_deref().map(Literal::string),
        )
        .literal(
            cmso::HAS_SPACE_GROUP_NUMBER,
            record.space_group_number.map(Literal::integer),
        );

    let bravais = EntityNode::new(cmso::BRAVAIS_LATTICE, "BravaisLattice").literal(
        cmso::HAS_LATTICE_SYSTEM,
        record.bravais_lattice.as_deref().map(Literal::string),
    );

    // The lattice parameter is mirrored into all three axes; the lattice
    // angles are fixed at 90 degrees.
    let parameter = record.lattice_parameter.map(Literal::float);
    let lattice_parameter = EntityNode::new(cmso::LATTICE_PARAMETER, "LatticeParameter")
        .literal(cmso::HAS_LENGTH_X, parameter.clone())
        .literal(cmso::HAS_LENGTH_Y, parameter.clone())
        .literal(cmso::HAS_LENGTH_Z, parameter);

    let lattice_angle = EntityNode::new(cmso::LATTICE_ANGLE, "LatticeAngle")
        .literal(cmso::HAS_ANGLE_ALPHA, Some(Literal::float(90.0)))
        .literal(cmso::HAS_ANGLE_BETA, Some(Literal::float(90.0)))
        .literal(cmso::HAS_ANGLE_GAMMA, Some(Literal::float(90.0)));

    let unit_cell = EntityNode::new(cmso::UNIT_CELL, "UnitCell")
        .child(cmso::HAS_LATTICE, bravais)
        .child(cmso::HAS_LATTICE_PARAMETER, lattice_parameter)
        .child(cmso::HAS_ANGLE, lattice_angle);

    let crystal_structure = EntityNode::new(cmso::CRYSTAL_STRUCTURE, "CrystalStructure")
        .literal(
            cmso::HAS_ALT_NAME,
            record.crystal_structure.as_deref().map(Literal::string),
        )
        .child(cmso::HAS_SPACE_GROUP, space_group)
        .child(cmso::HAS_UNIT_CELL, unit_cell);

    EntityNode::new(cmso::CRYSTALLINE_MATERIAL, "Material")
        .child(cmso::HAS_COMPOSITION, composition)
        .child(cmso::HAS_STRUCTURE, crystal_structure)
}

fn simulation_cell_tree(record: &StructureRecord) -> EntityNode {
    let length = EntityNode::new(cmso::SIMULATION_CELL_LENGTH, "SimulationCellLength")
        .literal(cmso::HAS_LENGTH_X, float_at(record.cell_lengths, 0))
        .literal(cmso::HAS_LENGTH_Y, float_at(record.cell_lengths, 1))
        .literal(cmso::HAS_LENGTH_Z, float_at(record.cell_lengths, 2));

    let angle = EntityNode::new(cmso::SIMULATION_CELL_ANGLE, "SimulationCellAngle")
        .literal(cmso::HAS_ANGLE_ALPHA, float_at(record.cell_angles, 0))
        .literal(cmso::HAS_ANGLE_BETA, float_at(record.cell_angles, 1))
        .literal(cmso::HAS_ANGLE_GAMMA, float_at(record.cell_angles, 2));

    let mut cell = EntityNode::new(cmso::SIMULATION_CELL, "SimulationCell")
        .literal(
            cmso::HAS_VOLUME,
            record.cell_volume.map(|v| Literal::float(round2(v))),
        )
        .child(cmso::HAS_LENGTH, length);

    for i in 0..3 {
        let row = record.cell_vectors.map(|m| m[i]);
        let vector = EntityNode::new(
            cmso::SIMULATION_CELL_VECTOR,
            format!("SimulationCellVector{:02}", i + 1),
        )
        .literal(cmso::HAS_ORDINAL, Some(Literal::integer(i as i64)))
        .literal(cmso::HAS_COMPONENT_X, float_at(row, 0))
        .literal(cmso::HAS_COMPONENT_Y, float_at(row, 1))
        .literal(cmso::HAS_COMPONENT_Z, float_at(row, 2));
        cell = cell.child(cmso::HAS_VECTOR, vector);
    }

    cell.child(cmso::HAS_ANGLE, angle)
}

/// Build the defect tree for a grain boundary.
///
/// The boundary character tag selects the class over a fixed enumeration;
/// an unrecognized tag yields an untyped entity whose attribute sub-nodes
/// are still emitted.
pub fn grain_boundary_tree(gb: &GrainBoundaryRecord) -> EntityNode {
    let class = match gb.character.as_deref() {
        None => Some(pldo::GRAIN_BOUNDARY),
        Some("Twist") => Some(pldo::TWIST_BOUNDARY),
        Some("Tilt") => Some(pldo::TILT_BOUNDARY),
        Some("Symmetric Tilt") => Some(pldo::SYMMETRIC_TILT_BOUNDARY),
        Some("Mixed") => Some(pldo::MIXED_BOUNDARY),
        Some(_) => None,
    };

    let mut boundary = match class {
        Some(class) => EntityNode::new(class, "GrainBoundary"),
        None => EntityNode::untyped("GrainBoundary"),
    };
    boundary = boundary.literal(pldo::HAS_SIGMA_VALUE, gb.sigma.map(Literal::integer));

    let plane = EntityNode::new(pldo::GRAIN_BOUNDARY_PLANE, "GrainBoundaryPlane").literal(
        pldo::HAS_MILLER_INDICES,
        gb.plane.as_deref().map(Literal::string),
    );

    let axis = EntityNode::new(pldo::ROTATION_AXIS, "RotationAxis")
        .literal(pldo::HAS_COMPONENT_X, float_at(gb.rotation_axis, 0))
        .literal(pldo::HAS_COMPONENT_Y, float_at(gb.rotation_axis, 1))
        .literal(pldo::HAS_COMPONENT_Z, float_at(gb.rotation_axis, 2));

    let misorientation = EntityNode::new(pldo::MISORIENTATION_ANGLE, "MisorientationAngle")
        .literal(
            pldo::HAS_ANGLE,
            gb.misorientation_angle.map(Literal::float),
        );

    boundary
        .child(pldo::HAS_GB_PLANE, plane)
        .child(pldo::HAS_ROTATION_AXIS, axis)
        .child(pldo::HAS_MISORIENTATION_ANGLE, misorientation)
}

/// Build the defect tree for a vacancy.
pub fn vacancy_tree(vacancy: &VacancyRecord) -> EntityNode {
    EntityNode::new(podo::VACANCY, "Vacancy")
        .literal(
            podo::HAS_VACANCY_CONCENTRATION,
            Some(Literal::float(vacancy.concentration)),
        )
        .literal(
            podo::HAS_NUMBER_OF_VACANCY,
            vacancy.count.map(Literal::integer),
        )
}
