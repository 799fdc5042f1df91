//! Intermediate record types.
//!
//! [`StructureRecord`] is the data dictionary handed to the encoder: the
//! named scalar and vector fields describing one atomic-scale sample. Every
//! field is optional: producers return "no value" for anything they cannot
//! compute, and the encoder silently skips the corresponding triples.
//!
//! [`DecodedStructure`] is the decoder's output: the minimal structural
//! record (cell matrix + atoms) needed to rebuild a structure object.

use serde::{Deserialize, Serialize};

/// One element of the chemical composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRatio {
    /// Chemical symbol, e.g. `"Al"`.
    pub element: String,
    /// Fraction of this element in the sample. `None` skips the entry.
    pub ratio: Option<f64>,
}

/// One atom of the sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    /// Cartesian position.
    pub position: [f64; 3],
    /// Chemical species symbol. Optional at encode time; a sample encoded
    /// without species cannot be decoded back into a structure.
    pub species: Option<String>,
    /// Coordination number.
    pub coordination: Option<i64>,
}

/// Data dictionary for one structure, as supplied by an external converter.
///
/// Field names follow the sample schema rather than any particular
/// simulation package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureRecord {
    /// Chemical composition, one entry per element.
    pub composition: Vec<ElementRatio>,
    /// Simulation cell volume.
    pub cell_volume: Option<f64>,
    /// Total number of atoms.
    pub n_atoms: Option<i64>,
    /// Cell edge lengths.
    pub cell_lengths: Option<[f64; 3]>,
    /// Cell basis vectors, one row per vector.
    pub cell_vectors: Option<[[f64; 3]; 3]>,
    /// Cell angles alpha, beta, gamma in degrees.
    pub cell_angles: Option<[f64; 3]>,
    /// Common crystal structure name, e.g. `"fcc"`.
    pub crystal_structure: Option<String>,
    /// Hermann-Mauguin space group symbol.
    pub space_group_symbol: Option<String>,
    /// International space group number.
    pub space_group_number: Option<i64>,
    /// Bravais lattice system tag.
    pub bravais_lattice: Option<String>,
    /// Lattice parameter; mirrored into all three axes on encode.
    pub lattice_parameter: Option<f64>,
    /// Per-atom records.
    pub atoms: Vec<AtomRecord>,
}

/// Grain boundary descriptor for defect annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrainBoundaryRecord {
    /// Boundary character tag: one of `"Twist"`, `"Tilt"`,
    /// `"Symmetric Tilt"`, `"Mixed"`, or `None` for a plain grain boundary.
    /// Any other tag leaves the boundary untyped.
    pub character: Option<String>,
    /// Sigma value of the CSL boundary.
    pub sigma: Option<i64>,
    /// Miller indices of the boundary plane, e.g. `"(1 1 1)"`.
    pub plane: Option<String>,
    /// Rotation axis.
    pub rotation_axis: Option<[f64; 3]>,
    /// Misorientation angle in degrees.
    pub misorientation_angle: Option<f64>,
}

/// Vacancy descriptor for defect annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyRecord {
    /// Vacancy concentration in `[0, 1]`.
    pub concentration: f64,
    /// Absolute number of vacancies, when known.
    pub count: Option<i64>,
}

/// One atom reconstructed by the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedAtom {
    /// Cartesian position.
    pub position: [f64; 3],
    /// Chemical species symbol. Mandatory: decoding fails if absent.
    pub species: String,
    /// Coordination number, when the sample carries one.
    pub coordination: Option<i64>,
}

/// Structural record reconstructed from a sample subgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedStructure {
    /// Cell basis vectors, one row per vector.
    pub cell_vectors: [[f64; 3]; 3],
    /// Reconstructed atoms.
    pub atoms: Vec<DecodedAtom>,
}
