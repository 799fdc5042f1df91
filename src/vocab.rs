//! Ontology namespaces and term IRIs.
//!
//! Three namespaces cover the schema: CMSO for the core sample hierarchy,
//! PLDO for planar defects (grain boundaries), and PODO for point defects
//! (vacancies). Terms are plain `&'static str` IRIs assembled at compile
//! time; the store and encoder treat them as opaque predicates and classes.

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

macro_rules! terms {
    ($ns:literal => { $($konst:ident = $local:literal),+ $(,)? }) => {
        $(
            pub const $konst: &str = concat!($ns, $local);
        )+
    };
}

/// Computational Material Sample Ontology.
pub mod cmso {
    /// Namespace prefix for all CMSO terms.
    pub const NS: &str = "https://purls.helmholtz-metadaten.de/cmso/";

    terms!("https://purls.helmholtz-metadaten.de/cmso/" => {
        // Classes
        ATOMIC_SCALE_SAMPLE = "AtomicScaleSample",
        CRYSTALLINE_MATERIAL = "CrystallineMaterial",
        CHEMICAL_COMPOSITION = "ChemicalComposition",
        SIMULATION_CELL = "SimulationCell",
        SIMULATION_CELL_LENGTH = "SimulationCellLength",
        SIMULATION_CELL_VECTOR = "SimulationCellVector",
        SIMULATION_CELL_ANGLE = "SimulationCellAngle",
        CRYSTAL_STRUCTURE = "CrystalStructure",
        SPACE_GROUP = "SpaceGroup",
        UNIT_CELL = "UnitCell",
        BRAVAIS_LATTICE = "BravaisLattice",
        LATTICE_PARAMETER = "LatticeParameter",
        LATTICE_ANGLE = "LatticeAngle",
        ATOM = "Atom",
        POSITION_VECTOR = "PositionVector",
        ELEMENT = "Element",

        // Schema edges
        HAS_MATERIAL = "hasMaterial",
        HAS_COMPOSITION = "hasComposition",
        HAS_SIMULATION_CELL = "hasSimulationCell",
        HAS_LENGTH = "hasLength",
        HAS_VECTOR = "hasVector",
        HAS_ANGLE = "hasAngle",
        HAS_STRUCTURE = "hasStructure",
        HAS_SPACE_GROUP = "hasSpaceGroup",
        HAS_UNIT_CELL = "hasUnitCell",
        HAS_LATTICE = "hasLattice",
        HAS_LATTICE_PARAMETER = "hasLatticeParameter",
        HAS_ATOM = "hasAtom",
        HAS_POSITION_VECTOR = "hasPositionVector",
        HAS_ELEMENT = "hasElement",
        HAS_DEFECT = "hasDefect",

        // Literal attributes
        HAS_ELEMENT_RATIO = "hasElementRatio",
        HAS_VOLUME = "hasVolume",
        HAS_NUMBER_OF_ATOMS = "hasNumberOfAtoms",
        HAS_LENGTH_X = "hasLength_x",
        HAS_LENGTH_Y = "hasLength_y",
        HAS_LENGTH_Z = "hasLength_z",
        HAS_COMPONENT_X = "hasComponent_x",
        HAS_COMPONENT_Y = "hasComponent_y",
        HAS_COMPONENT_Z = "hasComponent_z",
        HAS_ANGLE_ALPHA = "hasAngle_alpha",
        HAS_ANGLE_BETA = "hasAngle_beta",
        HAS_ANGLE_GAMMA = "hasAngle_gamma",
        HAS_ALT_NAME = "hasAltName",
        HAS_SPACE_GROUP_SYMBOL = "hasSpaceGroupSymbol",
        HAS_SPACE_GROUP_NUMBER = "hasSpaceGroupNumber",
        HAS_LATTICE_SYSTEM = "hasLatticeSystem",
        HAS_SYMBOL = "hasSymbol",
        HAS_COORDINATION_NUMBER = "hasCoordinationNumber",

        // Sequence position of vector and atom siblings; makes decode
        // ordering independent of store enumeration order.
        HAS_ORDINAL = "hasOrdinal",
    });
}

/// Plane Defect Ontology.
pub mod pldo {
    /// Namespace prefix for all PLDO terms.
    pub const NS: &str = "https://purls.helmholtz-metadaten.de/pldo/";

    terms!("https://purls.helmholtz-metadaten.de/pldo/" => {
        // Classes
        GRAIN_BOUNDARY = "GrainBoundary",
        TWIST_BOUNDARY = "TwistBoundary",
        TILT_BOUNDARY = "TiltBoundary",
        SYMMETRIC_TILT_BOUNDARY = "SymmetricTiltBoundary",
        MIXED_BOUNDARY = "MixedBoundary",
        GRAIN_BOUNDARY_PLANE = "GrainBoundaryPlane",
        ROTATION_AXIS = "RotationAxis",
        MISORIENTATION_ANGLE = "MisorientationAngle",

        // Edges and attributes
        HAS_SIGMA_VALUE = "hasSigmaValue",
        HAS_GB_PLANE = "hasGBPlane",
        HAS_MILLER_INDICES = "hasMillerIndices",
        HAS_ROTATION_AXIS = "hasRotationAxis",
        HAS_COMPONENT_X = "hasComponentX",
        HAS_COMPONENT_Y = "hasComponentY",
        HAS_COMPONENT_Z = "hasComponentZ",
        HAS_MISORIENTATION_ANGLE = "hasMisorientationAngle",
        HAS_ANGLE = "hasAngle",
    });
}

/// Point Defect Ontology.
pub mod podo {
    /// Namespace prefix for all PODO terms.
    pub const NS: &str = "https://purls.helmholtz-metadaten.de/podo/";

    terms!("https://purls.helmholtz-metadaten.de/podo/" => {
        VACANCY = "Vacancy",
        HAS_VACANCY_CONCENTRATION = "hasVacancyConcentration",
        HAS_NUMBER_OF_VACANCY = "hasNumberOfVacancy",
    });
}
