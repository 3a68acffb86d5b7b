use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlmanacError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid orbital elements: {0}")]
    InvalidOrbit(String),

    #[error("Missing orbital element field: {0}")]
    MissingOrbitalField(String),

    #[error("Ephemerides were read before being calculated")]
    EphemeridesNotCalculated,

    #[error("{solver} did not converge after {iterations} iterations")]
    NonConvergence {
        solver: &'static str,
        iterations: usize,
    },

    #[error("Value outside of its documented domain: {0}")]
    OutOfDomain(String),

    #[error("Invalid sexagesimal string: {0}")]
    InvalidSexagesimal(String),

    #[error("Malformed catalog record: {0}")]
    CatalogRecord(String),

    #[error("Unable to read the ΔT table: {0}")]
    DeltaTTable(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for AlmanacError {
    fn eq(&self, other: &Self) -> bool {
        use AlmanacError::*;
        match (self, other) {
            (InvalidCoordinate(a), InvalidCoordinate(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (InvalidOrbit(a), InvalidOrbit(b)) => a == b,
            (MissingOrbitalField(a), MissingOrbitalField(b)) => a == b,
            (OutOfDomain(a), OutOfDomain(b)) => a == b,
            (InvalidSexagesimal(a), InvalidSexagesimal(b)) => a == b,
            (CatalogRecord(a), CatalogRecord(b)) => a == b,
            (
                NonConvergence {
                    solver: s1,
                    iterations: i1,
                },
                NonConvergence {
                    solver: s2,
                    iterations: i2,
                },
            ) => s1 == s2 && i1 == i2,

            // Not comparable: equal when the variant matches
            (DeltaTTable(_), DeltaTTable(_)) => true,
            (IoError(_), IoError(_)) => true,

            (EphemeridesNotCalculated, EphemeridesNotCalculated) => true,

            _ => false,
        }
    }
}
