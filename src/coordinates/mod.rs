//! # Coordinate systems
//!
//! Typed angular coordinates and the conversions between the equatorial, ecliptical,
//! horizontal and galactic frames. Every angle is stored as a [`coordinate::Coordinate`] whose
//! range marker keeps it normalized.
//!
//! Conventions
//! -----------
//! * Longitudes of observers are **east positive**.
//! * Azimuths are counted **westward from the south**.
//! * Right ascensions are in hours, everything else in degrees.
pub mod coordinate;
pub mod ecliptical;
pub mod equatorial;
pub mod galactic;
pub mod geographical;
pub mod horizontal;
pub mod rectangular;

pub use coordinate::{Coordinate, CoordinateRange, DayHours, FullCircle, HalfCircle, Hemisphere};
pub use ecliptical::EclipticalCoordinates;
pub use equatorial::EquatorialCoordinates;
pub use galactic::GalacticCoordinates;
pub use geographical::GeographicalCoordinates;
pub use horizontal::HorizontalCoordinates;
pub use rectangular::RectangularCoordinates;
