pub mod almanac;
pub mod almanac_errors;
pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod delta_t;
pub mod earth_orientation;
pub mod kepler;
pub mod observation;
pub mod orbit_type;
pub mod photometry;
pub mod planets;
pub mod ref_system;
pub mod target;
pub mod time;
