//! # Photometry and visibility
//!
//! Pure formulas layered on the geometry produced by the propagators and the series:
//!
//! - [`magnitude_models`] – H-G (asteroids) and H-n (comets) apparent magnitudes,
//! - [`sky_brightness`] – conversions between naked-eye limiting magnitude (NELM), sky quality
//!   meter readings (SQM, mag/arcsec²) and the Bortle scale,
//! - [`contrast`] – surface brightness of extended objects and their contrast reserve in a
//!   telescope.
//!
//! None of these functions iterate; out-of-domain inputs raise
//! [`crate::almanac_errors::AlmanacError::OutOfDomain`].
pub mod contrast;
pub mod magnitude_models;
pub mod sky_brightness;
