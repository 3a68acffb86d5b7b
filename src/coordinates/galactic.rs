use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{Degree, RADEG};
use crate::coordinates::coordinate::{Coordinate, FullCircle, Hemisphere};
use crate::coordinates::equatorial::EquatorialCoordinates;

/// Right ascension of the north galactic pole (J2000), degrees
pub(crate) const NGP_RIGHT_ASCENSION: Degree = 192.85948;
/// Declination of the north galactic pole (J2000), degrees
pub(crate) const NGP_DECLINATION: Degree = 27.12825;
/// Galactic longitude of the north celestial pole (J2000), degrees
pub(crate) const NGP_LONGITUDE_OF_NCP: Degree = 122.93192;

/// Galactic longitude `[0, 360)` and latitude `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticCoordinates {
    longitude: Coordinate<FullCircle>,
    latitude: Coordinate<Hemisphere>,
}

impl GalacticCoordinates {
    pub fn new(longitude: Degree, latitude: Degree) -> Result<Self, AlmanacError> {
        if !Coordinate::<Hemisphere>::in_range(latitude) {
            return Err(AlmanacError::InvalidCoordinate(format!(
                "galactic latitude {latitude} outside [-90, 90]"
            )));
        }
        Ok(Self::from_parts(longitude, latitude))
    }

    pub(crate) fn from_parts(longitude: Degree, latitude: Degree) -> Self {
        GalacticCoordinates {
            longitude: Coordinate::new(longitude),
            latitude: Coordinate::new(latitude.clamp(-90.0, 90.0)),
        }
    }

    pub fn longitude(&self) -> Degree {
        self.longitude.value()
    }

    pub fn latitude(&self) -> Degree {
        self.latitude.value()
    }

    /// Convert to J2000 equatorial coordinates.
    ///
    /// Formula
    /// -------
    /// With `x = ℓ_NCP − ℓ`:
    ///
    /// ```text
    /// α = α_G + atan2(cos b sin x, sin b cos δ_G − cos b sin δ_G cos x)
    /// δ = asin(sin b sin δ_G + cos b cos δ_G cos x)
    /// ```
    pub fn to_equatorial(&self) -> EquatorialCoordinates {
        let b = self.latitude.to_radians();
        let x = (NGP_LONGITUDE_OF_NCP - self.longitude()) * RADEG;
        let pole = NGP_DECLINATION * RADEG;

        let y = (b.cos() * x.sin()).atan2(b.sin() * pole.cos() - b.cos() * pole.sin() * x.cos());
        let delta = (b.sin() * pole.sin() + b.cos() * pole.cos() * x.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let alpha = Coordinate::<FullCircle>::new(NGP_RIGHT_ASCENSION + y / RADEG);
        EquatorialCoordinates::from_parts(alpha.value() / 15.0, delta / RADEG)
    }
}
